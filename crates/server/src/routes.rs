use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::servicios::{self, AppState};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Wrap a router with the HTTP trace layer shared by both services
pub fn with_tracing(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            // 每次请求创建 span，包含方法和路径等
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            .on_request(
                DefaultOnRequest::new()
                    .level(Level::INFO),
            )
            // 响应返回时打点，包含状态码与耗时
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            // 5xx 以 ERROR 记录
            .on_failure(
                DefaultOnFailure::new()
                    .level(Level::ERROR),
            )
    )
}

/// Build the record API router: CRUD over `/servicio`, health and API docs
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/servicio", get(servicios::list).post(servicios::create))
        .route(
            "/servicio/:id",
            get(servicios::get).put(servicios::replace).delete(servicios::delete),
        )
        .with_state(state);

    let docs = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    let router = Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(docs)
        .layer(cors);
    with_tracing(router)
}
