//! Static asset server with one canned endpoint.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::routes::with_tracing;

/// Constant payload for `GET /users`.
pub fn users_payload() -> Value {
    json!({
        "users": [
            { "id": 1, "nombre": "Ana", "correo": "ana@example.com" },
            { "id": 2, "nombre": "Luis", "correo": "luis@example.com" }
        ]
    })
}

async fn users() -> Json<Value> {
    Json(users_payload())
}

/// `/users` plus every file under `root`, served verbatim.
pub fn build_mock_router(root: &str, cors: CorsLayer) -> Router {
    let router = Router::new()
        .route("/users", get(users))
        .fallback_service(ServeDir::new(root))
        .layer(cors);
    with_tracing(router)
}
