use std::sync::Arc;

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    Json,
};
use common::types::Message;
use models::servicio::{Model, ServicioInput, Servicios};
use service::servicio::ServicioRepository;
use tracing::info;

use crate::errors::{JsonApiError, MSG_BAD_BODY, MSG_BAD_ID};

const MSG_QUERY_FAILED: &str = "Error al consultar los registros";
const MSG_CREATE_FAILED: &str = "Error al crear el registro";
const MSG_UPDATE_FAILED: &str = "Error al actualizar el registro";
const MSG_DELETE_FAILED: &str = "Error al eliminar el registro";
const MSG_UPDATED: &str = "Registro actualizado correctamente";
const MSG_DELETED: &str = "Registro eliminado correctamente";

#[derive(Clone)]
pub struct AppState {
    pub servicios: Arc<dyn ServicioRepository>,
}

fn id_from(path: Result<Path<i32>, PathRejection>) -> Result<i32, JsonApiError> {
    path.map(|Path(id)| id).map_err(|e| JsonApiError::bad_request(MSG_BAD_ID, e.body_text()))
}

fn body_from(body: Result<Json<ServicioInput>, JsonRejection>) -> Result<ServicioInput, JsonApiError> {
    body.map(|Json(input)| input).map_err(|e| JsonApiError::bad_request(MSG_BAD_BODY, e.body_text()))
}

#[utoipa::path(
    get, path = "/servicio", tag = "servicio",
    responses(
        (status = 200, description = "All records", body = crate::openapi::ServiciosDoc),
        (status = 500, description = "Query Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Servicios>, JsonApiError> {
    let rows = state
        .servicios
        .list()
        .await
        .map_err(|e| JsonApiError::from_service(MSG_QUERY_FAILED, e))?;
    Ok(Json(Servicios::from(rows)))
}

#[utoipa::path(
    get, path = "/servicio/{id}", tag = "servicio",
    params(("id" = i32, Path, description = "Record id")),
    responses(
        (status = 200, description = "Matching records, possibly empty", body = crate::openapi::ServiciosDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Query Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Servicios>, JsonApiError> {
    let id = id_from(path)?;
    let rows = state
        .servicios
        .get(id)
        .await
        .map_err(|e| JsonApiError::from_service(MSG_QUERY_FAILED, e))?;
    Ok(Json(Servicios::from(rows)))
}

#[utoipa::path(
    post, path = "/servicio", tag = "servicio",
    request_body = crate::openapi::ServicioInputDoc,
    responses(
        (status = 200, description = "Created; echoes the submitted fields with the new id", body = crate::openapi::ServicioDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ServicioInput>, JsonRejection>,
) -> Result<Json<Model>, JsonApiError> {
    let input = body_from(body)?;
    let created = state
        .servicios
        .create(input.clone())
        .await
        .map_err(|e| JsonApiError::from_service(MSG_CREATE_FAILED, e))?;
    info!(id = created.id, "created servicio");
    Ok(Json(input.with_id(created.id)))
}

#[utoipa::path(
    put, path = "/servicio/{id}", tag = "servicio",
    params(("id" = i32, Path, description = "Record id")),
    request_body = crate::openapi::ServicioInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed body or id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Update Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<ServicioInput>, JsonRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let id = id_from(path)?;
    let input = body_from(body)?;
    state
        .servicios
        .replace(id, input)
        .await
        .map_err(|e| JsonApiError::from_service(MSG_UPDATE_FAILED, e))?;
    info!(id, "updated servicio");
    Ok(Json(Message::new(MSG_UPDATED)))
}

#[utoipa::path(
    delete, path = "/servicio/{id}", tag = "servicio",
    params(("id" = i32, Path, description = "Record id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let id = id_from(path)?;
    state
        .servicios
        .delete(id)
        .await
        .map_err(|e| JsonApiError::from_service(MSG_DELETE_FAILED, e))?;
    info!(id, "deleted servicio");
    Ok(Json(Message::new(MSG_DELETED)))
}
