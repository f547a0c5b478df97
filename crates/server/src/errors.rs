use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const MSG_BAD_BODY: &str = "Error al parsear el cuerpo de la solicitud";
pub const MSG_BAD_ID: &str = "Identificador inválido";
pub const MSG_NOT_FOUND: &str = "Registro no encontrado";

/// JSON error body: `{"message": ..., "error": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub error: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, error: Option<String>) -> Self {
        Self { status, message: message.into(), error }
    }

    pub fn bad_request(message: &str, error: impl ToString) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, Some(error.to_string()))
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, MSG_NOT_FOUND, None)
    }

    /// Map a repository failure: `NotFound` becomes 404, everything else 500 with the raw text.
    pub fn from_service(message: &str, e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => Self::not_found(),
            other => {
                error!(err = %other, "{message}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, Some(other.to_string()))
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { message: &self.message, error: self.error.as_deref() };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_from_service_is_404_without_detail() {
        let err = JsonApiError::from_service("Error al eliminar el registro", ServiceError::not_found("servicio"));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, MSG_NOT_FOUND);
        assert!(err.error.is_none());
    }

    #[test]
    fn db_failure_keeps_raw_text() {
        let err = JsonApiError::from_service("Error al crear el registro", ServiceError::Db("disk I/O error".into()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Error al crear el registro");
        assert_eq!(err.error.as_deref(), Some("disk I/O error"));
    }
}
