use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::validation::FieldError;
use service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Error body returned by every handler: `{"message": "...", "errors": [...]}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Vec<FieldError>,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), errors: Vec::new() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self { Self::new(StatusCode::BAD_REQUEST, message) }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { message: self.message, errors: self.errors };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        let status = match &err {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::DuplicateName(_) | ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match err {
            ServiceError::Validation(errors) => {
                Self { status, message: service::validation::summarize(&errors), errors }
            }
            ServiceError::Db(ref detail) => {
                error!(code = err.code(), error = %detail, "storage failure");
                Self::new(status, "Internal server error")
            }
            other => Self::new(status, other.to_string()),
        }
    }
}

impl From<Vec<FieldError>> for JsonApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        warn!(fields = errors.len(), "request_rejected");
        ServiceError::from(errors).into()
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self { Self::bad_request(rejection.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self { Self::bad_request(rejection.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(rejection: QueryRejection) -> Self { Self::bad_request(rejection.body_text()) }
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
