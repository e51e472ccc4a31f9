use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Failures surfaced to HTTP clients as single-line plain-text bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Address not found")]
    NotFound,
    #[error("Error reading file")]
    Read,
    #[error("Error writing file")]
    Write,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Read | ApiError::Write => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Read(_) | ServiceError::Corrupt(_) => {
                error!(error = %e, "address collection read failed");
                ApiError::Read
            }
            ServiceError::Write(_) => {
                error!(error = %e, "address collection write failed");
                ApiError::Write
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
