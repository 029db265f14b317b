use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use service::errors::ServiceError;

/// Every failure a handler can return, rendered at one place.
#[derive(Debug)]
pub enum ApiError {
    /// Known condition with an explicit status: `{"error": {"message", "status"}}`.
    Classified { message: String, status: StatusCode },
    /// Store failure passed through as `{"message"}` with 500.
    Unclassified(String),
}

impl ApiError {
    pub fn classified(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Classified { message: message.into(), status }
    }

    /// Unknown route or method.
    pub fn route_not_found() -> Self {
        Self::classified(StatusCode::NOT_FOUND, "Not Found")
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Classified { status, .. } => *status,
            Self::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MissingInputs | ServiceError::NotFound(_) => {
                Self::classified(StatusCode::NOT_FOUND, err.to_string())
            }
            ServiceError::Store(message) => Self::Unclassified(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Classified { message, status } => {
                warn!(status = status.as_u16(), %message, "request failed");
                let body = json!({ "error": { "message": message, "status": status.as_u16() } });
                (status, Json(body)).into_response()
            }
            Self::Unclassified(message) => {
                error!(%message, "unclassified failure");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": message }))).into_response()
            }
        }
    }
}
