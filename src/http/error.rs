//! Error-kind to HTTP status mapping for the task API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::task::services::TaskServiceError;

/// HTTP-facing error for task endpoints.
///
/// Each variant maps one error kind from the service layer to a status
/// code; the JSON body always carries a `detail` message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The requested record does not exist. HTTP 404.
    #[error("{0}")]
    NotFound(String),

    /// The request payload failed validation. HTTP 422.
    #[error("{0}")]
    Validation(String),

    /// The storage backend failed. HTTP 500.
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    /// Standard body for missing task records, including records addressed
    /// by a malformed identifier.
    #[must_use]
    pub fn task_not_found() -> Self {
        Self::NotFound("Task not found".to_owned())
    }

    /// HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(source) => Self::Validation(source.to_string()),
            TaskServiceError::NotFound(_) => Self::task_not_found(),
            TaskServiceError::Storage(source) => {
                tracing::error!(error = %source, "storage failure");
                Self::Storage("Internal server error".to_owned())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "detail": self.to_string() });
        (status, Json(body)).into_response()
    }
}
