//! Error responses shared by the API routers

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::core::storage::StorageError;
use crate::core::validation::ValidationErrors;

/// Body of every non-2xx API response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid form data")]
    Validation(#[from] ValidationErrors),

    /// Request body could not be read at all, e.g. it exceeds the size limit
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// `message` is what the client sees; `source` is only logged
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ApiError {
    /// Map a storage failure to a 500 carrying a fixed client-facing message
    pub fn internal(message: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |source| ApiError::Internal { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, errors) = match self {
            ApiError::Validation(errors) => {
                tracing::debug!(issues = errors.issues().len(), "Request failed validation: {}", errors);
                (StatusCode::BAD_REQUEST, Some(errors))
            }
            ApiError::Rejected { status, .. } => {
                tracing::debug!(status = %status, "Request body rejected: {}", message);
                (status, None)
            }
            ApiError::Internal { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        (status, Json(ErrorBody { message, errors })).into_response()
    }
}
