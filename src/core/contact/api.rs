//! Contact API endpoints
//!
//! Provides REST API endpoints for the contact form:
//! - POST /api/contact - Submit a message
//! - GET /api/contact - List received messages

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::core::error::ApiError;
use crate::core::models::{ContactMessage, Id};
use crate::core::storage::Storage;
use crate::core::validation::{FieldError, ValidationErrors, validate_contact};

/// Confirmation shown to the visitor after a successful submission
pub const CONTACT_CONFIRMATION: &str =
    "Message sent successfully! I'll get back to you within 24 hours.";

const SEND_FAILED: &str = "Failed to send message. Please try again later.";
const FETCH_FAILED: &str = "Failed to fetch contact messages";

/// Contact API state containing the shared store
#[derive(Clone)]
pub struct ContactApiState {
    pub storage: Arc<dyn Storage>,
}

/// Response for an accepted submission
#[derive(Debug, Serialize)]
pub struct ContactCreatedResponse {
    pub success: bool,
    pub message: String,
    pub id: Id,
}

/// Create the contact API router
pub fn contact_api_router(state: ContactApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route(
            "/api/contact",
            get(list_messages_handler).post(create_message_handler),
        )
        .with_state(state)
}

/// POST /api/contact
/// Validate and store a contact form submission
async fn create_message_handler(
    State(state): State<Arc<ContactApiState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactCreatedResponse>), ApiError> {
    let Json(body) = payload.map_err(classify_rejection)?;

    let new_message = validate_contact(&body)?;

    let message = state
        .storage
        .create_contact_message(new_message)
        .await
        .map_err(ApiError::internal(SEND_FAILED))?;

    tracing::info!(message_id = message.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse {
            success: true,
            message: CONTACT_CONFIRMATION.to_string(),
            id: message.id,
        }),
    ))
}

/// Bad JSON or content type is the client's form data being wrong: 400 with
/// issues. Anything else (oversized body, broken stream) keeps axum's status.
fn classify_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonSyntaxError(_)
        | JsonRejection::JsonDataError(_)
        | JsonRejection::MissingJsonContentType(_) => ApiError::Validation(
            ValidationErrors::single(FieldError::malformed_body(rejection.body_text())),
        ),
        other => ApiError::Rejected {
            status: other.status(),
            message: other.body_text(),
        },
    }
}

/// GET /api/contact
async fn list_messages_handler(
    State(state): State<Arc<ContactApiState>>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let messages = state
        .storage
        .get_contact_messages()
        .await
        .map_err(ApiError::internal(FETCH_FAILED))?;

    Ok(Json(messages))
}
