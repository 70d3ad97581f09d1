// ABOUTME: API module containing the HTTP handler functions for the homehub REST API.
// ABOUTME: Also maps hub outcomes onto status codes and JSON error bodies.

pub mod devices;
pub mod undo;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use homehub_core::HubError;

pub const MISSING_ID_MESSAGE: &str = "Device ID is missing";
pub const NOT_FOUND_MESSAGE: &str = "Device not found";
pub const NOTHING_TO_UNDO_MESSAGE: &str = "No action to undo";

/// Build a `{"message": ...}` response with the given status.
pub(crate) fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}

/// Translate a hub error into its client-visible response.
pub(crate) fn error_response(err: HubError) -> Response {
    match err {
        HubError::MissingId => message_response(StatusCode::BAD_REQUEST, MISSING_ID_MESSAGE),
        HubError::DeviceNotFound(_) => message_response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
        HubError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "errors": errors })),
        )
            .into_response(),
        HubError::NothingToUndo => {
            message_response(StatusCode::BAD_REQUEST, NOTHING_TO_UNDO_MESSAGE)
        }
        HubError::ChannelClosed => {
            tracing::error!("hub actor is no longer running");
            message_response(StatusCode::INTERNAL_SERVER_ERROR, "hub unavailable")
        }
    }
}
