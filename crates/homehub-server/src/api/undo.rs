// ABOUTME: Undo API handler reverting the most recent valid device state change.
// ABOUTME: Returns the device as it is after the revert, or 400 when nothing is left to undo.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use homehub_core::Command;

use crate::api::error_response;
use crate::app_state::SharedState;

/// POST /undo - Undo the last state change whose device still exists.
pub async fn undo(State(state): State<SharedState>) -> impl IntoResponse {
    match state.hub.send_command(Command::Undo).await {
        Ok(device) => (StatusCode::OK, Json(device)).into_response(),
        Err(e) => error_response(e),
    }
}
