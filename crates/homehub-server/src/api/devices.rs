// ABOUTME: Device API handlers for listing, reading, and partially updating devices.
// ABOUTME: Updates are forwarded to the hub actor so lookup, validation, and mutation happen atomically.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use homehub_core::{Command, Device, DeviceId};

use crate::api::{MISSING_ID_MESSAGE, error_response, message_response};
use crate::app_state::SharedState;

/// GET / - List all devices with their ids.
pub async fn list_devices(State(state): State<SharedState>) -> Json<Vec<Device>> {
    let hub = state.hub.read_state().await;
    Json(hub.list())
}

/// GET /{id} - Read a single device.
pub async fn get_device(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let hub = state.hub.read_state().await;
    match hub.get(&DeviceId::new(id)) {
        Ok(device) => Json(device.clone()).into_response(),
        Err(e) => error_response(e),
    }
}

/// PATCH / - No device id in the path.
pub async fn missing_id() -> impl IntoResponse {
    message_response(StatusCode::BAD_REQUEST, MISSING_ID_MESSAGE)
}

/// PATCH /{id} - Apply a partial update of `name` and/or `state`.
pub async fn patch_device(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!("rejected PATCH body for device {}: {}", id, rejection);
            return message_response(StatusCode::BAD_REQUEST, &rejection.body_text());
        }
    };

    let cmd = Command::PatchDevice {
        device_id: DeviceId::new(id),
        body,
    };

    match state.hub.send_command(cmd).await {
        Ok(device) => (StatusCode::OK, Json(device)).into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::{AppState, SharedState};
    use crate::routes::create_router;
    use axum::body::Body;
    use axum::http::StatusCode;
    use homehub_core::default_devices;
    use http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> SharedState {
        Arc::new(AppState::with_devices(default_devices()).unwrap())
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn patch(
        state: &SharedState,
        uri: &str,
        body: serde_json::Value,
    ) -> axum::response::Response {
        create_router(Arc::clone(state))
            .oneshot(
                Request::patch(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn list_returns_seeded_devices_with_ids() {
        let state = test_state();
        let resp = create_router(Arc::clone(&state))
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        let devices = json.as_array().unwrap();
        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0]["id"], "1");
        assert_eq!(devices[0]["name"], "Dish Washer");
        assert_eq!(devices[0]["state"], false);
    }

    #[tokio::test]
    async fn get_unknown_device_returns_404() {
        let state = test_state();
        let resp = create_router(state)
            .oneshot(Request::get("/99").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(resp).await["message"], "Device not found");
    }

    #[tokio::test]
    async fn patch_updates_state_and_name() {
        let state = test_state();
        let resp = patch(
            &state,
            "/2",
            serde_json::json!({ "name": "Front Gate", "state": true }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["id"], "2");
        assert_eq!(json["name"], "Front Gate");
        assert_eq!(json["state"], true);
    }

    #[tokio::test]
    async fn patch_unknown_device_returns_404() {
        let state = test_state();
        let resp = patch(&state, "/42", serde_json::json!({ "state": true })).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(resp).await["message"], "Device not found");
    }

    #[tokio::test]
    async fn patch_invalid_body_returns_all_field_errors() {
        let state = test_state();
        let resp = patch(
            &state,
            "/1",
            serde_json::json!({ "name": "", "state": "notabool" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = json_body(resp).await;
        assert_eq!(json["errors"]["name"], "name cannot be empty");
        assert_eq!(json["errors"]["state"], "state must be a boolean");

        // Nothing was applied.
        let hub = state.hub.read_state().await;
        assert!(hub.log().is_empty());
        assert_eq!(hub.list()[0].name.as_deref(), Some("Dish Washer"));
    }

    #[tokio::test]
    async fn patch_without_id_returns_400() {
        let state = test_state();
        let resp = patch(&state, "/", serde_json::json!({ "state": true })).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["message"], "Device ID is missing");
    }

    #[tokio::test]
    async fn patch_malformed_json_returns_400() {
        let state = test_state();
        let resp = create_router(Arc::clone(&state))
            .oneshot(
                Request::patch("/1")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(resp).await["message"].is_string());
    }

    #[tokio::test]
    async fn patch_false_state_is_a_real_update() {
        let state = test_state();
        patch(&state, "/3", serde_json::json!({ "state": true })).await;

        let resp = patch(&state, "/3", serde_json::json!({ "state": false })).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["state"], false);

        let hub = state.hub.read_state().await;
        assert_eq!(hub.log().len(), 2);
    }
}
