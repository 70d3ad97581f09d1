// ABOUTME: Shared application state for the homehub HTTP server.
// ABOUTME: Holds the hub actor handle; each AppState owns an isolated hub so tests never share state.

use std::sync::Arc;

use homehub_core::{Device, DeviceHub, DeviceHubHandle, DeviceStore, StoreError, spawn};

/// Shared application state accessible by all Axum handlers.
pub struct AppState {
    pub hub: DeviceHubHandle,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(hub: DeviceHubHandle) -> Self {
        Self { hub }
    }

    /// Seed a fresh store with `devices` and spawn a hub actor for it.
    /// Must be called from within a tokio runtime.
    pub fn with_devices(devices: Vec<Device>) -> Result<Self, StoreError> {
        let store = DeviceStore::from_devices(devices)?;
        tracing::info!("seeded hub with {} devices", store.len());
        Ok(Self::new(spawn(DeviceHub::new(store))))
    }
}
