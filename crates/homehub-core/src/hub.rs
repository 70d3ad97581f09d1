// ABOUTME: DeviceHub bundles the device store and the event log into one unit of consistency.
// ABOUTME: Implements partial updates that record state changes and the skip-dangling undo engine.

use thiserror::Error;

use crate::event::{DeviceEvent, EventLog};
use crate::model::{Device, DeviceId, DeviceUpdate};
use crate::store::DeviceStore;
use crate::validation::{FieldErrors, validate_update};

/// Request-scoped outcomes that are not a success. None of these are fatal.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("device id is missing")]
    MissingId,

    #[error("device not found: {0}")]
    DeviceNotFound(DeviceId),

    #[error("invalid update: {0}")]
    Validation(FieldErrors),

    #[error("no action to undo")]
    NothingToUndo,

    #[error("hub channel closed")]
    ChannelClosed,
}

/// Current device state plus the history needed to revert it.
#[derive(Debug, Clone, Default)]
pub struct DeviceHub {
    store: DeviceStore,
    log: EventLog,
}

impl DeviceHub {
    pub fn new(store: DeviceStore) -> Self {
        Self {
            store,
            log: EventLog::new(),
        }
    }

    /// Assemble a hub from an existing store and log. Events in `log` may
    /// reference ids the store does not hold; undo skips them.
    pub fn from_parts(store: DeviceStore, log: EventLog) -> Self {
        Self { store, log }
    }

    pub fn store(&self) -> &DeviceStore {
        &self.store
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn list(&self) -> Vec<Device> {
        self.store.list()
    }

    pub fn get(&self, id: &DeviceId) -> Result<&Device, HubError> {
        self.store
            .get(id)
            .ok_or_else(|| HubError::DeviceNotFound(id.clone()))
    }

    /// Apply an already validated update. An event is appended only when
    /// `state` is present and differs from the stored value.
    pub fn update_device(
        &mut self,
        id: &DeviceId,
        update: DeviceUpdate,
    ) -> Result<Device, HubError> {
        let current = self.get(id)?.state;

        if let Some(new_state) = update.state
            && new_state != current
        {
            self.log.append(DeviceEvent::new(id.clone(), new_state));
            tracing::info!(device_id = %id, from = current, to = new_state, "device state changed");
        }

        self.store
            .update(id, &update)
            .cloned()
            .ok_or_else(|| HubError::DeviceNotFound(id.clone()))
    }

    /// Look up the device, validate the raw body, then apply it. Any
    /// failure returns before the store or log is touched.
    pub fn patch_device(
        &mut self,
        id: &DeviceId,
        body: &serde_json::Value,
    ) -> Result<Device, HubError> {
        if id.as_str().trim().is_empty() {
            return Err(HubError::MissingId);
        }
        self.get(id)?;
        let update = validate_update(body).map_err(HubError::Validation)?;
        self.update_device(id, update)
    }

    /// Pop events from the tail until one references a device that still
    /// exists. Events for missing devices are dropped for good. The
    /// returned event is already removed from the log.
    pub fn find_last_valid_action(&mut self) -> Option<DeviceEvent> {
        while let Some(event) = self.log.pop_latest() {
            if self.store.contains(&event.device_id) {
                return Some(event);
            }
            tracing::debug!(device_id = %event.device_id, "discarding event for missing device");
        }
        None
    }

    /// Revert the most recent valid state change and return the device as
    /// it is after the revert. Only `state` is restored; the undo itself
    /// is not recorded.
    pub fn undo_last_action(&mut self) -> Option<Device> {
        let event = self.find_last_valid_action()?;
        let reverted = event.reverted_state();
        let device = self.store.set_state(&event.device_id, reverted)?.clone();
        tracing::info!(device_id = %device.id, state = reverted, "undid last state change");
        Some(device)
    }
}
