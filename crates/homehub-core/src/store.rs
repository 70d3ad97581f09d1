// ABOUTME: In-memory device store mapping DeviceId to Device.
// ABOUTME: Owns the current truth of device state and applies partial updates in place.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::{Device, DeviceId, DeviceUpdate};

/// Errors raised while building a store from a seed set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate device id: {0}")]
    DuplicateId(DeviceId),

    #[error("device id is blank")]
    BlankId,
}

/// Devices keyed by id. Listing follows id order.
#[derive(Debug, Clone, Default)]
pub struct DeviceStore {
    devices: BTreeMap<DeviceId, Device>,
}

impl DeviceStore {
    /// Build a store from a seed set, rejecting blank or repeated ids.
    pub fn from_devices(devices: impl IntoIterator<Item = Device>) -> Result<Self, StoreError> {
        let mut map = BTreeMap::new();
        for device in devices {
            if device.id.as_str().trim().is_empty() {
                return Err(StoreError::BlankId);
            }
            if map.contains_key(&device.id) {
                return Err(StoreError::DuplicateId(device.id));
            }
            map.insert(device.id.clone(), device);
        }
        Ok(Self { devices: map })
    }

    pub fn get(&self, id: &DeviceId) -> Option<&Device> {
        self.devices.get(id)
    }

    pub fn contains(&self, id: &DeviceId) -> bool {
        self.devices.contains_key(id)
    }

    pub fn list(&self) -> Vec<Device> {
        self.devices.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Apply the fields present in `update`, leaving the rest untouched.
    pub fn update(&mut self, id: &DeviceId, update: &DeviceUpdate) -> Option<&Device> {
        let device = self.devices.get_mut(id)?;
        if let Some(name) = &update.name {
            device.name = Some(name.clone());
        }
        if let Some(state) = update.state {
            device.state = state;
        }
        Some(device)
    }

    pub fn set_state(&mut self, id: &DeviceId, state: bool) -> Option<&Device> {
        let device = self.devices.get_mut(id)?;
        device.state = state;
        Some(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> DeviceStore {
        DeviceStore::from_devices(vec![
            Device::new("1", "Dish Washer"),
            Device::new("2", "Garage Door"),
        ])
        .unwrap()
    }

    #[test]
    fn from_devices_rejects_duplicates() {
        let result = DeviceStore::from_devices(vec![
            Device::new("1", "Lamp"),
            Device::new("1", "Other Lamp"),
        ]);
        assert_eq!(result.unwrap_err(), StoreError::DuplicateId(DeviceId::new("1")));
    }

    #[test]
    fn from_devices_rejects_blank_id() {
        let result = DeviceStore::from_devices(vec![Device::new(" ", "Ghost")]);
        assert_eq!(result.unwrap_err(), StoreError::BlankId);
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut store = seeded();
        let id = DeviceId::new("1");

        let device = store.update(&id, &DeviceUpdate::state(true)).unwrap();
        assert!(device.state);
        assert_eq!(device.name.as_deref(), Some("Dish Washer")); // unchanged

        let device = store.update(&id, &DeviceUpdate::name("Dryer")).unwrap();
        assert_eq!(device.name.as_deref(), Some("Dryer"));
        assert!(device.state); // unchanged
    }

    #[test]
    fn update_unknown_device_returns_none() {
        let mut store = seeded();
        assert!(store.update(&DeviceId::new("9"), &DeviceUpdate::state(true)).is_none());
        assert!(store.set_state(&DeviceId::new("9"), true).is_none());
    }

    #[test]
    fn list_is_ordered_and_repeatable() {
        let store = seeded();
        let first = store.list();
        let second = store.list();
        assert_eq!(first, second);
        let ids: Vec<&str> = first.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
