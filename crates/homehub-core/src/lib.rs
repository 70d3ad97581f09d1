// ABOUTME: Core library for homehub: devices, the state-change event log, and the undo engine.
// ABOUTME: Also hosts the hub actor that serializes mutations and the startup seed loader.

pub mod actor;
pub mod command;
pub mod event;
pub mod hub;
pub mod model;
pub mod seed;
pub mod store;
pub mod validation;

pub use actor::{DeviceHubHandle, spawn};
pub use command::Command;
pub use event::{DeviceEvent, EventLog};
pub use hub::{DeviceHub, HubError};
pub use model::{Device, DeviceId, DeviceUpdate};
pub use seed::{SeedError, default_devices, load_seed_file};
pub use store::{DeviceStore, StoreError};
pub use validation::{FieldErrors, ValidationReport, validate_update};
