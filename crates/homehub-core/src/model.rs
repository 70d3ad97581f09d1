// ABOUTME: Defines the Device record, its identifier, and the validated partial update type.
// ABOUTME: These are the shared data shapes passed between the store, the hub, and the HTTP layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a device for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DeviceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A named entity with a boolean on/off state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub state: bool,
}

impl Device {
    /// Create a device that starts switched off.
    pub fn new(id: impl Into<DeviceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            state: false,
        }
    }

    pub fn with_state(mut self, state: bool) -> Self {
        self.state = state;
        self
    }
}

/// A validated partial update. `None` means the field was absent from the
/// request; `Some(false)` is a real update to "off".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceUpdate {
    pub name: Option<String>,
    pub state: Option<bool>,
}

impl DeviceUpdate {
    pub fn state(state: bool) -> Self {
        Self {
            name: None,
            state: Some(state),
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            state: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.state.is_none()
    }
}
