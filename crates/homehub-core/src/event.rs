// ABOUTME: Defines DeviceEvent and the append-only EventLog consumed by the undo engine.
// ABOUTME: An event records the state value that was applied, so undo restores its negation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::DeviceId;

/// An immutable record of one state change. `state` holds the value that
/// was written, not the value it replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEvent {
    pub device_id: DeviceId,
    pub state: bool,
    pub recorded_at: DateTime<Utc>,
}

impl DeviceEvent {
    pub fn new(device_id: DeviceId, state: bool) -> Self {
        Self {
            device_id,
            state,
            recorded_at: Utc::now(),
        }
    }

    /// The state that undoing this event writes back.
    pub fn reverted_state(&self) -> bool {
        !self.state
    }
}

/// Ordered sequence of state-change events. Appended at the tail and
/// consumed most-recent-first; entries are never edited in place.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<DeviceEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, event: DeviceEvent) {
        self.events.push(event);
    }

    /// Remove and return the most recently appended event.
    pub fn pop_latest(&mut self) -> Option<DeviceEvent> {
        self.events.pop()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &DeviceEvent> {
        self.events.iter()
    }
}
