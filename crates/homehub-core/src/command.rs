// ABOUTME: Defines the Command enum for every write operation the hub actor accepts.
// ABOUTME: Commands carry the raw request body so lookup, validation, and mutation share one critical section.

use serde::{Deserialize, Serialize};

use crate::model::DeviceId;

/// A desired mutation of the hub, processed one at a time by the actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    PatchDevice {
        device_id: DeviceId,
        body: serde_json::Value,
    },
    Undo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_uses_type_tag() {
        let cmd = Command::PatchDevice {
            device_id: DeviceId::new("1"),
            body: serde_json::json!({ "state": false }),
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], "PatchDevice");
        assert_eq!(json["device_id"], "1");
        assert_eq!(json["body"]["state"], false);

        let undo: Command = serde_json::from_str(r#"{"type":"Undo"}"#).unwrap();
        assert!(matches!(undo, Command::Undo));
    }
}
