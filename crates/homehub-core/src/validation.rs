// ABOUTME: Validates partial device update payloads before they reach the store.
// ABOUTME: Collects every field error at once and distinguishes absent fields from falsy values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::DeviceUpdate;

pub const NAME_NOT_STRING: &str = "name must be a string";
pub const NAME_EMPTY: &str = "name cannot be empty";
pub const STATE_NOT_BOOLEAN: &str = "state must be a boolean";
pub const BODY_NOT_OBJECT: &str = "body must be a JSON object";

/// Field name to error message, serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join(", "))
    }
}

/// Outcome of checking an update body.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: FieldErrors,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check each known field independently. A field set to `null` counts as
/// present with the wrong type.
pub fn check_fields(body: &Map<String, Value>) -> ValidationReport {
    let mut errors = FieldErrors::default();

    match body.get("name") {
        None => {}
        Some(Value::String(name)) if name.is_empty() => errors.insert("name", NAME_EMPTY),
        Some(Value::String(_)) => {}
        Some(_) => errors.insert("name", NAME_NOT_STRING),
    }

    match body.get("state") {
        None | Some(Value::Bool(_)) => {}
        Some(_) => errors.insert("state", STATE_NOT_BOOLEAN),
    }

    ValidationReport { errors }
}

/// Validate a raw request body and extract the typed update. Unknown
/// fields are ignored.
pub fn validate_update(body: &Value) -> Result<DeviceUpdate, FieldErrors> {
    let Some(fields) = body.as_object() else {
        let mut errors = FieldErrors::default();
        errors.insert("body", BODY_NOT_OBJECT);
        return Err(errors);
    };

    let report = check_fields(fields);
    if !report.is_valid() {
        return Err(report.errors);
    }

    Ok(DeviceUpdate {
        name: fields.get("name").and_then(Value::as_str).map(str::to_string),
        state: fields.get("state").and_then(Value::as_bool),
    })
}
