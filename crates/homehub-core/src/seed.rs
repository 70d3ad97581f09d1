// ABOUTME: Provides the built-in device seed set and loads alternative seeds from JSON or YAML files.
// ABOUTME: Seeds are read once at startup; the hub never adds or removes devices afterwards.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{Device, DeviceId};

/// Errors that can occur while loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json seed error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml seed error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("device {0} has an empty name")]
    EmptyName(DeviceId),

    #[error("seeded device has a blank id")]
    BlankId,

    #[error("unsupported seed file extension: {0}")]
    UnsupportedFormat(String),
}

/// Seed ids may be written as strings or as small unsigned integers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedId {
    Number(u64),
    Text(String),
}

impl From<SeedId> for DeviceId {
    fn from(id: SeedId) -> Self {
        match id {
            SeedId::Number(n) => DeviceId::new(n.to_string()),
            SeedId::Text(s) => DeviceId::new(s),
        }
    }
}

/// On-disk shape of one seeded device. `state` defaults to off.
#[derive(Debug, Deserialize)]
struct SeedDevice {
    id: SeedId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    state: bool,
}

/// The devices a fresh hub starts with when no seed file is configured.
pub fn default_devices() -> Vec<Device> {
    vec![
        Device::new("1", "Dish Washer"),
        Device::new("2", "Garage Door"),
        Device::new("3", "Living Room Lights"),
    ]
}

/// Load a device list from `path`. The format follows the extension:
/// `.json`, `.yaml` or `.yml`.
pub fn load_seed_file(path: &Path) -> Result<Vec<Device>, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let entries: Vec<SeedDevice> = match extension.as_str() {
        "json" => serde_json::from_str(&raw)?,
        "yaml" | "yml" => serde_yaml::from_str(&raw)?,
        other => return Err(SeedError::UnsupportedFormat(other.to_string())),
    };

    let devices = entries
        .into_iter()
        .map(|entry| {
            let id = DeviceId::from(entry.id);
            if id.as_str().trim().is_empty() {
                return Err(SeedError::BlankId);
            }
            if entry.name.as_deref().is_some_and(str::is_empty) {
                return Err(SeedError::EmptyName(id));
            }
            Ok(Device {
                id,
                name: entry.name,
                state: entry.state,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("loaded {} devices from {}", devices.len(), path.display());
    Ok(devices)
}
