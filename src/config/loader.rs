//! Configuration file loading and parsing.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::model::FolderSettings;
use crate::error::ConfigError;

/// File name of the config file shipped with this crate.
pub const BUNDLED_CONFIG_NAME: &str = "config.json";

/// Contents of the bundled config file, embedded at build time.
pub const BUNDLED_CONFIG: &str = include_str!("../../config.json");

/// Outcome of parsing a config file that exists and could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file parsed and its settings were applied.
    Clean,
    /// The file could not be parsed; every setting kept its default.
    Degraded { message: String },
}

impl LoadStatus {
    /// Returns true if the load fell back to default settings.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// Settings read from a config file together with how the read went.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: FolderSettings,
    pub status: LoadStatus,
}

/// Where the bundled config file lives in the source tree.
///
/// Only a label for diagnostics; [`load_bundled`] never reads it.
pub fn bundled_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(BUNDLED_CONFIG_NAME)
}

/// Extracts folder settings from the embedded bundled config.
pub fn load_bundled() -> LoadedSettings {
    parse_content(&bundled_config_path(), BUNDLED_CONFIG)
}

/// Reads the config file at `path` and extracts folder settings.
///
/// A missing or unreadable file is an error. Content that is not a JSON
/// object degrades to default settings instead.
pub fn load_from_path(path: &Path) -> Result<LoadedSettings, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_content(path, &content))
}

/// Parses config file content, degrading to defaults on malformed input.
fn parse_content(path: &Path, content: &str) -> LoadedSettings {
    let parsed = serde_json::from_str::<Value>(content)
        .map_err(|e| e.to_string())
        .and_then(|value| match value {
            Value::Object(object) => Ok(object),
            other => Err(format!("expected a JSON object, found {}", json_kind(&other))),
        });

    match parsed {
        Ok(object) => LoadedSettings {
            settings: FolderSettings::from_json_object(&object),
            status: LoadStatus::Clean,
        },
        Err(error) => LoadedSettings {
            settings: FolderSettings::default(),
            status: LoadStatus::Degraded {
                message: format!(
                    "Failed to load paths from {}. They will be set to defaults instead: {}",
                    path.display(),
                    error
                ),
            },
        },
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
