//! Folder settings data structures.

use serde::Serialize;
use serde_json::{Map, Value};

/// Key for the default data folder in the config file.
pub const DEFAULT_DATA_FOLDER_KEY: &str = "defaultDataFolder";

/// Older spelling of [`DEFAULT_DATA_FOLDER_KEY`], still honoured.
pub const DEFAULT_EPW_FOLDER_KEY: &str = "default_epw_folder";

/// Prefix marking keys as comments or metadata.
pub const RESERVED_PREFIX: &str = "__";

/// Folder settings read from a config file, before fallback resolution.
///
/// An empty value means "unset"; the owner of the settings decides what the
/// effective folder is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderSettings {
    /// Folder where EPW weather files are stored.
    pub default_data_folder: String,
}

impl FolderSettings {
    /// Builds settings from the top-level object of a config file.
    ///
    /// Keys starting with `__`, unknown keys, non-string values and values
    /// that are blank after trimming leave the defaults untouched.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let mut settings = Self::default();
        let mut alias = None;

        for (key, value) in object {
            if key.starts_with(RESERVED_PREFIX) {
                continue;
            }

            let Some(text) = value.as_str() else {
                tracing::debug!(key = %key, "Ignoring non-string config value");
                continue;
            };

            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }

            match key.as_str() {
                DEFAULT_DATA_FOLDER_KEY => settings.default_data_folder = trimmed.to_string(),
                DEFAULT_EPW_FOLDER_KEY => alias = Some(trimmed.to_string()),
                _ => tracing::debug!(key = %key, "Ignoring unrecognized config key"),
            }
        }

        if settings.default_data_folder.is_empty() {
            if let Some(folder) = alias {
                settings.default_data_folder = folder;
            }
        }

        settings
    }

    /// Returns the configured data folder, or `None` when unset.
    pub fn data_folder(&self) -> Option<&str> {
        if self.default_data_folder.is_empty() {
            None
        } else {
            Some(&self.default_data_folder)
        }
    }
}
