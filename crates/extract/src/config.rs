use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::error;

use siphon_core::ConnectParams;

use crate::error::ExtractError;

/// Source config keys that must be present and non-empty before a
/// connection attempt is made. Validation reports missing keys in this
/// order.
pub const REQUIRED_SOURCE_KEYS: [&str; 5] =
    ["user", "password", "conn_string", "driver_name", "driver_file"];

/// The `source` section of a job configuration.
///
/// Every field defaults to an empty string so that a job file with
/// missing keys still deserializes; [`SourceConfig::validate`] then
/// reports all missing keys at once instead of failing on the first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    /// Driver-specific connection URL.
    #[serde(default)]
    pub conn_string: String,
    /// Fully qualified driver class name.
    #[serde(default)]
    pub driver_name: String,
    /// Filesystem path to the driver binary/archive.
    #[serde(default)]
    pub driver_file: String,
    /// Human-readable source label, used only in log messages.
    #[serde(default)]
    pub source_name: String,
    /// Keys this step does not interpret, preserved in insertion order
    /// for the rest of the pipeline.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl SourceConfig {
    fn required_value(&self, key: &str) -> &str {
        match key {
            "user" => &self.user,
            "password" => &self.password,
            "conn_string" => &self.conn_string,
            "driver_name" => &self.driver_name,
            "driver_file" => &self.driver_file,
            _ => "",
        }
    }

    /// Check that every required key is present and non-empty.
    ///
    /// On failure, the error lists all missing keys in
    /// [`REQUIRED_SOURCE_KEYS`] order.
    pub fn validate(&self) -> Result<(), ExtractError> {
        let missing: Vec<String> = REQUIRED_SOURCE_KEYS
            .iter()
            .filter(|key| self.required_value(key).is_empty())
            .map(|key| key.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ExtractError::MissingConfig { keys: missing })
        }
    }

    /// Driver-bridge parameters for this source.
    pub fn connect_params(&self) -> ConnectParams<'_> {
        ConnectParams {
            driver_name: &self.driver_name,
            conn_string: &self.conn_string,
            user: &self.user,
            password: &self.password,
            driver_file: &self.driver_file,
        }
    }
}

/// A pipeline job configuration.
///
/// Only the `source` section is interpreted by this step; sibling
/// sections (targets, schedules, whatever the pipeline defines) pass
/// through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(flatten)]
    pub rest: IndexMap<String, serde_json::Value>,
}

impl JobConfig {
    /// Load a job configuration from a JSON or YAML file.
    ///
    /// `.yaml`/`.yml` extensions parse as YAML, everything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| {
            error!(path = %path.display(), error = %source, "failed to read job config");
            ExtractError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let parsed: Result<Self, String> = if is_yaml {
            serde_yaml::from_str(&text).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&text).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| {
            error!(path = %path.display(), error = %message, "failed to parse job config");
            ExtractError::ConfigParse {
                path: path.to_path_buf(),
                message,
            }
        })
    }
}
