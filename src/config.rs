//! Runtime configuration for the todo core.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::todo::{adapters::remote::DEFAULT_SEED_ENDPOINT, services::DEFAULT_FIRST_LAUNCH_KEY};

/// Environment variable overriding [`TodoConfig::seed_endpoint`].
pub const SEED_ENDPOINT_ENV: &str = "TODOLIST_SEED_ENDPOINT";

/// Environment variable overriding [`TodoConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "TODOLIST_DATA_DIR";

/// Settings for wiring the file-backed todo service.
///
/// Every field has a default, so a JSON document only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Remote seed list endpoint.
    pub seed_endpoint: String,
    /// Directory holding the store and flag files.
    pub data_dir: Utf8PathBuf,
    /// File name of the record store inside `data_dir`.
    pub store_file: String,
    /// File name of the flag store inside `data_dir`.
    pub flags_file: String,
    /// Flag key recording that the first-launch seed was attempted.
    pub first_launch_key: String,
    /// Request timeout for the seed fetch; `None` keeps the transport default.
    pub request_timeout_secs: Option<u64>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            seed_endpoint: DEFAULT_SEED_ENDPOINT.to_owned(),
            data_dir: Utf8PathBuf::from(".todolist"),
            store_file: "todos.json".to_owned(),
            flags_file: "flags.json".to_owned(),
            first_launch_key: DEFAULT_FIRST_LAUNCH_KEY.to_owned(),
            request_timeout_secs: None,
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The path does not name a file.
    #[error("configuration path '{0}' has no file name")]
    MissingFileName(Utf8PathBuf),
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Read(Arc<std::io::Error>),
    /// The configuration document is not valid.
    #[error("failed to parse configuration: {0}")]
    Parse(Arc<serde_json::Error>),
}

impl TodoConfig {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|err| ConfigError::Parse(Arc::new(err)))
    }

    /// Reads and parses the JSON configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be opened, read or
    /// parsed.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::MissingFileName(path.to_owned()))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| ConfigError::Read(Arc::new(err)))?;
        let contents = dir
            .read_to_string(file_name)
            .map_err(|err| ConfigError::Read(Arc::new(err)))?;
        Self::from_json_str(&contents)
    }

    /// Applies overrides from the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up through `lookup`.
    ///
    /// Empty values are ignored.
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(endpoint) = non_empty(SEED_ENDPOINT_ENV) {
            self.seed_endpoint = endpoint;
        }
        if let Some(data_dir) = non_empty(DATA_DIR_ENV) {
            self.data_dir = Utf8PathBuf::from(data_dir);
        }
        self
    }

    /// Returns the seed request timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
