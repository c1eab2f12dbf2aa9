//! Configuration loading and management
//!
//! Handles parsing of `.todotxt.toml` configuration files.

use serde::Deserialize;
use std::path::Path;

use crate::locate::DEFAULT_FILE_NAME;

/// Name of the optional configuration file in the search root
pub const CONFIG_FILE: &str = ".todotxt.toml";

/// Deepest directory search allowed in configuration
pub const MAX_SEARCH_DEPTH: usize = 32;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Backing file configuration
    #[serde(default)]
    pub store: StoreConfig,
}

/// Where the task store looks for its backing file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// Name of the backing file
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// How many directory levels below the search root to look
    #[serde(default)]
    pub search_depth: usize,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            search_depth: 0,
        }
    }
}

impl StoreConfig {
    fn validate(&self) -> crate::error::Result<()> {
        let name = self.file_name.trim();
        if name.is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "store.file_name cannot be empty".to_string(),
            ));
        }
        if name.contains(&['/', '\\'][..]) {
            return Err(crate::error::Error::InvalidConfig(format!(
                "store.file_name '{name}' must be a bare file name"
            )));
        }
        if self.search_depth > MAX_SEARCH_DEPTH {
            return Err(crate::error::Error::InvalidConfig(format!(
                "store.search_depth must be <= {MAX_SEARCH_DEPTH}"
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a `.todotxt.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load(&config_path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %config_path.display(), error = %err, "ignoring invalid config");
                Self::default()
            }
        }
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.store.validate()
    }
}
