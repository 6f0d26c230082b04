//! Configuration builder
//!
//! Merges configuration from files over the built-in defaults.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file, or the default locations when no
    /// path is given
    pub fn with_file(mut self, path: Option<&str>) -> Self {
        let file_config = match path {
            Some(path) => match ConfigFile::load(path) {
                Ok(cfg) => {
                    log::info!("Loaded config from {}", path);
                    Some(cfg)
                }
                Err(e) => {
                    log::warn!("Ignoring config {}: {}", path, e);
                    None
                }
            },
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        self
    }

    /// Validate and return the final configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
