//! Configuration file loading
//!
//! Handles loading configuration from TOML files.

use crate::config::Config;
use crate::constants;
use crate::error::ConfigError;

use std::path::{Path, PathBuf};

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the first default location that parses
    pub fn load_default() -> Option<Config> {
        for path in Self::default_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return Some(config);
                }
                Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
            }
        }
        None
    }

    /// Get default configuration file paths
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // User config
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(constants::PROGRAM_NAME).join("config.toml"));
        }

        // Current directory
        paths.push(PathBuf::from(format!("{}.toml", constants::PROGRAM_NAME)));
        paths.push(PathBuf::from(format!(".{}.toml", constants::PROGRAM_NAME)));

        paths
    }
}
