//! Configuration system
//!
//! Handles TOML config file parsing and merging with built-in constants.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::constants;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Narrowest help width accepted
pub const MIN_HELP_WIDTH: usize = 20;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Version and copyright information
    pub about: AboutConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Program name shown in usage and version output
    pub program_name: String,
    /// Column width for help text
    pub help_width: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            program_name: constants::PROGRAM_NAME.to_string(),
            help_width: constants::HELP_WIDTH,
        }
    }
}

/// Version and copyright configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AboutConfig {
    /// Version string printed by `--version`
    pub version: String,
    /// Footer printed at the end of the help text
    pub copyright: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            version: constants::VERSION.to_string(),
            copyright: constants::COPYRIGHT.to_string(),
        }
    }
}

impl Config {
    /// Check values that would produce unusable output
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the offending key
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.program_name.trim().is_empty() {
            return Err(invalid("general.program_name", "must not be empty"));
        }
        if self.general.help_width < MIN_HELP_WIDTH {
            return Err(invalid(
                "general.help_width",
                &format!("must be at least {MIN_HELP_WIDTH}"),
            ));
        }
        if self.about.version.trim().is_empty() {
            return Err(invalid("about.version", "must not be empty"));
        }
        Ok(())
    }

    /// Message printed by `--version`
    pub fn version_line(&self) -> String {
        format!("{} version {}", self.general.program_name, self.about.version)
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}
