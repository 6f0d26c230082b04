//! Unified error types for app
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration loading/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error while building the option set
    #[error("Option definition error: {0}")]
    Option(#[from] OptionError),

    /// IO error (writing to the console)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when arguments do not conform to the defined options
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token does not match any defined option
    #[error("Unrecognized option: {0}")]
    UnknownOption(String),

    /// A value was attached to an option that takes none
    #[error("Unexpected value for option: {0}")]
    UnexpectedValue(String),

    /// A value-taking option was given without its value
    #[error("Missing value for option: {0}")]
    MissingValue(String),

    /// Any other syntax the parser rejects
    #[error("Malformed arguments: {0}")]
    Malformed(String),
}

impl From<clap::Error> for ParseError {
    fn from(err: clap::Error) -> Self {
        let arg = context_string(&err, ContextKind::InvalidArg);

        match err.kind() {
            ErrorKind::UnknownArgument => {
                ParseError::UnknownOption(arg.unwrap_or_else(|| err.kind().to_string()))
            }
            ErrorKind::TooManyValues => {
                ParseError::UnexpectedValue(arg.unwrap_or_else(|| err.kind().to_string()))
            }
            ErrorKind::InvalidValue
                if context_string(&err, ContextKind::InvalidValue).as_deref() == Some("") =>
            {
                ParseError::MissingValue(arg.unwrap_or_else(|| err.kind().to_string()))
            }
            ErrorKind::TooFewValues | ErrorKind::WrongNumberOfValues | ErrorKind::NoEquals => {
                ParseError::MissingValue(arg.unwrap_or_else(|| err.kind().to_string()))
            }
            kind => ParseError::Malformed(arg.unwrap_or_else(|| kind.to_string())),
        }
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> Option<String> {
    match err.get(kind) {
        Some(ContextValue::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
        None => None,
    }
}

/// Errors from building an option set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// Short name already used by another option
    #[error("Duplicate short option: -{0}")]
    DuplicateShort(char),

    /// Long name already used by another option
    #[error("Duplicate long option: --{0}")]
    DuplicateLong(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
