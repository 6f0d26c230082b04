//! app - example command-line processing library
//!
//! Defines a fixed pair of terminal flags (`-h/--help`, `-v/--version`),
//! parses process arguments against them and decides whether the process
//! should exit.
//!
//! # Modules
//!
//! - [`cli`]: Option definitions, parsing and help rendering
//! - [`config`]: Configuration system
//! - [`constants`]: Built-in defaults
//! - [`error`]: Error types
//! - [`processor`]: The command processor

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod processor;

pub use error::{AppError, Result};
pub use processor::{CommandProcessor, Outcome};
