//! Command-line option handling
//!
//! Uses clap's builder API as the option registry, parser and help formatter.

pub mod help;
pub mod options;
pub mod parsed;

pub use help::HelpFormat;
pub use options::{OptionSet, OptionSpec};
pub use parsed::{ParsedArguments, ParsedOption};
