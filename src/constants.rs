//! Built-in constants
//!
//! Default values used when no configuration file overrides them.

/// Program name shown in the usage line and version message
pub const PROGRAM_NAME: &str = "app";

/// Application version
pub const VERSION: &str = "1.0";

/// Footer printed at the end of the help text
pub const COPYRIGHT: &str = "Copyright (c) 2020 Idaho State University";

/// Column width the help text is formatted to
pub const HELP_WIDTH: usize = 80;
