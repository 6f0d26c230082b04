//! Option definitions
//!
//! An [`OptionSet`] is the registry of recognized options. It is translated
//! into a clap [`Command`] for both parsing and help rendering.

use crate::error::OptionError;
use clap::{Arg, ArgAction, Command};
use std::fmt;

/// Value name shown for options that take an argument
const VALUE_NAME: &str = "arg";

/// A single recognized command-line option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    short: char,
    long: String,
    takes_argument: bool,
    description: String,
}

impl OptionSpec {
    /// Create a boolean option that takes no argument
    pub fn flag(short: char, long: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            short,
            long: long.into(),
            takes_argument: false,
            description: description.into(),
        }
    }

    /// Create an option that requires a value
    pub fn with_value(
        short: char,
        long: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            takes_argument: true,
            ..Self::flag(short, long, description)
        }
    }

    #[inline]
    pub fn short(&self) -> char {
        self.short
    }

    #[inline]
    pub fn long(&self) -> &str {
        &self.long
    }

    #[inline]
    pub fn takes_argument(&self) -> bool {
        self.takes_argument
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Usage fragment, e.g. `[-h]` or `[-n <arg>]`
    pub fn usage(&self) -> String {
        if self.takes_argument {
            format!("[-{} <{}>]", self.short, VALUE_NAME)
        } else {
            format!("[-{}]", self.short)
        }
    }

    fn to_arg(&self) -> Arg {
        let arg = Arg::new(self.long.clone())
            .short(self.short)
            .long(self.long.clone())
            .help(self.description.clone());

        if self.takes_argument {
            arg.action(ArgAction::Set).value_name(VALUE_NAME)
        } else {
            arg.action(ArgAction::SetTrue)
        }
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}, --{}", self.short, self.long)
    }
}

/// Ordered set of options with unique short and long names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    specs: Vec<OptionSpec>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option, keeping insertion order
    ///
    /// # Errors
    /// Returns `OptionError` if the short or long name is already taken
    pub fn add(&mut self, spec: OptionSpec) -> Result<(), OptionError> {
        if self.find_short(spec.short).is_some() {
            return Err(OptionError::DuplicateShort(spec.short));
        }
        if self.find_long(&spec.long).is_some() {
            return Err(OptionError::DuplicateLong(spec.long));
        }
        self.specs.push(spec);
        Ok(())
    }

    /// Builder-style variant of [`OptionSet::add`]
    pub fn with(mut self, spec: OptionSpec) -> Result<Self, OptionError> {
        self.add(spec)?;
        Ok(self)
    }

    pub fn find_short(&self, short: char) -> Option<&OptionSpec> {
        self.specs.iter().find(|s| s.short == short)
    }

    pub fn find_long(&self, long: &str) -> Option<&OptionSpec> {
        self.specs.iter().find(|s| s.long == long)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Usage line body, e.g. `app [-h] [-v]`
    pub fn usage(&self, program_name: &str) -> String {
        self.specs
            .iter()
            .fold(program_name.to_string(), |mut line, spec| {
                line.push(' ');
                line.push_str(&spec.usage());
                line
            })
    }

    /// Build the clap command that recognizes exactly this set
    ///
    /// Arguments handed to the command must not include the program name.
    /// Unambiguous prefixes of long names are accepted (`--ver`). No
    /// positional arguments are defined, so a bare token is rejected as an
    /// unknown option.
    pub fn to_command(&self, program_name: &str) -> Command {
        Command::new(program_name.to_string())
            .no_binary_name(true)
            .infer_long_args(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true)
            .override_usage(self.usage(program_name))
            .args(self.specs.iter().map(OptionSpec::to_arg))
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a OptionSpec;
    type IntoIter = std::slice::Iter<'a, OptionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
