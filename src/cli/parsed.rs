//! Parse results
//!
//! [`ParsedArguments`] records which defined options were supplied on the
//! command line, and their values.

use crate::cli::options::{OptionSet, OptionSpec};
use crate::error::ParseError;
use clap::parser::{ArgMatches, ValueSource};
use std::ffi::OsString;

/// An option that was present on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption {
    pub spec: OptionSpec,
    pub value: Option<String>,
}

/// Read-only result of parsing arguments against an [`OptionSet`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    present: Vec<ParsedOption>,
}

impl ParsedArguments {
    /// Parse raw arguments (excluding the program name) against `options`
    ///
    /// # Errors
    /// Returns `ParseError` for unknown tokens or malformed option syntax
    pub fn parse<I, T>(options: &OptionSet, program_name: &str, args: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = options
            .to_command(program_name)
            .try_get_matches_from(args)?;
        Ok(Self::from_matches(options, &matches))
    }

    fn from_matches(options: &OptionSet, matches: &ArgMatches) -> Self {
        let present = options
            .iter()
            .filter(|spec| matches.value_source(spec.long()) == Some(ValueSource::CommandLine))
            .map(|spec| {
                let value = if spec.takes_argument() {
                    matches
                        .try_get_one::<String>(spec.long())
                        .ok()
                        .flatten()
                        .cloned()
                } else {
                    None
                };
                ParsedOption {
                    spec: spec.clone(),
                    value,
                }
            })
            .collect();

        Self { present }
    }

    /// Whether the option with this short name was supplied
    pub fn has_short(&self, short: char) -> bool {
        self.present.iter().any(|p| p.spec.short() == short)
    }

    /// Whether the option with this long name was supplied
    pub fn has_long(&self, long: &str) -> bool {
        self.present.iter().any(|p| p.spec.long() == long)
    }

    /// Value supplied for a value-taking option
    pub fn value_of(&self, long: &str) -> Option<&str> {
        self.present
            .iter()
            .find(|p| p.spec.long() == long)
            .and_then(|p| p.value.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParsedOption> {
        self.present.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}
