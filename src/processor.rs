//! Command processor
//!
//! Defines the option set, parses arguments against it and decides what to
//! do with the result. Terminal flags produce an [`Outcome::Exit`]; the
//! caller is responsible for actually ending the process.

use crate::cli::{HelpFormat, OptionSet, OptionSpec, ParsedArguments};
use crate::config::Config;
use crate::error::{ParseError, Result};
use std::ffi::OsString;
use std::io::{self, Write};

/// Message printed before the help text when parsing fails
pub const UNKNOWN_OPTIONS: &str = "Unknown options.";

/// What the caller should do once processing finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep running
    Continue,
    /// Terminate the process with this exit code
    Exit(i32),
}

impl Outcome {
    pub fn exit_code(self) -> Option<i32> {
        match self {
            Outcome::Continue => None,
            Outcome::Exit(code) => Some(code),
        }
    }
}

/// Lifecycle of a [`CommandProcessor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorState {
    /// No options defined yet
    Uninitialized,
    /// Options defined, no successful parse
    OptionsDefined,
    /// Arguments parsed successfully
    Parsed,
}

/// Turns raw process arguments into action
#[derive(Debug)]
pub struct CommandProcessor {
    config: Config,
    options: Option<OptionSet>,
    parsed: Option<ParsedArguments>,
}

impl CommandProcessor {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            options: None,
            parsed: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn options(&self) -> Option<&OptionSet> {
        self.options.as_ref()
    }

    pub fn parsed(&self) -> Option<&ParsedArguments> {
        self.parsed.as_ref()
    }

    pub fn state(&self) -> ProcessorState {
        match (&self.options, &self.parsed) {
            (None, _) => ProcessorState::Uninitialized,
            (Some(_), None) => ProcessorState::OptionsDefined,
            (Some(_), Some(_)) => ProcessorState::Parsed,
        }
    }

    /// Process `args` (excluding the program name), writing any output to `out`
    ///
    /// Parse errors are reported as `Unknown options.` followed by the help
    /// text and yield [`Outcome::Continue`]. Only I/O failures are returned.
    pub fn process<I, T, W>(&mut self, args: I, out: &mut W) -> Result<Outcome>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        W: Write,
    {
        self.define_options()?;

        match self.parse_options(args) {
            Ok(()) => Ok(self.interrogate_options(out)?),
            Err(e) => {
                log::debug!("Argument parsing failed: {}", e);
                writeln!(out, "{}", UNKNOWN_OPTIONS)?;
                self.print_help(out)?;
                Ok(Outcome::Continue)
            }
        }
    }

    /// Reset the option set to `-h/--help` and `-v/--version`
    pub fn define_options(&mut self) -> Result<()> {
        let options = OptionSet::new()
            .with(OptionSpec::flag('h', "help", "print this message"))?
            .with(OptionSpec::flag('v', "version", "print version information"))?;

        log::debug!("Defined {} options", options.len());
        self.options = Some(options);
        self.parsed = None;
        Ok(())
    }

    /// Parse `args` against the defined options
    ///
    /// Does nothing when no options are defined. A failed parse discards
    /// any earlier result.
    pub fn parse_options<I, T>(&mut self, args: I) -> std::result::Result<(), ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let Some(options) = &self.options else {
            return Ok(());
        };

        self.parsed = None;
        let parsed = ParsedArguments::parse(options, &self.config.general.program_name, args)?;
        log::debug!("Parsed {} options", parsed.iter().count());
        self.parsed = Some(parsed);
        Ok(())
    }

    /// Act on the parse result
    ///
    /// Help is checked before version.
    pub fn interrogate_options<W: Write>(&self, out: &mut W) -> io::Result<Outcome> {
        let (Some(_), Some(parsed)) = (&self.options, &self.parsed) else {
            return Ok(Outcome::Continue);
        };

        if parsed.has_short('h') {
            log::debug!("Help requested");
            self.print_help(out)?;
            return Ok(Outcome::Exit(0));
        }

        if parsed.has_short('v') {
            log::debug!("Version requested");
            writeln!(out, "{}", self.config.version_line())?;
            return Ok(Outcome::Exit(0));
        }

        Ok(Outcome::Continue)
    }

    /// Write the usage line, option list and copyright footer
    pub fn print_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(options) = &self.options else {
            return Ok(());
        };

        let format = HelpFormat::new(
            self.config.general.program_name.clone(),
            self.config.general.help_width,
            &self.config.about.copyright,
        );
        out.write_all(format.render(options).as_bytes())
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants;

    fn run(args: &[&str]) -> (Outcome, String) {
        let mut processor = CommandProcessor::default();
        let mut out = Vec::new();
        let outcome = processor.process(args.iter().copied(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn expected_help() -> String {
        format!(
            "usage: app [-h] [-v]\n\
             \n\
             Options:\n\
             \x20 -h, --help     print this message\n\
             \x20 -v, --version  print version information\n\
             \n\
             {}\n",
            constants::COPYRIGHT
        )
    }

    fn assert_is_help(text: &str) {
        assert!(text.contains("usage: app [-h] [-v]"));
        assert!(text.contains("Options:"));
        assert!(text.contains("-h, --help"));
        assert!(text.contains("print this message"));
        assert!(text.contains("-v, --version"));
        assert!(text.contains("print version information"));
        assert!(text.trim_end().ends_with(constants::COPYRIGHT));
    }

    #[test]
    fn test_short_help() {
        let (outcome, out) = run(&["-h"]);
        assert_eq!(outcome, Outcome::Exit(0));
        assert_is_help(&out);
    }

    #[test]
    fn test_long_help() {
        let (outcome, out) = run(&["--help"]);
        assert_eq!(outcome, Outcome::Exit(0));
        assert_is_help(&out);
    }

    #[test]
    fn test_version() {
        let (outcome, out) = run(&["--version"]);
        assert_eq!(outcome, Outcome::Exit(0));
        assert_eq!(out, "app version 1.0\n");

        let (outcome, out) = run(&["-v"]);
        assert_eq!(outcome, Outcome::Exit(0));
        assert_eq!(out, "app version 1.0\n");
    }

    #[test]
    fn test_help_takes_precedence() {
        for args in [&["-v", "-h"][..], &["--version", "--help"][..], &["-vh"][..]] {
            let (outcome, out) = run(args);
            assert_eq!(outcome, Outcome::Exit(0));
            assert!(!out.contains("app version"));
            assert_is_help(&out);
        }
    }

    #[test]
    fn test_no_arguments() {
        let (outcome, out) = run(&[]);
        assert_eq!(outcome, Outcome::Continue);
        assert!(out.is_empty());
    }

    #[test]
    fn test_unknown_option() {
        let (outcome, out) = run(&["--frobnicate"]);
        assert_eq!(outcome, Outcome::Continue);
        assert!(out.starts_with("Unknown options.\n"));
        assert_is_help(&out["Unknown options.\n".len()..]);
    }

    #[test]
    fn test_default_help_text() {
        let (outcome, out) = run(&["-h"]);
        assert_eq!(outcome, Outcome::Exit(0));
        assert_eq!(out, expected_help());
    }

    #[test]
    fn test_unknown_option_exact_output() {
        let (outcome, out) = run(&["--frobnicate"]);
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(out, format!("Unknown options.\n{}", expected_help()));
    }

    #[test]
    fn test_abbreviated_long_options() {
        let (outcome, out) = run(&["--ver"]);
        assert_eq!(outcome, Outcome::Exit(0));
        assert_eq!(out, "app version 1.0\n");

        let (outcome, out) = run(&["--hel"]);
        assert_eq!(outcome, Outcome::Exit(0));
        assert_eq!(out, expected_help());
    }

    #[test]
    fn test_unknown_option_with_help() {
        let (outcome, out) = run(&["-h", "--bogus"]);
        assert_eq!(outcome, Outcome::Continue);
        assert!(out.starts_with("Unknown options.\n"));
    }

    #[test]
    fn test_positional_rejected() {
        let (outcome, out) = run(&["file.txt"]);
        assert_eq!(outcome, Outcome::Continue);
        assert!(out.starts_with("Unknown options.\n"));
    }

    #[test]
    fn test_state_transitions() {
        let mut processor = CommandProcessor::default();
        assert_eq!(processor.state(), ProcessorState::Uninitialized);

        processor.define_options().unwrap();
        assert_eq!(processor.state(), ProcessorState::OptionsDefined);

        processor.parse_options(["-v"]).unwrap();
        assert_eq!(processor.state(), ProcessorState::Parsed);

        assert!(processor.parse_options(["--bogus"]).is_err());
        assert_eq!(processor.state(), ProcessorState::OptionsDefined);
    }

    #[test]
    fn test_uninitialized_is_noop() {
        let mut processor = CommandProcessor::default();
        let mut out = Vec::new();

        assert!(processor.parse_options(["--bogus"]).is_ok());
        assert_eq!(
            processor.interrogate_options(&mut out).unwrap(),
            Outcome::Continue
        );
        processor.print_help(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_interrogate_before_parse_is_noop() {
        let mut processor = CommandProcessor::default();
        processor.define_options().unwrap();

        let mut out = Vec::new();
        assert_eq!(
            processor.interrogate_options(&mut out).unwrap(),
            Outcome::Continue
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_repeated_process_redefines_same_options() {
        let mut processor = CommandProcessor::default();
        let mut out = Vec::new();

        processor.process(["--bogus"], &mut out).unwrap();
        let first = processor.options().cloned();
        processor.process(Vec::<String>::new(), &mut out).unwrap();

        assert_eq!(processor.options().cloned(), first);
        assert_eq!(processor.options().map(OptionSet::len), Some(2));
    }

    #[test]
    fn test_configured_output() {
        let mut config = Config::default();
        config.general.program_name = "demo".to_string();
        config.about.version = "2.0".to_string();
        config.about.copyright = "(c) Demo Authors".to_string();
        let mut processor = CommandProcessor::new(config);

        let mut out = Vec::new();
        processor.process(["-v"], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "demo version 2.0\n");

        let mut out = Vec::new();
        processor.process(["-h"], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("usage: demo [-h] [-v]"));
        assert!(text.contains("(c) Demo Authors"));
    }

    #[test]
    fn test_outcome_exit_code() {
        assert_eq!(Outcome::Continue.exit_code(), None);
        assert_eq!(Outcome::Exit(0).exit_code(), Some(0));
    }
}
