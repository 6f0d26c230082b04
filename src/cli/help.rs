//! Help text rendering
//!
//! Renders an [`OptionSet`] through clap's help formatter with a fixed
//! template: usage line, header, option list and footer.

use crate::cli::options::OptionSet;

/// Parameters for rendering help text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpFormat {
    /// Program name used in the usage line
    pub program_name: String,
    /// Column width the text is wrapped to
    pub width: usize,
    /// Text between the usage line and the option list
    pub header: String,
    /// Text after the option list
    pub footer: String,
}

impl HelpFormat {
    /// Standard layout: an `Options:` header and the given footer
    pub fn new(program_name: impl Into<String>, width: usize, footer: &str) -> Self {
        Self {
            program_name: program_name.into(),
            width,
            header: "Options:".to_string(),
            footer: footer.to_string(),
        }
    }

    /// Layout passed to clap
    ///
    /// The header is part of the template because clap pads `{before-help}`
    /// with a blank line. `{after-help}` is preceded by exactly one.
    fn template(&self) -> String {
        format!("usage: {{usage}}\n\n{}\n{{options}}{{after-help}}", self.header)
    }

    /// Render `options` into a newline-terminated help string
    pub fn render(&self, options: &OptionSet) -> String {
        let mut command = options
            .to_command(&self.program_name)
            .help_template(self.template())
            .term_width(self.width);
        if !self.footer.is_empty() {
            command = command.after_help(self.footer.clone());
        }

        let mut text = command.render_help().to_string();

        if !text.ends_with('\n') {
            text.push('\n');
        }
        text
    }
}
