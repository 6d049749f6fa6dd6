//! Terminal output for tfscaff commands.
//!
//! Status lines (`✓`, `⚠`, `ℹ`) and headers are chatter and vanish under
//! `--quiet`. Results written through [`OutputManager::data`] or
//! [`OutputManager::json`] are always printed. Errors go to stderr from
//! `main`, not through here.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Caution,
    Note,
}

impl Tone {
    fn glyph(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Caution => "\u{26a0}",
            Self::Note => "\u{2139}",
        }
    }

    fn paint(self, text: &str) -> String {
        match self {
            Self::Success => text.green().to_string(),
            Self::Caution => text.yellow().to_string(),
            Self::Note => text.blue().to_string(),
        }
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    colored: bool,
    term: Term,
}

impl OutputManager {
    /// `Auto` resolves to `Human` on a terminal and `Plain` otherwise. Colour
    /// is used only for `Human` and only when neither the flag nor the config
    /// turns it off.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            format,
            quiet: args.quiet,
            colored: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// A result line such as a service name or a count.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Caution, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Note, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.colored {
            self.term.write_line(&text.cyan().bold().to_string())
        } else {
            self.term.write_line(text)
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Whether progress bars and prompts make sense.
    pub fn is_interactive(&self) -> bool {
        self.format == OutputFormat::Human && !self.quiet && self.term.is_term()
    }

    /// Terminal width in columns, if stdout is a terminal.
    pub fn width(&self) -> Option<usize> {
        self.term
            .is_term()
            .then(|| usize::from(self.term.size().1))
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.decorate(tone, msg))
    }

    fn decorate(&self, tone: Tone, msg: &str) -> String {
        if self.colored {
            format!("{} {}", tone.paint(tone.glyph()).bold(), tone.paint(msg))
        } else {
            format!("{} {msg}", tone.glyph())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(quiet: bool, format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color: false,
            config: None,
            output_format: format,
        }
    }

    fn manager(quiet: bool, format: OutputFormat) -> OutputManager {
        OutputManager::new(&args(quiet, format), &AppConfig::default())
    }

    #[test]
    fn plain_lines_carry_glyph_without_escapes() {
        let out = manager(false, OutputFormat::Plain);
        assert_eq!(out.decorate(Tone::Success, "done"), "\u{2713} done");
        assert_eq!(out.decorate(Tone::Caution, "careful"), "\u{26a0} careful");
    }

    #[test]
    fn human_lines_are_coloured() {
        let out = manager(false, OutputFormat::Human);
        assert!(out.decorate(Tone::Caution, "careful").contains('\u{1b}'));
    }

    #[test]
    fn config_no_color_is_honoured() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&args(false, OutputFormat::Human), &config);
        assert!(!out.colored);
    }

    #[test]
    fn no_color_flag_is_honoured() {
        let mut flags = args(false, OutputFormat::Human);
        flags.no_color = true;
        assert!(!OutputManager::new(&flags, &AppConfig::default()).colored);
    }

    #[test]
    fn quiet_status_lines_are_dropped_but_succeed() {
        let out = manager(true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.info("hello").is_ok());
        assert!(out.data("still shown").is_ok());
    }

    #[test]
    fn json_format_is_reported() {
        assert!(manager(false, OutputFormat::Json).is_json());
        assert!(!manager(false, OutputFormat::Plain).is_json());
        assert!(!manager(false, OutputFormat::Plain).is_interactive());
    }
}
