//! CLI-level errors: what went wrong, what to try next, and which exit code
//! the process returns.

use std::error::Error as _;
use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use tfscaff_adapters::catalog::{SourceError, UnknownSourceKind};
use tfscaff_core::error::{ErrorCategory as CoreCategory, ScaffError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `--source file` without a list to read.
    #[error("No services file given for the 'file' source")]
    MissingServicesFile,

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Raised by the scaffolder, a service-name source or the filesystem.
    #[error("{0}")]
    Core(#[from] ScaffError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::MissingListFile => CliError::MissingServicesFile,
        }
    }
}

impl From<UnknownSourceKind> for CliError {
    fn from(err: UnknownSourceKind) -> Self {
        CliError::ConfigError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec![
                "Pass the directory as an argument: tfscaff new DIR".into(),
                "Or skip the prompt with --yes".into(),
            ],
            Self::MissingServicesFile => vec![
                "Pass a list with --services-file FILE".into(),
                "Or set services.list_file in the configuration".into(),
                "Create one with: tfscaff export --source builtin".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Show the active file with: tfscaff config path".into(),
                "Create a default config with: tfscaff init".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check file permissions and free disk space".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::MissingServicesFile => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// The message printed on stderr before exiting.
    ///
    /// `verbose` adds the chain of causes; without it a hint about `-v` is
    /// appended instead.
    pub fn render(&self, verbose: bool, colored: bool) -> String {
        let mut out = String::new();
        if colored {
            let _ = writeln!(out, "\n{} {}", "\u{2717}".red().bold(), "Error:".red().bold());
            let _ = writeln!(out, "  {}", self.to_string().red());
        } else {
            let _ = writeln!(out, "\nError: {self}");
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("Caused by: {err}");
                let _ = writeln!(out, "  {}", styled(&line, colored, |s| s.dimmed().to_string()));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let title = styled("Suggestions:", colored, |s| s.yellow().bold().to_string());
            let _ = writeln!(out, "\n{title}");
            for suggestion in &suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }

        if !verbose {
            let hint = styled("Use -v / --verbose for more details.", colored, |s| {
                s.dimmed().to_string()
            });
            let _ = writeln!(out, "\n{hint}");
        }

        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(error = %self, "Command refused"),
            ErrorCategory::Configuration => tracing::error!(error = %self, "Configuration error"),
            ErrorCategory::Internal => tracing::error!(error = %self, "Command failed"),
        }

        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "Caused by");
        }
    }
}

fn styled(text: &str, colored: bool, style: fn(&str) -> String) -> String {
    if colored { style(text) } else { text.to_owned() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments or an existing destination.
    UserError,
    /// Unreadable config or an unusable service-name source.
    Configuration,
    Internal,
}

/// Attach a context message to an I/O result at the call site.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}
