//! Flags shared by every tfscaff subcommand.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` reports each scaffold phase, `-vv` every directory,
    /// `-vvv` every filesystem call and source lookup.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print errors only. Implies `--yes` for `new`.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output without ANSI colours (also set by `NO_COLOR`).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from this TOML file instead of the discovered one.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// Output rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Coloured when stdout is a terminal.
    #[default]
    Auto,
    /// Coloured regardless of the terminal.
    Human,
    /// Uncoloured text.
    Plain,
    /// One JSON document per command.
    Json,
}
