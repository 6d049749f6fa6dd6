//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use tfscaff_adapters::SourceKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tfscaff",
    bin_name = "tfscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a Terraform AWS project from the SDK's service list",
    long_about = "tfscaff creates a Terraform skeleton with one module per AWS \
                  service and one directory per environment.",
    after_help = "EXAMPLES:\n\
        \x20 tfscaff new\n\
        \x20 tfscaff new my-infra --yes\n\
        \x20 tfscaff new my-infra --source builtin --dry-run\n\
        \x20 tfscaff services --format count\n\
        \x20 tfscaff export tmp/aws_services_list.txt",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new Terraform AWS tree.
    #[command(
        visible_alias = "n",
        about = "Create a new Terraform AWS tree",
        after_help = "EXAMPLES:\n\
            \x20 tfscaff new                       # prompt for the directory\n\
            \x20 tfscaff new infra --yes           # no prompt\n\
            \x20 tfscaff new infra --source file --services-file tmp/aws_services_list.txt"
    )]
    New(NewArgs),

    /// Print the service names a scaffold would use.
    #[command(
        visible_alias = "ls",
        about = "List AWS service names",
        after_help = "EXAMPLES:\n\
            \x20 tfscaff services\n\
            \x20 tfscaff services --format json\n\
            \x20 tfscaff services --source builtin --format count"
    )]
    Services(ServicesArgs),

    /// Save the service names to a file, one per line.
    #[command(
        about = "Export AWS service names to a file",
        after_help = "EXAMPLES:\n\
            \x20 tfscaff export                    # tmp/aws_services_list.txt\n\
            \x20 tfscaff export services.txt"
    )]
    Export(ExportArgs),

    /// Initialise a tfscaff configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 tfscaff init           # global config\n\
            \x20 tfscaff init --local   # .tfscaff.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tfscaff completions bash > ~/.local/share/bash-completion/completions/tfscaff\n\
            \x20 tfscaff completions zsh  > ~/.zfunc/_tfscaff\n\
            \x20 tfscaff completions fish > ~/.config/fish/completions/tfscaff.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tfscaff config get scaffold.base_dir\n\
            \x20 tfscaff config list\n\
            \x20 tfscaff config path"
    )]
    Config(ConfigCommands),
}

// ── shared source selection ───────────────────────────────────────────────────

/// Where service names come from. Shared by `new`, `services` and `export`.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Service-name source (overrides `services.source`).
    #[arg(long = "source", value_enum, help = "Where to read service names from")]
    pub source: Option<SourceChoice>,

    /// List file for `--source file`. Implies `--source file` when given alone.
    #[arg(
        long = "services-file",
        value_name = "FILE",
        help = "Read service names from FILE (one per line)"
    )]
    pub services_file: Option<PathBuf>,

    /// Extra SDK model directories searched by the botocore source.
    #[arg(
        long = "data-path",
        value_name = "DIR",
        help = "Additional SDK data directory (repeatable)"
    )]
    pub data_paths: Vec<PathBuf>,
}

/// `--source` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceChoice {
    /// Installed SDK model data.
    Botocore,
    /// Snapshot compiled into tfscaff.
    Builtin,
    /// A list file (see --services-file).
    File,
}

impl From<SourceChoice> for SourceKind {
    fn from(choice: SourceChoice) -> Self {
        match choice {
            SourceChoice::Botocore => SourceKind::Botocore,
            SourceChoice::Builtin => SourceKind::Builtin,
            SourceChoice::File => SourceKind::File,
        }
    }
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `tfscaff new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Target directory. Must not exist yet.
    #[arg(
        value_name = "DIR",
        help = "Target directory (default: scaffold.base_dir, prompted when interactive)"
    )]
    pub dir: Option<PathBuf>,

    /// Never prompt; use DIR or the configured default.
    #[arg(short = 'y', long = "yes", help = "Do not prompt for the directory")]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

// ── services ──────────────────────────────────────────────────────────────────

/// Arguments for `tfscaff services`.
#[derive(Debug, Args)]
pub struct ServicesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ServicesFormat,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Output format for the `services` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServicesFormat {
    /// Human-readable columns.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// Number of services only.
    Count,
}

// ── export ────────────────────────────────────────────────────────────────────

/// Arguments for `tfscaff export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Report file (overwritten if present).
    #[arg(value_name = "PATH", help = "Output file (default: export.path)")]
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `tfscaff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.tfscaff.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tfscaff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tfscaff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `export.path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
