//! # tfscaff
//!
//! Scaffold a Terraform AWS project with one module per AWS service.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Load configuration (defaults + file + env).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                          |
//! |------|--------------------------------------------------|
//! |  0   | Success                                          |
//! |  1   | Internal / filesystem error                      |
//! |  2   | User error (bad input, destination exists)       |
//! |  4   | Configuration error (incl. unavailable source)   |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else. A missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here and exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Load configuration ─────────────────────────────────────────────
    // Before logging, because the config may name a log file.
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    let _log_guard = match init_logging(&cli.global, config.logging.file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color || config.output.no_color;

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("tfscaff completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(cmd) => commands::new::execute(cmd, cli.global, config, output),
        Commands::Services(cmd) => commands::services::execute(cmd, config, output),
        Commands::Export(cmd) => commands::export::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, config, cli.global.config.as_deref(), output)
        }
    }
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let colored = !no_color && std::io::stderr().is_terminal();
    eprint!("{}", err.render(verbose, colored));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
