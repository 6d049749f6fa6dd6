//! Implementation of the `tfscaff new` command.
//!
//! Responsibility: pick the target directory, fetch the service catalog,
//! call the core scaffold builder, and display results. No layout rules
//! live here.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info, instrument};

use tfscaff_adapters::LocalFilesystem;
use tfscaff_core::application::{
    ScaffoldBuilder,
    ports::{Filesystem, ScaffoldProgress},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Prompt shown when no directory is given.
pub const PROMPT: &str = "Enter the target directory name for Terraform AWS infrastructure";

/// Execute the `tfscaff new` command.
///
/// Dispatch sequence:
/// 1. Resolve the target directory (argument, prompt, or configured default)
/// 2. Fetch the service catalog from the selected source
/// 3. Early-exit with a plan summary if `--dry-run`
/// 4. Build the tree via `ScaffoldBuilder` (refuses an existing target)
/// 5. Print the report
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve target
    let may_prompt = !args.yes && !global.quiet && std::io::stdin().is_terminal();
    let base = resolve_base_dir(args.dir, &config.scaffold.base_dir, may_prompt)?;
    debug!(base = %base.display(), "Target resolved");

    // 2. Service names
    let catalog = super::fetch_catalog(&args.source, &config)?;
    if !output.is_json() {
        output.info(&format!("Total number of AWS services: {}", catalog.len()))?;
    }

    let filesystem = LocalFilesystem::new();
    let builder = ScaffoldBuilder::new(Box::new(filesystem));

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let plan = builder.plan(&base, &catalog)?;
        let summary = DryRun {
            root: &base,
            exists: filesystem.exists(&base),
            directories: plan.directory_count() + 1,
            files: plan.file_count(),
            modules: plan.module_count(),
            environments: plan.environment_count(),
        };
        return print_dry_run(&summary, &output);
    }

    // 4. Scaffold
    let builder = if output.is_interactive() {
        builder.with_progress(Box::new(BarProgress::new()))
    } else {
        builder
    };

    info!(base = %base.display(), "Scaffold started");
    let report = builder.build(&base, &catalog)?;

    // 5. Report
    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    output.success(&format!(
        "Terraform directory structure created at: {}",
        report.root.display()
    ))?;
    output.print(&format!(
        "  {} modules, {} environments, {} files in {} directories",
        report.modules, report.environments, report.files_written, report.directories_created
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", report.root.display()))?;
    output.print("  terraform init")?;

    Ok(())
}

// ── Target resolution ─────────────────────────────────────────────────────────

/// Pick the target directory: explicit argument, then the prompt, then `default`.
pub fn resolve_base_dir(
    explicit: Option<PathBuf>,
    default: &Path,
    may_prompt: bool,
) -> CliResult<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if may_prompt {
        return prompt_for_dir(default);
    }
    Ok(default.to_path_buf())
}

/// Empty input keeps the default.
fn normalise_answer(answer: &str, default: &Path) -> PathBuf {
    let answer = answer.trim();
    if answer.is_empty() {
        default.to_path_buf()
    } else {
        PathBuf::from(answer)
    }
}

#[cfg(feature = "interactive")]
fn prompt_for_dir(default: &Path) -> CliResult<PathBuf> {
    use crate::error::CliError;

    let answer: String = dialoguer::Input::new()
        .with_prompt(PROMPT)
        .default(default.display().to_string())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CliError::InvalidInput {
            message: format!("failed to read the directory name: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(normalise_answer(&answer, default))
}

#[cfg(not(feature = "interactive"))]
fn prompt_for_dir(default: &Path) -> CliResult<PathBuf> {
    use std::io::{self, Write};

    use crate::error::IntoCli;

    print!("{PROMPT} (default: {}): ", default.display());
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read the directory name")?;

    Ok(normalise_answer(&input, default))
}

// ── Dry run ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct DryRun<'a> {
    root: &'a Path,
    exists: bool,
    /// Includes the root.
    directories: usize,
    files: usize,
    modules: usize,
    environments: usize,
}

fn print_dry_run(summary: &DryRun<'_>, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(summary)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{}'",
        summary.root.display()
    ))?;
    output.print(&format!("  Directories:  {}", summary.directories))?;
    output.print(&format!("  Files:        {}", summary.files))?;
    output.print(&format!("  Modules:      {}", summary.modules))?;
    output.print(&format!("  Environments: {}", summary.environments))?;
    if summary.exists {
        output.warning(&format!(
            "'{}' already exists; a real run would refuse",
            summary.root.display()
        ))?;
    }
    Ok(())
}

// ── Progress ──────────────────────────────────────────────────────────────────

/// Drives an `indicatif` bar from scaffold callbacks.
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl ScaffoldProgress for BarProgress {
    fn started(&self, total_files: usize) {
        self.bar.set_length(total_files as u64);
        self.bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        if let Ok(style) =
            ProgressStyle::with_template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            self.bar.set_style(style.progress_chars("=> "));
        }
    }

    fn file_written(&self, path: &Path) {
        self.bar.set_message(path.display().to_string());
        self.bar.inc(1);
    }

    fn finished(&self) {
        self.bar.finish_and_clear();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
