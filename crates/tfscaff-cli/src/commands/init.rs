//! `tfscaff init`: create a default configuration file.

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const HEADER: &str = "\
# tfscaff configuration
#
# Every key can also be set through the environment, e.g.
#   TFSCAFF_SCAFFOLD__BASE_DIR=infra
#   TFSCAFF_SERVICES__SOURCE=builtin
#
# Set [services] python = \"\" to skip looking for an installed botocore.
#
# Optional keys:
#   [services] list_file = \"tmp/aws_services_list.txt\"
#   [logging]  file = \"tfscaff.log\"

";

/// Create a default tfscaff configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = if args.local {
        AppConfig::local_path()
    } else {
        AppConfig::config_path()
    };

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let body = render_default()?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, body)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn render_default() -> CliResult<String> {
    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;
    Ok(format!("{HEADER}{toml}"))
}
