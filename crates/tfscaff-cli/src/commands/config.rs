//! `tfscaff config`: inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    explicit: Option<&std::path::Path>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
                return Ok(());
            }
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.data(serialised.trim_end())?;
        }

        ConfigCommands::Path => match AppConfig::resolve_file(explicit) {
            Some(path) => output.data(&path.display().to_string())?,
            None => {
                output.data(&AppConfig::config_path().display().to_string())?;
                output.info("No configuration file found; built-in defaults are in use")?;
            }
        },
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Strings print bare; other values as JSON.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match config.get(key) {
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(serde_json::Value::Null) => Ok(String::new()),
        Some(other) => Ok(other.to_string()),
        None => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
