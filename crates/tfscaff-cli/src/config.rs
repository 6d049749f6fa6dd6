//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `TFSCAFF_<SECTION>__<KEY>`, e.g.
//!    `TFSCAFF_SCAFFOLD__BASE_DIR=infra`
//! 3. Config file: `--config FILE`, else `.tfscaff.toml` in the current
//!    directory, else `config.toml` in the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use tfscaff_adapters::SourceKind;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TFSCAFF";

/// File name of a per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".tfscaff.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scaffold: ScaffoldConfig,
    pub services: ServicesConfig,
    pub export: ExportConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Directory created by `tfscaff new` when none is given.
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// `botocore`, `builtin` or `file`.
    pub source: String,
    /// Extra SDK model directories.
    pub data_paths: Vec<PathBuf>,
    /// List read by the `file` source.
    pub list_file: Option<PathBuf>,
    /// Interpreter used to locate the installed botocore package. Empty
    /// skips the lookup, e.g. `TFSCAFF_SERVICES__PYTHON=`.
    pub python: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Append logs to this file in addition to stderr.
    pub file: Option<PathBuf>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("terraform-aws-infra"),
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default().to_string(),
            data_paths: Vec::new(),
            list_file: None,
            python: Some("python3".into()),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("tmp").join("aws_services_list.txt"),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then the environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        if let Some(path) = Self::resolve_file(config_file) {
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(config_file.is_some()),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("services.data_paths")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The file [`Self::load`] reads, if any.
    pub fn resolve_file(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let local = Self::local_path();
        if local.is_file() {
            return Some(local);
        }
        let global = Self::config_path();
        global.is_file().then_some(global)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to the local file when no home directory is known.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "tfscaff", "tfscaff")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(Self::local_path)
    }

    /// Path to the per-directory configuration file.
    pub fn local_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }

    /// The configured source kind.
    pub fn source_kind(&self) -> Result<SourceKind, tfscaff_adapters::catalog::UnknownSourceKind> {
        self.services.source.parse()
    }

    /// Look up a dotted key such as `export.path`.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let root = serde_json::to_value(self).ok()?;
        key.split('.')
            .try_fold(&root, |value, part| value.get(part))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.scaffold.base_dir, PathBuf::from("terraform-aws-infra"));
        assert_eq!(cfg.export.path, PathBuf::from("tmp/aws_services_list.txt"));
        assert_eq!(cfg.source_kind().unwrap(), SourceKind::Botocore);
        assert!(!cfg.output.no_color);
        assert!(cfg.logging.file.is_none());
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cfg.toml");
        fs::write(
            &path,
            "[scaffold]\nbase_dir = \"infra\"\n\n[services]\nsource = \"builtin\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.scaffold.base_dir, PathBuf::from("infra"));
        assert_eq!(cfg.source_kind().unwrap(), SourceKind::Builtin);
        // untouched sections keep their defaults
        assert_eq!(cfg.export.path, PathBuf::from("tmp/aws_services_list.txt"));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(temp.path().join("missing.toml").as_path())).is_err());
    }

    #[test]
    fn malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cfg.toml");
        fs::write(&path, "[scaffold\nbase_dir = ").unwrap();
        assert!(AppConfig::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn unknown_source_is_reported() {
        let mut cfg = AppConfig::default();
        cfg.services.source = "carrier-pigeon".into();
        assert!(cfg.source_kind().is_err());
    }

    #[test]
    fn get_walks_dotted_keys() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.get("scaffold.base_dir"),
            Some(serde_json::Value::String("terraform-aws-infra".into()))
        );
        assert_eq!(cfg.get("output.no_color"), Some(serde_json::Value::Bool(false)));
        assert!(cfg.get("scaffold.nope").is_none());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.scaffold.base_dir, PathBuf::from("terraform-aws-infra"));
        assert_eq!(parsed.services.python.as_deref(), Some("python3"));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
