//! Service-name sources.
//!
//! Every source implements [`ServiceNameSource`]; [`SourceKind`] names them
//! for configuration and the command line.

mod botocore;
mod builtin;
mod list_file;

use std::{fmt, path::PathBuf, str::FromStr};

use thiserror::Error;
use tfscaff_core::application::ports::ServiceNameSource;

pub use botocore::{BotocoreDataSource, DATA_PATH_ENV};
pub use builtin::BuiltinCatalog;
pub use list_file::ListFileSource;

/// Which source to read service names from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Installed SDK model data.
    #[default]
    Botocore,
    /// Snapshot compiled into the binary.
    Builtin,
    /// A plain-text list on disk.
    File,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [Self::Botocore, Self::Builtin, Self::File];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Botocore => "botocore",
            Self::Builtin => "builtin",
            Self::File => "file",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown service source '{0}' (expected botocore, builtin or file)")]
pub struct UnknownSourceKind(pub String);

impl FromStr for SourceKind {
    type Err = UnknownSourceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "botocore" | "sdk" => Ok(Self::Botocore),
            "builtin" | "embedded" => Ok(Self::Builtin),
            "file" | "list" => Ok(Self::File),
            other => Err(UnknownSourceKind(other.to_string())),
        }
    }
}

/// Everything needed to open any source.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    pub kind: SourceKind,
    /// Extra model roots for [`SourceKind::Botocore`].
    pub data_paths: Vec<PathBuf>,
    /// Interpreter used to locate the installed botocore package.
    pub python: Option<String>,
    /// Required for [`SourceKind::File`].
    pub list_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("the 'file' service source needs a list file path")]
    MissingListFile,
}

/// Build the source selected by `options`.
pub fn open_source(options: &SourceOptions) -> Result<Box<dyn ServiceNameSource>, SourceError> {
    Ok(match options.kind {
        SourceKind::Botocore => Box::new(BotocoreDataSource::discover(
            &options.data_paths,
            options.python.as_deref(),
        )),
        SourceKind::Builtin => Box::new(BuiltinCatalog::new()),
        SourceKind::File => {
            let path = options
                .list_file
                .clone()
                .ok_or(SourceError::MissingListFile)?;
            Box::new(ListFileSource::new(path))
        }
    })
}

/// Trimmed, non-empty, non-comment lines.
pub(crate) fn parse_list(body: &str) -> impl Iterator<Item = &str> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_kind_parses_aliases() {
        assert_eq!("botocore".parse(), Ok(SourceKind::Botocore));
        assert_eq!("Builtin".parse(), Ok(SourceKind::Builtin));
        assert_eq!(" list ".parse(), Ok(SourceKind::File));
        assert!("s3".parse::<SourceKind>().is_err());
    }

    #[test]
    fn source_kind_display_round_trips() {
        for kind in SourceKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn file_source_requires_path() {
        let options = SourceOptions {
            kind: SourceKind::File,
            ..Default::default()
        };
        assert_eq!(open_source(&options).err(), Some(SourceError::MissingListFile));
    }

    #[test]
    fn opens_builtin() {
        let options = SourceOptions {
            kind: SourceKind::Builtin,
            ..Default::default()
        };
        assert_eq!(open_source(&options).unwrap().describe(), "builtin");
    }

    #[test]
    fn parse_list_skips_noise() {
        let names: Vec<_> = parse_list("# c\n\n a \nb\n").collect();
        assert_eq!(names, ["a", "b"]);
    }
}
