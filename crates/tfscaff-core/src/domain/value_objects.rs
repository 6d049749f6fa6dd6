//! Domain value objects: ServiceName, Environment.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Their constructors enforce the invariants the scaffold relies on: a
//! service name always names exactly one directory, and an environment is
//! always one of the three fixed stages.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ServiceName ──────────────────────────────────────────────────────────────

/// Identifier of a cloud-provider API service, e.g. `s3` or `ec2`.
///
/// Used only as a directory-naming token under `modules/`.
///
/// Invariant: non-empty, a single path component, no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Fallible constructor.
    pub fn try_new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let reject = |reason: &str| DomainError::InvalidServiceName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.is_empty() {
            return Err(reject("name cannot be empty"));
        }
        if name.trim() != name {
            return Err(reject("name cannot start or end with whitespace"));
        }
        if name == "." || name == ".." {
            return Err(reject("name cannot be a relative directory marker"));
        }
        if name.contains(['/', '\\']) {
            return Err(reject("name cannot contain path separators"));
        }
        if name.contains('\0') {
            return Err(reject("name cannot contain NUL bytes"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ServiceName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for ServiceName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl<'de> Deserialize<'de> for ServiceName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::try_new(raw).map_err(serde::de::Error::custom)
    }
}

// ── Environment ──────────────────────────────────────────────────────────────

/// A deployment stage that gets its own folder under `environments/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Every environment, in the order they are scaffolded.
    pub const ALL: [Environment; 3] = [Self::Development, Self::Staging, Self::Production];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" | "stage" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            other => Err(DomainError::UnknownEnvironment(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_name_accepts_sdk_identifiers() {
        for name in ["s3", "ec2", "bedrock-agent-runtime", "sso-oidc", "AWSMigrationHub"] {
            assert!(ServiceName::try_new(name).is_ok(), "rejected: {name}");
        }
    }

    #[test]
    fn service_name_rejects_empty() {
        assert!(matches!(
            ServiceName::try_new(""),
            Err(DomainError::InvalidServiceName { .. })
        ));
    }

    #[test]
    fn service_name_rejects_path_like_values() {
        assert!(ServiceName::try_new("a/b").is_err());
        assert!(ServiceName::try_new("a\\b").is_err());
        assert!(ServiceName::try_new(".").is_err());
        assert!(ServiceName::try_new("..").is_err());
    }

    #[test]
    fn service_name_rejects_surrounding_whitespace() {
        assert!(ServiceName::try_new(" s3").is_err());
        assert!(ServiceName::try_new("s3\n").is_err());
    }

    #[test]
    fn service_names_order_case_sensitively() {
        let upper = ServiceName::try_new("Zeta").unwrap();
        let lower = ServiceName::try_new("alpha").unwrap();
        // 'Z' (0x5A) sorts before 'a' (0x61)
        assert!(upper < lower);
    }

    #[test]
    fn service_name_deserialize_validates() {
        let ok: ServiceName = serde_json::from_str("\"iam\"").unwrap();
        assert_eq!(ok.as_str(), "iam");
        assert!(serde_json::from_str::<ServiceName>("\"../etc\"").is_err());
    }

    #[test]
    fn environments_are_in_fixed_order() {
        let names: Vec<_> = Environment::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(names, ["development", "staging", "production"]);
    }

    #[test]
    fn environment_parses_aliases() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("Stage".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert!("qa".parse::<Environment>().is_err());
    }
}
