use std::borrow::Borrow;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::ServiceName};

impl Borrow<str> for ServiceName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

/// The set of services known to the SDK, ordered for presentation.
///
/// Backed by a `BTreeSet`, so iteration is always ascending (byte-wise,
/// case-sensitive) and duplicates reported by a source collapse to one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    names: BTreeSet<ServiceName>,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from raw strings, validating every entry.
    pub fn from_names<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(|n| ServiceName::try_new(n))
            .collect::<Result<BTreeSet<_>, _>>()
            .map(|names| Self { names })
    }

    /// Add a name; returns `false` if it was already present.
    pub fn insert(&mut self, name: ServiceName) -> bool {
        self.names.insert(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &ServiceName> {
        self.names.iter()
    }

    /// Owned copy of the names in ascending order.
    pub fn to_strings(&self) -> Vec<String> {
        self.names.iter().map(|n| n.as_str().to_owned()).collect()
    }
}

impl FromIterator<ServiceName> for ServiceCatalog {
    fn from_iter<T: IntoIterator<Item = ServiceName>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ServiceCatalog {
    type Item = &'a ServiceName;
    type IntoIter = std::collections::btree_set::Iter<'a, ServiceName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
