//! Namespace identifiers.
//!
//! The eight namespaces owned by the page builder are a closed enumeration.
//! Plugins that need their own category use [`Namespace::Custom`] with a
//! validated [`NamespaceName`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RegistryError;

const MAX_NAMESPACE_LEN: usize = 64;

/// A registry namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    Application,
    Job,
    BuilderSettings,
    ErrorPage,
    Element,
    Device,
    PageHeaderItem,
    PageSidePanel,
    /// Plugin-supplied namespace.
    Custom(NamespaceName),
}

impl Namespace {
    /// All built-in namespaces, in the order the builder module creates them.
    pub fn builtin() -> [Namespace; 8] {
        [
            Namespace::Application,
            Namespace::Job,
            Namespace::BuilderSettings,
            Namespace::ErrorPage,
            Namespace::Element,
            Namespace::Device,
            Namespace::PageHeaderItem,
            Namespace::PageSidePanel,
        ]
    }

    /// Stable wire name, e.g. `pageSidePanel`.
    pub fn as_str(&self) -> &str {
        match self {
            Namespace::Application => "application",
            Namespace::Job => "job",
            Namespace::BuilderSettings => "builderSettings",
            Namespace::ErrorPage => "errorPage",
            Namespace::Element => "element",
            Namespace::Device => "device",
            Namespace::PageHeaderItem => "pageHeaderItem",
            Namespace::PageSidePanel => "pageSidePanel",
            Namespace::Custom(name) => name.as_str(),
        }
    }

    /// Create a plugin namespace from a free-form name.
    pub fn custom(name: &str) -> Result<Self, RegistryError> {
        NamespaceName::new(name).map(Namespace::Custom)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Namespace::Custom(_))
    }

    fn from_builtin_name(name: &str) -> Option<Self> {
        Namespace::builtin()
            .into_iter()
            .find(|namespace| namespace.as_str() == name)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match Namespace::from_builtin_name(trimmed) {
            Some(namespace) => Ok(namespace),
            None => Namespace::custom(trimmed),
        }
    }
}

impl Serialize for Namespace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Namespace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Validated name of a plugin-supplied namespace.
///
/// Must start with an ASCII letter, contain only ASCII alphanumerics, `_` or
/// `-`, and must not shadow a built-in namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceName(String);

impl NamespaceName {
    pub fn new(name: &str) -> Result<Self, RegistryError> {
        let name = name.trim();
        let mut chars = name.chars();
        let valid_head = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        let valid_tail = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid_head || !valid_tail || name.len() > MAX_NAMESPACE_LEN {
            return Err(RegistryError::InvalidNamespace(name.to_string()));
        }
        if Namespace::from_builtin_name(name).is_some() {
            return Err(RegistryError::InvalidNamespace(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "namespace_tests.rs"]
mod tests;
