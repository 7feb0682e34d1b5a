//! Localization access traits.

use serde_json::Value;

use crate::error::LocaleError;

/// Read side of the application's localization store.
pub trait Translator: Send + Sync {
    /// Resolve a dotted message key, e.g. `elementType.heading`.
    fn translate(&self, key: &str) -> Option<String>;
}

/// Write side used while bootstrapping modules.
pub trait LocaleAccess: Translator {
    /// Merge nested messages into `locale`. Later merges override earlier keys.
    fn merge(&self, locale: &str, messages: &Value) -> Result<(), LocaleError>;
}
