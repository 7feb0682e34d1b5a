//! Localization store.
//!
//! Messages are kept flattened per locale: `{"elementType": {"heading": "Heading"}}`
//! becomes `elementType.heading -> Heading`.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use pagebuilder_protocols::error::LocaleError;
use pagebuilder_protocols::{LocaleAccess, Translator};

/// Locale used when the active locale has no message for a key.
pub const FALLBACK_LOCALE: &str = "en";

struct LocaleState {
    active: String,
    messages: HashMap<String, BTreeMap<String, String>>,
}

/// Merged localization messages with an active and a fallback locale.
pub struct LocaleStore {
    state: RwLock<LocaleState>,
}

impl LocaleStore {
    /// Create a store with `active` as the active locale.
    pub fn new(active: &str) -> Result<Self, LocaleError> {
        validate_locale(active)?;
        Ok(Self {
            state: RwLock::new(LocaleState {
                active: active.to_string(),
                messages: HashMap::new(),
            }),
        })
    }

    pub fn active(&self) -> String {
        self.state.read().active.clone()
    }

    pub fn set_active(&self, locale: &str) -> Result<(), LocaleError> {
        validate_locale(locale)?;
        self.state.write().active = locale.to_string();
        Ok(())
    }

    /// Locales that have at least one message, sorted.
    pub fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.state.read().messages.keys().cloned().collect();
        locales.sort();
        locales
    }

    pub fn message_count(&self, locale: &str) -> usize {
        self.state
            .read()
            .messages
            .get(locale)
            .map(BTreeMap::len)
            .unwrap_or(0)
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self {
            state: RwLock::new(LocaleState {
                active: FALLBACK_LOCALE.to_string(),
                messages: HashMap::new(),
            }),
        }
    }
}

impl Translator for LocaleStore {
    fn translate(&self, key: &str) -> Option<String> {
        let state = self.state.read();
        [state.active.as_str(), FALLBACK_LOCALE]
            .into_iter()
            .find_map(|locale| state.messages.get(locale)?.get(key).cloned())
    }
}

impl LocaleAccess for LocaleStore {
    fn merge(&self, locale: &str, messages: &Value) -> Result<(), LocaleError> {
        validate_locale(locale)?;
        let Value::Object(_) = messages else {
            return Err(LocaleError::InvalidMessages {
                locale: locale.to_string(),
                message: "messages must be a JSON object".to_string(),
            });
        };

        // Flatten first so a bad leaf leaves the store untouched.
        let mut flat = BTreeMap::new();
        flatten(locale, "", messages, &mut flat)?;
        let merged = flat.len();

        self.state
            .write()
            .messages
            .entry(locale.to_string())
            .or_default()
            .extend(flat);
        debug!(locale, messages = merged, "Locale messages merged");
        Ok(())
    }
}

fn flatten(
    locale: &str,
    prefix: &str,
    value: &Value,
    out: &mut BTreeMap<String, String>,
) -> Result<(), LocaleError> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(locale, &path, child, out)?;
            }
            Ok(())
        }
        Value::String(message) => {
            out.insert(prefix.to_string(), message.clone());
            Ok(())
        }
        other => Err(LocaleError::InvalidMessages {
            locale: locale.to_string(),
            message: format!("{prefix} must be a string or an object, got {other}"),
        }),
    }
}

fn validate_locale(locale: &str) -> Result<(), LocaleError> {
    let valid = (2..=10).contains(&locale.len())
        && locale
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '-' || c == '_')
        && locale.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    if valid {
        Ok(())
    } else {
        Err(LocaleError::InvalidLocale(locale.to_string()))
    }
}
