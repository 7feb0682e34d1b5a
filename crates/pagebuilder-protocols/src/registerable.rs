//! Base trait for registered types.

use serde_json::{Map, Value};

use crate::error::RegistryError;

/// Trait for items that can be stored in a registry namespace.
///
/// Identity inside a namespace is the [`type_key`](Registerable::type_key),
/// never the object address.
pub trait Registerable: Send + Sync {
    /// Returns the unique key of this type within its namespace.
    fn type_key(&self) -> &str;

    /// Human-readable, translated label.
    fn label(&self) -> String;

    /// Display order hint. Lower sorts first; ties keep registration order.
    fn order(&self) -> i32 {
        0
    }

    /// Serializable descriptor for listings.
    fn describe(&self) -> Value {
        Value::Object(base_descriptor(self))
    }
}

/// The `type`/`label`/`order` fields shared by every descriptor.
pub fn base_descriptor<R: Registerable + ?Sized>(item: &R) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("type".to_string(), Value::from(item.type_key()));
    map.insert("label".to_string(), Value::from(item.label()));
    map.insert("order".to_string(), Value::from(item.order()));
    map
}

/// Checks that a type key is non-empty and made of `[a-z0-9_-]`, starting
/// with an alphanumeric character.
pub fn validate_type_key(key: &str) -> Result<(), RegistryError> {
    let mut chars = key.chars();
    let valid_head = chars.next().is_some_and(|c| c.is_ascii_alphanumeric());
    let valid_tail = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid_head && valid_tail {
        Ok(())
    } else {
        Err(RegistryError::InvalidTypeKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Registerable for Plain {
        fn type_key(&self) -> &str {
            "plain"
        }

        fn label(&self) -> String {
            "Plain".to_string()
        }
    }

    #[test]
    fn test_default_order() {
        assert_eq!(Plain.order(), 0);
    }

    #[test]
    fn test_default_describe() {
        let described = Plain.describe();
        assert_eq!(described["type"], "plain");
        assert_eq!(described["label"], "Plain");
        assert_eq!(described["order"], 0);
    }

    #[test]
    fn test_validate_type_key() {
        assert!(validate_type_key("heading").is_ok());
        assert!(validate_type_key("data_sources").is_ok());
        assert!(validate_type_key("h1-large").is_ok());
        assert!(validate_type_key("").is_err());
        assert!(validate_type_key("_private").is_err());
        assert!(validate_type_key("with space").is_err());
        assert!(validate_type_key("dotted.key").is_err());
    }
}
