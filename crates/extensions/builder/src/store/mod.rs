//! Page and element state modules.

mod element;
mod page;

pub use element::ElementStore;
pub use page::PageStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use pagebuilder_protocols::error::StateError;

/// Name of the page state module.
pub const PAGE_MODULE: &str = "page";

/// Name of the element state module.
pub const ELEMENT_MODULE: &str = "element";

/// Overlay `changes` onto `record`. The `id` field cannot be changed.
fn apply_changes<T>(record: &T, changes: &Map<String, Value>) -> Result<T, StateError>
where
    T: Serialize + DeserializeOwned,
{
    let mut value =
        serde_json::to_value(record).map_err(|e| StateError::InvalidPayload(e.to_string()))?;
    if let Value::Object(fields) = &mut value {
        for (key, change) in changes {
            if key != "id" {
                fields.insert(key.clone(), change.clone());
            }
        }
    }
    serde_json::from_value(value).map_err(|e| StateError::InvalidPayload(e.to_string()))
}
