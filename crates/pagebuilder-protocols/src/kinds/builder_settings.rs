//! `builderSettings` namespace contract.

use serde_json::{Map, Value};

use crate::registerable::Registerable;

/// A tab in the builder settings modal.
pub trait BuilderSettingsType: Registerable {
    fn icon_class(&self) -> &str;

    /// UI component rendering the tab body.
    fn component(&self) -> &str;

    fn capabilities(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("icon_class".to_string(), Value::from(self.icon_class()));
        map.insert("component".to_string(), Value::from(self.component()));
        map
    }
}
