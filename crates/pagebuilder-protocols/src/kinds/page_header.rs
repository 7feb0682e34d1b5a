//! `pageHeaderItem` namespace contract.

use serde_json::{Map, Value};

use crate::registerable::Registerable;

/// An item in the page editor header bar.
pub trait PageHeaderItemType: Registerable {
    fn icon_class(&self) -> &str;

    /// Context component opened when the item is clicked.
    fn component(&self) -> &str;

    fn capabilities(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("icon_class".to_string(), Value::from(self.icon_class()));
        map.insert("component".to_string(), Value::from(self.component()));
        map
    }
}
