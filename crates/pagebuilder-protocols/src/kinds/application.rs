//! `application` namespace contract.

use serde_json::{Map, Value};

use crate::registerable::Registerable;

/// A kind of application a workspace can contain.
pub trait ApplicationType: Registerable {
    fn icon_class(&self) -> &str;

    /// Route opened when an application of this type is selected.
    fn select_route(&self) -> &str;

    /// Name proposed when a new application is created.
    fn default_name(&self) -> String;

    fn capabilities(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("icon_class".to_string(), Value::from(self.icon_class()));
        map.insert("select_route".to_string(), Value::from(self.select_route()));
        map.insert("default_name".to_string(), Value::from(self.default_name()));
        map
    }
}
