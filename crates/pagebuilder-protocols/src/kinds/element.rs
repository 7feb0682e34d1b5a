//! `element` namespace contract.

use serde_json::{Map, Value};

use crate::error::ElementValueError;
use crate::registerable::Registerable;

/// A kind of element that can be placed on a page.
pub trait ElementType: Registerable {
    fn description(&self) -> String;

    fn icon_class(&self) -> &str;

    /// UI component rendering the element.
    fn component(&self) -> &str;

    /// UI component editing the element's values.
    fn form_component(&self) -> &str;

    /// Values of a freshly created element.
    fn default_values(&self) -> Map<String, Value>;

    /// Fill in missing values with defaults and validate the rest.
    fn prepare_values(&self, values: &mut Map<String, Value>) -> Result<(), ElementValueError>;

    fn capabilities(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("description".to_string(), Value::from(self.description()));
        map.insert("icon_class".to_string(), Value::from(self.icon_class()));
        map.insert("component".to_string(), Value::from(self.component()));
        map.insert(
            "form_component".to_string(),
            Value::from(self.form_component()),
        );
        map.insert(
            "default_values".to_string(),
            Value::Object(self.default_values()),
        );
        map
    }
}
