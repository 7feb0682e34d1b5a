//! `device` namespace contract.

use serde_json::{Map, Value};

use crate::registerable::Registerable;

/// A target device the editor can preview a page on.
pub trait DeviceType: Registerable {
    fn icon_class(&self) -> &str;

    /// Viewport width in pixels, `None` when the preview fills the editor.
    fn max_width(&self) -> Option<u32>;

    fn capabilities(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("icon_class".to_string(), Value::from(self.icon_class()));
        map.insert(
            "max_width".to_string(),
            self.max_width().map(Value::from).unwrap_or(Value::Null),
        );
        map
    }
}
