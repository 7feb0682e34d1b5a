//! `pageSidePanel` namespace contract.

use serde_json::{Map, Value};

use crate::records::ElementRecord;
use crate::registerable::Registerable;

/// A tab of the side panel showing the selected element's configuration.
pub trait PageSidePanelType: Registerable {
    fn icon_class(&self) -> &str;

    fn component(&self) -> &str;

    /// A panel is deactivated while no element is selected.
    fn is_deactivated(&self, selected: Option<&ElementRecord>) -> bool {
        selected.is_none()
    }

    /// Text shown in place of a deactivated panel.
    fn deactivated_text(&self) -> String;

    fn capabilities(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("icon_class".to_string(), Value::from(self.icon_class()));
        map.insert("component".to_string(), Value::from(self.component()));
        map
    }
}
