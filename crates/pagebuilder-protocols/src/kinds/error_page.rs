//! `errorPage` namespace contract.

use serde_json::{Map, Value};

use crate::records::ErrorContext;
use crate::registerable::Registerable;

/// A page shown instead of the default error page for matching errors.
pub trait ErrorPageType: Registerable {
    fn component(&self) -> &str;

    /// Whether this page handles `error`.
    fn is_applicable(&self, error: &ErrorContext) -> bool;

    fn capabilities(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("component".to_string(), Value::from(self.component()));
        map
    }
}
