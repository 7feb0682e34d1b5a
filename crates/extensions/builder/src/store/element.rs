//! Element state.

use std::any::Any;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::{json, Map, Value};
use tracing::debug;

use pagebuilder_protocols::error::StateError;
use pagebuilder_protocols::{ElementRecord, StateModule};

#[derive(Default)]
struct ElementState {
    elements: IndexMap<u64, ElementRecord>,
    selected: Option<u64>,
}

/// Elements of the loaded pages and the selected element.
#[derive(Default)]
pub struct ElementStore {
    state: RwLock<ElementState>,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element, replacing any element with the same id.
    pub fn insert(&self, element: ElementRecord) {
        debug!(element_id = element.id, page_id = element.page_id, "Element stored");
        self.state.write().elements.insert(element.id, element);
    }

    /// Merge `values` into an element's values.
    pub fn update_values(
        &self,
        id: u64,
        values: &Map<String, Value>,
    ) -> Result<ElementRecord, StateError> {
        let mut state = self.state.write();
        let element = state
            .elements
            .get_mut(&id)
            .ok_or(StateError::RecordNotFound { kind: "Element", id })?;
        for (key, value) in values {
            element.values.insert(key.clone(), value.clone());
        }
        debug!(element_id = id, "Element updated");
        Ok(element.clone())
    }

    /// Remove an element, clearing the selection if it pointed at it.
    pub fn remove(&self, id: u64) -> Result<ElementRecord, StateError> {
        let mut state = self.state.write();
        let element = state
            .elements
            .shift_remove(&id)
            .ok_or(StateError::RecordNotFound { kind: "Element", id })?;
        if state.selected == Some(id) {
            state.selected = None;
        }
        debug!(element_id = id, "Element removed");
        Ok(element)
    }

    /// Remove every element of a page. Returns how many were removed.
    pub fn remove_page(&self, page_id: u64) -> usize {
        let mut state = self.state.write();
        let before = state.elements.len();
        state.elements.retain(|_, element| element.page_id != page_id);
        let removed = before - state.elements.len();

        let selected_gone = state
            .selected
            .is_some_and(|id| !state.elements.contains_key(&id));
        if selected_gone {
            state.selected = None;
        }
        debug!(page_id, removed, "Page elements removed");
        removed
    }

    pub fn get(&self, id: u64) -> Option<ElementRecord> {
        self.state.read().elements.get(&id).cloned()
    }

    /// Elements of a page sorted by their `order`, then by id.
    pub fn for_page(&self, page_id: u64) -> Vec<ElementRecord> {
        let mut elements: Vec<ElementRecord> = self
            .state
            .read()
            .elements
            .values()
            .filter(|element| element.page_id == page_id)
            .cloned()
            .collect();
        elements.sort_by_key(|element| (element.order, element.id));
        elements
    }

    pub fn select(&self, id: u64) -> Result<(), StateError> {
        let mut state = self.state.write();
        if !state.elements.contains_key(&id) {
            return Err(StateError::RecordNotFound { kind: "Element", id });
        }
        state.selected = Some(id);
        Ok(())
    }

    pub fn selected(&self) -> Option<ElementRecord> {
        let state = self.state.read();
        state.selected.and_then(|id| state.elements.get(&id).cloned())
    }

    pub fn len(&self) -> usize {
        self.state.read().elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().elements.is_empty()
    }

    /// All elements sorted by page, then `order`, then id.
    pub fn list(&self) -> Vec<ElementRecord> {
        let mut elements: Vec<ElementRecord> =
            self.state.read().elements.values().cloned().collect();
        elements.sort_by_key(|element| (element.page_id, element.order, element.id));
        elements
    }
}

impl StateModule for ElementStore {
    fn reset(&self) {
        let mut state = self.state.write();
        state.elements.clear();
        state.selected = None;
    }

    fn snapshot(&self) -> Value {
        let selected = self.state.read().selected;
        json!({
            "elements": self.list(),
            "selected": selected,
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
