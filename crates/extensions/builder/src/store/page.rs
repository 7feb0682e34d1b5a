//! Page state.

use std::any::Any;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::{json, Map, Value};
use tracing::debug;

use pagebuilder_protocols::error::StateError;
use pagebuilder_protocols::{PageRecord, StateModule};

use super::apply_changes;

#[derive(Default)]
struct PageState {
    pages: IndexMap<u64, PageRecord>,
    selected: Option<u64>,
}

/// Pages of the builder being edited and the selected page.
#[derive(Default)]
pub struct PageStore {
    state: RwLock<PageState>,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a page, replacing any page with the same id.
    pub fn upsert(&self, page: PageRecord) {
        debug!(page_id = page.id, "Page stored");
        self.state.write().pages.insert(page.id, page);
    }

    /// Apply partial `changes` to an existing page.
    pub fn update(&self, id: u64, changes: &Map<String, Value>) -> Result<PageRecord, StateError> {
        let mut state = self.state.write();
        let page = state
            .pages
            .get_mut(&id)
            .ok_or(StateError::RecordNotFound { kind: "Page", id })?;
        *page = apply_changes(page, changes)?;
        debug!(page_id = id, "Page updated");
        Ok(page.clone())
    }

    /// Remove a page, clearing the selection if it pointed at it.
    pub fn remove(&self, id: u64) -> Result<PageRecord, StateError> {
        let mut state = self.state.write();
        let page = state
            .pages
            .shift_remove(&id)
            .ok_or(StateError::RecordNotFound { kind: "Page", id })?;
        if state.selected == Some(id) {
            state.selected = None;
        }
        debug!(page_id = id, "Page removed");
        Ok(page)
    }

    pub fn get(&self, id: u64) -> Option<PageRecord> {
        self.state.read().pages.get(&id).cloned()
    }

    /// Pages sorted by their `order`, then by id.
    pub fn list(&self) -> Vec<PageRecord> {
        let mut pages: Vec<PageRecord> = self.state.read().pages.values().cloned().collect();
        pages.sort_by_key(|page| (page.order, page.id));
        pages
    }

    pub fn select(&self, id: u64) -> Result<(), StateError> {
        let mut state = self.state.write();
        if !state.pages.contains_key(&id) {
            return Err(StateError::RecordNotFound { kind: "Page", id });
        }
        state.selected = Some(id);
        Ok(())
    }

    pub fn selected(&self) -> Option<PageRecord> {
        let state = self.state.read();
        state.selected.and_then(|id| state.pages.get(&id).cloned())
    }

    pub fn len(&self) -> usize {
        self.state.read().pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().pages.is_empty()
    }
}

impl StateModule for PageStore {
    fn reset(&self) {
        let mut state = self.state.write();
        state.pages.clear();
        state.selected = None;
    }

    fn snapshot(&self) -> Value {
        let selected = self.state.read().selected;
        json!({
            "pages": self.list(),
            "selected": selected,
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
