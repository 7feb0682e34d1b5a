//! Realtime handlers keeping the page and element stores in sync.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use pagebuilder_protocols::error::RealtimeError;
use pagebuilder_protocols::{handler, ElementRecord, PageRecord, RealtimeChannel};

use crate::store::{ElementStore, PageStore};

/// Event types handled by the builder module.
pub const BUILDER_EVENTS: [&str; 6] = [
    "page_created",
    "page_updated",
    "page_deleted",
    "element_created",
    "element_updated",
    "element_deleted",
];

/// Subscribe the builder's handlers on `channel`.
///
/// | Event | Payload |
/// |---|---|
/// | `page_created` | `page` |
/// | `page_updated` | `page_id`, `values` |
/// | `page_deleted` | `page_id` |
/// | `element_created` | `element` |
/// | `element_updated` | `element_id`, `values` |
/// | `element_deleted` | `element_id` |
pub fn register_realtime_events(
    channel: &dyn RealtimeChannel,
    pages: Arc<PageStore>,
    elements: Arc<ElementStore>,
) -> Result<(), RealtimeError> {
    let store = pages.clone();
    channel.register_event(
        "page_created",
        handler(move |event| {
            let page: PageRecord = event.field("page")?;
            store.upsert(page);
            Ok(())
        }),
    )?;

    let store = pages.clone();
    channel.register_event(
        "page_updated",
        handler(move |event| {
            let id: u64 = event.field("page_id")?;
            let values: Map<String, Value> = event.field("values")?;
            store.update(id, &values)?;
            Ok(())
        }),
    )?;

    let page_elements = elements.clone();
    channel.register_event(
        "page_deleted",
        handler(move |event| {
            let id: u64 = event.field("page_id")?;
            pages.remove(id)?;
            let removed = page_elements.remove_page(id);
            debug!(page_id = id, elements = removed, "Deleted page and its elements");
            Ok(())
        }),
    )?;

    let store = elements.clone();
    channel.register_event(
        "element_created",
        handler(move |event| {
            let element: ElementRecord = event.field("element")?;
            store.insert(element);
            Ok(())
        }),
    )?;

    let store = elements.clone();
    channel.register_event(
        "element_updated",
        handler(move |event| {
            let id: u64 = event.field("element_id")?;
            let values: Map<String, Value> = event.field("values")?;
            store.update_values(id, &values)?;
            Ok(())
        }),
    )?;

    channel.register_event(
        "element_deleted",
        handler(move |event| {
            let id: u64 = event.field("element_id")?;
            elements.remove(id)?;
            Ok(())
        }),
    )?;

    Ok(())
}

#[cfg(test)]
#[path = "realtime_tests.rs"]
mod tests;
