//! In-process realtime event routing.
//!
//! The transport is external; it hands decoded events to [`RealtimeHub::dispatch`].

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, warn};

use pagebuilder_protocols::error::RealtimeError;
use pagebuilder_protocols::{RealtimeChannel, RealtimeEvent, RealtimeHandler};

/// Routes events to the handlers registered for their type.
#[derive(Default)]
pub struct RealtimeHub {
    handlers: RwLock<IndexMap<String, Vec<RealtimeHandler>>>,
}

impl RealtimeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every handler of the event's type in registration order.
    ///
    /// Returns the number of handlers that ran. Stops at the first failing
    /// handler and returns its error.
    pub fn dispatch(&self, event: &RealtimeEvent) -> Result<usize, RealtimeError> {
        // Handlers may register further handlers, so run them unlocked.
        let handlers = self
            .handlers
            .read()
            .get(&event.event_type)
            .cloned()
            .unwrap_or_default();

        if handlers.is_empty() {
            debug!(event_type = %event.event_type, "No realtime handler registered");
            return Ok(0);
        }

        for handler in &handlers {
            if let Err(e) = handler(event) {
                warn!(event_type = %event.event_type, error = %e, "Realtime handler failed");
                return Err(e);
            }
        }
        debug!(event_type = %event.event_type, handlers = handlers.len(), "Realtime event dispatched");
        Ok(handlers.len())
    }

    /// Parse a raw JSON message and dispatch it.
    pub fn dispatch_json(&self, raw: &str) -> Result<usize, RealtimeError> {
        let event = RealtimeEvent::from_json(raw)?;
        self.dispatch(&event)
    }

    pub fn handler_count(&self, event_type: &str) -> usize {
        self.handlers
            .read()
            .get(event_type)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

impl RealtimeChannel for RealtimeHub {
    fn register_event(
        &self,
        event_type: &str,
        handler: RealtimeHandler,
    ) -> Result<(), RealtimeError> {
        let event_type = event_type.trim();
        if event_type.is_empty() {
            return Err(RealtimeError::InvalidEvent(
                "cannot subscribe to an empty event type".to_string(),
            ));
        }
        self.handlers
            .write()
            .entry(event_type.to_string())
            .or_default()
            .push(handler);
        debug!(event_type, "Realtime handler registered");
        Ok(())
    }

    fn event_types(&self) -> Vec<String> {
        self.handlers.read().keys().cloned().collect()
    }
}
