//! Realtime event contracts.
//!
//! The transport that delivers messages is out of scope; these types cover
//! the already-decoded event and the handler wiring.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RealtimeError;

/// One inbound realtime message: `{"type": "...", ...payload}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtimeEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl RealtimeEvent {
    /// Create an event. A non-object payload is stored under `data`.
    pub fn new(event_type: impl Into<String>, payload: Value) -> Self {
        let payload = match payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        Self {
            event_type: event_type.into(),
            payload,
        }
    }

    /// Parse an event from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self, RealtimeError> {
        let event: RealtimeEvent =
            serde_json::from_str(raw).map_err(|e| RealtimeError::InvalidEvent(e.to_string()))?;
        if event.event_type.trim().is_empty() {
            return Err(RealtimeError::InvalidEvent("empty event type".to_string()));
        }
        Ok(event)
    }

    /// Deserialize one payload field.
    pub fn field<T: DeserializeOwned>(&self, name: &str) -> Result<T, RealtimeError> {
        let value = self.payload.get(name).ok_or_else(|| {
            RealtimeError::InvalidEvent(format!("{} is missing field {}", self.event_type, name))
        })?;
        serde_json::from_value(value.clone()).map_err(|e| {
            RealtimeError::InvalidEvent(format!("{}.{}: {}", self.event_type, name, e))
        })
    }
}

/// Handler invoked for a matching event type.
pub type RealtimeHandler = Arc<dyn Fn(&RealtimeEvent) -> Result<(), RealtimeError> + Send + Sync>;

/// Wrap a closure as a [`RealtimeHandler`].
pub fn handler<F>(f: F) -> RealtimeHandler
where
    F: Fn(&RealtimeEvent) -> Result<(), RealtimeError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Channel that routes inbound events to handlers defined by modules.
pub trait RealtimeChannel: Send + Sync {
    /// Subscribe `handler` to `event_type`. Several handlers per type are allowed.
    fn register_event(&self, event_type: &str, handler: RealtimeHandler)
        -> Result<(), RealtimeError>;

    /// Event types with at least one handler.
    fn event_types(&self) -> Vec<String>;
}
