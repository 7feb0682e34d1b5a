//! Realtime dispatch errors.

use thiserror::Error;

use super::StateError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RealtimeError {
    #[error("Invalid realtime event: {0}")]
    InvalidEvent(String),

    #[error("Handler for {event_type} failed: {message}")]
    Handler { event_type: String, message: String },

    #[error("State update failed: {0}")]
    State(#[from] StateError),
}
