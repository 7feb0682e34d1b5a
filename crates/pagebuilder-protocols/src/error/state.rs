//! State container errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("State module already registered: {0}")]
    DuplicateModule(String),

    #[error("Invalid state module name: {0:?}")]
    InvalidModuleName(String),

    #[error("{kind} not found: {id}")]
    RecordNotFound { kind: &'static str, id: u64 },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}
