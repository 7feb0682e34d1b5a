//! Registry errors.
//!
//! All of these are configuration errors raised while the registry is being
//! populated or queried before bootstrap completed. None of them is retried.

use thiserror::Error;

use crate::namespace::Namespace;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Namespace already registered: {0}")]
    DuplicateNamespace(Namespace),

    #[error("Namespace not registered: {0}")]
    UnknownNamespace(Namespace),

    #[error("Type already registered in namespace {namespace}: {key}")]
    DuplicateTypeKey { namespace: Namespace, key: String },

    #[error("Type {key} not found in namespace {namespace}")]
    TypeNotFound { namespace: Namespace, key: String },

    #[error("Cannot register a {entry} type into namespace {namespace}")]
    NamespaceMismatch { namespace: Namespace, entry: String },

    #[error("Invalid type key: {0:?}")]
    InvalidTypeKey(String),

    #[error("Invalid namespace name: {0:?}")]
    InvalidNamespace(String),

    #[error("Registry is frozen, late registration is not supported")]
    Frozen,
}
