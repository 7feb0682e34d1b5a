//! Shared application state contracts.

use std::any::Any;
use std::sync::Arc;

use serde_json::Value;

use crate::error::StateError;

/// A named, independently defined unit of shared application state.
pub trait StateModule: Send + Sync + 'static {
    /// Clear all state held by this module.
    fn reset(&self);

    /// Serializable view of the current state.
    fn snapshot(&self) -> Value;

    /// Returns a reference to the module as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Host state-management layer as seen by modules and types.
pub trait StateStoreAccess: Send + Sync {
    /// Install a state module under a unique name.
    fn register_module(&self, name: &str, module: Arc<dyn StateModule>) -> Result<(), StateError>;

    /// Look up a module by name.
    fn module(&self, name: &str) -> Option<Arc<dyn StateModule>>;

    /// Registered module names, in registration order.
    fn module_names(&self) -> Vec<String>;
}
