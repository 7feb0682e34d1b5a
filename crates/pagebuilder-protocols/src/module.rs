//! Module bootstrap contracts.

use std::sync::Arc;

use crate::context::ExecutionContext;
use crate::entry::TypeEntry;
use crate::error::{BootstrapError, RegistryError};
use crate::i18n::LocaleAccess;
use crate::namespace::Namespace;
use crate::realtime::RealtimeChannel;
use crate::state::StateStoreAccess;

/// Registration and query surface of the namespaced registry.
pub trait RegistryAccess: Send + Sync {
    /// Declare a new, empty namespace.
    fn create_namespace(&self, namespace: Namespace) -> Result<(), RegistryError>;

    /// Append `entry` to `namespace`, keyed by its type key.
    fn register(&self, namespace: Namespace, entry: TypeEntry) -> Result<(), RegistryError>;

    fn get(&self, namespace: &Namespace, key: &str) -> Result<TypeEntry, RegistryError>;

    /// All entries of `namespace`, in registration order.
    fn get_all(&self, namespace: &Namespace) -> Result<Vec<TypeEntry>, RegistryError>;

    fn has(&self, namespace: &Namespace, key: &str) -> bool;
}

/// Everything a module may touch while bootstrapping.
#[derive(Clone)]
pub struct BootstrapContext {
    pub registry: Arc<dyn RegistryAccess>,
    pub store: Arc<dyn StateStoreAccess>,
    pub realtime: Arc<dyn RealtimeChannel>,
    pub locales: Arc<dyn LocaleAccess>,
    /// Context handed to every type the module constructs.
    pub context: ExecutionContext,
}

/// A unit that contributes types, state and realtime handlers to the host.
pub trait Module: Send + Sync {
    /// Unique module identifier.
    fn id(&self) -> &str;

    /// Run the module's bootstrap sequence once.
    ///
    /// Errors are configuration errors and must abort startup.
    fn bootstrap(&self, ctx: &BootstrapContext) -> Result<(), BootstrapError>;
}
