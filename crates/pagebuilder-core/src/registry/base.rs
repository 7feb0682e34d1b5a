//! Registry implementation.
//!
//! Every namespace is an insertion-ordered map from type key to entry. The
//! order is significant: it is the default display order of any listing.
//!
//! Duplicate namespaces and duplicate type keys are hard errors. Once
//! [`Registry::freeze`] has been called all writes fail with
//! [`RegistryError::Frozen`]; reads are unaffected.

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, info};

use pagebuilder_protocols::error::RegistryError;
use pagebuilder_protocols::module::RegistryAccess;
use pagebuilder_protocols::{validate_type_key, Namespace, TypeEntry};

type NamespaceTable = IndexMap<String, TypeEntry>;

#[derive(Default)]
struct RegistryState {
    namespaces: IndexMap<Namespace, NamespaceTable>,
    frozen: bool,
}

/// Process-wide catalog of namespaces, constructed once and passed by
/// reference to everything that registers or queries types.
#[derive(Default)]
pub struct Registry {
    state: RwLock<RegistryState>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new, empty namespace.
    ///
    /// Returns an error if the namespace already exists or the registry is frozen.
    pub fn create_namespace(&self, namespace: Namespace) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        if state.frozen {
            return Err(RegistryError::Frozen);
        }
        if state.namespaces.contains_key(&namespace) {
            return Err(RegistryError::DuplicateNamespace(namespace));
        }

        debug!(namespace = %namespace, "Namespace created");
        state.namespaces.insert(namespace, IndexMap::new());
        Ok(())
    }

    /// Append an entry to a namespace, keyed by its own type key.
    ///
    /// Nothing is mutated when an error is returned.
    pub fn register(&self, namespace: Namespace, entry: TypeEntry) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        if state.frozen {
            return Err(RegistryError::Frozen);
        }
        let Some(table) = state.namespaces.get_mut(&namespace) else {
            return Err(RegistryError::UnknownNamespace(namespace));
        };
        if !entry.accepts(&namespace) {
            return Err(RegistryError::NamespaceMismatch {
                namespace,
                entry: entry.kind().to_string(),
            });
        }

        let key = entry.type_key().to_string();
        validate_type_key(&key)?;
        if table.contains_key(&key) {
            return Err(RegistryError::DuplicateTypeKey { namespace, key });
        }

        debug!(namespace = %namespace, type_key = %key, "Type registered");
        table.insert(key, entry);
        Ok(())
    }

    /// Get an entry by namespace and key.
    pub fn get(&self, namespace: &Namespace, key: &str) -> Result<TypeEntry, RegistryError> {
        let state = self.state.read();
        let table = state
            .namespaces
            .get(namespace)
            .ok_or_else(|| RegistryError::UnknownNamespace(namespace.clone()))?;
        table
            .get(key)
            .cloned()
            .ok_or_else(|| RegistryError::TypeNotFound {
                namespace: namespace.clone(),
                key: key.to_string(),
            })
    }

    /// All entries of a namespace in registration order.
    ///
    /// The returned snapshot can be iterated any number of times.
    pub fn get_all(&self, namespace: &Namespace) -> Result<Vec<TypeEntry>, RegistryError> {
        let state = self.state.read();
        state
            .namespaces
            .get(namespace)
            .map(|table| table.values().cloned().collect())
            .ok_or_else(|| RegistryError::UnknownNamespace(namespace.clone()))
    }

    /// All entries sorted by their order hint. Ties keep registration order.
    pub fn get_ordered_list(&self, namespace: &Namespace) -> Result<Vec<TypeEntry>, RegistryError> {
        let mut entries = self.get_all(namespace)?;
        entries.sort_by_key(|entry| entry.order());
        Ok(entries)
    }

    /// Check if a key is registered. Unknown namespaces yield `false`.
    pub fn has(&self, namespace: &Namespace, key: &str) -> bool {
        self.state
            .read()
            .namespaces
            .get(namespace)
            .is_some_and(|table| table.contains_key(key))
    }

    pub fn has_namespace(&self, namespace: &Namespace) -> bool {
        self.state.read().namespaces.contains_key(namespace)
    }

    /// Namespaces in creation order.
    pub fn namespaces(&self) -> Vec<Namespace> {
        self.state.read().namespaces.keys().cloned().collect()
    }

    /// Number of entries in a namespace.
    pub fn len(&self, namespace: &Namespace) -> Result<usize, RegistryError> {
        self.state
            .read()
            .namespaces
            .get(namespace)
            .map(IndexMap::len)
            .ok_or_else(|| RegistryError::UnknownNamespace(namespace.clone()))
    }

    /// Check if no namespace has been created yet.
    pub fn has_no_namespaces(&self) -> bool {
        self.state.read().namespaces.is_empty()
    }

    /// Namespaces and their keys, both in registration order.
    pub fn snapshot(&self) -> Vec<(Namespace, Vec<String>)> {
        self.state
            .read()
            .namespaces
            .iter()
            .map(|(namespace, table)| (namespace.clone(), table.keys().cloned().collect()))
            .collect()
    }

    /// Descriptors of every entry in a namespace.
    pub fn describe(&self, namespace: &Namespace) -> Result<Value, RegistryError> {
        let entries = self.get_all(namespace)?;
        Ok(Value::Array(
            entries.iter().map(TypeEntry::describe).collect(),
        ))
    }

    /// Reject all further writes.
    pub fn freeze(&self) {
        let mut state = self.state.write();
        if !state.frozen {
            state.frozen = true;
            let types: usize = state.namespaces.values().map(IndexMap::len).sum();
            info!(
                namespaces = state.namespaces.len(),
                types, "Registry frozen"
            );
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.state.read().frozen
    }
}

impl RegistryAccess for Registry {
    fn create_namespace(&self, namespace: Namespace) -> Result<(), RegistryError> {
        Registry::create_namespace(self, namespace)
    }

    fn register(&self, namespace: Namespace, entry: TypeEntry) -> Result<(), RegistryError> {
        Registry::register(self, namespace, entry)
    }

    fn get(&self, namespace: &Namespace, key: &str) -> Result<TypeEntry, RegistryError> {
        Registry::get(self, namespace, key)
    }

    fn get_all(&self, namespace: &Namespace) -> Result<Vec<TypeEntry>, RegistryError> {
        Registry::get_all(self, namespace)
    }

    fn has(&self, namespace: &Namespace, key: &str) -> bool {
        Registry::has(self, namespace, key)
    }
}

#[cfg(test)]
#[path = "base_tests.rs"]
mod tests;
