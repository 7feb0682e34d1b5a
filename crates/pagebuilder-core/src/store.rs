//! Host state-management layer.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::debug;

use pagebuilder_protocols::error::StateError;
use pagebuilder_protocols::{StateModule, StateStoreAccess};

/// Named state modules, in registration order.
#[derive(Default)]
pub struct StateStore {
    modules: RwLock<IndexMap<String, Arc<dyn StateModule>>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the module registered as `name` if it is a `T`.
    pub fn with_module<T, R>(&self, name: &str, f: impl FnOnce(&T) -> R) -> Option<R>
    where
        T: StateModule,
    {
        let module = self.module(name)?;
        let typed = module.as_any().downcast_ref::<T>()?;
        Some(f(typed))
    }

    /// Snapshot of every module, keyed by module name.
    pub fn snapshot(&self) -> Value {
        let modules = self.modules.read();
        let map: Map<String, Value> = modules
            .iter()
            .map(|(name, module)| (name.clone(), module.snapshot()))
            .collect();
        Value::Object(map)
    }

    /// Reset every module to its empty state.
    pub fn reset_all(&self) {
        for module in self.modules.read().values() {
            module.reset();
        }
    }

    pub fn len(&self) -> usize {
        self.modules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.read().is_empty()
    }
}

impl StateStoreAccess for StateStore {
    fn register_module(&self, name: &str, module: Arc<dyn StateModule>) -> Result<(), StateError> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StateError::InvalidModuleName(name.to_string()));
        }

        let mut modules = self.modules.write();
        if modules.contains_key(name) {
            return Err(StateError::DuplicateModule(name.to_string()));
        }
        debug!(module = name, "State module registered");
        modules.insert(name.to_string(), module);
        Ok(())
    }

    fn module(&self, name: &str) -> Option<Arc<dyn StateModule>> {
        self.modules.read().get(name).cloned()
    }

    fn module_names(&self) -> Vec<String> {
        self.modules.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct Counter {
        value: AtomicU32,
    }

    impl StateModule for Counter {
        fn reset(&self) {
            self.value.store(0, Ordering::SeqCst);
        }

        fn snapshot(&self) -> Value {
            Value::from(self.value.load(Ordering::SeqCst))
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct Other;

    impl StateModule for Other {
        fn reset(&self) {}

        fn snapshot(&self) -> Value {
            Value::Null
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_register_module() {
        let store = StateStore::new();
        assert!(store.is_empty());
        store
            .register_module("page", Arc::new(Counter::default()))
            .unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.module("page").is_some());
        assert!(store.module("element").is_none());
    }

    #[test]
    fn test_register_duplicate_module() {
        let store = StateStore::new();
        store
            .register_module("page", Arc::new(Counter::default()))
            .unwrap();
        let result = store.register_module("page", Arc::new(Counter::default()));
        assert_eq!(result, Err(StateError::DuplicateModule("page".to_string())));
    }

    #[test]
    fn test_register_invalid_name() {
        let store = StateStore::new();
        assert!(matches!(
            store.register_module("", Arc::new(Other)),
            Err(StateError::InvalidModuleName(_))
        ));
        assert!(matches!(
            store.register_module("a b", Arc::new(Other)),
            Err(StateError::InvalidModuleName(_))
        ));
    }

    #[test]
    fn test_module_names_in_order() {
        let store = StateStore::new();
        store.register_module("page", Arc::new(Other)).unwrap();
        store.register_module("element", Arc::new(Other)).unwrap();
        assert_eq!(store.module_names(), vec!["page", "element"]);
    }

    #[test]
    fn test_with_module_downcasts() {
        let store = StateStore::new();
        store
            .register_module("counter", Arc::new(Counter::default()))
            .unwrap();
        store.register_module("other", Arc::new(Other)).unwrap();

        let value = store.with_module("counter", |counter: &Counter| {
            counter.value.fetch_add(3, Ordering::SeqCst);
            counter.value.load(Ordering::SeqCst)
        });
        assert_eq!(value, Some(3));
        assert!(store.with_module("other", |_: &Counter| ()).is_none());
        assert!(store.with_module("missing", |_: &Counter| ()).is_none());
    }

    #[test]
    fn test_snapshot_and_reset() {
        let store = StateStore::new();
        store
            .register_module("counter", Arc::new(Counter::default()))
            .unwrap();
        store.with_module("counter", |counter: &Counter| {
            counter.value.store(7, Ordering::SeqCst)
        });
        assert_eq!(store.snapshot()["counter"], 7);

        store.reset_all();
        assert_eq!(store.snapshot()["counter"], 0);
    }
}
