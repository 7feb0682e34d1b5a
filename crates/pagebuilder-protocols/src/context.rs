//! Execution context shared by every type instance.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::i18n::Translator;
use crate::state::StateStoreAccess;

/// Application handle data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub public_url: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "pagebuilder".to_string(),
            version: String::new(),
            public_url: "http://localhost:3000".to_string(),
        }
    }
}

/// Environment flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentFlags {
    #[serde(default)]
    pub dev: bool,
    #[serde(default)]
    pub feature_flags: BTreeSet<String>,
}

/// Context passed to every type instance at construction.
///
/// Cloning is cheap: handles are reference counted. The context holds no
/// reference to the registry, so instances stored there do not form cycles.
#[derive(Clone)]
pub struct ExecutionContext {
    /// Application handle.
    pub app: AppInfo,

    /// Environment flags.
    pub env: EnvironmentFlags,

    /// Correlation ID for tracing.
    pub correlation_id: String,

    store: Arc<dyn StateStoreAccess>,
    translator: Arc<dyn Translator>,
}

impl ExecutionContext {
    /// Create a new execution context.
    pub fn new(
        app: AppInfo,
        env: EnvironmentFlags,
        store: Arc<dyn StateStoreAccess>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            app,
            env,
            correlation_id: uuid::Uuid::new_v4().to_string(),
            store,
            translator,
        }
    }

    /// The store handle.
    pub fn store(&self) -> &Arc<dyn StateStoreAccess> {
        &self.store
    }

    /// Translate a message key, falling back to the key itself.
    pub fn t(&self, key: &str) -> String {
        self.translator
            .translate(key)
            .unwrap_or_else(|| key.to_string())
    }

    pub fn is_dev(&self) -> bool {
        self.env.dev
    }

    pub fn has_feature(&self, flag: &str) -> bool {
        self.env.feature_flags.contains(flag)
    }
}

impl std::fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("app", &self.app)
            .field("env", &self.env)
            .field("correlation_id", &self.correlation_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;
    use crate::state::StateModule;

    struct NoStore;

    impl StateStoreAccess for NoStore {
        fn register_module(
            &self,
            name: &str,
            _module: Arc<dyn StateModule>,
        ) -> Result<(), StateError> {
            Err(StateError::InvalidModuleName(name.to_string()))
        }

        fn module(&self, _name: &str) -> Option<Arc<dyn StateModule>> {
            None
        }

        fn module_names(&self) -> Vec<String> {
            Vec::new()
        }
    }

    struct Upper;

    impl Translator for Upper {
        fn translate(&self, key: &str) -> Option<String> {
            key.strip_prefix("known.").map(|rest| rest.to_uppercase())
        }
    }

    fn context(env: EnvironmentFlags) -> ExecutionContext {
        ExecutionContext::new(AppInfo::default(), env, Arc::new(NoStore), Arc::new(Upper))
    }

    #[test]
    fn test_translate_with_fallback() {
        let ctx = context(EnvironmentFlags::default());
        assert_eq!(ctx.t("known.heading"), "HEADING");
        assert_eq!(ctx.t("unknown.heading"), "unknown.heading");
    }

    #[test]
    fn test_environment_flags() {
        let mut env = EnvironmentFlags {
            dev: true,
            ..Default::default()
        };
        env.feature_flags.insert("builder".to_string());
        let ctx = context(env);
        assert!(ctx.is_dev());
        assert!(ctx.has_feature("builder"));
        assert!(!ctx.has_feature("other"));
    }

    #[test]
    fn test_clone_shares_correlation_id() {
        let ctx = context(EnvironmentFlags::default());
        let cloned = ctx.clone();
        assert_eq!(cloned.correlation_id, ctx.correlation_id);
        assert!(!ctx.correlation_id.is_empty());
    }

    #[test]
    fn test_debug_omits_handles() {
        let ctx = context(EnvironmentFlags::default());
        let debug = format!("{:?}", ctx);
        assert!(debug.contains("ExecutionContext"));
        assert!(debug.contains("pagebuilder"));
    }
}
