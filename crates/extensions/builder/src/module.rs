//! Builder module bootstrap.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use pagebuilder_protocols::error::{BootstrapError, LocaleError, StateError};
use pagebuilder_protocols::{BootstrapContext, Module, Namespace};

use crate::realtime::register_realtime_events;
use crate::store::{ElementStore, PageStore, ELEMENT_MODULE, PAGE_MODULE};
use crate::types::declared_types;

/// Bundled English messages.
pub const EN_MESSAGES: &str = include_str!("../locales/en.json");

/// The page builder module.
pub struct BuilderModule {
    merge_locales: bool,
}

impl BuilderModule {
    pub fn new() -> Self {
        Self {
            merge_locales: true,
        }
    }

    /// Whether to merge the bundled messages during bootstrap.
    pub fn with_merge_locales(mut self, merge: bool) -> Self {
        self.merge_locales = merge;
        self
    }

    fn merge_bundled_locales(&self, ctx: &BootstrapContext) -> Result<(), BootstrapError> {
        let messages: Value =
            serde_json::from_str(EN_MESSAGES).map_err(|e| LocaleError::InvalidMessages {
                locale: "en".to_string(),
                message: e.to_string(),
            })?;
        ctx.locales.merge("en", &messages)?;
        Ok(())
    }
}

impl Default for BuilderModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for BuilderModule {
    fn id(&self) -> &str {
        "builder"
    }

    fn bootstrap(&self, ctx: &BootstrapContext) -> Result<(), BootstrapError> {
        if self.merge_locales {
            self.merge_bundled_locales(ctx)?;
            debug!("Builder locales merged");
        }

        // Handlers are bound to the stores below, so both names must be free
        // before anything subscribes.
        for name in [PAGE_MODULE, ELEMENT_MODULE] {
            if ctx.store.module(name).is_some() {
                return Err(StateError::DuplicateModule(name.to_string()).into());
            }
        }

        let pages = Arc::new(PageStore::new());
        let elements = Arc::new(ElementStore::new());
        register_realtime_events(ctx.realtime.as_ref(), pages.clone(), elements.clone())?;

        ctx.store.register_module(PAGE_MODULE, pages)?;
        ctx.store.register_module(ELEMENT_MODULE, elements)?;

        for namespace in Namespace::builtin() {
            ctx.registry.create_namespace(namespace)?;
        }

        let types = declared_types(&ctx.context);
        let count = types.len();
        for (namespace, entry) in types {
            ctx.registry.register(namespace, entry)?;
        }

        info!(types = count, "Builder types registered");
        Ok(())
    }
}

#[cfg(test)]
#[path = "module_tests.rs"]
mod tests;
