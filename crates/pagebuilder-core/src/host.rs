//! Host application that owns the registry and installs modules.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{error, info, info_span};

use pagebuilder_protocols::error::{BootstrapError, LocaleError, RegistryError};
use pagebuilder_protocols::{AppInfo, BootstrapContext, EnvironmentFlags, ExecutionContext, Module};

use crate::i18n::LocaleStore;
use crate::realtime::RealtimeHub;
use crate::registry::Registry;
use crate::store::StateStore;

/// Host lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HostState {
    /// Accepting module installs.
    Starting = 0,
    /// Startup finished; the registry is frozen.
    Running = 1,
}

impl From<u8> for HostState {
    fn from(v: u8) -> Self {
        match v {
            1 => HostState::Running,
            _ => HostState::Starting,
        }
    }
}

/// The host application.
///
/// Holds the single registry instance of the process and the shared
/// services handed to modules during bootstrap.
pub struct HostApp {
    registry: Arc<Registry>,
    store: Arc<StateStore>,
    realtime: Arc<RealtimeHub>,
    locales: Arc<LocaleStore>,
    context: ExecutionContext,
    installed: RwLock<Vec<String>>,
    state: AtomicU8,
}

impl HostApp {
    /// Create a host with `locale` as the active locale.
    pub fn new(app: AppInfo, env: EnvironmentFlags, locale: &str) -> Result<Self, LocaleError> {
        let registry = Arc::new(Registry::new());
        let store = Arc::new(StateStore::new());
        let realtime = Arc::new(RealtimeHub::new());
        let locales = Arc::new(LocaleStore::new(locale)?);
        let context = ExecutionContext::new(app, env, store.clone(), locales.clone());

        Ok(Self {
            registry,
            store,
            realtime,
            locales,
            context,
            installed: RwLock::new(Vec::new()),
            state: AtomicU8::new(HostState::Starting as u8),
        })
    }

    /// Run a module's bootstrap sequence against this host.
    ///
    /// Each module may be installed once, and only before [`HostApp::finish_startup`].
    pub fn install(&self, module: &dyn Module) -> Result<(), BootstrapError> {
        let id = module.id().to_string();
        if self.installed.read().contains(&id) {
            return Err(BootstrapError::ModuleAlreadyInstalled(id));
        }
        if self.registry.is_frozen() {
            return Err(RegistryError::Frozen.into());
        }

        let _span = info_span!("bootstrap", module = %id).entered();
        info!("Installing module: {}", id);

        let ctx = self.bootstrap_context();
        if let Err(e) = module.bootstrap(&ctx) {
            error!(error = %e, "Module bootstrap failed: {}", id);
            return Err(e);
        }

        self.installed.write().push(id.clone());
        info!("Module installed: {}", id);
        Ok(())
    }

    /// End the startup phase and freeze the registry.
    pub fn finish_startup(&self) {
        self.registry.freeze();
        self.state.store(HostState::Running as u8, Ordering::SeqCst);
        info!(modules = self.installed.read().len(), "Startup finished");
    }

    pub fn state(&self) -> HostState {
        HostState::from(self.state.load(Ordering::SeqCst))
    }

    /// Services handed to a bootstrapping module.
    pub fn bootstrap_context(&self) -> BootstrapContext {
        BootstrapContext {
            registry: self.registry.clone(),
            store: self.store.clone(),
            realtime: self.realtime.clone(),
            locales: self.locales.clone(),
            context: self.context.clone(),
        }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }

    pub fn realtime(&self) -> &Arc<RealtimeHub> {
        &self.realtime
    }

    pub fn locales(&self) -> &Arc<LocaleStore> {
        &self.locales
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    /// Installed module ids, in install order.
    pub fn installed_modules(&self) -> Vec<String> {
        self.installed.read().clone()
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
