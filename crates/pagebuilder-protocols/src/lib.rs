//! # Page Builder Protocols
//!
//! Contract definitions for the page builder extension registry.
//! Contains only interfaces and plain data - no registry implementation.
//!
//! ## Core Traits
//!
//! - [`Registerable`] - Base trait for every registered type
//! - [`ElementType`], [`DeviceType`], [`PageSidePanelType`], ... - Per-namespace capability contracts
//! - [`RegistryAccess`] - Registration surface handed to modules
//! - [`StateStoreAccess`] / [`StateModule`] - Shared application state
//! - [`RealtimeChannel`] - Inbound realtime event wiring
//! - [`Module`] - A unit that bootstraps types into the registry

pub mod context;
pub mod entry;
pub mod error;
pub mod i18n;
pub mod kinds;
pub mod module;
pub mod namespace;
pub mod realtime;
pub mod records;
pub mod registerable;
pub mod state;

pub use context::{AppInfo, EnvironmentFlags, ExecutionContext};
pub use entry::TypeEntry;
pub use error::{
    BootstrapError, ElementValueError, LocaleError, RealtimeError, RegistryError, StateError,
};
pub use i18n::{LocaleAccess, Translator};
pub use kinds::*;
pub use module::{BootstrapContext, Module, RegistryAccess};
pub use namespace::{Namespace, NamespaceName};
pub use realtime::{handler, RealtimeChannel, RealtimeEvent, RealtimeHandler};
pub use records::{ElementRecord, ErrorContext, JobRecord, JobState, PageRecord};
pub use registerable::{base_descriptor, validate_type_key, Registerable};
pub use state::{StateModule, StateStoreAccess};
