//! # Page Builder Core
//!
//! Host-side implementation of the page builder extension point system.
//!
//! ## Components
//!
//! - [`Registry`] - Namespaced, order-preserving catalog of type instances
//! - [`StateStore`] - Named state modules shared across the application
//! - [`RealtimeHub`] - In-process routing of realtime events to handlers
//! - [`LocaleStore`] - Merged localization messages
//! - [`HostApp`] - Owns the above, installs modules and freezes the registry

pub mod host;
pub mod i18n;
pub mod realtime;
pub mod registry;
pub mod store;

pub use host::{HostApp, HostState};
pub use i18n::LocaleStore;
pub use realtime::RealtimeHub;
pub use registry::Registry;
pub use store::StateStore;
