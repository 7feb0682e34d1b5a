//! Page builder module.
//!
//! This module provides:
//! - Element types: `heading`, `paragraph`
//! - Preview devices: `desktop`, `tablet`, `smartphone`
//! - Builder settings, page header items, side panels, the public site
//!   error page and the page duplication job
//! - The `page` and `element` state modules and their realtime handlers

mod module;
mod realtime;
mod store;
pub mod types;

pub use module::{BuilderModule, EN_MESSAGES};
pub use realtime::{register_realtime_events, BUILDER_EVENTS};
pub use store::{ElementStore, PageStore, ELEMENT_MODULE, PAGE_MODULE};
