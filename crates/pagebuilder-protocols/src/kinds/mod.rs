//! Capability contracts, one per built-in namespace.

mod application;
mod builder_settings;
mod device;
mod element;
mod error_page;
mod job;
mod page_header;
mod page_side_panel;

pub use application::*;
pub use builder_settings::*;
pub use device::*;
pub use element::*;
pub use error_page::*;
pub use job::*;
pub use page_header::*;
pub use page_side_panel::*;
