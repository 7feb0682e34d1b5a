//! Error types for the page builder protocol layer.

mod bootstrap;
mod element;
mod locale;
mod realtime;
mod registry;
mod state;

pub use bootstrap::*;
pub use element::*;
pub use locale::*;
pub use realtime::*;
pub use registry::*;
pub use state::*;
