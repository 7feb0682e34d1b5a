//! Namespaced type registry.

mod base;
mod typed;

pub use base::Registry;
