//! Immutable, tag-keyed contexts.
//!
//! This module provides:
//! - Type-erased bindings of a tag to a value
//! - The `Context` mapping with its constructors, `join` and lookups

mod binding;
mod store;

pub use binding::Binding;
pub use store::Context;
