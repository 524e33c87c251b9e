//! # Monadic Context
//!
//! Dependency injection through an immutable, tag-keyed context and deferred
//! computations that request what they need from it.
//!
//! The crate provides:
//!
//! - **Tags**: typed identity tokens used as context keys
//! - **Contexts**: immutable tag-to-value mappings with right-biased `join`
//! - **Computations**: deferred procedures that request dependencies by tag
//! - **Run engine**: answers each request from a context, in order
//! - **Composition**: `map`, `bind`, `apply`, `then`, `traverse` and `pipe!`
//!
//! ## Quick Start
//!
//! ```rust
//! use monadic_context::prelude::*;
//!
//! fn build_url(port: &Tag<u16>, host: &Tag<String>) -> Computation<String> {
//!     let (port, host) = (port.clone(), host.clone());
//!     requires(move |deps| {
//!         let port = deps.request(&port)?;
//!         let host = deps.request(&host)?;
//!         Ok(format!("http://{host}:{port}"))
//!     })
//! }
//!
//! let port = Tag::<u16>::new("port");
//! let host = Tag::<String>::new("host");
//!
//! let context = Context::from_pairs([port.bind(8080), host.bind("localhost".to_string())]);
//! assert_eq!(context.run(build_url(&port, &host)).unwrap(), "http://localhost:8080");
//!
//! let partial = Context::of(&port)(8080);
//! let err = partial.run(build_url(&port, &host)).unwrap_err();
//! assert_eq!(err.label(), "host");
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod computation;
pub mod context;
pub mod engine;
pub mod errors;
pub mod tag;
pub mod testing;

pub use computation::{
    apply, ask, asks, bind, map, pure, requires, then, traverse, with_service, Computation,
};
pub use context::{Binding, Context};
pub use engine::{Deps, ResolutionTrail, ResolvedTag};
pub use errors::{ContextError, MissingDependencyError, TypeMismatchError};
pub use tag::{Tag, TagId};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::computation::{
        apply, ask, asks, bind, map, pure, requires, then, traverse, with_service, Computation,
    };
    pub use crate::context::{Binding, Context};
    pub use crate::engine::{Deps, ResolutionTrail};
    pub use crate::errors::{ContextError, MissingDependencyError};
    pub use crate::tag::Tag;
    pub use crate::{compose, pipe};
}
