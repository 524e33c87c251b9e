//! The run engine.
//!
//! Drives a computation against a context, answering each dependency request
//! from the context in the order it is made.

mod deps;
mod run;

pub use deps::{Deps, ResolutionTrail, ResolvedTag};
