//! Deferred computations and the operations that build them.
//!
//! This module provides:
//! - The `Computation` type and its combinators
//! - `requires` and `with_service` for wrapping dependency-requesting code
//! - Curried transformers (`map`, `bind`, `apply`, `then`) for `pipe!`

#[cfg(test)]
mod laws_tests;
mod ops;
mod pipe;
mod recipe;

pub use ops::{apply, ask, asks, bind, map, pure, requires, then, traverse, with_service};
pub use recipe::Computation;
