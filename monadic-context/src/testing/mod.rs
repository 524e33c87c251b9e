//! Testing utilities for code built on contexts and computations.
//!
//! This module provides:
//! - Assertions for run outcomes and resolution order
//! - A `tracing` subscriber for test output

mod assertions;
mod subscriber;

pub use assertions::{assert_missing_dependency, assert_resolution_order, assert_resolved};
pub use subscriber::init_tracing;
