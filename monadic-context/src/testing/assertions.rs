//! Test assertions for run outcomes.

use crate::engine::ResolutionTrail;
use crate::errors::ContextError;
use std::fmt::Debug;

/// Asserts that a run failed because the tag labelled `label` was unbound.
pub fn assert_missing_dependency<A: Debug>(result: &Result<A, ContextError>, label: &str) {
    match result {
        Err(ContextError::MissingDependency(err)) => assert_eq!(
            err.label, label,
            "Expected missing dependency '{}', got '{}'",
            label, err.label
        ),
        other => panic!("Expected missing dependency '{label}', got {other:?}"),
    }
}

/// Asserts that a run resolved exactly these tags, in this order.
pub fn assert_resolution_order(trail: &ResolutionTrail, expected: &[&str]) {
    assert_eq!(
        trail.labels(),
        expected,
        "Expected resolution order {:?}, got {:?}",
        expected,
        trail.labels()
    );
}

/// Asserts that a run resolved the tag labelled `label` at least once.
pub fn assert_resolved(trail: &ResolutionTrail, label: &str) {
    assert!(
        trail.labels().contains(&label),
        "Expected '{}' to be resolved. Resolved: {:?}",
        label,
        trail.labels()
    );
}
