//! Error types for context lookup and computation runs.
//!
//! Lookup failures are the only errors this crate produces. Errors raised by
//! user code inside a computation travel through `run` untouched, so the
//! caller's error type only needs a `From<ContextError>` conversion.

use crate::tag::TagId;
use std::collections::HashMap;
use thiserror::Error;

/// The main error type for context operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A requested tag has no binding in the context.
    #[error("{0}")]
    MissingDependency(#[from] MissingDependencyError),

    /// A bound value does not have the type its tag declares.
    ///
    /// Never produced through the public API: bindings pair a `Tag<T>` with a
    /// `T`, and tag ids are unique. Kept so a failed downcast is an error
    /// instead of a panic.
    #[error("{0}")]
    TypeMismatch(#[from] TypeMismatchError),
}

impl ContextError {
    /// Returns true if this is a missing dependency.
    #[must_use]
    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, Self::MissingDependency(_))
    }

    /// Returns the label of the tag this error is about.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::MissingDependency(err) => &err.label,
            Self::TypeMismatch(err) => &err.label,
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();

        match self {
            Self::MissingDependency(err) => {
                map.insert("type".to_string(), serde_json::json!("MissingDependency"));
                map.insert("label".to_string(), serde_json::json!(err.label));
                map.insert("tag_id".to_string(), serde_json::json!(err.tag_id));
                map.insert("available".to_string(), serde_json::json!(err.available));
            }
            Self::TypeMismatch(err) => {
                map.insert("type".to_string(), serde_json::json!("TypeMismatch"));
                map.insert("label".to_string(), serde_json::json!(err.label));
                map.insert("tag_id".to_string(), serde_json::json!(err.tag_id));
                map.insert("expected".to_string(), serde_json::json!(err.expected));
            }
        }

        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

/// Error raised when a tag is requested from a context that does not bind it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing dependency: tag '{label}' not found in context. Available tags: [{}]", .available.join(", "))]
pub struct MissingDependencyError {
    /// The label of the unbound tag.
    pub label: String,
    /// The id of the unbound tag.
    pub tag_id: TagId,
    /// Labels of the tags the context does bind, sorted.
    pub available: Vec<String>,
}

impl MissingDependencyError {
    /// Creates a new missing dependency error.
    #[must_use]
    pub fn new(label: impl Into<String>, tag_id: TagId) -> Self {
        Self {
            label: label.into(),
            tag_id,
            available: Vec::new(),
        }
    }

    /// Sets the labels available in the context that was searched.
    #[must_use]
    pub fn with_available(mut self, available: Vec<String>) -> Self {
        self.available = available;
        self
    }
}

/// Error raised when a stored value cannot be viewed as its tag's type.
///
/// See [`ContextError::TypeMismatch`] for when this can occur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Type mismatch for tag '{label}': expected a value of type {expected}")]
pub struct TypeMismatchError {
    /// The label of the tag.
    pub label: String,
    /// The id of the tag.
    pub tag_id: TagId,
    /// The type name the tag declares.
    pub expected: &'static str,
}

impl TypeMismatchError {
    /// Creates a new type mismatch error.
    #[must_use]
    pub fn new(label: impl Into<String>, tag_id: TagId, expected: &'static str) -> Self {
        Self {
            label: label.into(),
            tag_id,
            expected,
        }
    }
}
