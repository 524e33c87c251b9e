//! Type-erased tag/value pairs.

use crate::tag::{Tag, TagId};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A single tag bound to a value, with the value's type erased.
///
/// Bindings are what a [`Context`](super::Context) stores. They are cheap to
/// clone: the value sits behind an `Arc` and is shared by every context the
/// binding ends up in.
#[derive(Clone)]
pub struct Binding {
    id: TagId,
    label: Arc<str>,
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl Binding {
    /// Creates a binding of `tag` to `value`.
    #[must_use]
    pub fn new<T: Any + Send + Sync>(tag: &Tag<T>, value: T) -> Self {
        Self {
            id: tag.id(),
            label: tag.shared_label(),
            type_name: std::any::type_name::<T>(),
            value: Arc::new(value),
        }
    }

    /// Returns the id of the bound tag.
    #[must_use]
    pub fn id(&self) -> TagId {
        self.id
    }

    /// Returns the label of the bound tag.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the name of the value's type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn downcast<T: Any>(&self) -> Option<&T> {
        (*self.value).downcast_ref::<T>()
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("label", &self.label)
            .field("id", &self.id)
            .field("type", &self.type_name)
            .finish()
    }
}
