//! Identity tokens used as context keys.

use crate::context::Binding;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

/// The identity of a [`Tag`], independent of its value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(Uuid);

impl TagId {
    /// Generates a fresh, unique id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A typed key for a value stored in a [`Context`](crate::context::Context).
///
/// Every call to [`Tag::new`] produces a distinct tag, even when two tags share
/// a label. Clones share the identity of the original, so a tag is usually
/// created once and handed around by reference or clone.
///
/// `T` only exists at compile time. It steers the typed constructors and
/// lookups; nothing about it is recorded or checked when the tag is built.
pub struct Tag<T> {
    id: TagId,
    label: Arc<str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Tag<T> {
    /// Creates a new tag with a diagnostic label.
    #[must_use]
    pub fn new(label: impl AsRef<str>) -> Self {
        Self {
            id: TagId::generate(),
            label: Arc::from(label.as_ref()),
            _marker: PhantomData,
        }
    }

    /// Returns the tag's identity.
    #[must_use]
    pub fn id(&self) -> TagId {
        self.id
    }

    /// Returns the diagnostic label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn shared_label(&self) -> Arc<str> {
        Arc::clone(&self.label)
    }
}

impl<T: Any + Send + Sync> Tag<T> {
    /// Pairs this tag with a value, ready for [`Context::from_pairs`].
    ///
    /// [`Context::from_pairs`]: crate::context::Context::from_pairs
    #[must_use]
    pub fn bind(&self, value: T) -> Binding {
        Binding::new(self, value)
    }
}

impl<T> Clone for Tag<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            label: Arc::clone(&self.label),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Tag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Tag<T> {}

impl<T> Hash for Tag<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for Tag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("label", &self.label)
            .field("id", &self.id)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> fmt::Display for Tag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
