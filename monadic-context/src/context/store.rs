//! The immutable, tag-keyed context.

use super::Binding;
use crate::errors::{ContextError, MissingDependencyError, TypeMismatchError};
use crate::tag::{Tag, TagId};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// An immutable mapping from tags to values.
///
/// A context is never changed after it is built. Operations that add
/// bindings return a new context; values are reference counted and shared
/// with the context they came from.
#[derive(Clone, Default)]
pub struct Context {
    bindings: Arc<HashMap<TagId, Binding>>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a constructor for single-entry contexts binding `tag`.
    ///
    /// ```
    /// use monadic_context::{Context, Tag};
    ///
    /// let port = Tag::<u16>::new("port");
    /// let context = Context::of(&port)(8080);
    /// assert_eq!(context.get(&port).ok(), Some(&8080));
    /// ```
    pub fn of<T: Any + Send + Sync>(tag: &Tag<T>) -> impl Fn(T) -> Self {
        let tag = tag.clone();
        move |value| Self::from_pairs([tag.bind(value)])
    }

    /// Creates a context from an ordered sequence of bindings.
    ///
    /// When the same tag appears more than once the last binding wins.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = Binding>) -> Self {
        let mut bindings = HashMap::new();
        for binding in pairs {
            bindings.insert(binding.id(), binding);
        }

        Self {
            bindings: Arc::new(bindings),
        }
    }

    /// Creates a context from a tag-keyed mapping.
    ///
    /// Accepts anything that yields `(Tag<T>, T)` entries, such as a
    /// `HashMap<Tag<T>, T>` or an array of pairs.
    #[must_use]
    pub fn from_dict<T: Any + Send + Sync>(services: impl IntoIterator<Item = (Tag<T>, T)>) -> Self {
        Self::from_pairs(services.into_iter().map(|(tag, value)| tag.bind(value)))
    }

    /// Joins two contexts.
    ///
    /// Bindings from `other` override bindings for the same tag in `self`.
    #[must_use]
    pub fn join(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        tracing::trace!(left = self.len(), right = other.len(), "Joining contexts");

        let mut bindings = (*self.bindings).clone();
        bindings.extend(other.bindings.iter().map(|(id, binding)| (*id, binding.clone())));

        Self {
            bindings: Arc::new(bindings),
        }
    }

    /// Returns a new context with `tag` bound to `value`.
    #[must_use]
    pub fn extend<T: Any + Send + Sync>(&self, tag: &Tag<T>, value: T) -> Self {
        let mut bindings = (*self.bindings).clone();
        bindings.insert(tag.id(), tag.bind(value));

        Self {
            bindings: Arc::new(bindings),
        }
    }

    /// Looks up the value bound to `tag`.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::MissingDependency` if the tag is not bound.
    pub fn get<T: Any>(&self, tag: &Tag<T>) -> Result<&T, ContextError> {
        let Some(binding) = self.bindings.get(&tag.id()) else {
            return Err(MissingDependencyError::new(tag.label(), tag.id())
                .with_available(self.labels())
                .into());
        };

        // A binding is only built from a `Tag<T>` and a `T`, so a value stored
        // under this tag's id always has type `T`.
        binding.downcast::<T>().ok_or_else(|| {
            TypeMismatchError::new(tag.label(), tag.id(), std::any::type_name::<T>()).into()
        })
    }

    /// Looks up the value bound to `tag`, if any.
    #[must_use]
    pub fn try_get<T: Any>(&self, tag: &Tag<T>) -> Option<&T> {
        self.bindings.get(&tag.id()).and_then(Binding::downcast::<T>)
    }

    /// Looks up the value bound to `tag`, falling back to `default`.
    #[must_use]
    pub fn get_or<'a, T: Any>(&'a self, tag: &Tag<T>, default: &'a T) -> &'a T {
        self.try_get(tag).unwrap_or(default)
    }

    /// Returns true if `tag` is bound.
    #[must_use]
    pub fn contains<T>(&self, tag: &Tag<T>) -> bool {
        self.bindings.contains_key(&tag.id())
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if the context binds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns the labels of all bound tags, sorted.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .bindings
            .values()
            .map(|b| b.label().to_string())
            .collect();
        labels.sort();
        labels
    }

    /// Iterates over the bindings in no particular order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("bindings", &self.labels())
            .finish()
    }
}

impl FromIterator<Binding> for Context {
    fn from_iter<I: IntoIterator<Item = Binding>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
