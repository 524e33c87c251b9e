//! The request handle passed to a running computation.

use crate::computation::Computation;
use crate::context::Context;
use crate::errors::ContextError;
use crate::tag::{Tag, TagId};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// A tag that was resolved during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTag {
    /// The tag label.
    pub label: String,
    /// The tag id.
    pub tag_id: TagId,
}

/// The tags resolved during one run, in the order they were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionTrail {
    steps: Vec<ResolvedTag>,
}

impl ResolutionTrail {
    /// Returns the resolved tags in request order.
    #[must_use]
    pub fn steps(&self) -> &[ResolvedTag] {
        &self.steps
    }

    /// Returns the labels of the resolved tags in request order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.label.as_str()).collect()
    }

    /// Returns true if `tag` was resolved at least once.
    #[must_use]
    pub fn contains<T>(&self, tag: &Tag<T>) -> bool {
        self.steps.iter().any(|s| s.tag_id == tag.id())
    }

    /// Returns the number of resolved requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if nothing was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn push<T>(&mut self, tag: &Tag<T>) {
        self.steps.push(ResolvedTag {
            label: tag.label().to_string(),
            tag_id: tag.id(),
        });
    }
}

/// Handle through which a running computation requests its dependencies.
///
/// Only the run engine creates one, for the duration of a single run. Each
/// request is answered immediately from the context being run against.
///
/// The first failed request poisons the handle: later requests fail with the
/// same error and the run reports it even if the body swallowed it.
#[derive(Debug)]
pub struct Deps<'ctx> {
    context: &'ctx Context,
    trail: ResolutionTrail,
    failure: Option<ContextError>,
}

impl<'ctx> Deps<'ctx> {
    pub(crate) fn new(context: &'ctx Context) -> Self {
        Self {
            context,
            trail: ResolutionTrail::default(),
            failure: None,
        }
    }

    /// Requests the value bound to `tag`.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::MissingDependency` if the context does not bind
    /// `tag`, or the earlier failure if this handle is already poisoned.
    pub fn request<T: Any>(&mut self, tag: &Tag<T>) -> Result<&'ctx T, ContextError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let context = self.context;
        match context.get(tag) {
            Ok(value) => {
                tracing::trace!(tag = tag.label(), step = self.trail.len(), "Resolved dependency");
                self.trail.push(tag);
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(tag = tag.label(), error = %err, "Dependency resolution failed");
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Requests an optional dependency.
    ///
    /// A missing binding yields `None` and does not poison the handle.
    pub fn try_request<T: Any>(&mut self, tag: &Tag<T>) -> Option<&'ctx T> {
        if self.failure.is_some() {
            return None;
        }

        let context = self.context;
        let value = context.try_get(tag)?;
        tracing::trace!(tag = tag.label(), step = self.trail.len(), "Resolved optional dependency");
        self.trail.push(tag);
        Some(value)
    }

    /// Drives a sub-computation inline, sharing this run's requests.
    ///
    /// # Errors
    ///
    /// Returns whatever error the sub-computation fails with.
    pub fn run<A, E>(&mut self, computation: Computation<A, E>) -> Result<A, E> {
        computation.drive(self)
    }

    /// Returns the tags resolved so far.
    #[must_use]
    pub fn trail(&self) -> &ResolutionTrail {
        &self.trail
    }

    /// Returns true if a request has already failed.
    #[must_use]
    pub fn is_poisoned(&self) -> bool {
        self.failure.is_some()
    }

    pub(crate) fn finish(self) -> (ResolutionTrail, Option<ContextError>) {
        (self.trail, self.failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_records_trail() {
        let a = Tag::<i32>::new("a");
        let b = Tag::<i32>::new("b");
        let context = Context::from_pairs([a.bind(1), b.bind(2)]);
        let mut deps = Deps::new(&context);

        assert_eq!(deps.request(&b).unwrap(), &2);
        assert_eq!(deps.request(&a).unwrap(), &1);

        assert_eq!(deps.trail().labels(), vec!["b", "a"]);
        assert!(deps.trail().contains(&a));
        assert!(!deps.is_poisoned());
    }

    #[test]
    fn test_failed_request_poisons() {
        let bound = Tag::<i32>::new("bound");
        let missing = Tag::<i32>::new("missing");
        let context = Context::of(&bound)(1);
        let mut deps = Deps::new(&context);

        let err = deps.request(&missing).unwrap_err();
        assert_eq!(err.label(), "missing");
        assert!(deps.is_poisoned());

        let again = deps.request(&bound).unwrap_err();
        assert_eq!(again, err);

        let (trail, failure) = deps.finish();
        assert!(trail.is_empty());
        assert_eq!(failure, Some(err));
    }

    #[test]
    fn test_try_request_does_not_poison() {
        let bound = Tag::<i32>::new("bound");
        let missing = Tag::<i32>::new("missing");
        let context = Context::of(&bound)(9);
        let mut deps = Deps::new(&context);

        assert_eq!(deps.try_request(&missing), None);
        assert!(!deps.is_poisoned());
        assert_eq!(deps.try_request(&bound), Some(&9));
        assert_eq!(deps.trail().len(), 1);
    }

    #[test]
    fn test_values_outlive_later_requests() {
        let host = Tag::<String>::new("host");
        let port = Tag::<u16>::new("port");
        let context = Context::from_pairs([host.bind("example.org".to_string()), port.bind(443)]);
        let mut deps = Deps::new(&context);

        let h = deps.request(&host).unwrap();
        let p = deps.request(&port).unwrap();
        assert_eq!(format!("{h}:{p}"), "example.org:443");
    }

    #[test]
    fn test_trail_serializes() {
        let tag = Tag::<i32>::new("n");
        let context = Context::of(&tag)(0);
        let mut deps = Deps::new(&context);
        deps.request(&tag).unwrap();

        let json = serde_json::to_value(deps.trail()).unwrap();
        assert_eq!(json["steps"][0]["label"], "n");
    }
}
