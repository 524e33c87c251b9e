//! Driving computations against a context.

use super::{Deps, ResolutionTrail};
use crate::computation::Computation;
use crate::context::Context;
use crate::errors::ContextError;

impl Context {
    /// Runs `computation` against this context.
    ///
    /// Requests are answered from this context one at a time, in the order the
    /// computation makes them.
    ///
    /// # Errors
    ///
    /// Fails with `ContextError::MissingDependency` (converted into `E`) when
    /// a requested tag is unbound. Any other error the computation returns is
    /// passed through unchanged.
    pub fn run<A, E>(&self, computation: Computation<A, E>) -> Result<A, E>
    where
        E: From<ContextError>,
    {
        self.run_traced(computation).0
    }

    /// Runs `computation` and also returns the tags it resolved, in order.
    pub fn run_traced<A, E>(&self, computation: Computation<A, E>) -> (Result<A, E>, ResolutionTrail)
    where
        E: From<ContextError>,
    {
        let span = tracing::debug_span!(
            "run",
            computation = computation.name(),
            bindings = self.len()
        );
        let _guard = span.enter();

        let mut deps = Deps::new(self);
        let outcome = computation.drive(&mut deps);
        let (trail, failure) = deps.finish();

        let result = match (outcome, failure) {
            (Err(err), _) => Err(err),
            // The body recovered from a failed request; the miss still aborts the run.
            (Ok(_), Some(failure)) => Err(E::from(failure)),
            (Ok(value), None) => Ok(value),
        };

        match &result {
            Ok(_) => tracing::trace!(resolved = trail.len(), "Computation completed"),
            Err(_) => tracing::debug!(resolved = trail.len(), "Computation failed"),
        }

        (result, trail)
    }
}
