//! Log output for tests.

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `monadic_context=debug`.
/// Output goes through the test harness's captured writer. Calling this more
/// than once is harmless; only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("monadic_context=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::computation::{ask, Computation};
    use crate::tag::Tag;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();

        let tag = Tag::<i32>::new("logged");
        let computation: Computation<i32> = ask(&tag);
        assert!(Context::new().run(computation).is_err());
    }
}
