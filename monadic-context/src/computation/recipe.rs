//! The deferred computation type.

use crate::engine::Deps;
use crate::errors::ContextError;
use std::borrow::Cow;
use std::fmt;

type Step<A, E> = Box<dyn FnOnce(&mut Deps<'_>) -> Result<A, E>>;

/// A deferred computation that requests values from a context.
///
/// Building a computation runs nothing. It only does work when handed to
/// [`Context::run`](crate::context::Context::run), which consumes it, so a
/// computation is driven at most once. To run the same procedure again, build
/// it again.
pub struct Computation<A, E = ContextError> {
    name: Cow<'static, str>,
    step: Step<A, E>,
}

impl<A: 'static, E: 'static> Computation<A, E> {
    /// Wraps a body that requests its dependencies through [`Deps`].
    pub fn new<F>(body: F) -> Self
    where
        F: FnOnce(&mut Deps<'_>) -> Result<A, E> + 'static,
    {
        Self {
            name: Cow::Borrowed(std::any::type_name::<F>()),
            step: Box::new(body),
        }
    }

    /// A computation that requests nothing and yields `value`.
    pub fn pure(value: A) -> Self {
        Self::new(move |_| Ok(value)).named("pure")
    }

    /// Sets the name reported in diagnostics.
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Transforms the result once this computation has fully resolved.
    pub fn map<B, F>(self, f: F) -> Computation<B, E>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        let name = self.name.clone();
        Computation::new(move |deps| self.drive(deps).map(f)).named(name)
    }

    /// Feeds the result into `f` and continues with the computation it returns.
    pub fn and_then<B, F>(self, f: F) -> Computation<B, E>
    where
        B: 'static,
        F: FnOnce(A) -> Computation<B, E> + 'static,
    {
        let name = self.name.clone();
        Computation::new(move |deps| {
            let value = self.drive(deps)?;
            f(value).drive(deps)
        })
        .named(name)
    }

    /// Applies the function produced by `mf` to this computation's result.
    ///
    /// `self` is driven first, then `mf`.
    pub fn apply<B, F>(self, mf: Computation<F, E>) -> Computation<B, E>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        let name = mf.name.clone();
        Computation::new(move |deps| {
            let value = self.drive(deps)?;
            let f = mf.drive(deps)?;
            Ok(f(value))
        })
        .named(name)
    }

    /// Drives this computation, then drives `next` for its requests only.
    ///
    /// The result is this computation's value; `next`'s value is discarded,
    /// but a failed request inside it still fails the run.
    pub fn then<B: 'static>(self, next: Computation<B, E>) -> Self {
        let name = self.name.clone();
        Computation::new(move |deps| {
            let value = self.drive(deps)?;
            next.drive(deps)?;
            Ok(value)
        })
        .named(name)
    }

    /// Converts the error a failed run produces.
    pub fn map_err<E2, F>(self, f: F) -> Computation<A, E2>
    where
        E2: 'static,
        F: FnOnce(E) -> E2 + 'static,
    {
        let name = self.name.clone();
        Computation::new(move |deps| self.drive(deps).map_err(f)).named(name)
    }
}

impl<A, E> Computation<A, E> {
    /// Returns the diagnostic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Passes this computation through a transformer such as [`map`].
    ///
    /// [`map`]: crate::computation::map
    pub fn pipe<R>(self, transform: impl FnOnce(Self) -> R) -> R {
        transform(self)
    }

    pub(crate) fn drive(self, deps: &mut Deps<'_>) -> Result<A, E> {
        (self.step)(deps)
    }
}

impl<A, E> fmt::Debug for Computation<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::tag::Tag;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_building_runs_nothing() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);

        let computation: Computation<()> = Computation::new(move |_| {
            flag.set(true);
            Ok(())
        });

        assert!(!ran.get());
        Context::new().run(computation).unwrap();
        assert!(ran.get());
    }

    #[test]
    fn test_pure() {
        let computation: Computation<i32> = Computation::pure(7);
        assert_eq!(computation.name(), "pure");
        assert_eq!(Context::new().run(computation).unwrap(), 7);
    }

    #[test]
    fn test_map_runs_after_inner() {
        let tag = Tag::<i32>::new("n");
        let context = Context::of(&tag)(20);

        let inner_tag = tag.clone();
        let computation: Computation<i32> =
            Computation::new(move |deps| Ok(*deps.request(&inner_tag)?)).map(|n| n + 1);

        assert_eq!(context.run(computation).unwrap(), 21);
    }

    #[test]
    fn test_and_then_chains_requests() {
        let a = Tag::<i32>::new("a");
        let b = Tag::<i32>::new("b");
        let context = Context::from_pairs([a.bind(2), b.bind(5)]);

        let (ta, tb) = (a.clone(), b.clone());
        let computation: Computation<i32> = Computation::new(move |deps| Ok(*deps.request(&ta)?))
            .and_then(move |x| Computation::new(move |deps| Ok(x * deps.request(&tb)?)));

        assert_eq!(context.run(computation).unwrap(), 10);
    }

    #[test]
    fn test_apply_drives_value_before_function() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let (o1, o2) = (Rc::clone(&order), Rc::clone(&order));

        let value: Computation<i32> = Computation::new(move |_| {
            o1.borrow_mut().push("value");
            Ok(3)
        });
        let function: Computation<fn(i32) -> i32> = Computation::new(move |_| {
            o2.borrow_mut().push("function");
            Ok((|x| x * 3) as fn(i32) -> i32)
        });

        assert_eq!(Context::new().run(value.apply(function)).unwrap(), 9);
        assert_eq!(*order.borrow(), vec!["value", "function"]);
    }

    #[test]
    fn test_then_keeps_first_result() {
        let first: Computation<&str> = Computation::pure("first");
        let second = Computation::pure(42);

        assert_eq!(Context::new().run(first.then(second)).unwrap(), "first");
    }

    #[test]
    fn test_then_drives_next_after_self() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let (o1, o2) = (Rc::clone(&order), Rc::clone(&order));

        let first: Computation<i32> = Computation::new(move |_| {
            o1.borrow_mut().push("first");
            Ok(1)
        });
        let next: Computation<i32> = Computation::new(move |_| {
            o2.borrow_mut().push("next");
            Ok(2)
        });

        assert_eq!(Context::new().run(first.then(next)).unwrap(), 1);
        assert_eq!(*order.borrow(), vec!["first", "next"]);
    }

    #[derive(Debug, PartialEq)]
    enum AppError {
        Context(ContextError),
        Labelled(String),
    }

    impl From<ContextError> for AppError {
        fn from(err: ContextError) -> Self {
            Self::Context(err)
        }
    }

    #[test]
    fn test_map_err() {
        let tag = Tag::<i32>::new("absent");
        let computation: Computation<i32> =
            Computation::new(move |deps| Ok(*deps.request(&tag)?));

        let err = Context::new()
            .run(computation.map_err(|e| AppError::Labelled(e.label().to_uppercase())))
            .unwrap_err();
        assert_eq!(err, AppError::Labelled("ABSENT".to_string()));
    }

    #[test]
    fn test_named_and_debug() {
        let computation: Computation<()> = Computation::pure(()).named("startup");
        assert_eq!(computation.name(), "startup");
        assert!(format!("{computation:?}").contains("startup"));
    }
}
