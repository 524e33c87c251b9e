//! Constructors and transformers for computations.
//!
//! The transformers (`map`, `bind`, `apply`, `then`) return closures taking a
//! computation, so they compose with [`pipe!`](crate::pipe) and
//! [`compose!`](crate::compose).

use super::Computation;
use crate::engine::Deps;
use crate::errors::ContextError;
use crate::tag::Tag;
use std::any::Any;
use std::rc::Rc;

/// Wraps a dependency-requesting body into a computation without running it.
///
/// A reusable procedure is a plain function returning `requires(...)`; each
/// call builds a fresh computation.
///
/// ```
/// use monadic_context::{requires, Computation, Context, Tag};
///
/// fn greeting(name: &Tag<String>) -> Computation<String> {
///     let name = name.clone();
///     requires(move |deps| Ok(format!("hello, {}", deps.request(&name)?)))
/// }
///
/// let name = Tag::new("name");
/// let context = Context::of(&name)("world".to_string());
/// assert_eq!(context.run(greeting(&name)).unwrap(), "hello, world");
/// ```
pub fn requires<A, E, F>(body: F) -> Computation<A, E>
where
    A: 'static,
    E: 'static,
    F: FnOnce(&mut Deps<'_>) -> Result<A, E> + 'static,
{
    Computation::new(body)
}

/// A computation that requests nothing and yields `value`.
pub fn pure<A: 'static, E: 'static>(value: A) -> Computation<A, E> {
    Computation::pure(value)
}

/// A computation yielding a clone of the value bound to `tag`.
pub fn ask<T, E>(tag: &Tag<T>) -> Computation<T, E>
where
    T: Any + Clone,
    E: From<ContextError> + 'static,
{
    let name = format!("ask({})", tag.label());
    let tag = tag.clone();
    requires(move |deps| Ok(deps.request(&tag)?.clone())).named(name)
}

/// A computation yielding `f` applied to the value bound to `tag`.
pub fn asks<T, A, E, F>(tag: &Tag<T>, f: F) -> Computation<A, E>
where
    T: Any,
    A: 'static,
    E: From<ContextError> + 'static,
    F: FnOnce(&T) -> A + 'static,
{
    let name = format!("asks({})", tag.label());
    let tag = tag.clone();
    requires(move |deps| Ok(f(deps.request(&tag)?))).named(name)
}

/// Wraps a function whose first argument is a service.
///
/// The returned factory takes the remaining arguments and builds a
/// computation that requests `tag` and then calls `f` with the service
/// prepended.
///
/// ```
/// use monadic_context::{with_service, Context, ContextError, Tag};
///
/// let base = Tag::<i32>::new("base");
/// let add = with_service(&base, |base: &i32, n: i32| -> Result<i32, ContextError> {
///     Ok(base + n)
/// });
///
/// let context = Context::of(&base)(10);
/// assert_eq!(context.run(add(5)).unwrap(), 15);
/// ```
pub fn with_service<T, Args, A, E, F>(tag: &Tag<T>, f: F) -> impl Fn(Args) -> Computation<A, E>
where
    T: Any,
    Args: 'static,
    A: 'static,
    E: From<ContextError> + 'static,
    F: Fn(&T, Args) -> Result<A, E> + 'static,
{
    let tag = tag.clone();
    let f = Rc::new(f);
    move |args| {
        let name = format!("with_service({})", tag.label());
        let tag = tag.clone();
        let f = Rc::clone(&f);
        requires(move |deps| {
            let service = deps.request(&tag)?;
            (*f)(service, args)
        })
        .named(name)
    }
}

/// Transformer mapping a computation's result through `f`.
pub fn map<A, B, E, F>(f: F) -> impl FnOnce(Computation<A, E>) -> Computation<B, E>
where
    A: 'static,
    B: 'static,
    E: 'static,
    F: FnOnce(A) -> B + 'static,
{
    move |computation| computation.map(f)
}

/// Transformer continuing a computation with the one `f` builds from its result.
pub fn bind<A, B, E, F>(f: F) -> impl FnOnce(Computation<A, E>) -> Computation<B, E>
where
    A: 'static,
    B: 'static,
    E: 'static,
    F: FnOnce(A) -> Computation<B, E> + 'static,
{
    move |computation| computation.and_then(f)
}

/// Transformer applying a function-producing computation to `ma`'s result.
///
/// `ma` is driven before the function-producing computation.
pub fn apply<A, B, E, F>(ma: Computation<A, E>) -> impl FnOnce(Computation<F, E>) -> Computation<B, E>
where
    A: 'static,
    B: 'static,
    E: 'static,
    F: FnOnce(A) -> B + 'static,
{
    move |mf| ma.apply(mf)
}

/// Transformer that drives a computation, then drives `next`, keeping the
/// first computation's value.
pub fn then<A, B, E>(next: Computation<B, E>) -> impl FnOnce(Computation<A, E>) -> Computation<A, E>
where
    A: 'static,
    B: 'static,
    E: 'static,
{
    move |computation| computation.then(next)
}

/// Builds one computation per item with `f` and drives them in order.
pub fn traverse<X, B, E, F>(items: impl IntoIterator<Item = X>, mut f: F) -> Computation<Vec<B>, E>
where
    X: 'static,
    B: 'static,
    E: 'static,
    F: FnMut(X) -> Computation<B, E> + 'static,
{
    let items: Vec<X> = items.into_iter().collect();
    requires(move |deps| items.into_iter().map(|item| deps.run(f(item))).collect()).named("traverse")
}
