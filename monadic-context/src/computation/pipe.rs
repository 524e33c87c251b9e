//! Left-to-right composition of transformers.

/// Applies transformers to a value from left to right.
///
/// `pipe!(x)` is `x`, `pipe!(x, f)` is `f(x)`, `pipe!(x, f, g)` is
/// `g(f(x))`, and so on. Nothing is run: piping a computation through
/// [`map`](crate::computation::map) only builds a new computation.
///
/// ```
/// use monadic_context::{ask, map, pipe, Computation, Context, Tag};
///
/// let n = Tag::<i32>::new("n");
/// let computation: Computation<String> = pipe!(
///     ask(&n),
///     map(|x: i32| x + 1),
///     map(|x: i32| x.to_string()),
/// );
///
/// assert_eq!(Context::of(&n)(41).run(computation).unwrap(), "42");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(, $transform:expr)* $(,)?) => {{
        let value = $value;
        $(
            let value = ($transform)(value);
        )*
        value
    }};
}

/// Composes transformers from left to right into a single transformer.
///
/// `compose!(f, g)(x)` is `g(f(x))`; `compose!()` is the identity.
#[macro_export]
macro_rules! compose {
    ($($transform:expr),* $(,)?) => {
        move |value| $crate::pipe!(value $(, $transform)*)
    };
}
