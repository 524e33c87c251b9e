//! Property tests for the functor and monad laws.

#[cfg(test)]
mod tests {
    use crate::computation::{apply, ask, bind, map, pure, traverse, with_service, Computation};
    use crate::context::Context;
    use crate::errors::ContextError;
    use crate::tag::Tag;
    use proptest::prelude::*;

    fn make_test_context(value: i64) -> (Context, Tag<i64>) {
        let tag = Tag::new("test");
        (Context::of(&tag)(value), tag)
    }

    fn double(x: i64) -> i64 {
        x.wrapping_mul(2)
    }

    fn increment(x: i64) -> i64 {
        x.wrapping_add(1)
    }

    fn add_service(tag: &Tag<i64>) -> impl Fn(i64) -> Computation<i64> {
        with_service(tag, |a: &i64, b: i64| -> Result<i64, ContextError> {
            Ok(a.wrapping_add(b))
        })
    }

    proptest! {
        #[test]
        fn prop_map_identity_law(value in any::<i64>()) {
            let (context, tag) = make_test_context(value);

            let direct: Computation<i64> = ask(&tag);
            let mapped: Computation<i64> = crate::pipe!(ask(&tag), map(|x: i64| x));

            prop_assert_eq!(context.run(direct), context.run(mapped));
        }

        #[test]
        fn prop_map_composition_law(value in any::<i64>()) {
            let (context, tag) = make_test_context(value);

            let fused: Computation<i64> = crate::pipe!(ask(&tag), map(|x: i64| increment(double(x))));
            let chained: Computation<i64> = crate::pipe!(ask(&tag), map(double), map(increment));
            let composed: Computation<i64> = ask(&tag).pipe(crate::compose!(map(double), map(increment)));

            let expected = Ok(increment(double(value)));
            prop_assert_eq!(context.run(fused), expected.clone());
            prop_assert_eq!(context.run(chained), expected.clone());
            prop_assert_eq!(context.run(composed), expected);
        }

        #[test]
        fn prop_bind_left_identity(value in any::<i64>()) {
            let (context, tag) = make_test_context(value);
            let action = add_service(&tag);

            let left: Computation<i64> = crate::pipe!(pure(value), bind(add_service(&tag)));
            let right = action(value);

            prop_assert_eq!(context.run(left), context.run(right));
        }

        #[test]
        fn prop_bind_right_identity(value in any::<i64>()) {
            let (context, tag) = make_test_context(value);

            let left: Computation<i64> = crate::pipe!(ask(&tag), bind(pure));
            let right: Computation<i64> = ask(&tag);

            prop_assert_eq!(context.run(left), context.run(right));
        }

        #[test]
        fn prop_bind_associativity(value in any::<i64>()) {
            let (context, tag) = make_test_context(value);

            let f = |tag: &Tag<i64>| {
                with_service(tag, |_: &i64, a: i64| -> Result<i64, ContextError> {
                    Ok(a.wrapping_mul(2))
                })
            };
            let g = |tag: &Tag<i64>| {
                with_service(tag, |_: &i64, a: i64| -> Result<i64, ContextError> {
                    Ok(a.wrapping_add(3))
                })
            };

            let left: Computation<i64> = crate::pipe!(ask(&tag), bind(f(&tag)), bind(g(&tag)));

            let (f2, g2) = (f(&tag), g(&tag));
            let right: Computation<i64> =
                crate::pipe!(ask(&tag), bind(move |x: i64| f2(x).and_then(g2)));

            prop_assert_eq!(context.run(left), context.run(right));
        }

        #[test]
        fn prop_apply(value in any::<i64>()) {
            let (context, tag) = make_test_context(value);

            let mf: Computation<fn(i64) -> i64> = pure(double as fn(i64) -> i64);
            let result = mf.pipe(apply(ask(&tag)));

            prop_assert_eq!(context.run(result), Ok(double(value)));
        }

        #[test]
        fn prop_traverse(values in prop::collection::vec(any::<i64>(), 1..10)) {
            let first = values[0];
            let (context, tag) = make_test_context(first);

            let transform = with_service(&tag, |a: &i64, b: i64| -> Result<i64, ContextError> {
                Ok(a.wrapping_mul(b))
            });
            let result = traverse(values.clone(), transform);

            let expected: Vec<i64> = values.iter().map(|v| v.wrapping_mul(first)).collect();
            prop_assert_eq!(context.run(result), Ok(expected));
        }

        #[test]
        fn prop_join_is_right_biased(left in any::<i64>(), right in any::<i64>()) {
            let tag = Tag::<i64>::new("t");
            let a = Context::of(&tag)(left);
            let b = Context::of(&tag)(right);

            prop_assert_eq!(a.join(&b).get(&tag).copied(), b.get(&tag).copied());
            prop_assert_eq!(a.get(&tag).copied(), Ok(left));
        }
    }
}
