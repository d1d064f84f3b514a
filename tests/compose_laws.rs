//! Property-based tests for currying, partial application and composition.
//!
//! ## Composition Laws
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//!
//! ## Curry Laws
//! - **Equivalence**: `curry(f).apply(a).apply(b).apply(c).force() == f(a, b, c)`
//! - **Split Independence**: every grouping of `apply` and `call` agrees
//!
//! ## Placeholder Laws
//! - **Hole Filling**: `partial!(f, a, __, c).call(b) == f(a, b, c)`

use functoid::compose::{Bind, compose, curry, identity};
use functoid::partial;
use proptest::prelude::*;

fn weighted(x1: i32, x2: i32, x3: i32) -> i32 {
    x1.wrapping_add(x2.wrapping_mul(2)).wrapping_add(x3.wrapping_mul(3))
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Left Identity Law: compose!(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose!(identity::<i32>, function);

        prop_assert_eq!(composed.call(x), function(x));
    }

    /// Right Identity Law: compose!(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose!(function, identity::<i32>);

        prop_assert_eq!(composed.call(x), function(x));
    }

    /// Associativity Law: compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let inner_right = compose!(function2, function3);
        let left_associative = compose!(function1, inner_right);

        let inner_left = compose!(function1, function2);
        let right_associative = compose!(inner_left, function3);

        prop_assert_eq!(left_associative.call(x), right_associative.call(x));
    }

    /// compose(g, f).call(a, b) == g(f(a, b))
    #[test]
    fn prop_compose_with_binary_inner(a in any::<i32>(), b in any::<i32>()) {
        let inner = |first: i32, second: i32| first.wrapping_sub(second);
        let outer = |value: i32| value.wrapping_mul(3);

        let composed = compose(curry(outer), curry(inner));

        prop_assert_eq!(composed.call(a, b), outer(inner(a, b)));
        prop_assert_eq!(*composed.apply(a).apply(b).force(), outer(inner(a, b)));
    }
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    /// Equivalence: applying one argument at a time agrees with a direct call.
    #[test]
    fn prop_curry_equivalence(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let curried = curry(weighted);

        prop_assert_eq!(*curried.apply(a).apply(b).apply(c).force(), weighted(a, b, c));
    }

    /// Split Independence: every way of grouping the arguments agrees.
    #[test]
    fn prop_curry_split_independence(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let curried = curry(weighted);
        let expected = weighted(a, b, c);

        prop_assert_eq!(curried.call(a, b, c), expected);
        prop_assert_eq!(curried.apply(a).call(b, c), expected);
        prop_assert_eq!(curried.apply(a).apply(b).call(c), expected);
        prop_assert_eq!(curried.call_slice(&[a, b, c]), Ok(expected));
        prop_assert_eq!(curried.clone().eager()(a, b, c), expected);
    }

    /// Binding any slot first gives the same result.
    #[test]
    fn prop_bind_slot_commutes(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let curried = curry(weighted);
        let expected = weighted(a, b, c);

        prop_assert_eq!(Bind::<0>::bind(&curried, a).call(b, c), expected);
        prop_assert_eq!(Bind::<1>::bind(&curried, b).call(a, c), expected);
        prop_assert_eq!(Bind::<2>::bind(&curried, c).call(a, b), expected);
    }
}

// =============================================================================
// Placeholder Laws
// =============================================================================

proptest! {
    /// Hole Filling: partial!(f, a, __, c).call(b) == f(a, b, c)
    #[test]
    fn prop_partial_middle_hole(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let middle_open = partial!(curry(weighted), a, __, c);

        prop_assert_eq!(middle_open.call(b), weighted(a, b, c));
        prop_assert_eq!(*middle_open.apply(b).force(), weighted(a, b, c));
    }

    /// Holes are filled left to right in their original order.
    #[test]
    fn prop_partial_outer_holes(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let outer_open = partial!(curry(weighted), __, b, __);

        prop_assert_eq!(outer_open.call(a, c), weighted(a, b, c));
    }

    /// A fully bound partial agrees with the direct call.
    #[test]
    fn prop_partial_all_bound(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let suspension = partial!(curry(weighted), a, b, c);

        prop_assert_eq!(*suspension.force(), weighted(a, b, c));
    }
}
