//! Function composition for curried callables.
//!
//! This module provides [`compose`], which chains a unary callable after a
//! callable of any arity, and the [`compose!`] macro which builds the
//! right-nested chain for any number of callables.

use super::callable::Callable;
use super::curried::Curried;
use crate::shared::ReferenceCounter;

/// The result of composing `outer` after `inner`.
///
/// Invoking it with the arguments of `inner` runs `inner`, then runs `outer`
/// on the single result.
pub struct Composed<O, I> {
    outer: ReferenceCounter<O>,
    inner: ReferenceCounter<I>,
}

impl<O, I> Clone for Composed<O, I> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            outer: ReferenceCounter::clone(&self.outer),
            inner: ReferenceCounter::clone(&self.inner),
        }
    }
}

impl<Outer, Inner, Arguments> Callable<Arguments> for Composed<Outer, Inner>
where
    Inner: Callable<Arguments>,
    Outer: Callable<(Inner::Output,)>,
{
    type Output = Outer::Output;

    #[inline]
    fn invoke(&self, arguments: Arguments) -> Self::Output {
        let intermediate = Callable::invoke(&*self.inner, arguments);
        Callable::invoke(&*self.outer, (intermediate,))
    }
}

/// Composes a unary callable after a callable of any arity.
///
/// The result has the arity of `inner`. Both callables are taken by value;
/// clone them first (O(1)) to keep using them.
///
/// # Examples
///
/// ```rust
/// use functoid::compose::{compose, curry};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let add_then_double = compose(curry(double), curry(add));
/// assert_eq!(add_then_double.call(3, 4), 14);
/// assert_eq!(*add_then_double.apply(3).apply(4).force(), 14);
/// ```
pub fn compose<Outer, Inner, Intermediate, Arguments>(
    outer: Curried<Outer, (Intermediate,)>,
    inner: Curried<Inner, Arguments>,
) -> Curried<Composed<Outer, Inner>, Arguments>
where
    Inner: Callable<Arguments, Output = Intermediate>,
    Outer: Callable<(Intermediate,)>,
{
    Curried::new(Composed {
        outer: outer.into_shared(),
        inner: inner.into_shared(),
    })
}

/// Composes callables from right to left.
///
/// `compose!(f, g, h)` is `compose(f, compose(g, h))`: the rightmost callable
/// receives the arguments, every other one must be unary. Plain functions,
/// closures and [`Curried`](crate::compose::Curried) values are all accepted;
/// the result is always a [`Curried`](crate::compose::Curried).
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h))` behaves like `compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f)` behaves like `f`
/// - **Right Identity**: `compose!(f, identity)` behaves like `f`
///
/// # Examples
///
/// ```
/// use functoid::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed.call(3), 19);
/// assert_eq!(*composed.apply(3).force(), 19);
/// ```
///
/// ## Multi-argument inner callable
///
/// ```
/// use functoid::compose;
///
/// let describe = compose!(
///     |total: i32| format!("total = {total}"),
///     |first: i32, second: i32, third: i32| first + second + third
/// );
/// assert_eq!(describe.call(1, 2, 3), "total = 6");
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $crate::compose::curry($function)
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose(
            $crate::compose::curry($outer_function),
            $crate::compose!($($remaining_functions),+),
        )
    };
}
