//! The `partial!` macro for placeholder-aware partial application.
//!
//! This module provides the [`partial!`] macro which binds some parameters of
//! a [`Curried`](crate::compose::Curried) callable while leaving others open.

/// Partially applies arguments to a curried callable.
///
/// Use `__` (double underscore) to leave a parameter open. Each real argument
/// is bound with [`Bind`](crate::compose::Bind) at its position among the
/// parameters still open, so the result expects the open parameters in their
/// original order. Later calls (`apply`, `call`, or another `partial!`) fill
/// them left to right.
///
/// `partial!(f)` and calls consisting only of placeholders bind nothing and
/// return a clone of `f`. Binding every parameter returns a
/// [`Suspension`](crate::control::Suspension).
///
/// # Syntax
///
/// For a 3-parameter callable `f(a, b, c)`:
/// - `partial!(f, x, __, __)` expects `(b, c)`
/// - `partial!(f, __, y, __)` expects `(a, c)`
/// - `partial!(f, x, __, z)` expects `(b)`
/// - `partial!(f, x, y, z)` is a suspension of `f(x, y, z)`
///
/// # Type Requirements
///
/// - Bound values must implement [`Clone`] (the callable may be invoked many times)
/// - Binding more real arguments than there are open parameters does not compile
///
/// # Examples
///
/// ## Binding around a hole
///
/// ```
/// use functoid::{compose::curry, partial};
///
/// fn weighted(x1: i32, x2: i32, x3: i32) -> i32 { x1 + 2 * x2 + 3 * x3 }
///
/// let f = curry(weighted);
/// let middle_open = partial!(f, 2, __, 4);
/// assert_eq!(*middle_open.apply(3).force(), weighted(2, 3, 4));
/// ```
///
/// ## Holes filled across several calls
///
/// ```
/// use functoid::{compose::curry, partial};
///
/// let join = curry(|a: char, b: char, c: char, d: char| [a, b, c, d].iter().collect::<String>());
///
/// let outer_open = partial!(join, __, 'b', 'c', __);
/// let last_open = partial!(outer_open, 'a', __);
/// assert_eq!(last_open.call('d'), "abcd");
/// ```
///
/// ## No arguments
///
/// ```
/// use functoid::{compose::curry, partial};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let f = curry(add);
/// let same = partial!(f, __, __);
/// assert!(same.ptr_eq(&f));
/// ```
///
/// ## Too many arguments
///
/// ```compile_fail
/// use functoid::{compose::curry, partial};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let f = curry(add);
/// let _ = partial!(f, 1, 2, 3);
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // Internal rules (must precede the entry rule)
    // =========================================================================

    // All arguments consumed, nothing bound: an equivalent callable
    (@fill fresh [$function:expr]; [$($hole:expr),*];) => {
        ::core::clone::Clone::clone(&$function)
    };

    // All arguments consumed
    (@fill bound [$current:expr]; [$($hole:expr),*];) => {
        $current
    };

    // Placeholder: keep the slot open
    (@fill $state:ident [$current:expr]; [$($hole:expr),*]; __ $(, $($rest:tt)*)?) => {
        $crate::partial!(
            @fill $state [$current];
            [$($hole,)* $crate::compose::__];
            $($($rest)*)?
        )
    };

    // Value: bind at the slot after every hole so far
    (@fill $state:ident [$current:expr]; [$($hole:expr),*]; $value:expr $(, $($rest:tt)*)?) => {
        $crate::partial!(
            @fill bound [
                $crate::compose::Bind::<{
                    0usize $(+ $crate::compose::Placeholder::width($hole))*
                }>::bind(&$current, $value)
            ];
            [$($hole),*];
            $($($rest)*)?
        )
    };

    // =========================================================================
    // Entry
    // =========================================================================

    ($function:expr $(, $($arguments:tt)*)?) => {
        $crate::partial!(@fill fresh [$function]; []; $($($arguments)*)?)
    };
}
