//! Curried callables, partial application and composition.
//!
//! This module turns ordinary functions into [`Curried`] callables of known
//! arity that can be applied one argument at a time, bound around
//! placeholders, composed, and converted back into plain functions.
//!
//! # Overview
//!
//! - [`curry`]: Wrap a function of arity 0 through 6
//! - [`Curried::apply`]: Bind the first remaining parameter
//! - [`Bind`]: Bind the parameter at any remaining position
//! - [`partial!`]: Placeholder syntax built on [`Bind`]
//! - [`compose`] / [`compose!`]: Right-to-left composition
//! - [`Curried::eager`] / [`Curried::boxed`]: Back to plain functions
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function
//! - [`fix`]: Recursive closures
//!
//! # Examples
//!
//! ## Currying
//!
//! ```
//! use functoid::compose::curry;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let add_five = curry(add).apply(5);
//! assert_eq!(*add_five.apply(3).force(), 8);
//! ```
//!
//! ## Partial Application
//!
//! ```
//! use functoid::{compose::curry, partial};
//!
//! fn divide(numerator: f64, denominator: f64) -> f64 { numerator / denominator }
//!
//! // Note: `__` is matched as a literal token by the macro and needs no import.
//! let half = partial!(curry(divide), __, 2.0);
//! assert_eq!(half.call(10.0), 5.0);
//! ```
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use functoid::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed.call(5), 11);
//! ```
//!
//! # Mathematical Background
//!
//! Currying transforms a multi-argument function into a sequence of
//! single-argument applications. Once every argument is supplied the result
//! is a memoized [`Suspension`](crate::control::Suspension):
//!
//! ```text
//! curry(f).apply(a).apply(b).apply(c).force() = f(a, b, c)
//! ```
//!
//! Partial application fixes some arguments and keeps the rest open:
//!
//! ```text
//! partial!(f, a, __, c).apply(b).force() = f(a, b, c)
//! ```
//!
//! # Laws
//!
//! - **Currying**: every split of the arguments into `apply` steps yields `f(a1, ..., aN)`
//! - **Placeholder**: `partial!(f, __, b, __).call(a, c) == f(a, b, c)`
//! - **Composition**: `compose(g, f).call(xs..) == g(f(xs..))`
//! - **Identity**: `compose!(identity, f)` and `compose!(f, identity)` behave like `f`

mod callable;
mod compose_macro;
mod curried;
mod partial_macro;
mod utils;

pub use callable::{ArgumentList, Callable, UniformArguments};
pub use compose_macro::{Composed, compose};
pub use curried::{Bind, Bound, Curried, curry};
pub use utils::{__, Placeholder, fix, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::partial;
