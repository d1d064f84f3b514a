//! # functoid
//!
//! Curried callables with placeholder partial application, memoized
//! suspensions, and persistent lazy lists.
//!
//! ## Overview
//!
//! - **Curried Callables**: [`curry`](compose::curry), `apply`, [`partial!`] with `__` placeholders
//! - **Composition**: [`compose`](compose::compose) and [`compose!`]
//! - **Suspensions**: Memoized nullary computations that run at most once
//! - **Lazy Lists**: Persistent cons-lists with generated, cached tails
//!
//! ## Feature Flags
//!
//! - `sync`: Synchronized suspensions and list tails. Shared ownership
//!   switches from `Rc` to `Arc` and stored closures must be `Send + Sync`.
//!   Forcing costs a lock on the first access, so it is opt-in.
//!
//! ## Example
//!
//! ```rust
//! use functoid::prelude::*;
//!
//! fn weighted(x1: i32, x2: i32, x3: i32) -> i32 { x1 + 2 * x2 + 3 * x3 }
//!
//! let f = curry(weighted);
//! let middle_open = partial!(f, 2, __, 4);
//! assert_eq!(*middle_open.apply(3).force(), weighted(2, 3, 4));
//!
//! let odd = enum_from_to(1, 3, 10);
//! assert_eq!(odd.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
//! ```
//!
//! ## Logging
//!
//! Producer runs, generator runs and converted producer failures are
//! reported as [`tracing`] events. No subscriber is installed by this crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, functions and macros.
///
/// # Usage
///
/// ```rust
/// use functoid::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;

    pub use crate::control::*;

    pub use crate::persistent::*;

    pub use crate::error::FunctoidError;

    pub use crate::shared::Shareable;
}

pub mod compose;

pub mod control;

pub mod persistent;

pub mod error;

pub mod shared;
