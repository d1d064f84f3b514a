//! Deferred, memoized computation.
//!
//! This module provides [`Suspension`], a nullary computation that runs at
//! most once and caches its result. Fully applying a
//! [`Curried`](crate::compose::Curried) callable produces one, and every
//! element of a [`LazyList`](crate::persistent::LazyList) is one.
//!
//! # Examples
//!
//! ```rust
//! use functoid::control::{Suspension, SuspensionState};
//!
//! let suspension = Suspension::new(|| {
//!     println!("Computing...");
//!     42
//! });
//! // "Computing..." is not printed yet
//! assert_eq!(suspension.state(), SuspensionState::Unforced);
//!
//! // Now "Computing..." is printed once
//! assert_eq!(*suspension.force(), 42);
//! assert_eq!(*suspension.force(), 42);
//! ```

pub(crate) mod memo;
mod suspension;

pub use suspension::{Suspension, SuspensionState};
