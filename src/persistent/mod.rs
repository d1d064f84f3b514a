//! Persistent (immutable) lazy data structures.
//!
//! This module provides [`LazyList`], a cons-list with memoized elements and
//! on-demand tails, together with free functions in the style of a
//! functional prelude:
//!
//! - [`is_empty`], [`cons`], [`head`], [`tail`]: The basic list interface
//! - [`enum_from`]: Unbounded arithmetic progressions
//! - [`enum_from_to`]: Bounded arithmetic progressions
//!
//! # Structural Sharing
//!
//! `cons` shares the existing list as the new tail, and a generated tail is
//! cached in the node it extends. Every handle to a node observes the same
//! materialized chain.
//!
//! # Examples
//!
//! ```rust
//! use functoid::error::FunctoidError;
//! use functoid::persistent::{LazyList, cons, enum_from, head, tail};
//!
//! let list = cons(0, cons(1, cons(2, LazyList::new())));
//! assert_eq!(head(&list), Ok(&0));
//! assert_eq!(head(&tail(&list)?), Ok(&1));
//!
//! let odd = enum_from(1, 3);
//! assert_eq!(odd.nth(4), Ok(&9));
//! # Ok::<(), FunctoidError>(())
//! ```

mod functions;
mod lazy_list;

pub use functions::{cons, enum_from, enum_from_to, head, is_empty, tail};
pub use lazy_list::{Generator, LazyList, LazyListIterator, Thunk};
