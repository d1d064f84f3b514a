//! Free-function interface to [`LazyList`].
//!
//! These mirror the methods of [`LazyList`] in argument order suited to
//! currying (`cons(value, list)`), and add the arithmetic-progression
//! constructors [`enum_from`] and [`enum_from_to`].
//!
//! [`head`] and [`tail`] borrow their list, so they enter a composition
//! through a closure that owns the list:
//!
//! ```rust
//! use functoid::compose;
//! use functoid::compose::curry;
//! use functoid::persistent::{LazyList, cons, enum_from, head, tail};
//!
//! let rest = |list: LazyList<i32>| tail(&list).unwrap_or_default();
//! let fifth = compose!(|list: LazyList<i32>| head(&list).copied(), rest, rest, rest, rest);
//! assert_eq!(fifth.call(enum_from(1, 3)), Ok(9));
//!
//! let prepend = curry(cons::<i32>);
//! let counted = compose!(prepend.apply(0), prepend.apply(1), prepend.apply(2));
//! let list = counted.call(LazyList::new());
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```

use std::ops::{Add, Sub};

use super::lazy_list::LazyList;
use crate::error::FunctoidError;
use crate::shared::Shareable;

/// Returns whether `list` is empty.
#[inline]
pub const fn is_empty<T>(list: &LazyList<T>) -> bool {
    list.is_empty()
}

/// Prepends `value` to `list` in O(1).
///
/// `list` is shared, not copied. Takes both arguments by value so it can be
/// curried.
///
/// # Examples
///
/// ```rust
/// use functoid::compose::curry;
/// use functoid::persistent::{LazyList, cons, head};
///
/// let list = cons(0, cons(1, LazyList::new()));
/// assert_eq!(head(&list), Ok(&0));
///
/// let prepend_zero = curry(cons::<i32>).apply(0);
/// let prefixed = prepend_zero.call(LazyList::singleton(5));
/// assert_eq!(prefixed.iter().copied().collect::<Vec<_>>(), vec![0, 5]);
/// ```
#[inline]
pub fn cons<T>(value: T, list: LazyList<T>) -> LazyList<T> {
    list.cons(value)
}

/// Returns the first element of `list`.
///
/// # Errors
///
/// Returns [`FunctoidError::EmptyContainerAccess`] if `list` is empty.
#[inline]
pub fn head<T>(list: &LazyList<T>) -> Result<&T, FunctoidError> {
    list.head()
}

/// Returns `list` without its first element.
///
/// # Errors
///
/// Returns [`FunctoidError::EmptyContainerAccess`] if `list` is empty.
#[inline]
pub fn tail<T>(list: &LazyList<T>) -> Result<LazyList<T>, FunctoidError> {
    list.tail()
}

/// The unbounded arithmetic progression `x1, x2, x2 + (x2 - x1), ...`.
///
/// Each generated node computes its value from the head of the node before
/// it and passes the same generator on. Tails are cached per node, so a
/// second traversal does no arithmetic; a fresh call starts an independent
/// chain.
///
/// # Examples
///
/// ```rust
/// use functoid::persistent::enum_from;
///
/// let odd = enum_from(1, 3);
/// assert_eq!(odd.nth(4), Ok(&9));
/// ```
pub fn enum_from<T>(x1: T, x2: T) -> LazyList<T>
where
    T: Clone + Add<Output = T> + Sub<Output = T> + Shareable + 'static,
{
    let difference = x2 - x1.clone();
    LazyList::generate(x1, move |previous: &LazyList<T>| {
        match (previous.head(), previous.generator()) {
            (Ok(value), Some(generator)) => {
                LazyList::with_generator(value.clone() + difference.clone(), generator)
            }
            _ => LazyList::new(),
        }
    })
}

/// The arithmetic progression `x1, x2, ...` up to and including `xn`.
///
/// Generation stops once the next stepped value would exceed `xn`. The first
/// element `x1` is always present, even when it already exceeds `xn`. A
/// non-positive step never exceeds `xn`, so the list is then unbounded.
///
/// A bound at the top of `T`'s range is reached without overflowing: the
/// next value is only computed once it is known to fit below `xn`.
///
/// # Examples
///
/// ```rust
/// use functoid::persistent::enum_from_to;
///
/// let odd = enum_from_to(1, 3, 10);
/// assert_eq!(odd.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
///
/// let top = enum_from_to(250_u8, 251, u8::MAX);
/// assert_eq!(top.iter().count(), 6);
/// ```
pub fn enum_from_to<T>(x1: T, x2: T, xn: T) -> LazyList<T>
where
    T: Clone + PartialOrd + Add<Output = T> + Sub<Output = T> + Shareable + 'static,
{
    let difference = x2 - x1.clone();
    LazyList::generate(x1, move |previous: &LazyList<T>| {
        match (previous.head(), previous.generator()) {
            (Ok(value), Some(generator)) => match step_within(value, &difference, &xn) {
                Some(next) => LazyList::with_generator(next, generator),
                None => LazyList::new(),
            },
            _ => LazyList::new(),
        }
    })
}

/// `value + difference` when it does not exceed `bound`, computed so that
/// neither the sum nor the remaining distance overflows.
fn step_within<T>(value: &T, difference: &T, bound: &T) -> Option<T>
where
    T: Clone + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    let zero = difference.clone() - difference.clone();
    if *difference <= zero {
        return (value <= bound).then(|| value.clone() + difference.clone());
    }
    if value > bound {
        return None;
    }
    // `bound - value` may overflow here, but a positive step from a negative value cannot.
    if *value < zero && *bound >= zero {
        let next = value.clone() + difference.clone();
        return (next <= *bound).then_some(next);
    }
    let remaining = bound.clone() - value.clone();
    (*difference <= remaining).then(|| value.clone() + difference.clone())
}
