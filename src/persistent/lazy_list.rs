//! Persistent lazy singly-linked list.
//!
//! This module provides [`LazyList`], an immutable cons-list whose elements
//! are [`Suspension`]s and whose tails may be produced on demand by a
//! generator.
//!
//! # Overview
//!
//! - O(1) `cons`, whatever the length (or finiteness) of the tail
//! - O(1) `head`, forcing the element on first access
//! - O(1) `tail` once materialized; the first call on a generator-backed node
//!   runs the generator and caches its result in the node
//! - Infinite sequences via generators that receive the node they extend
//!
//! # Examples
//!
//! ```rust
//! use functoid::persistent::LazyList;
//!
//! let list = LazyList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Ok(&1));
//! assert_eq!(list.tail().and_then(|tail| tail.head().copied()), Ok(2));
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(extended.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
//!
//! # Generated Tails
//!
//! A generator is called with the list whose tail it must produce. Passing
//! the generator on to the next node gives an unbounded sequence:
//!
//! ```rust
//! use functoid::persistent::LazyList;
//!
//! let powers = LazyList::generate(1_u64, |previous: &LazyList<u64>| {
//!     match (previous.head(), previous.generator()) {
//!         (Ok(value), Some(generator)) => LazyList::with_generator(value * 2, generator),
//!         _ => LazyList::new(),
//!     }
//! });
//! assert_eq!(powers.nth(10), Ok(&1024));
//! ```
//!
//! Each node's generator runs at most once; later traversals reuse the cached
//! nodes.

use std::fmt;

use crate::control::Suspension;
use crate::control::memo::Memo;
use crate::error::FunctoidError;
use crate::shared::{ReferenceCounter, Shareable};

/// A deferred list element.
#[cfg(not(feature = "sync"))]
pub type Thunk<T> = Box<dyn Fn() -> T>;

/// A deferred list element.
#[cfg(feature = "sync")]
pub type Thunk<T> = Box<dyn Fn() -> T + Send + Sync>;

/// Produces the tail of the list it is given.
#[cfg(not(feature = "sync"))]
pub type Generator<T> = std::rc::Rc<dyn Fn(&LazyList<T>) -> LazyList<T>>;

/// Produces the tail of the list it is given.
#[cfg(feature = "sync")]
pub type Generator<T> = std::sync::Arc<dyn Fn(&LazyList<T>) -> LazyList<T> + Send + Sync>;

/// Internal node structure for the lazy list.
///
/// `tail` is written at most once: at construction for `cons` nodes, or on
/// the first `tail` call for generator-backed nodes.
struct Node<T> {
    value: Suspension<T, Thunk<T>>,
    generator: Option<Generator<T>>,
    tail: Memo<LazyList<T>>,
}

/// A persistent list with lazily computed elements and tails.
///
/// Cloning a `LazyList` is O(1) and shares every node. Materializing a tail
/// through one handle makes it visible through all handles sharing the node.
///
/// # Time Complexity
///
/// | Operation    | Complexity                 |
/// |--------------|----------------------------|
/// | `new`        | O(1)                       |
/// | `cons`       | O(1)                       |
/// | `head`       | O(1) + element producer    |
/// | `tail`       | O(1) + generator (once)    |
/// | `nth`        | O(n)                       |
/// | `drop_first` | O(n)                       |
///
/// # Equality
///
/// Two lists are equal when both are empty, or both have equal heads and
/// equal tails. Comparison stops early when both sides reach the same node,
/// but comparing two distinct infinite lists never terminates.
pub struct LazyList<T> {
    head: Option<ReferenceCounter<Node<T>>>,
}

impl<T> LazyList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::persistent::LazyList;
    ///
    /// let list: LazyList<i32> = LazyList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Creates a list with a single element.
    #[inline]
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self::new().cons(value)
    }

    /// Prepends a value, sharing `self` as the tail.
    ///
    /// The value is stored as an already-forced [`Suspension`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::persistent::LazyList;
    ///
    /// let tail = LazyList::singleton(2);
    /// let list = tail.cons(1);
    /// assert_eq!(list.head(), Ok(&1));
    /// assert_eq!(tail.head(), Ok(&2));
    /// ```
    #[must_use]
    pub fn cons(&self, value: T) -> Self {
        self.push(Suspension::seeded(value))
    }

    /// Prepends an element computed on first access.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::persistent::LazyList;
    ///
    /// let list = LazyList::new().cons_lazy(|| "expensive".len());
    /// assert_eq!(list.head(), Ok(&9));
    /// ```
    #[must_use]
    pub fn cons_lazy<F>(&self, thunk: F) -> Self
    where
        F: Fn() -> T + Shareable + 'static,
    {
        let thunk: Thunk<T> = Box::new(thunk);
        self.push(Suspension::new(thunk))
    }

    fn push(&self, value: Suspension<T, Thunk<T>>) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                value,
                generator: None,
                tail: Memo::with_value(self.clone()),
            })),
        }
    }

    /// Creates a list whose tail is produced by `generator` on first access.
    ///
    /// `generator` receives the list being extended (whose head is `value`).
    #[must_use]
    pub fn generate<G>(value: T, generator: G) -> Self
    where
        G: Fn(&Self) -> Self + Shareable + 'static,
    {
        let generator: Generator<T> = ReferenceCounter::new(generator);
        Self::with_generator(value, generator)
    }

    /// Creates a generator-backed list from an existing shared generator.
    ///
    /// This is how a generator passes itself on to the node it produces.
    #[must_use]
    pub fn with_generator(value: T, generator: Generator<T>) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                value: Suspension::seeded(value),
                generator: Some(generator),
                tail: Memo::new(),
            })),
        }
    }

    /// Returns whether the list is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the first element, forcing it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`FunctoidError::EmptyContainerAccess`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::error::FunctoidError;
    /// use functoid::persistent::LazyList;
    ///
    /// assert_eq!(LazyList::singleton(1).head(), Ok(&1));
    /// assert_eq!(
    ///     LazyList::<i32>::new().head(),
    ///     Err(FunctoidError::EmptyContainerAccess { operation: "head" })
    /// );
    /// ```
    pub fn head(&self) -> Result<&T, FunctoidError> {
        self.head
            .as_ref()
            .map(|node| node.value.force())
            .ok_or(FunctoidError::EmptyContainerAccess { operation: "head" })
    }

    /// Returns the list without its first element.
    ///
    /// For a generator-backed node the generator runs on the first call only;
    /// its result is cached in the node and shared by every handle.
    ///
    /// # Errors
    ///
    /// Returns [`FunctoidError::EmptyContainerAccess`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::persistent::LazyList;
    ///
    /// let list = LazyList::new().cons(2).cons(1);
    /// let tail = list.tail().unwrap();
    /// assert_eq!(tail.head(), Ok(&2));
    /// assert!(tail.tail().unwrap().is_empty());
    /// ```
    pub fn tail(&self) -> Result<Self, FunctoidError> {
        self.next_list()
            .cloned()
            .ok_or(FunctoidError::EmptyContainerAccess { operation: "tail" })
    }

    /// Returns the generator of the first node, if it has one.
    #[must_use]
    pub fn generator(&self) -> Option<Generator<T>> {
        self.head.as_ref().and_then(|node| node.generator.clone())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Materializes (and caches) the first `index` tails.
    ///
    /// # Errors
    ///
    /// Returns [`FunctoidError::EmptyContainerAccess`] if the list has no
    /// element at `index`.
    pub fn nth(&self, index: usize) -> Result<&T, FunctoidError> {
        let exhausted = FunctoidError::EmptyContainerAccess { operation: "nth" };
        let mut current = self;
        for _ in 0..index {
            current = current.next_list().ok_or_else(|| exhausted.clone())?;
        }
        current.head().map_err(|_| exhausted)
    }

    /// Returns the list without its first `count` elements.
    ///
    /// Returns an empty list if there are fewer than `count` elements.
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        let mut current = self;
        for _ in 0..count {
            match current.next_list() {
                Some(next) => current = next,
                None => break,
            }
        }
        current.clone()
    }

    /// Returns whether both lists start at the same node.
    ///
    /// Two empty lists are considered the same.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }

    /// Returns an iterator over references to the elements.
    ///
    /// The iterator is lazy: a tail is materialized only when the element
    /// after it is requested, so `take(n)` on an infinite list is safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::persistent::enum_from;
    ///
    /// let odd = enum_from(1, 3);
    /// let first: Vec<i32> = odd.iter().copied().take(4).collect();
    /// assert_eq!(first, vec![1, 3, 5, 7]);
    /// ```
    #[inline]
    pub const fn iter(&self) -> LazyListIterator<'_, T> {
        LazyListIterator {
            next: Some(self),
            previous: None,
        }
    }

    fn next_list(&self) -> Option<&Self> {
        let node = self.head.as_ref()?;
        Some(node.tail.get_or_init(|| match &node.generator {
            Some(generator) => {
                tracing::trace!("running lazy list generator");
                generator(self)
            }
            None => Self::new(),
        }))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`LazyList`].
pub struct LazyListIterator<'a, T> {
    next: Option<&'a LazyList<T>>,
    previous: Option<&'a LazyList<T>>,
}

impl<'a, T> Iterator for LazyListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(previous) = self.previous.take() {
            self.next = previous.next_list();
        }
        let list = self.next.take()?;
        let node = list.head.as_ref()?;
        self.previous = Some(list);
        Some(node.value.force())
    }
}

impl<T> std::iter::FusedIterator for LazyListIterator<'_, T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for LazyList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for LazyList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LazyList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(Self::new(), |list, element| list.cons(element))
    }
}

impl<'a, T> IntoIterator for &'a LazyList<T> {
    type Item = &'a T;
    type IntoIter = LazyListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LazyList<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self;
        let mut right = other;
        loop {
            if left.ptr_eq(right) {
                return true;
            }
            let (Some(left_node), Some(right_node)) = (&left.head, &right.head) else {
                return false;
            };
            if left_node.value.force() != right_node.value.force() {
                return false;
            }
            let (Some(left_tail), Some(right_tail)) = (left.next_list(), right.next_list()) else {
                return false;
            };
            left = left_tail;
            right = right_tail;
        }
    }
}

impl<T: Eq> Eq for LazyList<T> {}

/// Formats the already-materialized prefix without forcing anything.
///
/// Unforced elements print as `<unforced>` and an unmaterialized tail as `..`.
///
/// # Examples
///
/// ```rust
/// use functoid::persistent::{LazyList, enum_from};
///
/// let list = LazyList::new().cons(2).cons(1);
/// assert_eq!(format!("{list:?}"), "[1, 2]");
///
/// let naturals = enum_from(0, 1);
/// let _ = naturals.nth(2);
/// assert_eq!(format!("{naturals:?}"), "[0, 1, 2, ..]");
/// ```
impl<T: fmt::Debug> fmt::Debug for LazyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = formatter.debug_list();
        let mut current = self;
        while let Some(node) = &current.head {
            match node.value.get() {
                Some(value) => entries.entry(value),
                None => entries.entry(&format_args!("<unforced>")),
            };
            match node.tail.get() {
                Some(next) => current = next,
                None => {
                    entries.entry(&format_args!(".."));
                    break;
                }
            }
        }
        entries.finish()
    }
}

impl<T> Drop for LazyList<T> {
    // Unlinks uniquely owned nodes one at a time so long chains do not
    // overflow the stack.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => {
                    current = node.tail.take().and_then(|mut next| next.head.take());
                }
                Err(_) => break,
            }
        }
    }
}

#[cfg(not(feature = "sync"))]
static_assertions::assert_not_impl_any!(LazyList<i32>: Send, Sync);

#[cfg(feature = "sync")]
static_assertions::assert_impl_all!(LazyList<i32>: Send, Sync);
