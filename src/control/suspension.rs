//! Memoized nullary computations.
//!
//! This module provides [`Suspension<T, F>`], a deferred computation whose
//! producer runs at most once. Clones share the same cache, so forcing any
//! copy forces them all.
//!
//! # Examples
//!
//! ```rust
//! use functoid::control::Suspension;
//!
//! let suspension = Suspension::new(|| 6 * 7);
//! assert!(!suspension.is_forced());
//!
//! assert_eq!(*suspension.force(), 42);
//! assert!(suspension.is_forced());
//! ```
//!
//! # Thread Safety
//!
//! By default the cache performs no locking and a `Suspension` is neither
//! `Send` nor `Sync`. With the `sync` feature the cache is guarded by a
//! one-time initialization lock: concurrent `force` calls run the producer
//! exactly once and every caller observes the same value.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::memo::Memo;
use crate::compose::Callable;
use crate::error::FunctoidError;
use crate::shared::ReferenceCounter;

/// The observable state of a [`Suspension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuspensionState {
    /// The producer has not completed yet.
    Unforced,
    /// The value is cached; the producer will never run again.
    Forced,
}

struct SuspensionCell<T, F> {
    producer: Option<F>,
    memo: Memo<T>,
}

/// A memoized computation with no arguments.
///
/// `Suspension<T, F>` holds a producer `F` and runs it the first time the
/// value is requested. The result is cached and every later `force`
/// (on this instance or any clone of it) returns the cached value.
///
/// If the producer panics the suspension stays [`SuspensionState::Unforced`]
/// and the next `force` runs the producer again.
///
/// # Type Parameters
///
/// * `T` - The type of the computed value
/// * `F` - The producer (defaults to `fn() -> T`)
///
/// # Examples
///
/// ```rust
/// use functoid::control::Suspension;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let suspension = Suspension::new(|| {
///     calls.set(calls.get() + 1);
///     "computed"
/// });
///
/// let copy = suspension.clone();
/// assert_eq!(*suspension.force(), "computed");
/// assert_eq!(*copy.force(), "computed");
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Suspension<T, F = fn() -> T> {
    shared: ReferenceCounter<SuspensionCell<T, F>>,
}

impl<T, F> Suspension<T, F>
where
    F: Callable<(), Output = T>,
{
    /// Creates an unforced suspension that will run `producer` on demand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::control::Suspension;
    ///
    /// let suspension = Suspension::new(|| vec![1, 2, 3]);
    /// assert!(!suspension.is_forced());
    /// ```
    #[inline]
    pub fn new(producer: F) -> Self {
        Self {
            shared: ReferenceCounter::new(SuspensionCell {
                producer: Some(producer),
                memo: Memo::new(),
            }),
        }
    }

    /// Forces the suspension and returns a reference to the cached value.
    ///
    /// The producer runs only if no value is cached yet.
    ///
    /// # Panics
    ///
    /// Propagates a panic raised by the producer. The suspension is left
    /// unforced, so a later call retries. Use [`Suspension::try_force`] to
    /// receive the failure as a [`FunctoidError::ProducerFailure`] instead.
    ///
    /// With the `sync` feature, forcing a suspension from inside its own
    /// producer deadlocks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::control::Suspension;
    ///
    /// let suspension = Suspension::new(|| 1 + 1);
    /// assert_eq!(*suspension.force(), 2);
    /// ```
    pub fn force(&self) -> &T {
        let cell = &*self.shared;
        cell.memo.get_or_init(|| cell.produce())
    }

    /// Forces the suspension, converting a producer panic into an error.
    ///
    /// # Errors
    ///
    /// Returns [`FunctoidError::ProducerFailure`] carrying the panic message
    /// when the producer panics. The suspension stays unforced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::control::Suspension;
    /// use functoid::error::FunctoidError;
    ///
    /// let failing = Suspension::new(|| -> i32 { panic!("no value") });
    /// assert_eq!(
    ///     failing.try_force(),
    ///     Err(FunctoidError::ProducerFailure { message: "no value".to_string() })
    /// );
    /// assert!(!failing.is_forced());
    /// ```
    pub fn try_force(&self) -> Result<&T, FunctoidError> {
        let cell = &*self.shared;
        cell.memo.get_or_try_init(|| {
            panic::catch_unwind(AssertUnwindSafe(|| cell.produce())).map_err(|payload| {
                let message = panic_message(payload.as_ref());
                tracing::debug!(%message, "suspension producer failed");
                FunctoidError::ProducerFailure { message }
            })
        })
    }

    /// Returns a suspension that forces this one and applies `function` to
    /// the result.
    ///
    /// Neither suspension is forced until the returned one is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::control::Suspension;
    ///
    /// let length = Suspension::new(|| String::from("lazy")).map(|text| text.len());
    /// assert_eq!(*length.force(), 4);
    /// ```
    pub fn map<U, G>(self, function: G) -> Suspension<U, impl Fn() -> U>
    where
        G: Fn(&T) -> U,
    {
        Suspension::new(move || function(self.force()))
    }
}

impl<T> Suspension<T> {
    /// Creates a suspension whose value is already cached.
    ///
    /// No producer is ever run; `force` is a plain read.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::control::{Suspension, SuspensionState};
    ///
    /// let suspension = Suspension::from_value(42);
    /// assert_eq!(suspension.state(), SuspensionState::Forced);
    /// assert_eq!(*suspension.force(), 42);
    /// ```
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::seeded(value)
    }
}

impl<T, F> Suspension<T, F> {
    pub(crate) fn seeded(value: T) -> Self {
        Self {
            shared: ReferenceCounter::new(SuspensionCell {
                producer: None,
                memo: Memo::with_value(value),
            }),
        }
    }

    /// Returns the cached value without forcing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::control::Suspension;
    ///
    /// let suspension = Suspension::new(|| 5);
    /// assert_eq!(suspension.get(), None);
    /// let _ = suspension.force();
    /// assert_eq!(suspension.get(), Some(&5));
    /// ```
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.shared.memo.get()
    }

    /// Returns whether the value is cached.
    #[inline]
    pub fn is_forced(&self) -> bool {
        self.get().is_some()
    }

    /// Returns the current [`SuspensionState`].
    #[inline]
    pub fn state(&self) -> SuspensionState {
        if self.is_forced() {
            SuspensionState::Forced
        } else {
            SuspensionState::Unforced
        }
    }

    /// Returns whether both suspensions share one cache.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.shared, &other.shared)
    }
}

impl<T, F> SuspensionCell<T, F>
where
    F: Callable<(), Output = T>,
{
    fn produce(&self) -> T {
        tracing::trace!("running suspension producer");
        match &self.producer {
            Some(producer) => producer.invoke(()),
            // Seeded cells are filled at construction and never emptied.
            None => unreachable!("seeded suspension has no cached value"),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "producer panicked".to_string())
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T, F> Clone for Suspension<T, F> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            shared: ReferenceCounter::clone(&self.shared),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Suspension<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => formatter.debug_tuple("Suspension").field(value).finish(),
            None => formatter
                .debug_tuple("Suspension")
                .field(&format_args!("<unforced>"))
                .finish(),
        }
    }
}

#[cfg(not(feature = "sync"))]
static_assertions::assert_not_impl_any!(Suspension<i32>: Send, Sync);

#[cfg(feature = "sync")]
static_assertions::assert_impl_all!(Suspension<i32>: Send, Sync);
