//! Write-once cache shared by [`Suspension`](super::Suspension) and the
//! tail slots of [`LazyList`](crate::persistent::LazyList).
//!
//! Without the `sync` feature the cache is a [`OnceCell`] and performs no
//! locking. With it, a [`OnceLock`] holds the value and a
//! [`parking_lot::Mutex`] serializes initializers, so exactly one of any
//! number of concurrent initializers runs. A failed or panicking initializer
//! leaves the cache empty.

#[cfg(not(feature = "sync"))]
use std::cell::OnceCell;
#[cfg(feature = "sync")]
use std::sync::OnceLock;

use std::convert::Infallible;

pub(crate) struct Memo<T> {
    #[cfg(not(feature = "sync"))]
    cell: OnceCell<T>,
    #[cfg(feature = "sync")]
    cell: OnceLock<T>,
    #[cfg(feature = "sync")]
    guard: parking_lot::Mutex<()>,
}

impl<T> Memo<T> {
    #[cfg(not(feature = "sync"))]
    pub(crate) const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    #[cfg(feature = "sync")]
    pub(crate) const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            guard: parking_lot::const_mutex(()),
        }
    }

    pub(crate) fn with_value(value: T) -> Self {
        let memo = Self::new();
        let _ = memo.cell.set(value);
        memo
    }

    #[inline]
    pub(crate) fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub(crate) fn get_or_init<F: FnOnce() -> T>(&self, initializer: F) -> &T {
        match self.get_or_try_init(|| Ok::<T, Infallible>(initializer())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Runs `initializer` unless a value is already cached.
    ///
    /// An `Err` (or a panic) from the initializer leaves the cache empty.
    #[cfg(not(feature = "sync"))]
    pub(crate) fn get_or_try_init<E, F>(&self, initializer: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        let value = initializer()?;
        // A re-entrant initializer may have filled the cell first; keep that value.
        Ok(self.cell.get_or_init(|| value))
    }

    /// Runs `initializer` unless a value is already cached.
    ///
    /// Concurrent callers block until the running initializer finishes. An
    /// `Err` (or a panic) from the initializer leaves the cache empty and
    /// lets the next waiter try again. Re-entrant initialization of the same
    /// memo deadlocks.
    #[cfg(feature = "sync")]
    pub(crate) fn get_or_try_init<E, F>(&self, initializer: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        let _guard = self.guard.lock();
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        let value = initializer()?;
        Ok(self.cell.get_or_init(|| value))
    }

    pub(crate) fn take(&mut self) -> Option<T> {
        self.cell.take()
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}
