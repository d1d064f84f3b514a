//! Error types surfaced by curried callables, suspensions and lazy lists.

/// Errors produced by the fallible operations of this crate.
///
/// Every variant carries enough context to identify the operation that
/// failed.
///
/// # Examples
///
/// ```rust
/// use functoid::error::FunctoidError;
/// use functoid::persistent::LazyList;
///
/// let empty: LazyList<i32> = LazyList::new();
/// assert_eq!(
///     empty.head(),
///     Err(FunctoidError::EmptyContainerAccess { operation: "head" })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctoidError {
    /// `head`, `tail` or an indexed access was attempted on an empty list.
    EmptyContainerAccess {
        /// The list operation that was attempted.
        operation: &'static str,
    },
    /// A callable was invoked through a runtime argument list whose length
    /// differs from its remaining arity.
    ArityMismatch {
        /// The remaining arity of the callable.
        expected: usize,
        /// The number of arguments actually supplied.
        supplied: usize,
    },
    /// A suspension's producer panicked while being forced.
    ///
    /// The suspension is left unforced, so forcing it again retries the
    /// producer.
    ProducerFailure {
        /// The panic message, when it was a string.
        message: String,
    },
}

impl std::fmt::Display for FunctoidError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContainerAccess { operation } => {
                write!(formatter, "{operation}: empty container")
            }
            Self::ArityMismatch { expected, supplied } => write!(
                formatter,
                "arity mismatch: expected {expected} arguments, supplied {supplied}"
            ),
            Self::ProducerFailure { message } => {
                write!(formatter, "force: producer failed: {message}")
            }
        }
    }
}

impl std::error::Error for FunctoidError {}
