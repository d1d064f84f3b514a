//! Curried callables with placeholder-aware partial application.
//!
//! [`Curried<F, Arguments>`] wraps a function `F` together with the tuple of
//! parameter types it still expects. Binding an argument never runs the
//! function; it produces a new curried callable of smaller arity whose
//! producer is a [`Bound`] wrapper. Binding the last argument produces a
//! [`Suspension`], so a fully applied call is memoized and runs at most once.
//!
//! # Examples
//!
//! ```rust
//! use functoid::compose::curry;
//!
//! fn weighted(x1: i32, x2: i32, x3: i32) -> i32 { x1 + 2 * x2 + 3 * x3 }
//!
//! let curried = curry(weighted);
//! assert_eq!(curried.arity(), 3);
//!
//! let result = curried.apply(1).apply(2).apply(3);
//! assert_eq!(*result.force(), weighted(1, 2, 3));
//! ```
//!
//! # Binding Positions
//!
//! [`Bind<SLOT>`] binds the `SLOT`-th remaining parameter and keeps the
//! others in their original order. This is what the [`partial!`](crate::partial)
//! macro expands to: a placeholder skips a slot, a value binds at the current
//! slot.
//!
//! ```rust
//! use functoid::compose::{Bind, curry};
//!
//! fn triple(a: &'static str, b: &'static str, c: &'static str) -> String {
//!     format!("{a}{b}{c}")
//! }
//!
//! let middle_bound = Bind::<1>::bind(&curry(triple), "b");
//! assert_eq!(middle_bound.call("a", "c"), "abc");
//! ```
//!
//! # Eager Calls
//!
//! [`Curried::eager`] turns a callable into an ordinary function of the same
//! arity. A call with the wrong number of arguments is rejected by the
//! compiler rather than at runtime:
//!
//! ```compile_fail
//! use functoid::compose::curry;
//!
//! let add = curry(|first: i32, second: i32| first + second).eager();
//! let _ = add(1);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::callable::{ArgumentList, Callable, UniformArguments};
use crate::control::Suspension;
use crate::error::FunctoidError;
use crate::shared::ReferenceCounter;

/// A function of statically known arity supporting partial application.
///
/// Cloning is O(1): the wrapped function is shared, and every partial
/// application captures its new argument by value in a fresh wrapper, so no
/// state is shared between a callable and the callables derived from it.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `Arguments` - The tuple of parameter types still expected
pub struct Curried<F, Arguments> {
    function: ReferenceCounter<F>,
    arguments: PhantomData<fn(Arguments)>,
}

/// Creates a curried callable, inferring the arity from `function`.
///
/// # Examples
///
/// ```rust
/// use functoid::compose::curry;
///
/// let add = curry(|first: i32, second: i32| first + second);
/// assert_eq!(add.call(2, 3), 5);
/// assert_eq!(*add.apply(2).apply(3).force(), 5);
/// ```
#[inline]
pub fn curry<F, Arguments>(function: F) -> Curried<F, Arguments>
where
    F: Callable<Arguments>,
{
    Curried::new(function)
}

impl<F, Arguments> Curried<F, Arguments> {
    /// Wraps `function` as a curried callable expecting `Arguments`.
    #[inline]
    pub fn new(function: F) -> Self {
        Self::from_shared(ReferenceCounter::new(function))
    }

    #[inline]
    pub(crate) const fn from_shared(function: ReferenceCounter<F>) -> Self {
        Self {
            function,
            arguments: PhantomData,
        }
    }

    pub(crate) fn into_shared(self) -> ReferenceCounter<F> {
        self.function
    }

    /// Returns the number of parameters still expected.
    #[inline]
    pub fn arity(&self) -> usize
    where
        Arguments: ArgumentList,
    {
        Arguments::ARITY
    }

    /// Calls the function with arguments taken from a runtime slice.
    ///
    /// This is the only calling path whose argument count is checked at
    /// runtime; [`call`](Curried::call), [`eager`](Curried::eager) and
    /// [`boxed`](Curried::boxed) reject a wrong count at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`FunctoidError::ArityMismatch`] if `arguments.len()` differs
    /// from the remaining arity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::compose::curry;
    /// use functoid::error::FunctoidError;
    ///
    /// let sum = curry(|a: i32, b: i32, c: i32| a + b + c);
    /// assert_eq!(sum.call_slice(&[1, 2, 3]), Ok(6));
    /// assert_eq!(
    ///     sum.call_slice(&[1, 2]),
    ///     Err(FunctoidError::ArityMismatch { expected: 3, supplied: 2 })
    /// );
    /// ```
    pub fn call_slice<Argument>(&self, arguments: &[Argument]) -> Result<F::Output, FunctoidError>
    where
        F: Callable<Arguments>,
        Arguments: UniformArguments<Argument>,
    {
        Arguments::from_slice(arguments)
            .map(|tuple| Callable::invoke(&*self.function, tuple))
            .ok_or(FunctoidError::ArityMismatch {
                expected: Arguments::ARITY,
                supplied: arguments.len(),
            })
    }

    /// Returns whether both callables share the same wrapped function.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.function, &other.function)
    }

    fn bound<V, const SLOT: usize>(&self, value: V) -> Bound<F, V, SLOT> {
        Bound {
            function: ReferenceCounter::clone(&self.function),
            value,
        }
    }
}

impl<F, Arguments> Clone for Curried<F, Arguments> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_shared(ReferenceCounter::clone(&self.function))
    }
}

impl<F, Arguments: ArgumentList> fmt::Debug for Curried<F, Arguments> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &Arguments::ARITY)
            .finish_non_exhaustive()
    }
}

impl<F, Arguments> Callable<Arguments> for Curried<F, Arguments>
where
    F: Callable<Arguments>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&self, arguments: Arguments) -> Self::Output {
        Callable::invoke(&*self.function, arguments)
    }
}

// =============================================================================
// Bound: a function with one argument fixed at a given slot
// =============================================================================

/// A function with the argument at position `SLOT` fixed to `value`.
///
/// Calling a `Bound` with the remaining arguments inserts a clone of the
/// stored value at `SLOT` and calls the wrapped function.
pub struct Bound<F, V, const SLOT: usize> {
    function: ReferenceCounter<F>,
    value: V,
}

impl<F, V: Clone, const SLOT: usize> Clone for Bound<F, V, SLOT> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
            value: self.value.clone(),
        }
    }
}

impl<F, V: fmt::Debug, const SLOT: usize> fmt::Debug for Bound<F, V, SLOT> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Bound")
            .field("slot", &SLOT)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

macro_rules! impl_bound_callable {
    ($slot:literal; [$($before:ident $before_argument:ident),*]; [$($after:ident $after_argument:ident),*]) => {
        impl<Function, Value, $($before,)* $($after),*> Callable<($($before,)* $($after,)*)>
            for Bound<Function, Value, $slot>
        where
            Function: Callable<($($before,)* Value, $($after,)*)>,
            Value: Clone,
        {
            type Output = Function::Output;

            #[inline]
            fn invoke(
                &self,
                ($($before_argument,)* $($after_argument,)*): ($($before,)* $($after,)*),
            ) -> Self::Output {
                Callable::invoke(
                    &*self.function,
                    ($($before_argument,)* self.value.clone(), $($after_argument,)*),
                )
            }
        }
    };
}

// Underlying arity 1
impl_bound_callable!(0; []; []);
// Underlying arity 2
impl_bound_callable!(0; []; [A2 a2]);
impl_bound_callable!(1; [A1 a1]; []);
// Underlying arity 3
impl_bound_callable!(0; []; [A2 a2, A3 a3]);
impl_bound_callable!(1; [A1 a1]; [A3 a3]);
impl_bound_callable!(2; [A1 a1, A2 a2]; []);
// Underlying arity 4
impl_bound_callable!(0; []; [A2 a2, A3 a3, A4 a4]);
impl_bound_callable!(1; [A1 a1]; [A3 a3, A4 a4]);
impl_bound_callable!(2; [A1 a1, A2 a2]; [A4 a4]);
impl_bound_callable!(3; [A1 a1, A2 a2, A3 a3]; []);
// Underlying arity 5
impl_bound_callable!(0; []; [A2 a2, A3 a3, A4 a4, A5 a5]);
impl_bound_callable!(1; [A1 a1]; [A3 a3, A4 a4, A5 a5]);
impl_bound_callable!(2; [A1 a1, A2 a2]; [A4 a4, A5 a5]);
impl_bound_callable!(3; [A1 a1, A2 a2, A3 a3]; [A5 a5]);
impl_bound_callable!(4; [A1 a1, A2 a2, A3 a3, A4 a4]; []);
// Underlying arity 6
impl_bound_callable!(0; []; [A2 a2, A3 a3, A4 a4, A5 a5, A6 a6]);
impl_bound_callable!(1; [A1 a1]; [A3 a3, A4 a4, A5 a5, A6 a6]);
impl_bound_callable!(2; [A1 a1, A2 a2]; [A4 a4, A5 a5, A6 a6]);
impl_bound_callable!(3; [A1 a1, A2 a2, A3 a3]; [A5 a5, A6 a6]);
impl_bound_callable!(4; [A1 a1, A2 a2, A3 a3, A4 a4]; [A6 a6]);
impl_bound_callable!(5; [A1 a1, A2 a2, A3 a3, A4 a4, A5 a5]; []);

// =============================================================================
// Bind: positional partial application
// =============================================================================

/// Binds the `SLOT`-th remaining parameter of a curried callable.
///
/// The result expects the other parameters in their original order. Binding
/// the only remaining parameter yields a [`Suspension`].
///
/// Binding a slot at or past the remaining arity does not compile.
///
/// ```compile_fail
/// use functoid::compose::{Bind, curry};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let _ = Bind::<2>::bind(&curry(add), 1);
/// ```
pub trait Bind<const SLOT: usize> {
    /// The type of the parameter being bound.
    type Value;
    /// The callable left after binding.
    type Output;

    /// Fixes the parameter at `SLOT` to `value`.
    fn bind(&self, value: Self::Value) -> Self::Output;
}

impl<Function, A1> Bind<0> for Curried<Function, (A1,)>
where
    Function: Callable<(A1,)>,
    A1: Clone,
{
    type Value = A1;
    type Output = Suspension<Function::Output, Bound<Function, A1, 0>>;

    #[inline]
    fn bind(&self, value: A1) -> Self::Output {
        Suspension::new(self.bound(value))
    }
}

macro_rules! impl_bind {
    ($slot:literal; ($($parameter:ident),+); $value:ident; ($($remaining:ident),*)) => {
        impl<Function, $($parameter),+> Bind<$slot> for Curried<Function, ($($parameter,)+)>
        where
            Function: Callable<($($parameter,)+)>,
            $value: Clone,
        {
            type Value = $value;
            type Output = Curried<Bound<Function, $value, $slot>, ($($remaining,)*)>;

            #[inline]
            fn bind(&self, value: $value) -> Self::Output {
                Curried::new(self.bound(value))
            }
        }
    };
}

impl_bind!(0; (A1, A2); A1; (A2));
impl_bind!(1; (A1, A2); A2; (A1));

impl_bind!(0; (A1, A2, A3); A1; (A2, A3));
impl_bind!(1; (A1, A2, A3); A2; (A1, A3));
impl_bind!(2; (A1, A2, A3); A3; (A1, A2));

impl_bind!(0; (A1, A2, A3, A4); A1; (A2, A3, A4));
impl_bind!(1; (A1, A2, A3, A4); A2; (A1, A3, A4));
impl_bind!(2; (A1, A2, A3, A4); A3; (A1, A2, A4));
impl_bind!(3; (A1, A2, A3, A4); A4; (A1, A2, A3));

impl_bind!(0; (A1, A2, A3, A4, A5); A1; (A2, A3, A4, A5));
impl_bind!(1; (A1, A2, A3, A4, A5); A2; (A1, A3, A4, A5));
impl_bind!(2; (A1, A2, A3, A4, A5); A3; (A1, A2, A4, A5));
impl_bind!(3; (A1, A2, A3, A4, A5); A4; (A1, A2, A3, A5));
impl_bind!(4; (A1, A2, A3, A4, A5); A5; (A1, A2, A3, A4));

impl_bind!(0; (A1, A2, A3, A4, A5, A6); A1; (A2, A3, A4, A5, A6));
impl_bind!(1; (A1, A2, A3, A4, A5, A6); A2; (A1, A3, A4, A5, A6));
impl_bind!(2; (A1, A2, A3, A4, A5, A6); A3; (A1, A2, A4, A5, A6));
impl_bind!(3; (A1, A2, A3, A4, A5, A6); A4; (A1, A2, A3, A5, A6));
impl_bind!(4; (A1, A2, A3, A4, A5, A6); A5; (A1, A2, A3, A4, A6));
impl_bind!(5; (A1, A2, A3, A4, A5, A6); A6; (A1, A2, A3, A4, A5));

// =============================================================================
// Per-arity calling conventions
// =============================================================================

impl<Function, Return> Curried<Function, ()>
where
    Function: Callable<(), Output = Return>,
{
    /// Calls the wrapped function directly, without memoization.
    #[inline]
    pub fn call(&self) -> Return {
        Callable::invoke(&*self.function, ())
    }

    /// Turns the nullary callable into a memoized [`Suspension`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functoid::compose::curry;
    ///
    /// let answer = curry(|| 42).suspend();
    /// assert_eq!(*answer.force(), 42);
    /// ```
    #[inline]
    pub fn suspend(self) -> Suspension<Return, Self> {
        Suspension::new(self)
    }
}

macro_rules! impl_curried_arity {
    ($first:ident $first_argument:ident $(, $parameter:ident $argument:ident)*) => {
        impl<Function, Return, $first, $($parameter),*> Curried<Function, ($first, $($parameter,)*)>
        where
            Function: Callable<($first, $($parameter,)*), Output = Return>,
        {
            /// Calls the wrapped function with every remaining argument.
            ///
            /// No memoization takes place; each call runs the function.
            #[inline]
            pub fn call(&self, $first_argument: $first, $($argument: $parameter),*) -> Return {
                Callable::invoke(&*self.function, ($first_argument, $($argument,)*))
            }

            /// Binds the first remaining parameter.
            ///
            /// Equivalent to [`Bind::<0>::bind`](Bind::bind). The result has
            /// one parameter fewer, or is a [`Suspension`] when this was the
            /// last one.
            #[inline]
            pub fn apply(&self, $first_argument: $first) -> <Self as Bind<0>>::Output
            where
                Self: Bind<0, Value = $first>,
            {
                Bind::<0>::bind(self, $first_argument)
            }

            /// Converts into a plain function that runs on every call.
            ///
            /// The argument count is part of the returned type, so calling it
            /// with the wrong number of arguments does not compile.
            #[inline]
            pub fn eager(self) -> impl Fn($first, $($parameter),*) -> Return {
                move |$first_argument: $first, $($argument: $parameter),*| {
                    Callable::invoke(&*self.function, ($first_argument, $($argument,)*))
                }
            }

            /// Converts into a type-erased boxed function.
            ///
            /// Calls go through dynamic dispatch; intended for API boundaries
            /// that need one concrete function type.
            #[inline]
            pub fn boxed(self) -> Box<dyn Fn($first, $($parameter),*) -> Return>
            where
                Self: 'static,
            {
                Box::new(move |$first_argument: $first, $($argument: $parameter),*| {
                    Callable::invoke(&*self.function, ($first_argument, $($argument,)*))
                })
            }
        }
    };
}

impl_curried_arity!(A1 a1);
impl_curried_arity!(A1 a1, A2 a2);
impl_curried_arity!(A1 a1, A2 a2, A3 a3);
impl_curried_arity!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_curried_arity!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_curried_arity!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
