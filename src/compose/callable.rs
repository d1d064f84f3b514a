//! The calling convention shared by every callable in this crate.
//!
//! [`Callable`] abstracts over "something that can be invoked with a tuple of
//! arguments". It is implemented for every [`Fn`] of arity 0 through 6 and
//! for the nameable wrappers produced by partial application
//! ([`Bound`](super::Bound)) and composition ([`Composed`](super::Composed)).

/// A function taking its arguments as a tuple.
///
/// # Examples
///
/// ```rust
/// use functoid::compose::Callable;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// assert_eq!(add.invoke((2, 3)), 5);
/// assert_eq!((|| "thunk").invoke(()), "thunk");
/// ```
pub trait Callable<Arguments> {
    /// The value produced by a call.
    type Output;

    /// Calls the function with the given argument tuple.
    fn invoke(&self, arguments: Arguments) -> Self::Output;
}

/// An argument tuple of statically known length.
pub trait ArgumentList {
    /// The number of arguments in the tuple.
    const ARITY: usize;
}

/// An argument tuple whose elements all have type `Argument`.
///
/// Allows building the tuple from a runtime slice, which is how
/// [`Curried::call_slice`](super::Curried::call_slice) reports an arity
/// mismatch instead of failing to compile.
pub trait UniformArguments<Argument>: ArgumentList + Sized {
    /// Clones the slice into a tuple, or returns `None` when its length is
    /// not [`ArgumentList::ARITY`].
    fn from_slice(arguments: &[Argument]) -> Option<Self>;
}

macro_rules! substitute {
    ($ignored:ident, $replacement:ty) => {
        $replacement
    };
}

macro_rules! impl_argument_tuple {
    ($arity:literal $(, $parameter:ident $argument:ident)*) => {
        impl<Function, Return, $($parameter),*> Callable<($($parameter,)*)> for Function
        where
            Function: Fn($($parameter),*) -> Return,
        {
            type Output = Return;

            #[inline]
            fn invoke(&self, ($($argument,)*): ($($parameter,)*)) -> Return {
                self($($argument),*)
            }
        }

        impl<$($parameter),*> ArgumentList for ($($parameter,)*) {
            const ARITY: usize = $arity;
        }

        impl<Argument: Clone> UniformArguments<Argument> for ($(substitute!($parameter, Argument),)*) {
            #[inline]
            fn from_slice(arguments: &[Argument]) -> Option<Self> {
                match arguments {
                    [$($argument),*] => Some(($($argument.clone(),)*)),
                    _ => None,
                }
            }
        }
    };
}

impl_argument_tuple!(0);
impl_argument_tuple!(1, A1 a1);
impl_argument_tuple!(2, A1 a1, A2 a2);
impl_argument_tuple!(3, A1 a1, A2 a2, A3 a3);
impl_argument_tuple!(4, A1 a1, A2 a2, A3 a3, A4 a4);
impl_argument_tuple!(5, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_argument_tuple!(6, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
