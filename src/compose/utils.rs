//! Helper combinators used alongside curried callables.
//!
//! - [`identity`]: The unit of composition (I combinator)
//! - [`fix`]: Ties the knot for closures that need to call themselves
//! - [`Placeholder`] / [`__`]: The hole marker understood by [`partial!`](crate::partial)

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose(curry(identity), f)` behaves like `f`
/// - `compose(f, curry(identity))` behaves like `f`
///
/// # Examples
///
/// ```
/// use functoid::compose::{compose, curry, identity};
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose(curry(identity), curry(double));
/// assert_eq!(composed.call(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Builds a recursive function from a closure that receives itself.
///
/// `function` is called with a handle to the resulting function and the
/// current argument. Calling the handle recurses.
///
/// # Examples
///
/// ```
/// use functoid::compose::fix;
///
/// let factorial = fix(|recurse: &dyn Fn(u64) -> u64, n: u64| {
///     if n <= 1 { 1 } else { n * recurse(n - 1) }
/// });
/// assert_eq!(factorial(10), 3_628_800);
/// ```
pub fn fix<Argument, Return, Function>(function: Function) -> impl Fn(Argument) -> Return
where
    Function: Fn(&dyn Fn(Argument) -> Return, Argument) -> Return,
{
    fn unroll<Argument, Return, Function>(function: &Function, argument: Argument) -> Return
    where
        Function: Fn(&dyn Fn(Argument) -> Return, Argument) -> Return,
    {
        function(&|next| unroll(function, next), argument)
    }

    move |argument| unroll(&function, argument)
}

/// Marker for an open argument slot in partial application.
///
/// The [`partial!`](crate::partial) macro matches `__` as a literal token and
/// leaves that parameter for a later call. Each hole widens the slot at which
/// the next real argument is bound by [`Placeholder::width`].
///
/// # Examples
///
/// ```
/// use functoid::{compose::curry, partial};
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let minus_ten = partial!(curry(subtract), __, 10);
/// assert_eq!(minus_ten.apply(3).force(), &-7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Placeholder;

impl Placeholder {
    /// Number of argument slots a placeholder keeps open.
    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        1
    }
}

/// The placeholder constant.
///
/// Write `__` directly inside [`partial!`](crate::partial); the macro matches
/// it as a literal token, so importing it is not required.
///
/// Note: This is named `__` (double underscore) because Rust's `macro_rules!`
/// cannot match a single underscore `_` as a literal token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;
