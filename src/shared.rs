//! Ownership primitives selected by the `sync` feature.
//!
//! Curried callables, suspensions and lazy list nodes share their contents
//! through [`ReferenceCounter`]. Without the `sync` feature this is
//! [`std::rc::Rc`] and nothing in the crate is `Send` or `Sync`; with it,
//! [`std::sync::Arc`] is used and every stored closure must be [`Shareable`].

#[cfg(feature = "sync")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "sync"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Marker for values that may be stored inside shared structures.
///
/// With the `sync` feature enabled this is `Send + Sync`; otherwise every
/// type implements it. Public signatures stay identical in both builds.
#[cfg(feature = "sync")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "sync")]
impl<T: ?Sized + Send + Sync> Shareable for T {}

/// Marker for values that may be stored inside shared structures.
///
/// With the `sync` feature enabled this is `Send + Sync`; otherwise every
/// type implements it. Public signatures stay identical in both builds.
#[cfg(not(feature = "sync"))]
pub trait Shareable {}

#[cfg(not(feature = "sync"))]
impl<T: ?Sized> Shareable for T {}
