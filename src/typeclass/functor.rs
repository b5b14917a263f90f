//! Functor type class - mapping over the value carried by an effect.
//!
//! `Functor` is the weakest capability in the hierarchy. It lets a generic
//! combinator transform the payload of `K::Of<A>` without knowing what `K`
//! is, and without running or suspending anything: `map` never introduces a
//! suspension point of its own.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! K::map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! K::map(K::map(fa, f), g) == K::map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Functor, OptionKind};
//!
//! let transformed = OptionKind::map(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let absent = OptionKind::map(None::<i32>, |n| n.to_string());
//! assert_eq!(absent, None);
//! ```

use super::higher::{IdentityKind, Kind, OptionKind, ResultKind};

/// A capability for kinds whose payload can be mapped.
///
/// # Laws
///
/// ```text
/// K::map(fa, |x| x) == fa
/// K::map(K::map(fa, f), g) == K::map(fa, |x| g(f(x)))
/// ```
pub trait Functor: Kind {
    /// Applies `function` to the payload of `fa`.
    ///
    /// For failure-bearing kinds the function is only invoked on the success
    /// path; a failure passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::{Functor, OptionKind};
    ///
    /// assert_eq!(OptionKind::map(Some(5), |n| n * 2), Some(10));
    /// ```
    fn map<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static;

    /// Replaces the payload with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::{Functor, OptionKind};
    ///
    /// assert_eq!(OptionKind::replace(Some(5), "replaced"), Some("replaced"));
    /// assert_eq!(OptionKind::replace(None::<i32>, "replaced"), None);
    /// ```
    #[inline]
    fn replace<A, B>(fa: Self::Of<A>, value: B) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        Self::map(fa, move |_| value)
    }

    /// Discards the payload, keeping only the effect.
    #[inline]
    fn void<A>(fa: Self::Of<A>) -> Self::Of<()>
    where
        A: Send + 'static,
    {
        Self::replace(fa, ())
    }

    /// Applies a function carried by the effect to a plain argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::{Functor, OptionKind};
    ///
    /// let double = Some(|n: i32| n * 2);
    /// assert_eq!(OptionKind::flap(double, 21), Some(42));
    /// ```
    #[inline]
    fn flap<A, B, F>(fab: Self::Of<F>, argument: A) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Self::map(fab, move |function| function(argument))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Functor for IdentityKind {
    #[inline]
    fn map<A, B, F>(fa: A, function: F) -> B
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        function(fa)
    }
}

impl Functor for OptionKind {
    #[inline]
    fn map<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.map(function)
    }
}

impl<E: Send + 'static> Functor for ResultKind<E> {
    #[inline]
    fn map<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.map(function)
    }
}
