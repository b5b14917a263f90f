//! Bifunctor type class - mapping over the failure and the success side.
//!
//! A bifunctor tag stands in for a constructor with two parameters,
//! `F<E, A>`, where `E` is the failure side and `A` the success side. This
//! matches `Result<A, E>` and the failure-channel transformer, where
//! `map_left` rewrites the failure and `map_right` is the ordinary `map`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! K::map_both(fea, |e| e, |a| a) == fea
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! K::map_both(K::map_both(fea, f1, g1), f2, g2) == K::map_both(fea, |e| f2(f1(e)), |a| g2(g1(a)))
//! ```
//!
//! ## Consistency Law
//!
//! ```text
//! K::map_both(fea, f, g) == K::map_right(K::map_left(fea, f), g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Bifunctor, ResultBifunctor};
//!
//! let failed: Result<i32, &str> = Err("bad");
//! assert_eq!(ResultBifunctor::map_left(failed, str::len), Err(3));
//!
//! let succeeded: Result<i32, &str> = Ok(4);
//! assert_eq!(ResultBifunctor::map_both(succeeded, str::len, |n| n * 2), Ok(8));
//! ```

/// A tag standing in for a constructor `F<E, A>` with a failure side `E`
/// and a success side `A`.
pub trait Bifunctor: 'static {
    /// The constructor applied to a failure type and a success type.
    type Of<E: Send + 'static, A: Send + 'static>: Send + 'static;

    /// Maps the failure with `on_left` or the success with `on_right`.
    fn map_both<E, A, G, B, L, R>(fea: Self::Of<E, A>, on_left: L, on_right: R) -> Self::Of<G, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        G: Send + 'static,
        B: Send + 'static,
        L: FnOnce(E) -> G + Send + 'static,
        R: FnOnce(A) -> B + Send + 'static;

    /// Maps the failure side only.
    #[inline]
    fn map_left<E, A, G, L>(fea: Self::Of<E, A>, on_left: L) -> Self::Of<G, A>
    where
        E: Send + 'static,
        A: Send + 'static,
        G: Send + 'static,
        L: FnOnce(E) -> G + Send + 'static,
    {
        Self::map_both(fea, on_left, |value| value)
    }

    /// Maps the success side only.
    #[inline]
    fn map_right<E, A, B, R>(fea: Self::Of<E, A>, on_right: R) -> Self::Of<E, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        R: FnOnce(A) -> B + Send + 'static,
    {
        Self::map_both(fea, |error| error, on_right)
    }
}

/// Bifunctor tag for `Result<A, E>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultBifunctor;

impl Bifunctor for ResultBifunctor {
    type Of<E: Send + 'static, A: Send + 'static> = Result<A, E>;

    #[inline]
    fn map_both<E, A, G, B, L, R>(fea: Result<A, E>, on_left: L, on_right: R) -> Result<B, G>
    where
        E: Send + 'static,
        A: Send + 'static,
        G: Send + 'static,
        B: Send + 'static,
        L: FnOnce(E) -> G + Send + 'static,
        R: FnOnce(A) -> B + Send + 'static,
    {
        match fea {
            Ok(value) => Ok(on_right(value)),
            Err(error) => Err(on_left(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn map_both_is_map_left_then_map_right(value in any::<i32>(), is_ok in any::<bool>()) {
            let input: Result<i32, i32> = if is_ok { Ok(value) } else { Err(value) };
            let on_left = |e: i32| i64::from(e) - 1;
            let on_right = |a: i32| a.to_string();
            let both = ResultBifunctor::map_both(input, on_left, on_right);
            let staged = ResultBifunctor::map_right(ResultBifunctor::map_left(input, on_left), on_right);
            prop_assert_eq!(both, staged);
        }

        #[test]
        fn identity_maps_change_nothing(value in any::<u8>(), is_ok in any::<bool>()) {
            let input: Result<u8, u8> = if is_ok { Ok(value) } else { Err(value) };
            prop_assert_eq!(ResultBifunctor::map_both(input, |e| e, |a| a), input);
        }
    }
}
