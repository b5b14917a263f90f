//! Compactable and Filterable - removing and splitting payloads.
//!
//! These capabilities belong to *collections* of payloads rather than to
//! effects, so they are implemented for [`VecKind`] and [`OptionKind`]
//! (an option is a collection of at most one element).
//!
//! - [`Compactable::compact`] drops absent values.
//! - [`Compactable::separate`] splits outcomes into failures and successes,
//!   in that order, keeping the relative order inside each side.
//! - [`Filterable`] is the same pair of operations with a function applied
//!   on the way.
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Compactable, VecKind};
//!
//! let outcomes: Vec<Result<i32, String>> =
//!     vec![Ok(1), Err("a".into()), Ok(2), Err("b".into()), Err("c".into())];
//! let (failures, successes) = VecKind::separate(outcomes);
//! assert_eq!(failures, vec!["a", "b", "c"]);
//! assert_eq!(successes, vec![1, 2]);
//! ```

use super::higher::{Kind, OptionKind, VecKind};

/// A capability for kinds whose absent or failed payloads can be removed.
pub trait Compactable: Kind {
    /// Keeps the present values.
    fn compact<A>(fa: Self::Of<Option<A>>) -> Self::Of<A>
    where
        A: Send + 'static;

    /// Splits outcomes into `(failures, successes)`.
    fn separate<A, E>(fa: Self::Of<Result<A, E>>) -> (Self::Of<E>, Self::Of<A>)
    where
        A: Send + 'static,
        E: Send + 'static;
}

/// A [`Compactable`] that can apply a function while filtering.
pub trait Filterable: Compactable {
    /// Maps every payload and keeps the present results.
    fn filter_map<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(A) -> Option<B>;

    /// Maps every payload to an outcome and splits into `(failures, successes)`.
    fn partition_map<A, B, C, F>(fa: Self::Of<A>, function: F) -> (Self::Of<B>, Self::Of<C>)
    where
        A: Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
        F: FnMut(A) -> Result<C, B>;

    /// Keeps the payloads satisfying `predicate`.
    #[inline]
    fn filter<A, P>(fa: Self::Of<A>, mut predicate: P) -> Self::Of<A>
    where
        A: Send + 'static,
        P: FnMut(&A) -> bool,
    {
        Self::filter_map(fa, move |value| predicate(&value).then_some(value))
    }

    /// Splits into `(rejected, accepted)` by `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::{Filterable, VecKind};
    ///
    /// let (odd, even) = VecKind::partition(vec![1, 2, 3, 4], |n: &i32| n % 2 == 0);
    /// assert_eq!(odd, vec![1, 3]);
    /// assert_eq!(even, vec![2, 4]);
    /// ```
    #[inline]
    fn partition<A, P>(fa: Self::Of<A>, mut predicate: P) -> (Self::Of<A>, Self::Of<A>)
    where
        A: Send + 'static,
        P: FnMut(&A) -> bool,
    {
        Self::partition_map(fa, move |value| {
            if predicate(&value) { Ok(value) } else { Err(value) }
        })
    }
}

// =============================================================================
// Vec
// =============================================================================

impl Compactable for VecKind {
    fn compact<A>(fa: Vec<Option<A>>) -> Vec<A>
    where
        A: Send + 'static,
    {
        fa.into_iter().flatten().collect()
    }

    fn separate<A, E>(fa: Vec<Result<A, E>>) -> (Vec<E>, Vec<A>)
    where
        A: Send + 'static,
        E: Send + 'static,
    {
        Self::partition_map(fa, |outcome| outcome)
    }
}

impl Filterable for VecKind {
    fn filter_map<A, B, F>(fa: Vec<A>, function: F) -> Vec<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(A) -> Option<B>,
    {
        fa.into_iter().filter_map(function).collect()
    }

    fn partition_map<A, B, C, F>(fa: Vec<A>, mut function: F) -> (Vec<B>, Vec<C>)
    where
        A: Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
        F: FnMut(A) -> Result<C, B>,
    {
        let mut failures = Vec::new();
        let mut successes = Vec::new();
        for value in fa {
            match function(value) {
                Ok(success) => successes.push(success),
                Err(failure) => failures.push(failure),
            }
        }
        (failures, successes)
    }
}

// =============================================================================
// Option
// =============================================================================

impl Compactable for OptionKind {
    #[inline]
    fn compact<A>(fa: Option<Option<A>>) -> Option<A>
    where
        A: Send + 'static,
    {
        fa.flatten()
    }

    fn separate<A, E>(fa: Option<Result<A, E>>) -> (Option<E>, Option<A>)
    where
        A: Send + 'static,
        E: Send + 'static,
    {
        match fa {
            Some(Ok(success)) => (None, Some(success)),
            Some(Err(failure)) => (Some(failure), None),
            None => (None, None),
        }
    }
}

impl Filterable for OptionKind {
    #[inline]
    fn filter_map<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(A) -> Option<B>,
    {
        fa.and_then(function)
    }

    fn partition_map<A, B, C, F>(fa: Option<A>, function: F) -> (Option<B>, Option<C>)
    where
        A: Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
        F: FnMut(A) -> Result<C, B>,
    {
        Self::separate(fa.map(function))
    }
}
