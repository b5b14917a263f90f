//! Higher-Kinded Type emulation through kind tags.
//!
//! Rust cannot abstract over a type constructor such as `AsyncIO<_>` or
//! `Option<_>` directly. This module provides the foundation used by every
//! capability trait in the crate: a zero-sized *tag* type stands in for the
//! type constructor, and a Generic Associated Type maps the tag back to the
//! concrete effect.
//!
//! ```text
//! OptionKind::Of<i32>          == Option<i32>
//! ResultKind<String>::Of<i32>  == Result<i32, String>
//! AsyncKind::Of<i32>           == AsyncIO<i32>
//! ```
//!
//! Generic combinators are written once against the tag (`K: Monad`) and are
//! instantiated per concrete effect by naming its tag. The set of tags is
//! closed and known at compile time; adding a new effect type means adding a
//! new tag and its capability impls.
//!
//! # Example
//!
//! ```rust
//! use effectual::typeclass::{Kind, OptionKind};
//!
//! fn wrap<K: Kind>(value: K::Of<i32>) -> K::Of<i32> {
//!     value
//! }
//!
//! assert_eq!(wrap::<OptionKind>(Some(1)), Some(1));
//! ```

use std::marker::PhantomData;

/// A tag standing in for a type constructor `F<_>`.
///
/// `Self::Of<A>` is the constructor applied to `A`. Every payload and every
/// applied type is `Send + 'static` so the same tag can be used by both
/// synchronous and asynchronous effects.
///
/// # Laws
///
/// Tags carry no data. Two values of the same tag type are indistinguishable,
/// and all behaviour lives in the associated functions of the capability
/// traits implemented for the tag.
pub trait Kind: 'static {
    /// The type constructor applied to `A`.
    type Of<A: Send + 'static>: Send + 'static;
}

// =============================================================================
// Standard Library Type Tags
// =============================================================================

/// Tag for the identity constructor: `IdentityKind::Of<A> == A`.
///
/// Used to recover plain (non-transformed) versions of transformers, for
/// example `Reader<R, A>` is `ReaderT<R, IdentityKind, A>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityKind;

impl Kind for IdentityKind {
    type Of<A: Send + 'static> = A;
}

/// Tag for `Option<_>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionKind;

impl Kind for OptionKind {
    type Of<A: Send + 'static> = Option<A>;
}

/// Tag for `Result<_, E>` with a fixed error type.
pub struct ResultKind<E>(PhantomData<fn() -> E>);

impl<E: Send + 'static> Kind for ResultKind<E> {
    type Of<A: Send + 'static> = Result<A, E>;
}

/// Tag for `Vec<_>`.
///
/// `VecKind` is a collection, not an effect: it implements `Compactable`
/// and `Filterable` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VecKind;

impl Kind for VecKind {
    type Of<A: Send + 'static> = Vec<A>;
}
