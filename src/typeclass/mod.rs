//! Capability traits and the generic engines written against them.
//!
//! Every capability is a trait implemented by a zero-sized *kind tag* (see
//! [`Kind`]). Generic code asks for the capability it needs and callers
//! choose the behaviour by choosing the tag:
//!
//! - [`Functor`]: map the payload
//! - [`Pointed`], [`Apply`], [`Applicative`]: lift values and combine independent effects
//! - [`Chain`], [`Monad`]: sequence dependent effects
//! - [`Bifunctor`]: map the failure and success sides
//! - [`SemigroupKind`], [`MonoidKind`]: choose between effects
//! - [`Compactable`], [`Filterable`]: drop or split payloads in collections
//!
//! [`ConstKind`] is the constant functor: it carries a summary value through
//! a traversal and ignores the payload.
//!
//! The value-level algebra lifted by these capabilities is [`Semigroup`] and
//! [`Monoid`], with the [`Sum`], [`Product`], [`Max`] and [`Min`] wrappers.
//!
//! ## Evaluation Discipline
//!
//! The traversal engine ([`traverse_array`], [`traverse_array_par`] and
//! their relatives) comes in two disciplines. Which one a parallel
//! traversal gets depends on the supplied tag: a kind's native `zip`, or the
//! [`Sequential`] adapter that derives `zip` from `flat_map`.
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Apply, Monad, OptionKind, Pointed};
//!
//! fn add_lifted<K: Apply>(a: K::Of<i32>, b: K::Of<i32>) -> K::Of<i32> {
//!     K::map2(a, b, |x, y| x + y)
//! }
//!
//! assert_eq!(add_lifted::<OptionKind>(Some(1), Some(2)), Some(3));
//! assert_eq!(
//!     OptionKind::traverse_array(vec![1, 2, 3], |n: i32| OptionKind::of(n * 10)),
//!     Some(vec![10, 20, 30]),
//! );
//! ```

mod alternative;
mod applicative;
mod bifunctor;
mod compactable;
mod constant;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod sequential;
pub mod traversable;
mod tuple;
mod wrappers;

pub use alternative::{MonoidKind, SemigroupKind};
pub use applicative::{Applicative, Apply, Pointed};
pub use bifunctor::{Bifunctor, ResultBifunctor};
pub use compactable::{Compactable, Filterable};
pub use constant::{Const, ConstKind};
pub use functor::Functor;
pub use higher::{IdentityKind, Kind, OptionKind, ResultKind, VecKind};
pub use monad::{Chain, Monad, bind_pure};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use sequential::Sequential;
pub use traversable::{
    sequence_array, sequence_array_par, traverse_array, traverse_array_par,
    traverse_array_with_index, traverse_array_with_index_par,
};
pub use tuple::TupleAppend;
pub use wrappers::{Bounded, Max, Min, One, Product, Sum};
