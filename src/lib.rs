//! # effectual
//!
//! An effect-composition core for Rust: capability type classes, concrete
//! effect representations, and the transformers and engines written once
//! against those capabilities.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Apply, Applicative, Chain, Monad, Bifunctor,
//!   SemigroupKind/MonoidKind, Compactable/Filterable, Semigroup/Monoid
//! - **Traversal**: `traverse_array` and friends, in a sequential and a
//!   parallel discipline
//! - **Effects**: IO, AsyncIO, Reader, State, Writer
//! - **Transformers**: EitherT (failure channel, with `bracket`) and OptionT
//!
//! ## Feature Flags
//!
//! - `typeclass`: capability traits and the traversal engine
//! - `effect`: effect types and transformers (implies `typeclass`)
//! - `async`: `AsyncIO` and the `Task*` stacks (implies `effect`)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use effectual::prelude::*;
//!
//! let checked: IOEither<String, Vec<i32>> = IOEitherKind::traverse_array(vec![1, 2, 3], |n: i32| {
//!     if n > 0 { IOEither::right(n * 10) } else { IOEither::left(format!("{n} is not positive")) }
//! });
//! assert_eq!(checked.run().run_unsafe(), Ok(vec![10, 20, 30]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use effectual::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
