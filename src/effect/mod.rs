//! Effect representations and the transformers built on them.
//!
//! Every value in this module is a *description* of a computation; nothing
//! runs until the caller runs it (`run_unsafe`, `.await`, `run(environment)`
//! or `run(state)`). All descriptions are one-shot.
//!
//! # Base Effects
//!
//! - [`IO`] ([`IOKind`]): a deferred synchronous computation
//! - [`AsyncIO`] ([`AsyncKind`]): a deferred asynchronous computation (`async` feature)
//! - [`Reader`] / [`ReaderT`] ([`ReaderTKind`]): reads a shared environment
//! - [`State`] ([`StateKind`]): threads a state value
//! - [`Writer`] ([`WriterKind`]): accumulates output
//!
//! # Transformers
//!
//! - [`EitherT`] ([`EitherTKind`]): adds a failure channel to any kind
//! - [`OptionT`] ([`OptionTKind`]): adds absence to any kind
//!
//! [`Validated`] is a second kind tag for `EitherT` whose `zip` merges the
//! failures of both sides instead of keeping the first.
//!
//! The common stacks have names, such as [`IOEither`] and `TaskEither`.
//!
//! # Lifting
//!
//! [`FromIO`] and `FromTask` embed base effects into any kind that can run
//! them, including the transformers.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::{IOEither, IO};
//!
//! let program: IOEither<String, i32> = IOEither::right_kind(IO::new(|| 20))
//!     .flat_map(|n| if n > 10 { IOEither::right(n * 2) } else { IOEither::left("small".to_string()) })
//!     .tap_error(|error| IOEither::right_kind(IO::print_line(format!("failed: {error}"))));
//!
//! assert_eq!(program.run().run_unsafe(), Ok(40));
//! ```

mod aliases;
mod either_t;
mod error;
mod io;
mod lift;
mod option_t;
mod reader;
mod state;
mod validated;
mod writer;

#[cfg(feature = "async")]
mod async_io;

pub use aliases::{IOEither, IOEitherKind, IOOption, IOOptionKind};
pub use either_t::{EitherT, EitherTBifunctor, EitherTKind, Partitioned};
pub use error::TimeoutError;
pub use io::{IO, IOKind};
pub use lift::FromIO;
pub use option_t::{OptionT, OptionTKind};
pub use reader::{Reader, ReaderT, ReaderTKind};
pub use state::{State, StateKind};
pub use validated::Validated;
pub use writer::{Writer, WriterKind};

#[cfg(feature = "async")]
pub use aliases::{
    ReaderTask, ReaderTaskEither, ReaderTaskEitherKind, ReaderTaskKind, TaskEither, TaskEitherKind,
    TaskOption, TaskOptionKind,
};
#[cfg(feature = "async")]
pub use async_io::{AsyncIO, AsyncKind};
#[cfg(feature = "async")]
pub use lift::FromTask;
