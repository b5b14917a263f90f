//! Error types raised by the effect layer itself.
//!
//! Domain failures travel as values inside `EitherT` and `OptionT`; the
//! types here describe failures of the machinery around them.

use std::time::Duration;

use thiserror::Error;

/// An asynchronous computation did not complete within its time limit.
///
/// # Examples
///
/// ```rust
/// use effectual::effect::TimeoutError;
/// use std::time::Duration;
///
/// let error = TimeoutError { duration: Duration::from_millis(250) };
/// assert_eq!(error.to_string(), "operation timed out after 250ms");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("operation timed out after {duration:?}")]
pub struct TimeoutError {
    /// The limit that was exceeded.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_duration() {
        let error = TimeoutError {
            duration: Duration::from_secs(5),
        };
        assert_eq!(format!("{error}"), "operation timed out after 5s");
    }

    #[test]
    fn is_a_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&TimeoutError {
            duration: Duration::ZERO,
        });
    }
}
