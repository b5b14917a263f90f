#![cfg(feature = "effect")]
//! `tracing` output of the lifted logging effects and of `bracket`.

use std::io;
use std::sync::Arc;

use effectual::effect::{EitherTKind, FromIO, IOEither, IOKind, OptionTKind};
use parking_lot::Mutex;
use rstest::rstest;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_capture<T>(body: impl FnOnce() -> T) -> (T, Captured) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let value = tracing::subscriber::with_default(subscriber, body);
    (value, captured)
}

#[rstest]
fn log_emits_nothing_until_run() {
    let ((), captured) = with_capture(|| {
        let announce = IOKind::log("service starting");
        drop(announce);
    });
    assert!(captured.contents().is_empty());

    let ((), captured) = with_capture(|| IOKind::log("service starting").run_unsafe());
    let output = captured.contents();
    assert!(output.contains("INFO"));
    assert!(output.contains("effectual"));
    assert!(output.contains("service starting"));
}

#[rstest]
fn log_error_through_either_t_is_a_success() {
    let (outcome, captured) = with_capture(|| {
        EitherTKind::<IOKind, String>::log_error("disk almost full")
            .run()
            .run_unsafe()
    });
    assert_eq!(outcome, Ok(()));
    assert!(captured.contents().contains("ERROR"));
    assert!(captured.contents().contains("disk almost full"));
}

#[rstest]
fn log_through_option_t_is_present() {
    let (outcome, captured) =
        with_capture(|| OptionTKind::<IOKind>::log("looking up").run().run_unsafe());
    assert_eq!(outcome, Some(()));
    assert!(captured.contents().contains("looking up"));
}

#[rstest]
fn combinators_never_log() {
    let (outcome, captured) = with_capture(|| {
        IOEither::<String, i32>::right(1)
            .map(|n| n + 1)
            .flat_map(|n| IOEither::left(format!("stopped at {n}")))
            .tap_error(|_| IOEither::<String, ()>::right(()))
            .or_else(|error| IOEither::<String, i32>::right(error.len() as i32))
            .run()
            .run_unsafe()
    });
    assert_eq!(outcome, Ok(12));
    assert!(captured.contents().is_empty());
}

#[rstest]
fn bracket_reports_release_override_at_debug() {
    let (outcome, captured) = with_capture(|| {
        IOEither::<String, i32>::bracket(
            IOEither::right(()),
            |_| IOEither::right(1),
            |(), _| IOEither::left("close failed".to_string()),
        )
        .run()
        .run_unsafe()
    });
    assert_eq!(outcome, Err("close failed".to_string()));
    let output = captured.contents();
    assert!(output.contains("DEBUG"));
    assert!(output.contains("release failed"));
}
