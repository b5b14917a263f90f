//! Writer - a result paired with accumulated output.
//!
//! `Writer<W, A>` is the tuple `(A, W)`. Sequencing combines the outputs of
//! each step with [`Semigroup::combine`], left output first. Unlike the other
//! effects in this module a `Writer` is already evaluated: it is plain data.
//!
//! # Laws
//!
//! - Tell Combination: `tell(w1).then(tell(w2)) == tell(w1.combine(w2))`
//! - Censor Identity: `m.censor(|w| w) == m`
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::Writer;
//!
//! let program = Writer::tell(vec!["start".to_string()])
//!     .then(Writer::new(21, vec!["computed".to_string()]))
//!     .fmap(|n| n * 2);
//!
//! assert_eq!(program.run(), (42, vec!["start".to_string(), "computed".to_string()]));
//! ```

use std::marker::PhantomData;

use crate::typeclass::{Applicative, Apply, Chain, Functor, Kind, Monoid, Pointed, Semigroup};

/// A result of type `A` with output of type `W`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Writer<W, A> {
    result: A,
    output: W,
}

impl<W, A> Writer<W, A> {
    /// Pairs `result` with `output`.
    #[inline]
    pub const fn new(result: A, output: W) -> Self {
        Self { result, output }
    }

    /// The result and the output.
    #[inline]
    pub fn run(self) -> (A, W) {
        (self.result, self.output)
    }

    /// The result alone.
    #[inline]
    pub fn eval(self) -> A {
        self.result
    }

    /// The output alone.
    #[inline]
    pub fn exec(self) -> W {
        self.output
    }

    /// Transforms the result, keeping the output.
    pub fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new(function(self.result), self.output)
    }

    /// Exposes the output alongside the result.
    pub fn listen(self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        let captured = self.output.clone();
        Writer::new((self.result, captured), self.output)
    }

    /// Rewrites the output.
    pub fn censor<F>(self, modifier: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self::new(self.result, modifier(self.output))
    }
}

impl<W: Semigroup, A> Writer<W, A> {
    /// Continues with the writer built from the result, appending its output.
    pub fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let next = function(self.result);
        Writer::new(next.result, self.output.combine(next.output))
    }

    /// Discards the result and continues with `next`.
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B> {
        self.flat_map(move |_| next)
    }

    /// Combines both results with `function` and both outputs in order.
    pub fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Writer::new(
            function(self.result, other.result),
            self.output.combine(other.output),
        )
    }
}

impl<W: Monoid, A> Writer<W, A> {
    /// `value` with empty output.
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::new(value, W::empty())
    }
}

impl<W> Writer<W, ()> {
    /// Appends `output` and yields `()`.
    #[inline]
    pub const fn tell(output: W) -> Self {
        Self::new((), output)
    }
}

// =============================================================================
// Kind Tag
// =============================================================================

/// Kind tag for `Writer<W, _>`.
pub struct WriterKind<W>(PhantomData<fn() -> W>);

impl<W: Send + 'static> Kind for WriterKind<W> {
    type Of<A: Send + 'static> = Writer<W, A>;
}

impl<W: Send + 'static> Functor for WriterKind<W> {
    #[inline]
    fn map<A, B, F>(fa: Writer<W, A>, function: F) -> Writer<W, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.fmap(function)
    }
}

impl<W: Monoid + Send + 'static> Pointed for WriterKind<W> {
    #[inline]
    fn of<A>(value: A) -> Writer<W, A>
    where
        A: Send + 'static,
    {
        Writer::pure(value)
    }
}

impl<W: Semigroup + Send + 'static> Apply for WriterKind<W> {
    #[inline]
    fn zip<A, B>(fa: Writer<W, A>, fb: Writer<W, B>) -> Writer<W, (A, B)>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        fa.map2(fb, |a, b| (a, b))
    }
}

impl<W: Monoid + Send + 'static> Applicative for WriterKind<W> {
    fn all<A>(effects: Vec<Writer<W, A>>) -> Writer<W, Vec<A>>
    where
        A: Send + 'static,
    {
        let (results, outputs): (Vec<A>, Vec<W>) = effects.into_iter().map(Writer::run).unzip();
        Writer::new(results, W::combine_all(outputs))
    }
}

impl<W: Monoid + Send + 'static> Chain for WriterKind<W> {
    #[inline]
    fn flat_map<A, B, F>(fa: Writer<W, A>, function: F) -> Writer<W, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Writer<W, B> + Send + 'static,
    {
        fa.flat_map(function)
    }

    /// Keeps the output of every step run, including the one that failed.
    fn try_traverse_in_order<A, B, X, F>(items: Vec<A>, mut function: F) -> <WriterKind<W> as Kind>::Of<Result<Vec<B>, X>>
    where
        A: Send + 'static,
        B: Send + 'static,
        X: Send + 'static,
        F: FnMut(usize, A) -> <WriterKind<W> as Kind>::Of<Result<B, X>> + Send + 'static,
    {
        let mut buffer = Vec::with_capacity(items.len());
        let mut output = W::empty();
        for (index, item) in items.into_iter().enumerate() {
            let (outcome, step_output) = function(index, item).run();
            output = output.combine(step_output);
            match outcome {
                Ok(value) => buffer.push(value),
                Err(error) => return Writer::new(Err(error), output),
            }
        }
        Writer::new(Ok(buffer), output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Monad, Sum};
    use rstest::rstest;

    #[rstest]
    fn tell_outputs_combine_in_order() {
        let combined = Writer::tell("ab".to_string()).then(Writer::tell("cd".to_string()));
        assert_eq!(combined, Writer::tell("abcd".to_string()));
    }

    #[rstest]
    fn listen_exposes_output() {
        let listened = Writer::new(1, vec!["log"]).listen();
        assert_eq!(listened.run(), ((1, vec!["log"]), vec!["log"]));
    }

    #[rstest]
    fn censor_rewrites_output_only() {
        let censored = Writer::new(7, "secret".to_string()).censor(|_| "***".to_string());
        assert_eq!(censored.run(), (7, "***".to_string()));
    }

    #[rstest]
    fn pure_has_empty_output() {
        let writer: Writer<Vec<i32>, &str> = Writer::pure("x");
        assert_eq!(writer.exec(), Vec::<i32>::new());
    }

    #[rstest]
    fn traversal_accumulates_sum() {
        let total = WriterKind::<Sum<i32>>::traverse_array(vec![1, 2, 3, 4], |n: i32| {
            Writer::new(n * 2, Sum::new(n))
        });
        assert_eq!(total.run(), (vec![2, 4, 6, 8], Sum::new(10)));
    }

    #[rstest]
    fn in_order_loop_keeps_output_of_failed_step() {
        let traversal = WriterKind::<Vec<i32>>::try_traverse_in_order(vec![1, 2, 3], |_, n: i32| {
            Writer::new(if n < 2 { Ok(n) } else { Err("stop") }, vec![n])
        });
        assert_eq!(traversal.run(), (Err("stop"), vec![1, 2]));
    }

    #[rstest]
    fn long_traversal_sums_every_output() {
        let items: Vec<i64> = (1..=100_000).collect();
        let total = WriterKind::<Sum<i64>>::traverse_array(items, |n: i64| Writer::new((), Sum::new(n)));
        assert_eq!(total.exec(), Sum::new(5_000_050_000));
    }
}
