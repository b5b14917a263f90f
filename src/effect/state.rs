//! State - computations that thread a value through each step.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`. Composition passes the
//! state produced by one step to the next, so sequencing is always left to
//! right; [`StateKind`]'s `zip` is therefore sequential too.
//!
//! # Laws
//!
//! - Get-Put: `State::get().flat_map(State::put)` leaves the state unchanged
//! - Put-Get: `State::put(s).then(State::get())` yields `s`
//! - Put-Put: `State::put(s1).then(State::put(s2)) == State::put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::State;
//!
//! let counter = State::modify(|n: i32| n + 1)
//!     .then(State::modify(|n: i32| n * 10))
//!     .then(State::gets(|n: i32| format!("count={n}")));
//!
//! assert_eq!(counter.run(1), ("count=20".to_string(), 20));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::{Applicative, Apply, Chain, Functor, Kind, Pointed};

/// A state transition `S -> (A, S)`.
pub struct State<S, A>
where
    S: Send + 'static,
    A: Send + 'static,
{
    transition: Box<dyn FnOnce(S) -> (A, S) + Send>,
}

impl<S, A> State<S, A>
where
    S: Send + 'static,
    A: Send + 'static,
{
    /// Wraps `transition` without calling it.
    pub fn new<F>(transition: F) -> Self
    where
        F: FnOnce(S) -> (A, S) + Send + 'static,
    {
        Self {
            transition: Box::new(transition),
        }
    }

    /// Yields `value` and leaves the state unchanged.
    pub fn pure(value: A) -> Self {
        Self::new(move |state| (value, state))
    }

    /// Runs from `initial_state`, returning the result and the final state.
    pub fn run(self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Runs from `initial_state` and keeps only the result.
    pub fn eval(self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs from `initial_state` and keeps only the final state.
    pub fn exec(self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Yields a projection of the current state.
    pub fn gets<F>(projection: F) -> Self
    where
        S: Clone,
        F: FnOnce(S) -> A + Send + 'static,
    {
        Self::new(move |state: S| (projection(state.clone()), state))
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        State::new(move |state| {
            let (value, next) = self.run(state);
            (function(value), next)
        })
    }

    /// Runs this step, then the step built from its result.
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> State<S, B> + Send + 'static,
    {
        State::new(move |state| {
            let (value, next) = self.run(state);
            function(value).run(next)
        })
    }

    /// Runs this step, discards its result and runs `next`.
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: Send + 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Runs both steps left to right and combines their results.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        B: Send + 'static,
        C: Send + 'static,
        F: FnOnce(A, B) -> C + Send + 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }
}

impl<S: Clone + Send + 'static> State<S, S> {
    /// Yields the current state.
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S: Send + 'static> State<S, ()> {
    /// Replaces the state.
    pub fn put(new_state: S) -> Self {
        Self::new(move |_| ((), new_state))
    }

    /// Transforms the state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: FnOnce(S) -> S + Send + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> fmt::Debug for State<S, A>
where
    S: Send + 'static,
    A: Send + 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("State(<transition>)")
    }
}

// =============================================================================
// Kind Tag
// =============================================================================

/// Kind tag for `State<S, _>`.
pub struct StateKind<S>(PhantomData<fn() -> S>);

impl<S: Send + 'static> Kind for StateKind<S> {
    type Of<A: Send + 'static> = State<S, A>;
}

impl<S: Send + 'static> Functor for StateKind<S> {
    #[inline]
    fn map<A, B, F>(fa: State<S, A>, function: F) -> State<S, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.fmap(function)
    }
}

impl<S: Send + 'static> Pointed for StateKind<S> {
    #[inline]
    fn of<A>(value: A) -> State<S, A>
    where
        A: Send + 'static,
    {
        State::pure(value)
    }
}

impl<S: Send + 'static> Apply for StateKind<S> {
    #[inline]
    fn zip<A, B>(fa: State<S, A>, fb: State<S, B>) -> State<S, (A, B)>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        fa.map2(fb, |a, b| (a, b))
    }
}

impl<S: Send + 'static> Applicative for StateKind<S> {
    fn all<A>(effects: Vec<State<S, A>>) -> State<S, Vec<A>>
    where
        A: Send + 'static,
    {
        State::new(move |initial| {
            let mut results = Vec::with_capacity(effects.len());
            let state = effects.into_iter().fold(initial, |state, step| {
                let (value, next) = step.run(state);
                results.push(value);
                next
            });
            (results, state)
        })
    }
}

impl<S: Send + 'static> Chain for StateKind<S> {
    #[inline]
    fn flat_map<A, B, F>(fa: State<S, A>, function: F) -> State<S, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> State<S, B> + Send + 'static,
    {
        fa.flat_map(function)
    }

    fn try_traverse_in_order<A, B, X, F>(items: Vec<A>, mut function: F) -> <StateKind<S> as Kind>::Of<Result<Vec<B>, X>>
    where
        A: Send + 'static,
        B: Send + 'static,
        X: Send + 'static,
        F: FnMut(usize, A) -> <StateKind<S> as Kind>::Of<Result<B, X>> + Send + 'static,
    {
        State::new(move |initial| {
            let mut buffer = Vec::with_capacity(items.len());
            let mut state = initial;
            for (index, item) in items.into_iter().enumerate() {
                let (outcome, next) = function(index, item).run(state);
                state = next;
                match outcome {
                    Ok(value) => buffer.push(value),
                    Err(error) => return (Err(error), state),
                }
            }
            (Ok(buffer), state)
        })
    }
}
