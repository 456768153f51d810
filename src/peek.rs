//! One-element lookahead, and the trailing-run normalizer built on it.
//!
//! Runs are single-pass, but normalization needs to know whether the run it
//! is looking at is the last one. [`Peekable`] adds the minimal mechanism: a
//! one-slot stash that replays the most recently fetched outcome before the
//! upstream is touched again. No general replay buffer is ever needed.

use crate::{Result, Run, RunIterator};

/// A [`RunIterator`] with single-element pushback.
pub struct Peekable<I> {
    inner: I,
    stash: Option<Result<Run>>,
}

impl<I: RunIterator> Peekable<I> {
    pub fn new(inner: I) -> Self {
        Self { inner, stash: None }
    }

    /// The next outcome, without consuming it.
    pub fn peek(&mut self) -> Result<Run> {
        let out = self.next_run();
        self.put(out.clone());
        out
    }

    /// Stores an outcome to be replayed by the next `next_run` call.
    pub fn put(&mut self, out: Result<Run>) {
        self.stash = Some(out);
    }
}

impl<I: RunIterator> RunIterator for Peekable<I> {
    fn has_next(&mut self) -> bool {
        self.stash.is_some() || self.inner.has_next()
    }
    fn next_run(&mut self) -> Result<Run> {
        match self.stash.take() {
            Some(out) => out,
            None => self.inner.next_run(),
        }
    }
}

/// Suppresses a dangling trailing "unset" run.
///
/// A set has unbounded trailing zeros by convention, so a final run of zeros
/// with explicit length carries no information; some encoders emit one
/// anyway. This wrapper reports exhaustion one element early in that case,
/// leaving every other sequence untouched.
pub struct Normalized<I> {
    inner: Peekable<I>,
}

impl<I: RunIterator> Normalized<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner: Peekable::new(inner),
        }
    }
}

impl<I: RunIterator> RunIterator for Normalized<I> {
    fn has_next(&mut self) -> bool {
        if !self.inner.has_next() {
            return false;
        }
        let cur = self.inner.next_run();
        let not_last = self.inner.has_next();
        let tail_set = match &cur {
            Ok(run) => run.value,
            // Report the run present so the error surfaces from `next_run`
            // rather than being swallowed here.
            Err(_) => true,
        };
        self.inner.put(cur);
        not_last || tail_set
    }
    fn next_run(&mut self) -> Result<Run> {
        self.inner.next_run()
    }
}
