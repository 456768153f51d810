//! Algebra over lazily evaluated run-length encoded bitsets.
//!
//! An RLE+ bitset describes a sparse set of non-negative integers as a
//! sequence of [`Run`]s: alternating spans of set and unset indices. The
//! operations here ([`or()`], [`and()`], [`subtract()`], [`Not`], and the scalar
//! queries) never materialize the underlying bits. They consume and produce
//! [`RunIterator`]s, so results compose without expansion until a terminal
//! consumer (`count`, `is_set`, collection into runs) forces evaluation.
//!
//! Iterators are single-pass and forward-only. Each wrapper exclusively owns
//! its upstream(s); a stream can be traversed exactly once, and abandoning a
//! partially consumed chain is always safe.

pub mod and;
pub mod not;
pub mod or;
pub mod peek;
pub mod query;
pub mod slice;

pub use and::{and, subtract};
pub use not::Not;
pub use or::{or, Union};
pub use peek::{Normalized, Peekable};
pub use query::{count, fill, indices, is_set, last_index};
pub use slice::{collect_runs, RunSliceIterator};

/// Errors surfaced by run iterators and the queries over them.
///
/// All errors are terminal for the traversal that produced them: a partially
/// consumed iterator must not be reused after one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `next_run` was called on an exhausted iterator.
    #[error("end of run sequence")]
    EndOfRuns,
    /// The popcount of the set does not fit in a `u64`.
    #[error("RLE+ count overflows u64")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;

/// A span of `len` consecutive indices that all hold `value`.
///
/// A run with `len == 0` is the internal "exhausted" sentinel; it covers no
/// index and is never yielded by a conforming iterator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Run {
    pub value: bool,
    pub len: u64,
}

impl Run {
    /// The sentinel length standing in for an unbounded trailing run.
    ///
    /// The complement of a finite set is infinite; [`Not`] represents its tail
    /// as a single run of this length rather than attempting unbounded
    /// arithmetic. Consumers must bound a complement (for example with
    /// [`and()`]) before draining it.
    pub const MAX_LEN: u64 = u64::MAX;

    #[inline(always)]
    pub fn new(value: bool, len: u64) -> Self {
        Self { value, len }
    }

    /// Whether the run covers at least one index.
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        self.len > 0
    }
}

/// A single-pass sequence of runs, ordered by increasing index, with no gaps
/// and no overlaps.
///
/// `has_next` may update internal lookahead state, but must not discard an
/// element: after it returns, `next_run` observes the same sequence it would
/// have otherwise. Calling `next_run` on an exhausted iterator fails with
/// [`Error::EndOfRuns`].
///
/// Operations produce sequences in canonical form: no two adjacent runs share
/// a value, and the empty set is zero runs rather than one all-false run.
pub trait RunIterator {
    /// Whether a further `next_run` call would succeed.
    fn has_next(&mut self) -> bool;
    /// The next run, advancing past it.
    fn next_run(&mut self) -> Result<Run>;
}

impl<I: RunIterator + ?Sized> RunIterator for &mut I {
    #[inline(always)]
    fn has_next(&mut self) -> bool {
        I::has_next(*self)
    }
    #[inline(always)]
    fn next_run(&mut self) -> Result<Run> {
        I::next_run(*self)
    }
}

impl<I: RunIterator + ?Sized> RunIterator for Box<I> {
    #[inline(always)]
    fn has_next(&mut self) -> bool {
        I::has_next(self)
    }
    #[inline(always)]
    fn next_run(&mut self) -> Result<Run> {
        I::next_run(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // A: bits {3, 4, 5, 6, 10}; B: bits {5, 6, 7, 9}.
    fn a() -> RunSliceIterator {
        RunSliceIterator::new([
            Run::new(false, 3),
            Run::new(true, 4),
            Run::new(false, 3),
            Run::new(true, 1),
        ])
    }
    fn b() -> RunSliceIterator {
        RunSliceIterator::new([
            Run::new(false, 5),
            Run::new(true, 3),
            Run::new(false, 1),
            Run::new(true, 1),
        ])
    }

    fn bits<I: RunIterator>(it: I) -> Vec<u64> {
        indices(it).unwrap()
    }

    #[test]
    fn fixtures_match_their_bit_sets() {
        assert_eq!(a(), RunSliceIterator::from_indices(&[3, 4, 5, 6, 10]));
        assert_eq!(b(), RunSliceIterator::from_indices(&[5, 6, 7, 9]));
    }

    #[test]
    fn scenario_or() {
        assert_eq!(bits(or(a(), b()).unwrap()), vec![3, 4, 5, 6, 7, 9, 10]);
    }

    #[test]
    fn scenario_and() {
        assert_eq!(bits(and(a(), b()).unwrap()), vec![5, 6]);
    }

    #[test]
    fn scenario_subtract() {
        assert_eq!(bits(subtract(a(), b()).unwrap()), vec![3, 4, 10]);
    }

    #[test]
    fn scenario_queries() {
        assert_eq!(count(a()).unwrap(), 5);
        assert_eq!(last_index(a(), true).unwrap(), 11);
        let filled = fill(a()).unwrap();
        assert_eq!(bits(filled), (0..11).collect::<Vec<_>>());
    }

    #[test]
    fn pointwise_laws() {
        // or/and/subtract agree with ||, &&, && ! at every probed index.
        for x in 0..16u64 {
            let in_a = is_set(a(), x).unwrap();
            let in_b = is_set(b(), x).unwrap();
            assert_eq!(is_set(or(a(), b()).unwrap(), x).unwrap(), in_a || in_b);
            assert_eq!(is_set(and(a(), b()).unwrap(), x).unwrap(), in_a && in_b);
            assert_eq!(
                is_set(subtract(a(), b()).unwrap(), x).unwrap(),
                in_a && !in_b
            );
        }
    }

    #[test]
    fn idempotence() {
        assert_eq!(count(or(a(), a()).unwrap()).unwrap(), count(a()).unwrap());
        assert_eq!(count(and(a(), a()).unwrap()).unwrap(), count(a()).unwrap());
        for x in 0..16u64 {
            let in_a = is_set(a(), x).unwrap();
            assert_eq!(is_set(or(a(), a()).unwrap(), x).unwrap(), in_a);
            assert_eq!(is_set(and(a(), a()).unwrap(), x).unwrap(), in_a);
        }
    }

    #[test]
    fn outputs_are_canonical() {
        for runs in [
            collect_runs(or(a(), b()).unwrap()).unwrap(),
            collect_runs(and(a(), b()).unwrap()).unwrap(),
            collect_runs(subtract(a(), b()).unwrap()).unwrap(),
        ] {
            for run in runs.iter() {
                assert!(run.is_valid());
            }
            for pair in runs.windows(2) {
                assert_ne!(pair[0].value, pair[1].value);
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn run_serde_round_trip() {
        let run = Run::new(true, 17);
        let json = serde_json::to_string(&run).unwrap();
        assert_eq!(serde_json::from_str::<Run>(&json).unwrap(), run);
    }
}
