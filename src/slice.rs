//! A materialized run sequence with a read cursor.
//!
//! This is the leaf iterator of the algebra: test fixtures start from one,
//! and [`and()`](crate::and()) materializes its output into one. Most RLE+ sets
//! in the wild are a handful of runs, so the storage is a `SmallVec` that
//! keeps short sequences inline.

use smallvec::SmallVec;

use crate::{Error, Result, Run, RunIterator};

/// Inline capacity for materialized run sequences.
pub type Runs = SmallVec<[Run; 4]>;

/// A finite [`RunIterator`] backed by an ordered sequence of runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSliceIterator {
    runs: Runs,
    cursor: usize,
}

impl RunSliceIterator {
    /// An iterator over the provided runs, in order.
    pub fn new(runs: impl IntoIterator<Item = Run>) -> Self {
        Self {
            runs: runs.into_iter().collect(),
            cursor: 0,
        }
    }

    /// The canonical empty set: zero runs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the run sequence of the set containing exactly `indices`,
    /// which must be strictly increasing.
    pub fn from_indices(indices: &[u64]) -> Self {
        let mut runs = Runs::new();
        let mut next = 0u64;
        for &index in indices {
            assert!(
                index >= next,
                "indices must be strictly increasing: {} after {}",
                index,
                next,
            );
            if index > next {
                runs.push(Run::new(false, index - next));
                runs.push(Run::new(true, 1));
            } else {
                match runs.last_mut() {
                    Some(last) if last.value => last.len += 1,
                    _ => runs.push(Run::new(true, 1)),
                }
            }
            next = index + 1;
        }
        Self { runs, cursor: 0 }
    }

    /// The runs not yet consumed.
    pub fn remaining(&self) -> &[Run] {
        &self.runs[self.cursor..]
    }
}

impl From<Runs> for RunSliceIterator {
    fn from(runs: Runs) -> Self {
        Self { runs, cursor: 0 }
    }
}

impl RunIterator for RunSliceIterator {
    #[inline(always)]
    fn has_next(&mut self) -> bool {
        self.cursor < self.runs.len()
    }
    fn next_run(&mut self) -> Result<Run> {
        let run = self.runs.get(self.cursor).ok_or(Error::EndOfRuns)?;
        self.cursor += 1;
        Ok(*run)
    }
}

/// Drains a finite iterator into its run sequence.
///
/// This is the terminal collector of the algebra; do not call it on an
/// unbounded complement.
pub fn collect_runs<I: RunIterator>(mut it: I) -> Result<Runs> {
    let mut runs = Runs::new();
    while it.has_next() {
        runs.push(it.next_run()?);
    }
    Ok(runs)
}
