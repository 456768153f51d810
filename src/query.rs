//! Scalar queries: the terminal consumers that force evaluation.

use crate::{Error, Result, Run, RunIterator, RunSliceIterator};

/// The number of set indices, i.e. the popcount of the set.
///
/// Fails with [`Error::Overflow`] if the total would not fit in a `u64`,
/// which in particular catches attempts to count an unbounded complement.
pub fn count<I: RunIterator>(mut it: I) -> Result<u64> {
    let mut total: u64 = 0;
    while it.has_next() {
        let run = it.next_run()?;
        if run.value {
            total = total.checked_add(run.len).ok_or(Error::Overflow)?;
        }
    }
    Ok(total)
}

/// Whether index `x` is in the set. Indices past the end of the sequence are
/// unset, by convention.
pub fn is_set<I: RunIterator>(mut it: I, x: u64) -> Result<bool> {
    let mut offset = 0u64;
    while it.has_next() {
        let run = it.next_run()?;
        // `x >= offset` on entry, so if the span's end overflows it
        // certainly covers `x`.
        match offset.checked_add(run.len) {
            Some(end) if end <= x => offset = end,
            _ => return Ok(run.value),
        }
    }
    Ok(false)
}

/// The largest right boundary over all runs holding `value`, or 0 if no run
/// does. For a set with its last set bit at index `m`, `last_index(it, true)`
/// is `m + 1`.
pub fn last_index<I: RunIterator>(mut it: I, value: bool) -> Result<u64> {
    let mut at = 0u64;
    let mut max = 0u64;
    while it.has_next() {
        let run = it.next_run()?;
        at += run.len;
        if run.value == value {
            max = at;
        }
    }
    Ok(max)
}

/// Fills in every gap below the last set bit:
///
/// ```text
/// in:  11100000111010001110000
/// out: 1111111111111111111
/// ```
pub fn fill<I: RunIterator>(it: I) -> Result<RunSliceIterator> {
    let max = last_index(it, true)?;
    if max > 0 {
        Ok(RunSliceIterator::new([Run::new(true, max)]))
    } else {
        Ok(RunSliceIterator::empty())
    }
}

/// Expands a finite iterator into its set indices, in increasing order.
///
/// Like [`count`], this drains its input; never call it on an unbounded
/// complement.
pub fn indices<I: RunIterator>(mut it: I) -> Result<Vec<u64>> {
    let mut out = Vec::new();
    let mut offset = 0u64;
    while it.has_next() {
        let run = it.next_run()?;
        if run.value {
            out.extend(offset..offset + run.len);
        }
        offset += run.len;
    }
    Ok(out)
}
