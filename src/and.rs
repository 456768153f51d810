//! Intersection and difference of run sequences.

use crate::{Not, Result, Run, RunIterator, RunSliceIterator};
use crate::slice::Runs;

/// The intersection of `a` and `b`: an index is set in the result when it is
/// set in both inputs.
///
/// A double-cursor merge over the two sequences, ending as soon as either
/// side runs out (everything past a finite set is unset, so nothing beyond
/// the shorter input can intersect). Output runs coalesce as they are
/// emitted, and a result that is nothing but zeros collapses to the
/// canonical empty set. The result is materialized, which also makes it safe
/// to pass a bounded complement as either argument.
pub fn and<A: RunIterator, B: RunIterator>(mut a: A, mut b: B) -> Result<RunSliceIterator> {
    let mut arun = Run::default();
    let mut brun = Run::default();

    let mut out = Runs::new();
    loop {
        if !arun.is_valid() && a.has_next() {
            arun = a.next_run()?;
        }
        if !brun.is_valid() && b.has_next() {
            brun = b.next_run()?;
        }
        if !arun.is_valid() || !brun.is_valid() {
            break;
        }

        let run = Run::new(arun.value && brun.value, arun.len.min(brun.len));
        arun.len -= run.len;
        brun.len -= run.len;

        match out.last_mut() {
            Some(last) if last.value == run.value => last.len += run.len,
            _ => out.push(run),
        }
    }

    // All zeros is the empty set; represent it as no runs at all.
    if out.len() == 1 && !out[0].value {
        out.clear();
    }

    Ok(RunSliceIterator::from(out))
}

/// The difference `a \ b`: intersection with the complement of `b`.
pub fn subtract<A: RunIterator, B: RunIterator>(a: A, b: B) -> Result<RunSliceIterator> {
    and(a, Not::new(b))
}
