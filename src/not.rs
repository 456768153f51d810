//! Lazy complement over the unbounded index domain.

use crate::{Result, Run, RunIterator};

/// The logical NOT of a run sequence.
///
/// Every upstream run has its value flipped. Once the upstream is exhausted
/// the complement keeps going: everything beyond the end of the known set is
/// set, represented by a single run of [`Run::MAX_LEN`]. `has_next` is
/// therefore always true, and a complement must be bounded (for example by
/// [`and()`](crate::and())) before any query that drains its input.
pub struct Not<I> {
    inner: I,
}

impl<I: RunIterator> Not<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: RunIterator> RunIterator for Not<I> {
    #[inline(always)]
    fn has_next(&mut self) -> bool {
        true
    }
    fn next_run(&mut self) -> Result<Run> {
        if !self.inner.has_next() {
            return Ok(Run::new(true, Run::MAX_LEN));
        }
        let mut run = self.inner.next_run()?;
        run.value = !run.value;
        Ok(run)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{and, indices, is_set, RunSliceIterator};

    #[test]
    fn flips_values_then_synthesizes_tail() {
        let mut it = Not::new(RunSliceIterator::new([
            Run::new(false, 3),
            Run::new(true, 4),
        ]));
        assert_eq!(it.next_run(), Ok(Run::new(true, 3)));
        assert_eq!(it.next_run(), Ok(Run::new(false, 4)));
        assert!(it.has_next());
        assert_eq!(it.next_run(), Ok(Run::new(true, Run::MAX_LEN)));
    }

    #[test]
    fn complement_of_empty_is_everything() {
        let mut it = Not::new(RunSliceIterator::empty());
        assert!(it.has_next());
        assert_eq!(it.next_run(), Ok(Run::new(true, Run::MAX_LEN)));
    }

    #[test]
    fn bounded_complement_is_queryable() {
        // Within [0, 8), the complement of {3, 4, 5} is {0, 1, 2, 6, 7}.
        let domain = RunSliceIterator::new([Run::new(true, 8)]);
        let set = RunSliceIterator::from_indices(&[3, 4, 5]);
        let bounded = and(domain, Not::new(set)).unwrap();
        assert_eq!(indices(bounded).unwrap(), vec![0, 1, 2, 6, 7]);
    }

    #[test]
    fn membership_beyond_the_source() {
        let set = RunSliceIterator::from_indices(&[2]);
        assert!(!is_set(Not::new(set.clone()), 2).unwrap());
        assert!(is_set(Not::new(set.clone()), 0).unwrap());
        // Far past the end of the source set, everything is set.
        assert!(is_set(Not::new(set), 1 << 40).unwrap());
    }
}
