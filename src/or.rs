//! Union of two run sequences.

use crate::{Error, Result, Run, RunIterator};

/// The union of `a` and `b`: an index is set in the result when it is set in
/// either input. The initial `prepare` can pull from both inputs, so
/// construction itself can fail.
pub fn or<A: RunIterator, B: RunIterator>(a: A, b: B) -> Result<Union<A, B>> {
    let mut it = Union {
        a,
        b,
        next: Run::default(),
        arun: Run::default(),
        brun: Run::default(),
    };
    it.prepare()?;
    Ok(it)
}

/// A lazy pairwise merge with "set wins" overlap resolution.
///
/// The next output run is always computed ahead of time: once at
/// construction, and again after each `next_run`. `has_next` is then just a
/// validity check on the prepared run. The side buffers `arun` and `brun`
/// hold the unconsumed remainder of each input's current run; merging
/// shrinks these local copies and refetches when they empty.
pub struct Union<A, B> {
    a: A,
    b: B,
    next: Run,
    arun: Run,
    brun: Run,
}

impl<A: RunIterator, B: RunIterator> Union<A, B> {
    /// Refills whichever side buffers are empty and still have upstream runs.
    fn fetch(&mut self) -> Result<()> {
        if !self.arun.is_valid() && self.a.has_next() {
            self.arun = self.a.next_run()?;
        }
        if !self.brun.is_valid() && self.b.has_next() {
            self.brun = self.b.next_run()?;
        }
        Ok(())
    }

    fn prepare(&mut self) -> Result<()> {
        self.fetch()?;

        // One side exhausted: pass the other through whole.
        if !self.arun.is_valid() {
            self.next = self.brun;
            self.brun.len = 0;
            return Ok(());
        }
        if !self.brun.is_valid() {
            self.next = self.arun;
            self.arun.len = 0;
            return Ok(());
        }

        if !self.arun.value && !self.brun.value {
            let len = self.arun.len.min(self.brun.len);
            self.next = Run::new(false, len);
            self.arun.len -= len;
            self.brun.len -= len;

            // If one side just ran out and the other continues with zeros,
            // that tail is the rest of the output run; fold it in rather
            // than going around again. Also covers both sides running out
            // at once, where both remainders are the zero sentinel.
            self.fetch()?;
            let trailing = |r1: Run, r2: Run| !r1.is_valid() && !r2.value;
            if trailing(self.arun, self.brun) || trailing(self.brun, self.arun) {
                self.next.len += self.arun.len;
                self.next.len += self.brun.len;
                self.arun.len = 0;
                self.brun.len = 0;
            }
            return Ok(());
        }

        // At least one side is set; set wins any positional overlap. Keep
        // consuming the shorter remaining side while a set run is in play,
        // accumulating the output length across refetches.
        self.next = Run::new(true, 0);
        while (self.arun.value && self.arun.is_valid())
            || (self.brun.value && self.brun.is_valid())
        {
            let mut len = self.arun.len;
            if (self.brun.len < len && self.brun.is_valid()) || !self.arun.is_valid() {
                len = self.brun.len;
            }
            self.next.len += len;
            if self.arun.is_valid() {
                self.arun.len -= len;
            }
            if self.brun.is_valid() {
                self.brun.len -= len;
            }
            self.fetch()?;
        }
        Ok(())
    }
}

impl<A: RunIterator, B: RunIterator> RunIterator for Union<A, B> {
    #[inline(always)]
    fn has_next(&mut self) -> bool {
        self.next.is_valid()
    }
    fn next_run(&mut self) -> Result<Run> {
        if !self.next.is_valid() {
            return Err(Error::EndOfRuns);
        }
        let next = self.next;
        self.prepare()?;
        Ok(next)
    }
}
