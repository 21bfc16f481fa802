//! Bounded append-only log of flipped literals used to reconstruct the
//! best-seen assignment without copying the whole trial assignment on
//! every improvement. `best` is the confirmed prefix length; entries
//! beyond it are tentative. `None` means the trail was invalidated and
//! the next improvement must fall back to a full phase copy.
use {
    crate::{assign::{AssignPhaseIF, AssignStack}, types::Lit},
    log::trace,
};

#[derive(Debug)]
pub(super) struct FlipTrail {
    lits: Vec<Lit>,
    /// confirmed prefix length, `None` when invalidated
    best: Option<usize>,
    /// capacity bound, `vars / 4 + 1`
    cap: usize,
}

impl FlipTrail {
    pub fn new(num_vars: usize) -> FlipTrail {
        FlipTrail {
            lits: Vec::new(),
            best: Some(0),
            cap: num_vars / 4 + 1,
        }
    }
    pub fn best(&self) -> Option<usize> {
        self.best
    }
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lits.len()
    }
    /// append policy, applied after every flip: append below the cap;
    /// at the cap, flush the confirmed prefix if there is one, otherwise
    /// drop the whole trail and invalidate.
    pub fn push(&mut self, asg: &mut AssignStack, flipped: Lit) {
        let Some(best) = self.best else {
            debug_assert!(self.lits.is_empty());
            return;
        };
        debug_assert!(best <= self.lits.len());
        debug_assert!(self.lits.len() <= self.cap);
        if self.lits.len() < self.cap {
            self.lits.push(flipped);
        } else if 0 < best {
            trace!("trail reached cap {} with best position {best}", self.cap);
            self.flush(asg, true);
            self.lits.push(flipped);
        } else {
            trace!("trail reached cap {} without best position", self.cap);
            self.lits.clear();
            self.best = None;
        }
    }
    /// confirm all flips so far as belonging to the best assignment.
    /// Returns `false` when invalidated; the caller must copy the full
    /// trial assignment into the phase memory and call [`revalidate`].
    ///
    /// [`revalidate`]: FlipTrail::revalidate
    pub fn confirm(&mut self) -> bool {
        match self.best {
            None => false,
            Some(_) => {
                self.best = Some(self.lits.len());
                true
            }
        }
    }
    /// restart an invalidated trail after a full phase copy.
    pub fn revalidate(&mut self) {
        debug_assert_eq!(self.best, None);
        debug_assert!(self.lits.is_empty());
        self.best = Some(0);
    }
    /// materialize the confirmed prefix into the phase memory; with `keep`
    /// the remainder shifts down and the confirmed prefix resets to zero.
    pub fn flush(&mut self, asg: &mut AssignStack, keep: bool) {
        let best = self.best.expect("flushing an invalidated trail");
        debug_assert!(best <= self.lits.len());
        for l in &self.lits[..best] {
            asg.set_saved(l.vi(), l.as_bool());
        }
        if keep {
            self.lits.drain(..best);
            self.best = Some(0);
        }
    }
}
