//! Implementation of Stochastic Local Search over the dense clause view.
//!
//! One invocation owns a full trial assignment seeded from the host's
//! phase memory, repeatedly flips one literal of a randomly chosen
//! unsatisfied clause, and whenever the number of unsatisfied irredundant
//! clauses drops below the best seen so far, records the assignment so it
//! can be written back into the saved phases on exit. The walker never
//! decides satisfiability; it may run out of budget with a nonzero
//! minimum, which is not an error.
/// clause index and counter table
mod index;
/// break-count score table
mod score;
/// best-assignment trail
mod trail;
/// unsatisfied clause set
mod unsat;

use {
    self::{
        index::ClauseIndex,
        score::ScoreTable,
        trail::FlipTrail,
        unsat::UnsatSet,
    },
    crate::{
        assign::{AssignIF, AssignPhaseIF, AssignStack},
        cdb::{ClauseDB, ClauseDBIF},
        state::State,
        types::*,
    },
    log::{debug, trace},
    rand::{rngs::SmallRng, Rng, SeedableRng},
};

/// bit budget of a walker clause reference; clause sets beyond this make
/// the walker inapplicable for the whole invocation.
pub const MAX_WALK_REF: usize = (1 << 31) - 1;

/// Outcome of one walker invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WalkResult {
    /// unsatisfied clauses right after seeding the trial assignment
    pub initial: usize,
    /// best number of unsatisfied clauses reached
    pub minimum: usize,
    /// flip counter at exit
    pub flipped: u64,
}

/// API for stochastic local search, implemented on the dense clause view.
pub trait WalkIF {
    /// admissibility gate, evaluated before any allocation: every clause
    /// reference in use must fit the walker's reference budget.
    fn walkable(&self) -> bool;
    /// run one local-search round within `limit` steps of effort, polling
    /// `canceled` once per flip. Returns `None` when the gate declines;
    /// otherwise the saved phases reflect the best assignment found (and
    /// are untouched when no improvement occurred).
    fn walk(
        &mut self,
        asg: &mut AssignStack,
        state: &mut State,
        limit: usize,
        canceled: &mut dyn FnMut() -> bool,
    ) -> Option<WalkResult>;
}

impl WalkIF for ClauseDB {
    fn walkable(&self) -> bool {
        if MAX_WALK_REF < self.last_irredundant() {
            return false;
        }
        self.num_irredundant() <= MAX_WALK_REF
    }
    fn walk(
        &mut self,
        asg: &mut AssignStack,
        state: &mut State,
        limit: usize,
        canceled: &mut dyn FnMut() -> bool,
    ) -> Option<WalkResult> {
        if !self.walkable() {
            debug!("walk declined: clause references exceed the walker budget");
            return None;
        }
        state.num_walk += 1;
        let num_vars = asg.num_vars();
        let values = seed_trial(asg, state);
        let mut unsat = UnsatSet::default();
        let index = ClauseIndex::build(self, asg, &values, &mut unsat);
        let clauses = index.len();
        let average_size = if clauses == 0 {
            0.0
        } else {
            index.total_lits / clauses as f64
        };
        let scores = ScoreTable::build(state.num_walk, average_size);
        let rng = SmallRng::seed_from_u64(state.rng_seed ^ state.num_walk as u64);
        let current = unsat.len();
        debug!(
            "walk: initially {current} unsatisfied among {clauses} irredundant clauses, \
             average clause size {average_size:.2}"
        );
        let limit = state.num_walk_step.saturating_add(limit as u64);
        let cdb: &ClauseDB = self;
        let mut walker = Walker {
            cdb,
            asg,
            state,
            index,
            unsat,
            values,
            trail: FlipTrail::new(num_vars),
            scores,
            weights: Vec::new(),
            rng,
            initial: current,
            current,
            minimum: current,
            flipped: 0,
            limit,
        };
        walker.round(canceled);
        #[cfg(any(test, feature = "boundary_check"))]
        walker.audit();
        Some(walker.finalize())
    }
}

/// seed the trial assignment of every active variable from target, then
/// saved phases, writing the choice back into the saved phases. Returns a
/// value array indexed by literal.
fn seed_trial(asg: &mut AssignStack, state: &mut State) -> Vec<Option<bool>> {
    let num_vars = asg.num_vars();
    let mut values: Vec<Option<bool>> = vec![None; 2 * (num_vars + 1)];
    let mut imported = 0;
    for vi in 1..=num_vars {
        if !asg.var_active(vi) {
            continue;
        }
        let value = if state.config.use_target_phase {
            asg.target(vi).unwrap_or_else(|| asg.saved(vi))
        } else {
            asg.saved(vi)
        };
        asg.set_saved(vi, value);
        let lit = Lit::from((vi, true));
        values[usize::from(lit)] = Some(value);
        values[usize::from(!lit)] = Some(!value);
        imported += 1;
    }
    state.num_phase_import += imported;
    debug!("walk: imported {imported} decision phases");
    values
}

/// One walker activation. All structures are allocated when a walk starts
/// and fully released at its end; only the effect on the saved phases and
/// the statistics counters persists.
struct Walker<'a> {
    cdb: &'a ClauseDB,
    asg: &'a mut AssignStack,
    state: &'a mut State,
    index: ClauseIndex,
    unsat: UnsatSet,
    /// the trial assignment, indexed by literal; total for active vars
    values: Vec<Option<bool>>,
    trail: FlipTrail,
    scores: ScoreTable,
    /// scratch weights of the clause picked last
    weights: Vec<f64>,
    rng: SmallRng,
    initial: usize,
    current: usize,
    minimum: usize,
    flipped: u64,
    /// absolute bound on `state.num_walk_step`
    limit: u64,
}

impl Walker<'_> {
    fn round(&mut self, canceled: &mut dyn FnMut() -> bool) {
        while 0 < self.minimum && self.state.num_walk_step < self.limit {
            if canceled() {
                debug!("walk canceled after {} flips", self.flipped);
                break;
            }
            self.step();
        }
        debug!(
            "walk: ends with {} unsatisfied clauses after {} flips",
            self.current, self.flipped
        );
    }

    fn step(&mut self) {
        debug_assert!(0 < self.current);
        self.state.num_flip += 1;
        self.flipped += 1;
        let lit = self.pick_literal();
        self.flip(lit);
        self.trail.push(self.asg, lit);
        if self.current < self.minimum {
            self.update_best();
        }
    }

    /// weighted-random selection among the false literals of a randomly
    /// chosen unsatisfied clause. The clause pool is sampled by the flip
    /// counter modulo the current unsatisfied count; this bias is the
    /// known behavior of the algorithm and must not be "fixed" to true
    /// uniform sampling.
    fn pick_literal(&mut self) -> Lit {
        debug_assert_eq!(self.current, self.unsat.len());
        debug_assert!(!self.unsat.is_empty());
        let pos = (self.flipped % self.current as u64) as usize;
        self.flipped += 1;
        let cref = self.unsat.get(pos);
        let cdb = self.cdb;
        let lits = self.index.literals(cdb, cref);
        trace!("picked unsatisfied[{pos}] {:?}", i32s(lits));
        self.weights.clear();
        let mut sum = 0.0;
        let mut picked = None;
        for lit in lits {
            if self.values[usize::from(*lit)].is_none() {
                continue;
            }
            picked = Some(*lit);
            let breaks = self.break_value(*lit);
            let score = self.scores.score(breaks as usize);
            debug_assert!(0.0 < score);
            self.weights.push(score);
            sum += score;
        }
        debug_assert!(0.0 < sum);
        let threshold = sum * self.rng.gen::<f64>();
        let mut below = 0.0;
        let mut wi = 0;
        for lit in lits {
            if self.values[usize::from(*lit)].is_none() {
                continue;
            }
            below += self.weights[wi];
            wi += 1;
            if threshold < below {
                picked = Some(*lit);
                break;
            }
        }
        // rounding may leave the threshold unreached; the last assigned
        // literal of the first pass remains as fallback
        picked.expect("unsatisfied clause without active literal")
    }

    /// the number of clauses losing their only satisfying literal if `lit`
    /// were flipped to true.
    fn break_value(&mut self, lit: Lit) -> u32 {
        debug_assert_eq!(self.values[usize::from(lit)], Some(false));
        let mut steps = 1;
        let mut res = 0;
        for cref in &self.index.watches[usize::from(!lit)] {
            steps += 1;
            res += (self.index.counters[*cref as usize].count == 1) as u32;
        }
        self.state.num_walk_step += steps;
        res
    }

    fn flip(&mut self, lit: Lit) {
        trace!("flipping literal {lit}");
        debug_assert_eq!(self.values[usize::from(lit)], Some(false));
        self.values[usize::from(lit)] = Some(true);
        self.values[usize::from(!lit)] = Some(false);
        self.make_clauses(lit);
        self.break_clauses(lit);
        self.current = self.unsat.len();
    }

    /// clauses watching the flipped literal regain a satisfying literal.
    fn make_clauses(&mut self, flipped: Lit) {
        debug_assert_eq!(self.values[usize::from(flipped)], Some(true));
        let ClauseIndex {
            ref watches,
            ref mut counters,
            ..
        } = self.index;
        let mut steps = 1;
        for cref in &watches[usize::from(flipped)] {
            steps += 1;
            let c = &mut counters[*cref as usize];
            debug_assert!(c.count < u32::MAX);
            let was = c.count;
            c.count += 1;
            if was != 0 {
                continue;
            }
            let pos = c.pos;
            if self.unsat.remove(&mut counters[..], *cref, pos) {
                steps += 1;
            }
        }
        self.state.num_walk_step += steps;
    }

    /// clauses watching the complement lose a satisfying literal; those
    /// reaching zero become unsatisfied.
    fn break_clauses(&mut self, flipped: Lit) {
        let not_flipped = !flipped;
        debug_assert_eq!(self.values[usize::from(not_flipped)], Some(false));
        let ClauseIndex {
            ref watches,
            ref mut counters,
            ..
        } = self.index;
        let mut steps = 1;
        for cref in &watches[usize::from(not_flipped)] {
            steps += 1;
            let c = &mut counters[*cref as usize];
            debug_assert!(0 < c.count);
            c.count -= 1;
            if c.count != 0 {
                continue;
            }
            self.unsat.push(&mut counters[..], *cref);
        }
        self.state.num_walk_step += steps;
    }

    fn update_best(&mut self) {
        debug_assert!(self.current < self.minimum);
        self.minimum = self.current;
        trace!(
            "new minimum of {} unsatisfied clauses after {} flips",
            self.minimum,
            self.flipped
        );
        if !self.trail.confirm() {
            self.save_all_values();
            self.trail.revalidate();
        }
    }

    /// full-copy fallback when the trail was invalidated: every assigned
    /// trial value lands in the saved phases directly.
    fn save_all_values(&mut self) {
        trace!("copying all values as saved phases since trail is invalid");
        for vi in 1..=self.asg.num_vars() {
            let lit = Lit::from((vi, true));
            if let Some(value) = self.values[usize::from(lit)] {
                self.asg.set_saved(vi, value);
            }
        }
    }

    fn finalize(&mut self) -> WalkResult {
        debug_assert!(self.minimum <= self.initial);
        if self.minimum < self.initial {
            debug!(
                "walk: saving improved assignment of {} unsatisfied clauses",
                self.minimum
            );
            match self.trail.best() {
                // the minimum was saved by a full copy already
                None | Some(0) => (),
                Some(_) => self.trail.flush(self.asg, false),
            }
            self.state.num_improve += 1;
        } else {
            debug!("walk: no improvement thus keeping saved phases");
        }
        WalkResult {
            initial: self.initial,
            minimum: self.minimum,
            flipped: self.flipped,
        }
    }

    /// exhaustive consistency audit: every counter holds the number of
    /// literals its clause has satisfied under the trial assignment, and
    /// `count == 0` holds exactly for the members of the unsat set at
    /// their recorded positions.
    #[cfg(any(test, feature = "boundary_check"))]
    fn audit(&self) {
        for (cref, counter) in self.index.counters.iter().enumerate() {
            let cref = cref as index::CounterRef;
            let lits = self.index.literals(self.cdb, cref);
            let count = lits
                .iter()
                .filter(|l| self.values[usize::from(**l)] == Some(true))
                .count() as u32;
            assert_eq!(counter.count, count, "stale counter for clause {cref}");
            assert!(count <= lits.len() as u32);
            if count == 0 {
                assert_eq!(
                    self.unsat.get(counter.pos as usize),
                    cref,
                    "unsatisfied clause {cref} missing from the unsat set"
                );
            }
        }
        assert_eq!(self.current, self.unsat.len());
    }
}
