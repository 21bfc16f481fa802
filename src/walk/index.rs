//! Per-invocation clause index: a tagged reference and a satisfaction
//! counter for every still-relevant clause, plus per-literal occurrence
//! watches for incremental make/break updates. Built once when a walk
//! starts, dropped when it ends.
use {
    super::unsat::UnsatSet,
    crate::{
        assign::{AssignIF, AssignStack},
        cdb::{ClauseDB, ClauseDBIF, ClauseIF, ClauseRef},
        types::*,
    },
    log::debug,
};

/// Index into the walker's counter table.
pub(super) type CounterRef = u32;

/// Satisfaction bookkeeping for one indexed clause: the number of its
/// literals satisfied by the trial assignment, and its position in the
/// unsat set, meaningful only while `count == 0`.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct Counter {
    pub count: u32,
    pub pos: u32,
}

/// Tagged reference to an indexed clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WalkRef {
    /// index into the binary pair list
    Binary(u32),
    /// offset into the large-clause arena
    Large(ClauseRef),
}

pub(super) struct ClauseIndex {
    pub refs: Vec<WalkRef>,
    pub counters: Vec<Counter>,
    /// per-literal occurrence lists of counter references
    pub watches: Vec<Vec<CounterRef>>,
    /// total retained literal occurrences, for the average clause size
    pub total_lits: f64,
}

impl ClauseIndex {
    /// enumerate binary pairs first, then arena clauses up to the
    /// last-irredundant boundary. Clauses satisfied under the root-level
    /// assignment are marked garbage and skipped; unsatisfied ones land in
    /// `unsat`.
    pub fn build(
        cdb: &mut ClauseDB,
        asg: &AssignStack,
        values: &[Option<bool>],
        unsat: &mut UnsatSet,
    ) -> ClauseIndex {
        let mut index = ClauseIndex {
            refs: Vec::new(),
            counters: Vec::new(),
            watches: vec![Vec::new(); values.len()],
            total_lits: 0.0,
        };
        index.connect_binaries(cdb, values, unsat);
        index.connect_large(cdb, asg, values, unsat);
        index
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// literals of an indexed clause.
    pub fn literals<'c>(&self, cdb: &'c ClauseDB, cref: CounterRef) -> &'c [Lit] {
        match self.refs[cref as usize] {
            WalkRef::Binary(bi) => &cdb.binaries()[bi as usize][..],
            WalkRef::Large(cr) => {
                let c = cdb.get(cr);
                debug_assert!(!c.is_dead());
                c.lits()
            }
        }
    }

    fn connect_binaries(
        &mut self,
        cdb: &ClauseDB,
        values: &[Option<bool>],
        unsat: &mut UnsatSet,
    ) {
        let mut num_unsat = 0;
        for (bi, pair) in cdb.binaries().iter().enumerate() {
            let first = values[usize::from(pair[0])];
            let second = values[usize::from(pair[1])];
            // a pair with an inactive var was handled at root level already
            let (Some(v0), Some(v1)) = (first, second) else {
                continue;
            };
            let cref = self.refs.len() as CounterRef;
            self.refs.push(WalkRef::Binary(bi as u32));
            self.watches[usize::from(pair[0])].push(cref);
            self.watches[usize::from(pair[1])].push(cref);
            let count = v0 as u32 + v1 as u32;
            self.counters.push(Counter { count, pos: 0 });
            if count == 0 {
                unsat.push(&mut self.counters, cref);
                num_unsat += 1;
            }
            self.total_lits += 2.0;
        }
        debug!(
            "walk: initially {num_unsat} unsatisfied binary clauses out of {}",
            self.refs.len()
        );
    }

    fn connect_large(
        &mut self,
        cdb: &mut ClauseDB,
        asg: &AssignStack,
        values: &[Option<bool>],
        unsat: &mut UnsatSet,
    ) {
        let mut num_unsat = 0;
        let mut num_large = 0;
        for i in 0..cdb.last_irredundant() {
            let cr = ClauseRef::new(i);
            let skip = {
                let c = cdb.get(cr);
                if c.is_dead() || c.is(FlagClause::LEARNT) {
                    Some(false)
                } else if c.iter().any(|l| asg.root_value(*l) == Some(true)) {
                    // satisfied at root level; no caller revisits it after
                    // this pass
                    Some(true)
                } else {
                    None
                }
            };
            match skip {
                Some(true) => {
                    cdb.mark_garbage(cr);
                    continue;
                }
                Some(false) => continue,
                None => (),
            }
            num_large += 1;
            let cref = self.refs.len() as CounterRef;
            let mut count = 0;
            let mut size = 0;
            let c = cdb.get(cr);
            for l in c.iter() {
                let li = usize::from(*l);
                let Some(v) = values[li] else {
                    debug_assert_eq!(asg.root_value(*l), Some(false));
                    continue;
                };
                self.watches[li].push(cref);
                size += 1;
                count += v as u32;
            }
            self.refs.push(WalkRef::Large(cr));
            self.counters.push(Counter { count, pos: 0 });
            if count == 0 {
                unsat.push(&mut self.counters, cref);
                num_unsat += 1;
            }
            self.total_lits += f64::from(size);
        }
        debug!("walk: initially {num_unsat} unsatisfied large clauses out of {num_large}");
    }
}
