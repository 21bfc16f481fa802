/// methods on `Clause`
mod clause;
/// methods on `ClauseRef`
mod cref;

pub use self::{clause::*, cref::ClauseRef, property::*};

use {
    crate::types::*,
    std::slice::Iter,
};

/// API for the dense-mode clause view the walker consumes: binary clauses
/// as a plain pair list, large clauses through an arena walk up to the
/// last-irredundant boundary.
pub trait ClauseDBIF: Instantiate {
    /// return the number of large clauses in the arena, dead ones included.
    fn len(&self) -> usize;
    /// return true if the arena is empty.
    fn is_empty(&self) -> bool;
    /// return an iterator over the arena.
    fn iter(&self) -> Iter<'_, Clause>;
    /// return the binary clause pairs.
    fn binaries(&self) -> &[[Lit; 2]];
    /// bounds-checked arena lookup.
    fn get(&self, cr: ClauseRef) -> &Clause;
    /// allocate a new clause; size 2 goes to the pair list, larger ones to
    /// the arena. Empty and unit inputs are rejected.
    fn new_clause(&mut self, lits: Vec<Lit>, learnt: bool) -> MaybeInconsistent;
    /// mark an arena clause as garbage.
    fn mark_garbage(&mut self, cr: ClauseRef);
    /// the arena boundary after the last irredundant clause.
    fn last_irredundant(&self) -> usize;
    /// the number of binary plus live irredundant large clauses.
    fn num_irredundant(&self) -> usize;
}

/// Clause database in dense mode: a binary pair list plus an append-only
/// large-clause arena addressed by [`ClauseRef`].
#[derive(Clone, Debug, Default)]
pub struct ClauseDB {
    /// irredundant binary clauses as dense literal pairs
    binary: Vec<[Lit; 2]>,
    /// large clauses, append-only
    arena: Vec<Clause>,
    /// arena boundary after the last irredundant clause
    last_irredundant: usize,
    num_bi_clause: usize,
    /// live irredundant large clauses
    num_clause: usize,
    num_learnt: usize,
}

impl Instantiate for ClauseDB {
    fn instantiate(_config: &Config, cnf: &CNFDescription) -> ClauseDB {
        ClauseDB {
            binary: Vec::with_capacity(cnf.num_of_clauses),
            arena: Vec::with_capacity(cnf.num_of_clauses),
            ..ClauseDB::default()
        }
    }
}

impl ClauseDBIF for ClauseDB {
    fn len(&self) -> usize {
        self.arena.len()
    }
    fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
    fn iter(&self) -> Iter<'_, Clause> {
        self.arena.iter()
    }
    fn binaries(&self) -> &[[Lit; 2]] {
        &self.binary
    }
    fn get(&self, cr: ClauseRef) -> &Clause {
        &self.arena[cr.ordinal()]
    }
    fn new_clause(&mut self, lits: Vec<Lit>, learnt: bool) -> MaybeInconsistent {
        match lits.len() {
            0 => return Err(SolverError::EmptyClause),
            1 => return Err(SolverError::UnitClause),
            2 if !learnt => {
                self.binary.push([lits[0], lits[1]]);
                self.num_bi_clause += 1;
                return Ok(());
            }
            _ => (),
        }
        debug_assert!(
            lits.iter().all(|l| lits.iter().filter(|m| m.vi() == l.vi()).count() == 1),
            "duplicated variable in clause"
        );
        let mut flags = FlagClause::empty();
        if learnt {
            flags.insert(FlagClause::LEARNT);
            self.num_learnt += 1;
        } else {
            self.num_clause += 1;
        }
        self.arena.push(Clause { lits, flags });
        if !learnt {
            self.last_irredundant = self.arena.len();
        }
        Ok(())
    }
    fn mark_garbage(&mut self, cr: ClauseRef) {
        let c = &mut self.arena[cr.ordinal()];
        if !c.is(FlagClause::DEAD) {
            c.turn_on(FlagClause::DEAD);
            if !c.is(FlagClause::LEARNT) {
                self.num_clause -= 1;
            }
        }
    }
    fn last_irredundant(&self) -> usize {
        self.last_irredundant
    }
    fn num_irredundant(&self) -> usize {
        self.num_bi_clause + self.num_clause
    }
}

pub mod property {
    use super::ClauseDB;
    use crate::types::*;

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum Tusize {
        NumBiClause,
        NumClause,
        NumLearnt,
    }

    pub const USIZES: [Tusize; 3] = [Tusize::NumBiClause, Tusize::NumClause, Tusize::NumLearnt];

    impl PropertyDereference<Tusize, usize> for ClauseDB {
        #[inline]
        fn derefer(&self, k: Tusize) -> usize {
            match k {
                Tusize::NumBiClause => self.num_bi_clause,
                Tusize::NumClause => self.num_clause,
                Tusize::NumLearnt => self.num_learnt,
            }
        }
    }
}
