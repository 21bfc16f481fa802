//! A dense, order-unstable set of currently unsatisfied clauses with O(1)
//! push and O(1) swap-remove. Each member's position is mirrored in its
//! [`Counter`](`super::index::Counter`) so removal needs no search.
use super::index::{Counter, CounterRef};

#[derive(Debug, Default)]
pub(super) struct UnsatSet {
    refs: Vec<CounterRef>,
}

impl UnsatSet {
    pub fn len(&self) -> usize {
        self.refs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
    pub fn get(&self, pos: usize) -> CounterRef {
        self.refs[pos]
    }
    /// append a clause and record its position in its counter.
    pub fn push(&mut self, counters: &mut [Counter], cref: CounterRef) {
        counters[cref as usize].pos = self.refs.len() as u32;
        self.refs.push(cref);
    }
    /// swap the last member into `pos` and shrink by one. `pos` must match
    /// the counter's recorded position. Returns `true` if a different
    /// clause was relocated, which costs one extra step of effort.
    pub fn remove(&mut self, counters: &mut [Counter], cref: CounterRef, pos: u32) -> bool {
        debug_assert!(!self.refs.is_empty());
        debug_assert_eq!(counters[cref as usize].pos, pos);
        debug_assert_eq!(self.refs[pos as usize], cref);
        let other = self.refs.pop().expect("empty unsat set");
        if other == cref {
            return false;
        }
        debug_assert!((pos as usize) < self.refs.len());
        counters[other as usize].pos = pos;
        self.refs[pos as usize] = other;
        true
    }
}
