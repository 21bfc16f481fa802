/// Module `assign` is the host-facing slice of assignment state the walker
/// needs: root-level values, variable activeness, and per-variable phase
/// memory. The walker never mutates root-level values; it reads them while
/// indexing and writes improvements back through [`AssignPhaseIF`].
use crate::types::*;

/// API for root-level assignment and variable activeness.
pub trait AssignIF {
    /// return the number of variables.
    fn num_vars(&self) -> usize;
    /// return `true` if the var is neither root-assigned nor eliminated.
    fn var_active(&self, vi: VarId) -> bool;
    /// return the root-level value of a literal, if its var is fixed.
    fn root_value(&self, lit: Lit) -> Option<bool>;
    /// fix a literal at root level; `Err(Inconsistent)` on conflict.
    fn assign_at_root(&mut self, lit: Lit) -> MaybeInconsistent;
    /// remove a var from the active set.
    fn eliminate(&mut self, vi: VarId);
}

/// API for phase memory; the walker's improvements land here.
pub trait AssignPhaseIF {
    /// return the saved phase of a var.
    fn saved(&self, vi: VarId) -> bool;
    /// overwrite the saved phase of a var.
    fn set_saved(&mut self, vi: VarId, b: bool);
    /// return the target phase of a var, if the host set one.
    fn target(&self, vi: VarId) -> Option<bool>;
    /// set the target phase of a var.
    fn set_target(&mut self, vi: VarId, b: bool);
    /// snapshot all saved phases, indexed from 0 for var 1.
    fn saved_phases(&self) -> Vec<bool>;
}

/// A collection of variables with their assignments and phase memory.
#[derive(Clone, Debug, Default)]
pub struct AssignStack {
    /// 1-indexed; `var[0]` is never used.
    var: Vec<Var>,
    num_asserted_vars: usize,
    num_eliminated_vars: usize,
}

impl Instantiate for AssignStack {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> AssignStack {
        let nv = cnf.num_of_variables;
        let mut var = vec![Var::default(); nv + 1];
        if config.initial_phase {
            for v in var.iter_mut().skip(1) {
                v.turn_on(FlagVar::PHASE);
            }
        }
        AssignStack {
            var,
            num_asserted_vars: 0,
            num_eliminated_vars: 0,
        }
    }
}

impl AssignIF for AssignStack {
    fn num_vars(&self) -> usize {
        self.var.len() - 1
    }
    fn var_active(&self, vi: VarId) -> bool {
        let v = &self.var[vi];
        v.assign.is_none() && !v.is(FlagVar::ELIMINATED)
    }
    fn root_value(&self, lit: Lit) -> Option<bool> {
        self.var[lit.vi()]
            .assign
            .map(|b| if lit.as_bool() { b } else { !b })
    }
    fn assign_at_root(&mut self, lit: Lit) -> MaybeInconsistent {
        let value = lit.as_bool();
        let v = &mut self.var[lit.vi()];
        match v.assign {
            Some(b) if b != value => Err(SolverError::Inconsistent),
            Some(_) => Ok(()),
            None => {
                v.assign = Some(value);
                self.num_asserted_vars += 1;
                Ok(())
            }
        }
    }
    fn eliminate(&mut self, vi: VarId) {
        let v = &mut self.var[vi];
        if !v.is(FlagVar::ELIMINATED) {
            v.turn_on(FlagVar::ELIMINATED);
            self.num_eliminated_vars += 1;
        }
    }
}

impl AssignPhaseIF for AssignStack {
    fn saved(&self, vi: VarId) -> bool {
        self.var[vi].is(FlagVar::PHASE)
    }
    fn set_saved(&mut self, vi: VarId, b: bool) {
        self.var[vi].set(FlagVar::PHASE, b);
    }
    fn target(&self, vi: VarId) -> Option<bool> {
        self.var[vi].target
    }
    fn set_target(&mut self, vi: VarId, b: bool) {
        self.var[vi].target = Some(b);
    }
    fn saved_phases(&self) -> Vec<bool> {
        self.var.iter().skip(1).map(|v| v.is(FlagVar::PHASE)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asg(nv: usize) -> AssignStack {
        AssignStack::instantiate(&Config::default(), &CNFDescription::new(nv, 0))
    }

    #[test]
    fn test_root_assignment() {
        let mut a = asg(3);
        assert!(a.var_active(1));
        assert_eq!(a.assign_at_root(Lit::from(-1i32)), Ok(()));
        assert!(!a.var_active(1));
        assert_eq!(a.root_value(Lit::from(-1i32)), Some(true));
        assert_eq!(a.root_value(Lit::from(1i32)), Some(false));
        assert_eq!(a.root_value(Lit::from(2i32)), None);
        assert_eq!(a.assign_at_root(Lit::from(-1i32)), Ok(()));
        assert_eq!(
            a.assign_at_root(Lit::from(1i32)),
            Err(SolverError::Inconsistent)
        );
    }

    #[test]
    fn test_phase_memory() {
        let mut a = asg(2);
        assert!(a.saved(1), "initial phase defaults to true");
        a.set_saved(1, false);
        assert!(!a.saved(1));
        assert_eq!(a.target(2), None);
        a.set_target(2, false);
        assert_eq!(a.target(2), Some(false));
        assert_eq!(a.saved_phases(), vec![false, true]);
    }

    #[test]
    fn test_elimination() {
        let mut a = asg(2);
        a.eliminate(2);
        assert!(!a.var_active(2));
        assert!(a.var_active(1));
    }
}
