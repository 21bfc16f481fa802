/// Module `state` is a collection of internal data about walker invocations.
use crate::types::*;

/// Solver-wide counters the walker updates, plus the parameters and the
/// base random seed shared by all invocations. Nothing else escapes a
/// walker invocation.
#[derive(Clone, Debug, Default)]
pub struct State {
    /// configuration
    pub config: Config,
    /// base seed; each invocation derives its stream from this and `num_walk`
    pub rng_seed: u64,
    /// the number of walker invocations that actually ran
    pub num_walk: usize,
    /// the number of invocations that improved the phase memory
    pub num_improve: usize,
    /// the number of decision phases imported into trial assignments
    pub num_phase_import: usize,
    /// the number of literal flips
    pub num_flip: u64,
    /// walk effort, consumed by break/make watch scans
    pub num_walk_step: u64,
}

impl Instantiate for State {
    fn instantiate(config: &Config, _cnf: &CNFDescription) -> State {
        State {
            config: config.clone(),
            rng_seed: config.walk_seed,
            ..State::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tusize {
    NumWalk,
    NumImprove,
    NumPhaseImport,
}

pub const USIZES: [Tusize; 3] = [Tusize::NumWalk, Tusize::NumImprove, Tusize::NumPhaseImport];

impl PropertyDereference<Tusize, usize> for State {
    #[inline]
    fn derefer(&self, k: Tusize) -> usize {
        match k {
            Tusize::NumWalk => self.num_walk,
            Tusize::NumImprove => self.num_improve,
            Tusize::NumPhaseImport => self.num_phase_import,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tu64 {
    NumFlip,
    NumWalkStep,
}

pub const U64S: [Tu64; 2] = [Tu64::NumFlip, Tu64::NumWalkStep];

impl PropertyDereference<Tu64, u64> for State {
    #[inline]
    fn derefer(&self, k: Tu64) -> u64 {
        match k {
            Tu64::NumFlip => self.num_flip,
            Tu64::NumWalkStep => self.num_walk_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_properties() {
        let config = Config {
            walk_seed: 7,
            ..Config::default()
        };
        let mut state = State::instantiate(&config, &CNFDescription::default());
        assert_eq!(state.rng_seed, 7);
        state.num_walk = 2;
        state.num_flip = 5;
        assert_eq!(state.derefer(Tusize::NumWalk), 2);
        assert_eq!(state.derefer(Tu64::NumFlip), 5);
        assert_eq!(state.derefer(Tu64::NumWalkStep), 0);
    }
}
