/// Walker's parameters
#[derive(Clone, Debug)]
pub struct Config {
    /// polarity given to a variable without phase memory
    pub initial_phase: bool,
    /// seed the trial assignment from target phases when available
    pub use_target_phase: bool,
    /// base seed of the walker's pseudo-random stream
    pub walk_seed: u64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            initial_phase: true,
            use_target_phase: true,
            walk_seed: 0,
        }
    }
}
