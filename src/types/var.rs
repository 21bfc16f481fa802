use {
    super::flags::{FlagIF, FlagVar},
    std::fmt,
};

/// Object representing a variable.
#[derive(Clone, Debug)]
pub struct Var {
    /// the root-level value fixed by the host's propagation, if any.
    pub assign: Option<bool>,
    /// the target phase, a stable-mode hint the host may set.
    pub target: Option<bool>,
    /// misc flags; the saved phase lives in `FlagVar::PHASE`.
    pub(crate) flags: FlagVar,
}

impl Default for Var {
    fn default() -> Var {
        Var {
            assign: None,
            target: None,
            flags: FlagVar::empty(),
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.assign {
            Some(b) => write!(f, "V({b})"),
            None => write!(f, "V(-)"),
        }
    }
}

impl FlagIF for Var {
    type FlagType = FlagVar;
    #[inline]
    fn is(&self, flag: Self::FlagType) -> bool {
        self.flags.contains(flag)
    }
    #[inline]
    fn set(&mut self, f: Self::FlagType, b: bool) {
        self.flags.set(f, b);
    }
    #[inline]
    fn toggle(&mut self, flag: Self::FlagType) {
        self.flags.toggle(flag);
    }
    #[inline]
    fn turn_off(&mut self, flag: Self::FlagType) {
        self.flags.remove(flag);
    }
    #[inline]
    fn turn_on(&mut self, flag: Self::FlagType) {
        self.flags.insert(flag);
    }
}
