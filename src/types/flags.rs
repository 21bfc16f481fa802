use bitflags::bitflags;

/// API for object properties.
pub trait FlagIF {
    type FlagType;
    /// return true if the flag is on.
    fn is(&self, flag: Self::FlagType) -> bool;
    /// set the flag.
    fn set(&mut self, f: Self::FlagType, b: bool);
    /// toggle the flag.
    fn toggle(&mut self, flag: Self::FlagType);
    /// toggle the flag off.
    fn turn_off(&mut self, flag: Self::FlagType);
    /// toggle the flag on.
    fn turn_on(&mut self, flag: Self::FlagType);
}

bitflags! {
    /// Misc flags used by [`Clause`](`crate::cdb::Clause`).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
    pub struct FlagClause: u8 {
        /// a clause is generated by conflict analysis and is removable.
        const LEARNT = 0b0000_0001;
        /// a clause is dead; its arena slot must not be dereferenced again.
        const DEAD   = 0b0000_0010;
    }
}

bitflags! {
    /// Misc flags used by [`Var`](`crate::types::Var`).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
    pub struct FlagVar: u8 {
        /// the remembered polarity of a Var, used to seed decisions.
        const PHASE      = 0b0000_0001;
        /// a var is eliminated by the preprocessor.
        const ELIMINATED = 0b0000_0010;
    }
}
