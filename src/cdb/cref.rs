use std::fmt;

/// Validated index into the large-clause arena. A `ClauseRef` is only
/// handed out by [`ClauseDB`](`crate::cdb::ClauseDB`) and dereferencing is a
/// bounds-checked lookup, never raw offset arithmetic.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClauseRef {
    ordinal: u32,
}

impl fmt::Display for ClauseRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}C", self.ordinal)
    }
}

impl ClauseRef {
    pub fn new(ordinal: usize) -> Self {
        debug_assert!(ordinal <= u32::MAX as usize);
        ClauseRef {
            ordinal: ordinal as u32,
        }
    }
    /// return the arena offset.
    pub fn ordinal(self) -> usize {
        self.ordinal as usize
    }
}
