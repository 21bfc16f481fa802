//! Module `types` provides various building blocks, including
//! some common traits.

/// methods on CNF description
pub mod cnf;
/// methods on flags used in Var and Clause
pub mod flags;
/// methods on literals
pub mod lit;
/// methods on Var
pub mod var;

pub use self::{cnf::*, flags::*, lit::*, var::*};

pub use crate::config::Config;

use std::fmt;

/// API for accessing internal data in a module.
/// For example, a progress reporter needs to access misc counters
/// which should otherwise be used locally in the defining modules.
/// To avoid making them public, we define a generic exporter here.
pub trait PropertyDereference<I, O: Sized> {
    fn derefer(&self, key: I) -> O;
}

/// API for object instantiation based on `Config` and `CNFDescription`.
pub trait Instantiate {
    /// make and return an object from `Config` and `CNFDescription`.
    fn instantiate(conf: &Config, cnf: &CNFDescription) -> Self;
}

/// Internal errors.
/// Note: returning `Result<(), a-singleton>` is identical to returning `bool`.
#[derive(Debug, Eq, PartialEq)]
pub enum SolverError {
    // A given CNF contains empty clauses or derives them during reading
    EmptyClause,
    // A clause contains a literal out of the range defined in its header.
    // '0' is an example.
    InvalidLiteral,
    // UNSAT with some internal context
    Inconsistent,
    // A unit clause was handed to the clause database; assert it through
    // `AssignStack::assign_at_root` instead.
    UnitClause,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A Return type used by crate functions.
pub type MaybeInconsistent = Result<(), SolverError>;
