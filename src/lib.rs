//! This is a WalkSAT-family stochastic local-search engine for CDCL SAT
//! solvers in Rust. It searches, by single-variable flips of a full trial
//! assignment, for an assignment minimizing the number of unsatisfied
//! irredundant clauses and feeds any improvement back into the host
//! solver's phase memory.
/// assignment and phase memory shared with the host solver
pub mod assign;
/// Clause database in dense mode
pub mod cdb;
/// parameters for walker invocations
pub mod config;
/// statistics
pub mod state;
/// Plumbing layer.
pub mod types;
/// Stochastic Local Search
pub mod walk;
