//! Randomized heuristics.
//!
//! - [`RandomRestartSolver`]: greedy fill over a fresh random permutation of
//!   the catalog, repeated for a number of trials.
//! - [`RandomImprovementSolver`]: starts from one random restart, then
//!   repeatedly drops a random item from the best selection and refills
//!   with random draws, keeping strict improvements.
//!
//! Neither solver owns a random source. Pass one to
//! [`Solver::solve`](crate::solver::Solver::solve), or call `run` to use
//! the seed from [`RandomConfig`].

mod config;
mod improvement;
mod restart;

pub use config::RandomConfig;
pub use improvement::RandomImprovementSolver;
pub use restart::RandomRestartSolver;
