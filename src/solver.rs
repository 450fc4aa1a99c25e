//! Common solver contract.
//!
//! Every strategy takes an initial (normally empty) [`KnapsackState`] and
//! the problem [`ItemCatalog`], and returns the best state it found. The
//! random source is injected so callers decide on seeding.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::exhaustive::{ExhaustiveIterativeSolver, ExhaustiveRecursiveSolver};
use crate::model::{ItemCatalog, KnapsackState};
use crate::random::{RandomImprovementSolver, RandomRestartSolver};

/// Result of a solver run.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The best state found.
    pub best: KnapsackState,

    /// Points of the best state.
    pub points: i64,

    /// Leaves evaluated (exhaustive) or trials run (randomized).
    pub iterations: usize,

    /// Number of times the best state was replaced.
    pub improvements: usize,
}

impl SolveResult {
    pub(crate) fn new(best: KnapsackState, iterations: usize, improvements: usize) -> Self {
        Self {
            points: best.points(),
            best,
            iterations,
            improvements,
        }
    }
}

/// A knapsack solving strategy.
///
/// Implementations never mutate `initial` or `catalog`; all search
/// states are rebuilt from them.
pub trait Solver {
    /// Short identifier, used in logs and output file names.
    fn name(&self) -> &'static str;

    /// Searches for the highest-scoring feasible selection.
    fn solve<R: Rng + ?Sized>(
        &self,
        initial: &KnapsackState,
        catalog: &ItemCatalog,
        rng: &mut R,
    ) -> Result<SolveResult>;
}

/// The four strategies behind one tagged type.
///
/// # Examples
///
/// ```
/// use u_knapsack::model::{Item, ItemCatalog, KnapsackState};
/// use u_knapsack::solver::{create_rng, Solver, Strategy};
///
/// let catalog = ItemCatalog::from(vec![
///     Item::new("A", 10, 2, 1),
///     Item::new("B", 6, 3, 2),
///     Item::new("C", 5, 1, 1),
/// ]);
/// let initial = KnapsackState::new(4, 3);
/// let mut rng = create_rng(Some(42));
///
/// for strategy in [Strategy::exhaustive_recursive(), Strategy::exhaustive_iterative()] {
///     let result = strategy.solve(&initial, &catalog, &mut rng).unwrap();
///     assert_eq!(result.points, 15);
/// }
/// ```
#[derive(Debug, Clone)]
pub enum Strategy {
    ExhaustiveRecursive(ExhaustiveRecursiveSolver),
    ExhaustiveIterative(ExhaustiveIterativeSolver),
    RandomRestart(RandomRestartSolver),
    RandomImprovement(RandomImprovementSolver),
}

impl Strategy {
    pub fn exhaustive_recursive() -> Self {
        Self::ExhaustiveRecursive(ExhaustiveRecursiveSolver)
    }

    pub fn exhaustive_iterative() -> Self {
        Self::ExhaustiveIterative(ExhaustiveIterativeSolver)
    }

    pub fn random_restart(trials: usize) -> Self {
        Self::RandomRestart(RandomRestartSolver::new(trials))
    }

    pub fn random_improvement(trials: usize) -> Self {
        Self::RandomImprovement(RandomImprovementSolver::new(trials))
    }

    /// Whether the strategy enumerates all `2^n` selections.
    pub fn is_exhaustive(&self) -> bool {
        matches!(
            self,
            Self::ExhaustiveRecursive(_) | Self::ExhaustiveIterative(_)
        )
    }
}

impl Solver for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Self::ExhaustiveRecursive(s) => s.name(),
            Self::ExhaustiveIterative(s) => s.name(),
            Self::RandomRestart(s) => s.name(),
            Self::RandomImprovement(s) => s.name(),
        }
    }

    fn solve<R: Rng + ?Sized>(
        &self,
        initial: &KnapsackState,
        catalog: &ItemCatalog,
        rng: &mut R,
    ) -> Result<SolveResult> {
        match self {
            Self::ExhaustiveRecursive(s) => s.solve(initial, catalog, rng),
            Self::ExhaustiveIterative(s) => s.solve(initial, catalog, rng),
            Self::RandomRestart(s) => s.solve(initial, catalog, rng),
            Self::RandomImprovement(s) => s.solve(initial, catalog, rng),
        }
    }
}

/// Creates the crate's RNG: seeded when `seed` is given, otherwise from
/// OS entropy.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
