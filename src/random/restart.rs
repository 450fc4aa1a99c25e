//! Random-restart greedy construction.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::config::RandomConfig;
use crate::error::Result;
use crate::model::{Item, ItemCatalog, KnapsackState};
use crate::solver::{create_rng, SolveResult, Solver};

/// Heuristic that shuffles the catalog and greedily admits every item that
/// still fits, once per trial.
///
/// Each pass scans the whole permutation; items that do not fit are
/// skipped. The best state over all trials is kept, a later trial winning
/// ties.
///
/// # Examples
///
/// ```
/// use u_knapsack::model::{Item, ItemCatalog, KnapsackState};
/// use u_knapsack::random::RandomRestartSolver;
///
/// let catalog = ItemCatalog::from(vec![
///     Item::new("A", 10, 2, 1),
///     Item::new("B", 6, 3, 2),
///     Item::new("C", 5, 1, 1),
/// ]);
/// let solver = RandomRestartSolver::new(50).with_seed(42);
/// let result = solver.run(&KnapsackState::new(4, 3), &catalog).unwrap();
/// assert!(result.points <= 15);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomRestartSolver {
    config: RandomConfig,
}

impl Default for RandomRestartSolver {
    fn default() -> Self {
        Self::with_config(RandomConfig::default())
    }
}

impl RandomRestartSolver {
    pub fn new(trials: usize) -> Self {
        Self::with_config(RandomConfig::new(trials))
    }

    pub fn with_config(config: RandomConfig) -> Self {
        Self { config }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &RandomConfig {
        &self.config
    }

    /// Solves with a generator seeded from the configuration.
    pub fn run(&self, initial: &KnapsackState, catalog: &ItemCatalog) -> Result<SolveResult> {
        let mut rng = create_rng(self.config.seed);
        self.solve(initial, catalog, &mut rng)
    }
}

/// Rebuilds `initial` and admits the items of `order` one by one, skipping
/// those that do not fit.
fn greedy_fill(initial: &KnapsackState, order: &[&Item]) -> KnapsackState {
    let mut state = initial.branch();
    for item in order {
        state.add_item(item);
    }
    state
}

impl Solver for RandomRestartSolver {
    fn name(&self) -> &'static str {
        "random"
    }

    fn solve<R: Rng + ?Sized>(
        &self,
        initial: &KnapsackState,
        catalog: &ItemCatalog,
        rng: &mut R,
    ) -> Result<SolveResult> {
        self.config.validate()?;

        let mut order: Vec<&Item> = catalog.iter().collect();
        let mut best: Option<KnapsackState> = None;
        let mut improvements = 0usize;

        for trial in 0..self.config.trials {
            order.shuffle(rng);
            let candidate = greedy_fill(initial, &order);

            let replace = best
                .as_ref()
                .is_none_or(|current| candidate.points() >= current.points());
            if replace {
                if let Some(current) = &best {
                    if candidate.points() > current.points() {
                        improvements += 1;
                        debug!(trial, points = candidate.points(), "new best");
                    }
                }
                best = Some(candidate);
            }
        }

        // trials > 0 was validated, so at least one candidate exists.
        let best = best.unwrap_or_else(|| initial.branch());
        let result = SolveResult::new(best, self.config.trials, improvements);
        info!(
            solver = self.name(),
            points = result.points,
            trials = result.iterations,
            "search finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnapsackError;

    fn abc() -> ItemCatalog {
        ItemCatalog::from(vec![
            Item::new("A", 10, 2, 1),
            Item::new("B", 6, 3, 2),
            Item::new("C", 5, 1, 1),
        ])
    }

    #[test]
    fn test_single_trial_is_bounded_by_optimum() {
        for seed in 0..32 {
            let mut rng = create_rng(Some(seed));
            let result = RandomRestartSolver::new(1)
                .solve(&KnapsackState::new(4, 3), &abc(), &mut rng)
                .unwrap();

            assert!(result.best.is_feasible());
            assert!(result.points >= 0);
            assert!(result.points <= 15);
            assert_eq!(result.iterations, 1);
        }
    }

    #[test]
    fn test_greedy_pass_is_maximal() {
        // Every pass scans the whole permutation, so no skipped item can
        // still fit at the end.
        let catalog = abc();
        let mut rng = create_rng(Some(3));
        let result = RandomRestartSolver::new(1)
            .solve(&KnapsackState::new(4, 3), &catalog, &mut rng)
            .unwrap();

        for item in &catalog {
            if !result.best.items().contains(item) {
                assert!(!result.best.has_room(item), "{item} still fits");
            }
        }
    }

    #[test]
    fn test_many_trials_reach_optimum() {
        let mut rng = create_rng(Some(42));
        let result = RandomRestartSolver::new(200)
            .solve(&KnapsackState::new(4, 3), &abc(), &mut rng)
            .unwrap();
        assert_eq!(result.points, 15);
    }

    #[test]
    fn test_run_is_reproducible_with_seed() {
        let catalog: ItemCatalog = (0..15)
            .map(|i| {
                Item::new(
                    format!("i{i}"),
                    (i * 7) % 11,
                    i % 5 + 1,
                    (i * 3) % 4 + 1,
                )
            })
            .collect();
        let solver = RandomRestartSolver::new(30).with_seed(99);

        let first = solver.run(&KnapsackState::new(12, 10), &catalog).unwrap();
        let second = solver.run(&KnapsackState::new(12, 10), &catalog).unwrap();
        assert_eq!(first.best, second.best);
    }

    #[test]
    fn test_zero_trials_rejected() {
        let mut rng = create_rng(Some(1));
        let err = RandomRestartSolver::new(0)
            .solve(&KnapsackState::new(4, 3), &abc(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_catalog() {
        let mut rng = create_rng(Some(1));
        let result = RandomRestartSolver::new(3)
            .solve(&KnapsackState::new(4, 3), &ItemCatalog::new(), &mut rng)
            .unwrap();
        assert_eq!(result.points, 0);
        assert!(result.best.items().is_empty());
    }
}
