//! Perturb-and-refill improvement search.

use rand::Rng;
use tracing::{debug, info};

use super::config::RandomConfig;
use super::restart::RandomRestartSolver;
use crate::error::{KnapsackError, Result};
use crate::model::{ItemCatalog, KnapsackState};
use crate::solver::{create_rng, SolveResult, Solver};

/// Heuristic that improves a random-restart solution by small random
/// perturbations.
///
/// One trial:
///
/// 1. Copy the best selection and drop one uniformly chosen item.
/// 2. Rebuild the state from the original capacities and the remaining
///    items.
/// 3. Draw uniformly from the whole catalog and admit draws until one does
///    not fit. Drawing a catalog row that is already selected changes
///    nothing; identical rows are still separate items.
/// 4. Replace the best state only if the result scores strictly higher.
///
/// # Preconditions
///
/// The starting solution must select at least one item; otherwise
/// [`KnapsackError::EmptySelection`] is returned. In practice this means
/// at least one catalog item must fit into the empty knapsack.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomImprovementSolver {
    config: RandomConfig,
}

impl Default for RandomImprovementSolver {
    fn default() -> Self {
        Self::new(5000)
    }
}

impl RandomImprovementSolver {
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

    /// Produces one perturbed neighbour of `best`.
    fn perturb<R: Rng + ?Sized>(
        &self,
        best: &KnapsackState,
        catalog: &ItemCatalog,
        rng: &mut R,
    ) -> Result<KnapsackState> {
        if best.items().is_empty() {
            return Err(KnapsackError::EmptySelection);
        }

        let mut remaining = best.items().clone();
        let victim = rng.random_range(0..remaining.len());
        remaining.remove_at(victim)?;

        let mut candidate =
            KnapsackState::reconstruct(best.max_weight(), best.max_volume(), remaining.iter());

        let mut selected = claim_catalog_slots(catalog, candidate.items());
        let mut unselected = selected.iter().filter(|&&s| !s).count();

        while unselected > 0 {
            let index = rng.random_range(0..catalog.len());
            if selected[index] {
                continue;
            }
            if !candidate.add_item(&catalog[index]) {
                break;
            }
            selected[index] = true;
            unselected -= 1;
        }

        Ok(candidate)
    }
}

/// Marks which catalog rows `selection` occupies.
///
/// Each selected item claims the first unclaimed equal row, so identical
/// rows stay distinct: a selection holding one copy leaves the other copy
/// drawable.
fn claim_catalog_slots(catalog: &ItemCatalog, selection: &ItemCatalog) -> Vec<bool> {
    let mut claimed = vec![false; catalog.len()];
    for item in selection {
        if let Some(slot) = (0..catalog.len()).find(|&i| !claimed[i] && catalog[i] == *item) {
            claimed[slot] = true;
        }
    }
    claimed
}

impl Solver for RandomImprovementSolver {
    fn name(&self) -> &'static str {
        "random_improved"
    }

    fn solve<R: Rng + ?Sized>(
        &self,
        initial: &KnapsackState,
        catalog: &ItemCatalog,
        rng: &mut R,
    ) -> Result<SolveResult> {
        self.config.validate()?;

        let start = RandomRestartSolver::new(1).solve(initial, catalog, rng)?;
        let mut best = start.best;
        let mut improvements = 0usize;
        debug!(points = best.points(), "starting point");

        for trial in 0..self.config.trials {
            let candidate = self.perturb(&best, catalog, rng)?;
            if candidate.points() > best.points() {
                improvements += 1;
                debug!(trial, points = candidate.points(), "new best");
                best = candidate;
            }
        }

        let result = SolveResult::new(best, self.config.trials, improvements);
        info!(
            solver = self.name(),
            points = result.points,
            trials = result.iterations,
            improvements = result.improvements,
            "search finished"
        );
        Ok(result)
    }
}
