//! Exhaustive search with an explicit work stack.

use rand::Rng;
use tracing::{debug, info, trace};

use crate::error::Result;
use crate::model::{ItemCatalog, KnapsackState};
use crate::solver::{SolveResult, Solver};

/// Exact solver equivalent to
/// [`ExhaustiveRecursiveSolver`](super::ExhaustiveRecursiveSolver) but
/// driven by a heap-allocated stack of `(state, index)` pairs, so catalog
/// size is not limited by the call stack.
///
/// Leaves are compared with `>=`: among leaves with equal points, the one
/// popped last is kept.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveIterativeSolver;

impl Solver for ExhaustiveIterativeSolver {
    fn name(&self) -> &'static str {
        "optimal_iterative"
    }

    fn solve<R: Rng + ?Sized>(
        &self,
        initial: &KnapsackState,
        catalog: &ItemCatalog,
        _rng: &mut R,
    ) -> Result<SolveResult> {
        debug!(items = catalog.len(), "starting iterative exhaustive search");

        let mut stack: Vec<(KnapsackState, isize)> = Vec::with_capacity(catalog.len() + 1);
        stack.push((initial.branch(), catalog.len() as isize - 1));

        let mut best: Option<KnapsackState> = None;
        let mut leaves = 0usize;
        let mut improvements = 0usize;

        while let Some((state, index)) = stack.pop() {
            if index < 0 {
                leaves += 1;
                trace!(points = state.points(), "leaf");
                if best
                    .as_ref()
                    .is_none_or(|current| state.points() >= current.points())
                {
                    if best.is_some() {
                        improvements += 1;
                    }
                    best = Some(state);
                }
                continue;
            }

            let item = catalog.get(index)?;
            let mut with_item = state.branch();
            let admitted = with_item.add_item(item);

            stack.push((state, index - 1));
            if admitted {
                stack.push((with_item, index - 1));
            }
        }

        // The all-excluded path always reaches a leaf.
        let best = best.unwrap_or_else(|| initial.branch());
        let result = SolveResult::new(best, leaves, improvements);
        info!(
            solver = self.name(),
            points = result.points,
            leaves = result.iterations,
            "search finished"
        );
        Ok(result)
    }
}
