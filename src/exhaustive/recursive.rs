//! Depth-first exhaustive search on the call stack.

use rand::Rng;
use tracing::{debug, info, trace};

use crate::error::Result;
use crate::model::{ItemCatalog, KnapsackState};
use crate::solver::{SolveResult, Solver};

/// Exact solver that recurses over the include/exclude decision for each
/// catalog item, last item first.
///
/// Recursion depth equals the catalog length. On equal points the branch
/// without the current item wins.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveRecursiveSolver;

#[derive(Default)]
struct Counters {
    leaves: usize,
    improvements: usize,
}

impl ExhaustiveRecursiveSolver {
    fn explore(
        &self,
        state: KnapsackState,
        catalog: &ItemCatalog,
        index: isize,
        counters: &mut Counters,
    ) -> Result<KnapsackState> {
        if index < 0 {
            counters.leaves += 1;
            trace!(points = state.points(), "leaf");
            return Ok(state);
        }

        let item = catalog.get(index)?;
        let mut with_item = state.branch();
        let admitted = with_item.add_item(item);
        let without_item = state;

        let best_without = self.explore(without_item, catalog, index - 1, counters)?;
        if !admitted {
            return Ok(best_without);
        }

        let best_with = self.explore(with_item, catalog, index - 1, counters)?;
        if best_with.points() > best_without.points() {
            counters.improvements += 1;
            Ok(best_with)
        } else {
            Ok(best_without)
        }
    }
}

impl Solver for ExhaustiveRecursiveSolver {
    fn name(&self) -> &'static str {
        "optimal_recursive"
    }

    fn solve<R: Rng + ?Sized>(
        &self,
        initial: &KnapsackState,
        catalog: &ItemCatalog,
        _rng: &mut R,
    ) -> Result<SolveResult> {
        debug!(items = catalog.len(), "starting recursive exhaustive search");

        let mut counters = Counters::default();
        let last = catalog.len() as isize - 1;
        let best = self.explore(initial.branch(), catalog, last, &mut counters)?;

        let result = SolveResult::new(best, counters.leaves, counters.improvements);
        info!(
            solver = self.name(),
            points = result.points,
            leaves = result.iterations,
            "search finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;
    use crate::solver::create_rng;

    fn abc() -> ItemCatalog {
        ItemCatalog::from(vec![
            Item::new("A", 10, 2, 1),
            Item::new("B", 6, 3, 2),
            Item::new("C", 5, 1, 1),
        ])
    }

    fn names(state: &KnapsackState) -> Vec<&str> {
        let mut names: Vec<&str> = state.items().iter().map(Item::name).collect();
        names.sort_unstable();
        names
    }

    #[test]
    fn test_recursive_finds_optimum() {
        let mut rng = create_rng(Some(42));
        let result = ExhaustiveRecursiveSolver
            .solve(&KnapsackState::new(4, 3), &abc(), &mut rng)
            .unwrap();

        assert_eq!(result.points, 15);
        assert_eq!(names(&result.best), vec!["A", "C"]);
        assert_eq!(result.best.resources(), (1, 1));
    }

    #[test]
    fn test_recursive_empty_catalog() {
        let mut rng = create_rng(Some(42));
        let result = ExhaustiveRecursiveSolver
            .solve(&KnapsackState::new(4, 3), &ItemCatalog::new(), &mut rng)
            .unwrap();

        assert_eq!(result.points, 0);
        assert_eq!(result.iterations, 1);
        assert!(result.best.items().is_empty());
    }

    #[test]
    fn test_recursive_nothing_fits() {
        let mut rng = create_rng(Some(42));
        let result = ExhaustiveRecursiveSolver
            .solve(&KnapsackState::new(0, 0), &abc(), &mut rng)
            .unwrap();

        assert_eq!(result.points, 0);
        // only the all-excluded path is feasible
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_recursive_visits_every_feasible_leaf() {
        let mut rng = create_rng(Some(42));
        let result = ExhaustiveRecursiveSolver
            .solve(&KnapsackState::new(100, 100), &abc(), &mut rng)
            .unwrap();

        assert_eq!(result.iterations, 8);
        assert_eq!(result.points, 21);
    }

    #[test]
    fn test_recursive_tie_keeps_without_branch() {
        // X and Y are interchangeable; the last item (Y) is decided first
        // and excluding it wins the tie.
        let catalog = ItemCatalog::from(vec![
            Item::new("X", 5, 1, 1),
            Item::new("Y", 5, 1, 1),
        ]);
        let mut rng = create_rng(Some(42));
        let result = ExhaustiveRecursiveSolver
            .solve(&KnapsackState::new(1, 1), &catalog, &mut rng)
            .unwrap();

        assert_eq!(names(&result.best), vec!["X"]);
    }

    #[test]
    fn test_recursive_does_not_touch_initial() {
        let initial = KnapsackState::new(4, 3);
        let mut rng = create_rng(Some(42));
        ExhaustiveRecursiveSolver
            .solve(&initial, &abc(), &mut rng)
            .unwrap();
        assert_eq!(initial, KnapsackState::new(4, 3));
    }
}
