//! Exact exhaustive search.
//!
//! Both solvers walk the binary include/exclude decision tree over the
//! catalog, from the last item down to the first, and return a state with
//! the optimal number of points. Cost is exponential in the catalog size;
//! there is no bound-based pruning, only feasibility.
//!
//! A "with item" branch is explored only when the item is admitted. When
//! admission fails that branch would be identical to the "without item"
//! branch, so skipping it never changes the optimum.
//!
//! The two solvers may return different selections with equal points:
//!
//! - [`ExhaustiveRecursiveSolver`] keeps the "without item" branch on a tie.
//! - [`ExhaustiveIterativeSolver`] visits leaves in LIFO order and lets a
//!   later leaf with equal points replace the current best.

mod iterative;
mod recursive;

pub use iterative::ExhaustiveIterativeSolver;
pub use recursive::ExhaustiveRecursiveSolver;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, ItemCatalog, KnapsackState};
    use crate::solver::{create_rng, Solver};
    use proptest::prelude::*;

    /// Optimum over all `2^n` subsets filtered by feasibility.
    fn brute_force(catalog: &ItemCatalog, max_weight: i64, max_volume: i64) -> i64 {
        let n = catalog.len();
        let mut best = 0;
        for mask in 0u32..(1 << n) {
            let (mut w, mut v, mut p) = (0, 0, 0);
            for (i, item) in catalog.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    w += item.weight();
                    v += item.volume();
                    p += item.points();
                }
            }
            if w <= max_weight && v <= max_volume {
                best = best.max(p);
            }
        }
        best
    }

    fn arb_instance() -> impl Strategy<Value = (Vec<(i64, i64, i64)>, i64, i64)> {
        (
            prop::collection::vec((0i64..50, 0i64..20, 0i64..20), 0..=12),
            0i64..60,
            0i64..60,
        )
    }

    fn to_catalog(raw: &[(i64, i64, i64)]) -> ItemCatalog {
        raw.iter()
            .enumerate()
            .map(|(i, &(p, w, v))| Item::new(format!("item{i}"), p, w, v))
            .collect()
    }

    proptest! {
        #[test]
        fn prop_exhaustive_solvers_match_brute_force((raw, max_w, max_v) in arb_instance()) {
            let catalog = to_catalog(&raw);
            let initial = KnapsackState::new(max_w, max_v);
            let expected = brute_force(&catalog, max_w, max_v);
            let mut rng = create_rng(Some(0));

            let recursive = ExhaustiveRecursiveSolver
                .solve(&initial, &catalog, &mut rng)
                .unwrap();
            let iterative = ExhaustiveIterativeSolver
                .solve(&initial, &catalog, &mut rng)
                .unwrap();

            prop_assert_eq!(recursive.points, expected);
            prop_assert_eq!(iterative.points, expected);
            prop_assert!(recursive.best.is_feasible());
            prop_assert!(iterative.best.is_feasible());
        }
    }
}
