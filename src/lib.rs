//! Two-constraint 0/1 knapsack solvers.
//!
//! Given a knapsack with a maximum weight and volume and a catalog of
//! indivisible items (points, weight, volume), select the subset with the
//! most points that fits both capacities.
//!
//! - **Exhaustive search**: exact enumeration of the include/exclude
//!   decision tree, as a recursive and as an explicit-stack solver.
//! - **Random restart**: greedy fill over random permutations of the
//!   catalog.
//! - **Random improvement**: perturb-and-refill local search starting from
//!   a random restart solution.
//!
//! All solvers implement [`solver::Solver`] and operate on the shared
//! [`model`] types. Search states are never aliased between branches:
//! children are rebuilt from the original capacities and an item list.
//!
//! # Example
//!
//! ```
//! use u_knapsack::model::{Item, ItemCatalog, KnapsackState};
//! use u_knapsack::exhaustive::ExhaustiveIterativeSolver;
//! use u_knapsack::solver::{create_rng, Solver};
//!
//! let catalog = ItemCatalog::from(vec![
//!     Item::new("A", 10, 2, 1),
//!     Item::new("B", 6, 3, 2),
//!     Item::new("C", 5, 1, 1),
//! ]);
//! let result = ExhaustiveIterativeSolver
//!     .solve(&KnapsackState::new(4, 3), &catalog, &mut create_rng(None))
//!     .unwrap();
//! assert_eq!(result.points, 15);
//! ```

pub mod error;
pub mod exhaustive;
pub mod io;
pub mod model;
pub mod random;
pub mod solver;

pub use error::{KnapsackError, Result};
