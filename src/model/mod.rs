//! Knapsack data model.
//!
//! - [`Item`]: immutable value record (name, points, weight, volume).
//! - [`ItemCatalog`]: ordered, indexable collection of items. Order is
//!   significant: it fixes the enumeration order of the exhaustive solvers
//!   and the sampling domain of the randomized ones.
//! - [`CapacityTracker`]: remaining weight and volume with admission checks.
//! - [`KnapsackState`]: a tracker plus the selected items; the unit of
//!   search state.
//!
//! Child states are never copied from a live parent. They are rebuilt with
//! [`KnapsackState::reconstruct`], which replays the admissions against
//! the original capacities, so sibling branches share no mutable data.

mod capacity;
mod catalog;
mod item;
mod state;

pub use capacity::CapacityTracker;
pub use catalog::ItemCatalog;
pub use item::Item;
pub use state::KnapsackState;
