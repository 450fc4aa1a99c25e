//! Search state: capacity tracker plus selected items.

use super::capacity::CapacityTracker;
use super::catalog::ItemCatalog;
use super::item::Item;

/// A (partial) knapsack: the items selected so far and the room left.
///
/// The state keeps the capacities it was created with so that children
/// can be rebuilt from scratch by [`reconstruct`](Self::reconstruct)
/// instead of sharing or incrementally patching a parent's tracker.
///
/// Invariant: the selected weights and volumes never sum past
/// `max_weight` / `max_volume`. Points are always derived from the
/// selection.
///
/// # Examples
///
/// ```
/// use u_knapsack::model::{Item, KnapsackState};
///
/// let mut state = KnapsackState::new(4, 3);
/// assert!(state.add_item(&Item::new("A", 10, 2, 1)));
/// assert!(!state.add_item(&Item::new("B", 6, 3, 2)));
/// assert_eq!(state.points(), 10);
/// assert_eq!(state.resources(), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackState {
    max_weight: i64,
    max_volume: i64,
    tracker: CapacityTracker,
    items: ItemCatalog,
}

impl KnapsackState {
    /// Creates an empty knapsack with the given capacities.
    pub fn new(max_weight: i64, max_volume: i64) -> Self {
        Self {
            max_weight,
            max_volume,
            tracker: CapacityTracker::new(max_weight, max_volume),
            items: ItemCatalog::new(),
        }
    }

    /// Builds a fresh state by replaying [`add_item`](Self::add_item) for
    /// every item against a tracker set to `(max_weight, max_volume)`.
    ///
    /// Items that no longer fit at their turn are dropped, so the result
    /// is always feasible.
    pub fn reconstruct<'a, I>(max_weight: i64, max_volume: i64, items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut state = Self::new(max_weight, max_volume);
        for item in items {
            state.add_item(item);
        }
        state
    }

    /// Reconstructs an independent copy of this state from its original
    /// capacities and current selection.
    pub fn branch(&self) -> Self {
        Self::reconstruct(self.max_weight, self.max_volume, self.items.iter())
    }

    /// Admits `item` if it fits, appending it to the selection.
    ///
    /// Either both the tracker and the selection change, or neither does.
    pub fn add_item(&mut self, item: &Item) -> bool {
        if !self.tracker.try_admit(item) {
            return false;
        }
        self.items.push(item.clone());
        true
    }

    /// Removes the first selected item equal to `item`.
    ///
    /// Remaining capacity is *not* given back. Rebuild the state with
    /// [`reconstruct`](Self::reconstruct) before admitting anything else.
    pub fn remove_item(&mut self, item: &Item) -> bool {
        self.items.remove(item)
    }

    /// Total points of the selection.
    pub fn points(&self) -> i64 {
        self.items.total_points()
    }

    /// `(remaining_weight, remaining_volume)`.
    pub fn resources(&self) -> (i64, i64) {
        (
            self.tracker.remaining_weight(),
            self.tracker.remaining_volume(),
        )
    }

    /// Whether `item` would currently be admitted.
    pub fn has_room(&self, item: &Item) -> bool {
        self.tracker.has_room(item)
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    pub fn max_weight(&self) -> i64 {
        self.max_weight
    }

    pub fn max_volume(&self) -> i64 {
        self.max_volume
    }

    /// Checks the capacity invariant against the selection itself,
    /// independently of the tracker.
    pub fn is_feasible(&self) -> bool {
        self.items.total_weight() <= self.max_weight && self.items.total_volume() <= self.max_volume
    }
}
