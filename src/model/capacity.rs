//! Remaining-capacity bookkeeping.

use super::item::Item;

/// Tracks the weight and volume still available in a knapsack.
///
/// After every successful [`try_admit`](Self::try_admit) both counters
/// are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapacityTracker {
    remaining_weight: i64,
    remaining_volume: i64,
}

impl CapacityTracker {
    pub fn new(weight: i64, volume: i64) -> Self {
        Self {
            remaining_weight: weight,
            remaining_volume: volume,
        }
    }

    pub fn remaining_weight(&self) -> i64 {
        self.remaining_weight
    }

    pub fn remaining_volume(&self) -> i64 {
        self.remaining_volume
    }

    /// Whether `item` fits in both dimensions. Does not mutate.
    pub fn has_room(&self, item: &Item) -> bool {
        item.weight() <= self.remaining_weight && item.volume() <= self.remaining_volume
    }

    /// Consumes the item's weight and volume if it fits.
    ///
    /// Returns `false` without touching the counters otherwise.
    pub fn try_admit(&mut self, item: &Item) -> bool {
        if !self.has_room(item) {
            return false;
        }
        self.remaining_weight -= item.weight();
        self.remaining_volume -= item.volume();
        true
    }
}
