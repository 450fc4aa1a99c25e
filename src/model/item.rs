//! Item value record.

use std::fmt;
use std::sync::Arc;

/// An indivisible item that can be packed into the knapsack.
///
/// Points, weight and volume are non-negative integers. The name is shared
/// behind an `Arc` so that cloning an item during search is cheap.
///
/// Equality is structural over all four fields; two catalog entries with
/// the same name and numbers are indistinguishable.
///
/// # Examples
///
/// ```
/// use u_knapsack::model::Item;
///
/// let item = Item::new("lamp", 10, 2, 1);
/// assert_eq!(item.name(), "lamp");
/// assert_eq!(item.points(), 10);
/// assert_eq!(item.to_string(), "lamp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: Arc<str>,
    points: i64,
    weight: i64,
    volume: i64,
}

impl Item {
    /// Creates an item.
    ///
    /// Negative numbers are accepted here; the loader rejects them at the
    /// boundary.
    pub fn new(name: impl Into<Arc<str>>, points: i64, weight: i64, volume: i64) -> Self {
        Self {
            name: name.into(),
            points,
            weight,
            volume,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> i64 {
        self.points
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn volume(&self) -> i64 {
        self.volume
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
