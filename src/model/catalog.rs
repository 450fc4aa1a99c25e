//! Ordered item collection.

use std::fmt;
use std::ops::Index;

use super::item::Item;
use crate::error::{KnapsackError, Result};

/// An ordered, indexable sequence of [`Item`]s.
///
/// Used both for the full problem catalog and for the selection held by a
/// [`KnapsackState`](super::KnapsackState). Insertion order is preserved.
///
/// # Examples
///
/// ```
/// use u_knapsack::model::{Item, ItemCatalog};
///
/// let catalog: ItemCatalog = vec![
///     Item::new("A", 10, 2, 1),
///     Item::new("B", 6, 3, 2),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(-1).unwrap().name(), "B");
/// assert_eq!(catalog.total_points(), 16);
/// assert!(catalog.get(2).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`.
    ///
    /// Negative indices count from the end (`-1` is the last item).
    ///
    /// # Errors
    ///
    /// [`KnapsackError::OutOfBounds`] if `index` is outside `[-len, len)`.
    pub fn get(&self, index: isize) -> Result<&Item> {
        let len = self.items.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index as usize).filter(|&i| i < len)
        };
        resolved
            .and_then(|i| self.items.get(i))
            .ok_or(KnapsackError::OutOfBounds { index, len })
    }

    /// Appends an item at the end.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first item equal to `item`.
    ///
    /// Returns `false` (and leaves the catalog untouched) if there is none.
    pub fn remove(&mut self, item: &Item) -> bool {
        match self.items.iter().position(|candidate| candidate == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the item at position `index`.
    ///
    /// # Errors
    ///
    /// [`KnapsackError::OutOfBounds`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<Item> {
        if index >= self.items.len() {
            return Err(KnapsackError::OutOfBounds {
                index: index as isize,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    /// Sum of the points of all items.
    ///
    /// Catalogs built by [`io::load`](crate::io::load) are checked so that
    /// none of the three totals overflows.
    pub fn total_points(&self) -> i64 {
        self.items.iter().map(Item::points).sum()
    }

    /// Sum of the weights of all items.
    pub fn total_weight(&self) -> i64 {
        self.items.iter().map(Item::weight).sum()
    }

    /// Sum of the volumes of all items.
    pub fn total_volume(&self) -> i64 {
        self.items.iter().map(Item::volume).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }
}

impl Index<usize> for ItemCatalog {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

impl From<Vec<Item>> for ItemCatalog {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl FromIterator<Item> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Item> for ItemCatalog {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for ItemCatalog {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItemCatalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// One item name per line.
impl fmt::Display for ItemCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
