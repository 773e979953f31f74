//! The marked set: numbers the player has tapped on the current card.
//!
//! Backed by an `im` persistent set so the UI can hold a snapshot of the
//! marks while the session keeps mutating its own copy.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

/// Marking state of a single cell after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The number was added to the marked set.
    Marked,
    /// The number was removed from the marked set.
    Unmarked,
}

impl Mark {
    /// Is the cell marked?
    #[must_use]
    pub fn is_marked(self) -> bool {
        matches!(self, Mark::Marked)
    }
}

/// Set of marked numbers. Insertion order is irrelevant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedSet {
    numbers: ImHashSet<u8>,
}

impl MarkedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `number` and report the new state.
    ///
    /// Applying the same toggle twice restores the previous set.
    ///
    /// ```
    /// use rust_bingo::rules::{Mark, MarkedSet};
    ///
    /// let mut marks = MarkedSet::new();
    /// assert_eq!(marks.toggle(7), Mark::Marked);
    /// assert_eq!(marks.toggle(7), Mark::Unmarked);
    /// assert!(marks.is_empty());
    /// ```
    pub fn toggle(&mut self, number: u8) -> Mark {
        if self.numbers.remove(&number).is_some() {
            Mark::Unmarked
        } else {
            self.numbers.insert(number);
            Mark::Marked
        }
    }

    /// Is `number` marked?
    #[must_use]
    pub fn is_marked(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    /// Are all of `numbers` marked?
    ///
    /// Vacuously true for an empty iterator.
    pub fn all_marked(&self, numbers: impl IntoIterator<Item = u8>) -> bool {
        numbers.into_iter().all(|n| self.is_marked(n))
    }

    /// Number of marked cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// No cells marked?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Unmark everything.
    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    /// Iterate over marked numbers in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.numbers.iter().copied()
    }

    /// Marked numbers in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Vec<u8> {
        let mut numbers: Vec<u8> = self.iter().collect();
        numbers.sort_unstable();
        numbers
    }
}

impl FromIterator<u8> for MarkedSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            numbers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_membership() {
        let mut marks = MarkedSet::new();
        assert_eq!(marks.toggle(5), Mark::Marked);
        assert!(marks.is_marked(5));
        assert_eq!(marks.len(), 1);

        assert_eq!(marks.toggle(5), Mark::Unmarked);
        assert!(!marks.is_marked(5));
        assert!(marks.is_empty());
    }

    #[test]
    fn test_toggle_is_own_inverse() {
        let mut marks: MarkedSet = [1, 2, 3].into_iter().collect();
        let before = marks.clone();

        marks.toggle(2);
        assert_ne!(marks, before);
        marks.toggle(2);
        assert_eq!(marks, before);

        marks.toggle(9);
        marks.toggle(9);
        assert_eq!(marks, before);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_toggles() {
        let mut marks = MarkedSet::new();
        marks.toggle(1);
        let snapshot = marks.clone();

        marks.toggle(2);
        assert!(!snapshot.is_marked(2));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_all_marked() {
        let marks: MarkedSet = [1, 2, 3].into_iter().collect();
        assert!(marks.all_marked([1, 3]));
        assert!(!marks.all_marked([1, 4]));
        assert!(marks.all_marked(std::iter::empty()));
    }

    #[test]
    fn test_clear_and_sorted() {
        let mut marks: MarkedSet = [9, 3, 5].into_iter().collect();
        assert_eq!(marks.sorted(), vec![3, 5, 9]);
        marks.clear();
        assert!(marks.is_empty());
    }

    #[test]
    fn test_mark_is_marked() {
        assert!(Mark::Marked.is_marked());
        assert!(!Mark::Unmarked.is_marked());
    }

    #[test]
    fn test_serialization() {
        let marks: MarkedSet = [4, 8].into_iter().collect();
        let json = serde_json::to_string(&marks).unwrap();
        let deserialized: MarkedSet = serde_json::from_str(&json).unwrap();
        assert_eq!(marks, deserialized);
    }
}
