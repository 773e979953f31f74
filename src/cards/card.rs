//! The bingo card: a square grid of distinct numbers.
//!
//! Numbers are stored as one flat row-major sequence. Cell `(row, col)`
//! lives at index `row * dimension + col`. A side table maps each number
//! back to its cell for O(1) lookups when the player taps a cell.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::{BingoError, Dimension, Result};

/// A generated card. Immutable once built; a new round builds a new card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    dimension: Dimension,
    numbers: Vec<u8>,
    #[serde(skip)]
    positions: FxHashMap<u8, usize>,
}

impl Card {
    /// Build a card from explicit row-major numbers.
    ///
    /// ```
    /// use rust_bingo::cards::Card;
    /// use rust_bingo::core::Dimension;
    ///
    /// let card = Card::from_numbers(Dimension::new(2).unwrap(), vec![4, 8, 15, 16]).unwrap();
    /// assert_eq!(card.get(1, 0), 15);
    /// assert_eq!(card.position(16), Some((1, 1)));
    /// ```
    pub fn from_numbers(dimension: Dimension, numbers: Vec<u8>) -> Result<Self> {
        if numbers.len() != dimension.cells() {
            return Err(BingoError::MalformedCard {
                expected: dimension.cells(),
                found: numbers.len(),
            });
        }

        let mut positions = FxHashMap::default();
        positions.reserve(numbers.len());
        for (index, &number) in numbers.iter().enumerate() {
            if positions.insert(number, index).is_some() {
                return Err(BingoError::DuplicateNumber { number });
            }
        }

        Ok(Self {
            dimension,
            numbers,
            positions,
        })
    }

    /// Side length.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// All numbers in row-major order.
    #[must_use]
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Cards always have at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Number at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the card.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        let side = self.dimension.get();
        assert!(row < side && col < side, "Cell ({row}, {col}) outside {side}x{side} card");
        self.numbers[row * side + col]
    }

    /// Number at a flat row-major index.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<u8> {
        self.numbers.get(index).copied()
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.numbers.chunks(self.dimension.get())
    }

    /// One row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[u8] {
        let side = self.dimension.get();
        &self.numbers[row * side..(row + 1) * side]
    }

    /// Iterate over one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = u8> + '_ {
        self.numbers
            .iter()
            .skip(col)
            .step_by(self.dimension.get())
            .copied()
    }

    /// Does the card show this number?
    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        self.positions.contains_key(&number)
    }

    /// Flat index of a number.
    #[must_use]
    pub fn index_of(&self, number: u8) -> Option<usize> {
        self.positions.get(&number).copied()
    }

    /// `(row, col)` of a number.
    #[must_use]
    pub fn position(&self, number: u8) -> Option<(usize, usize)> {
        let side = self.dimension.get();
        self.index_of(number).map(|index| (index / side, index % side))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|n| format!("{n:>3}")).collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_by_three() -> Card {
        Card::from_numbers(Dimension::new(3).unwrap(), (1..=9).collect()).unwrap()
    }

    #[test]
    fn test_from_numbers_rejects_wrong_length() {
        let err = Card::from_numbers(Dimension::new(3).unwrap(), vec![1, 2, 3]).unwrap_err();
        assert_eq!(err, BingoError::MalformedCard { expected: 9, found: 3 });
    }

    #[test]
    fn test_from_numbers_rejects_duplicates() {
        let err = Card::from_numbers(Dimension::new(2).unwrap(), vec![1, 2, 2, 3]).unwrap_err();
        assert_eq!(err, BingoError::DuplicateNumber { number: 2 });
    }

    #[test]
    fn test_row_major_layout() {
        let card = three_by_three();
        assert_eq!(card.get(0, 0), 1);
        assert_eq!(card.get(0, 2), 3);
        assert_eq!(card.get(2, 0), 7);
        assert_eq!(card.row(1), &[4, 5, 6]);
        assert_eq!(card.column(2).collect::<Vec<_>>(), vec![3, 6, 9]);
        assert_eq!(card.rows().count(), 3);
    }

    #[test]
    fn test_lookup() {
        let card = three_by_three();
        assert!(card.contains(5));
        assert!(!card.contains(10));
        assert_eq!(card.index_of(6), Some(5));
        assert_eq!(card.position(8), Some((2, 1)));
        assert_eq!(card.position(42), None);
        assert_eq!(card.at(8), Some(9));
        assert_eq!(card.at(9), None);
    }

    #[test]
    fn test_position_matches_get() {
        let card = Card::from_numbers(Dimension::new(2).unwrap(), vec![40, 7, 93, 12]).unwrap();
        for &number in card.numbers() {
            let (row, col) = card.position(number).unwrap();
            assert_eq!(card.get(row, col), number);
        }
    }

    #[test]
    #[should_panic(expected = "outside 3x3 card")]
    fn test_get_out_of_bounds() {
        let _ = three_by_three().get(3, 0);
    }

    #[test]
    fn test_display() {
        let card = Card::from_numbers(Dimension::new(2).unwrap(), vec![1, 22, 33, 100]).unwrap();
        assert_eq!(card.to_string(), "  1  22\n 33 100");
    }

    #[test]
    fn test_serialize() {
        let card = Card::from_numbers(Dimension::new(1).unwrap(), vec![7]).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"dimension":1,"numbers":[7]}"#);
    }
}
