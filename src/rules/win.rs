//! Win detection: rows, columns, and both diagonals.
//!
//! A card is won when every number on at least one line is marked.
//! Lines are checked rows first, then columns, then the main diagonal,
//! then the anti-diagonal. The result is a plain disjunction, so the order
//! only decides which line gets reported when several are complete.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::marks::MarkedSet;
use crate::cards::Card;
use crate::core::Dimension;

/// Cell indices of one line. Inline for cards up to 10x10, the largest the
/// default pool can fill.
pub type LineCells = SmallVec<[usize; 10]>;

/// A line that can complete a bingo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinLine {
    /// Row by 0-based index.
    Row(usize),
    /// Column by 0-based index.
    Column(usize),
    /// Cells `(i, i)`.
    MainDiagonal,
    /// Cells `(i, dimension - 1 - i)`.
    AntiDiagonal,
}

impl WinLine {
    /// Every line on a card of the given size, in evaluation order.
    ///
    /// ```
    /// use rust_bingo::core::Dimension;
    /// use rust_bingo::rules::WinLine;
    ///
    /// let lines: Vec<_> = WinLine::all(Dimension::new(3).unwrap()).collect();
    /// assert_eq!(lines.len(), 8);
    /// assert_eq!(lines[0], WinLine::Row(0));
    /// assert_eq!(lines[7], WinLine::AntiDiagonal);
    /// ```
    pub fn all(dimension: Dimension) -> impl Iterator<Item = WinLine> {
        let side = dimension.get();
        (0..side)
            .map(WinLine::Row)
            .chain((0..side).map(WinLine::Column))
            .chain([WinLine::MainDiagonal, WinLine::AntiDiagonal])
    }

    /// Row-major cell indices covered by this line.
    #[must_use]
    pub fn cells(self, dimension: Dimension) -> LineCells {
        let side = dimension.get();
        match self {
            WinLine::Row(r) => (0..side).map(|c| r * side + c).collect(),
            WinLine::Column(c) => (0..side).map(|r| r * side + c).collect(),
            WinLine::MainDiagonal => (0..side).map(|i| i * side + i).collect(),
            WinLine::AntiDiagonal => (0..side).map(|i| i * side + (side - 1 - i)).collect(),
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinLine::Row(r) => write!(f, "row {}", r + 1),
            WinLine::Column(c) => write!(f, "column {}", c + 1),
            WinLine::MainDiagonal => write!(f, "main diagonal"),
            WinLine::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Is every number on `line` marked?
#[must_use]
pub fn is_line_complete(card: &Card, marks: &MarkedSet, line: WinLine) -> bool {
    let numbers = card.numbers();
    marks.all_marked(line.cells(card.dimension()).into_iter().map(|index| numbers[index]))
}

/// First complete line in evaluation order, if any.
#[must_use]
pub fn first_winning_line(card: &Card, marks: &MarkedSet) -> Option<WinLine> {
    // Fewer marks than a line holds can never win.
    if marks.len() < card.dimension().get() {
        return None;
    }
    WinLine::all(card.dimension()).find(|&line| is_line_complete(card, marks, line))
}

/// Every complete line, in evaluation order.
#[must_use]
pub fn winning_lines(card: &Card, marks: &MarkedSet) -> Vec<WinLine> {
    WinLine::all(card.dimension())
        .filter(|&line| is_line_complete(card, marks, line))
        .collect()
}

/// Does the card have at least one complete line?
#[must_use]
pub fn is_bingo(card: &Card, marks: &MarkedSet) -> bool {
    first_winning_line(card, marks).is_some()
}
