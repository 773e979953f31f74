//! Error types for card generation and play.
//!
//! Every failure here is recoverable: the session rejects the request and
//! keeps its previous state.

use derive_more::{Display, Error};

/// Errors raised by the bingo engine.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum BingoError {
    /// Dimension input was not a positive whole number.
    #[display("Enter matrix size (got {input:?})")]
    InvalidDimension {
        /// The raw text the player entered.
        input: String,
    },

    /// Dimension needs more unique numbers than the pool holds.
    #[display("a {dimension}x{dimension} card needs {cells} numbers but the pool only has {pool}")]
    DimensionTooLarge {
        /// Requested side length.
        dimension: usize,
        /// Cells the card would need.
        cells: usize,
        /// Numbers available in the pool.
        pool: usize,
    },

    /// Explicit card values do not fill the grid exactly.
    #[display("card needs {expected} numbers, got {found}")]
    MalformedCard {
        /// dimension².
        expected: usize,
        /// Numbers supplied.
        found: usize,
    },

    /// Explicit card values repeat a number.
    #[display("number {number} appears more than once on the card")]
    DuplicateNumber {
        /// The repeated value.
        number: u8,
    },

    /// No card has been generated yet.
    #[display("no card has been generated")]
    NoCard,

    /// The tapped number is not on the current card.
    #[display("number {number} is not on the current card")]
    NotOnCard {
        /// The tapped value.
        number: u8,
    },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, BingoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_message() {
        let err = BingoError::InvalidDimension { input: "abc".into() };
        assert_eq!(err.to_string(), "Enter matrix size (got \"abc\")");
    }

    #[test]
    fn test_dimension_too_large_message() {
        let err = BingoError::DimensionTooLarge { dimension: 11, cells: 121, pool: 100 };
        assert_eq!(
            err.to_string(),
            "a 11x11 card needs 121 numbers but the pool only has 100"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&BingoError::NoCard);
    }
}
