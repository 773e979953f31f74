//! Card side length.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{BingoError, Result};

/// Side length of a square card. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Dimension(usize);

impl Dimension {
    /// Create a dimension, rejecting zero.
    pub fn new(side: usize) -> Result<Self> {
        if side == 0 {
            return Err(BingoError::InvalidDimension { input: side.to_string() });
        }
        Ok(Self(side))
    }

    /// Get the side length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of cells on a card of this size.
    ///
    /// Saturates at `usize::MAX` for sides whose square does not fit.
    #[must_use]
    pub const fn cells(self) -> usize {
        self.0.saturating_mul(self.0)
    }
}

/// Parses player input the way the setup screen does: surrounding
/// whitespace is ignored, anything that is not a positive integer is
/// rejected.
impl FromStr for Dimension {
    type Err = BingoError;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = || BingoError::InvalidDimension { input: input.to_string() };
        let side: i64 = input.trim().parse().map_err(|_| invalid())?;
        if side <= 0 {
            return Err(invalid());
        }
        usize::try_from(side).map(Self).map_err(|_| invalid())
    }
}

impl TryFrom<usize> for Dimension {
    type Error = BingoError;

    fn try_from(side: usize) -> Result<Self> {
        Self::new(side)
    }
}

impl From<Dimension> for usize {
    fn from(dimension: Dimension) -> Self {
        dimension.0
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
