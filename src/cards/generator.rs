//! Card generation: uniform sampling without replacement.
//!
//! The whole pool is shuffled and the first `dimension²` numbers become the
//! card in row-major order. No value has a fixed position and the card is
//! not sorted.

use tracing::{debug, warn};

use super::card::Card;
use crate::core::{BingoError, CardConfig, Dimension, GameRng, OversizePolicy, Result};

/// Builds cards from a configured number pool.
#[derive(Clone, Debug, Default)]
pub struct CardGenerator {
    config: CardConfig,
}

impl CardGenerator {
    /// Create a generator for the given pool.
    pub fn new(config: CardConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Apply the oversize policy to a requested dimension.
    ///
    /// Returns the dimension the card will actually have.
    pub fn resolve_dimension(&self, requested: Dimension) -> Result<Dimension> {
        let pool = self.config.pool_size();
        // Compare sides, not squares: huge sides overflow when squared.
        if requested.get() <= self.config.max_dimension() {
            return Ok(requested);
        }

        match self.config.oversize {
            OversizePolicy::Reject => Err(BingoError::DimensionTooLarge {
                dimension: requested.get(),
                cells: requested.cells(),
                pool,
            }),
            OversizePolicy::Clamp => {
                let clamped = Dimension::new(self.config.max_dimension())?;
                warn!(requested = requested.get(), clamped = clamped.get(), "clamping card dimension to pool size");
                Ok(clamped)
            }
        }
    }

    /// Generate a fresh card.
    ///
    /// ```
    /// use rust_bingo::cards::CardGenerator;
    /// use rust_bingo::core::{Dimension, GameRng};
    ///
    /// let generator = CardGenerator::default();
    /// let card = generator.generate(Dimension::new(5).unwrap(), &mut GameRng::new(42)).unwrap();
    /// assert_eq!(card.len(), 25);
    /// assert!(card.numbers().iter().all(|n| (1..=100).contains(n)));
    /// ```
    pub fn generate(&self, dimension: Dimension, rng: &mut GameRng) -> Result<Card> {
        let dimension = self.resolve_dimension(dimension)?;

        let mut pool: Vec<u8> = self.config.pool().collect();
        rng.shuffle(&mut pool);
        pool.truncate(dimension.cells());

        debug!(%dimension, "generated card");
        Card::from_numbers(dimension, pool)
    }
}
