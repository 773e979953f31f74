//! Bingo cards and their generation.
//!
//! - `Card`: The square grid of distinct numbers shown to the player
//! - `CardGenerator`: Samples a new card from the configured number pool

pub mod card;
pub mod generator;

pub use card::Card;
pub use generator::CardGenerator;
