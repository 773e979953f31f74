//! Display-only player identifier.
//!
//! ## PlayerUid
//!
//! A short cosmetic tag shown on both screens, shaped like `AEX7K2Q9P`:
//! the fixed prefix `AE`, six characters from `A-Z0-9`, and the suffix `P`.
//! It plays no part in game logic.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

const PREFIX: &str = "AE";
const SUFFIX: &str = "P";
const BODY_LEN: usize = 6;
const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Player identifier for display.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerUid(String);

impl PlayerUid {
    /// Generate a fresh identifier.
    ///
    /// ```
    /// use rust_bingo::core::{GameRng, PlayerUid};
    ///
    /// let uid = PlayerUid::generate(&mut GameRng::new(1));
    /// assert!(uid.as_str().starts_with("AE"));
    /// assert!(uid.as_str().ends_with('P'));
    /// assert_eq!(uid.as_str().len(), 9);
    /// ```
    pub fn generate(rng: &mut GameRng) -> Self {
        let mut uid = String::with_capacity(PREFIX.len() + BODY_LEN + SUFFIX.len());
        uid.push_str(PREFIX);
        for _ in 0..BODY_LEN {
            let index = rng.gen_range_usize(0..ALPHABET.len());
            uid.push(char::from(ALPHABET[index]));
        }
        uid.push_str(SUFFIX);
        Self(uid)
    }

    /// Get the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player ID: {}", self.0)
    }
}
