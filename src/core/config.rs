//! Session configuration types.
//!
//! Shells configure the engine at startup by providing:
//! - `CardConfig`: The number pool and what to do with oversized cards
//! - `AnnouncementConfig`: Speech and dialog texts for a win
//! - `SessionConfig`: Combines all configuration
//!
//! The defaults reproduce the classic game: numbers 1-100, oversized
//! dimensions rejected, "Bingo!" spoken in Spanish.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Smallest number in the default pool.
pub const DEFAULT_POOL_MIN: u8 = 1;

/// Largest number in the default pool.
pub const DEFAULT_POOL_MAX: u8 = 100;

/// What to do when a dimension needs more numbers than the pool holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OversizePolicy {
    /// Refuse to generate; the player must enter a smaller size.
    #[default]
    Reject,
    /// Shrink the dimension to the largest one the pool can fill.
    Clamp,
}

/// Configuration for card generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Smallest number that can appear on a card.
    pub pool_min: u8,

    /// Largest number that can appear on a card.
    pub pool_max: u8,

    /// Handling of dimensions whose square exceeds the pool size.
    pub oversize: OversizePolicy,
}

impl CardConfig {
    /// Create a card configuration drawing from `pool_min..=pool_max`.
    pub fn new(pool_min: u8, pool_max: u8) -> Self {
        assert!(pool_min <= pool_max, "Number pool must not be empty");

        Self {
            pool_min,
            pool_max,
            oversize: OversizePolicy::default(),
        }
    }

    /// Set the oversize policy.
    #[must_use]
    pub fn with_oversize(mut self, policy: OversizePolicy) -> Self {
        self.oversize = policy;
        self
    }

    /// Clamp oversized dimensions instead of rejecting them.
    #[must_use]
    pub fn clamping(self) -> Self {
        self.with_oversize(OversizePolicy::Clamp)
    }

    /// The closed range of numbers cards are drawn from.
    #[must_use]
    pub fn pool(&self) -> RangeInclusive<u8> {
        self.pool_min..=self.pool_max
    }

    /// How many distinct numbers the pool holds.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        usize::from(self.pool_max - self.pool_min) + 1
    }

    /// Largest dimension whose square fits in the pool.
    #[must_use]
    pub fn max_dimension(&self) -> usize {
        let pool = self.pool_size();
        let mut side = 1;
        while (side + 1) * (side + 1) <= pool {
            side += 1;
        }
        side
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_MIN, DEFAULT_POOL_MAX)
    }
}

/// Texts used when a win is announced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementConfig {
    /// Phrase handed to the speech engine.
    pub phrase: String,

    /// BCP 47 locale for speech.
    pub locale: String,

    /// Dialog title.
    pub title: String,

    /// Dialog body.
    pub message: String,

    /// Label of the single dismissal button.
    pub accept_label: String,
}

impl AnnouncementConfig {
    /// Set the spoken phrase.
    #[must_use]
    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrase = phrase.into();
        self
    }

    /// Set the speech locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the dialog title and body.
    #[must_use]
    pub fn with_dialog(mut self, title: impl Into<String>, message: impl Into<String>) -> Self {
        self.title = title.into();
        self.message = message.into();
        self
    }
}

impl Default for AnnouncementConfig {
    fn default() -> Self {
        Self {
            phrase: "Bingo!".into(),
            locale: "es-ES".into(),
            title: "BINGO!".into(),
            message: "Congratulations, you win!".into(),
            accept_label: "Accept".into(),
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Card generation settings.
    pub card: CardConfig,

    /// Win announcement settings.
    pub announcement: AnnouncementConfig,
}

impl SessionConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the card settings.
    #[must_use]
    pub fn with_card(mut self, card: CardConfig) -> Self {
        self.card = card;
        self
    }

    /// Replace the announcement settings.
    #[must_use]
    pub fn with_announcement(mut self, announcement: AnnouncementConfig) -> Self {
        self.announcement = announcement;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool() {
        let config = CardConfig::default();
        assert_eq!(config.pool(), 1..=100);
        assert_eq!(config.pool_size(), 100);
        assert_eq!(config.max_dimension(), 10);
        assert_eq!(config.oversize, OversizePolicy::Reject);
    }

    #[test]
    fn test_max_dimension_small_pools() {
        assert_eq!(CardConfig::new(1, 1).max_dimension(), 1);
        assert_eq!(CardConfig::new(1, 3).max_dimension(), 1);
        assert_eq!(CardConfig::new(1, 4).max_dimension(), 2);
        assert_eq!(CardConfig::new(1, 75).max_dimension(), 8);
        assert_eq!(CardConfig::new(0, 255).max_dimension(), 16);
    }

    #[test]
    fn test_card_config_builder() {
        let config = CardConfig::new(10, 60).clamping();
        assert_eq!(config.pool_size(), 51);
        assert_eq!(config.oversize, OversizePolicy::Clamp);
    }

    #[test]
    #[should_panic(expected = "Number pool must not be empty")]
    fn test_empty_pool() {
        CardConfig::new(5, 4);
    }

    #[test]
    fn test_announcement_defaults() {
        let config = AnnouncementConfig::default();
        assert_eq!(config.phrase, "Bingo!");
        assert_eq!(config.locale, "es-ES");
        assert_eq!(config.title, "BINGO!");
        assert_eq!(config.message, "Congratulations, you win!");
        assert_eq!(config.accept_label, "Accept");
    }

    #[test]
    fn test_session_config_builder() {
        let config = SessionConfig::new()
            .with_card(CardConfig::new(1, 25))
            .with_announcement(
                AnnouncementConfig::default()
                    .with_phrase("Line!")
                    .with_locale("en-GB")
                    .with_dialog("LINE", "Nice one"),
            );

        assert_eq!(config.card.max_dimension(), 5);
        assert_eq!(config.announcement.phrase, "Line!");
        assert_eq!(config.announcement.locale, "en-GB");
        assert_eq!(config.announcement.title, "LINE");
        assert_eq!(config.announcement.message, "Nice one");
    }

    #[test]
    fn test_config_serialization() {
        let config = SessionConfig::new().with_card(CardConfig::default().clamping());
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
