//! Core engine types: dimensions, errors, player identifiers, RNG, configuration.
//!
//! These are the building blocks shared by card generation, win rules,
//! and the session.

pub mod config;
pub mod dimension;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    AnnouncementConfig, CardConfig, OversizePolicy, SessionConfig, DEFAULT_POOL_MAX,
    DEFAULT_POOL_MIN,
};
pub use dimension::Dimension;
pub use error::{BingoError, Result};
pub use player::PlayerUid;
pub use rng::GameRng;
