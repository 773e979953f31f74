//! # rust-bingo
//!
//! A single-player bingo card engine with a thin terminal shell.
//!
//! ## Design Principles
//!
//! 1. **Shell-Agnostic**: The engine never draws, speaks, or blocks.
//!    Shells render `CellState`s and drain `SessionEvent`s.
//!
//! 2. **One Owned Session**: All mutable state lives in `BingoSession`,
//!    mutated through `&mut`. No globals, no interior mutability.
//!
//! 3. **Deterministic When Seeded**: Cards and player IDs come from a
//!    seeded ChaCha8 RNG, so any session can be replayed.
//!
//! ## Modules
//!
//! - `core`: Dimensions, errors, player IDs, RNG, configuration
//! - `cards`: Card layout and generation
//! - `rules`: Marked set and win detection
//! - `events`: Session events and the announcer seam
//! - `session`: The session state machine

pub mod cards;
pub mod core;
pub mod events;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    AnnouncementConfig, BingoError, CardConfig, Dimension, GameRng, OversizePolicy, PlayerUid,
    Result, SessionConfig,
};

pub use crate::cards::{Card, CardGenerator};

pub use crate::rules::{
    first_winning_line, is_bingo, is_line_complete, winning_lines, Mark, MarkedSet, WinLine,
};

pub use crate::events::{announce_all, Announcement, Announcer, SessionEvent, TracingAnnouncer};

pub use crate::session::{BingoSession, CellState, Screen, ToggleOutcome};
