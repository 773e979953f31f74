//! Session state shared between the game rules and a UI shell.
//!
//! - `BingoSession`: Owns the card, marks, player ID, and event queue
//! - `Screen`: Setup (dimension entry) or Playing

pub mod screen;
pub mod state;

pub use screen::Screen;
pub use state::{BingoSession, CellState, ToggleOutcome};
