//! Which screen the shell should show.

use serde::{Deserialize, Serialize};

/// Session screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// Dimension entry, with the player ID shown.
    #[default]
    Setup,
    /// A card is on screen and cells can be tapped.
    Playing,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Setup => write!(f, "setup"),
            Screen::Playing => write!(f, "playing"),
        }
    }
}
