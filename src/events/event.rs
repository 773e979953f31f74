//! Session event types.
//!
//! The session queues an event for every state change a shell may want to
//! render: a new card, a toggled cell, a win, a return to setup. Shells
//! drain the queue after each operation.

use serde::{Deserialize, Serialize};

use crate::core::{AnnouncementConfig, Dimension};
use crate::rules::{Mark, WinLine};

/// Something that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new card replaced the previous one. All marks were cleared.
    CardGenerated {
        /// Size of the new card.
        dimension: Dimension,
        /// True when the player asked for a new card with the same size.
        regenerated: bool,
    },

    /// A cell was tapped.
    CellToggled {
        /// The number on the tapped cell.
        number: u8,
        /// Its state after the tap.
        mark: Mark,
    },

    /// The toggle left at least one line complete.
    Bingo(Announcement),

    /// The player left the card and is back at dimension entry.
    ReturnedToSetup,
}

impl SessionEvent {
    /// The announcement carried by a `Bingo` event.
    #[must_use]
    pub fn announcement(&self) -> Option<&Announcement> {
        match self {
            SessionEvent::Bingo(announcement) => Some(announcement),
            _ => None,
        }
    }
}

/// A win notification: what to say and what dialog to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// The line that completed (first in evaluation order).
    pub line: WinLine,

    /// Phrase for the speech engine.
    pub phrase: String,

    /// Speech locale.
    pub locale: String,

    /// Dialog title.
    pub title: String,

    /// Dialog body.
    pub message: String,

    /// Label of the dismissal button.
    pub accept_label: String,
}

impl Announcement {
    /// Build an announcement for `line` using the configured texts.
    pub fn new(line: WinLine, config: &AnnouncementConfig) -> Self {
        Self {
            line,
            phrase: config.phrase.clone(),
            locale: config.locale.clone(),
            title: config.title.clone(),
            message: config.message.clone(),
            accept_label: config.accept_label.clone(),
        }
    }
}
