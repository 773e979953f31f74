//! Consumers of win announcements.
//!
//! Announcing is fire-and-forget: the session never waits on an announcer
//! and never learns whether speech or the dialog succeeded.

use tracing::info;

use super::event::{Announcement, SessionEvent};

/// Receives win announcements from a shell.
pub trait Announcer {
    /// Present one win: speak the phrase and show the dialog.
    fn announce(&mut self, announcement: &Announcement);
}

/// Logs announcements through `tracing`. Useful headless.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAnnouncer;

impl Announcer for TracingAnnouncer {
    fn announce(&mut self, announcement: &Announcement) {
        info!(
            line = %announcement.line,
            locale = %announcement.locale,
            phrase = %announcement.phrase,
            "{}: {}",
            announcement.title,
            announcement.message
        );
    }
}

/// Forward every `Bingo` event in `events` to `announcer`.
///
/// Returns how many announcements were made.
pub fn announce_all<'a>(
    events: impl IntoIterator<Item = &'a SessionEvent>,
    announcer: &mut impl Announcer,
) -> usize {
    let mut count = 0;
    for announcement in events.into_iter().filter_map(SessionEvent::announcement) {
        announcer.announce(announcement);
        count += 1;
    }
    count
}
