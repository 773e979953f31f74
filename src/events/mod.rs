//! Events emitted by a session and the announcer seam for wins.
//!
//! ## Flow
//!
//! 1. A session operation (start, toggle, regenerate, back) queues events
//! 2. The shell drains them with `BingoSession::drain_events`
//! 3. `Bingo` events go to an `Announcer` for speech and the dialog

pub mod announcer;
pub mod event;

pub use announcer::{announce_all, Announcer, TracingAnnouncer};
pub use event::{Announcement, SessionEvent};
