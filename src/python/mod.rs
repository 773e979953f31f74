//! Python bindings for the rust-bingo engine.
//!
//! Lets a Python UI drive a session the same way the terminal shell does.
//!
//! # Quick Start
//!
//! ```python
//! import rust_bingo as bingo
//!
//! session = bingo.BingoSession(seed=42)
//! card = session.submit_dimension("3")
//!
//! for number in card[:3]:
//!     marked, line = session.toggle(number)
//!
//! for title, message, phrase in session.drain_announcements():
//!     print(title, message)
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// rust_bingo: bingo card generation and win detection.
#[pymodule]
fn rust_bingo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBingoSession>()?;
    Ok(())
}
