//! Game rules: marking cells and detecting a bingo.
//!
//! - `MarkedSet`: Toggle-based set of marked numbers
//! - `win`: Row, column, and diagonal completion checks
//!
//! Both are pure. The session decides when to run them and what to emit.

pub mod marks;
pub mod win;

pub use marks::{Mark, MarkedSet};
pub use win::{first_winning_line, is_bingo, is_line_complete, winning_lines, LineCells, WinLine};
