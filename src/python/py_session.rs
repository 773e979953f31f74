//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{BingoError, CardConfig, OversizePolicy, SessionConfig};
use crate::session::{BingoSession, Screen};

fn to_py_err(err: BingoError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for BingoSession.
#[pyclass(name = "BingoSession")]
pub struct PyBingoSession {
    inner: BingoSession,
}

#[pymethods]
impl PyBingoSession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - seed: RNG seed; random when omitted
    /// - clamp: shrink oversized dimensions instead of rejecting them
    /// - pool_min / pool_max: bounds of the number pool
    #[new]
    #[pyo3(signature = (seed = None, clamp = false, pool_min = 1, pool_max = 100))]
    fn new(seed: Option<u64>, clamp: bool, pool_min: u8, pool_max: u8) -> PyResult<Self> {
        if pool_min > pool_max {
            return Err(PyValueError::new_err("pool_min must not exceed pool_max"));
        }
        let policy = if clamp { OversizePolicy::Clamp } else { OversizePolicy::Reject };
        let config = SessionConfig::new()
            .with_card(CardConfig::new(pool_min, pool_max).with_oversize(policy));

        let inner = match seed {
            Some(seed) => BingoSession::new(config, seed),
            None => BingoSession::from_entropy(config),
        };
        Ok(Self { inner })
    }

    /// Parse a typed size and generate a card. Returns the numbers row-major.
    fn submit_dimension(&mut self, input: &str) -> PyResult<Vec<u8>> {
        self.inner
            .submit_dimension(input)
            .map(|card| card.numbers().to_vec())
            .map_err(to_py_err)
    }

    /// Generate a new card of the same size. Returns the numbers row-major.
    fn regenerate(&mut self) -> PyResult<Vec<u8>> {
        self.inner
            .regenerate()
            .map(|card| card.numbers().to_vec())
            .map_err(to_py_err)
    }

    /// Tap a cell.
    ///
    /// Returns `(marked, winning_line)` where `winning_line` is a
    /// description such as "row 1", or None.
    fn toggle(&mut self, number: u8) -> PyResult<(bool, Option<String>)> {
        let outcome = self.inner.toggle(number).map_err(to_py_err)?;
        Ok((outcome.mark.is_marked(), outcome.bingo.map(|line| line.to_string())))
    }

    /// Return to dimension entry. False when already there.
    fn back(&mut self) -> bool {
        self.inner.back()
    }

    /// Current card numbers, or None on the setup screen.
    #[getter]
    fn card(&self) -> Option<Vec<u8>> {
        self.inner.card().map(|card| card.numbers().to_vec())
    }

    /// Current card side length.
    #[getter]
    fn dimension(&self) -> Option<usize> {
        self.inner.dimension().map(|d| d.get())
    }

    /// Marked numbers in ascending order.
    #[getter]
    fn marked(&self) -> Vec<u8> {
        self.inner.marks().sorted()
    }

    /// Display identifier.
    #[getter]
    fn player_uid(&self) -> String {
        self.inner.player_uid().as_str().to_string()
    }

    /// True while a card is shown.
    #[getter]
    fn playing(&self) -> bool {
        self.inner.screen() == Screen::Playing
    }

    /// Drain queued events and return the wins as
    /// `(title, message, phrase)` tuples.
    fn drain_announcements(&mut self) -> Vec<(String, String, String)> {
        self.inner
            .drain_events()
            .into_iter()
            .filter_map(|event| {
                event
                    .announcement()
                    .map(|a| (a.title.clone(), a.message.clone(), a.phrase.clone()))
            })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "BingoSession(uid={}, screen={})",
            self.inner.player_uid().as_str(),
            self.inner.screen()
        )
    }
}
