//! A finished puzzle: dimensions, fleet placements, canonical key.

use serde::Serialize;

use crate::ship::Ship;

/// One accepted puzzle board. Immutable once built: the generator only
/// constructs these after a board has passed placement and uniqueness
/// checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    rows: u16,
    cols: u16,
    ships: Vec<Ship>,
    key: String,
}

impl Puzzle {
    pub(crate) fn new(rows: u16, cols: u16, ships: Vec<Ship>, key: String) -> Self {
        debug_assert_eq!(key.chars().count(), rows as usize * cols as usize);
        Self {
            rows,
            cols,
            ships,
            key,
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// The ten placed ships, in placement order (largest first).
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Row-major canonical key, `rows * cols` symbols long.
    pub fn key(&self) -> &str {
        &self.key
    }
}
