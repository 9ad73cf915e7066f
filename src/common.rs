//! Common types for the puzzle generator: the error taxonomy.

use core::fmt;

use crate::config::{MAX_COLS, MAX_N_PUZZLES, MAX_ROWS, MIN_COLS, MIN_N_PUZZLES, MIN_ROWS};

/// Errors surfaced by the generator.
///
/// Placement failures and duplicate boards are recovered internally by a
/// whole-board restart and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    /// Rows or columns outside the supported range.
    InvalidDimensions { rows: u16, cols: u16 },
    /// Requested puzzle count outside the supported range.
    InvalidPuzzleCount(u16),
    /// The restart budget for one output slot was exhausted before a fresh
    /// valid board could be produced.
    GenerationExhausted { attempts: usize },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::InvalidDimensions { rows, cols } => write!(
                f,
                "invalid board dimensions {}x{}: rows must be in [{}, {}], cols in [{}, {}]",
                rows, cols, MIN_ROWS, MAX_ROWS, MIN_COLS, MAX_COLS
            ),
            GenError::InvalidPuzzleCount(n) => write!(
                f,
                "invalid number of puzzles {}: must be in [{}, {}]",
                n, MIN_N_PUZZLES, MAX_N_PUZZLES
            ),
            GenError::GenerationExhausted { attempts } => write!(
                f,
                "gave up after {} board attempts: the requested dimensions cannot fit a fresh fleet",
                attempts
            ),
        }
    }
}

impl std::error::Error for GenError {}
