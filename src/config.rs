use crate::common::GenError;
use crate::ship::ShipKind;

pub const MIN_ROWS: u16 = 7;
pub const MAX_ROWS: u16 = 16;
pub const MIN_COLS: u16 = 7;
pub const MAX_COLS: u16 = 16;
pub const MIN_N_PUZZLES: u16 = 1;
pub const MAX_N_PUZZLES: u16 = 100;

pub const DEFAULT_ROWS: u16 = 10;
pub const DEFAULT_COLS: u16 = 10;
pub const DEFAULT_N_PUZZLES: u16 = 1;

pub const NUM_SHIPS: usize = 10;

/// Fixed fleet for every puzzle, largest ship first. Committing the most
/// constrained pieces early keeps fragmentation-driven restarts down.
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Battleship,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Cruiser,
    ShipKind::Cruiser,
    ShipKind::Cruiser,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
];

/// Validated running options for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenOptions {
    pub rows: u16,
    pub cols: u16,
    pub n_puzzles: u16,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            n_puzzles: DEFAULT_N_PUZZLES,
        }
    }
}

impl GenOptions {
    pub fn new(rows: u16, cols: u16, n_puzzles: u16) -> Self {
        Self {
            rows,
            cols,
            n_puzzles,
        }
    }

    /// Reject out-of-range options before any generation work starts.
    pub fn validate(&self) -> Result<(), GenError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.rows) || !(MIN_COLS..=MAX_COLS).contains(&self.cols)
        {
            return Err(GenError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(MIN_N_PUZZLES..=MAX_N_PUZZLES).contains(&self.n_puzzles) {
            return Err(GenError::InvalidPuzzleCount(self.n_puzzles));
        }
        Ok(())
    }
}
