//! Ship and cell definitions used by the board and the placement engine.

use core::fmt;
use serde::Serialize;

/// A location on a puzzle board. Coordinates are signed so that margin
/// offsets may step outside the board before clipping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub row: i16,
    pub col: i16,
}

impl Cell {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }
}

/// Kind of ship occupying a cell. Size is a pure function of kind and is
/// never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShipKind {
    Battleship,
    Destroyer,
    Cruiser,
    Submarine,
}

impl ShipKind {
    /// Number of cells the ship occupies.
    pub const fn size(self) -> i16 {
        match self {
            ShipKind::Battleship => 4,
            ShipKind::Destroyer => 3,
            ShipKind::Cruiser => 2,
            ShipKind::Submarine => 1,
        }
    }

    /// One-letter label used in canonical keys and the armada export.
    pub const fn letter(self) -> char {
        match self {
            ShipKind::Battleship => 'B',
            ShipKind::Destroyer => 'D',
            ShipKind::Cruiser => 'C',
            ShipKind::Submarine => 'S',
        }
    }
}

/// Orientation of a ship on the board. Size-1 ships have no meaningful
/// orientation and always carry `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Undefined,
}

impl Orientation {
    pub const fn letter(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
            Orientation::Undefined => 'U',
        }
    }
}

/// A ship anchored at its head cell, the topmost/leftmost occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ship {
    kind: ShipKind,
    head: Cell,
    orientation: Orientation,
}

impl Ship {
    /// Create a ship of `kind` at `head`. Submarines ignore the requested
    /// orientation and are normalized to `Undefined`.
    pub fn new(kind: ShipKind, head: Cell, orientation: Orientation) -> Self {
        let orientation = if kind.size() == 1 {
            Orientation::Undefined
        } else {
            orientation
        };
        Self {
            kind,
            head,
            orientation,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn head(&self) -> Cell {
        self.head
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells the ship occupies.
    pub fn size(&self) -> i16 {
        self.kind.size()
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.kind.letter(),
            self.head.row,
            self.head.col,
            self.orientation.letter()
        )
    }
}
