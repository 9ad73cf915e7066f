//! Board state, the placement engine, and the canonical key encoder.

use crate::ship::{Cell, Orientation, Ship, ShipKind};

/// Symbol a canonical key uses for water cells.
pub const WATER_SYMBOL: char = ' ';

/// Reserved symbol for undefined cells. Never appears in the key of a valid
/// board; kept so the key alphabet matches the payload format.
pub const UNDEFINED_SYMBOL: char = 'U';

/// A `rows x cols` grid where each cell is water or the kind of the ship
/// occupying it. All mutation goes through the placement engine, which is
/// what enforces the no-touch rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    cols: u16,
    cells: Vec<Option<ShipKind>>,
}

impl Board {
    /// Create a board fully filled with water.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Reset every cell to water.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Whether `cell` lies within the board limits.
    pub fn is_inside_board(&self, cell: Cell) -> bool {
        cell.row >= 0 && (cell.row as u16) < self.rows && cell.col >= 0 && (cell.col as u16) < self.cols
    }

    /// Whether the cell at `cell` holds water. `cell` must be inside the
    /// board.
    pub fn is_water(&self, cell: Cell) -> bool {
        self.cells[self.index(cell)].is_none()
    }

    /// Contents of the cell at `cell`, `None` for water. `cell` must be
    /// inside the board.
    pub fn at(&self, cell: Cell) -> Option<ShipKind> {
        self.cells[self.index(cell)]
    }

    fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.is_inside_board(cell));
        cell.row as usize * self.cols as usize + cell.col as usize
    }

    /// The footprint of `ship` expanded by one cell in every direction,
    /// clipped to in-board cells. Empty only when the head lies entirely
    /// outside the board.
    pub fn ship_shadow(&self, ship: &Ship) -> Vec<Cell> {
        self.footprint(ship, -1)
    }

    /// The exact cells occupied by `ship`, clipped to in-board cells.
    pub fn ship_body(&self, ship: &Ship) -> Vec<Cell> {
        self.footprint(ship, 0)
    }

    fn footprint(&self, ship: &Ship, margin: i16) -> Vec<Cell> {
        let limit_row = match ship.orientation() {
            Orientation::Horizontal => 1,
            _ => ship.size(),
        };
        let limit_col = match ship.orientation() {
            Orientation::Vertical => 1,
            _ => ship.size(),
        };
        let head = ship.head();
        let mut cells = Vec::new();
        for dr in margin..limit_row - margin {
            for dc in margin..limit_col - margin {
                let cell = Cell::new(head.row + dr, head.col + dc);
                if self.is_inside_board(cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    /// Try to place `ship`, enforcing board containment and the no-touch
    /// rule in one check: the whole shadow must be water and the clipped
    /// body must match the declared size. On failure the board is left
    /// unchanged.
    pub fn add_ship(&mut self, ship: &Ship) -> bool {
        let shadow = self.ship_shadow(ship);
        if shadow.is_empty() || !shadow.iter().all(|&c| self.is_water(c)) {
            return false;
        }
        let body = self.ship_body(ship);
        if body.len() != ship.size() as usize || !body.iter().all(|&c| self.is_water(c)) {
            return false;
        }
        for cell in body {
            let idx = self.index(cell);
            self.cells[idx] = Some(ship.kind());
        }
        true
    }

    /// Remove `ship` by resetting its entire shadow to water. Fails only
    /// when the shadow is empty.
    pub fn remove_ship(&mut self, ship: &Ship) -> bool {
        let shadow = self.ship_shadow(ship);
        if shadow.is_empty() {
            return false;
        }
        for cell in shadow {
            let idx = self.index(cell);
            self.cells[idx] = None;
        }
        true
    }

    /// Canonical key: one symbol per cell in row-major order, from the
    /// alphabet ` BDCS` (plus the reserved `U`). A pure function of board
    /// contents, independent of placement order.
    pub fn key(&self) -> String {
        self.cells
            .iter()
            .map(|c| match c {
                None => WATER_SYMBOL,
                Some(kind) => kind.letter(),
            })
            .collect()
    }
}
