//! Batch orchestration: whole-board placement attempts, restart-on-failure,
//! and batch-wide uniqueness.

use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::GenError;
use crate::config::{GenOptions, FLEET};
use crate::puzzle::Puzzle;
use crate::ship::{Cell, Orientation, Ship, ShipKind};

/// Whole-board attempts allowed per output slot, per board cell. Four
/// attempts per cell is far beyond what any feasible configuration needs
/// while keeping infeasible ones from spinning forever.
const RESTARTS_PER_CELL: usize = 4;

fn restart_budget(opts: GenOptions) -> usize {
    RESTARTS_PER_CELL * opts.rows as usize * opts.cols as usize
}

/// Generate `opts.n_puzzles` distinct puzzles, drawing all randomness from
/// `rng`. Same seed and options produce the same batch.
pub fn generate<R: Rng>(opts: GenOptions, rng: &mut R) -> Result<Vec<Puzzle>, GenError> {
    opts.validate()?;

    let budget = restart_budget(opts);
    let mut seen: HashSet<String> = HashSet::new();
    let mut batch = Vec::with_capacity(opts.n_puzzles as usize);

    for slot in 0..opts.n_puzzles {
        let mut accepted = false;
        for attempt in 0..budget {
            let mut board = Board::new(opts.rows, opts.cols);
            let ships = match place_fleet(&mut board, rng) {
                Some(ships) => ships,
                None => {
                    debug!("slot {}: attempt {} failed placement, restarting", slot, attempt);
                    continue;
                }
            };
            let key = board.key();
            if seen.contains(&key) {
                debug!("slot {}: attempt {} produced a duplicate, restarting", slot, attempt);
                continue;
            }
            seen.insert(key.clone());
            batch.push(Puzzle::new(opts.rows, opts.cols, ships, key));
            accepted = true;
            break;
        }
        if !accepted {
            return Err(GenError::GenerationExhausted { attempts: budget });
        }
    }
    Ok(batch)
}

/// Place the whole fleet, largest ship first, on an empty board. Returns
/// `None` as soon as any ship has exhausted every candidate position, in
/// which case the caller discards the board.
fn place_fleet<R: Rng>(board: &mut Board, rng: &mut R) -> Option<Vec<Ship>> {
    let mut ships = Vec::with_capacity(FLEET.len());
    for kind in FLEET {
        let ship = place_ship(board, kind, rng)?;
        ships.push(ship);
    }
    Some(ships)
}

/// Try candidate (head, orientation) pairs for one ship in shuffled order
/// until one sticks. The scan is exhaustive, so a `None` means no valid
/// position exists on the current board.
fn place_ship<R: Rng>(board: &mut Board, kind: ShipKind, rng: &mut R) -> Option<Ship> {
    let mut candidates = candidate_placements(board, kind);
    candidates.shuffle(rng);
    for (head, orientation) in candidates {
        let ship = Ship::new(kind, head, orientation);
        if board.add_ship(&ship) {
            return Some(ship);
        }
    }
    None
}

fn candidate_placements(board: &Board, kind: ShipKind) -> Vec<(Cell, Orientation)> {
    let orientations: &[Orientation] = if kind.size() == 1 {
        &[Orientation::Undefined]
    } else {
        &[Orientation::Horizontal, Orientation::Vertical]
    };
    let mut candidates =
        Vec::with_capacity(board.rows() as usize * board.cols() as usize * orientations.len());
    for row in 0..board.rows() as i16 {
        for col in 0..board.cols() as i16 {
            for &orientation in orientations {
                candidates.push((Cell::new(row, col), orientation));
            }
        }
    }
    candidates
}
