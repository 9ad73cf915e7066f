//! Batch generator for Battleship-style puzzle boards.
//!
//! Each puzzle carries a fixed ten-ship fleet placed so that no two ships
//! touch, even diagonally, on a board sized 7x7 to 16x16. Batches are
//! deduplicated by canonical key.

mod board;
mod common;
mod config;
mod export;
mod generator;
mod logging;
mod puzzle;
mod render;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use export::*;
pub use generator::generate;
pub use logging::init_logging;
pub use puzzle::*;
pub use render::*;
pub use ship::*;
