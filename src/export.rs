//! File output for generated batches: the armada (ship list) and matrix
//! (rendered board) formats.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use log::info;

use crate::puzzle::Puzzle;
use crate::render::{column_headers, render_board};

/// Append `content` plus a trailing newline to the file at `path`,
/// creating it if needed.
fn save_in_file(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{}", content)
}

/// Append a batch in armada format: the puzzle count, then per puzzle its
/// dimensions and one line per placed ship (kind, head row, head col,
/// orientation).
pub fn save_armada(path: &Path, puzzles: &[Puzzle]) -> io::Result<()> {
    let mut content = format!("{}", puzzles.len());
    for puzzle in puzzles {
        content.push_str(&format!("\n{} {}", puzzle.rows(), puzzle.cols()));
        for ship in puzzle.ships() {
            content.push_str(&format!("\n{}", ship));
        }
        content.push('\n');
    }
    save_in_file(path, &content)?;
    info!("wrote {} puzzles in armada format to {}", puzzles.len(), path.display());
    Ok(())
}

/// Append a batch in matrix format: the puzzle count, then per puzzle its
/// dimensions, column-number headers, and the rendered board rows.
pub fn save_matrix(path: &Path, puzzles: &[Puzzle]) -> io::Result<()> {
    let mut content = format!("{}", puzzles.len());
    for puzzle in puzzles {
        content.push_str(&format!("\n{} {}", puzzle.rows(), puzzle.cols()));
        for header in column_headers(puzzle.cols()) {
            content.push_str(&format!("\n{}", header));
        }
        content.push('\n');
        let board = render_board(puzzle.key(), puzzle.rows(), puzzle.cols());
        content.push_str(board.trim_end_matches('\n'));
    }
    save_in_file(path, &content)?;
    info!("wrote {} puzzles in matrix format to {}", puzzles.len(), path.display());
    Ok(())
}
