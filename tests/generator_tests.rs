use std::collections::HashSet;

use bpg::{generate, GenError, GenOptions, Orientation, Puzzle, Ship};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Expand a ship into its occupied (row, col) pairs.
fn body_cells(ship: &Ship) -> Vec<(i16, i16)> {
    let (dr, dc) = match ship.orientation() {
        Orientation::Horizontal => (0, 1),
        Orientation::Vertical => (1, 0),
        Orientation::Undefined => (0, 0),
    };
    (0..ship.size())
        .map(|i| (ship.head().row + dr * i, ship.head().col + dc * i))
        .collect()
}

fn assert_valid_puzzle(puzzle: &Puzzle) {
    // fixed fleet composition, largest first
    let sizes: Vec<i16> = puzzle.ships().iter().map(|s| s.size()).collect();
    assert_eq!(sizes, vec![4, 3, 3, 2, 2, 2, 1, 1, 1, 1]);

    // key matches the ship placements cell for cell
    let rows = puzzle.rows() as i16;
    let cols = puzzle.cols() as i16;
    let mut expected = vec![' '; (rows * cols) as usize];
    for ship in puzzle.ships() {
        for (r, c) in body_cells(ship) {
            assert!(r >= 0 && r < rows && c >= 0 && c < cols, "body cell off board");
            let idx = (r * cols + c) as usize;
            assert_eq!(expected[idx], ' ', "two ships share a cell");
            expected[idx] = ship.kind().letter();
        }
    }
    assert_eq!(puzzle.key(), expected.iter().collect::<String>());

    // no two distinct ships are 8-adjacent
    for (i, a) in puzzle.ships().iter().enumerate() {
        for b in puzzle.ships().iter().skip(i + 1) {
            for (ar, ac) in body_cells(a) {
                for (br, bc) in body_cells(b) {
                    let touching = (ar - br).abs() <= 1 && (ac - bc).abs() <= 1;
                    assert!(!touching, "ships {:?} and {:?} touch", a, b);
                }
            }
        }
    }
}

#[test]
fn test_generate_batch_of_five() {
    let mut rng = SmallRng::seed_from_u64(42);
    let puzzles = generate(GenOptions::new(10, 10, 5), &mut rng).unwrap();
    assert_eq!(puzzles.len(), 5);

    let mut keys = HashSet::new();
    for puzzle in &puzzles {
        assert_eq!(puzzle.rows(), 10);
        assert_eq!(puzzle.cols(), 10);
        assert_eq!(puzzle.key().len(), 100);
        assert_valid_puzzle(puzzle);
        assert!(keys.insert(puzzle.key().to_string()), "duplicate key in batch");
    }
}

#[test]
fn test_generate_rectangular_board() {
    let mut rng = SmallRng::seed_from_u64(7);
    let puzzles = generate(GenOptions::new(7, 16, 3), &mut rng).unwrap();
    assert_eq!(puzzles.len(), 3);
    for puzzle in &puzzles {
        assert_eq!(puzzle.key().len(), 7 * 16);
        assert_valid_puzzle(puzzle);
    }
}

#[test]
fn test_minimum_board_terminates() {
    // 7x7 is tight for the fleet: either a valid puzzle comes out or the
    // bounded restart budget trips. It must not hang.
    let mut rng = SmallRng::seed_from_u64(1);
    match generate(GenOptions::new(7, 7, 1), &mut rng) {
        Ok(puzzles) => {
            assert_eq!(puzzles.len(), 1);
            assert_valid_puzzle(&puzzles[0]);
        }
        Err(GenError::GenerationExhausted { attempts }) => assert!(attempts > 0),
        Err(e) => panic!("unexpected error: {}", e),
    }
}

#[test]
fn test_same_seed_same_batch() {
    let opts = GenOptions::new(10, 10, 4);
    let run = |seed: u64| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate(opts, &mut rng)
            .unwrap()
            .iter()
            .map(|p| p.key().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(123), run(123));
    assert_ne!(run(123), run(124));
}

#[test]
fn test_invalid_dimensions_rejected() {
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        generate(GenOptions::new(6, 10, 1), &mut rng).unwrap_err(),
        GenError::InvalidDimensions { rows: 6, cols: 10 }
    );
    assert_eq!(
        generate(GenOptions::new(10, 17, 1), &mut rng).unwrap_err(),
        GenError::InvalidDimensions { rows: 10, cols: 17 }
    );
}

#[test]
fn test_invalid_puzzle_count_rejected() {
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        generate(GenOptions::new(10, 10, 0), &mut rng).unwrap_err(),
        GenError::InvalidPuzzleCount(0)
    );
    assert_eq!(
        generate(GenOptions::new(10, 10, 101), &mut rng).unwrap_err(),
        GenError::InvalidPuzzleCount(101)
    );
}

#[test]
fn test_default_options() {
    let opts = GenOptions::default();
    assert_eq!((opts.rows, opts.cols, opts.n_puzzles), (10, 10, 1));
    assert!(opts.validate().is_ok());
}
