use bpg::{generate, Board, Cell, GenError, GenOptions, Orientation, Ship, ShipKind};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn kind_strategy() -> impl Strategy<Value = ShipKind> {
    prop_oneof![
        Just(ShipKind::Battleship),
        Just(ShipKind::Destroyer),
        Just(ShipKind::Cruiser),
        Just(ShipKind::Submarine),
    ]
}

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_remove_roundtrip(
        kind in kind_strategy(),
        orientation in orientation_strategy(),
        row in 0i16..16,
        col in 0i16..16,
    ) {
        let mut board = Board::new(16, 16);
        let ship = Ship::new(kind, Cell::new(row, col), orientation);
        let empty_key = board.key();
        if board.add_ship(&ship) {
            // a successful add covers exactly `size` cells
            let placed = board.key().chars().filter(|&c| c != ' ').count();
            prop_assert_eq!(placed, ship.size() as usize);
            prop_assert!(board.remove_ship(&ship));
            prop_assert_eq!(board.key(), empty_key);
        } else {
            // a failed add leaves the board untouched
            prop_assert_eq!(board.key(), empty_key);
        }
    }

    #[test]
    fn failed_add_on_occupied_board_changes_nothing(
        row in 0i16..10,
        col in 0i16..10,
        orientation in orientation_strategy(),
    ) {
        let mut board = Board::new(10, 10);
        prop_assert!(board.add_ship(&Ship::new(
            ShipKind::Battleship,
            Cell::new(4, 3),
            Orientation::Horizontal,
        )));
        let key_before = board.key();
        let probe = Ship::new(ShipKind::Destroyer, Cell::new(row, col), orientation);
        let added = board.add_ship(&probe);
        if !added {
            prop_assert_eq!(board.key(), key_before);
        } else {
            prop_assert!(board.remove_ship(&probe));
            prop_assert_eq!(board.key(), key_before);
        }
    }

    #[test]
    fn generated_boards_hold_fleet_invariants(
        seed in any::<u64>(),
        rows in 8u16..=16,
        cols in 8u16..=16,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        match generate(GenOptions::new(rows, cols, 1), &mut rng) {
            // tight boards may legitimately exhaust their restart budget
            Err(GenError::GenerationExhausted { .. }) => {}
            Err(e) => panic!("unexpected error: {}", e),
            Ok(puzzles) => {
                let key = puzzles[0].key();
                prop_assert_eq!(key.len(), rows as usize * cols as usize);
                // cell totals per kind: 1x4 + 2x3 + 3x2 + 4x1
                prop_assert_eq!(key.matches('B').count(), 4);
                prop_assert_eq!(key.matches('D').count(), 6);
                prop_assert_eq!(key.matches('C').count(), 6);
                prop_assert_eq!(key.matches('S').count(), 4);
                prop_assert!(!key.contains('U'));
            }
        }
    }
}
