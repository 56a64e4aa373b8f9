use minekeeper_core::*;
use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

/// Board size, a point on it, and a mine count that may exceed what fits.
fn board_and_point() -> impl Strategy<Value = (Coord2, Coord2, CellCount)> {
    (1..=16u8, 1..=16u8).prop_flat_map(|(rows, cols)| {
        (
            Just((rows, cols)),
            (0..rows, 0..cols),
            0..=mult(rows, cols) + 4,
        )
    })
}

fn brute_force_adjacent(board: &Board, (row, col): Coord2) -> u8 {
    let (rows, cols) = board.size();
    let mut count = 0;
    for d_row in -1i16..=1 {
        for d_col in -1i16..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            let r = row as i16 + d_row;
            let c = col as i16 + d_col;
            if r < 0 || c < 0 || r >= rows as i16 || c >= cols as i16 {
                continue;
            }
            if board[(r as u8, c as u8)].is_mine() {
                count += 1;
            }
        }
    }
    count
}

fn in_safe_zone(center: Coord2, coords: Coord2) -> bool {
    center.0.abs_diff(coords.0) <= 1 && center.1.abs_diff(coords.1) <= 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placement_keeps_safe_zone_clear((size, safe, mines) in board_and_point(), seed in any::<u64>()) {
        let mut board = Board::new(size).unwrap();
        let placed = place_mines(&mut board, safe, mines, &mut SmallRng::seed_from_u64(seed));

        let safe_zone = board.iter().filter(|cell| in_safe_zone(safe, cell.coords())).count() as CellCount;
        let free = board.total_cells() - safe_zone;
        prop_assert_eq!(placed, mines.min(free));
        prop_assert_eq!(board.mine_count(), placed);
        for cell in board.iter() {
            if in_safe_zone(safe, cell.coords()) {
                prop_assert!(!cell.is_mine(), "mine at {:?} next to {:?}", cell.coords(), safe);
            }
        }
    }

    #[test]
    fn adjacency_matches_brute_force((size, safe, mines) in board_and_point(), seed in any::<u64>()) {
        let mut board = Board::new(size).unwrap();
        place_mines(&mut board, safe, mines, &mut SmallRng::seed_from_u64(seed));
        board.compute_adjacents();

        for cell in board.iter().filter(|cell| !cell.is_mine()) {
            prop_assert_eq!(cell.adjacent_mines(), brute_force_adjacent(&board, cell.coords()));
        }
    }

    #[test]
    fn reveals_are_monotonic_and_flags_match_recount(
        seed in any::<u64>(),
        mines in 0..30u16,
        moves in prop::collection::vec((any::<bool>(), 0..8u8, 0..8u8), 1..60),
    ) {
        let mut game = GameSession::new(GameConfig::new((8, 8), mines), seed).unwrap();
        let mut was_revealed = vec![false; 64];

        for (flag, row, col) in moves {
            if flag {
                game.toggle_flag((row, col)).unwrap();
            } else {
                game.reveal((row, col)).unwrap();
            }

            prop_assert_eq!(game.flags_count(), game.board().flagged_count());
            prop_assert_eq!(game.score(), game.board().revealed_count());
            for cell in game.board().iter() {
                let index = cell.row() as usize * 8 + cell.col() as usize;
                if was_revealed[index] {
                    prop_assert!(cell.is_revealed(), "{:?} was hidden again", cell.coords());
                }
                was_revealed[index] = cell.is_revealed();
            }
        }
    }

    #[test]
    fn revealing_opened_cells_changes_nothing(seed in any::<u64>(), row in 0..10u8, col in 0..10u8) {
        let mut game = GameSession::new(GameConfig::new((10, 10), 12), seed).unwrap();
        game.reveal((row, col)).unwrap();
        let board = game.board().clone();
        let score = game.score();
        let outcome = game.outcome();

        let opened: Vec<Coord2> = board
            .iter()
            .filter(|cell| cell.is_revealed())
            .map(Cell::coords)
            .collect();
        for coords in opened {
            prop_assert_eq!(game.reveal(coords).unwrap(), RevealOutcome::NoChange);
        }

        prop_assert_eq!(game.board(), &board);
        prop_assert_eq!(game.score(), score);
        prop_assert_eq!(game.outcome(), outcome);
    }

    #[test]
    fn single_mine_board_is_won_exactly_at_last_safe_cell(
        seed in any::<u64>(),
        order in Just((0..25u8).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let mut game = GameSession::new(GameConfig::new((5, 5), 1), seed).unwrap();

        for index in order {
            let coords = (index / 5, index % 5);
            if game.first_move_made() && game.board()[coords].is_mine() {
                continue;
            }
            game.reveal(coords).unwrap();

            if game.board().revealed_safe_count() == 24 {
                prop_assert_eq!(game.outcome(), Outcome::Won);
            } else {
                prop_assert_eq!(game.outcome(), Outcome::InProgress);
            }
        }

        prop_assert_eq!(game.outcome(), Outcome::Won);
        prop_assert_eq!(game.board().mine_count(), 1);
    }
}
