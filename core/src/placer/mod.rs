use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::*;
pub use fixed::*;
pub use shuffled::*;

mod fixed;
mod shuffled;

/// Strategy for putting mines on a fresh board once the first cell is known.
pub trait MinePlacer {
    /// Places up to `mine_count` mines outside the safe zone around `safe` and returns how many
    /// were actually placed. Called at most once per board.
    fn place_mines(&mut self, board: &mut Board, safe: Coord2, mine_count: CellCount) -> CellCount;
}

/// Distributes mines uniformly at random, keeping the 3x3 block around `safe` clear.
///
/// Every board position is shuffled and walked in that order, so the result does not depend on how
/// the grid is stored. When fewer than `mine_count` positions are available, all of them are
/// mined and the shortfall is logged.
pub fn place_mines<R: Rng + ?Sized>(
    board: &mut Board,
    safe: Coord2,
    mine_count: CellCount,
    rng: &mut R,
) -> CellCount {
    let (rows, cols) = board.size();
    let mut positions: Vec<Coord2> = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .collect();
    positions.shuffle(rng);

    let mut placed: CellCount = 0;
    for coords in positions {
        if placed >= mine_count {
            break;
        }
        if is_within_one(safe, coords) || board[coords].is_mine() {
            continue;
        }
        board[coords].set_mine();
        placed += 1;
    }

    if placed < mine_count {
        log::warn!(
            "Not enough room for mines, requested {} but only placed {}",
            mine_count,
            placed
        );
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn mined(board: &Board) -> Vec<Coord2> {
        board
            .iter()
            .filter(|cell| cell.is_mine())
            .map(|cell| cell.coords())
            .collect()
    }

    #[test]
    fn places_exact_count_outside_safe_zone() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut board = Board::new((9, 9)).unwrap();

        let placed = place_mines(&mut board, (4, 4), 10, &mut rng);

        assert_eq!(placed, 10);
        assert_eq!(board.mine_count(), 10);
        assert!(mined(&board).iter().all(|&pos| !is_within_one((4, 4), pos)));
    }

    #[test]
    fn corner_safe_zone_is_clipped() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut board = Board::new((4, 4)).unwrap();

        // 16 cells, 4 of them in the clipped corner zone
        let placed = place_mines(&mut board, (0, 0), 12, &mut rng);

        assert_eq!(placed, 12);
        for pos in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert!(!board[pos].is_mine());
        }
    }

    #[test]
    fn too_many_mines_degrades_to_all_free_cells() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut board = Board::new((3, 4)).unwrap();

        let placed = place_mines(&mut board, (1, 1), 50, &mut rng);

        // 12 cells minus the full 3x3 zone
        assert_eq!(placed, 3);
        assert_eq!(mined(&board), [(0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let mut first = Board::new((8, 8)).unwrap();
        let mut second = Board::new((8, 8)).unwrap();

        place_mines(&mut first, (3, 3), 12, &mut SmallRng::seed_from_u64(42));
        place_mines(&mut second, (3, 3), 12, &mut SmallRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn zero_mines_leaves_board_untouched() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut board = Board::new((2, 2)).unwrap();

        assert_eq!(place_mines(&mut board, (0, 0), 0, &mut rng), 0);
        assert_eq!(board, Board::new((2, 2)).unwrap());
    }
}
