use super::*;

/// Places mines on a known list of positions, for puzzles and reproducible games.
///
/// Positions that are out of bounds or inside the safe zone are skipped, so the first reveal stays
/// safe no matter what the list says.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinePlacer {
    mines: Vec<Coord2>,
}

impl FixedMinePlacer {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MinePlacer for FixedMinePlacer {
    fn place_mines(&mut self, board: &mut Board, safe: Coord2, mine_count: CellCount) -> CellCount {
        let mut placed: CellCount = 0;
        for &coords in &self.mines {
            if placed >= mine_count {
                break;
            }
            if board.validate_coords(coords).is_err() {
                log::warn!("Skipping mine outside the board at {:?}", coords);
                continue;
            }
            if is_within_one(safe, coords) {
                log::debug!("Skipping mine in the safe zone at {:?}", coords);
                continue;
            }
            if board[coords].is_mine() {
                continue;
            }
            board[coords].set_mine();
            placed += 1;
        }
        placed
    }
}
