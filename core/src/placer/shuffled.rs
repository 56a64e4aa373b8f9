use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Default placer: a seeded shuffle over the whole board.
///
/// The generator keeps advancing across games, so one placer can serve a whole sequence of new
/// games and still give each its own layout.
#[derive(Clone, Debug)]
pub struct ShuffledMinePlacer {
    rng: SmallRng,
}

impl ShuffledMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MinePlacer for ShuffledMinePlacer {
    fn place_mines(&mut self, board: &mut Board, safe: Coord2, mine_count: CellCount) -> CellCount {
        place_mines(board, safe, mine_count, &mut self.rng)
    }
}
