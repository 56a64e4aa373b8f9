use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only copy of everything a renderer needs, with unrevealed mines hidden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub cells: Array2<CellView>,
    pub score: CellCount,
    pub flags_count: CellCount,
    pub mine_count: CellCount,
    pub outcome: Outcome,
}

impl Snapshot {
    pub fn from_session<P: MinePlacer>(session: &GameSession<P>) -> Self {
        let board = session.board();
        let size = board.size();
        let mut cells = Array2::from_elem(size.to_nd_index(), CellView::Hidden);
        for cell in board.iter() {
            cells[cell.coords().to_nd_index()] = cell.view();
        }

        Self {
            size,
            cells,
            score: session.score(),
            flags_count: session.flags_count(),
            mine_count: session.mine_count(),
            outcome: session.outcome(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }

    /// Iterates rows from top to bottom, each yielding its cells left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellView> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}
