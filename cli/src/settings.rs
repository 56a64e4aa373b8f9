use minekeeper_core::{CellCount, Coord, GameConfig, mult};

/// Board setup chosen by the player, kept within what the terminal board can show.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl Settings {
    pub const MIN_SIDE: Coord = 5;
    pub const MAX_SIDE: Coord = 18;
    pub const MIN_MINES: CellCount = 1;

    /// Clamps every field into range, logging whatever had to change.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        let clamped_rows = rows.clamp(Self::MIN_SIDE, Self::MAX_SIDE);
        let clamped_cols = cols.clamp(Self::MIN_SIDE, Self::MAX_SIDE);
        let max_mines = Self::max_mines(clamped_rows, clamped_cols);
        let clamped_mines = mines.clamp(Self::MIN_MINES, max_mines);

        if (clamped_rows, clamped_cols, clamped_mines) != (rows, cols, mines) {
            log::warn!(
                "Settings {}x{} with {} mines out of range, using {}x{} with {}",
                rows,
                cols,
                mines,
                clamped_rows,
                clamped_cols,
                clamped_mines
            );
        }

        Self {
            rows: clamped_rows,
            cols: clamped_cols,
            mines: clamped_mines,
        }
    }

    /// At most half the board may be mined.
    pub const fn max_mines(rows: Coord, cols: Coord) -> CellCount {
        mult(rows, cols) / 2
    }

    pub const fn game_config(&self) -> GameConfig {
        GameConfig::new((self.rows, self.cols), self.mines)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 9,
            cols: 9,
            mines: 10,
        }
    }
}
