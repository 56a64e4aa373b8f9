use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Both end states are final until a new game is started.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from the first reveal to a win or loss, and the board it is played on.
///
/// Mines are placed lazily by `P` on the first reveal, so the first cell and its neighbors are
/// always safe.
#[derive(Clone, Debug)]
pub struct GameSession<P = ShuffledMinePlacer> {
    config: GameConfig,
    board: Board,
    placer: P,
    first_move_made: bool,
    outcome: Outcome,
    flags_count: CellCount,
}

impl GameSession<ShuffledMinePlacer> {
    /// Starts a session whose mine layouts come from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_placer(config, ShuffledMinePlacer::new(seed))
    }
}

impl<P: MinePlacer> GameSession<P> {
    pub fn with_placer(config: GameConfig, placer: P) -> Result<Self> {
        Ok(Self {
            config,
            board: Board::new(config.size)?,
            placer,
            first_move_made: false,
            outcome: Outcome::InProgress,
            flags_count: 0,
        })
    }

    /// Throws away the current board and starts over with `config`.
    ///
    /// On error the running game is left as it was.
    pub fn new_game(&mut self, config: GameConfig) -> Result<()> {
        self.board = Board::new(config.size)?;
        self.config = config;
        self.first_move_made = false;
        self.outcome = Outcome::InProgress;
        self.flags_count = 0;
        log::debug!("new game: {:?}", config);
        Ok(())
    }

    /// Starts over with the same dimensions and mine count.
    pub fn restart(&mut self) -> Result<()> {
        self.new_game(self.config)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn first_move_made(&self) -> bool {
        self.first_move_made
    }

    /// Number of revealed cells, counted from the board itself.
    ///
    /// Includes flood-filled cells and, after a loss, every uncovered mine.
    pub fn score(&self) -> CellCount {
        self.board.revealed_count()
    }

    pub fn flags_count(&self) -> CellCount {
        self.flags_count
    }

    /// Mines on the board once they are placed, the configured count before that.
    pub fn mine_count(&self) -> CellCount {
        if self.first_move_made {
            self.board.mine_count()
        } else {
            self.config.mines
        }
    }

    /// How many mines have not been flagged yet, negative when there are more flags than mines.
    pub fn mines_left(&self) -> isize {
        (self.mine_count() as isize) - (self.flags_count as isize)
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.board[coords].view())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.outcome.is_finished() || self.board[coords].is_revealed() {
            return Ok(FlagOutcome::NoChange);
        }

        let cell = &mut self.board[coords];
        if cell.is_flagged() {
            cell.set_flagged(false);
            self.flags_count -= 1;
        } else {
            cell.set_flagged(true);
            self.flags_count += 1;
        }
        log::trace!("toggle flag at {:?}, flags: {}", coords, self.flags_count);
        Ok(FlagOutcome::Changed)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        let cell = self.board[coords];
        if self.outcome.is_finished() || cell.is_revealed() || cell.is_flagged() {
            return Ok(RevealOutcome::NoChange);
        }

        if !self.first_move_made {
            let placed = self
                .placer
                .place_mines(&mut self.board, coords, self.config.mines);
            self.board.compute_adjacents();
            self.first_move_made = true;
            log::debug!("first move at {:?}, placed {} mines", coords, placed);
        }

        self.board[coords].reveal();
        log::debug!("reveal at {:?}", coords);

        if self.board[coords].is_mine() {
            self.lose();
            return Ok(RevealOutcome::HitMine);
        }

        if self.board[coords].adjacent_mines() == 0 {
            self.flood_reveal(coords);
        }

        if self.is_won() {
            self.outcome = Outcome::Won;
            log::debug!("game won with score {}", self.score());
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Opens everything reachable from `origin` through zero-count cells, using an explicit stack
    /// so large empty regions cannot exhaust the call stack.
    fn flood_reveal(&mut self, origin: Coord2) {
        let mut to_visit: Vec<Coord2> = self
            .board
            .iter_neighbors(origin)
            .filter(|&pos| !self.board[pos].is_revealed())
            .collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop() {
            let cell = &mut self.board[visit_coords];
            if cell.is_revealed() || cell.is_mine() {
                continue;
            }

            if cell.is_flagged() {
                cell.set_flagged(false);
                self.flags_count -= 1;
            }
            cell.reveal();
            let adjacent_mines = cell.adjacent_mines();
            log::trace!(
                "Flood opened cell at {:?}, mine count: {}",
                visit_coords,
                adjacent_mines
            );

            if adjacent_mines == 0 {
                let board = &self.board;
                to_visit.extend(
                    board
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| !board[pos].is_revealed()),
                );
            }
        }
    }

    fn is_won(&self) -> bool {
        self.board.revealed_safe_count() == self.board.total_cells() - self.board.mine_count()
    }

    fn lose(&mut self) {
        self.outcome = Outcome::Lost;
        for cell in self.board.iter_mut().filter(|cell| cell.is_mine()) {
            cell.reveal();
        }
        log::debug!("game lost with score {}", self.score());
    }
}
