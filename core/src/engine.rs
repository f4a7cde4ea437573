use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    Continuing,
    Lost,
    Won,
}

/// Result of a single [`GameEngine::reveal`] call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub outcome: RevealOutcome,
    /// Cells uncovered by this call, including the mine on a loss.
    pub revealed: BTreeSet<Coord2>,
}

impl Reveal {
    pub const fn unchanged() -> Self {
        Self {
            outcome: RevealOutcome::Continuing,
            revealed: BTreeSet::new(),
        }
    }

    pub fn has_update(&self) -> bool {
        !self.revealed.is_empty()
    }
}

/// What should be drawn for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Mine,
    Revealed(u8),
}

#[derive(Clone, Debug)]
pub struct GameEngine<G = RandomMineGenerator> {
    config: GameConfig,
    generator: G,
    board: Board,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl GameEngine<RandomMineGenerator> {
    /// Starts a game with random mines, seeded from `seed` or the wall clock.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let generator = match seed {
            Some(seed) => RandomMineGenerator::new(seed),
            None => RandomMineGenerator::from_clock(),
        };
        log::debug!("Mine generator seeded with {}", generator.seed());
        Self::with_generator(config, generator)
    }
}

impl<G: MineGenerator> GameEngine<G> {
    pub fn with_generator(config: GameConfig, mut generator: G) -> Result<Self> {
        config.validate()?;
        let board = Self::generate_board(&mut generator, config)?;
        log::debug!(
            "New game on a {}x{} grid with {} mines",
            config.size,
            config.size,
            config.mines
        );
        Ok(Self {
            config,
            generator,
            board,
            status: GameStatus::Playing,
            triggered_mine: None,
        })
    }

    /// Throws the current board away and starts over with a freshly generated layout.
    pub fn new_game(&mut self) -> Result<()> {
        self.board = Self::generate_board(&mut self.generator, self.config)?;
        self.status = GameStatus::Playing;
        self.triggered_mine = None;
        log::debug!(
            "New game on a {}x{} grid with {} mines",
            self.config.size,
            self.config.size,
            self.config.mines
        );
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.board.revealed_count()
    }

    pub fn safe_cells_left(&self) -> CellCount {
        self.board
            .safe_cell_count()
            .saturating_sub(self.board.revealed_count())
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        if !self.board.is_revealed(coords) {
            CellView::Hidden
        } else if self.board.is_mine(coords) {
            CellView::Mine
        } else {
            CellView::Revealed(self.board.neighbor_mine_count(coords))
        }
    }

    /// Uncovers `start`, cascading through every connected cell without adjacent mines.
    ///
    /// Cells with at least one adjacent mine are revealed but never expand further. Coordinates outside the grid
    /// are ignored.
    pub fn reveal(&mut self, start: Coord2) -> Result<Reveal> {
        self.check_playing()?;

        if !self.board.is_in_bounds(start) || self.board.is_revealed(start) {
            return Ok(Reveal::unchanged());
        }

        let side = usize::from(self.board.size());
        let mut visited: Array2<bool> = Array2::default([side, side]);
        let mut revealed = BTreeSet::new();
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let Some(index) = coords.to_nd_index(self.board.size()) else {
                continue;
            };
            if visited[index] || self.board.is_revealed(coords) {
                continue;
            }
            visited[index] = true;
            self.board.mark_revealed(coords);
            revealed.insert(coords);

            if self.board.is_mine(coords) {
                log::debug!("Mine hit at {:?}", coords);
                self.triggered_mine = Some(coords);
                self.status = GameStatus::Lost;
                return Ok(Reveal {
                    outcome: RevealOutcome::Lost,
                    revealed,
                });
            }

            if self.board.neighbor_mine_count(coords) == 0 {
                to_visit.extend(NeighborIter::new(coords));
            }
        }

        log::trace!("Revealed {} cells from {:?}", revealed.len(), start);

        let outcome = if self.board.all_safe_revealed() {
            log::debug!("All {} safe cells revealed", self.board.safe_cell_count());
            self.status = GameStatus::Won;
            RevealOutcome::Won
        } else {
            RevealOutcome::Continuing
        };
        Ok(Reveal { outcome, revealed })
    }

    /// Asks `generator` for a board and rejects any whose shape or mine count disagrees with `config`.
    fn generate_board(generator: &mut G, config: GameConfig) -> Result<Board> {
        let board = generator.generate(config)?;
        let issue = if board.size() != config.size {
            ConfigIssue::SizeMismatch
        } else if board.mine_count() != config.mines {
            ConfigIssue::MineCountMismatch
        } else {
            return Ok(board);
        };
        log::warn!(
            "Generated board is {}x{} with {} mines, expected {}x{} with {}",
            board.size(),
            board.size(),
            board.mine_count(),
            config.size,
            config.size,
            config.mines
        );
        Err(issue.into())
    }

    fn check_playing(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }

    #[cfg(test)]
    pub(crate) fn board(&self) -> &Board {
        &self.board
    }
}
