use alloc::vec::Vec;

use super::*;

/// Always lays out the same mines, for scripted games and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetMineGenerator {
    mines: Vec<Coord2>,
}

impl PresetMineGenerator {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MineGenerator for PresetMineGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Board> {
        config.validate()?;
        let board = Board::from_mine_coords(config.size, &self.mines)?;
        if board.mine_count() != config.mines {
            log::warn!(
                "Preset layout has {} distinct mines but {} were configured",
                board.mine_count(),
                config.mines
            );
            return Err(ConfigIssue::MineCountMismatch.into());
        }
        Ok(board)
    }
}
