use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement by rejection sampling: draw a cell, retry when it already holds a mine.
///
/// The generator owns its random stream, so consecutive boards are independent while a fixed seed reproduces the
/// whole sequence.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the wall clock.
    pub fn from_clock() -> Self {
        use web_time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Samples `config.mines` distinct cells.
    ///
    /// Callers go through [`MineGenerator::generate`], which validates `config` first: an empty grid would panic
    /// here and `config.mines >= size²` would never terminate.
    pub(crate) fn place_mines(&mut self, config: GameConfig) -> Board {
        let side = config.size;
        let total_cells = config.total_cells();
        let mut board = Board::empty(side);
        let mut rejected = 0usize;

        while board.mine_count() < config.mines {
            let index = self.rng.random_range(0..total_cells);
            // `index < side²`, so both components stay within `1..=side`
            let coords = (
                (index % CellCount::from(side)) as Coord + 1,
                (index / CellCount::from(side)) as Coord + 1,
            );
            if !board.insert_mine(coords) {
                rejected += 1;
            }
        }

        log::trace!(
            "Placed {} mines on a {}x{} grid, {} duplicate draws rejected",
            config.mines,
            side,
            side,
            rejected
        );
        board
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Board> {
        config.validate()?;
        Ok(self.place_mines(config))
    }
}
