#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod types;

/// Grid side length and mine count of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const CLASSIC: Self = Self::new_unchecked(15, 20);

    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Checks `size ≥ 1`, `mines ≥ 1` and `mines < size²`.
    pub fn validate(&self) -> Result<()> {
        let issue = if self.size == 0 {
            ConfigIssue::EmptyGrid
        } else if self.mines == 0 {
            ConfigIssue::NoMines
        } else if self.mines >= self.total_cells() {
            ConfigIssue::TooManyMines
        } else {
            return Ok(());
        };
        log::warn!(
            "Rejected config with size {} and {} mines: {}",
            self.size,
            self.mines,
            issue
        );
        Err(issue.into())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}
