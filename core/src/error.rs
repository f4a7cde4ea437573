use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already over, no new moves are accepted")]
    GameAlreadyOver,
}

/// Reason a [`GameConfig`](crate::GameConfig) or a preset layout was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("at least one mine is required")]
    NoMines,
    #[error("mine count must be lower than the number of cells")]
    TooManyMines,
    #[error("board size does not match the configured size")]
    SizeMismatch,
    #[error("mine layout does not match the configured mine count")]
    MineCountMismatch,
}

impl From<ConfigIssue> for GameError {
    fn from(issue: ConfigIssue) -> Self {
        Self::InvalidConfiguration(issue)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
