use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Source of fresh boards for a [`GameEngine`].
///
/// Every call is expected to produce a new, independent layout for `config`.
pub trait MineGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Board>;
}
