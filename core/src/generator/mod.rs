use crate::*;
pub use random::*;

mod random;

/// Strategy for producing a populated board from a game config.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}
