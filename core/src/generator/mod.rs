use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, settings: DifficultySettings) -> Board;
}
