use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn settings(self) -> DifficultySettings {
        match self {
            Self::Easy => DifficultySettings::new(8, 10, 0.08),
            Self::Medium => DifficultySettings::new(12, 20, 0.06),
            Self::Hard => DifficultySettings::new(16, 40, 0.04),
        }
    }
}

/// Board parameters for one difficulty level.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub board_size: Coord,
    pub mines_count: CellCount,
    /// Probability that a safe cell is turned into a gold cell.
    pub gold_chance: f64,
}

impl DifficultySettings {
    pub const fn new(board_size: Coord, mines_count: CellCount, gold_chance: f64) -> Self {
        Self {
            board_size,
            mines_count,
            gold_chance,
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.board_size, self.board_size)
    }
}
