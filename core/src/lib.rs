#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use leaderboard::*;
pub use player::*;
pub use session::*;
pub use types::*;

mod board;
mod difficulty;
mod engine;
mod error;
mod generator;
mod leaderboard;
mod player;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    Flagged,
    Unflagged,
}

/// What a successful reveal did. `points` is the acting player's score change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    Revealed { points: i32 },
    Gold { points: i32 },
    HitMine { points: i32 },
    Won { points: i32 },
    Lost { points: i32 },
}

impl RevealOutcome {
    pub const fn points(self) -> i32 {
        use RevealOutcome::*;
        match self {
            Revealed { points }
            | Gold { points }
            | HitMine { points }
            | Won { points }
            | Lost { points } => points,
        }
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}
