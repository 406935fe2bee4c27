use alloc::format;
use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Number of display colours the presentation layer is expected to provide.
pub const PALETTE_SIZE: u8 = 4;

/// Upper bound on seats in a multiplayer session.
pub const MAX_PLAYERS: usize = 8;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Single,
    Multi,
}

impl GameMode {
    /// Seats actually created for a requested player count.
    pub fn seat_count(self, requested: usize) -> usize {
        match self {
            Self::Single => 1,
            Self::Multi => requested.clamp(1, MAX_PLAYERS),
        }
    }
}

/// One-based seat identifier, displayed as `player1`, `player2`, ...
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Seats past what a `u8` can number share the last id.
    pub fn from_seat(seat: usize) -> Self {
        let seat = u8::try_from(seat).unwrap_or(u8::MAX);
        Self(seat.saturating_add(1))
    }

    pub fn seat(self) -> usize {
        usize::from(self.0.saturating_sub(1))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Running score, negative after enough mine penalties.
    pub score: i32,
    pub mines_hit: u32,
    /// Colour slot in `0..PALETTE_SIZE`; seats past the palette wrap around.
    pub palette_index: u8,
}

impl Player {
    pub fn new(seat: usize) -> Self {
        let id = PlayerId::from_seat(seat);
        Self {
            id,
            name: format!("Player {}", seat + 1),
            score: 0,
            mines_hit: 0,
            palette_index: (seat % PALETTE_SIZE as usize) as u8,
        }
    }

    pub(crate) fn award(&mut self, points: i32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn penalize(&mut self, penalty: i32) {
        self.score = self.score.saturating_sub(penalty);
        self.mines_hit += 1;
    }
}
