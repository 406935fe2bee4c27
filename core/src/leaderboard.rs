use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

pub const LEADERBOARD_SIZE: usize = 10;

/// Best finished players across sessions, highest score first.
///
/// Lives for as long as the owning process keeps a `GameState` around; starting or resetting a
/// session carries it over untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<Player>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Player] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Player> {
        self.entries.iter()
    }

    /// Merges a finished session's players in and keeps the top entries.
    ///
    /// The sort is stable, so on equal scores older entries stay ahead of newer ones.
    pub fn record(&mut self, players: &[Player]) {
        self.entries.extend_from_slice(players);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(LEADERBOARD_SIZE);
    }
}

impl<'a> IntoIterator for &'a Leaderboard {
    type Item = &'a Player;
    type IntoIter = core::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
