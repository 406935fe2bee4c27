use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything the presentation layer can ask of the engine.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    StartGame {
        mode: GameMode,
        players: usize,
        difficulty: Difficulty,
        seed: u64,
    },
    Reveal(Coord2),
    ToggleFlag(Coord2),
    SetMinePenalty(i32),
    ResetToMenu,
}

impl GameState {
    pub fn apply(&self, action: &Action) -> Self {
        match *action {
            Action::StartGame {
                mode,
                players,
                difficulty,
                seed,
            } => self.start_game(mode, players, difficulty, seed),
            Action::Reveal(coords) => self.reveal(coords),
            Action::ToggleFlag(coords) => self.toggle_flag(coords),
            Action::SetMinePenalty(value) => self.set_mine_penalty(value),
            Action::ResetToMenu => self.reset_to_menu(),
        }
    }
}

/// Owner of the current snapshot.
///
/// Inputs are queued and applied one at a time in arrival order, each against the snapshot the
/// previous one produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    state: GameState,
    pending: VecDeque<Action>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            pending: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn enqueue(&mut self, action: Action) {
        self.pending.push_back(action);
    }

    /// Drains the queue, returning how many actions changed the state.
    pub fn process(&mut self) -> usize {
        let mut changed = 0;
        while let Some(action) = self.pending.pop_front() {
            let next = self.state.apply(&action);
            if next != self.state {
                changed += 1;
            }
            self.state = next;
        }
        changed
    }

    /// Queues `action` behind anything pending and processes the whole queue.
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        self.enqueue(action);
        self.process();
        &self.state
    }
}
