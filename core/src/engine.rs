use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_MINE_PENALTY: i32 = 5;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Menu,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Complete game snapshot.
///
/// Every operation borrows the current snapshot and hands back a new one, so a snapshot that has
/// been given to a renderer never changes underneath it. Rejected actions return an identical
/// copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    status: GameStatus,
    mode: GameMode,
    difficulty: Difficulty,
    mines_count: CellCount,
    flags_placed: CellCount,
    players: Vec<Player>,
    current_player_index: usize,
    leaderboard: Leaderboard,
    mine_penalty: i32,
    awaiting_first_reveal: bool,
    seed: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Application start: menu on the default difficulty with an empty leaderboard.
    pub fn new() -> Self {
        Self::menu(GameMode::default(), Difficulty::default(), Leaderboard::new())
    }

    fn menu(mode: GameMode, difficulty: Difficulty, leaderboard: Leaderboard) -> Self {
        let settings = difficulty.settings();
        Self {
            board: Board::empty(settings.board_size),
            status: GameStatus::Menu,
            mode,
            difficulty,
            mines_count: settings.mines_count,
            flags_placed: 0,
            players: Vec::new(),
            current_player_index: 0,
            leaderboard,
            mine_penalty: DEFAULT_MINE_PENALTY,
            awaiting_first_reveal: true,
            seed: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mines_count(&self) -> CellCount {
        self.mines_count
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flags_placed
    }

    /// Mines not yet accounted for by a flag.
    pub fn mines_left(&self) -> CellCount {
        self.mines_count.saturating_sub(self.flags_placed)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Players of this session ordered by score, best first.
    pub fn standings(&self) -> Vec<&Player> {
        let mut standings: Vec<_> = self.players.iter().collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score));
        standings
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn mine_penalty(&self) -> i32 {
        self.mine_penalty
    }

    pub fn awaiting_first_reveal(&self) -> bool {
        self.awaiting_first_reveal
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Begins a fresh session. The board is laid out lazily on the first reveal, from `seed`.
    pub fn start_game(
        &self,
        mode: GameMode,
        player_count: usize,
        difficulty: Difficulty,
        seed: u64,
    ) -> Self {
        let seats = mode.seat_count(player_count);
        if seats != player_count {
            log::debug!(
                "Requested {} players for {:?} mode, seating {}",
                player_count,
                mode,
                seats
            );
        }

        let mut next = Self::menu(mode, difficulty, self.leaderboard.clone());
        next.status = GameStatus::Playing;
        next.players = (0..seats).map(Player::new).collect();
        next.seed = seed;

        log::info!(
            "Started {:?} game on {:?} with {} player(s)",
            mode,
            difficulty,
            seats
        );
        next
    }

    /// Back to the menu. Only the leaderboard and the last mode/difficulty survive.
    pub fn reset_to_menu(&self) -> Self {
        Self::menu(self.mode, self.difficulty, self.leaderboard.clone())
    }

    /// Sets the points lost per mine, never below 1. Applies to the next mine revealed.
    pub fn set_mine_penalty(&self, value: i32) -> Self {
        let mut next = self.clone();
        next.mine_penalty = value.max(1);
        next
    }

    pub fn reveal(&self, coords: Coord2) -> Self {
        match self.try_reveal(coords) {
            Ok((next, _)) => next,
            Err(err) => {
                log::debug!("Ignored reveal at {:?}: {}", coords, err);
                self.clone()
            }
        }
    }

    pub fn toggle_flag(&self, coords: Coord2) -> Self {
        match self.try_toggle_flag(coords) {
            Ok((next, _)) => next,
            Err(err) => {
                log::debug!("Ignored flag at {:?}: {}", coords, err);
                self.clone()
            }
        }
    }

    /// Reveals a single cell for the current player and settles score, turn and game end.
    pub fn try_reveal(&self, coords: Coord2) -> Result<(Self, RevealOutcome)> {
        self.check_playing()?;
        let coords = self.board.validate_coords(coords)?;
        let target = &self.board[coords];
        if target.is_revealed {
            return Err(GameError::AlreadyRevealed);
        }
        if target.is_flagged {
            return Err(GameError::Flagged);
        }
        let Some(actor) = self.current_player().map(|player| player.id) else {
            return Err(GameError::NotPlaying);
        };

        let mut next = self.clone();
        if next.awaiting_first_reveal {
            next.lay_out_board(coords);
        }

        let cell = &mut next.board[coords];
        cell.is_revealed = true;
        cell.revealed_by = Some(actor);
        let hit_mine = cell.is_mine;
        let is_gold = cell.is_gold();
        let points = cell.points();

        let player = &mut next.players[next.current_player_index];
        let delta = if hit_mine {
            player.penalize(next.mine_penalty);
            -next.mine_penalty
        } else {
            player.award(points);
            points
        };
        log::trace!("{} revealed {:?} for {} points", actor, coords, delta);

        let outcome = if next.board.is_cleared() {
            next.finish(GameStatus::Won);
            RevealOutcome::Won { points: delta }
        } else if hit_mine && next.mode == GameMode::Single {
            next.finish(GameStatus::Lost);
            RevealOutcome::Lost { points: delta }
        } else {
            next.current_player_index = (next.current_player_index + 1) % next.players.len();
            if hit_mine {
                RevealOutcome::HitMine { points: delta }
            } else if is_gold {
                RevealOutcome::Gold { points: delta }
            } else {
                RevealOutcome::Revealed { points: delta }
            }
        };

        Ok((next, outcome))
    }

    /// Flags or unflags an unrevealed cell; flags never outnumber the mines.
    pub fn try_toggle_flag(&self, coords: Coord2) -> Result<(Self, MarkOutcome)> {
        self.check_playing()?;
        let coords = self.board.validate_coords(coords)?;
        let target = &self.board[coords];
        if target.is_revealed {
            return Err(GameError::AlreadyRevealed);
        }

        let mut next = self.clone();
        let outcome = if target.is_flagged {
            next.board[coords].is_flagged = false;
            next.flags_placed = next.flags_placed.saturating_sub(1);
            MarkOutcome::Unflagged
        } else {
            if self.flags_placed >= self.mines_count {
                return Err(GameError::FlagLimitReached);
            }
            next.board[coords].is_flagged = true;
            next.flags_placed += 1;
            MarkOutcome::Flagged
        };

        Ok((next, outcome))
    }

    fn check_playing(&self) -> Result<()> {
        if self.status.is_playing() {
            Ok(())
        } else {
            Err(GameError::NotPlaying)
        }
    }

    /// Replaces the placeholder board, keeping any flags placed before the first reveal.
    fn lay_out_board(&mut self, start: Coord2) {
        let mut board =
            RandomBoardGenerator::new(self.seed, start).generate(self.difficulty.settings());
        for cell in self.board.cells().filter(|cell| cell.is_flagged) {
            board[cell.coords].is_flagged = true;
        }
        self.board = board;
        self.awaiting_first_reveal = false;
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.leaderboard.record(&self.players);
        log::info!(
            "Game ended {:?}, top score {:?}",
            status,
            self.standings().first().map(|player| player.score)
        );
    }

    /// Test and replay hook: plays on a prepared board instead of generating one.
    pub fn with_board(mut self, board: Board) -> Self {
        self.mines_count = board.mine_count();
        self.flags_placed = board.flag_count();
        self.board = board;
        self.awaiting_first_reveal = false;
        self
    }
}
