use std::fmt;

use goldmines_core::{Cell, GameState, GameStatus, Player};

/// ANSI foreground colours, one per palette slot.
const PALETTE: [&str; 4] = ["\x1b[32m", "\x1b[31m", "\x1b[35m", "\x1b[33m"];
const RESET: &str = "\x1b[0m";

pub struct Renderer {
    color: bool,
}

/// A game state borrowed for display through a [`Renderer`].
pub struct Screen<'a> {
    renderer: &'a Renderer,
    state: &'a GameState,
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.status() {
            GameStatus::Menu => self.renderer.menu(f, self.state),
            _ => self.renderer.game(f, self.state),
        }
    }
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn screen<'a>(&'a self, state: &'a GameState) -> Screen<'a> {
        Screen { renderer: self, state }
    }

    fn menu(&self, f: &mut fmt::Formatter<'_>, state: &GameState) -> fmt::Result {
        writeln!(f, "== Minesweeper ==")?;
        writeln!(
            f,
            "{:?} / {:?}. `n [single|multi] [N] [easy|medium|hard]` to start a new game.",
            state.mode(),
            state.difficulty()
        )?;
        if !state.leaderboard().is_empty() {
            writeln!(f, "Leaderboard:")?;
            for (rank, player) in state.leaderboard().iter().enumerate() {
                writeln!(f, "{:>3}. {} {} pts", rank + 1, self.name(player), player.score)?;
            }
        }
        Ok(())
    }

    fn game(&self, f: &mut fmt::Formatter<'_>, state: &GameState) -> fmt::Result {
        let board = state.board();

        write!(f, "   ")?;
        for col in 0..board.side() {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;

        for (row, cells) in board.rows().enumerate() {
            write!(f, "{row:>3}")?;
            for cell in cells.iter() {
                write!(f, "  {}", self.cell(state, cell))?;
            }
            writeln!(f)?;
        }

        writeln!(
            f,
            "Mines left: {}  Flags: {}  Penalty: {}",
            state.mines_left(),
            state.flags_placed(),
            state.mine_penalty()
        )?;
        for (index, player) in state.players().iter().enumerate() {
            let marker = if index == state.current_player_index() && state.status().is_playing() {
                '>'
            } else {
                ' '
            };
            writeln!(
                f,
                "{marker} {}: {} pts, {} mine(s) hit",
                self.name(player),
                player.score,
                player.mines_hit
            )?;
        }

        match state.status() {
            GameStatus::Won => writeln!(f, "Victory! All mines found!"),
            GameStatus::Lost => writeln!(f, "Boom! Game over!"),
            GameStatus::Menu | GameStatus::Playing => Ok(()),
        }
    }

    fn cell(&self, state: &GameState, cell: &Cell) -> String {
        let glyph = match cell {
            Cell { is_flagged: true, .. } => "F".to_string(),
            Cell { is_revealed: false, .. } => ".".to_string(),
            Cell { is_mine: true, .. } => "*".to_string(),
            Cell { gold_value: Some(_), .. } => "$".to_string(),
            Cell { neighbor_mines: 0, .. } => " ".to_string(),
            Cell { neighbor_mines, .. } => neighbor_mines.to_string(),
        };

        let owner = cell.revealed_by.and_then(|id| state.players().get(id.seat()));
        match owner {
            Some(player) => self.paint(player, &glyph),
            None => glyph,
        }
    }

    fn name(&self, player: &Player) -> String {
        self.paint(player, &player.name)
    }

    fn paint(&self, player: &Player, text: &str) -> String {
        if self.color {
            let color = PALETTE[usize::from(player.palette_index) % PALETTE.len()];
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}
