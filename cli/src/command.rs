use anyhow::{Context, bail, ensure};
use goldmines_core::{Action, Coord, Coord2, Difficulty, GameMode};

/// Settings the next `n` starts a game with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameSetup {
    pub mode: GameMode,
    pub players: usize,
    pub difficulty: Difficulty,
}

impl GameSetup {
    pub fn start_action(&self, seed: u64) -> Action {
        Action::StartGame {
            mode: self.mode,
            players: self.players,
            difficulty: self.difficulty,
            seed,
        }
    }
}

/// Optional words after `n`; anything left out keeps the current setup.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NewGame {
    pub mode: Option<GameMode>,
    pub players: Option<usize>,
    pub difficulty: Option<Difficulty>,
}

impl NewGame {
    fn parse<'a>(words: impl Iterator<Item = &'a str>) -> anyhow::Result<Self> {
        let mut new_game = Self::default();
        for word in words {
            match word {
                "single" | "multi" => {
                    ensure!(new_game.mode.is_none(), "mode given twice");
                    new_game.mode = Some(if word == "single" {
                        GameMode::Single
                    } else {
                        GameMode::Multi
                    });
                }
                "easy" | "medium" | "hard" => {
                    ensure!(new_game.difficulty.is_none(), "difficulty given twice");
                    new_game.difficulty = Some(match word {
                        "easy" => Difficulty::Easy,
                        "medium" => Difficulty::Medium,
                        _ => Difficulty::Hard,
                    });
                }
                _ => {
                    ensure!(new_game.players.is_none(), "unexpected argument {word:?}");
                    let players = word
                        .parse()
                        .with_context(|| format!("unexpected argument {word:?}"))?;
                    new_game.players = Some(players);
                }
            }
        }
        Ok(new_game)
    }

    /// Folds the given words into `setup`, so later games reuse them.
    pub fn apply(self, setup: &mut GameSetup) {
        if let Some(mode) = self.mode {
            setup.mode = mode;
        }
        if let Some(players) = self.players {
            setup.players = players;
        }
        if let Some(difficulty) = self.difficulty {
            setup.difficulty = difficulty;
        }
    }
}

/// One line of interactive input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Penalty(i32),
    NewGame(NewGame),
    Menu,
    Dump,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let command = match verb {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "p" | "penalty" => {
                let value = words.next().context("missing penalty value")?;
                Self::Penalty(value.parse().with_context(|| format!("bad penalty {value:?}"))?)
            }
            "n" | "new" => Self::NewGame(NewGame::parse(&mut words)?),
            "m" | "menu" => Self::Menu,
            "s" | "state" => Self::Dump,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}, try `help`"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument {extra:?}");
        }
        Ok(Some(command))
    }

    /// Engine action for commands that map directly onto one.
    pub fn action(self) -> Option<Action> {
        match self {
            Self::Reveal(coords) => Some(Action::Reveal(coords)),
            Self::Flag(coords) => Some(Action::ToggleFlag(coords)),
            Self::Penalty(value) => Some(Action::SetMinePenalty(value)),
            Self::Menu => Some(Action::ResetToMenu),
            Self::NewGame(_) | Self::Dump | Self::Help | Self::Quit => None,
        }
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let row = parse_axis(words.next(), "row")?;
    let col = parse_axis(words.next(), "column")?;
    Ok((row, col))
}

fn parse_axis(word: Option<&str>, name: &str) -> anyhow::Result<Coord> {
    let word = word.with_context(|| format!("missing {name}"))?;
    word.parse().with_context(|| format!("bad {name} {word:?}"))
}

pub const HELP: &str = "\
r ROW COL   reveal a cell
f ROW COL   toggle a flag
p N         set the mine penalty
n [single|multi] [N] [easy|medium|hard]
            start a new game, omitted settings carry over
m           back to the menu
s           print the game state as JSON
q           quit";
