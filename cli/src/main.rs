use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use goldmines_core::{Action, Difficulty, GameMode, Session};
use rand::Rng;
use tracing_subscriber::filter::LevelFilter;

mod command;
mod render;

use command::{Command, GameSetup};
use render::Renderer;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum ModeArg {
    Single,
    Multi,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => GameMode::Single,
            ModeArg::Multi => GameMode::Multi,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Turn-based minesweeper with gold cells", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[arg(short, long, value_enum, default_value_t = ModeArg::Single)]
    mode: ModeArg,

    /// Seats in multiplayer mode
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    #[arg(short, long, value_enum, default_value_t = DifficultyArg::Medium)]
    difficulty: DifficultyArg,

    /// Force a seed instead of random, later games count up from it
    #[arg(short, long)]
    seed: Option<u64>,

    /// Points lost per mine, applied after each new game starts
    #[arg(long)]
    penalty: Option<i32>,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,
}

impl Args {
    /// Launch settings, used until an `n` command overrides them.
    fn setup(&self) -> GameSetup {
        GameSetup {
            mode: self.mode.into(),
            players: self.players,
            difficulty: self.difficulty.into(),
        }
    }
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let mut seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("seed: {}", seed);

    let renderer = Renderer::new(!args.no_color && io::stdout().is_terminal());
    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut setup = args.setup();
    let mut start_game = |session: &mut Session, setup: &GameSetup| {
        session.enqueue(setup.start_action(seed));
        if let Some(penalty) = args.penalty {
            session.enqueue(Action::SetMinePenalty(penalty));
        }
        session.process();
        seed = seed.wrapping_add(1);
    };

    start_game(&mut session, &setup);
    write!(out, "{}", renderer.screen(session.state()))?;
    writeln!(out, "Type `help` for commands.")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading input")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{err:#}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", command::HELP)?;
                continue;
            }
            Command::Dump => {
                serde_json::to_writer_pretty(&mut out, session.state())
                    .context("serializing game state")?;
                writeln!(out)?;
                continue;
            }
            Command::NewGame(new_game) => {
                new_game.apply(&mut setup);
                start_game(&mut session, &setup);
            }
            other => {
                if let Some(action) = other.action() {
                    session.dispatch(action);
                }
            }
        }

        write!(out, "{}", renderer.screen(session.state()))?;
        out.flush()?;
    }

    Ok(())
}
