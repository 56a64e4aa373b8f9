use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use minekeeper_core::{CellCount, Coord, GameError, GameSession, RevealOutcome};

use command::{Command, HELP};
use render::{render_board, render_status};
use settings::Settings;
use timer::Timer;

mod command;
mod render;
mod settings;
mod timer;

/// Clear the mines on a grid, one reveal at a time.
#[derive(Parser, Debug)]
#[command(name = "minekeeper", version, about)]
struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 9)]
    rows: Coord,
    /// Number of columns
    #[arg(long, default_value_t = 9)]
    cols: Coord,
    /// Number of mines
    #[arg(long, default_value_t = 10)]
    mines: CellCount,
    /// Seed for mine placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    verbose: Verbosity,
}

struct App {
    settings: Settings,
    session: GameSession,
    timer: Timer,
}

impl App {
    fn new(settings: Settings, seed: u64) -> Result<Self> {
        Ok(Self {
            settings,
            session: GameSession::new(settings.game_config(), seed)?,
            timer: Timer::default(),
        })
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        let snapshot = self.session.snapshot();
        writeln!(out, "{}", render_board(&snapshot))?;
        writeln!(out, "{}", render_status(&snapshot, self.timer.elapsed_secs()))
    }

    /// Applies one command, returning `false` once the player wants to leave.
    fn update(&mut self, command: Command, out: &mut impl Write) -> Result<bool> {
        use Command::*;

        match command {
            Reveal(coords) => {
                log::debug!("reveal: {:?}", coords);
                match self.session.reveal(coords) {
                    Ok(outcome) => self.after_move(outcome),
                    Err(GameError::InvalidPosition) => {
                        writeln!(out, "({}, {}) is not on the board", coords.0, coords.1)?
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Flag(coords) => {
                log::debug!("flag: {:?}", coords);
                match self.session.toggle_flag(coords) {
                    Ok(outcome) if outcome.has_update() => {
                        log::debug!("mines left: {}", self.session.mines_left())
                    }
                    Ok(_) => {}
                    Err(err) => writeln!(out, "({}, {}): {}", coords.0, coords.1, err)?,
                }
            }
            NewGame => self.new_game(self.settings)?,
            UpdateSettings(settings) => self.new_game(settings)?,
            Help => writeln!(out, "{}", HELP)?,
            Quit => return Ok(false),
        }
        Ok(true)
    }

    fn after_move(&mut self, outcome: RevealOutcome) {
        if !outcome.has_update() {
            return;
        }
        self.timer.start();
        if self.session.is_finished() {
            self.timer.stop();
            log::info!(
                "game over: {:?} in {}s, score {}",
                self.session.outcome(),
                self.timer.elapsed_secs(),
                self.session.score()
            );
        }
    }

    fn new_game(&mut self, settings: Settings) -> Result<()> {
        self.session.new_game(settings.game_config())?;
        self.settings = settings;
        self.timer.reset();
        log::info!(
            "new game: {}x{} with {} mines",
            settings.rows,
            settings.cols,
            settings.mines
        );
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let settings = Settings::new(args.rows, args.cols, args.mines);
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);
    let mut app = App::new(settings, seed)?;

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", HELP)?;
    app.draw(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{:#}", err)?;
                continue;
            }
        };
        if !app.update(command, &mut out)? {
            break;
        }
        if !matches!(command, Command::Help) {
            app.draw(&mut out)?;
        }
    }
    Ok(())
}
