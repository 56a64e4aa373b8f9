use anyhow::{Context, Result, anyhow, bail};
use minekeeper_core::Coord2;

use crate::settings::Settings;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    UpdateSettings(Settings),
    Help,
    Quit,
}

pub(crate) const HELP: &str = "\
Commands:
  r ROW COL            reveal a cell
  f ROW COL            toggle a flag
  n                    new game
  s ROWS COLS MINES    change settings and start a new game
  h                    show this help
  q                    quit
Coordinates start at 0.";

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or_else(|| anyhow!("empty command"))?;
        let args: Vec<&str> = words.collect();

        let command = match (name, args.as_slice()) {
            ("r" | "reveal", [row, col]) => Self::Reveal((number(row)?, number(col)?)),
            ("f" | "flag", [row, col]) => Self::Flag((number(row)?, number(col)?)),
            ("n" | "new", []) => Self::NewGame,
            ("s" | "settings", [rows, cols, mines]) => Self::UpdateSettings(Settings::new(
                number(rows)?,
                number(cols)?,
                number(mines)?,
            )),
            ("h" | "help" | "?", []) => Self::Help,
            ("q" | "quit", []) => Self::Quit,
            ("r" | "reveal" | "f" | "flag", _) => bail!("expected ROW COL after '{}'", name),
            ("s" | "settings", _) => bail!("expected ROWS COLS MINES after '{}'", name),
            _ => bail!("unknown command '{}', type 'h' for help", line.trim()),
        };
        Ok(command)
    }
}

fn number<T: std::str::FromStr>(word: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    word.parse()
        .with_context(|| format!("'{}' is not a valid number", word))
}
