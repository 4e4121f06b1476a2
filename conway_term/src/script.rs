// script.rs - Startup script files
//
// A script's first line selects its mode:
//   c  - board: width, height, then up to `height` rows of cells
//   i  - commands: every following line is typed as interactive input,
//        with `#` starting a comment

use std::path::Path;

use crate::error::{LifeError, Result};
use crate::grid::GridEngine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Script {
    Board {
        width: usize,
        height: usize,
        rows: Vec<String>,
    },
    Commands(Vec<String>),
}

impl Script {
    /// Reads and parses a script file. Bytes that are not valid UTF-8 are
    /// replaced rather than rejected, so a stray byte in a board row still
    /// reads as a live cell.
    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Self::parse(&String::from_utf8_lossy(&bytes))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let mode = lines.next().ok_or(LifeError::EmptyScript)?.trim_end();

        match mode {
            "c" => {
                let width = parse_dimension(lines.next(), 2)?;
                let height = parse_dimension(lines.next(), 3)?;
                if width < 1 || height < 1 {
                    return Err(LifeError::InvalidSize {
                        rows: height,
                        columns: width,
                    });
                }
                let height = height as usize;
                let rows = lines.take(height).map(str::to_owned).collect();
                Ok(Script::Board {
                    width: width as usize,
                    height,
                    rows,
                })
            }
            "i" => Ok(Script::Commands(lines.map(str::to_owned).collect())),
            other => Err(LifeError::UnknownScriptMode(other.to_owned())),
        }
    }

    /// Replaces the engine's board with a `Board` script's contents. Command
    /// scripts leave the engine untouched.
    pub fn apply_board(&self, engine: &mut GridEngine) -> Result<()> {
        if let Script::Board { width, height, rows } = self {
            engine.reinitialize(*height, *width)?;
            for (index, row) in rows.iter().enumerate() {
                engine.set_row(index, row);
            }
        }
        Ok(())
    }
}

/// Characters of one command line up to any `#` comment.
pub fn command_chars(line: &str) -> impl Iterator<Item = char> + '_ {
    line.chars().take_while(|&c| c != '#')
}

fn parse_dimension(line: Option<&str>, number: usize) -> Result<i64> {
    let value = line.unwrap_or_default().trim();
    value.parse().map_err(|_| LifeError::InvalidDimension {
        line: number,
        value: value.to_owned(),
    })
}
