// error.rs - Error types for the terminal Game of Life

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("grid must be at least 1x1 and at most {} cells, got {rows}x{columns}", crate::grid::MAX_CELLS)]
    InvalidSize { rows: i64, columns: i64 },

    #[error("script line {line}: expected a number, got '{value}'")]
    InvalidDimension { line: usize, value: String },

    #[error("script is empty")]
    EmptyScript,

    #[error("unknown script mode '{0}' (expected 'c' or 'i')")]
    UnknownScriptMode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
