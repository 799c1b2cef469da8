//! Centralized error types for the game.
//!
//! The simulation itself never fails: running out of levels is reported as `None`
//! by the loader, not as an error. Everything here is raised while starting up
//! (malformed level tables, bad configuration) or by the desktop front-end.

use std::io;

/// Main error type for the game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl From<figment::Error> for GameError {
    fn from(error: figment::Error) -> Self {
        GameError::Config(error.to_string())
    }
}

/// Error type for level layout parsing.
///
/// These describe a defect in the authored level table and are fatal at load time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in level {level} at row {row}, column {column}: {character:?}")]
    UnknownCharacter {
        level: usize,
        row: usize,
        column: usize,
        character: char,
    },

    #[error("Level {level} row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        level: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Level {0} has no rows")]
    EmptyLayout(usize),

    #[error("Level {level} is {found_columns}x{found_rows}, expected {expected_columns}x{expected_rows}")]
    DimensionMismatch {
        level: usize,
        expected_columns: usize,
        expected_rows: usize,
        found_columns: usize,
        found_rows: usize,
    },

    #[error("No levels were provided")]
    NoLevels,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
