use std::path::PathBuf;

use crate::game::MoveError;

/// Errors raised while reading and parsing a game file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read game file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed game file: {0}")]
    InvalidFile(String),

    #[error("illegal game: {0}")]
    IllegalGame(String),
}

/// Any way a replay can fail: a bad input file or an illegal move.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),
}

impl InputError {
    pub fn code(&self) -> u8 {
        match self {
            InputError::IllegalGame(_) => 7,
            InputError::InvalidFile(_) => 8,
            InputError::FileRead { .. } => 9,
        }
    }
}

impl ReplayError {
    /// The result code printed by the command-line driver. Together with
    /// `Outcome::code` this covers the whole output table: outcomes take
    /// 0-3, move violations 4-6, file problems 7-9.
    pub fn code(&self) -> u8 {
        match self {
            ReplayError::Move(MoveError::IllegalContinue) => 4,
            ReplayError::Move(MoveError::IllegalRow { .. }) => 5,
            ReplayError::Move(MoveError::IllegalColumn { .. }) => 6,
            ReplayError::Input(input) => input.code(),
        }
    }
}
