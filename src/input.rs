//! Game file parsing: the dimensions header and the move list.

use std::fs;
use std::path::Path;

use crate::error::InputError;

/// Board geometry and win condition from a game file's header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSetup {
    pub rows: usize,
    pub columns: usize,
    pub win_length: usize,
}

impl GameSetup {
    /// Build a setup, rejecting dimensions no game can be played on.
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Result<Self, InputError> {
        let setup = GameSetup {
            rows,
            columns,
            win_length,
        };
        setup.validate()?;
        Ok(setup)
    }

    /// Validate the dimensions: all positive, and the win length must fit
    /// along the board's longer axis.
    fn validate(&self) -> Result<(), InputError> {
        if self.rows == 0 || self.columns == 0 || self.win_length == 0 {
            return Err(InputError::IllegalGame(format!(
                "dimensions must be positive, got {} {} {}",
                self.rows, self.columns, self.win_length
            )));
        }
        if self.win_length > self.rows.max(self.columns) {
            return Err(InputError::IllegalGame(format!(
                "win length {} cannot fit on a {}x{} board",
                self.win_length, self.rows, self.columns
            )));
        }
        Ok(())
    }
}

/// A parsed game file: the setup plus the move list in play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFile {
    pub setup: GameSetup,
    /// 1-based column indices, exactly as written in the file.
    pub moves: Vec<i64>,
}

impl GameFile {
    /// Read and parse a game file from disk.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let text = fs::read_to_string(path).map_err(|source| InputError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse game file text: first line `rows columns win_length`, then one
    /// 1-based column per line. Blank lines yield no moves.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut lines = text.lines();
        let header = lines
            .next()
            .ok_or_else(|| InputError::InvalidFile("missing dimensions line".into()))?;
        let setup = parse_header(header)?;

        let mut moves = Vec::new();
        for line in lines {
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            let column = token
                .parse::<i64>()
                .map_err(|_| InputError::InvalidFile(format!("bad move token '{token}'")))?;
            moves.push(column);
        }
        Ok(GameFile { setup, moves })
    }
}

/// Parse the dimensions line: exactly three integer tokens.
fn parse_header(line: &str) -> Result<GameSetup, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(InputError::InvalidFile(format!(
            "expected 3 dimension tokens, got {}",
            tokens.len()
        )));
    }
    let mut values = [0i64; 3];
    for (value, token) in values.iter_mut().zip(&tokens) {
        *value = token
            .parse()
            .map_err(|_| InputError::InvalidFile(format!("bad dimension token '{token}'")))?;
    }
    let [rows, columns, win_length] = values;
    if rows <= 0 || columns <= 0 || win_length <= 0 {
        return Err(InputError::IllegalGame(format!(
            "dimensions must be positive, got {rows} {columns} {win_length}"
        )));
    }
    GameSetup::new(rows as usize, columns as usize, win_length as usize)
}
