use super::board::Board;
use super::outcome::{Outcome, OutcomeEvaluator};
use super::player::Player;
use crate::input::GameSetup;

/// Ways a single move can be illegal, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (0..{columns})")]
    IllegalColumn { column: i64, columns: usize },

    #[error("column {column} is already full")]
    IllegalRow { column: usize },

    #[error("the game already has a winner")]
    IllegalContinue,
}

/// State of one Connect-Z game: the board, per-column fill heights, whose
/// turn it is, and the status after the last move.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    heights: Vec<usize>,
    current_player: Player,
    status: Outcome,
    evaluator: OutcomeEvaluator,
}

impl GameState {
    /// Create the initial state for a validated game setup. Player 1 moves
    /// first.
    pub fn new(setup: &GameSetup) -> Self {
        GameState {
            board: Board::new(setup.rows, setup.columns),
            heights: vec![0; setup.columns],
            current_player: Player::One,
            status: Outcome::Incomplete,
            evaluator: OutcomeEvaluator::new(setup.rows, setup.columns, setup.win_length),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Status after the most recent move
    pub fn status(&self) -> Outcome {
        self.status
    }

    /// Drop the current player's counter into a 0-based column.
    ///
    /// Legality checks run in a fixed order and the first failure wins:
    /// column in range, column not full, game not already won. A drawn game
    /// never gets this far, since every column of a full board is full.
    /// On success the counter lands on top of the column's stack, the board
    /// is re-evaluated, the turn passes, and the new status is returned.
    pub fn make_move(&mut self, column: i64) -> Result<Outcome, MoveError> {
        if column < 0 || column >= self.board.columns() as i64 {
            return Err(MoveError::IllegalColumn {
                column,
                columns: self.board.columns(),
            });
        }
        let column = column as usize;
        if self.heights[column] >= self.board.rows() {
            return Err(MoveError::IllegalRow { column });
        }
        if self.status.is_win() {
            return Err(MoveError::IllegalContinue);
        }

        self.board
            .place(column, self.heights[column], self.current_player.to_cell());
        self.heights[column] += 1;
        self.status = self.evaluator.evaluate(&self.board);
        self.current_player = self.current_player.other();
        Ok(self.status)
    }
}
