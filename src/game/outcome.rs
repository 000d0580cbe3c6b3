use super::board::Board;
use super::player::Player;

/// Status of a board: won, drawn, or still playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Incomplete,
    Draw,
    Win(Player),
}

impl Outcome {
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Win(_))
    }

    /// The result code printed by the command-line driver.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Draw => 0,
            Outcome::Win(Player::One) => 1,
            Outcome::Win(Player::Two) => 2,
            Outcome::Incomplete => 3,
        }
    }
}

/// Candidate run directions as (column step, row step): up the column,
/// across the row, diagonal, anti-diagonal.
const DIRECTIONS: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Scans a board snapshot for a winning run. Holds only the fixed board
/// geometry; evaluation is a pure function of the board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeEvaluator {
    rows: usize,
    columns: usize,
    win_length: usize,
}

impl OutcomeEvaluator {
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Self {
        OutcomeEvaluator {
            rows,
            columns,
            win_length,
        }
    }

    /// Classify the board: a run of `win_length` counters wins for its
    /// owner, a full board with no run is a draw, anything else is
    /// incomplete.
    pub fn evaluate(&self, board: &Board) -> Outcome {
        let target = self.win_length as i64;
        // Cells at or above the tallest fill are empty, so no winning run
        // starts there.
        let filled = board.highest_fill();
        for column in 0..self.columns {
            for row in 0..filled {
                for (column_step, row_step) in DIRECTIONS {
                    match self.run_sum(board, column, row, column_step, row_step) {
                        Some(sum) if sum == target => return Outcome::Win(Player::One),
                        Some(sum) if sum == -target => return Outcome::Win(Player::Two),
                        _ => {}
                    }
                }
            }
        }
        if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Incomplete
        }
    }

    /// Sum of cell values along the `win_length` cells starting at
    /// (column, row); `None` when the run leaves the board.
    fn run_sum(
        &self,
        board: &Board,
        column: usize,
        row: usize,
        column_step: i64,
        row_step: i64,
    ) -> Option<i64> {
        let mut sum = 0;
        for n in 0..self.win_length as i64 {
            let c = column as i64 + n * column_step;
            let r = row as i64 + n * row_step;
            if c < 0 || c >= self.columns as i64 || r < 0 || r >= self.rows as i64 {
                return None;
            }
            sum += board.get(c as usize, r as usize).value();
        }
        Some(sum)
    }
}
