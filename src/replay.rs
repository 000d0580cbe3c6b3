//! Plays a recorded game through the state machine, move by move.

use std::path::Path;

use tracing::{debug, trace};

use crate::error::ReplayError;
use crate::game::{GameState, Outcome};
use crate::input::GameFile;

/// Replay every move of a parsed game file in order. The first illegal
/// move aborts the run; a clean run returns the final status, which is
/// `Incomplete` for an empty move list.
pub fn replay(file: &GameFile) -> Result<Outcome, ReplayError> {
    debug!(
        rows = file.setup.rows,
        columns = file.setup.columns,
        win_length = file.setup.win_length,
        moves = file.moves.len(),
        "replaying game"
    );
    let mut game = GameState::new(&file.setup);
    for (index, &column) in file.moves.iter().enumerate() {
        // columns are 1-based in the file
        let status = game.make_move(column - 1)?;
        trace!(move_number = index + 1, column, ?status, "applied move");
        trace!("board:\n{}", game.board());
    }
    match game.status() {
        Outcome::Win(player) => debug!("{} wins", player.name()),
        status => debug!(?status, "replay finished"),
    }
    Ok(game.status())
}

/// Load a game file from disk and replay it.
pub fn replay_file(path: &Path) -> Result<Outcome, ReplayError> {
    let file = GameFile::load(path)?;
    replay(&file)
}
