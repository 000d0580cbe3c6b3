//! End-to-end tests: whole game files on disk, checked against the result
//! codes the binary would print.

use std::fs;
use std::path::{Path, PathBuf};

use connectz::replay::replay_file;

fn write_game(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn code_for(contents: &str) -> u8 {
    let dir = tempfile::tempdir().unwrap();
    let path = write_game(dir.path(), "game.txt", contents);
    match replay_file(&path) {
        Ok(outcome) => outcome.code(),
        Err(err) => err.code(),
    }
}

#[test]
fn test_player_one_column_win() {
    assert_eq!(code_for("7 6 4\n1\n2\n1\n2\n1\n2\n1\n"), 1);
}

#[test]
fn test_player_two_column_win() {
    assert_eq!(code_for("7 6 4\n1\n2\n1\n2\n3\n2\n1\n2\n"), 2);
}

#[test]
fn test_horizontal_win_across_columns() {
    // player 1 takes the bottom row of columns 1-4
    assert_eq!(code_for("6 7 4\n1\n1\n2\n2\n3\n3\n4\n"), 1);
}

#[test]
fn test_draw_on_exactly_filled_board() {
    assert_eq!(code_for("1 2 2\n1\n2\n"), 0);
}

#[test]
fn test_no_moves_is_incomplete() {
    assert_eq!(code_for("3 3 1\n"), 3);
}

#[test]
fn test_unfinished_game_is_incomplete() {
    assert_eq!(code_for("7 6 4\n1\n2\n1\n"), 3);
}

#[test]
fn test_move_after_win_is_illegal_continue() {
    assert_eq!(code_for("7 6 4\n1\n2\n1\n2\n1\n2\n1\n2\n"), 4);
}

#[test]
fn test_overfilled_column_is_illegal_row() {
    // eight drops into a seven-row column
    assert_eq!(code_for("7 6 4\n2\n2\n2\n2\n2\n2\n2\n2\n"), 5);
}

#[test]
fn test_out_of_range_column_is_illegal_column() {
    assert_eq!(code_for("7 6 4\n8\n"), 6);
}

#[test]
fn test_zero_column_is_illegal_column() {
    // columns are 1-based in the file, so 0 lands below the range
    assert_eq!(code_for("7 6 4\n0\n"), 6);
}

#[test]
fn test_oversized_win_length_is_illegal_game() {
    assert_eq!(code_for("7 6 10\n1\n"), 7);
}

#[test]
fn test_zero_dimension_is_illegal_game() {
    assert_eq!(code_for("7 6 0\n"), 7);
}

#[test]
fn test_win_length_on_longer_axis_is_playable() {
    // a 1x5 board with win length 5: player 1 alone fills the row? no —
    // turns alternate, so the best this file can reach is incomplete
    assert_eq!(code_for("1 5 5\n1\n2\n"), 3);
}

#[test]
fn test_short_header_is_invalid_file() {
    assert_eq!(code_for("7 6\n1\n"), 8);
}

#[test]
fn test_non_integer_move_is_invalid_file() {
    assert_eq!(code_for("7 6 4\nbanana\n"), 8);
}

#[test]
fn test_empty_file_is_invalid_file() {
    assert_eq!(code_for(""), 8);
}

#[test]
fn test_missing_file_is_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = replay_file(&dir.path().join("absent.txt")).unwrap_err();
    assert_eq!(err.code(), 9);
}

#[test]
fn test_illegal_move_reported_before_later_moves() {
    // the bad column comes first even though the tail would win the game
    assert_eq!(code_for("7 6 4\n1\n9\n1\n2\n1\n2\n1\n"), 6);
}

#[test]
fn test_crlf_line_endings_accepted() {
    assert_eq!(code_for("7 6 4\r\n1\r\n2\r\n1\r\n2\r\n1\r\n2\r\n1\r\n"), 1);
}
