//! # Connect-Z
//!
//! Validator for recorded games of Connect-Z, a generalisation of Connect
//! Four to arbitrary board sizes and win lengths. A game file names the
//! board dimensions on its first line and one column per move after that;
//! replaying it move-by-move yields either the final game status or the
//! first rule violation, each mapped to a single result code printed by the
//! `connectz` binary.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, outcome scan, state machine
//! - [`input`] — Game file parsing and dimension validation
//! - [`replay`] — Drives a parsed move list through the state machine
//! - [`error`] — Structured error types and result-code mapping

pub mod error;
pub mod game;
pub mod input;
pub mod replay;
