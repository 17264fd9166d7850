#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

//! The puzzle state and move engine of a four-dimensional twisty puzzle.
//!
//! The puzzle has eight cells (X−, X+, Y−, Y+, Z−, Z+, W−, W+), each holding
//! 21 facelets, for 168 slots in total. Every move is a fixed permutation of
//! those slots: three whole-puzzle rotations of order four and four vertex
//! twists of order three.

use thiserror::Error;

pub mod cell;
pub mod controller;
pub mod engine;
pub mod history;
pub(crate) mod math;
pub mod moves;
pub mod palette;
pub mod permutation;
pub mod state;
mod tables;

pub use cell::{
    CELL_COUNT, CENTER_FACELET, Cell, FACELETS_PER_CELL, FaceletClass, SLOT_COUNT, UnknownCell,
    slot,
};
pub use controller::PuzzleController;
pub use engine::MoveEngine;
pub use history::HistoryStack;
pub use moves::{MOVE_TABLE, Move, MoveFamily, MoveId, MoveTable};
pub use palette::Color;
pub use permutation::Permutation;
pub use state::FaceletState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Unknown move `{0}`, expected one of X, Y, Z, 0, 1, 2, 3")]
    UnknownMove(String),
    #[error("There is nothing to undo")]
    EmptyHistory,
}
