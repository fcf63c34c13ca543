//! 8-puzzle solver
//!
//! This crate provides:
//! - An immutable, validated [`PuzzleState`] with move generation
//! - A configurable [`Goal`] with the Manhattan heuristic and parity-based
//!   solvability check relative to it
//! - Random solvable start generation
//! - Informed (A*) and uninformed (breadth-first) search, both counting
//!   expanded nodes and returning a minimum-length path

pub mod error;
pub mod generator;
pub mod goal;
pub mod puzzle;
pub mod search;

pub use error::{Error, Result};
pub use goal::{Goal, GoalPreset};
pub use puzzle::{moves_of, Move, PuzzleState};
pub use search::{
    solve, solve_checked, solve_informed, solve_uninformed, solve_with, Progress, SearchResult,
    SearchStatus, Strategy,
};

/// A random start that is solvable for `goal` and is not `goal` itself.
pub fn generate_start(goal: &Goal) -> PuzzleState {
    generator::random_start(goal)
}
