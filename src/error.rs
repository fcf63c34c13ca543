//! Error types for the 8-puzzle crate

use thiserror::Error;

use crate::puzzle::PuzzleState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("expected {expected} tiles, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("tile {value} is out of range (must be 0-8)")]
    TileOutOfRange { value: u32 },

    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u8 },

    #[error("invalid tile '{token}' (expected an integer 0-8)")]
    ParseTile { token: String },

    #[error("invalid goal state: {source}")]
    DegenerateGoal {
        #[source]
        source: Box<Error>,
    },

    #[error("start state is not solvable for the selected goal:\n{state}")]
    Unsolvable { state: PuzzleState },

    #[error("unknown strategy '{input}'. Expected one of: informed, uninformed")]
    UnknownStrategy { input: String },

    #[error("unknown goal preset '{input}'. Expected one of: standard, cyclic")]
    UnknownGoalPreset { input: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
