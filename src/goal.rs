//! The target layout every search runs towards, together with the two
//! quantities that only make sense relative to it: the Manhattan heuristic
//! and permutation-parity solvability.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::puzzle::{PuzzleState, BLANK, CELLS, SIZE};

/// Named goal layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GoalPreset {
    /// `1 2 3 / 4 5 6 / 7 8 _`
    #[default]
    Standard,
    /// `1 2 3 / 8 _ 4 / 7 6 5`
    Cyclic,
}

impl GoalPreset {
    pub fn tiles(&self) -> [u8; CELLS] {
        match self {
            GoalPreset::Standard => [1, 2, 3, 4, 5, 6, 7, 8, 0],
            GoalPreset::Cyclic => [1, 2, 3, 8, 0, 4, 7, 6, 5],
        }
    }
}

impl fmt::Display for GoalPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalPreset::Standard => write!(f, "standard"),
            GoalPreset::Cyclic => write!(f, "cyclic"),
        }
    }
}

impl FromStr for GoalPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(GoalPreset::Standard),
            "cyclic" => Ok(GoalPreset::Cyclic),
            _ => Err(Error::UnknownGoalPreset {
                input: s.to_string(),
            }),
        }
    }
}

/// A validated goal state plus a lookup table from tile value to the cell it
/// occupies in the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Goal {
    state: PuzzleState,
    positions: [u8; CELLS],
}

impl Goal {
    pub fn new(state: PuzzleState) -> Self {
        let mut positions = [0; CELLS];
        for (i, value) in state.tiles().into_iter().enumerate() {
            positions[value as usize] = i as u8;
        }
        Self { state, positions }
    }

    /// Builds a goal from raw tiles, reporting malformed input as
    /// [`Error::DegenerateGoal`].
    pub fn from_tiles(tiles: &[u8]) -> Result<Self> {
        PuzzleState::from_tiles(tiles)
            .map(Self::new)
            .map_err(|source| Error::DegenerateGoal {
                source: Box::new(source),
            })
    }

    /// Parses nine tiles (see [`PuzzleState`]'s `FromStr`), reporting
    /// malformed input as [`Error::DegenerateGoal`]. Preset names are not
    /// accepted here.
    pub fn parse_layout(s: &str) -> Result<Self> {
        s.parse::<PuzzleState>()
            .map(Self::new)
            .map_err(|source| Error::DegenerateGoal {
                source: Box::new(source),
            })
    }

    pub fn standard() -> Self {
        GoalPreset::Standard.into()
    }

    pub fn cyclic() -> Self {
        GoalPreset::Cyclic.into()
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn is_goal(&self, state: &PuzzleState) -> bool {
        self.state == *state
    }

    /// (row, column) of `value` in the goal layout.
    pub fn position_of(&self, value: u8) -> (usize, usize) {
        let index = self.positions[value as usize] as usize;
        (index / SIZE, index % SIZE)
    }

    /// Sum over all non-blank tiles of their row and column distance to the
    /// goal cell. Admissible and consistent: one move shifts one tile by one
    /// cell, changing the sum by exactly one.
    pub fn manhattan(&self, state: &PuzzleState) -> u32 {
        state
            .tiles()
            .into_iter()
            .enumerate()
            .filter(|&(_, value)| value != BLANK)
            .map(|(i, value)| {
                let (goal_row, goal_col) = self.position_of(value);
                let (row, col) = (i / SIZE, i % SIZE);
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
            })
            .sum()
    }

    /// Whether `state` can reach this goal.
    ///
    /// The tiles of `state` (blank excluded) are renamed to their goal index
    /// and the inversions of that sequence are counted. On an odd-width board
    /// no move changes the parity of that count, and the goal itself has zero
    /// inversions, so a state is solvable iff its count is even.
    pub fn is_solvable(&self, state: &PuzzleState) -> bool {
        let remapped: Vec<u8> = state
            .tiles()
            .into_iter()
            .filter(|&value| value != BLANK)
            .map(|value| self.positions[value as usize])
            .collect();

        count_inversions(&remapped) % 2 == 0
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<GoalPreset> for Goal {
    fn from(preset: GoalPreset) -> Self {
        Self::new(PuzzleState::from_permutation(preset.tiles()))
    }
}

impl FromStr for Goal {
    type Err = Error;

    /// Accepts a preset name or nine tiles.
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(preset) = s.parse::<GoalPreset>() {
            return Ok(preset.into());
        }
        Self::parse_layout(s)
    }
}

fn count_inversions(sequence: &[u8]) -> usize {
    sequence
        .iter()
        .enumerate()
        .map(|(i, &val)| sequence[i + 1..].iter().filter(|&&next| next < val).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(tiles: [u8; CELLS]) -> PuzzleState {
        PuzzleState::from_tiles(&tiles).unwrap()
    }

    #[test]
    fn manhattan_is_zero_at_goal() {
        for goal in [Goal::standard(), Goal::cyclic()] {
            assert_eq!(goal.manhattan(goal.state()), 0);
        }
    }

    #[test]
    fn manhattan_sums_tile_distances() {
        let goal = Goal::standard();
        assert_eq!(goal.manhattan(&state([1, 2, 3, 4, 5, 0, 7, 8, 6])), 1);
        // 8 and 1 swapped with the blank in the corner
        assert_eq!(goal.manhattan(&state([8, 2, 3, 4, 5, 6, 7, 1, 0])), 6);

        let cyclic = Goal::cyclic();
        assert_eq!(cyclic.position_of(8), (1, 0));
        assert_eq!(cyclic.manhattan(&state([1, 2, 3, 4, 5, 6, 7, 8, 0])), 8);
    }

    #[test]
    fn solvability_is_relative_to_goal() {
        let standard = Goal::standard();
        let cyclic = Goal::cyclic();

        assert!(standard.is_solvable(standard.state()));
        assert!(cyclic.is_solvable(cyclic.state()));
        // the two presets lie in different parity classes
        assert!(!standard.is_solvable(cyclic.state()));
        assert!(!cyclic.is_solvable(standard.state()));

        assert!(!standard.is_solvable(&state([2, 1, 3, 4, 5, 6, 7, 8, 0])));
        assert!(standard.is_solvable(&state([1, 2, 3, 4, 5, 0, 7, 8, 6])));
    }

    #[test]
    fn degenerate_goal_is_rejected() {
        let err = Goal::from_tiles(&[1, 2, 3, 4, 5, 6, 7, 8, 8]).unwrap_err();
        assert_eq!(
            err,
            Error::DegenerateGoal {
                source: Box::new(Error::DuplicateTile { value: 8 })
            }
        );
        assert!(matches!("1 2 3".parse::<Goal>(), Err(Error::DegenerateGoal { .. })));
    }

    #[test]
    fn parses_presets_and_layouts() {
        assert_eq!("cyclic".parse::<Goal>(), Ok(Goal::cyclic()));
        assert_eq!("Standard".parse::<Goal>(), Ok(Goal::standard()));
        assert_eq!("1 2 3 8 0 4 7 6 5".parse::<Goal>(), Ok(Goal::cyclic()));
        assert_eq!(Goal::parse_layout("1,2,3/8,_,4/7,6,5"), Ok(Goal::cyclic()));
        assert!(matches!(Goal::parse_layout("cyclic"), Err(Error::DegenerateGoal { .. })));
        assert!(matches!("spiral".parse::<GoalPreset>(), Err(Error::UnknownGoalPreset { .. })));
    }
}
