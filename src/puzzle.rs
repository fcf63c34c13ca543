use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Side length of the board.
pub const SIZE: usize = 3;
/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;
/// The empty cell is represented by 0.
pub const BLANK: u8 = 0;

/// Direction the blank travels in a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Generation order for successors.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Immutable snapshot of the board, stored row-major.
///
/// Every value 0..=8 occurs exactly once; the only ways to build one are the
/// validating constructors and [`PuzzleState::apply_move`], so the invariant
/// holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    tiles: [u8; CELLS],
    blank: u8,
}

impl PuzzleState {
    /// Validates a row-major sequence of tiles.
    pub fn from_tiles(tiles: &[u8]) -> Result<Self> {
        if tiles.len() != CELLS {
            return Err(Error::InvalidLength {
                expected: CELLS,
                got: tiles.len(),
            });
        }

        let mut seen = [false; CELLS];
        let mut board = [BLANK; CELLS];
        let mut blank = 0;
        for (i, &value) in tiles.iter().enumerate() {
            let slot = seen.get_mut(value as usize).ok_or(Error::TileOutOfRange {
                value: u32::from(value),
            })?;
            if *slot {
                return Err(Error::DuplicateTile { value });
            }
            *slot = true;
            board[i] = value;
            if value == BLANK {
                blank = i as u8;
            }
        }

        Ok(Self {
            tiles: board,
            blank,
        })
    }

    /// For layouts known to be permutations of 0..=8 at compile time.
    pub(crate) fn from_permutation(tiles: [u8; CELLS]) -> Self {
        debug_assert!(Self::from_tiles(&tiles).is_ok());
        let blank = tiles.iter().position(|&value| value == BLANK).unwrap_or(0) as u8;
        Self { tiles, blank }
    }

    pub fn from_grid(grid: [[u8; SIZE]; SIZE]) -> Result<Self> {
        let flattened: Vec<u8> = grid.iter().flat_map(|row| row.iter().copied()).collect();
        Self::from_tiles(&flattened)
    }

    /// The row-major external representation.
    pub fn tiles(&self) -> [u8; CELLS] {
        self.tiles
    }

    pub fn to_grid(&self) -> [[u8; SIZE]; SIZE] {
        let mut grid = [[BLANK; SIZE]; SIZE];
        for (i, &value) in self.tiles.iter().enumerate() {
            grid[i / SIZE][i % SIZE] = value;
        }
        grid
    }

    /// Tile at (row, column), or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < SIZE && col < SIZE {
            Some(self.tiles[row * SIZE + col])
        } else {
            None
        }
    }

    pub fn blank_index(&self) -> usize {
        self.blank as usize
    }

    /// (row, column) of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank_index() / SIZE, self.blank_index() % SIZE)
    }

    /// Returns the state reached by sliding the blank in `movement`, or `None`
    /// when that would leave the board.
    pub fn apply_move(&self, movement: Move) -> Option<Self> {
        let (dx, dy) = movement.as_offset();
        let (x, y) = self.blank_position();

        let new_x = x as isize + dx;
        let new_y = y as isize + dy;

        if new_x >= 0 && new_x < SIZE as isize && new_y >= 0 && new_y < SIZE as isize {
            let target = new_x as usize * SIZE + new_y as usize;
            let mut next = *self;
            next.tiles.swap(self.blank_index(), target);
            next.blank = target as u8;
            Some(next)
        } else {
            None
        }
    }

    /// Legal successors paired with the move that produces them, in
    /// [`Move::ALL`] order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, PuzzleState)> {
        let state = *self;
        Move::ALL
            .into_iter()
            .filter_map(move |movement| state.apply_move(movement).map(|next| (movement, next)))
    }

    /// All states one move away: 2 from a corner, 3 from an edge, 4 from the
    /// centre.
    pub fn neighbors(&self) -> Vec<PuzzleState> {
        self.successors().map(|(_, next)| next).collect()
    }

    /// The single move leading from `self` to `next`, if they are adjacent.
    pub fn move_between(&self, next: &PuzzleState) -> Option<Move> {
        self.successors()
            .find(|(_, candidate)| candidate == next)
            .map(|(movement, _)| movement)
    }
}

/// Converts a path of states into the moves that connect them. Returns `None`
/// if two consecutive states are not one move apart.
pub fn moves_of(path: &[PuzzleState]) -> Option<Vec<Move>> {
    path.windows(2)
        .map(|pair| pair[0].move_between(&pair[1]))
        .collect()
}

impl TryFrom<&[u8]> for PuzzleState {
    type Error = Error;

    fn try_from(tiles: &[u8]) -> Result<Self> {
        Self::from_tiles(tiles)
    }
}

impl From<PuzzleState> for [u8; CELLS] {
    fn from(state: PuzzleState) -> Self {
        state.tiles
    }
}

/// Parses nine tiles separated by whitespace, commas or `/`, e.g.
/// `"1 2 3/4 5 6/7 8 0"`. `.` and `_` are accepted for the blank.
impl FromStr for PuzzleState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tiles = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|token| !token.is_empty())
            .map(|token| {
                if token == "." || token == "_" {
                    return Ok(BLANK);
                }
                let value: u32 = token.parse().map_err(|_| Error::ParseTile {
                    token: token.to_string(),
                })?;
                u8::try_from(value)
                    .ok()
                    .filter(|&v| (v as usize) < CELLS)
                    .ok_or(Error::TileOutOfRange { value })
            })
            .collect::<Result<Vec<u8>>>()?;

        Self::from_tiles(&tiles)
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(SIZE) {
            for &val in row {
                if val == BLANK {
                    write!(f, " . ")?;
                } else {
                    write!(f, "{:2} ", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
