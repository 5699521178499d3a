//! Grid coordinates: [`Position`].
//!
//! Rows grow downward and columns grow to the right. Positions are plain
//! values: every directional helper returns a new position and never
//! mutates the receiver. Coordinates may go negative while doing
//! adjacency arithmetic; bounds are the maze's business, not ours.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::MazeError;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A `(row, column)` pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    /// Origin `{0,0}`.
    pub const ZERO: Self = Self { row: 0, column: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Return a position shifted by `(dr, dc)`.
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            column: self.column + dc,
        }
    }

    #[inline]
    pub const fn up(self) -> Self {
        self.shift(-1, 0)
    }

    #[inline]
    pub const fn down(self) -> Self {
        self.shift(1, 0)
    }

    #[inline]
    pub const fn left(self) -> Self {
        self.shift(0, -1)
    }

    #[inline]
    pub const fn right(self) -> Self {
        self.shift(0, 1)
    }

    #[inline]
    pub const fn up_left(self) -> Self {
        self.shift(-1, -1)
    }

    #[inline]
    pub const fn up_right(self) -> Self {
        self.shift(-1, 1)
    }

    #[inline]
    pub const fn down_left(self) -> Self {
        self.shift(1, -1)
    }

    #[inline]
    pub const fn down_right(self) -> Self {
        self.shift(1, 1)
    }

    /// The four orthogonal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Position; 4] {
        [self.up(), self.right(), self.down(), self.left()]
    }

    /// All eight neighbours, clockwise from up.
    #[inline]
    pub fn neighbors_8(self) -> [Position; 8] {
        [
            self.up(),
            self.up_right(),
            self.right(),
            self.down_right(),
            self.down(),
            self.down_left(),
            self.left(),
            self.up_left(),
        ]
    }

    /// The position halfway between `self` and `other`.
    ///
    /// Only meaningful when the two are an even number of steps apart on
    /// each axis; used to find the wall between two rooms.
    #[inline]
    pub fn midpoint(self, other: Position) -> Position {
        Self::new(
            (self.row + other.row).div_euclid(2),
            (self.column + other.column).div_euclid(2),
        )
    }
}

// --- trait impls for Position ---

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    /// Row-major order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.row, self.column)
    }
}

impl FromStr for Position {
    type Err = MazeError;

    /// Parse the `{row,column}` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MazeError::MalformedPosition(s.to_string());
        let inner = s
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(malformed)?;
        let (row, column) = inner.split_once(',').ok_or_else(malformed)?;
        let row = row.parse::<i32>().map_err(|_| malformed())?;
        let column = column.parse::<i32>().map_err(|_| malformed())?;
        Ok(Self::new(row, column))
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.column + rhs.column)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.column - rhs.column)
    }
}
