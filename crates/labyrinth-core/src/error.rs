//! Error taxonomy for maze construction, mutation, decoding and lookup.

use std::fmt;

use crate::position::Position;

/// Convenience alias used throughout the labyrinth crates.
pub type Result<T> = std::result::Result<T, MazeError>;

/// Errors raised by the maze core.
///
/// Every variant is local and recoverable by the caller. An unsolvable
/// maze is *not* an error: searches report it as an empty solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Rows or columns below 2, or above what the byte format can carry.
    InvalidDimensions { rows: usize, columns: usize },
    /// A position outside the grid was given where bounds are required.
    InvalidPosition(Position),
    /// The border has no second open cell to place a goal on.
    NoReachableGoal,
    /// A byte buffer does not follow the maze format.
    MalformedEncoding(String),
    /// A string does not follow the `{row,column}` format.
    MalformedPosition(String),
    /// No generator or strategy is registered under `name`.
    UnknownAlgorithm { kind: &'static str, name: String },
    /// A second factory was registered under an existing name.
    DuplicateAlgorithm { kind: &'static str, name: String },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, columns } => write!(
                f,
                "invalid maze dimensions {rows}x{columns}: both must be between 2 and {}",
                crate::codec::MAX_ENCODABLE
            ),
            Self::InvalidPosition(p) => write!(f, "position {p} is outside the maze"),
            Self::NoReachableGoal => {
                write!(f, "no open border cell distinct from the start to place a goal on")
            }
            Self::MalformedEncoding(why) => write!(f, "malformed maze encoding: {why}"),
            Self::MalformedPosition(s) => {
                write!(f, "malformed position \u{201c}{s}\u{201d}: expected {{row,column}}")
            }
            Self::UnknownAlgorithm { kind, name } => write!(f, "unknown {kind} \u{201c}{name}\u{201d}"),
            Self::DuplicateAlgorithm { kind, name } => {
                write!(f, "{kind} \u{201c}{name}\u{201d} is already registered")
            }
        }
    }
}

impl std::error::Error for MazeError {}
