//! Maze byte encoding.
//!
//! The encoding is the canonical form of a [`Maze`]: it is what gets
//! stored and sent over the wire, and it defines maze equality.
//!
//! ## Wire format
//!
//! ```text
//! [rows:         2 bytes base-127]
//! [columns:      2 bytes base-127]
//! [start row:    2 bytes base-127]
//! [start column: 2 bytes base-127]
//! [goal row:     2 bytes base-127]
//! [goal column:  2 bytes base-127]
//! rows * columns cells, row-major, one byte each: 0 = tile, 1 = wall
//! ```
//!
//! A base-127 field is `[n % 127, (n / 127) % 127]`, least significant
//! digit first, so no field can exceed [`MAX_ENCODABLE`]. Mazes that would
//! not fit are refused at construction rather than silently wrapped.

use std::io::{self, Read, Write};

use crate::error::{MazeError, Result};
use crate::maze::{Cell, Maze, check_dimensions};
use crate::position::Position;

/// Base of each header digit.
const BASE: usize = 127;
/// Largest value a two-digit base-127 field can carry.
pub const MAX_ENCODABLE: usize = BASE * BASE - 1;
/// Six two-byte fields.
pub const HEADER_LEN: usize = 12;

fn push_base127(out: &mut Vec<u8>, n: usize) {
    debug_assert!(n <= MAX_ENCODABLE);
    out.push((n % BASE) as u8);
    out.push(((n / BASE) % BASE) as u8);
}

fn read_base127(bytes: &[u8], at: usize) -> Result<usize> {
    let (lo, hi) = (bytes[at] as usize, bytes[at + 1] as usize);
    if lo >= BASE || hi >= BASE {
        return Err(MazeError::MalformedEncoding(format!(
            "header bytes {at}..{} are not base-127 digits",
            at + 2
        )));
    }
    Ok(hi * BASE + lo)
}

fn read_position(bytes: &[u8], at: usize) -> Result<Position> {
    let row = read_base127(bytes, at)?;
    let column = read_base127(bytes, at + 2)?;
    Ok(Position::new(row as i32, column as i32))
}

impl Maze {
    /// Encode the maze. Exactly `12 + rows * columns` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.cells().len());
        push_base127(&mut out, self.rows());
        push_base127(&mut out, self.columns());
        for p in [self.start(), self.goal()] {
            push_base127(&mut out, p.row as usize);
            push_base127(&mut out, p.column as usize);
        }
        out.extend(self.cells().iter().map(|c| c.to_byte()));
        out
    }

    /// Decode a maze produced by [`to_bytes`](Self::to_bytes).
    ///
    /// The buffer must hold exactly the header plus `rows * columns` cells.
    /// Short or oversized buffers, digits outside base 127, cell bytes
    /// other than 0 or 1, and endpoints outside the grid are all reported
    /// as [`MazeError::MalformedEncoding`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(MazeError::MalformedEncoding(format!(
                "{} bytes is shorter than the {HEADER_LEN}-byte header",
                bytes.len()
            )));
        }
        let rows = read_base127(bytes, 0)?;
        let columns = read_base127(bytes, 2)?;
        check_dimensions(rows, columns).map_err(|_| {
            MazeError::MalformedEncoding(format!("header declares a {rows}x{columns} maze"))
        })?;
        let start = read_position(bytes, 4)?;
        let goal = read_position(bytes, 8)?;

        let expected = HEADER_LEN + rows * columns;
        if bytes.len() != expected {
            return Err(MazeError::MalformedEncoding(format!(
                "expected {expected} bytes for a {rows}x{columns} maze, got {}",
                bytes.len()
            )));
        }

        let cells = bytes[HEADER_LEN..]
            .iter()
            .enumerate()
            .map(|(i, &b)| {
                Cell::from_byte(b).ok_or_else(|| {
                    MazeError::MalformedEncoding(format!("cell {i} has value {b}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Maze::from_cells(rows, columns, cells, start, goal).map_err(|e| match e {
            MazeError::InvalidPosition(p) => {
                MazeError::MalformedEncoding(format!("endpoint {p} lies outside the grid"))
            }
            other => other,
        })
    }

    /// Write the encoding to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())?;
        writer.flush()
    }

    /// Read a whole encoded maze from `reader`.
    pub fn read_from<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Maze {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Maze {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bytes = <Vec<u8>>::deserialize(deserializer)?;
        Maze::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}
