//! The maze grid: [`Cell`] values plus a start and goal [`Position`].
//!
//! A [`Maze`] owns a `rows × columns` row-major buffer of cells. Its
//! dimensions never change after construction, and the start and goal are
//! kept inside the grid on every mutation.
//!
//! Bounds handling is deliberately asymmetric: setters that take a
//! position ([`Maze::set_start`], [`Maze::set_goal`]) reject out-of-bounds
//! input, while per-cell queries and edits ([`Maze::is_wall`],
//! [`Maze::add_wall`], the neighbour queries, ...) quietly answer `false`,
//! do nothing, or return an empty list. Neighbour expansion at the grid
//! edges relies on the quiet behaviour.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::codec::MAX_ENCODABLE;
use crate::error::{MazeError, Result};
use crate::position::Position;

/// A single maze cell.
///
/// The discriminants are part of the byte format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Cell {
    #[default]
    Tile = 0,
    Wall = 1,
}

impl Cell {
    /// The byte stored for this cell in the encoding.
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// Inverse of [`to_byte`](Self::to_byte); `None` for anything but 0 or 1.
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(Self::Tile),
            1 => Some(Self::Wall),
            _ => None,
        }
    }
}

/// Reject dimensions below 2 or beyond what a base-127 header field holds.
pub(crate) fn check_dimensions(rows: usize, columns: usize) -> Result<()> {
    let ok = |n: usize| (2..=MAX_ENCODABLE).contains(&n);
    if ok(rows) && ok(columns) {
        Ok(())
    } else {
        Err(MazeError::InvalidDimensions { rows, columns })
    }
}

/// A rectangular maze.
///
/// Equality and hashing are defined over the byte encoding (see
/// [`crate::codec`]): two mazes are equal iff they encode to the same bytes.
#[derive(Debug, Clone)]
pub struct Maze {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    start: Position,
    goal: Position,
}

impl Maze {
    /// Create a wall-free maze with the start in the top-left corner and the
    /// goal in the bottom-right corner.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        check_dimensions(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Tile; rows * columns],
            start: Position::ZERO,
            goal: Position::new(rows as i32 - 1, columns as i32 - 1),
        })
    }

    /// Build a maze from an explicit row-major cell buffer.
    pub fn from_cells(
        rows: usize,
        columns: usize,
        cells: Vec<Cell>,
        start: Position,
        goal: Position,
    ) -> Result<Self> {
        check_dimensions(rows, columns)?;
        if cells.len() != rows * columns {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }
        let mut maze = Self {
            rows,
            columns,
            cells,
            start: Position::ZERO,
            goal: Position::ZERO,
        };
        maze.set_start(start)?;
        maze.set_goal(goal)?;
        Ok(maze)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The row-major cell buffer.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Move the start. Out-of-bounds positions are rejected and the
    /// previous start is kept.
    pub fn set_start(&mut self, p: Position) -> Result<()> {
        if !self.contains(p) {
            return Err(MazeError::InvalidPosition(p));
        }
        self.start = p;
        Ok(())
    }

    /// Move the goal. Out-of-bounds positions are rejected and the
    /// previous goal is kept.
    pub fn set_goal(&mut self, p: Position) -> Result<()> {
        if !self.contains(p) {
            return Err(MazeError::InvalidPosition(p));
        }
        self.goal = p;
        Ok(())
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row >= 0 && p.column >= 0 && (p.row as usize) < self.rows && (p.column as usize) < self.columns
    }

    #[inline]
    fn idx(&self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.columns + p.column as usize)
    }

    /// Get the cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Position) -> Option<Cell> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Whether `p` is a wall. `false` outside the grid.
    #[inline]
    pub fn is_wall(&self, p: Position) -> bool {
        self.cell(p) == Some(Cell::Wall)
    }

    /// Whether `p` is an open tile. `false` outside the grid.
    #[inline]
    pub fn is_tile(&self, p: Position) -> bool {
        self.cell(p) == Some(Cell::Tile)
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Position, cell: Cell) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = cell;
        }
    }

    /// Put a wall at `p`. Does nothing if out of bounds.
    pub fn add_wall(&mut self, p: Position) {
        self.set(p, Cell::Wall);
    }

    /// Carve `p` into a tile. Does nothing if out of bounds.
    pub fn remove_wall(&mut self, p: Position) {
        self.set(p, Cell::Tile);
    }

    /// Turn every cell into a wall.
    pub fn fill_walls(&mut self) {
        self.cells.fill(Cell::Wall);
    }

    /// Turn every cell into a tile.
    pub fn clear_walls(&mut self) {
        self.cells.fill(Cell::Tile);
    }

    /// Count cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Orthogonal neighbours of `p` that are walls, in the order up, right,
    /// down, left. Empty if `p` is outside the grid.
    pub fn neighbor_walls(&self, p: Position) -> Vec<Position> {
        if !self.contains(p) {
            return Vec::new();
        }
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.is_wall(n))
            .collect()
    }

    /// Orthogonal neighbours of `p` that are tiles, in the order up, down,
    /// left, right. Empty if `p` is outside the grid.
    pub fn neighbor_tiles(&self, p: Position) -> Vec<Position> {
        if !self.contains(p) {
            return Vec::new();
        }
        [p.up(), p.down(), p.left(), p.right()]
            .into_iter()
            .filter(|&n| self.is_tile(n))
            .collect()
    }

    /// Walls exactly two steps up, right, down or left of `p`.
    ///
    /// On a grid whose rooms sit at even indices these are the rooms not
    /// yet carved into the maze.
    pub fn walls_two_away(&self, p: Position) -> Vec<Position> {
        if !self.contains(p) {
            return Vec::new();
        }
        [p.shift(-2, 0), p.shift(0, 2), p.shift(2, 0), p.shift(0, -2)]
            .into_iter()
            .filter(|&n| self.is_wall(n))
            .collect()
    }

    /// Carve the single cell between `a` and a room two steps away from it
    /// along one axis. Any other relative placement of `b` leaves the grid
    /// untouched.
    pub fn connect(&mut self, a: Position, b: Position) -> Result<()> {
        if !self.contains(a) {
            return Err(MazeError::InvalidPosition(a));
        }
        let d = b - a;
        if (d.row == 0 && d.column.abs() == 2) || (d.column == 0 && d.row.abs() == 2) {
            self.remove_wall(a.midpoint(b));
        }
        Ok(())
    }

    /// Every border cell exactly once: top row, bottom row, then the left
    /// and right columns without their corners.
    pub fn border(&self) -> Vec<Position> {
        let (r, c) = (self.rows as i32, self.columns as i32);
        let mut out = Vec::with_capacity(2 * (self.rows + self.columns));
        for col in 0..c {
            out.push(Position::new(0, col));
            out.push(Position::new(r - 1, col));
        }
        for row in 1..r - 1 {
            out.push(Position::new(row, 0));
            out.push(Position::new(row, c - 1));
        }
        out
    }

    /// Border cells that are open tiles.
    pub fn open_border(&self) -> Vec<Position> {
        self.border().into_iter().filter(|&p| self.is_tile(p)).collect()
    }

    /// Iterate over `(Position, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().map(move |(i, &c)| {
            (Position::new((i / columns) as i32, (i % columns) as i32), c)
        })
    }
}

impl PartialEq for Maze {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for Maze {}

impl Hash for Maze {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}

impl fmt::Display for Maze {
    /// Plain text: `S` and `E` mark start and goal, other cells print their
    /// byte value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows as i32 {
            f.write_str("{")?;
            for col in 0..self.columns as i32 {
                let p = Position::new(row, col);
                if p == self.start {
                    f.write_str(" S")?;
                } else if p == self.goal {
                    f.write_str(" E")?;
                } else {
                    let b = self.cell(p).unwrap_or_default().to_byte();
                    write!(f, " {b}")?;
                }
            }
            f.write_str(" }\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_open_with_corner_endpoints() {
        let m = Maze::new(4, 6).unwrap();
        assert_eq!(m.rows(), 4);
        assert_eq!(m.columns(), 6);
        assert_eq!(m.count(Cell::Tile), 24);
        assert_eq!(m.start(), Position::new(0, 0));
        assert_eq!(m.goal(), Position::new(3, 5));
    }

    #[test]
    fn too_small_is_rejected() {
        assert_eq!(
            Maze::new(1, 5).unwrap_err(),
            MazeError::InvalidDimensions { rows: 1, columns: 5 }
        );
        assert!(Maze::new(5, 0).is_err());
        assert!(Maze::new(MAX_ENCODABLE + 1, 2).is_err());
    }

    #[test]
    fn setters_reject_and_keep_previous() {
        let mut m = Maze::new(3, 3).unwrap();
        m.set_start(Position::new(1, 2)).unwrap();
        let err = m.set_start(Position::new(3, 0)).unwrap_err();
        assert_eq!(err, MazeError::InvalidPosition(Position::new(3, 0)));
        assert_eq!(m.start(), Position::new(1, 2));
        assert!(m.set_goal(Position::new(-1, 0)).is_err());
        assert_eq!(m.goal(), Position::new(2, 2));
    }

    #[test]
    fn cell_edits_degrade_quietly() {
        let mut m = Maze::new(3, 3).unwrap();
        m.add_wall(Position::new(5, 5));
        m.remove_wall(Position::new(-1, 0));
        assert_eq!(m.count(Cell::Wall), 0);
        assert!(!m.is_wall(Position::new(9, 9)));
        assert!(!m.is_tile(Position::new(9, 9)));
        assert!(m.neighbor_tiles(Position::new(9, 9)).is_empty());

        m.add_wall(Position::new(1, 1));
        assert!(m.is_wall(Position::new(1, 1)));
        m.remove_wall(Position::new(1, 1));
        assert!(m.is_tile(Position::new(1, 1)));
    }

    #[test]
    fn neighbour_queries() {
        let mut m = Maze::new(3, 3).unwrap();
        m.add_wall(Position::new(0, 1));
        m.add_wall(Position::new(1, 0));
        let centre = Position::new(1, 1);
        assert_eq!(m.neighbor_walls(centre), vec![Position::new(0, 1), Position::new(1, 0)]);
        assert_eq!(m.neighbor_tiles(centre), vec![Position::new(2, 1), Position::new(1, 2)]);
        // Corner: only in-bounds neighbours are considered.
        assert_eq!(m.neighbor_tiles(Position::ZERO), Vec::<Position>::new());
    }

    #[test]
    fn walls_two_away_and_connect() {
        let mut m = Maze::new(5, 5).unwrap();
        m.fill_walls();
        let room = Position::new(2, 2);
        m.remove_wall(room);
        assert_eq!(m.walls_two_away(room).len(), 4);

        m.connect(room, Position::new(2, 4)).unwrap();
        assert!(m.is_tile(Position::new(2, 3)));
        m.connect(room, Position::new(0, 2)).unwrap();
        assert!(m.is_tile(Position::new(1, 2)));
        // Not two steps apart on a single axis: nothing carved.
        m.connect(room, Position::new(4, 4)).unwrap();
        assert_eq!(m.count(Cell::Tile), 3);

        assert!(m.connect(Position::new(7, 0), room).is_err());
    }

    #[test]
    fn border_lists_each_cell_once() {
        let m = Maze::new(4, 5).unwrap();
        let mut border = m.border();
        assert_eq!(border.len(), 2 * 5 + 2 * 2);
        border.sort();
        border.dedup();
        assert_eq!(border.len(), 14);

        let m = Maze::new(2, 2).unwrap();
        assert_eq!(m.border().len(), 4);
    }

    #[test]
    fn from_cells_validates() {
        let cells = vec![Cell::Tile, Cell::Wall, Cell::Tile, Cell::Tile];
        let m = Maze::from_cells(2, 2, cells.clone(), Position::ZERO, Position::new(1, 1)).unwrap();
        assert!(m.is_wall(Position::new(0, 1)));

        assert!(Maze::from_cells(2, 3, cells.clone(), Position::ZERO, Position::ZERO).is_err());
        assert_eq!(
            Maze::from_cells(2, 2, cells, Position::ZERO, Position::new(2, 2)).unwrap_err(),
            MazeError::InvalidPosition(Position::new(2, 2))
        );
    }

    #[test]
    fn display_marks_endpoints() {
        let mut m = Maze::new(2, 3).unwrap();
        m.add_wall(Position::new(0, 1));
        assert_eq!(m.to_string(), "{ S 1 0 }\n{ 0 0 E }\n");
    }

    #[test]
    fn equality_ignores_history() {
        let mut a = Maze::new(3, 3).unwrap();
        let b = Maze::new(3, 3).unwrap();
        a.add_wall(Position::new(1, 1));
        assert_ne!(a, b);
        a.remove_wall(Position::new(1, 1));
        assert_eq!(a, b);
    }

    #[test]
    fn iter_is_row_major() {
        let m = Maze::new(2, 3).unwrap();
        let ps: Vec<_> = m.iter().map(|(p, _)| p).collect();
        assert_eq!(ps[0], Position::new(0, 0));
        assert_eq!(ps[3], Position::new(1, 0));
        assert_eq!(ps.len(), 6);
    }
}
