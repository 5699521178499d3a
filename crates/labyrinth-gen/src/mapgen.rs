//! Carving workspace shared by the generators.
//!
//! [`MazeGen`] pairs a [`Maze`] with a random number generator and offers
//! the building blocks the generators are made of: randomized Prim
//! carving, random wall scatter with a carved staircase path, and border
//! placement of the start and goal.

use labyrinth_core::{Maze, MazeError, Position, Result};
use rand::{Rng, RngExt};

/// Maze generator state operating on a [`Maze`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub maze: Maze,
}

impl<R: Rng> MazeGen<R> {
    /// Start from a fresh, wall-free `rows × columns` maze.
    pub fn new(rows: usize, columns: usize, rng: R) -> Result<Self> {
        Ok(Self::with_maze(Maze::new(rows, columns)?, rng))
    }

    /// Work on an existing maze.
    pub fn with_maze(maze: Maze, rng: R) -> Self {
        Self { rng, maze }
    }

    /// Consume the workspace, returning the maze.
    pub fn into_maze(self) -> Maze {
        self.maze
    }

    /// Carve a perfect maze with randomized Prim.
    ///
    /// Rooms are the cells with even row and column; the odd cells between
    /// two rooms are the walls that may be removed.
    ///
    /// 1. Wall up the whole grid.
    /// 2. Open a random room and put the walls to its neighbouring rooms on
    ///    the frontier.
    /// 3. Take a random frontier entry. If the room behind it is still
    ///    closed, knock down the wall in between, open the room and add its
    ///    own frontier entries. Otherwise drop the entry.
    ///
    /// Every room ends up open and joined to the rest by exactly one path.
    ///
    /// Returns the number of rooms opened.
    pub fn carve_prim(&mut self) -> Result<usize> {
        self.maze.fill_walls();
        let room_rows = self.maze.rows().div_ceil(2);
        let room_cols = self.maze.columns().div_ceil(2);
        let seed = Position::new(
            2 * self.rng.random_range(0..room_rows) as i32,
            2 * self.rng.random_range(0..room_cols) as i32,
        );

        self.maze.remove_wall(seed);
        let mut opened = 1;
        let mut frontier: Vec<(Position, Position)> = self
            .maze
            .walls_two_away(seed)
            .into_iter()
            .map(|n| (seed, n))
            .collect();

        while !frontier.is_empty() {
            let (room, next) = frontier.swap_remove(self.rng.random_range(0..frontier.len()));
            if !self.maze.is_wall(next) {
                continue;
            }
            self.maze.connect(room, next)?;
            self.maze.remove_wall(next);
            opened += 1;
            frontier.extend(self.maze.walls_two_away(next).into_iter().map(|n| (next, n)));
        }

        debug_assert_eq!(opened, room_rows * room_cols);
        Ok(opened)
    }

    /// On an even dimension the last row (or column) holds no rooms and
    /// stays solid after [`carve_prim`](Self::carve_prim). Open one cell of
    /// it next to a room, as a dead end, so the far border is usable and a
    /// 2-wide maze still has two open border cells.
    pub fn open_ragged_edges(&mut self) {
        let (rows, cols) = (self.maze.rows(), self.maze.columns());
        if rows % 2 == 0 {
            let c = 2 * self.rng.random_range(0..cols.div_ceil(2)) as i32;
            self.maze.remove_wall(Position::new(rows as i32 - 1, c));
        }
        if cols % 2 == 0 {
            let r = 2 * self.rng.random_range(0..rows.div_ceil(2)) as i32;
            self.maze.remove_wall(Position::new(r, cols as i32 - 1));
        }
    }

    /// Turn each cell into a wall with probability `density`, leaving the
    /// start and goal open.
    pub fn scatter_walls(&mut self, density: f64) {
        let (rows, cols) = (self.maze.rows() as i32, self.maze.columns() as i32);
        for row in 0..rows {
            for col in 0..cols {
                let p = Position::new(row, col);
                if p != self.maze.start() && p != self.maze.goal() && self.rng.random_bool(density) {
                    self.maze.add_wall(p);
                }
            }
        }
    }

    /// Open a monotone staircase from `from` to `to`, each step moving one
    /// cell closer along a randomly chosen axis. Returns the cells opened
    /// along the way, endpoints included.
    pub fn carve_path(&mut self, from: Position, to: Position) -> Result<Vec<Position>> {
        if !self.maze.contains(from) {
            return Err(MazeError::InvalidPosition(from));
        }
        if !self.maze.contains(to) {
            return Err(MazeError::InvalidPosition(to));
        }
        let mut cur = from;
        let mut path = vec![cur];
        self.maze.remove_wall(cur);
        while cur != to {
            let d = to - cur;
            let vertical = d.column == 0 || (d.row != 0 && self.rng.random_bool(0.5));
            cur = if vertical {
                cur.shift(d.row.signum(), 0)
            } else {
                cur.shift(0, d.column.signum())
            };
            self.maze.remove_wall(cur);
            path.push(cur);
        }
        Ok(path)
    }

    /// The four sides of the border, top, right, bottom, left.
    fn sides(&self) -> [Vec<Position>; 4] {
        let (r, c) = (self.maze.rows() as i32, self.maze.columns() as i32);
        [
            (0..c).map(|col| Position::new(0, col)).collect(),
            (0..r).map(|row| Position::new(row, c - 1)).collect(),
            (0..c).map(|col| Position::new(r - 1, col)).collect(),
            (0..r).map(|row| Position::new(row, 0)).collect(),
        ]
    }

    /// Pick a uniformly random side, then a uniformly random cell along it.
    /// The cell may be a wall.
    pub fn random_border_position(&mut self) -> Position {
        let mut sides = self.sides();
        let side = &mut sides[self.rng.random_range(0..4)];
        side.swap_remove(self.rng.random_range(0..side.len()))
    }

    /// Put the start on [`random_border_position`](Self::random_border_position),
    /// opening that cell if it is a wall.
    pub fn place_start_on_border(&mut self) -> Result<Position> {
        let start = self.random_border_position();
        self.maze.remove_wall(start);
        self.maze.set_start(start)?;
        Ok(start)
    }

    /// Put the start on an open border cell: a random side among those with
    /// an open cell, then a random open cell along it.
    pub fn place_start(&mut self) -> Result<Position> {
        let open: Vec<Vec<Position>> = self
            .sides()
            .into_iter()
            .map(|side| side.into_iter().filter(|&p| self.maze.is_tile(p)).collect::<Vec<_>>())
            .filter(|side| !side.is_empty())
            .collect();
        if open.is_empty() {
            log::warn!("no open border cell for the start");
            return Err(MazeError::NoReachableGoal);
        }
        let side = &open[self.rng.random_range(0..open.len())];
        let start = side[self.rng.random_range(0..side.len())];
        self.maze.set_start(start)?;
        Ok(start)
    }

    /// Put the goal on a random open border cell other than the start.
    ///
    /// Fails with [`MazeError::NoReachableGoal`] when the border has at
    /// most one open cell.
    pub fn place_goal(&mut self) -> Result<Position> {
        let candidates = self.maze.open_border();
        if candidates.len() <= 1 {
            log::warn!("border has {} open cells, cannot place a goal", candidates.len());
            return Err(MazeError::NoReachableGoal);
        }
        let start = self.maze.start();
        let candidates: Vec<Position> = candidates.into_iter().filter(|&p| p != start).collect();
        let goal = candidates[self.rng.random_range(0..candidates.len())];
        self.maze.set_goal(goal)?;
        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::Cell;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn mapgen(rows: usize, cols: usize, seed: u64) -> MazeGen<SmallRng> {
        MazeGen::new(rows, cols, SmallRng::seed_from_u64(seed)).unwrap()
    }

    /// Open cells form a tree: connected, with one fewer adjacency than cells.
    fn is_tree(maze: &Maze) -> bool {
        let tiles: Vec<Position> = maze.iter().filter(|(_, c)| *c == Cell::Tile).map(|(p, _)| p).collect();
        let edges = tiles
            .iter()
            .map(|&p| usize::from(maze.is_tile(p.right())) + usize::from(maze.is_tile(p.down())))
            .sum::<usize>();
        let mut seen = std::collections::HashSet::new();
        let mut stack = vec![tiles[0]];
        seen.insert(tiles[0]);
        while let Some(p) = stack.pop() {
            for n in maze.neighbor_tiles(p) {
                if seen.insert(n) {
                    stack.push(n);
                }
            }
        }
        seen.len() == tiles.len() && edges + 1 == tiles.len()
    }

    #[test]
    fn prim_opens_every_room() {
        for (rows, cols) in [(5, 5), (6, 9), (2, 2), (11, 4)] {
            let mut mg = mapgen(rows, cols, 7);
            let opened = mg.carve_prim().unwrap();
            assert_eq!(opened, rows.div_ceil(2) * cols.div_ceil(2));
            for (p, c) in mg.maze.iter() {
                if p.row % 2 == 0 && p.column % 2 == 0 {
                    assert_eq!(c, Cell::Tile, "room {p} left closed");
                }
                if p.row % 2 == 1 && p.column % 2 == 1 {
                    assert_eq!(c, Cell::Wall, "pillar {p} carved");
                }
            }
        }
    }

    #[test]
    fn prim_carves_a_tree() {
        for seed in 0..20 {
            let mut mg = mapgen(9, 12, seed);
            mg.carve_prim().unwrap();
            mg.open_ragged_edges();
            assert!(is_tree(&mg.maze), "seed {seed}");
        }
    }

    #[test]
    fn ragged_edges_only_on_even_dimensions() {
        let mut mg = mapgen(5, 7, 1);
        mg.carve_prim().unwrap();
        let before = mg.maze.count(Cell::Tile);
        mg.open_ragged_edges();
        assert_eq!(mg.maze.count(Cell::Tile), before);

        let mut mg = mapgen(4, 6, 1);
        mg.carve_prim().unwrap();
        let before = mg.maze.count(Cell::Tile);
        mg.open_ragged_edges();
        assert_eq!(mg.maze.count(Cell::Tile), before + 2);
    }

    #[test]
    fn random_border_position_is_on_border() {
        let mut mg = mapgen(6, 8, 3);
        for _ in 0..200 {
            let p = mg.random_border_position();
            assert!(mg.maze.contains(p));
            assert!(p.row == 0 || p.row == 5 || p.column == 0 || p.column == 7);
        }
    }

    #[test]
    fn start_and_goal_are_distinct_open_border_cells() {
        for seed in 0..30 {
            let mut mg = mapgen(7, 7, seed);
            mg.carve_prim().unwrap();
            let start = mg.place_start().unwrap();
            let goal = mg.place_goal().unwrap();
            assert_ne!(start, goal);
            assert!(mg.maze.is_tile(start) && mg.maze.is_tile(goal));
            assert!(mg.maze.open_border().contains(&start));
            assert!(mg.maze.open_border().contains(&goal));
        }
    }

    #[test]
    fn scatter_keeps_endpoints_open() {
        let mut mg = mapgen(12, 12, 5);
        mg.maze.set_goal(Position::new(11, 3)).unwrap();
        mg.scatter_walls(1.0);
        assert_eq!(mg.maze.count(Cell::Wall), 12 * 12 - 2);
        assert!(mg.maze.is_tile(mg.maze.start()));
        assert!(mg.maze.is_tile(mg.maze.goal()));

        let mut mg = mapgen(12, 12, 5);
        mg.scatter_walls(0.0);
        assert_eq!(mg.maze.count(Cell::Wall), 0);
    }

    #[test]
    fn carved_path_is_a_monotone_walk() {
        for seed in 0..20 {
            let mut mg = mapgen(9, 14, seed);
            mg.maze.fill_walls();
            let (from, to) = (Position::new(8, 2), Position::new(0, 13));
            let path = mg.carve_path(from, to).unwrap();
            assert_eq!(path.first(), Some(&from));
            assert_eq!(path.last(), Some(&to));
            assert_eq!(path.len(), 8 + 11 + 1);
            assert!(path.windows(2).all(|w| {
                let d = w[1] - w[0];
                d.row.abs() + d.column.abs() == 1
            }));
            assert!(path.iter().all(|&p| mg.maze.is_tile(p)));
            assert_eq!(mg.maze.count(Cell::Tile), path.len());
        }
        let mut mg = mapgen(3, 3, 0);
        assert_eq!(
            mg.carve_path(Position::ZERO, Position::new(3, 0)),
            Err(MazeError::InvalidPosition(Position::new(3, 0)))
        );
    }

    #[test]
    fn start_on_border_opens_its_cell() {
        for seed in 0..20 {
            let mut mg = mapgen(5, 6, seed);
            mg.maze.fill_walls();
            let start = mg.place_start_on_border().unwrap();
            assert_eq!(mg.maze.start(), start);
            assert!(mg.maze.is_tile(start));
            assert!(mg.maze.border().contains(&start));
        }
    }

    #[test]
    fn goal_needs_two_open_border_cells() {
        let mut mg = mapgen(3, 3, 0);
        mg.maze.fill_walls();
        assert_eq!(mg.place_start(), Err(MazeError::NoReachableGoal));
        mg.maze.remove_wall(Position::new(0, 1));
        mg.maze.remove_wall(Position::new(1, 1));
        mg.place_start().unwrap();
        assert_eq!(mg.place_goal(), Err(MazeError::NoReachableGoal));
        assert_eq!(mg.maze.goal(), Position::new(2, 2));
    }
}
