//! [`Searchable`] view of a [`Maze`].

use labyrinth_core::{Maze, Position};

use crate::traits::Searchable;

/// Cost of one orthogonal step.
pub const STEP_COST: u32 = 1;

/// Exposes a maze as a search problem over [`Position`]s.
///
/// Moves go up, down, left or right onto open tiles, each costing
/// [`STEP_COST`]. Diagonal moves are never offered. The adapter only reads
/// the maze.
#[derive(Debug, Clone, Copy)]
pub struct SearchableMaze<'a> {
    maze: &'a Maze,
}

impl<'a> SearchableMaze<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self { maze }
    }

    /// The wrapped maze.
    pub fn maze(&self) -> &'a Maze {
        self.maze
    }
}

impl Searchable for SearchableMaze<'_> {
    type State = Position;

    fn initial_state(&self) -> Position {
        self.maze.start()
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.maze.goal()
    }

    fn successors(&self, state: &Position, buf: &mut Vec<(Position, u32)>) {
        buf.extend(
            self.maze
                .neighbor_tiles(*state)
                .into_iter()
                .map(|p| (p, STEP_COST)),
        );
    }
}
