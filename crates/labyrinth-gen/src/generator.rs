//! The [`MazeGenerator`] contract and the built-in generators.

use std::time::{Duration, Instant};

use labyrinth_core::{Maze, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::mapgen::MazeGen;

/// Something that turns requested dimensions into a finished [`Maze`].
///
/// Implementors only provide [`carve`](Self::carve); construction,
/// seeding and timing are shared.
pub trait MazeGenerator {
    /// Human-readable name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Fill in the walls, start and goal of the maze held by `mg`.
    fn carve<R: Rng>(&self, mg: &mut MazeGen<R>) -> Result<()>;

    /// Generate with an explicit random source.
    ///
    /// Fails with `InvalidDimensions` unless both dimensions are at least 2.
    fn generate_with<R: Rng>(&self, rows: usize, columns: usize, rng: R) -> Result<Maze> {
        let began = Instant::now();
        let mut mg = MazeGen::new(rows, columns, rng)?;
        self.carve(&mut mg)?;
        log::debug!(
            "{}: generated {rows}x{columns} maze in {:?}",
            self.name(),
            began.elapsed()
        );
        Ok(mg.into_maze())
    }

    /// Generate with a random source freshly seeded from the OS, so
    /// concurrent callers never share a random stream.
    fn generate(&self, rows: usize, columns: usize) -> Result<Maze> {
        self.generate_with(rows, columns, rand::make_rng::<SmallRng>())
    }

    /// Generate reproducibly from `seed`.
    fn generate_seeded(&self, rows: usize, columns: usize, seed: u64) -> Result<Maze> {
        self.generate_with(rows, columns, SmallRng::seed_from_u64(seed))
    }

    /// Wall-clock time of one [`generate`](Self::generate) call.
    fn measure_algorithm_time(&self, rows: usize, columns: usize) -> Result<Duration> {
        let began = Instant::now();
        self.generate(rows, columns)?;
        let elapsed = began.elapsed();
        log::info!("{}: {rows}x{columns} took {} ms", self.name(), elapsed.as_millis());
        Ok(elapsed)
    }
}

/// Generates mazes without a single wall.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyMazeGenerator;

impl MazeGenerator for EmptyMazeGenerator {
    fn name(&self) -> &'static str {
        "Empty Maze Generator"
    }

    fn carve<R: Rng>(&self, mg: &mut MazeGen<R>) -> Result<()> {
        mg.maze.clear_walls();
        mg.place_start_on_border()?;
        mg.place_goal()?;
        Ok(())
    }
}

/// Generates mazes of randomly scattered walls with one guaranteed path.
///
/// Start and goal go on the border of an open grid, walls are then
/// scattered at [`SimpleMazeGenerator::WALL_DENSITY`], and finally a
/// staircase from start to goal is cleared.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleMazeGenerator;

impl SimpleMazeGenerator {
    pub const WALL_DENSITY: f64 = 0.4;
}

impl MazeGenerator for SimpleMazeGenerator {
    fn name(&self) -> &'static str {
        "Simple Maze Generator"
    }

    fn carve<R: Rng>(&self, mg: &mut MazeGen<R>) -> Result<()> {
        mg.maze.clear_walls();
        let start = mg.place_start_on_border()?;
        let goal = mg.place_goal()?;
        mg.scatter_walls(Self::WALL_DENSITY);
        mg.carve_path(start, goal)?;
        Ok(())
    }
}

/// Generates perfect mazes by randomized Prim carving.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimMazeGenerator;

impl MazeGenerator for PrimMazeGenerator {
    fn name(&self) -> &'static str {
        "Prim Maze Generator"
    }

    fn carve<R: Rng>(&self, mg: &mut MazeGen<R>) -> Result<()> {
        mg.carve_prim()?;
        mg.open_ragged_edges();
        mg.place_start()?;
        mg.place_goal()?;
        Ok(())
    }
}
