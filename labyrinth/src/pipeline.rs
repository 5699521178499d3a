//! Generate-then-solve runs built from a [`Config`].
//!
//! Every run owns its maze, adapter and strategy instance, so runs can be
//! spread over a worker pool without sharing mutable state.

use std::fmt;
use std::time::{Duration, Instant};

use labyrinth_core::{Maze, MazeError, Position};
use labyrinth_gen::MazeGenerator;
use labyrinth_search::{SearchAlgorithm, SearchableMaze, Solution, Strategy};
use rayon::prelude::*;

use crate::config::Config;

/// What one strategy did on one maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub strategy: &'static str,
    pub nodes_evaluated: usize,
    pub solution: Solution<Position>,
    pub elapsed: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<22} evaluated {:>7}  length {:>5}  cost {:>5}  {:?}",
            self.strategy,
            self.nodes_evaluated,
            self.solution.len(),
            self.solution.cost(),
            self.elapsed
        )
    }
}

/// Generate a maze with the configured generator, reproducibly when a
/// seed is given.
pub fn generate(config: &Config, rows: usize, columns: usize, seed: Option<u64>) -> Result<Maze, MazeError> {
    let generator = labyrinth_gen::registry()?.create(&config.generator)?;
    match seed {
        Some(seed) => generator.generate_seeded(rows, columns, seed),
        None => generator.generate(rows, columns),
    }
}

/// Solve `maze` with a fresh instance of `strategy`.
pub fn solve_with(mut strategy: Strategy, maze: &Maze) -> Report {
    let began = Instant::now();
    let solution = strategy.solve(&SearchableMaze::new(maze));
    let report = Report {
        strategy: strategy.name(),
        nodes_evaluated: strategy.nodes_evaluated(),
        solution,
        elapsed: began.elapsed(),
    };
    log::debug!(
        "{}: {} nodes evaluated, path length {}",
        report.strategy,
        report.nodes_evaluated,
        report.solution.len()
    );
    report
}

/// Solve `maze` with the configured strategy.
pub fn solve(config: &Config, maze: &Maze) -> Result<Report, MazeError> {
    let strategy = labyrinth_search::registry()?.create(&config.searcher)?;
    Ok(solve_with(strategy, maze))
}

/// Solve `maze` once with every registered strategy, in registry order.
pub fn compare(maze: &Maze) -> Result<Vec<Report>, MazeError> {
    let registry = labyrinth_search::registry()?;
    registry
        .names()
        .map(|name| Ok(solve_with(registry.create(name)?, maze)))
        .collect()
}

/// Run `count` independent generate-then-solve pipelines on a pool of
/// `config.thread_pool_size` workers. With a seed, run `i` uses `seed + i`.
pub fn bench(
    config: &Config,
    count: usize,
    rows: usize,
    columns: usize,
    seed: Option<u64>,
) -> Result<Vec<Report>, PipelineError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.thread_pool_size)
        .build()?;
    log::info!(
        "running {count} pipelines of {rows}x{columns} on {} threads",
        config.thread_pool_size
    );
    let reports = pool.install(|| {
        (0..count)
            .into_par_iter()
            .map(|i| {
                let maze = generate(config, rows, columns, seed.map(|s| s.wrapping_add(i as u64)))?;
                solve(config, &maze)
            })
            .collect::<Result<Vec<_>, MazeError>>()
    })?;
    Ok(reports)
}

#[derive(Debug)]
pub enum PipelineError {
    Maze(MazeError),
    Pool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maze(e) => fmt::Display::fmt(e, f),
            Self::Pool(e) => write!(f, "cannot start worker pool: {e}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            Self::Pool(e) => Some(e),
        }
    }
}

impl From<MazeError> for PipelineError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for PipelineError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Self::Pool(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::Cell;
    use labyrinth_search::{BEST_FIRST, BREADTH_FIRST, BreadthFirstSearch, DEPTH_FIRST};
    use rand::rngs::SmallRng;
    use rand::{RngExt, SeedableRng};
    use std::collections::HashSet;

    fn prim() -> Config {
        Config::default()
    }

    fn empty() -> Config {
        Config {
            generator: labyrinth_gen::EMPTY.to_string(),
            ..Config::default()
        }
    }

    fn is_walk(maze: &Maze, path: &[Position]) -> bool {
        path.first() == Some(&maze.start())
            && path.last() == Some(&maze.goal())
            && path.iter().all(|&p| maze.is_tile(p))
            && path.windows(2).all(|w| {
                let d = w[1] - w[0];
                d.row.abs() + d.column.abs() == 1
            })
    }

    /// Random dimensions and seeds, reproducible across runs.
    fn cases(n: usize) -> Vec<(usize, usize, u64)> {
        let mut rng = SmallRng::seed_from_u64(0x1ab);
        (0..n)
            .map(|_| {
                (
                    rng.random_range(2..40),
                    rng.random_range(2..40),
                    rng.random_range(0..u64::MAX),
                )
            })
            .collect()
    }

    #[test]
    fn encoding_round_trips() {
        for (rows, cols, seed) in cases(25) {
            let m = generate(&prim(), rows, cols, Some(seed)).unwrap();
            let bytes = m.to_bytes();
            assert_eq!(bytes.len(), 12 + rows * cols);
            let back = Maze::from_bytes(&bytes).unwrap();
            assert_eq!(back, m);
            assert_eq!(back.to_bytes(), bytes);
        }
    }

    #[test]
    fn prim_open_cells_form_a_tree() {
        for (rows, cols, seed) in cases(25) {
            let m = generate(&prim(), rows, cols, Some(seed)).unwrap();
            let tiles: Vec<Position> = m.iter().filter(|(_, c)| *c == Cell::Tile).map(|(p, _)| p).collect();
            let edges: usize = tiles
                .iter()
                .map(|&p| usize::from(m.is_tile(p.right())) + usize::from(m.is_tile(p.down())))
                .sum();
            assert_eq!(edges + 1, tiles.len(), "{rows}x{cols} seed {seed}");

            // Every open cell is reached from the start.
            let mut seen = HashSet::from([m.start()]);
            let mut stack = vec![m.start()];
            while let Some(p) = stack.pop() {
                stack.extend(m.neighbor_tiles(p).into_iter().filter(|&n| seen.insert(n)));
            }
            assert_eq!(seen.len(), tiles.len());
        }
    }

    #[test]
    fn endpoints_are_distinct_open_border_cells() {
        for (rows, cols, seed) in cases(25) {
            let m = generate(&prim(), rows, cols, Some(seed)).unwrap();
            assert_ne!(m.start(), m.goal());
            let border = m.open_border();
            assert!(border.contains(&m.start()));
            assert!(border.contains(&m.goal()));
        }
    }

    #[test]
    fn strategies_agree_on_generated_mazes() {
        for (rows, cols, seed) in cases(25) {
            let m = generate(&prim(), rows, cols, Some(seed)).unwrap();
            let reports = compare(&m).unwrap();
            let [bfs, dfs, best] = reports.as_slice() else {
                panic!("expected three strategies");
            };
            assert_eq!(bfs.strategy, "Breadth First Search");
            assert!(!bfs.solution.is_empty());
            assert_eq!(bfs.solution.cost(), best.solution.cost());
            assert_eq!(bfs.solution.len(), best.solution.len());
            assert!(is_walk(&m, bfs.solution.path()));
            assert!(is_walk(&m, dfs.solution.path()));
            assert!(is_walk(&m, best.solution.path()));
            // In a perfect maze there is exactly one simple path.
            assert_eq!(dfs.solution.path(), bfs.solution.path());
        }
    }

    #[test]
    fn open_five_by_five() {
        let mut m = Maze::new(5, 5).unwrap();
        m.set_start(Position::new(0, 0)).unwrap();
        m.set_goal(Position::new(4, 4)).unwrap();
        let r = solve_with(Strategy::BreadthFirst(BreadthFirstSearch::new()), &m);
        assert_eq!(r.solution.len(), 9);
        assert_eq!(r.solution.cost(), 8);
        assert!(is_walk(&m, r.solution.path()));
    }

    #[test]
    fn empty_generator_is_solvable_by_every_strategy() {
        let m = generate(&empty(), 6, 7, Some(3)).unwrap();
        assert_eq!(m.count(Cell::Wall), 0);
        for r in compare(&m).unwrap() {
            assert!(is_walk(&m, r.solution.path()), "{}", r.strategy);
        }
    }

    #[test]
    fn configured_strategy_is_used() {
        let m = generate(&prim(), 9, 9, Some(1)).unwrap();
        for (name, display) in [
            (BREADTH_FIRST, "Breadth First Search"),
            (DEPTH_FIRST, "Depth First Search"),
            (BEST_FIRST, "Best First Search"),
        ] {
            let mut cfg = prim();
            cfg.set_searcher(name).unwrap();
            assert_eq!(solve(&cfg, &m).unwrap().strategy, display);
        }
    }

    #[test]
    fn single_row_fails() {
        assert_eq!(
            generate(&prim(), 1, 10, None),
            Err(MazeError::InvalidDimensions { rows: 1, columns: 10 })
        );
    }

    #[test]
    fn bench_runs_on_the_pool() {
        let cfg = Config {
            thread_pool_size: 2,
            ..Config::default()
        };
        let reports = bench(&cfg, 6, 11, 13, Some(42)).unwrap();
        assert_eq!(reports.len(), 6);
        assert!(reports.iter().all(|r| !r.solution.is_empty()));

        // Seeded runs are reproducible regardless of scheduling.
        let again = bench(&cfg, 6, 11, 13, Some(42)).unwrap();
        let costs = |rs: &[Report]| rs.iter().map(|r| r.solution.cost()).collect::<Vec<_>>();
        assert_eq!(costs(&reports), costs(&again));

        assert!(matches!(
            bench(&cfg, 2, 1, 5, None),
            Err(PipelineError::Maze(MazeError::InvalidDimensions { .. }))
        ));
    }
}
