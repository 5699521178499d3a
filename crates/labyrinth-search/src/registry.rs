//! Strategies selectable by name.

use labyrinth_core::{Registry, Result};

use crate::best_first::BestFirstSearch;
use crate::bfs::BreadthFirstSearch;
use crate::dfs::DepthFirstSearch;
use crate::node::Solution;
use crate::traits::{SearchAlgorithm, Searchable};

pub const BREADTH_FIRST: &str = "breadth-first";
pub const DEPTH_FIRST: &str = "depth-first";
pub const BEST_FIRST: &str = "best-first";

/// The closed set of search strategies, as handed out by [`registry`].
#[derive(Debug, Clone)]
pub enum Strategy {
    BreadthFirst(BreadthFirstSearch),
    DepthFirst(DepthFirstSearch),
    BestFirst(BestFirstSearch),
}

impl SearchAlgorithm for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst(s) => s.name(),
            Self::DepthFirst(s) => s.name(),
            Self::BestFirst(s) => s.name(),
        }
    }

    fn nodes_evaluated(&self) -> usize {
        match self {
            Self::BreadthFirst(s) => s.nodes_evaluated(),
            Self::DepthFirst(s) => s.nodes_evaluated(),
            Self::BestFirst(s) => s.nodes_evaluated(),
        }
    }

    fn solve<P: Searchable + ?Sized>(&mut self, domain: &P) -> Solution<P::State> {
        match self {
            Self::BreadthFirst(s) => s.solve(domain),
            Self::DepthFirst(s) => s.solve(domain),
            Self::BestFirst(s) => s.solve(domain),
        }
    }
}

/// Every built-in strategy, keyed by its configuration name.
pub fn registry() -> Result<Registry<Strategy>> {
    let mut r = Registry::new("search strategy");
    r.register(BREADTH_FIRST, || Strategy::BreadthFirst(BreadthFirstSearch::new()))?;
    r.register(DEPTH_FIRST, || Strategy::DepthFirst(DepthFirstSearch::new()))?;
    r.register(BEST_FIRST, || Strategy::BestFirst(BestFirstSearch::new()))?;
    Ok(r)
}
