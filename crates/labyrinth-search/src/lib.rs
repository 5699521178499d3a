//! State-space search over anything that can describe itself as a graph.
//!
//! This crate provides interchangeable search strategies that share one
//! contract:
//!
//! - **Breadth-first** ([`BreadthFirstSearch`]): FIFO frontier, shortest
//!   path in steps.
//! - **Depth-first** ([`DepthFirstSearch`]): LIFO frontier, any path.
//! - **Best-first** ([`BestFirstSearch`]): cheapest accumulated cost first,
//!   ties in insertion order; minimum-cost path.
//!
//! A problem implements [`Searchable`]; a strategy implements
//! [`SearchAlgorithm`] and returns a [`Solution`]. [`SearchableMaze`]
//! exposes a [`labyrinth_core::Maze`] as such a problem.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`Searchable`] | start state, goal test, weighted successors |
//! | [`SearchAlgorithm`] | `solve`, display name, expansion count |
//!
//! Strategies are picked by name through [`registry`], which hands out a
//! [`Strategy`].

mod best_first;
mod bfs;
mod dfs;
mod frontier;
mod maze;
mod node;
mod registry;
mod traits;

pub use best_first::BestFirstSearch;
pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use frontier::PriorityFrontier;
pub use maze::{STEP_COST, SearchableMaze};
pub use node::{NodeId, SearchNode, SearchTree, Solution};
pub use registry::{BEST_FIRST, BREADTH_FIRST, DEPTH_FIRST, Strategy, registry};
pub use traits::{SearchAlgorithm, Searchable};
