//! Maze generation for labyrinth.
//!
//! Provides three generators behind the [`MazeGenerator`] contract:
//! - **Empty** ([`EmptyMazeGenerator`]): no walls at all, a baseline.
//! - **Simple** ([`SimpleMazeGenerator`]): randomly scattered walls with
//!   one guaranteed start-to-goal staircase.
//! - **Prim** ([`PrimMazeGenerator`]): randomized Prim spanning-tree
//!   carving, producing a perfect maze with exactly one path between any
//!   two open cells.
//!
//! Both place the start and the goal on distinct open border cells.
//! Generators are picked by name through [`registry`].

pub mod generator;
pub mod mapgen;
pub mod registry;

pub use generator::{EmptyMazeGenerator, MazeGenerator, PrimMazeGenerator, SimpleMazeGenerator};
pub use mapgen::MazeGen;
pub use registry::{EMPTY, Generator, PRIM, SIMPLE, registry};
