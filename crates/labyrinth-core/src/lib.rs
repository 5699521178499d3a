//! **labyrinth-core**: maze data model shared by the labyrinth crates.
//!
//! This crate provides the foundational types used across the workspace:
//! grid [`Position`]s, the [`Maze`] wall/tile grid with its start and goal,
//! the compact base-127 byte encoding used for storage, transport and
//! equality, the [`MazeError`] taxonomy, and a small name-keyed
//! [`Registry`] used to pick generators and search strategies at runtime.

pub mod codec;
pub mod error;
pub mod maze;
pub mod position;
pub mod registry;

pub use codec::{HEADER_LEN, MAX_ENCODABLE};
pub use error::{MazeError, Result};
pub use maze::{Cell, Maze};
pub use position::Position;
pub use registry::Registry;
