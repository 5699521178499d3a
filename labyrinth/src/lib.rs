//! Labyrinth: generate, encode and solve grid mazes.
//!
//! Glue between the core crates and the `labyrinth` binary: the TOML
//! [`Config`], console rendering, and generate-then-solve pipelines.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod render;

pub use config::{Config, ConfigError};
pub use pipeline::{PipelineError, Report};
pub use render::Style;
