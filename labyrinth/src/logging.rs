//! Diagnostics for the binary, via `env_logger`.
//!
//! Reads `RUST_LOG`; defaults to `info` if unset. Output goes to stderr.
//!
//! ```bash
//! RUST_LOG=debug labyrinth solve --rows 31 --columns 31
//! ```

use env_logger::{Builder, Env};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// A builder configured from `env`, falling back to [`DEFAULT_FILTER`].
pub fn builder(env: Env<'_>) -> Builder {
    Builder::from_env(env.default_filter_or(DEFAULT_FILTER))
}

/// Install the global logger from `RUST_LOG`.
pub fn init() {
    builder(Env::default()).init();
}
