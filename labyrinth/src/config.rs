//! Application configuration, stored as TOML.
//!
//! The file names the generator and search strategy to use (by their
//! registry names) and the size of the worker pool used by `bench`.
//! Missing fields take their defaults; a missing file is the default
//! configuration.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use labyrinth_core::MazeError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PATH: &str = "labyrinth.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Worker threads for concurrent pipelines. At least 1.
    pub thread_pool_size: usize,
    /// Registry name of the maze generator.
    pub generator: String,
    /// Registry name of the search strategy.
    pub searcher: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thread_pool_size: 3,
            generator: labyrinth_gen::PRIM.to_string(),
            searcher: labyrinth_search::BEST_FIRST.to_string(),
        }
    }
}

impl Config {
    /// Load from `path`. A missing file yields [`Config::default`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let cfg: Self = toml::from_str(&contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write to `path` (temp file + rename), creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        self.validate()?;
        let mut buf = toml::to_string_pretty(self)?;
        buf.push('\n');

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, buf).map_err(|e| ConfigError::io(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| ConfigError::io(path, e))?;
        log::info!("saved config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thread_pool_size == 0 {
            return Err(ConfigError::ThreadPoolSize(self.thread_pool_size));
        }
        check_generator(&self.generator)?;
        check_searcher(&self.searcher)?;
        Ok(())
    }

    pub fn set_generator(&mut self, name: &str) -> Result<(), ConfigError> {
        check_generator(name)?;
        self.generator = name.to_string();
        Ok(())
    }

    pub fn set_searcher(&mut self, name: &str) -> Result<(), ConfigError> {
        check_searcher(name)?;
        self.searcher = name.to_string();
        Ok(())
    }

    pub fn set_thread_pool_size(&mut self, size: usize) -> Result<(), ConfigError> {
        if size == 0 {
            return Err(ConfigError::ThreadPoolSize(size));
        }
        self.thread_pool_size = size;
        Ok(())
    }
}

fn check_generator(name: &str) -> Result<(), ConfigError> {
    labyrinth_gen::registry()?.create(name)?;
    Ok(())
}

fn check_searcher(name: &str) -> Result<(), ConfigError> {
    labyrinth_search::registry()?.create(name)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    Io { path: PathBuf, source: io::Error },
    /// The file is not valid TOML for a [`Config`].
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    /// `thread_pool_size` must be at least 1.
    ThreadPoolSize(usize),
    /// A generator or strategy name that no registry knows.
    Invalid(MazeError),
}

impl ConfigError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "config {}: {source}", path.display()),
            Self::Parse(e) => write!(f, "config: {e}"),
            Self::Serialize(e) => write!(f, "config: cannot serialize: {e}"),
            Self::ThreadPoolSize(n) => {
                write!(f, "config: thread_pool_size must be at least 1, got {n}")
            }
            Self::Invalid(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::Serialize(e) => Some(e),
            Self::ThreadPoolSize(_) => None,
            Self::Invalid(e) => Some(e),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<MazeError> for ConfigError {
    fn from(e: MazeError) -> Self {
        Self::Invalid(e)
    }
}
