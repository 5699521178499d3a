//! Name-keyed factories.
//!
//! Generators and search strategies are picked by name from the
//! configuration file. A [`Registry`] maps each name to a zero-argument
//! constructor; names are checked for clashes when they are registered,
//! and unknown names fail at lookup with [`MazeError::UnknownAlgorithm`].

use crate::error::{MazeError, Result};

/// Zero-argument constructor stored in a [`Registry`].
pub type Factory<T> = fn() -> T;

/// An ordered set of `name -> factory` entries.
pub struct Registry<T> {
    kind: &'static str,
    entries: Vec<(&'static str, Factory<T>)>,
}

impl<T> Registry<T> {
    /// Create an empty registry. `kind` names what it holds in error
    /// messages, e.g. `"generator"`.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// What this registry holds.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Add a factory. Fails if `name` is already taken.
    pub fn register(&mut self, name: &'static str, factory: Factory<T>) -> Result<()> {
        if self.contains(name) {
            return Err(MazeError::DuplicateAlgorithm {
                kind: self.kind,
                name: name.to_string(),
            });
        }
        self.entries.push((name, factory));
        Ok(())
    }

    /// Whether a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Build a fresh instance of whatever is registered under `name`.
    pub fn create(&self, name: &str) -> Result<T> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, factory)| factory())
            .ok_or_else(|| MazeError::UnknownAlgorithm {
                kind: self.kind,
                name: name.to_string(),
            })
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
