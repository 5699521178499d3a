//! Generators selectable by name.

use labyrinth_core::{Registry, Result};
use rand::Rng;

use crate::generator::{EmptyMazeGenerator, MazeGenerator, PrimMazeGenerator, SimpleMazeGenerator};
use crate::mapgen::MazeGen;

pub const EMPTY: &str = "empty";
pub const SIMPLE: &str = "simple";
pub const PRIM: &str = "prim";

/// The closed set of generators, as handed out by [`registry`].
#[derive(Debug, Clone, Copy)]
pub enum Generator {
    Empty(EmptyMazeGenerator),
    Simple(SimpleMazeGenerator),
    Prim(PrimMazeGenerator),
}

impl MazeGenerator for Generator {
    fn name(&self) -> &'static str {
        match self {
            Self::Empty(g) => g.name(),
            Self::Simple(g) => g.name(),
            Self::Prim(g) => g.name(),
        }
    }

    fn carve<R: Rng>(&self, mg: &mut MazeGen<R>) -> Result<()> {
        match self {
            Self::Empty(g) => g.carve(mg),
            Self::Simple(g) => g.carve(mg),
            Self::Prim(g) => g.carve(mg),
        }
    }
}

/// Every built-in generator, keyed by its configuration name.
pub fn registry() -> Result<Registry<Generator>> {
    let mut r = Registry::new("generator");
    r.register(EMPTY, || Generator::Empty(EmptyMazeGenerator))?;
    r.register(SIMPLE, || Generator::Simple(SimpleMazeGenerator))?;
    r.register(PRIM, || Generator::Prim(PrimMazeGenerator))?;
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::{Cell, MazeError};

    #[test]
    fn names_in_order() {
        let r = registry().unwrap();
        assert_eq!(r.names().collect::<Vec<_>>(), vec![EMPTY, SIMPLE, PRIM]);
        assert_eq!(r.kind(), "generator");
    }

    #[test]
    fn created_generators_delegate() {
        let r = registry().unwrap();
        let empty = r.create(EMPTY).unwrap();
        assert_eq!(empty.name(), "Empty Maze Generator");
        assert_eq!(empty.generate_seeded(5, 5, 1).unwrap().count(Cell::Wall), 0);

        let simple = r.create(SIMPLE).unwrap();
        assert_eq!(simple.name(), "Simple Maze Generator");
        assert_eq!(
            simple.generate_seeded(8, 8, 2).unwrap(),
            SimpleMazeGenerator.generate_seeded(8, 8, 2).unwrap()
        );

        let prim = r.create(PRIM).unwrap();
        assert_eq!(prim.name(), "Prim Maze Generator");
        assert_eq!(
            prim.generate_seeded(9, 9, 4).unwrap(),
            PrimMazeGenerator.generate_seeded(9, 9, 4).unwrap()
        );
    }

    #[test]
    fn unknown_generator() {
        let r = registry().unwrap();
        assert_eq!(
            r.create("kruskal").unwrap_err(),
            MazeError::UnknownAlgorithm {
                kind: "generator",
                name: "kruskal".into()
            }
        );
    }
}
