use std::collections::{HashMap, HashSet};

use crate::frontier::PriorityFrontier;
use crate::node::{SearchTree, Solution};
use crate::traits::{SearchAlgorithm, Searchable};

/// Best-first (uniform-cost) search.
///
/// The frontier is ordered by accumulated path cost, ties broken by
/// insertion order. A state is closed the first time it is popped, and
/// at that point its cost is minimal, so the first goal popped ends a
/// minimum-cost path. Stale frontier entries for already closed states are
/// skipped and not counted as expansions.
#[derive(Debug, Default, Clone)]
pub struct BestFirstSearch {
    evaluated: usize,
}

impl BestFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchAlgorithm for BestFirstSearch {
    fn name(&self) -> &'static str {
        "Best First Search"
    }

    fn nodes_evaluated(&self) -> usize {
        self.evaluated
    }

    fn solve<P: Searchable + ?Sized>(&mut self, domain: &P) -> Solution<P::State> {
        self.evaluated = 0;
        let mut tree = SearchTree::new();
        let mut closed = HashSet::new();
        let mut best = HashMap::new();
        let mut open = PriorityFrontier::new();

        let start = domain.initial_state();
        best.insert(start.clone(), 0);
        open.push(tree.push(start, 0, None), 0);

        let mut buf = Vec::new();

        while let Some(id) = open.pop() {
            if !closed.insert(tree[id].state.clone()) {
                continue;
            }
            self.evaluated += 1;
            if domain.is_goal(&tree[id].state) {
                let solution = tree.solution(id);
                log::debug!(
                    "best-first: reached goal after {} expansions, cost {}",
                    self.evaluated,
                    solution.cost()
                );
                return solution;
            }

            let cost = tree[id].cost;
            buf.clear();
            domain.successors(&tree[id].state, &mut buf);

            for (next, step) in buf.drain(..) {
                if closed.contains(&next) {
                    continue;
                }
                let tentative = cost.saturating_add(step);
                if best.get(&next).is_some_and(|&known| known <= tentative) {
                    continue;
                }
                best.insert(next.clone(), tentative);
                open.push(tree.push(next, tentative, Some(id)), tentative);
            }
        }

        log::debug!("best-first: frontier exhausted after {} expansions", self.evaluated);
        Solution::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BreadthFirstSearch, SearchableMaze};
    use labyrinth_core::{Maze, Position};

    /// A small weighted graph given as an adjacency list.
    struct Graph {
        edges: Vec<Vec<(usize, u32)>>,
        goal: usize,
    }

    impl Searchable for Graph {
        type State = usize;

        fn initial_state(&self) -> usize {
            0
        }

        fn is_goal(&self, state: &usize) -> bool {
            *state == self.goal
        }

        fn successors(&self, state: &usize, buf: &mut Vec<(usize, u32)>) {
            buf.extend(self.edges[*state].iter().copied());
        }
    }

    #[test]
    fn prefers_cheap_detour_over_few_hops() {
        // 0 -> 3 directly costs 10; 0 -> 1 -> 2 -> 3 costs 3.
        let g = Graph {
            edges: vec![vec![(3, 10), (1, 1)], vec![(2, 1)], vec![(3, 1)], vec![]],
            goal: 3,
        };
        let s = BestFirstSearch::new().solve(&g);
        assert_eq!(s.path(), &[0, 1, 2, 3]);
        assert_eq!(s.cost(), 3);

        let hops = BreadthFirstSearch::new().solve(&g);
        assert_eq!(hops.path(), &[0, 3]);
        assert_eq!(hops.cost(), 10);
    }

    #[test]
    fn ties_resolve_in_insertion_order() {
        // Two equal-cost routes to 3: via 1 (discovered first) and via 2.
        let g = Graph {
            edges: vec![vec![(1, 1), (2, 1)], vec![(3, 1)], vec![(3, 1)], vec![]],
            goal: 3,
        };
        for _ in 0..5 {
            let s = BestFirstSearch::new().solve(&g);
            assert_eq!(s.path(), &[0, 1, 3]);
        }
    }

    #[test]
    fn heavy_edges_saturate_instead_of_overflowing() {
        const HEAVY: u32 = u32::MAX / 2 + 1;
        let g = Graph {
            edges: vec![vec![(1, HEAVY)], vec![(2, HEAVY)], vec![]],
            goal: 2,
        };
        let best = BestFirstSearch::new().solve(&g);
        assert_eq!(best.path(), &[0, 1, 2]);
        assert_eq!(best.cost(), u32::MAX);

        let bfs = BreadthFirstSearch::new().solve(&g);
        assert_eq!(bfs.cost(), u32::MAX);
        let dfs = crate::DepthFirstSearch::new().solve(&g);
        assert_eq!(dfs.cost(), u32::MAX);
    }

    #[test]
    fn matches_bfs_length_on_mazes() {
        let mut maze = Maze::new(7, 7).unwrap();
        for c in 0..6 {
            maze.add_wall(Position::new(2, c));
        }
        for c in 1..7 {
            maze.add_wall(Position::new(4, c));
        }
        let domain = SearchableMaze::new(&maze);
        let best = BestFirstSearch::new().solve(&domain);
        let bfs = BreadthFirstSearch::new().solve(&domain);
        assert_eq!(best.cost(), bfs.cost());
        assert_eq!(best.len(), bfs.len());
        assert_eq!(best.path().last(), Some(&maze.goal()));
    }

    #[test]
    fn counts_expansions_and_resets() {
        let maze = Maze::new(3, 3).unwrap();
        let mut search = BestFirstSearch::new();
        search.solve(&SearchableMaze::new(&maze));
        let first = search.nodes_evaluated();
        assert!(first >= 5);
        search.solve(&SearchableMaze::new(&maze));
        assert_eq!(search.nodes_evaluated(), first);
        assert_eq!(search.name(), "Best First Search");
    }
}
