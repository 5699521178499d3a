use std::collections::{HashSet, VecDeque};

use crate::node::{SearchTree, Solution};
use crate::traits::{SearchAlgorithm, Searchable};

/// Breadth-first search.
///
/// Expands states in order of depth, so with uniform move costs the first
/// path found is a shortest one. States are marked visited when they are
/// enqueued, which keeps each state in the queue at most once.
#[derive(Debug, Default, Clone)]
pub struct BreadthFirstSearch {
    evaluated: usize,
}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchAlgorithm for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "Breadth First Search"
    }

    fn nodes_evaluated(&self) -> usize {
        self.evaluated
    }

    fn solve<P: Searchable + ?Sized>(&mut self, domain: &P) -> Solution<P::State> {
        self.evaluated = 0;
        let mut tree = SearchTree::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        let start = domain.initial_state();
        visited.insert(start.clone());
        queue.push_back(tree.push(start, 0, None));

        let mut buf = Vec::new();

        while let Some(id) = queue.pop_front() {
            self.evaluated += 1;
            if domain.is_goal(&tree[id].state) {
                let solution = tree.solution(id);
                log::debug!(
                    "bfs: reached goal after {} expansions, {} states on path",
                    self.evaluated,
                    solution.len()
                );
                return solution;
            }

            let cost = tree[id].cost;
            buf.clear();
            domain.successors(&tree[id].state, &mut buf);

            for (next, step) in buf.drain(..) {
                if visited.insert(next.clone()) {
                    queue.push_back(tree.push(next, cost.saturating_add(step), Some(id)));
                }
            }
        }

        log::debug!("bfs: frontier exhausted after {} expansions", self.evaluated);
        Solution::empty()
    }
}
