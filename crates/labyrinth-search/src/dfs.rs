use std::collections::HashSet;

use crate::node::{SearchTree, Solution};
use crate::traits::{SearchAlgorithm, Searchable};

/// Depth-first search.
///
/// Iterative, with an explicit stack. A state may be pushed several times
/// but is only expanded the first time it is popped. No optimality
/// guarantee.
#[derive(Debug, Default, Clone)]
pub struct DepthFirstSearch {
    evaluated: usize,
}

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchAlgorithm for DepthFirstSearch {
    fn name(&self) -> &'static str {
        "Depth First Search"
    }

    fn nodes_evaluated(&self) -> usize {
        self.evaluated
    }

    fn solve<P: Searchable + ?Sized>(&mut self, domain: &P) -> Solution<P::State> {
        self.evaluated = 0;
        let mut tree = SearchTree::new();
        let mut visited = HashSet::new();
        let mut stack = vec![tree.push(domain.initial_state(), 0, None)];

        let mut buf = Vec::new();

        while let Some(id) = stack.pop() {
            if !visited.insert(tree[id].state.clone()) {
                continue;
            }
            self.evaluated += 1;
            if domain.is_goal(&tree[id].state) {
                let solution = tree.solution(id);
                log::debug!(
                    "dfs: reached goal after {} expansions, {} states on path",
                    self.evaluated,
                    solution.len()
                );
                return solution;
            }

            let cost = tree[id].cost;
            buf.clear();
            domain.successors(&tree[id].state, &mut buf);

            for (next, step) in buf.drain(..) {
                if !visited.contains(&next) {
                    stack.push(tree.push(next, cost.saturating_add(step), Some(id)));
                }
            }
        }

        log::debug!("dfs: frontier exhausted after {} expansions", self.evaluated);
        Solution::empty()
    }
}
