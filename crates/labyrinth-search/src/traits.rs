use std::hash::Hash;

use crate::node::Solution;

/// A problem the search strategies can explore.
pub trait Searchable {
    /// One state of the problem, e.g. a grid position.
    type State: Clone + Eq + Hash;

    /// Where every search begins.
    fn initial_state(&self) -> Self::State;

    /// Whether `state` ends the search.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Append the states reachable in one move from `state`, each with the
    /// cost of that move, into `buf`. The caller clears `buf` before calling.
    fn successors(&self, state: &Self::State, buf: &mut Vec<(Self::State, u32)>);
}

/// A search strategy.
///
/// Strategies keep per-run diagnostics, so a single instance should not be
/// shared between concurrent searches.
pub trait SearchAlgorithm {
    /// Human-readable name, for diagnostics.
    fn name(&self) -> &'static str;

    /// States expanded (taken off the frontier and examined) by the last
    /// [`solve`](Self::solve).
    fn nodes_evaluated(&self) -> usize;

    /// Search `domain` for a path from its initial state to a goal.
    ///
    /// Returns an empty [`Solution`] if the frontier runs dry first.
    fn solve<P: Searchable + ?Sized>(&mut self, domain: &P) -> Solution<P::State>;
}
