use std::fmt;
use std::ops::Index;

/// Handle to a node stored in a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A discovered state with the cost paid to reach it and the node it was
/// reached from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S> {
    pub state: S,
    pub cost: u32,
    pub parent: Option<NodeId>,
}

// ---------------------------------------------------------------------------
// SearchTree
// ---------------------------------------------------------------------------

/// Arena of search nodes.
///
/// Nodes refer to their predecessor by [`NodeId`], so the predecessor
/// chains form a tree rooted at the start node and frontiers only ever
/// hold cheap handles.
#[derive(Debug, Clone)]
pub struct SearchTree<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S> Default for SearchTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SearchTree<S> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store a node and return its handle.
    pub fn push(&mut self, state: S, cost: u32, parent: Option<NodeId>) -> NodeId {
        self.nodes.push(SearchNode { state, cost, parent });
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode<S>> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: Clone> SearchTree<S> {
    /// Walk predecessor links back from `id` to the root and return the
    /// path root-first, with the cost recorded on `id`.
    pub fn solution(&self, id: NodeId) -> Solution<S> {
        let cost = self.nodes[id.0].cost;
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = &self.nodes[ci.0];
            path.push(node.state.clone());
            cur = node.parent;
        }
        path.reverse();
        Solution { path, cost }
    }
}

impl<S> Index<NodeId> for SearchTree<S> {
    type Output = SearchNode<S>;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0]
    }
}

// ---------------------------------------------------------------------------
// Solution
// ---------------------------------------------------------------------------

/// The states from start to goal, plus the total cost of the moves.
///
/// An empty path means no path was found.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<S> {
    path: Vec<S>,
    cost: u32,
}

impl<S> Solution<S> {
    /// The "no path" solution.
    pub fn empty() -> Self {
        Self {
            path: Vec::new(),
            cost: 0,
        }
    }

    pub fn path(&self) -> &[S] {
        &self.path
    }

    pub fn into_path(self) -> Vec<S> {
        self.path
    }

    /// Total cost; 0 for an empty solution. Saturates at `u32::MAX`.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Number of states on the path (moves + 1).
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the search failed to reach a goal.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

impl<S: fmt::Display> fmt::Display for Solution<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return f.write_str("no solution");
        }
        for (i, s) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{s}")?;
        }
        write!(f, " (cost {})", self.cost)
    }
}
