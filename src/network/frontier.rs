//! Frontier of not-yet-expanded search nodes.
//!
//! Last in, first out: the search runs depth-first, which keeps the frontier
//! short on a board with at most ten chips per side.

use super::node::NodeId;

/// LIFO stack of node IDs.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    stack: Vec<NodeId>,
}

impl Frontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to be expanded next.
    #[inline]
    pub fn push(&mut self, id: NodeId) {
        self.stack.push(id);
    }

    /// Take the most recently pushed node.
    #[inline]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Extend<NodeId> for Frontier {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        self.stack.extend(iter);
    }
}
