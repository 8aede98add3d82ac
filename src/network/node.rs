//! Search nodes and the per-search arena that owns them.
//!
//! A search node is one chip on a candidate network path. Paths share
//! prefixes, so nodes form a tree linked by parent indices (`NodeId`).
//! Nodes are never changed after allocation, and the whole arena is dropped
//! when the search call returns.

use crate::core::{Axis, Coord};

/// Index into the `SearchArena` node vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node (the parent of a root).
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// One chip on a path that started at a goal edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    /// The chip's cell.
    pub coord: Coord,

    /// Previous chip on the path (NONE for roots).
    pub parent: NodeId,

    /// Chips on the path up to and including this one. Roots are 1.
    pub len: u8,

    /// Axis of the hop from the parent. `None` for roots.
    pub axis: Option<Axis>,
}

impl SearchNode {
    /// A path consisting of a single goal-edge chip.
    #[must_use]
    pub const fn root(coord: Coord) -> Self {
        Self {
            coord,
            parent: NodeId::NONE,
            len: 1,
            axis: None,
        }
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena of search nodes for one search call.
#[derive(Clone, Debug, Default)]
pub struct SearchArena {
    nodes: Vec<SearchNode>,
}

impl SearchArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// Allocate a root node.
    pub fn root(&mut self, coord: Coord) -> NodeId {
        self.alloc(SearchNode::root(coord))
    }

    /// Allocate the node reached by hopping from `parent` to `coord`.
    pub fn extend(&mut self, parent: NodeId, coord: Coord) -> NodeId {
        let from = *self.get(parent);
        self.alloc(SearchNode {
            coord,
            parent,
            len: from.len + 1,
            axis: Some(Axis::between(from.coord, coord)),
        })
    }

    fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes allocated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `id` followed by its ancestors, up to the root.
    pub fn lineage(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> + '_ {
        std::iter::successors(Some(self.get(id)), move |n| {
            (!n.is_root()).then(|| self.get(n.parent))
        })
    }

    /// True if `coord` is already on the path ending at `id`.
    #[must_use]
    pub fn on_path(&self, id: NodeId, coord: Coord) -> bool {
        self.lineage(id).any(|n| n.coord == coord)
    }

    /// The cells of the path ending at `id`, root first.
    #[must_use]
    pub fn path(&self, id: NodeId) -> Vec<Coord> {
        let mut cells: Vec<_> = self.lineage(id).map(|n| n.coord).collect();
        cells.reverse();
        cells
    }
}
