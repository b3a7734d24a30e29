//! Tree (and hypertree) decompositions: a rooted tree of bags plus the
//! bookkeeping that keeps the running-intersection property visible.
//!
//! [`LabeledTree`] is the bare tree skeleton: nodes identified by
//! [`NodeId`], each carrying an arbitrary payload, linked by parent/child
//! pointers. [`TreeDecomposition`] wraps a `LabeledTree<Bag>` and adds the
//! covering-edges set and label store that make a node into a proper
//! decomposition node.

mod labeled_tree;
mod tree_decomposition;

pub use self::labeled_tree::LabeledTree;
pub use self::tree_decomposition::{Bag, CoveringEdges, LabelValue, TreeDecomposition};

/// Id of a node within a [`LabeledTree`]. Independent of [`crate::ids::VertexId`]
/// and [`crate::ids::EdgeId`]; a tree node's id says nothing about which
/// graph vertices happen to sit in its bag.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const FIRST: NodeId = NodeId(1);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct NodeIdFactory(usize);

impl NodeIdFactory {
    pub(crate) fn new() -> Self {
        Self(NodeId::FIRST.0)
    }

    pub(crate) fn one_more(&mut self) -> NodeId {
        let cur = self.0;
        self.0 += 1;
        NodeId(cur)
    }
}
