use super::{LabeledTree, NodeId};
use crate::error::{Error, Result};
use crate::ids::{EdgeId, VertexId};
use ahash::RandomState;
use std::collections::{BTreeSet, HashMap};

/// The set of original-graph vertex ids associated with a tree-decomposition
/// node.
pub type Bag = BTreeSet<VertexId>;

/// A set of original hyperedges whose union contains a node's bag, used by
/// hypertree decompositions. `synthetic_vertices` records bag vertices that
/// had no incident hyperedge at all and were given a synthetic singleton
/// covering entry instead of a real edge id.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CoveringEdges {
    pub edges: BTreeSet<EdgeId>,
    pub synthetic_vertices: BTreeSet<VertexId>,
}

/// Opaque label value. Each labelling function interprets its own values;
/// this crate only needs to store and clone them.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelValue {
    Usize(usize),
    VertexSet(BTreeSet<VertexId>),
    Text(String),
}

impl LabelValue {
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            LabelValue::Usize(n) => Some(*n),
            _ => None,
        }
    }
}

#[derive(Clone, Default)]
struct NodeContent {
    bag: Bag,
    covering_edges: Option<CoveringEdges>,
    labels: HashMap<String, LabelValue, RandomState>,
}

/// A [`LabeledTree`] of bags: a tree decomposition, or (once covering edges
/// are attached) a hypertree decomposition.
#[derive(Clone)]
pub struct TreeDecomposition {
    tree: LabeledTree<NodeContent>,
}

impl Default for TreeDecomposition {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeDecomposition {
    /// A decomposition with a single root of the empty bag, matching the
    /// "empty graph" boundary case.
    pub fn new() -> Self {
        let mut tree = LabeledTree::new();
        tree.add_root(NodeContent::default());
        Self { tree }
    }

    pub(crate) fn from_bags(bags: LabeledTree<Bag>) -> Self {
        let mut tree: LabeledTree<NodeContent> = LabeledTree::new();
        Self::copy_subtree(&bags, bags.root().expect("bucket elimination always produces a root"), None, &mut tree);
        Self { tree }
    }

    fn copy_subtree(
        src: &LabeledTree<Bag>,
        node: NodeId,
        parent_in_dst: Option<NodeId>,
        dst: &mut LabeledTree<NodeContent>,
    ) {
        let content = NodeContent {
            bag: src.payload(node).clone(),
            covering_edges: None,
            labels: HashMap::with_hasher(RandomState::new()),
        };
        let new_id = match parent_in_dst {
            None => dst.add_root(content),
            Some(p) => dst.add_child(p, content),
        };
        for child in src.children(node) {
            Self::copy_subtree(src, *child, Some(new_id), dst);
        }
    }

    pub fn root(&self) -> NodeId {
        self.tree.root().expect("a decomposition always has a root")
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tree.nodes()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.parent(node)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.tree.children(node)
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.tree.is_leaf(node)
    }

    pub fn bag(&self, node: NodeId) -> &Bag {
        &self.tree.payload(node).bag
    }

    pub fn bag_mut(&mut self, node: NodeId) -> &mut Bag {
        &mut self.tree.payload_mut(node).bag
    }

    pub fn covering_edges(&self, node: NodeId) -> Option<&CoveringEdges> {
        self.tree.payload(node).covering_edges.as_ref()
    }

    pub fn set_covering_edges(&mut self, node: NodeId, covering: CoveringEdges) {
        self.tree.payload_mut(node).covering_edges = Some(covering);
    }

    pub fn label(&self, node: NodeId, name: &str) -> Option<&LabelValue> {
        self.tree.payload(node).labels.get(name)
    }

    pub fn set_label(&mut self, node: NodeId, name: String, value: LabelValue) {
        self.tree.payload_mut(node).labels.insert(name, value);
    }

    pub fn label_snapshot(&self, node: NodeId) -> &HashMap<String, LabelValue, RandomState> {
        &self.tree.payload(node).labels
    }

    /// Fetches a previously computed label by name, for labelling functions
    /// that chain off an earlier one. Fails with [`Error::NotFound`] if
    /// `name` has not been computed yet for this node.
    pub fn require_label(&self, node: NodeId, name: &str) -> Result<&LabelValue> {
        self.label(node, name)
            .ok_or_else(|| Error::unknown_label(name))
    }

    pub fn add_root(&mut self, bag: Bag) -> NodeId {
        self.tree.add_root(NodeContent {
            bag,
            covering_edges: None,
            labels: HashMap::with_hasher(RandomState::new()),
        })
    }

    pub fn add_child(&mut self, parent: NodeId, bag: Bag) -> NodeId {
        self.tree.add_child(
            parent,
            NodeContent {
                bag,
                covering_edges: None,
                labels: HashMap::with_hasher(RandomState::new()),
            },
        )
    }

    pub fn insert_between(&mut self, parent: NodeId, child: NodeId, bag: Bag) -> NodeId {
        self.tree.insert_between(
            parent,
            child,
            NodeContent {
                bag,
                covering_edges: None,
                labels: HashMap::with_hasher(RandomState::new()),
            },
        )
    }

    pub fn group_into_new_child(&mut self, parent: NodeId, children: &[NodeId], bag: Bag) -> NodeId {
        self.tree.group_into_new_child(
            parent,
            children,
            NodeContent {
                bag,
                covering_edges: None,
                labels: HashMap::with_hasher(RandomState::new()),
            },
        )
    }

    pub fn insert_above_root(&mut self, bag: Bag) -> NodeId {
        self.tree.insert_above_root(NodeContent {
            bag,
            covering_edges: None,
            labels: HashMap::with_hasher(RandomState::new()),
        })
    }

    pub fn remove_leaf(&mut self, node: NodeId) {
        self.tree.remove_leaf(node)
    }

    /// `(max bag size) - 1`, or `0` for the always-present single-node
    /// empty decomposition.
    pub fn treewidth(&self) -> usize {
        self.nodes()
            .map(|n| self.bag(n).len())
            .max()
            .unwrap_or(1)
            .saturating_sub(1)
    }

    pub fn minimum_bag_size(&self) -> usize {
        self.nodes().map(|n| self.bag(n).len()).min().unwrap_or(0)
    }

    pub fn maximum_bag_size(&self) -> usize {
        self.nodes().map(|n| self.bag(n).len()).max().unwrap_or(0)
    }

    pub fn vertex_count(&self) -> usize {
        self.tree.len()
    }

    pub fn edge_count(&self) -> usize {
        self.tree.len().saturating_sub(1)
    }
}
