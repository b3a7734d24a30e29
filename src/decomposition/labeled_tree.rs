use super::{NodeId, NodeIdFactory};
use std::collections::BTreeMap;

struct NodeData<T> {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    payload: T,
}

/// A rooted, acyclic, connected tree of [`NodeId`]s, each carrying a `T`
/// payload. Structural mutators are infallible: calling them in a way that
/// would violate tree-ness (adding a second root, removing a non-leaf, …)
/// is a programmer error and panics rather than returning a `Result`, per
/// this crate's convention that internal structural misuse is fatal, not
/// a recoverable domain error.
///
/// An empty tree (no root at all) is representable and is the state
/// returned by [`LabeledTree::new`]; every public constructor used by the
/// rest of the crate moves straight past it by calling [`Self::add_root`].
#[derive(Clone)]
pub struct LabeledTree<T> {
    id_factory: NodeIdFactory,
    root: Option<NodeId>,
    nodes: BTreeMap<NodeId, NodeData<T>>,
}

impl<T> Default for LabeledTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LabeledTree<T> {
    pub fn new() -> Self {
        Self {
            id_factory: NodeIdFactory::new(),
            root: None,
            nodes: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[&node].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[&node].children
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.children(node).is_empty()
    }

    pub fn payload(&self, node: NodeId) -> &T {
        &self.nodes[&node].payload
    }

    pub fn payload_mut(&mut self, node: NodeId) -> &mut T {
        &mut self.nodes.get_mut(&node).expect("node must exist").payload
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Sets the first node of an empty tree. Panics if a root already
    /// exists.
    pub fn add_root(&mut self, payload: T) -> NodeId {
        assert!(self.root.is_none(), "tree already has a root");
        let id = self.id_factory.one_more();
        self.nodes.insert(
            id,
            NodeData {
                parent: None,
                children: vec![],
                payload,
            },
        );
        self.root = Some(id);
        id
    }

    /// Adds a new leaf child of `parent`. Panics if `parent` is not in the
    /// tree.
    pub fn add_child(&mut self, parent: NodeId, payload: T) -> NodeId {
        assert!(self.contains(parent), "parent must be in the tree");
        let id = self.id_factory.one_more();
        self.nodes.insert(
            id,
            NodeData {
                parent: Some(parent),
                children: vec![],
                payload,
            },
        );
        self.nodes
            .get_mut(&parent)
            .expect("parent must exist")
            .children
            .push(id);
        id
    }

    /// Splices a new node between `parent` and `child`, where `child` must
    /// currently be a direct child of `parent`. After this call the new
    /// node is a child of `parent` and the sole parent of `child`. This is
    /// the one primitive every manipulation operation in
    /// [`crate::operations`] uses to push an intermediate bag into the
    /// tree.
    pub fn insert_between(&mut self, parent: NodeId, child: NodeId, payload: T) -> NodeId {
        assert!(self.contains(parent), "parent must be in the tree");
        assert!(self.contains(child), "child must be in the tree");
        assert_eq!(
            self.nodes[&child].parent,
            Some(parent),
            "child must currently be a direct child of parent"
        );
        let mid = self.id_factory.one_more();
        self.nodes.insert(
            mid,
            NodeData {
                parent: Some(parent),
                children: vec![child],
                payload,
            },
        );
        let parent_children = &mut self.nodes.get_mut(&parent).expect("parent exists").children;
        let slot = parent_children
            .iter_mut()
            .find(|c| **c == child)
            .expect("child listed under parent");
        *slot = mid;
        self.nodes.get_mut(&child).expect("child exists").parent = Some(mid);
        mid
    }

    /// Detaches `children` (each of which must currently be a direct child
    /// of `parent`) and re-attaches them, in order, as children of a
    /// freshly created node carrying `payload`; that new node becomes the
    /// sole remaining child of `parent` standing in for the group. Used to
    /// binarize a parent with more children than a caller wants to keep
    /// directly. Panics if any of `children` is not currently a direct
    /// child of `parent`.
    pub fn group_into_new_child(&mut self, parent: NodeId, children: &[NodeId], payload: T) -> NodeId {
        assert!(self.contains(parent), "parent must be in the tree");
        for c in children {
            assert_eq!(
                self.nodes[c].parent,
                Some(parent),
                "child must currently be a direct child of parent"
            );
        }
        let new_id = self.id_factory.one_more();
        for c in children {
            self.nodes.get_mut(c).expect("child exists").parent = Some(new_id);
        }
        self.nodes
            .get_mut(&parent)
            .expect("parent exists")
            .children
            .retain(|c| !children.contains(c));
        self.nodes.insert(
            new_id,
            NodeData {
                parent: Some(parent),
                children: children.to_vec(),
                payload,
            },
        );
        self.nodes
            .get_mut(&parent)
            .expect("parent exists")
            .children
            .push(new_id);
        new_id
    }

    /// Adds a new root above the current one. Panics if the tree is empty.
    pub fn insert_above_root(&mut self, payload: T) -> NodeId {
        let old_root = self.root.expect("tree must be non-empty");
        let new_root = self.id_factory.one_more();
        self.nodes.insert(
            new_root,
            NodeData {
                parent: None,
                children: vec![old_root],
                payload,
            },
        );
        self.nodes
            .get_mut(&old_root)
            .expect("old root exists")
            .parent = Some(new_root);
        self.root = Some(new_root);
        new_root
    }

    /// Removes a childless node. Panics if `node` has children, is the
    /// tree's only node, or is not in the tree.
    pub fn remove_leaf(&mut self, node: NodeId) {
        assert!(self.contains(node), "node must be in the tree");
        assert!(self.is_leaf(node), "node must be a leaf");
        let parent = self.nodes[&node].parent;
        match parent {
            Some(p) => {
                self.nodes
                    .get_mut(&p)
                    .expect("parent exists")
                    .children
                    .retain(|c| *c != node);
            }
            None => {
                assert_eq!(self.nodes.len(), 1, "cannot remove the root of a larger tree");
                self.root = None;
            }
        }
        self.nodes.remove(&node);
    }

    /// Re-roots the tree at `node`, reversing parent/child links along the
    /// path from `node` to the old root. Panics if `node` is not in the
    /// tree.
    pub fn re_root(&mut self, node: NodeId) {
        assert!(self.contains(node), "node must be in the tree");
        if self.root == Some(node) {
            return;
        }
        let mut path = vec![node];
        let mut cur = node;
        while let Some(p) = self.nodes[&cur].parent {
            path.push(p);
            cur = p;
        }
        for window in path.windows(2) {
            let (child, parent) = (window[0], window[1]);
            self.nodes
                .get_mut(&parent)
                .expect("parent exists")
                .children
                .retain(|c| *c != child);
            self.nodes
                .get_mut(&child)
                .expect("child exists")
                .children
                .push(parent);
        }
        self.nodes.get_mut(&node).expect("node exists").parent = None;
        for window in path.windows(2) {
            let (child, parent) = (window[0], window[1]);
            self.nodes.get_mut(&parent).expect("parent exists").parent = Some(child);
        }
        self.root = Some(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_root_then_children_builds_expected_shape() {
        let mut t: LabeledTree<u32> = LabeledTree::new();
        let root = t.add_root(0);
        let a = t.add_child(root, 1);
        let b = t.add_child(root, 2);
        assert_eq!(t.root(), Some(root));
        assert_eq!(t.children(root), &[a, b]);
        assert_eq!(t.parent(a), Some(root));
        assert!(t.is_leaf(a));
        assert!(!t.is_leaf(root));
    }

    #[test]
    #[should_panic]
    fn add_root_twice_panics() {
        let mut t: LabeledTree<u32> = LabeledTree::new();
        t.add_root(0);
        t.add_root(1);
    }

    #[test]
    fn insert_between_splices_in_a_node() {
        let mut t: LabeledTree<u32> = LabeledTree::new();
        let root = t.add_root(0);
        let child = t.add_child(root, 1);
        let mid = t.insert_between(root, child, 99);
        assert_eq!(t.children(root), &[mid]);
        assert_eq!(t.children(mid), &[child]);
        assert_eq!(t.parent(child), Some(mid));
    }

    #[test]
    fn group_into_new_child_binarizes_a_wide_fanout() {
        let mut t: LabeledTree<u32> = LabeledTree::new();
        let root = t.add_root(0);
        let a = t.add_child(root, 1);
        let b = t.add_child(root, 2);
        let c = t.add_child(root, 3);
        let group = t.group_into_new_child(root, &[b, c], 99);
        assert_eq!(t.children(root), &[a, group]);
        assert_eq!(t.children(group), &[b, c]);
        assert_eq!(t.parent(b), Some(group));
        assert_eq!(t.parent(c), Some(group));
    }

    #[test]
    fn insert_above_root_replaces_root() {
        let mut t: LabeledTree<u32> = LabeledTree::new();
        let old_root = t.add_root(0);
        let new_root = t.insert_above_root(1);
        assert_eq!(t.root(), Some(new_root));
        assert_eq!(t.children(new_root), &[old_root]);
        assert_eq!(t.parent(old_root), Some(new_root));
    }

    #[test]
    fn remove_leaf_detaches_from_parent() {
        let mut t: LabeledTree<u32> = LabeledTree::new();
        let root = t.add_root(0);
        let a = t.add_child(root, 1);
        t.remove_leaf(a);
        assert!(t.children(root).is_empty());
        assert!(!t.contains(a));
    }

    #[test]
    fn re_root_reverses_the_path() {
        let mut t: LabeledTree<u32> = LabeledTree::new();
        let root = t.add_root(0);
        let a = t.add_child(root, 1);
        let b = t.add_child(a, 2);
        t.re_root(b);
        assert_eq!(t.root(), Some(b));
        assert_eq!(t.parent(a), Some(b));
        assert_eq!(t.parent(root), Some(a));
        assert!(t.children(b).contains(&a));
        assert!(t.children(a).contains(&root));
    }
}
