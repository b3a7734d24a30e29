use super::{label_new_node, LabelingFunction, ManipulationOperation};
use crate::decomposition::{Bag, TreeDecomposition};

/// Gives every node with a non-empty bag an empty-bag leaf child, unless it
/// already has one — whether or not that node was itself already a leaf.
/// A previously-leaf node with a non-empty bag therefore becomes an
/// interior node whose new child is the only leaf below it; since no later
/// normalization step ever attaches a child to an existing leaf, this is
/// what makes every leaf of a fully normalized decomposition carry an
/// empty bag. Idempotent: a second application finds every qualifying node
/// already carrying an empty leaf and adds nothing more.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddEmptyLeaves;

impl ManipulationOperation for AddEmptyLeaves {
    fn apply(
        &self,
        decomposition: &mut TreeDecomposition,
        labeling_functions: &[Box<dyn LabelingFunction>],
    ) {
        log::debug!("AddEmptyLeaves: entering with {} nodes", decomposition.vertex_count());
        let candidates: Vec<_> = decomposition
            .nodes()
            .filter(|n| !decomposition.bag(*n).is_empty())
            .collect();
        for n in candidates {
            let has_empty_leaf = decomposition
                .children(n)
                .iter()
                .any(|c| decomposition.is_leaf(*c) && decomposition.bag(*c).is_empty());
            if !has_empty_leaf {
                let new_leaf = decomposition.add_child(n, Bag::new());
                label_new_node(decomposition, new_leaf, labeling_functions);
            }
        }
        log::debug!("AddEmptyLeaves: exiting with {} nodes", decomposition.vertex_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::VertexId;

    #[test]
    fn gives_a_non_empty_leaf_an_empty_child() {
        let mut td = TreeDecomposition::new();
        let root = td.root();
        let v = VertexId::new(1);
        let a = td.add_child(root, Bag::from([v]));
        AddEmptyLeaves.apply(&mut td, &[]);
        assert!(!td.is_leaf(a));
        assert!(td
            .children(a)
            .iter()
            .any(|c| td.is_leaf(*c) && td.bag(*c).is_empty()));
    }

    #[test]
    fn gives_a_non_empty_non_leaf_an_empty_child_too() {
        let mut td = TreeDecomposition::new();
        let root = td.root();
        let v = VertexId::new(1);
        let a = td.add_child(root, Bag::from([v]));
        td.add_child(a, Bag::from([v]));
        AddEmptyLeaves.apply(&mut td, &[]);
        assert!(td
            .children(a)
            .iter()
            .any(|c| td.is_leaf(*c) && td.bag(*c).is_empty()));
    }

    #[test]
    fn is_idempotent() {
        let mut td = TreeDecomposition::new();
        let root = td.root();
        let v = VertexId::new(1);
        td.add_child(root, Bag::from([v]));
        AddEmptyLeaves.apply(&mut td, &[]);
        let after_first = td.vertex_count();
        AddEmptyLeaves.apply(&mut td, &[]);
        assert_eq!(td.vertex_count(), after_first);
    }
}
