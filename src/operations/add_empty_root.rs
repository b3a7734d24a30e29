use super::{label_new_node, LabelingFunction, ManipulationOperation};
use crate::decomposition::{Bag, TreeDecomposition};

/// If the current root's bag is non-empty, inserts a new empty-bag node as
/// its parent and makes that the new root. Post: root bag is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddEmptyRoot;

impl ManipulationOperation for AddEmptyRoot {
    fn apply(
        &self,
        decomposition: &mut TreeDecomposition,
        labeling_functions: &[Box<dyn LabelingFunction>],
    ) {
        log::debug!("AddEmptyRoot: entering with {} nodes", decomposition.vertex_count());
        let root = decomposition.root();
        if !decomposition.bag(root).is_empty() {
            let new_root = decomposition.insert_above_root(Bag::new());
            label_new_node(decomposition, new_root, labeling_functions);
        }
        log::debug!("AddEmptyRoot: exiting with {} nodes", decomposition.vertex_count());
    }
}
