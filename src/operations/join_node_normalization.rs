use super::{label_new_node, LabelingFunction, ManipulationOperation};
use crate::decomposition::TreeDecomposition;

/// For every node with ≥ 2 children: first folds any fan-out beyond two
/// down into a cascade of nested join nodes sharing the same bag (a nice
/// tree decomposition's join nodes are binary), then splices an exchange
/// node carrying a copy of the relevant bag above any child whose bag
/// doesn't already match. Post: every join node in the tree has exactly
/// two children, each with a bag identical to its own; any remaining
/// introduce/forget work is pushed one level further down, for later
/// operations to resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinNodeNormalization;

impl ManipulationOperation for JoinNodeNormalization {
    fn apply(
        &self,
        decomposition: &mut TreeDecomposition,
        labeling_functions: &[Box<dyn LabelingFunction>],
    ) {
        log::debug!(
            "JoinNodeNormalization: entering with {} nodes",
            decomposition.vertex_count()
        );
        let join_nodes: Vec<_> = decomposition
            .nodes()
            .filter(|n| decomposition.children(*n).len() >= 2)
            .collect();

        for n in join_nodes {
            let node_bag = decomposition.bag(n).clone();

            let mut join_like = vec![n];
            loop {
                let children = decomposition.children(n).to_vec();
                if children.len() <= 2 {
                    break;
                }
                let len = children.len();
                let pair = [children[len - 2], children[len - 1]];
                let group = decomposition.group_into_new_child(n, &pair, node_bag.clone());
                label_new_node(decomposition, group, labeling_functions);
                join_like.push(group);
            }

            for jn in join_like {
                let bag = decomposition.bag(jn).clone();
                let children: Vec<_> = decomposition.children(jn).to_vec();
                for child in children {
                    if decomposition.bag(child) != &bag {
                        let mid = decomposition.insert_between(jn, child, bag.clone());
                        label_new_node(decomposition, mid, labeling_functions);
                    }
                }
            }
        }
        log::debug!(
            "JoinNodeNormalization: exiting with {} nodes",
            decomposition.vertex_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decomposition::Bag;
    use crate::ids::VertexId;

    #[test]
    fn mismatched_children_get_an_exchange_node_copy() {
        let mut td = TreeDecomposition::new();
        let root = td.root();
        let v1 = VertexId::new(1);
        let v2 = VertexId::new(2);
        *td.bag_mut(root) = Bag::from([v1, v2]);
        let a = td.add_child(root, Bag::from([v1]));
        let b = td.add_child(root, Bag::from([v1, v2]));
        JoinNodeNormalization.apply(&mut td, &[]);
        for c in td.children(root).to_vec() {
            assert_eq!(td.bag(c), td.bag(root));
        }
        assert_eq!(td.children(root).len(), 2);
        let _ = (a, b);
    }

    #[test]
    fn wide_fanout_is_folded_into_binary_joins() {
        let mut td = TreeDecomposition::new();
        let root = td.root();
        let v1 = VertexId::new(1);
        *td.bag_mut(root) = Bag::from([v1]);
        td.add_child(root, Bag::from([v1]));
        td.add_child(root, Bag::from([v1]));
        td.add_child(root, Bag::from([v1]));
        JoinNodeNormalization.apply(&mut td, &[]);
        assert_eq!(td.children(root).len(), 2);
        let mut stack = td.children(root).to_vec();
        let mut leaves = 0;
        while let Some(n) = stack.pop() {
            let children = td.children(n).to_vec();
            assert!(children.len() <= 2);
            assert_eq!(td.bag(n), &Bag::from([v1]));
            if children.is_empty() {
                leaves += 1;
            }
            stack.extend(children);
        }
        assert_eq!(leaves, 3);
    }
}
