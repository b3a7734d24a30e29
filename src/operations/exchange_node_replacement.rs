use super::{label_new_node, LabelingFunction, ManipulationOperation};
use crate::decomposition::{Bag, NodeId, TreeDecomposition};

/// Splits any node that both introduces and forgets vertices relative to
/// its child into a pure-introduce node above a pure-forget node. The
/// intermediate node's bag is the intersection of the two original bags:
/// it is a subset of the parent (so the parent purely introduces down to
/// it) and a subset of the child (so it purely forgets down to the
/// child). Post: no node simultaneously introduces and forgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExchangeNodeReplacement;

impl ManipulationOperation for ExchangeNodeReplacement {
    fn apply(
        &self,
        decomposition: &mut TreeDecomposition,
        labeling_functions: &[Box<dyn LabelingFunction>],
    ) {
        log::debug!(
            "ExchangeNodeReplacement: entering with {} nodes",
            decomposition.vertex_count()
        );
        let mixed_edges: Vec<(NodeId, NodeId)> = decomposition
            .nodes()
            .flat_map(|n| {
                decomposition
                    .children(n)
                    .iter()
                    .map(move |c| (n, *c))
                    .collect::<Vec<_>>()
            })
            .filter(|(n, c)| {
                let node_bag = decomposition.bag(*n);
                let child_bag = decomposition.bag(*c);
                let introduces = !node_bag.is_subset(child_bag);
                let forgets = !child_bag.is_subset(node_bag);
                introduces && forgets
            })
            .collect();

        for (n, c) in mixed_edges {
            let mid_bag: Bag = decomposition
                .bag(n)
                .intersection(decomposition.bag(c))
                .copied()
                .collect();
            let mid = decomposition.insert_between(n, c, mid_bag);
            label_new_node(decomposition, mid, labeling_functions);
        }
        log::debug!(
            "ExchangeNodeReplacement: exiting with {} nodes",
            decomposition.vertex_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::VertexId;

    #[test]
    fn splits_a_mixed_node_into_introduce_above_forget() {
        let mut td = TreeDecomposition::new();
        let root = td.root();
        let v1 = VertexId::new(1);
        let v2 = VertexId::new(2);
        let v3 = VertexId::new(3);
        *td.bag_mut(root) = Bag::from([v1, v2]);
        let child = td.add_child(root, Bag::from([v2, v3]));
        ExchangeNodeReplacement.apply(&mut td, &[]);
        let mids = td.children(root).to_vec();
        assert_eq!(mids.len(), 1);
        let mid = mids[0];
        assert_eq!(td.bag(mid), &Bag::from([v2]));
        assert_eq!(td.children(mid), &[child]);
        assert!(td.bag(root).is_superset(td.bag(mid)));
        assert!(td.bag(child).is_superset(td.bag(mid)));
    }

    #[test]
    fn leaves_pure_introduce_or_forget_edges_untouched() {
        let mut td = TreeDecomposition::new();
        let root = td.root();
        let v1 = VertexId::new(1);
        let v2 = VertexId::new(2);
        *td.bag_mut(root) = Bag::from([v1, v2]);
        td.add_child(root, Bag::from([v1]));
        ExchangeNodeReplacement.apply(&mut td, &[]);
        assert_eq!(td.vertex_count(), 2);
    }
}
