use super::{label_new_node, LabelingFunction, ManipulationOperation};
use crate::decomposition::{Bag, NodeId, TreeDecomposition};

/// If a node introduces more than `k` vertices relative to its child,
/// inserts `⌈m/k⌉ − 1` intermediate nodes so that no single introduce step
/// exceeds `k` vertices.
#[derive(Debug, Clone, Copy)]
pub struct LimitMaximumIntroducedVerticesCount {
    k: usize,
}

impl LimitMaximumIntroducedVerticesCount {
    pub fn new(k: usize) -> Self {
        assert!(k >= 1, "k must be at least 1");
        Self { k }
    }
}

impl ManipulationOperation for LimitMaximumIntroducedVerticesCount {
    fn apply(
        &self,
        decomposition: &mut TreeDecomposition,
        labeling_functions: &[Box<dyn LabelingFunction>],
    ) {
        log::debug!(
            "LimitMaximumIntroducedVerticesCount(k={}): entering with {} nodes",
            self.k,
            decomposition.vertex_count()
        );
        let edges: Vec<(NodeId, NodeId)> = decomposition
            .nodes()
            .flat_map(|n| {
                decomposition
                    .children(n)
                    .iter()
                    .map(move |c| (n, *c))
                    .collect::<Vec<_>>()
            })
            .collect();

        for (n, c) in edges {
            let node_bag = decomposition.bag(n).clone();
            let child_bag = decomposition.bag(c).clone();
            let introduced: Vec<_> = node_bag.difference(&child_bag).copied().collect();
            if introduced.len() <= self.k {
                continue;
            }
            let chunks: Vec<Vec<_>> = introduced.chunks(self.k).map(|s| s.to_vec()).collect();
            let chunk_count = chunks.len();

            let mut current_bag = node_bag;
            let mut parent = n;
            for i in (1..chunk_count).rev() {
                for v in &chunks[i] {
                    current_bag.remove(v);
                }
                let mid = decomposition.insert_between(parent, c, current_bag.clone());
                label_new_node(decomposition, mid, labeling_functions);
                parent = mid;
            }
        }
        log::debug!(
            "LimitMaximumIntroducedVerticesCount(k={}): exiting with {} nodes",
            self.k,
            decomposition.vertex_count()
        );
    }
}
