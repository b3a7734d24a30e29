use super::{label_new_node, LabelingFunction, ManipulationOperation};
use crate::decomposition::{Bag, NodeId, TreeDecomposition};

/// If a node forgets more than `k` vertices relative to its child, inserts
/// `⌈m/k⌉ − 1` intermediate nodes so that no single forget step exceeds `k`
/// vertices.
#[derive(Debug, Clone, Copy)]
pub struct LimitMaximumForgottenVerticesCount {
    k: usize,
}

impl LimitMaximumForgottenVerticesCount {
    pub fn new(k: usize) -> Self {
        assert!(k >= 1, "k must be at least 1");
        Self { k }
    }
}

impl ManipulationOperation for LimitMaximumForgottenVerticesCount {
    fn apply(
        &self,
        decomposition: &mut TreeDecomposition,
        labeling_functions: &[Box<dyn LabelingFunction>],
    ) {
        log::debug!(
            "LimitMaximumForgottenVerticesCount(k={}): entering with {} nodes",
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
            let forgotten: Vec<_> = child_bag.difference(&node_bag).copied().collect();
            if forgotten.len() <= self.k {
                continue;
            }
            let chunks: Vec<Vec<_>> = forgotten.chunks(self.k).map(|s| s.to_vec()).collect();
            let chunk_count = chunks.len();

            let mut current_bag = node_bag;
            let mut parent = n;
            for chunk in chunks.iter().take(chunk_count - 1) {
                for v in chunk {
                    current_bag.insert(*v);
                }
                let mid = decomposition.insert_between(parent, c, current_bag.clone());
                label_new_node(decomposition, mid, labeling_functions);
                parent = mid;
            }
        }
        log::debug!(
            "LimitMaximumForgottenVerticesCount(k={}): exiting with {} nodes",
            self.k,
            decomposition.vertex_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::VertexId;

    #[test]
    fn splits_a_wide_forget_step_into_a_chain() {
        let mut td = TreeDecomposition::new();
        let root = td.root();
        let vs: Vec<_> = (1..=5).map(VertexId::new).collect();
        let child = td.add_child(root, vs.iter().copied().collect::<Bag>());
        LimitMaximumForgottenVerticesCount::new(2).apply(&mut td, &[]);
        // 5 forgotten, k=2 => ceil(5/2) = 3 steps => 2 new nodes
        assert_eq!(td.vertex_count(), 4);
        let mut cur = root;
        let mut steps = vec![];
        loop {
            let children = td.children(cur).to_vec();
            if children.is_empty() {
                break;
            }
            assert_eq!(children.len(), 1);
            let next = children[0];
            let diff = td.bag(next).len() as isize - td.bag(cur).len() as isize;
            steps.push(diff);
            cur = next;
        }
        assert_eq!(cur, child);
        assert!(steps.iter().all(|d| *d >= 1 && *d <= 2));
        assert_eq!(steps.iter().sum::<isize>(), 5);
    }

    #[test]
    fn leaves_narrow_forget_steps_untouched() {
        let mut td = TreeDecomposition::new();
        let root = td.root();
        let v1 = VertexId::new(1);
        td.add_child(root, Bag::from([v1]));
        LimitMaximumForgottenVerticesCount::new(4).apply(&mut td, &[]);
        assert_eq!(td.vertex_count(), 2);
    }
}
