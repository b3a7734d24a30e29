use super::{
    AddEmptyLeaves, AddEmptyRoot, ExchangeNodeReplacement, JoinNodeNormalization,
    LabelingFunction, LimitMaximumForgottenVerticesCount, LimitMaximumIntroducedVerticesCount,
    ManipulationOperation,
};
use crate::decomposition::TreeDecomposition;

/// The standard "nice tree decomposition" normalization: runs
/// [`AddEmptyRoot`], [`AddEmptyLeaves`], [`JoinNodeNormalization`] and
/// [`ExchangeNodeReplacement`] to establish the structural shape, then
/// [`LimitMaximumForgottenVerticesCount`] and
/// [`LimitMaximumIntroducedVerticesCount`] (both with `k = 1`) so that every
/// remaining step introduces or forgets exactly one vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizationOperation;

impl ManipulationOperation for NormalizationOperation {
    fn apply(
        &self,
        decomposition: &mut TreeDecomposition,
        labeling_functions: &[Box<dyn LabelingFunction>],
    ) {
        log::debug!(
            "normalizing a decomposition of {} nodes",
            decomposition.vertex_count()
        );
        AddEmptyRoot.apply(decomposition, labeling_functions);
        AddEmptyLeaves.apply(decomposition, labeling_functions);
        JoinNodeNormalization.apply(decomposition, labeling_functions);
        ExchangeNodeReplacement.apply(decomposition, labeling_functions);
        LimitMaximumForgottenVerticesCount::new(1).apply(decomposition, labeling_functions);
        LimitMaximumIntroducedVerticesCount::new(1).apply(decomposition, labeling_functions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decomposition::Bag;
    use crate::ids::VertexId;
    use crate::verifier::verify_nice;

    #[test]
    fn normalizes_a_join_heavy_decomposition_into_a_nice_one() {
        let mut td = TreeDecomposition::new();
        let v1 = VertexId::new(1);
        let v2 = VertexId::new(2);
        let v3 = VertexId::new(3);
        let v4 = VertexId::new(4);
        let root = td.root();
        *td.bag_mut(root) = Bag::from([v1, v2, v3]);
        td.add_child(root, Bag::from([v1, v2]));
        td.add_child(root, Bag::from([v2, v3, v4]));
        NormalizationOperation.apply(&mut td, &[]);
        assert!(verify_nice(&td));
    }

    #[test]
    fn normalizes_a_single_empty_node() {
        let mut td = TreeDecomposition::new();
        NormalizationOperation.apply(&mut td, &[]);
        assert!(verify_nice(&td));
    }
}
