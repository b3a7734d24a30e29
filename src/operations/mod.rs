//! Structural rewrites of a [`TreeDecomposition`] that preserve the
//! decomposition invariants: each [`ManipulationOperation`] mutates in
//! place and is total on a valid decomposition (internal consistency
//! violations discovered mid-rewrite are programmer errors and panic,
//! rather than surfacing as a domain error).

mod add_empty_leaves;
mod add_empty_root;
mod exchange_node_replacement;
mod join_node_normalization;
mod labeling;
mod limit_forgotten;
mod limit_introduced;
mod normalization;

pub use self::add_empty_leaves::AddEmptyLeaves;
pub use self::add_empty_root::AddEmptyRoot;
pub use self::exchange_node_replacement::ExchangeNodeReplacement;
pub use self::join_node_normalization::JoinNodeNormalization;
pub use self::labeling::{BagSize, BagSizeTimesTwo, LabelingFunction};
pub use self::limit_forgotten::LimitMaximumForgottenVerticesCount;
pub use self::limit_introduced::LimitMaximumIntroducedVerticesCount;
pub use self::normalization::NormalizationOperation;

use crate::decomposition::{NodeId, TreeDecomposition};

/// A pure rewriter over a decomposition. `apply` mutates `decomposition` in
/// place and must leave the four decomposition invariants holding before
/// returning.
pub trait ManipulationOperation {
    fn apply(&self, decomposition: &mut TreeDecomposition, labeling_functions: &[Box<dyn LabelingFunction>]);
}

/// Runs every labelling function, in order, against a freshly created node,
/// feeding each one the label snapshot accumulated so far so later
/// functions in the list can chain off earlier ones by name.
pub(crate) fn label_new_node(
    decomposition: &mut TreeDecomposition,
    node: NodeId,
    labeling_functions: &[Box<dyn LabelingFunction>],
) {
    for f in labeling_functions {
        let bag = decomposition.bag(node).clone();
        let value = {
            let snapshot = decomposition.label_snapshot(node);
            f.compute_label(&bag, snapshot)
                .expect("labelling function chain must be internally consistent")
        };
        decomposition.set_label(node, f.name().to_owned(), value);
    }
}
