//! Elimination orderings that feed [`crate::bucket_elimination`].
//!
//! An [`OrderingStrategy`] is a pure function from a hypergraph to a
//! permutation of its live vertices: it never mutates its input. The
//! heuristic strategies run against a throwaway [`EliminationGraph`] scratch
//! copy instead.

mod external;
mod min_degree;
mod min_fill;
mod scratch_graph;

pub use self::external::ExternalOrdering;
pub use self::min_degree::MinDegree;
pub use self::min_fill::MinFill;
pub(crate) use self::scratch_graph::EliminationGraph;

use crate::error::Result;
use crate::hypergraph::HypergraphView;
use crate::ids::VertexId;

/// Produces an elimination ordering for a hypergraph.
///
/// Takes `graph` through the object-safe [`HypergraphView`] trait object so
/// that [`crate::bucket_elimination::BucketEliminationAlgorithm`] can select
/// a strategy at runtime instead of monomorphizing over it.
pub trait OrderingStrategy {
    /// Returns `π = [v_1, …, v_n]`, a permutation of every live vertex of
    /// `graph`. `graph` itself is left unmodified.
    fn order(&self, graph: &dyn HypergraphView) -> Result<Vec<VertexId>>;
}
