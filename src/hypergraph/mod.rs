//! The (multi-)hypergraph data model.
//!
//! # Capability split
//!
//! Querying a hypergraph and mutating one are different capabilities.
//! [`HypergraphView`] exposes the read-only surface; [`GrowableHypergraph`]
//! and [`ShrinkableHypergraph`] extend it with the mutating operations.
//! [`MultiHypergraph`] implements all three and allows repeated elements
//! within a hyperedge and duplicate hyperedges; [`Hypergraph`] wraps it and
//! de-duplicates elements of every inserted hyperedge, for callers who want
//! simple-hypergraph semantics without re-deriving them.

mod debug;
mod multi;
mod simple;

pub use self::multi::MultiHypergraph;
pub use self::simple::Hypergraph;

use crate::error::{Error, Result};
use crate::hyperedge::Hyperedge;
use crate::ids::{ConstCollection, EdgeId, VertexId};
use std::collections::BTreeSet;

/// Read-only surface shared by [`MultiHypergraph`] and [`Hypergraph`].
pub trait HypergraphView {
    /// Number of vertices ever added, live or not.
    fn size(&self) -> usize;
    /// Number of currently live vertices.
    fn vertex_count(&self) -> usize;
    /// Number of currently live edges.
    fn edge_count(&self) -> usize;

    fn is_vertex(&self, v: VertexId) -> bool;
    fn is_edge_id(&self, e: EdgeId) -> bool;
    /// True iff some live edge's elements equal `elements`, in order.
    fn is_edge(&self, elements: &[VertexId]) -> bool;

    /// Ids of all live edges whose elements equal `elements`, in order.
    fn associated_edge_ids(&self, elements: &[VertexId]) -> Vec<EdgeId>;

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn edges(&self) -> Box<dyn Iterator<Item = &Hyperedge> + '_>;
    fn edge(&self, e: EdgeId) -> Option<&Hyperedge>;

    /// The `index`-th live vertex, in the same order as [`Self::vertices`].
    /// Fails with [`crate::error::Error::OutOfRange`] if `index` is past the
    /// end of the live vertex collection.
    fn vertex_at_position(&self, index: usize) -> Result<VertexId> {
        let snapshot: Vec<VertexId> = self.vertices().collect();
        let len = ConstCollection::len(&snapshot);
        ConstCollection::get(&snapshot, index)
            .copied()
            .ok_or_else(|| Error::out_of_range(index, len))
    }

    /// The `index`-th live edge, in the same order as [`Self::edges`]. Fails
    /// with [`crate::error::Error::OutOfRange`] if `index` is past the end of
    /// the live edge collection.
    fn edge_at_position(&self, index: usize) -> Result<&Hyperedge> {
        let snapshot: Vec<&Hyperedge> = self.edges().collect();
        let len = ConstCollection::len(&snapshot);
        ConstCollection::get(&snapshot, index)
            .copied()
            .ok_or_else(|| Error::out_of_range(index, len))
    }

    /// Sorted, de-duplicated set of vertices co-occurring with `v` in at
    /// least one live edge. Empty (not an error) if `v` is unknown or
    /// isolated.
    fn neighborhood(&self, v: VertexId) -> BTreeSet<VertexId>;
    fn is_neighbor(&self, v: VertexId, w: VertexId) -> bool {
        self.neighborhood(v).contains(&w)
    }

    /// BFS-reachability from the lowest live vertex, treating every live
    /// edge as fully connecting all of its elements. Returns `false` on an
    /// empty graph.
    fn is_connected(&self) -> bool;

    /// Vertices that appear in no edge of size > 1.
    fn isolated_vertices(&self) -> BTreeSet<VertexId>;

    /// Returns something that can inspect into the graph.
    fn debug(&self) -> Box<dyn std::fmt::Debug + '_>
    where
        Self: Sized,
    {
        Box::new(self::debug::HypergraphDebug::new(self))
    }
}

/// Mutating operations that only ever add vertices or edges.
pub trait GrowableHypergraph: HypergraphView {
    fn add_vertex(&mut self) -> VertexId;

    fn add_vertices(&mut self, k: usize) -> Vec<VertexId> {
        (0..k).map(|_| self.add_vertex()).collect()
    }

    /// Fails with [`crate::error::Error::InvalidArgument`] if `elements` is
    /// empty, or [`crate::error::Error::NotFound`] if any element is not a
    /// live vertex. No mutation occurs on failure.
    fn add_edge(&mut self, elements: Vec<VertexId>) -> Result<EdgeId>;
}

/// Mutating operations that remove previously added vertices or edges.
pub trait ShrinkableHypergraph: GrowableHypergraph {
    /// No-op if `v` is not live.
    fn remove_vertex(&mut self, v: VertexId);

    /// Fails with [`crate::error::Error::NotFound`] if `e` is not live.
    fn remove_edge(&mut self, e: EdgeId) -> Result<()>;
}
