use super::{GrowableHypergraph, HypergraphView, MultiHypergraph, ShrinkableHypergraph};
use crate::error::Result;
use crate::hyperedge::Hyperedge;
use crate::ids::{EdgeId, VertexId};
use std::collections::BTreeSet;

/// A [`MultiHypergraph`] that de-duplicates the elements of every hyperedge
/// at insertion time, so no stored edge repeats a vertex. Everything else
/// is delegated straight through.
#[derive(Clone, Default)]
pub struct Hypergraph(MultiHypergraph);

impl Hypergraph {
    pub fn new() -> Self {
        Self(MultiHypergraph::new())
    }
}

impl HypergraphView for Hypergraph {
    fn size(&self) -> usize {
        self.0.size()
    }

    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.0.edge_count()
    }

    fn is_vertex(&self, v: VertexId) -> bool {
        self.0.is_vertex(v)
    }

    fn is_edge_id(&self, e: EdgeId) -> bool {
        self.0.is_edge_id(e)
    }

    fn is_edge(&self, elements: &[VertexId]) -> bool {
        self.0.is_edge(&dedup_preserving_order(elements))
    }

    fn associated_edge_ids(&self, elements: &[VertexId]) -> Vec<EdgeId> {
        self.0.associated_edge_ids(&dedup_preserving_order(elements))
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.0.vertices()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Hyperedge> + '_> {
        self.0.edges()
    }

    fn edge(&self, e: EdgeId) -> Option<&Hyperedge> {
        self.0.edge(e)
    }

    fn neighborhood(&self, v: VertexId) -> BTreeSet<VertexId> {
        self.0.neighborhood(v)
    }

    fn is_connected(&self) -> bool {
        self.0.is_connected()
    }

    fn isolated_vertices(&self) -> BTreeSet<VertexId> {
        self.0.isolated_vertices()
    }
}

impl GrowableHypergraph for Hypergraph {
    fn add_vertex(&mut self) -> VertexId {
        self.0.add_vertex()
    }

    fn add_edge(&mut self, elements: Vec<VertexId>) -> Result<EdgeId> {
        self.0.add_edge(dedup_preserving_order(&elements))
    }
}

impl ShrinkableHypergraph for Hypergraph {
    fn remove_vertex(&mut self, v: VertexId) {
        self.0.remove_vertex(v)
    }

    fn remove_edge(&mut self, e: EdgeId) -> Result<()> {
        self.0.remove_edge(e)
    }
}

fn dedup_preserving_order(elements: &[VertexId]) -> Vec<VertexId> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::with_capacity(elements.len());
    for &v in elements {
        if seen.insert(v) {
            out.push(v);
        }
    }
    out
}
