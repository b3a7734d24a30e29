use super::{GrowableHypergraph, HypergraphView, ShrinkableHypergraph};
use crate::error::{Error, Result};
use crate::hyperedge::Hyperedge;
use crate::ids::{EdgeId, EdgeIdFactory, VertexId, VertexIdFactory};
use ahash::RandomState;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

/// A mutable multi-hypergraph: hyperedges may repeat elements and two edges
/// may cover the exact same elements. See [`super::Hypergraph`] for the
/// simple-hypergraph variant that de-duplicates on insertion.
#[derive(Clone)]
pub struct MultiHypergraph {
    vid_factory: VertexIdFactory,
    eid_factory: EdgeIdFactory,
    vertices: BTreeSet<VertexId>,
    deletions: BTreeSet<VertexId>,
    edges: BTreeMap<EdgeId, Hyperedge>,
    neighborhood: HashMap<VertexId, BTreeSet<VertexId>, RandomState>,
}

impl Default for MultiHypergraph {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiHypergraph {
    pub fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            eid_factory: EdgeIdFactory::new(),
            vertices: BTreeSet::new(),
            deletions: BTreeSet::new(),
            edges: BTreeMap::new(),
            neighborhood: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Recomputes `neighborhood[u]` from scratch by scanning every live
    /// edge containing `u`. Used after a removal that might have stranded
    /// a co-member, and by [`recompute_neighbors_of`] callers that want the
    /// authoritative value rather than an incremental patch.
    fn recompute_neighborhood_of(&mut self, u: VertexId) {
        let mut fresh = BTreeSet::new();
        for edge in self.edges.values() {
            if edge.contains(u) {
                for w in edge.distinct_elements() {
                    if w != u {
                        fresh.insert(w);
                    }
                }
            }
        }
        self.neighborhood.insert(u, fresh);
    }
}

impl HypergraphView for MultiHypergraph {
    fn size(&self) -> usize {
        self.vertices.len() + self.deletions.len()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn is_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    fn is_edge_id(&self, e: EdgeId) -> bool {
        self.edges.contains_key(&e)
    }

    fn is_edge(&self, elements: &[VertexId]) -> bool {
        self.edges.values().any(|e| e.sequence_eq(elements))
    }

    fn associated_edge_ids(&self, elements: &[VertexId]) -> Vec<EdgeId> {
        self.edges
            .values()
            .filter(|e| e.sequence_eq(elements))
            .map(|e| e.id())
            .collect()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Hyperedge> + '_> {
        Box::new(self.edges.values())
    }

    fn edge(&self, e: EdgeId) -> Option<&Hyperedge> {
        self.edges.get(&e)
    }

    fn neighborhood(&self, v: VertexId) -> BTreeSet<VertexId> {
        self.neighborhood.get(&v).cloned().unwrap_or_default()
    }

    fn is_connected(&self) -> bool {
        let Some(&start) = self.vertices.iter().next() else {
            return false;
        };
        let mut seen = BTreeSet::new();
        seen.insert(start);
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            for edge in self.edges.values() {
                if !edge.contains(v) {
                    continue;
                }
                for w in edge.distinct_elements() {
                    if seen.insert(w) {
                        queue.push_back(w);
                    }
                }
            }
        }
        seen.len() == self.vertices.len()
    }

    fn isolated_vertices(&self) -> BTreeSet<VertexId> {
        let mut in_big_edge = BTreeSet::new();
        for edge in self.edges.values() {
            if edge.len() > 1 {
                in_big_edge.extend(edge.distinct_elements());
            }
        }
        self.vertices.difference(&in_big_edge).copied().collect()
    }
}

impl GrowableHypergraph for MultiHypergraph {
    fn add_vertex(&mut self) -> VertexId {
        let v = self.vid_factory.one_more();
        self.vertices.insert(v);
        self.neighborhood.insert(v, BTreeSet::new());
        log::trace!("added vertex {v:?}");
        v
    }

    fn add_edge(&mut self, elements: Vec<VertexId>) -> Result<EdgeId> {
        if elements.is_empty() {
            return Err(Error::empty_hyperedge());
        }
        for &v in &elements {
            if !self.vertices.contains(&v) {
                return Err(Error::unknown_vertex(v));
            }
        }
        let id = self.eid_factory.one_more();
        let distinct: BTreeSet<VertexId> = elements.iter().copied().collect();
        for &u in &distinct {
            let entry = self.neighborhood.entry(u).or_default();
            for &w in &distinct {
                if w != u {
                    entry.insert(w);
                }
            }
        }
        self.edges.insert(id, Hyperedge::new(id, elements));
        log::trace!("added edge {id:?} over {} distinct vertices", distinct.len());
        Ok(id)
    }
}

impl ShrinkableHypergraph for MultiHypergraph {
    fn remove_vertex(&mut self, v: VertexId) {
        if !self.vertices.remove(&v) {
            return;
        }
        self.deletions.insert(v);
        let former_neighbors = self.neighborhood.remove(&v).unwrap_or_default();
        for edge in self.edges.values_mut() {
            edge.retain_live(|u| u != v);
        }
        for w in former_neighbors {
            self.recompute_neighborhood_of(w);
        }
        log::trace!("removed vertex {v:?}");
    }

    fn remove_edge(&mut self, e: EdgeId) -> Result<()> {
        let removed = self.edges.remove(&e).ok_or_else(|| Error::unknown_edge(e))?;
        for u in removed.distinct_elements() {
            self.recompute_neighborhood_of(u);
        }
        log::trace!("removed edge {e:?}");
        Ok(())
    }
}
