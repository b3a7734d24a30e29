//! An immutable, identified hyperedge: an ordered sequence of vertex ids that
//! may repeat a vertex more than once. Storage and query semantics are kept
//! separate on purpose: [`Hyperedge`] never deduplicates its own elements,
//! callers that want set semantics build a [`std::collections::BTreeSet`]
//! from [`Hyperedge::elements`] themselves.

use crate::ids::{EdgeId, VertexId};
use std::collections::BTreeSet;

/// `(id, elements)`: elements preserve insertion order and may repeat.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Hyperedge {
    id: EdgeId,
    elements: Vec<VertexId>,
}

impl Hyperedge {
    pub(crate) fn new(id: EdgeId, elements: Vec<VertexId>) -> Self {
        Self { id, elements }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn elements(&self) -> &[VertexId] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.elements.contains(&v)
    }

    /// The set of distinct vertices touched by this hyperedge, sorted
    /// ascending and de-duplicated.
    pub fn distinct_elements(&self) -> BTreeSet<VertexId> {
        self.elements.iter().copied().collect()
    }

    /// Ordered sequence equality: the authoritative notion used by
    /// `MultiHypergraph::is_edge` and `associated_edge_ids`.
    pub fn sequence_eq(&self, other: &[VertexId]) -> bool {
        self.elements == other
    }

    /// Multiset equality: two hyperedges cover the same vertices the same
    /// number of times, regardless of order. Provided for callers who need
    /// unordered comparisons; sort inputs before using [`Self::sequence_eq`]
    /// if that is what you actually want.
    pub fn content_eq(&self, other: &[VertexId]) -> bool {
        let mut a = self.elements.clone();
        let mut b = other.to_vec();
        a.sort();
        b.sort();
        a == b
    }

    pub(crate) fn retain_live<F>(&mut self, mut is_live: F)
    where
        F: FnMut(VertexId) -> bool,
    {
        self.elements.retain(|v| is_live(*v));
    }
}
