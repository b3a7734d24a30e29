use super::OrderingStrategy;
use crate::error::{Error, Result};
use crate::hypergraph::HypergraphView;
use crate::ids::VertexId;
use std::collections::BTreeSet;

/// Wraps a caller-supplied permutation. Validated against the graph's live
/// vertices before use: every live vertex must appear exactly once.
#[derive(Debug, Clone)]
pub struct ExternalOrdering(Vec<VertexId>);

impl ExternalOrdering {
    pub fn new(permutation: Vec<VertexId>) -> Self {
        Self(permutation)
    }
}

impl OrderingStrategy for ExternalOrdering {
    fn order(&self, graph: &dyn HypergraphView) -> Result<Vec<VertexId>> {
        let live: BTreeSet<VertexId> = graph.vertices().collect();
        let mut seen = BTreeSet::new();
        for &v in &self.0 {
            if !live.contains(&v) {
                return Err(Error::unknown_vertex(v));
            }
            if !seen.insert(v) {
                return Err(Error::unknown_vertex(v));
            }
        }
        if seen.len() != live.len() {
            let missing = *live.difference(&seen).next().expect("sets differ in size");
            return Err(Error::unknown_vertex(missing));
        }
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypergraph::{GrowableHypergraph, Hypergraph};

    #[test]
    fn accepts_a_valid_permutation() {
        let mut hg = Hypergraph::new();
        let a = hg.add_vertex();
        let b = hg.add_vertex();
        let ordering = ExternalOrdering::new(vec![b, a]);
        assert_eq!(ordering.order(&hg).unwrap(), vec![b, a]);
    }

    #[test]
    fn rejects_a_partial_permutation() {
        let mut hg = Hypergraph::new();
        let a = hg.add_vertex();
        let _b = hg.add_vertex();
        let ordering = ExternalOrdering::new(vec![a]);
        assert!(ordering.order(&hg).is_err());
    }

    #[test]
    fn rejects_an_unknown_vertex() {
        let mut hg = Hypergraph::new();
        let a = hg.add_vertex();
        let bogus = crate::ids::VertexId::new(999);
        let ordering = ExternalOrdering::new(vec![a, bogus]);
        assert!(ordering.order(&hg).is_err());
    }
}
