use super::{EliminationGraph, OrderingStrategy};
use crate::error::Result;
use crate::hypergraph::HypergraphView;
use crate::ids::VertexId;

/// Repeatedly eliminates the vertex whose removal introduces the fewest
/// new edges ("fill"), breaking ties by current degree ascending, then by
/// vertex id ascending.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinFill;

impl OrderingStrategy for MinFill {
    fn order(&self, graph: &dyn HypergraphView) -> Result<Vec<VertexId>> {
        let mut scratch = EliminationGraph::build(graph);
        let mut ordering = Vec::with_capacity(graph.vertex_count());
        loop {
            let next = scratch
                .vertices()
                .map(|v| (scratch.fill_count(v), scratch.degree(v), v))
                .min();
            let Some((fill, degree, v)) = next else {
                break;
            };
            log::trace!(
                "min-fill eliminating {v:?} (fill={fill}, degree={degree}), {} vertices left",
                ordering.len() + 1
            );
            scratch.eliminate(v);
            ordering.push(v);
        }
        Ok(ordering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypergraph::{GrowableHypergraph, Hypergraph};
    use std::collections::BTreeSet;

    #[test]
    fn orders_every_vertex_exactly_once() {
        let mut hg = Hypergraph::new();
        let a = hg.add_vertex();
        let b = hg.add_vertex();
        let c = hg.add_vertex();
        hg.add_edge(vec![a, b]).unwrap();
        hg.add_edge(vec![b, c]).unwrap();
        let ordering = MinFill.order(&hg).unwrap();
        let as_set: BTreeSet<_> = ordering.iter().copied().collect();
        assert_eq!(ordering.len(), 3);
        assert_eq!(as_set, BTreeSet::from([a, b, c]));
    }

    #[test]
    fn empty_graph_yields_empty_ordering() {
        let hg = Hypergraph::new();
        assert!(MinFill.order(&hg).unwrap().is_empty());
    }
}
