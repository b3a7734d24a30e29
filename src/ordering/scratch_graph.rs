use crate::hypergraph::HypergraphView;
use crate::ids::VertexId;
use ahash::RandomState;
use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use std::collections::HashMap;

/// A throwaway simple-graph view of a hypergraph's primal graph (every
/// hyperedge becomes a clique over its elements), used by the heuristic
/// [`super::OrderingStrategy`] implementations to cheaply track degree and
/// fill-in as vertices are eliminated one at a time.
///
/// Built once per call to `order`, mutated freely, and discarded; the
/// hypergraph that seeded it is never touched.
pub(crate) struct EliminationGraph {
    graph: StableUnGraph<VertexId, (), usize>,
    index_of: HashMap<VertexId, NodeIndex<usize>, RandomState>,
}

impl EliminationGraph {
    pub(crate) fn build(graph: &dyn HypergraphView) -> Self {
        let mut scratch = StableUnGraph::<VertexId, (), usize>::with_capacity(0, 0);
        let mut index_of = HashMap::with_hasher(RandomState::new());
        for v in graph.vertices() {
            let idx = scratch.add_node(v);
            index_of.insert(v, idx);
        }
        for edge in graph.edges() {
            let distinct: Vec<VertexId> = edge.distinct_elements().into_iter().collect();
            for i in 0..distinct.len() {
                for j in (i + 1)..distinct.len() {
                    let a = index_of[&distinct[i]];
                    let b = index_of[&distinct[j]];
                    if scratch.find_edge(a, b).is_none() {
                        scratch.add_edge(a, b, ());
                    }
                }
            }
        }
        Self {
            graph: scratch,
            index_of,
        }
    }

    pub(crate) fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.node_indices().map(|i| self.graph[i])
    }

    pub(crate) fn degree(&self, v: VertexId) -> usize {
        let idx = self.index_of[&v];
        self.graph.neighbors(idx).count()
    }

    pub(crate) fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let idx = self.index_of[&v];
        self.graph.neighbors(idx).map(|i| self.graph[i]).collect()
    }

    /// Number of new edges that eliminating `v` would introduce: the count
    /// of neighbor pairs of `v` that are not already adjacent.
    pub(crate) fn fill_count(&self, v: VertexId) -> usize {
        let neighbors = self.neighbors(v);
        let mut missing = 0;
        for i in 0..neighbors.len() {
            for j in (i + 1)..neighbors.len() {
                let a = self.index_of[&neighbors[i]];
                let b = self.index_of[&neighbors[j]];
                if self.graph.find_edge(a, b).is_none() {
                    missing += 1;
                }
            }
        }
        missing
    }

    /// Removes `v` from the scratch graph, adding a clique over its former
    /// neighbors so later degree/fill queries reflect the elimination.
    pub(crate) fn eliminate(&mut self, v: VertexId) {
        let neighbors = self.neighbors(v);
        for i in 0..neighbors.len() {
            for j in (i + 1)..neighbors.len() {
                let a = self.index_of[&neighbors[i]];
                let b = self.index_of[&neighbors[j]];
                if self.graph.find_edge(a, b).is_none() {
                    self.graph.add_edge(a, b, ());
                }
            }
        }
        let idx = self.index_of.remove(&v).expect("v must be in scratch graph");
        self.graph.remove_node(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypergraph::{GrowableHypergraph, Hypergraph};

    #[test]
    fn clique_expansion_has_expected_degree() {
        let mut hg = Hypergraph::new();
        let a = hg.add_vertex();
        let b = hg.add_vertex();
        let c = hg.add_vertex();
        hg.add_edge(vec![a, b, c]).unwrap();
        let scratch = EliminationGraph::build(&hg);
        assert_eq!(scratch.degree(a), 2);
        assert_eq!(scratch.fill_count(a), 0);
    }

    #[test]
    fn eliminate_connects_remaining_neighbors() {
        let mut hg = Hypergraph::new();
        let a = hg.add_vertex();
        let b = hg.add_vertex();
        let c = hg.add_vertex();
        hg.add_edge(vec![a, b]).unwrap();
        hg.add_edge(vec![a, c]).unwrap();
        let mut scratch = EliminationGraph::build(&hg);
        assert_eq!(scratch.fill_count(a), 1);
        scratch.eliminate(a);
        assert!(scratch.neighbors(b).contains(&c));
        assert!(scratch.neighbors(c).contains(&b));
    }
}
