//! Turns a hypergraph plus an elimination ordering into a raw tree
//! decomposition.
//!
//! Construction is a single forward pass over the ordering. For bucket
//! `B_i`, `parent(i)` is the earliest-in-π vertex of `B_i \ {v_i}`; because
//! `π` is processed in order and every bucket only ever merges into a
//! *later* bucket's position in the permutation... no: `parent(i)` is, by
//! definition, an element still to be eliminated, so it always sits later
//! in `π` than `i`. One pass therefore sees each bucket's final bag at
//! exactly the moment it strips `v_i`; nothing merges into it afterwards.

use crate::decomposition::{Bag, CoveringEdges, LabeledTree, NodeId, TreeDecomposition};
use crate::error::Result;
use crate::hypergraph::HypergraphView;
use crate::ids::{EdgeId, VertexId};
use crate::ordering::{MinFill, OrderingStrategy};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Configuration for [`compute_decomposition`], mirroring the two
/// recognised options on the algorithm: which ordering strategy to run, and
/// whether to attach hypertree covering-edges to every bag afterwards.
pub struct BucketEliminationAlgorithm {
    ordering_strategy: Box<dyn OrderingStrategy>,
    compute_hypertree_coverage: bool,
}

impl Default for BucketEliminationAlgorithm {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl BucketEliminationAlgorithm {
    pub fn builder() -> BucketEliminationAlgorithmBuilder {
        BucketEliminationAlgorithmBuilder::default()
    }

    pub fn compute_decomposition(&self, graph: &dyn HypergraphView) -> Result<TreeDecomposition> {
        log::debug!(
            "computing decomposition for {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        let ordering = self.ordering_strategy.order(graph)?;
        let mut decomposition = build_raw_decomposition(graph, &ordering);
        log::trace!("raw decomposition has {} nodes", decomposition.vertex_count());
        if self.compute_hypertree_coverage {
            attach_hypertree_coverage(graph, &mut decomposition);
        }
        Ok(decomposition)
    }
}

pub struct BucketEliminationAlgorithmBuilder {
    ordering_strategy: Box<dyn OrderingStrategy>,
    compute_hypertree_coverage: bool,
}

impl Default for BucketEliminationAlgorithmBuilder {
    fn default() -> Self {
        Self {
            ordering_strategy: Box::new(MinFill),
            compute_hypertree_coverage: false,
        }
    }
}

impl BucketEliminationAlgorithmBuilder {
    pub fn ordering_strategy(mut self, strategy: Box<dyn OrderingStrategy>) -> Self {
        self.ordering_strategy = strategy;
        self
    }

    pub fn compute_hypertree_coverage(mut self, enabled: bool) -> Self {
        self.compute_hypertree_coverage = enabled;
        self
    }

    pub fn build(self) -> BucketEliminationAlgorithm {
        BucketEliminationAlgorithm {
            ordering_strategy: self.ordering_strategy,
            compute_hypertree_coverage: self.compute_hypertree_coverage,
        }
    }
}

/// Convenience entry point using [`MinFill`] and no hypertree coverage,
/// equivalent to `BucketEliminationAlgorithm::default().compute_decomposition(graph)`.
pub fn compute_decomposition(graph: &dyn HypergraphView) -> Result<TreeDecomposition> {
    BucketEliminationAlgorithm::default().compute_decomposition(graph)
}

fn build_raw_decomposition(graph: &dyn HypergraphView, ordering: &[VertexId]) -> TreeDecomposition {
    if ordering.is_empty() {
        return TreeDecomposition::new();
    }

    let position: HashMap<VertexId, usize> = ordering
        .iter()
        .enumerate()
        .map(|(i, v)| (*v, i))
        .collect();

    let mut buckets: Vec<BTreeSet<VertexId>> = ordering.iter().map(|v| BTreeSet::from([*v])).collect();

    for edge in graph.edges() {
        let distinct = edge.distinct_elements();
        if distinct.is_empty() {
            continue;
        }
        let earliest = *distinct.iter().min_by_key(|v| position[v]).expect("non-empty");
        let bucket_idx = position[&earliest];
        buckets[bucket_idx].extend(distinct);
    }

    // node id for bucket i is assigned once we know whether it needs a
    // synthetic root; record bags first, wire up parent/child after.
    let mut parent_of_bucket: Vec<Option<usize>> = vec![None; buckets.len()];
    let mut final_bags: Vec<Bag> = Vec::with_capacity(buckets.len());

    for i in 0..buckets.len() {
        let v_i = ordering[i];
        let snapshot = buckets[i].clone();
        log::trace!("bucket for {v_i:?} finalized with bag {snapshot:?}");
        final_bags.push(snapshot.clone());

        let mut rest: Vec<VertexId> = snapshot.into_iter().filter(|v| *v != v_i).collect();
        rest.sort_by_key(|v| position[v]);
        if let Some(&parent_vertex) = rest.first() {
            let parent_idx = position[&parent_vertex];
            parent_of_bucket[i] = Some(parent_idx);
            buckets[parent_idx].extend(rest);
        }
    }

    let mut tree: LabeledTree<Bag> = LabeledTree::new();
    let mut node_of_bucket: Vec<Option<NodeId>> = vec![None; buckets.len()];
    let roots: Vec<usize> = (0..buckets.len())
        .filter(|&i| parent_of_bucket[i].is_none())
        .collect();

    // Build each rooted component top-down via a simple worklist so every
    // node is created after its parent.
    let mut children_of: Vec<Vec<usize>> = vec![vec![]; buckets.len()];
    for i in 0..buckets.len() {
        if let Some(p) = parent_of_bucket[i] {
            children_of[p].push(i);
        }
    }

    fn place(
        i: usize,
        parent_node: Option<NodeId>,
        tree: &mut LabeledTree<Bag>,
        final_bags: &[Bag],
        children_of: &[Vec<usize>],
        node_of_bucket: &mut [Option<NodeId>],
    ) {
        let node = match parent_node {
            None => tree.add_root(final_bags[i].clone()),
            Some(p) => tree.add_child(p, final_bags[i].clone()),
        };
        node_of_bucket[i] = Some(node);
        for &child in &children_of[i] {
            place(child, Some(node), tree, final_bags, children_of, node_of_bucket);
        }
    }

    if roots.len() == 1 {
        place(roots[0], None, &mut tree, &final_bags, &children_of, &mut node_of_bucket);
    } else {
        let synthetic_root = tree.add_root(Bag::new());
        for &r in &roots {
            place(r, Some(synthetic_root), &mut tree, &final_bags, &children_of, &mut node_of_bucket);
        }
    }

    TreeDecomposition::from_bags(tree)
}

/// Greedy set cover: repeatedly pick the lowest-id edge covering the most
/// still-uncovered bag vertices, breaking ties by edge id ascending. Any
/// bag vertex touched by no hyperedge gets a synthetic singleton entry.
fn attach_hypertree_coverage(graph: &dyn HypergraphView, decomposition: &mut TreeDecomposition) {
    let edges: BTreeMap<EdgeId, BTreeSet<VertexId>> = graph
        .edges()
        .map(|e| (e.id(), e.distinct_elements()))
        .collect();

    for node in decomposition.nodes().collect::<Vec<_>>() {
        let mut remaining: BTreeSet<VertexId> = decomposition.bag(node).clone();
        let mut chosen = BTreeSet::new();
        let mut synthetic = BTreeSet::new();

        while !remaining.is_empty() {
            let best = edges
                .iter()
                .filter(|(_, elements)| elements.intersection(&remaining).next().is_some())
                .max_by_key(|(id, elements)| {
                    let covers = elements.intersection(&remaining).count();
                    (covers, std::cmp::Reverse(id.to_raw()))
                })
                .map(|(id, elements)| (*id, elements.clone()));

            match best {
                Some((id, elements)) => {
                    chosen.insert(id);
                    for v in elements.intersection(&remaining).copied().collect::<Vec<_>>() {
                        remaining.remove(&v);
                    }
                }
                None => {
                    // No hyperedge touches any remaining vertex: give each
                    // one a synthetic singleton entry and stop.
                    synthetic.extend(remaining.iter().copied());
                    remaining.clear();
                }
            }
        }

        decomposition.set_covering_edges(
            node,
            CoveringEdges {
                edges: chosen,
                synthetic_vertices: synthetic,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypergraph::{GrowableHypergraph, Hypergraph};
    use crate::verifier::verify;

    #[test]
    fn empty_graph_yields_single_empty_root() {
        let g = Hypergraph::new();
        let td = compute_decomposition(&g).unwrap();
        assert_eq!(td.vertex_count(), 1);
        assert_eq!(td.edge_count(), 0);
        assert!(td.bag(td.root()).is_empty());
    }

    #[test]
    fn three_isolated_vertices() {
        let mut g = Hypergraph::new();
        g.add_vertex();
        g.add_vertex();
        g.add_vertex();
        let td = compute_decomposition(&g).unwrap();
        assert!(verify(&g, &td));
        assert_eq!(td.edge_count(), td.vertex_count() - 1);
        assert!(td.minimum_bag_size() <= td.maximum_bag_size());
    }

    #[test]
    fn path_of_three_vertices() {
        let mut g = Hypergraph::new();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        let v3 = g.add_vertex();
        g.add_edge(vec![v1, v2]).unwrap();
        g.add_edge(vec![v2, v3]).unwrap();
        let td = compute_decomposition(&g).unwrap();
        assert!(verify(&g, &td));
        assert!(td
            .nodes()
            .any(|n| td.bag(n).is_superset(&BTreeSet::from([v1, v2]))));
        assert!(td
            .nodes()
            .any(|n| td.bag(n).is_superset(&BTreeSet::from([v2, v3]))));
        assert_eq!(td.maximum_bag_size(), 2);
    }

    #[test]
    fn hypertree_coverage_handles_isolated_vertex_with_synthetic_entry() {
        let mut g = Hypergraph::new();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        g.add_edge(vec![v1, v2]).unwrap();
        let isolated = g.add_vertex();
        let td = BucketEliminationAlgorithm::builder()
            .compute_hypertree_coverage(true)
            .build()
            .compute_decomposition(&g)
            .unwrap();
        assert!(verify(&g, &td));
        for n in td.nodes() {
            if td.bag(n).contains(&isolated) {
                let covering = td.covering_edges(n).unwrap();
                assert!(covering.synthetic_vertices.contains(&isolated));
            }
        }
    }
}
