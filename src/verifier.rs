//! Checks that a [`TreeDecomposition`] actually satisfies the decomposition
//! invariants for a given hypergraph. `O((|V|+|E|)·|T|)`; intended for
//! tests, not production call sites.

use crate::decomposition::{NodeId, TreeDecomposition};
use crate::hypergraph::HypergraphView;
use crate::ids::VertexId;
use std::collections::{BTreeSet, VecDeque};

/// Returns `true` iff `decomposition` is a valid (hyper)tree decomposition
/// of `graph`: vertex coverage, edge coverage, running intersection, and
/// (when any node carries covering-edges) the hypertree containment rule.
pub fn verify(graph: &dyn HypergraphView, decomposition: &TreeDecomposition) -> bool {
    vertex_coverage_holds(graph, decomposition)
        && edge_coverage_holds(graph, decomposition)
        && running_intersection_holds(graph, decomposition)
        && hypertree_rule_holds(graph, decomposition)
}

fn vertex_coverage_holds(graph: &dyn HypergraphView, decomposition: &TreeDecomposition) -> bool {
    graph
        .vertices()
        .all(|v| decomposition.nodes().any(|n| decomposition.bag(n).contains(&v)))
}

fn edge_coverage_holds(graph: &dyn HypergraphView, decomposition: &TreeDecomposition) -> bool {
    graph.edges().all(|edge| {
        let elements = edge.distinct_elements();
        decomposition
            .nodes()
            .any(|n| elements.is_subset(decomposition.bag(n)))
    })
}

fn running_intersection_holds(graph: &dyn HypergraphView, decomposition: &TreeDecomposition) -> bool {
    for v in graph.vertices() {
        let containing: BTreeSet<NodeId> = decomposition
            .nodes()
            .filter(|n| decomposition.bag(*n).contains(&v))
            .collect();
        if containing.is_empty() {
            return false;
        }
        if !induces_connected_subtree(decomposition, &containing) {
            return false;
        }
    }
    true
}

fn induces_connected_subtree(decomposition: &TreeDecomposition, nodes: &BTreeSet<NodeId>) -> bool {
    let Some(&start) = nodes.iter().next() else {
        return true;
    };
    let mut seen = BTreeSet::new();
    seen.insert(start);
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some(n) = queue.pop_front() {
        let mut adjacent = decomposition.children(n).to_vec();
        if let Some(p) = decomposition.parent(n) {
            adjacent.push(p);
        }
        for a in adjacent {
            if nodes.contains(&a) && seen.insert(a) {
                queue.push_back(a);
            }
        }
    }
    seen.len() == nodes.len()
}

fn hypertree_rule_holds(graph: &dyn HypergraphView, decomposition: &TreeDecomposition) -> bool {
    for n in decomposition.nodes() {
        let Some(covering) = decomposition.covering_edges(n) else {
            continue;
        };
        let mut union: BTreeSet<VertexId> = covering.synthetic_vertices.clone();
        for &eid in &covering.edges {
            if let Some(edge) = graph.edge(eid) {
                union.extend(edge.distinct_elements());
            }
        }
        if !decomposition.bag(n).is_subset(&union) {
            return false;
        }
    }
    true
}

/// Checks only §8's post-[`crate::operations::NormalizationOperation`]
/// shape properties: every non-leaf has at most two children, the root bag
/// is empty, every leaf bag is empty, and every parent-child pair differs
/// by exactly one vertex unless the pair is a join (identical bags).
pub fn verify_nice(decomposition: &TreeDecomposition) -> bool {
    if !decomposition.bag(decomposition.root()).is_empty() {
        return false;
    }
    for n in decomposition.nodes() {
        let children = decomposition.children(n);
        if children.len() > 2 {
            return false;
        }
        if decomposition.is_leaf(n) && !decomposition.bag(n).is_empty() {
            return false;
        }
        for &c in children {
            let parent_bag = decomposition.bag(n);
            let child_bag = decomposition.bag(c);
            if parent_bag == child_bag {
                continue;
            }
            let introduced: BTreeSet<VertexId> = parent_bag.difference(child_bag).copied().collect();
            let forgotten: BTreeSet<VertexId> = child_bag.difference(parent_bag).copied().collect();
            let total_diff = introduced.len() + forgotten.len();
            if total_diff != 1 {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket_elimination::compute_decomposition;
    use crate::hypergraph::{GrowableHypergraph, Hypergraph};

    #[test]
    fn verifies_a_freshly_built_decomposition() {
        let mut g = Hypergraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(vec![a, b]).unwrap();
        let td = compute_decomposition(&g).unwrap();
        assert!(verify(&g, &td));
    }

    #[test]
    fn empty_decomposition_is_nice() {
        let td = crate::decomposition::TreeDecomposition::new();
        assert!(verify_nice(&td));
    }
}
