use hypertree_decomposition::bucket_elimination::compute_decomposition;
use hypertree_decomposition::decomposition::LabelValue;
use hypertree_decomposition::hypergraph::{GrowableHypergraph, Hypergraph};
use hypertree_decomposition::operations::{
    BagSize, BagSizeTimesTwo, LabelingFunction, ManipulationOperation, NormalizationOperation,
};
use hypertree_decomposition::verifier::{verify, verify_nice};
use std::collections::BTreeSet;

#[test]
fn empty_graph() {
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
fn path_of_three_vertices_with_bag_size_labelling() {
    let mut g = Hypergraph::new();
    let v1 = g.add_vertex();
    let v2 = g.add_vertex();
    let v3 = g.add_vertex();
    g.add_edge(vec![v1, v2]).unwrap();
    g.add_edge(vec![v2, v3]).unwrap();
    let mut td = compute_decomposition(&g).unwrap();

    let labeling_functions: Vec<Box<dyn LabelingFunction>> = vec![Box::new(BagSize)];
    NormalizationOperation.apply(&mut td, &labeling_functions);

    for n in td.nodes() {
        assert_eq!(
            td.require_label(n, "BAG_SIZE").unwrap().as_usize(),
            Some(td.bag(n).len())
        );
    }
}

#[test]
fn path_of_three_vertices_with_chained_labelling() {
    let mut g = Hypergraph::new();
    let v1 = g.add_vertex();
    let v2 = g.add_vertex();
    let v3 = g.add_vertex();
    g.add_edge(vec![v1, v2]).unwrap();
    g.add_edge(vec![v2, v3]).unwrap();
    let mut td = compute_decomposition(&g).unwrap();

    let labeling_functions: Vec<Box<dyn LabelingFunction>> =
        vec![Box::new(BagSize), Box::new(BagSizeTimesTwo)];
    NormalizationOperation.apply(&mut td, &labeling_functions);

    for n in td.nodes() {
        let bag_size = td.require_label(n, "BAG_SIZE").unwrap().as_usize().unwrap();
        let doubled = td
            .require_label(n, "BAG_SIZE_TIMES_2")
            .unwrap()
            .as_usize()
            .unwrap();
        assert_eq!(doubled, 2 * bag_size);
        assert_eq!(LabelValue::Usize(bag_size).as_usize(), Some(bag_size));
    }
}

#[test]
fn triangle_plus_isolated_vertex() {
    let mut g = Hypergraph::new();
    let v1 = g.add_vertex();
    let v2 = g.add_vertex();
    let v3 = g.add_vertex();
    let v4 = g.add_vertex();
    g.add_edge(vec![v1, v2]).unwrap();
    g.add_edge(vec![v2, v3]).unwrap();
    g.add_edge(vec![v1, v3]).unwrap();

    let mut td = compute_decomposition(&g).unwrap();
    assert!(verify(&g, &td));

    NormalizationOperation.apply(&mut td, &[]);
    assert!(verify_nice(&td));

    assert!(td
        .nodes()
        .any(|n| td.bag(n).is_superset(&BTreeSet::from([v1, v2, v3]))));

    let containing_v4: Vec<_> = td.nodes().filter(|n| td.bag(*n).contains(&v4)).collect();
    assert!(!containing_v4.is_empty());
    let containing_set: BTreeSet<_> = containing_v4.iter().copied().collect();
    let mut seen = BTreeSet::new();
    let mut stack = vec![*containing_v4.first().unwrap()];
    seen.insert(*containing_v4.first().unwrap());
    while let Some(n) = stack.pop() {
        let mut adjacent = td.children(n).to_vec();
        if let Some(p) = td.parent(n) {
            adjacent.push(p);
        }
        for a in adjacent {
            if containing_set.contains(&a) && seen.insert(a) {
                stack.push(a);
            }
        }
    }
    assert_eq!(seen.len(), containing_set.len());
}
