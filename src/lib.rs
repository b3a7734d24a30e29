//! Tree and hypertree decomposition of (multi-)hypergraphs via bucket
//! elimination.
//!
//! # Overview
//!
//! A [`hypergraph`] holds vertices and hyperedges (ordinary graphs are the
//! special case where every edge has exactly two distinct elements). An
//! [`ordering`] strategy picks an elimination order for a hypergraph's
//! vertices; [`bucket_elimination`] consumes that order to build a
//! [`decomposition::TreeDecomposition`], optionally attaching hypertree
//! covering-edge information. [`operations`] then rewrites a decomposition
//! in place — adding empty roots and leaves, splitting mixed nodes, bounding
//! how many vertices a single step may introduce or forget — while
//! preserving the running-intersection property throughout. [`verifier`]
//! checks all of this after the fact, for tests.
//!
//! ```
//! use hypertree_decomposition::bucket_elimination::compute_decomposition;
//! use hypertree_decomposition::hypergraph::{GrowableHypergraph, Hypergraph};
//!
//! let mut g = Hypergraph::new();
//! let a = g.add_vertex();
//! let b = g.add_vertex();
//! let c = g.add_vertex();
//! g.add_edge(vec![a, b]).unwrap();
//! g.add_edge(vec![b, c]).unwrap();
//!
//! let decomposition = compute_decomposition(&g).unwrap();
//! assert!(decomposition.treewidth() <= 2);
//! ```

pub mod bucket_elimination;
pub mod decomposition;
pub mod error;
pub mod hyperedge;
pub mod hypergraph;
pub mod ids;
pub mod operations;
pub mod ordering;
pub mod verifier;

pub use error::{Error, Result};
