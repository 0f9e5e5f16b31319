//! Interconvertible graph representations.
//!
//! # Representations
//!
//! A graph over `nvertices` vertices, labeled `0..nvertices`, may be stored as
//! an [`EdgeListGraph`](graph::EdgeListGraph), an explicit collection of
//! `(source, sink)` pairs, or as an
//! [`AdjacencyListGraph`](graph::AdjacencyListGraph), one neighbor list per
//! vertex. Either may be directed or undirected; undirected graphs are stored
//! as pairs of directed edges.
//!
//! Conversions between the two never lose an edge, and both representations
//! compare equal whenever their vertex counts, directedness and edge sets
//! match.
//!
//! ```
//! use graphrep::graph::*;
//!
//! let el = EdgeListGraph::new(3, [(0, 1), (1, 2)], true)?;
//! let al = el.to_adjacency_list();
//! assert_eq!(al.neighbors(&VertexId(0)), &[VertexId(1)]);
//! assert_eq!(al.to_edge_list(), el);
//! # Ok::<(), graphrep::GraphError>(())
//! ```
//!
//! # Random graphs
//!
//! [`RandomConnectedGraph`](random::RandomConnectedGraph) generates random
//! connected directed graphs from an explicit random source, for exercising
//! the conversions.

mod error;
pub use self::error::*;
pub mod graph;
pub mod random;
