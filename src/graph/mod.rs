//! Edge-list and adjacency-list graph representations.
//!
//! Vertices are lightweight `VertexId`'s in `[0, nvertices)`; there are no
//! vertex objects. Both [`EdgeListGraph`] and [`AdjacencyListGraph`] may be
//! directed or undirected. Undirected graphs are stored as pairs of directed
//! edges in both representations.
//!
//! The two representations convert into each other through the
//! [`Representation`] trait, and compare equal whenever they hold the same
//! set of edges over the same number of vertices with the same directedness.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod edge_list;
pub use self::edge_list::*;
mod adjacency_list;
pub use self::adjacency_list::*;
mod petgraph_export;
pub use self::petgraph_export::*;

#[cfg(test)]
pub use self::tests::*;
