use crate::graph::*;
use std::collections::BTreeSet;

/// The capability shared by every graph representation in this crate.
///
/// Each representation can list its vertices and edges and convert itself to
/// the others. Equality between representations is defined on edge sets, so
/// an edge-list graph and an adjacency-list graph holding the same relation
/// compare equal.
pub trait Representation {
    fn vertex_size(&self) -> usize;
    fn is_directed(&self) -> bool;

    /// Number of stored edges.
    /// Undirected graphs count both orientations of an edge.
    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    fn to_edge_list(&self) -> EdgeListGraph;
    fn to_adjacency_list(&self) -> AdjacencyListGraph;

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(vertex_range(self.vertex_size()))
    }

    fn edge_set(&self) -> BTreeSet<Edge> {
        self.iter_edges().collect()
    }

    /// Whether `self` and `other` describe the same graph.
    ///
    /// Directedness and vertex counts must match, and the edges must be equal
    /// as sets. Neither order nor duplicates matter.
    fn same_graph<G>(&self, other: &G) -> bool
    where
        G: Representation + ?Sized,
    {
        if self.is_directed() != other.is_directed() {
            return false;
        }
        if self.vertex_size() != other.vertex_size() {
            return false;
        }
        self.edge_set() == other.edge_set()
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
