use crate::graph::*;
use crate::Result;
use ahash::RandomState;
use std::collections::HashSet;

/// A graph stored as, for each vertex, the list of vertices it has edges to.
///
/// For directed graphs each list keeps the order in which edges were given,
/// duplicates included. For undirected graphs each list holds every neighbor
/// once, in an unspecified order, and `a` lists `b` iff `b` lists `a`.
#[derive(Clone)]
pub struct AdjacencyListGraph {
    directed: bool,
    neighbors: Vec<Vec<VertexId>>,
}

impl AdjacencyListGraph {
    /// Builds an adjacency-list graph over `nvertices` vertices.
    ///
    /// Fails with [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange)
    /// if an endpoint is not in `[0, nvertices)`.
    pub fn new<I>(nvertices: usize, edges: I, directed: bool) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let edges = edges
            .into_iter()
            .map(|e| {
                let e: Edge = e.into();
                e.check_within(nvertices).map(|_| e)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_checked(nvertices, &edges, directed))
    }

    pub(crate) fn from_checked(nvertices: usize, edges: &[Edge], directed: bool) -> Self {
        let neighbors = if directed {
            let mut neighbors = vec![vec![]; nvertices];
            for e in edges {
                neighbors[e.source.to_raw()].push(e.sink);
            }
            neighbors
        } else {
            let mut neighbors: Vec<HashSet<VertexId, RandomState>> = (0..nvertices)
                .map(|_| HashSet::with_hasher(RandomState::new()))
                .collect();
            for e in edges {
                neighbors[e.source.to_raw()].insert(e.sink);
                neighbors[e.sink.to_raw()].insert(e.source);
            }
            neighbors
                .into_iter()
                .map(|xs| xs.into_iter().collect())
                .collect()
        };
        Self {
            directed,
            neighbors,
        }
    }

    /// Vertices `v` has an edge to.
    ///
    /// # Panics
    ///
    /// If `v` is not a vertex of the graph.
    pub fn neighbors(&self, v: &VertexId) -> &[VertexId] {
        &self.neighbors[v.to_raw()]
    }

    pub fn iter_neighbor_lists(&self) -> impl Iterator<Item = (VertexId, &[VertexId])> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .map(|(v, xs)| (VertexId::new(v), xs.as_slice()))
    }
}

impl Representation for AdjacencyListGraph {
    fn vertex_size(&self) -> usize {
        self.neighbors.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn edge_size(&self) -> usize {
        self.neighbors.iter().map(|xs| xs.len()).sum()
    }

    /// Edges in ascending order of source, then in stored neighbor order.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self
            .iter_neighbor_lists()
            .flat_map(|(source, sinks)| sinks.iter().map(move |sink| Edge::new(source, *sink)));
        Box::new(it)
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.neighbors(v).iter().copied())
    }

    fn to_edge_list(&self) -> EdgeListGraph {
        let edges: Vec<Edge> = self.iter_edges().collect();
        EdgeListGraph::from_checked(self.vertex_size(), edges, self.directed)
    }

    fn to_adjacency_list(&self) -> AdjacencyListGraph {
        self.clone()
    }
}

impl std::fmt::Debug for AdjacencyListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lists: Vec<Vec<usize>> = self
            .neighbors
            .iter()
            .map(|xs| xs.iter().map(|v| v.to_raw()).collect())
            .collect();
        write!(
            f,
            "AdjacencyListGraph({}, {:?}, directed={})",
            self.vertex_size(),
            lists,
            self.directed
        )
    }
}

// Both sides go through their edge-list form; the comparison result is what
// the caller gets back.
impl PartialEq for AdjacencyListGraph {
    fn eq(&self, other: &Self) -> bool {
        self.to_edge_list() == *other
    }
}

impl Eq for AdjacencyListGraph {}

impl PartialEq<EdgeListGraph> for AdjacencyListGraph {
    fn eq(&self, other: &EdgeListGraph) -> bool {
        self.to_edge_list() == *other
    }
}
