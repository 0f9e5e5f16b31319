use crate::graph::*;
use crate::{GraphError, Result};
use ahash::RandomState;
use log::trace;
use std::collections::HashSet;

/// A graph stored as an explicit collection of `(source, sink)` pairs.
///
/// Directed graphs keep their edges exactly as given, duplicates included.
/// Undirected graphs keep the symmetric closure of the given edges: for every
/// `(a, b)` the pair `(b, a)` is present too, each at most once and in no
/// particular order.
///
/// | Operation            | Complexity          |
/// | -------------------- | ------------------- |
/// | `new`                | $O(\|E\|)$          |
/// | `to_undirected`      | $O(\|E\|)$          |
/// | `to_adjacency_list`  | $O(\|V\| + \|E\|)$  |
/// | `contains_edge`      | $O(\|E\|)$          |
/// | `out_neighbors`      | $O(\|E\|)$ to exhaust |
#[derive(Clone)]
pub struct EdgeListGraph {
    nvertices: usize,
    directed: bool,
    edges: Vec<Edge>,
}

impl EdgeListGraph {
    /// Builds an edge-list graph over `nvertices` vertices.
    ///
    /// Fails with [`GraphError::VertexOutOfRange`] if an endpoint is not in
    /// `[0, nvertices)`.
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
        Ok(Self::from_checked(nvertices, edges, directed))
    }

    pub(crate) fn from_checked(nvertices: usize, edges: Vec<Edge>, directed: bool) -> Self {
        let edges = if directed {
            edges
        } else {
            let closure: HashSet<Edge, RandomState> = edges
                .iter()
                .flat_map(|e| [*e, e.reversed()])
                .collect();
            closure.into_iter().collect()
        };
        Self {
            nvertices,
            directed,
            edges,
        }
    }

    /// Returns the undirected version of this directed graph.
    ///
    /// `self` is left untouched. Fails with [`GraphError::AlreadyUndirected`]
    /// if `self` is undirected already.
    pub fn to_undirected(&self) -> Result<Self> {
        if !self.directed {
            return Err(GraphError::AlreadyUndirected);
        }
        trace!(
            "taking the symmetric closure of {} edges over {} vertices",
            self.edges.len(),
            self.nvertices
        );
        Ok(Self::from_checked(self.nvertices, self.edges.clone(), false))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == *source && e.sink == *sink)
    }
}

impl Representation for EdgeListGraph {
    fn vertex_size(&self) -> usize {
        self.nvertices
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let v = *v;
        let it = self
            .edges
            .iter()
            .filter(move |e| e.source == v)
            .map(|e| e.sink);
        Box::new(it)
    }

    fn to_edge_list(&self) -> EdgeListGraph {
        self.clone()
    }

    fn to_adjacency_list(&self) -> AdjacencyListGraph {
        AdjacencyListGraph::from_checked(self.nvertices, &self.edges, self.directed)
    }
}

impl std::fmt::Debug for EdgeListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EdgeListGraph({}, {:?}, directed={})",
            self.nvertices, self.edges, self.directed
        )
    }
}

impl PartialEq for EdgeListGraph {
    fn eq(&self, other: &Self) -> bool {
        self.same_graph(other)
    }
}

impl Eq for EdgeListGraph {}

impl PartialEq<AdjacencyListGraph> for EdgeListGraph {
    fn eq(&self, other: &AdjacencyListGraph) -> bool {
        self.same_graph(&other.to_edge_list())
    }
}
