use thiserror::Error;

/// Errors raised while building, converting or generating graphs.
///
/// All of them are programmer errors: nothing is retried and nothing is
/// silently corrected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The undirected closure was requested from a graph that is already undirected.
    #[error("the graph is already undirected")]
    AlreadyUndirected,
    /// More extra edges were requested than a connected digraph over the vertices can hold.
    #[error("{nedges} extra edges requested, but at most {max} fit in a connected digraph of {nvertices} vertices")]
    TooManyEdges {
        nvertices: usize,
        nedges: usize,
        max: usize,
    },
    /// A random connected graph needs at least one vertex.
    #[error("a random connected graph needs at least one vertex")]
    NoVertices,
    /// An edge endpoint lies outside `[0, nvertices)`.
    #[error("vertex {vertex} is out of range for a graph of {nvertices} vertices")]
    VertexOutOfRange { vertex: usize, nvertices: usize },
}

impl GraphError {
    /// Whether the error is a violated precondition of the called operation,
    /// as opposed to malformed input data.
    pub fn is_precondition_violation(&self) -> bool {
        !matches!(self, GraphError::VertexOutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
