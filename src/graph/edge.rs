use super::VertexId;
use crate::{GraphError, Result};

/// A directed edge from `source` to `sink`.
///
/// Undirected graphs store both orientations of every edge.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
}

impl Edge {
    pub fn new(source: VertexId, sink: VertexId) -> Self {
        Self { source, sink }
    }

    /// The same edge in the opposite orientation.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.sink,
            sink: self.source,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.sink
    }

    pub(crate) fn check_within(&self, nvertices: usize) -> Result<()> {
        for v in [self.source, self.sink] {
            if v.to_raw() >= nvertices {
                return Err(GraphError::VertexOutOfRange {
                    vertex: v.to_raw(),
                    nvertices,
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.source.to_raw(), self.sink.to_raw())
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, sink): (usize, usize)) -> Self {
        Self::new(VertexId::new(source), VertexId::new(sink))
    }
}

impl From<Edge> for (usize, usize) {
    fn from(e: Edge) -> Self {
        (e.source.to_raw(), e.sink.to_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_checked() {
        assert_eq!(Edge::from((0, 2)).check_within(3), Ok(()));
        assert_eq!(
            Edge::from((1, 3)).check_within(3),
            Err(GraphError::VertexOutOfRange {
                vertex: 3,
                nvertices: 3
            })
        );
        assert_eq!(
            Edge::from((7, 0)).check_within(3),
            Err(GraphError::VertexOutOfRange {
                vertex: 7,
                nvertices: 3
            })
        );
    }

    #[test]
    fn debug_is_a_pair() {
        assert_eq!(format!("{:?}", Edge::from((4, 1))), "(4, 1)");
        assert_eq!(format!("{:?}", Edge::from((4, 1)).reversed()), "(1, 4)");
    }
}
