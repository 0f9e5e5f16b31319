/// ID for vertices, which are essentially `usize` in `[0, nvertices)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// Iterates `VertexId(0)..VertexId(nvertices)` in ascending order.
pub fn vertex_range(nvertices: usize) -> impl Iterator<Item = VertexId> {
    (0..nvertices).map(VertexId::new)
}
