use crate::graph::*;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use std::collections::BTreeSet;

/// A graph handed over to `petgraph`.
///
/// Node index `i` stands for `VertexId(i)`. Undirected graphs carry one
/// petgraph edge per unordered pair of vertices.
#[derive(Debug, Clone)]
pub enum PetgraphView {
    Directed(DiGraph<(), (), usize>),
    Undirected(UnGraph<(), (), usize>),
}

impl PetgraphView {
    pub fn node_count(&self) -> usize {
        match self {
            PetgraphView::Directed(g) => g.node_count(),
            PetgraphView::Undirected(g) => g.node_count(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            PetgraphView::Directed(g) => g.edge_count(),
            PetgraphView::Undirected(g) => g.edge_count(),
        }
    }
}

/// Exports a representation to `petgraph`.
pub trait ToPetgraph: Representation {
    fn to_petgraph(&self) -> PetgraphView {
        let n = self.vertex_size();
        if self.is_directed() {
            let mut g = DiGraph::<(), (), usize>::with_capacity(n, self.edge_size());
            for _ in 0..n {
                g.add_node(());
            }
            for e in self.iter_edges() {
                g.add_edge(node(&e.source), node(&e.sink), ());
            }
            PetgraphView::Directed(g)
        } else {
            let pairs: BTreeSet<(VertexId, VertexId)> = self
                .iter_edges()
                .map(|e| {
                    if e.source <= e.sink {
                        (e.source, e.sink)
                    } else {
                        (e.sink, e.source)
                    }
                })
                .collect();
            let mut g = UnGraph::<(), (), usize>::with_capacity(n, pairs.len());
            for _ in 0..n {
                g.add_node(());
            }
            for (a, b) in pairs {
                g.add_edge(node(&a), node(&b), ());
            }
            PetgraphView::Undirected(g)
        }
    }
}

impl<G: Representation> ToPetgraph for G {}

fn node(v: &VertexId) -> NodeIndex<usize> {
    NodeIndex::new(v.to_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::visit::EdgeRef;

    #[test]
    fn directed_export() {
        let g = EdgeListGraph::new(3, [(0, 1), (1, 2), (2, 0)], true).unwrap();
        let pg = match g.to_petgraph() {
            PetgraphView::Directed(pg) => pg,
            PetgraphView::Undirected(_) => panic!("expected a directed graph"),
        };
        assert_eq!(pg.node_count(), 3);
        let trial: BTreeSet<(usize, usize)> = pg
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        let oracle: BTreeSet<(usize, usize)> = [(0, 1), (1, 2), (2, 0)].into();
        assert_eq!(trial, oracle);
    }

    #[test]
    fn undirected_export_has_one_edge_per_pair() {
        let g = AdjacencyListGraph::new(4, [(0, 1), (2, 1), (1, 2)], false).unwrap();
        let view = g.to_petgraph();
        assert!(matches!(view, PetgraphView::Undirected(_)));
        assert_eq!(view.node_count(), 4);
        assert_eq!(view.edge_count(), 2);
    }

    #[test]
    fn isolated_vertices_survive() {
        let g = EdgeListGraph::new(5, Vec::<(usize, usize)>::new(), true).unwrap();
        let view = g.to_petgraph();
        assert_eq!(view.node_count(), 5);
        assert_eq!(view.edge_count(), 0);
    }
}
