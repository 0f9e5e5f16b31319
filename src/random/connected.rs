use crate::graph::*;
use crate::random::cycle_shuffle;
use crate::{GraphError, Result};
use ahash::RandomState;
use log::{debug, trace};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use std::collections::HashSet;

/// Generates random connected directed graphs.
///
/// A generated graph is a Hamiltonian path over a random permutation of its
/// vertices, plus `nedges` extra edges drawn uniformly from all the missing
/// ones. It holds exactly `nvertices - 1 + nedges` edges, with neither
/// self-loops nor duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomConnectedGraph {
    nvertices: usize,
    nedges: usize,
}

impl RandomConnectedGraph {
    /// Fails with [`GraphError::NoVertices`] if `nvertices` is zero, and with
    /// [`GraphError::TooManyEdges`] if `nedges` exceeds
    /// [`max_extra_edges`](Self::max_extra_edges).
    pub fn new(nvertices: usize, nedges: usize) -> Result<Self> {
        if nvertices == 0 {
            return Err(GraphError::NoVertices);
        }
        let max = Self::max_extra_edges(nvertices);
        if nedges > max {
            return Err(GraphError::TooManyEdges {
                nvertices,
                nedges,
                max,
            });
        }
        Ok(Self { nvertices, nedges })
    }

    /// All loop-free directed edges over `nvertices` vertices, minus the
    /// `nvertices - 1` used by the spanning path.
    pub fn max_extra_edges(nvertices: usize) -> usize {
        let all = nvertices.saturating_mul(nvertices.saturating_sub(1));
        all - nvertices.saturating_sub(1)
    }

    pub fn vertex_size(&self) -> usize {
        self.nvertices
    }

    pub fn extra_edge_size(&self) -> usize {
        self.nedges
    }

    pub fn generate<R>(&self, rng: &mut R) -> EdgeListGraph
    where
        R: Rng + ?Sized,
    {
        self.generate_with_path(rng).0
    }

    /// Same as [`generate`](Self::generate) using a [`SmallRng`] seeded with `seed`.
    pub fn generate_seeded(&self, seed: u64) -> EdgeListGraph {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    /// Generates a graph together with the vertex permutation whose
    /// consecutive pairs form its spanning path.
    pub fn generate_with_path<R>(&self, rng: &mut R) -> (EdgeListGraph, Vec<VertexId>)
    where
        R: Rng + ?Sized,
    {
        let n = self.nvertices;
        debug!(
            "generating a connected digraph of {} vertices and {} extra edges",
            n, self.nedges
        );

        let mut line: Vec<VertexId> = vertex_range(n).collect();
        cycle_shuffle(&mut line, rng);
        debug!("spanning path: {:?}", line);

        let mut edges: Vec<Edge> = Vec::with_capacity(n - 1 + self.nedges);
        let mut present: HashSet<Edge, RandomState> =
            HashSet::with_capacity_and_hasher(edges.capacity(), RandomState::new());
        for pair in line.windows(2) {
            let e = Edge::new(pair[0], pair[1]);
            present.insert(e);
            edges.push(e);
        }

        let mut remaining = self.nedges;
        if remaining > 0 {
            let mut candidates: Vec<Edge> = vertex_range(n)
                .flat_map(|source| vertex_range(n).map(move |sink| Edge::new(source, sink)))
                .filter(|e| !e.is_self_loop())
                .collect();
            debug_assert_eq!(candidates.len(), n * (n - 1));
            candidates.shuffle(rng);
            for e in candidates {
                if present.insert(e) {
                    trace!("extra edge {:?}", e);
                    edges.push(e);
                    remaining -= 1;
                    if remaining == 0 {
                        break;
                    }
                }
            }
        }

        let graph = EdgeListGraph::from_checked(n, edges, true);
        (graph, line)
    }
}

/// Generates a random connected directed graph of `nvertices` vertices and
/// `nedges` edges beyond its spanning path.
///
/// See [`RandomConnectedGraph`].
pub fn random_connected<R>(nvertices: usize, nedges: usize, rng: &mut R) -> Result<EdgeListGraph>
where
    R: Rng + ?Sized,
{
    Ok(RandomConnectedGraph::new(nvertices, nedges)?.generate(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    fn params(n: u8, extra: u16) -> RandomConnectedGraph {
        let n = n as usize % 19 + 1;
        let extra = extra as usize % (RandomConnectedGraph::max_extra_edges(n) + 1);
        RandomConnectedGraph::new(n, extra).unwrap()
    }

    #[test]
    fn max_extra_edges() {
        assert_eq!(RandomConnectedGraph::max_extra_edges(1), 0);
        assert_eq!(RandomConnectedGraph::max_extra_edges(2), 1);
        assert_eq!(RandomConnectedGraph::max_extra_edges(4), 9);
    }

    #[test]
    fn preconditions() {
        assert_eq!(
            RandomConnectedGraph::new(0, 0).unwrap_err(),
            GraphError::NoVertices
        );
        let err = RandomConnectedGraph::new(4, 10).unwrap_err();
        assert_eq!(
            err,
            GraphError::TooManyEdges {
                nvertices: 4,
                nedges: 10,
                max: 9
            }
        );
        assert!(err.is_precondition_violation());
        assert!(RandomConnectedGraph::new(4, 9).is_ok());
        assert!(RandomConnectedGraph::new(1, 1).is_err());
    }

    #[test]
    fn single_vertex() {
        let g = RandomConnectedGraph::new(1, 0).unwrap().generate_seeded(3);
        assert_eq!(g.vertex_size(), 1);
        assert_eq!(g.edge_size(), 0);
        assert!(g.is_directed());
    }

    #[test]
    fn four_vertices_no_extra_edges() {
        let mut rng = SmallRng::seed_from_u64(0xbad5eed);
        let (g, line) = RandomConnectedGraph::new(4, 0)
            .unwrap()
            .generate_with_path(&mut rng);
        assert_eq!(g.edge_size(), 3);
        let vertices: BTreeSet<usize> = line.iter().map(|v| v.to_raw()).collect();
        assert_eq!(vertices, (0..4).collect::<BTreeSet<_>>());
        let path: BTreeSet<Edge> = line.windows(2).map(|p| Edge::new(p[0], p[1])).collect();
        assert_eq!(g.edge_set(), path);
        assert_eq!(g.to_adjacency_list().to_edge_list().edge_set(), path);
    }

    #[test]
    fn complete_digraph() {
        let g = RandomConnectedGraph::new(5, 16).unwrap().generate_seeded(1);
        assert_eq!(g.edge_size(), 20);
        for a in 0..5 {
            for b in 0..5 {
                assert_eq!(g.contains_edge(&VertexId(a), &VertexId(b)), a != b);
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let gen = RandomConnectedGraph::new(12, 30).unwrap();
        let a = gen.generate_seeded(7);
        let b = gen.generate_seeded(7);
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn free_function_checks_preconditions() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(random_connected(3, 5, &mut rng).is_err());
        let g = random_connected(3, 4, &mut rng).unwrap();
        assert_eq!(g.edge_size(), 6);
    }

    #[quickcheck]
    fn edge_count_without_loops_or_duplicates(seed: u64, n: u8, extra: u16) {
        let gen = params(n, extra);
        let g = gen.generate_seeded(seed);
        assert_eq!(g.edge_size(), gen.vertex_size() - 1 + gen.extra_edge_size());
        assert_eq!(g.edge_set().len(), g.edge_size());
        assert!(g.edges().iter().all(|e| !e.is_self_loop()));
    }

    #[quickcheck]
    fn spanning_path_visits_every_vertex(seed: u64, n: u8, extra: u16) {
        let gen = params(n, extra);
        let mut rng = SmallRng::seed_from_u64(seed);
        let (g, line) = gen.generate_with_path(&mut rng);
        let mut sorted = line.clone();
        sorted.sort();
        assert_eq!(sorted, vertex_range(gen.vertex_size()).collect::<Vec<_>>());
        for pair in line.windows(2) {
            assert!(g.contains_edge(&pair[0], &pair[1]));
        }
    }

    #[quickcheck]
    fn weakly_connected(seed: u64, n: u8, extra: u16) {
        let g = params(n, extra).generate_seeded(seed);
        let components = match g.to_petgraph() {
            PetgraphView::Directed(pg) => petgraph::algo::connected_components(&pg),
            PetgraphView::Undirected(_) => unreachable!(),
        };
        assert_eq!(components, 1);
    }
}
