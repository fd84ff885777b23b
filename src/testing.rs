//! Test scaffolding shared by the unit tests of this crate:
//! - `test_graph_ops!` generates the conformance tests every graph representation has to pass,
//! - random rooted DAGs resembling hypernym hierarchies,
//! - naive reference implementations to cross-check the search algorithms against.

/// Every graph should implement `GraphNodeOrder` and `GraphEdgeOrder`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{Edge, NumEdges, NumNodes, ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a sorted list of at most `m_ub` distinct random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    Edge(u, v)
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_empty(), n == 0);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let graph = <$graph>::from_edges(n, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(edges, graph.ordered_edges().collect_vec());

                        for u in 0..n {
                            let expected = edges.iter().filter(|e| e.0 == u).map(|e| e.1).collect_vec();
                            assert_eq!(graph.neighbors_of(u).sorted().collect_vec(), expected);
                            assert_eq!(graph.degree_of(u), expected.len() as NumNodes);
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n / 2, n * 2, n * 5] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let graph = <$graph>::from_edges(n, edges.iter());

                        let in_degs = graph.in_degrees();
                        for u in 0..n {
                            let expected = edges.iter().filter(|e| e.1 == u).count();
                            assert_eq!(in_degs[u as usize], expected as NumNodes);
                            assert_eq!(graph.out_degree_of(u), graph.degree_of(u));
                        }

                        let sinks = graph.sinks().collect_vec();
                        let expected = (0..n).filter(|&u| edges.iter().all(|e| e.0 != u)).collect_vec();
                        assert_eq!(sinks, expected);
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let mut graph = <$graph>::new(n);
                        let mut reference = std::collections::BTreeSet::new();

                        for _ in 0..m_ub {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);
                            let was_present = !reference.insert(Edge(u, v));
                            assert_eq!(graph.try_add_edge(u, v), was_present);
                            assert!(graph.has_edge(u, v));
                        }

                        assert_eq!(graph.number_of_edges(), reference.len() as NumEdges);
                        assert_eq!(graph.ordered_edges().collect_vec(), reference.iter().copied().collect_vec());
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

#[cfg(test)]
pub(crate) use helpers::*;

#[cfg(test)]
mod helpers {
    use std::collections::VecDeque;

    use itertools::Itertools;
    use rand::{Rng, seq::SliceRandom};

    use crate::prelude::*;

    /// Synsets of a small hierarchy:
    /// ```text
    ///          A (0)
    ///        /      \
    ///   B C (1)     D (2)
    ///      |         |
    ///    E (3)     G (5)
    ///      |
    ///    F (4)
    /// ```
    pub(crate) const SMALL_SYNSETS: &str = "\
0,A,the root
1,B C,two nouns sharing one sense
2,D,a child of the root
3,E,below B and C
4,F,the deepest synset
5,G,below D
";

    pub(crate) const SMALL_HYPERNYMS: &str = "\
1,0
2,0
3,1
4,3
5,2
";

    /// Digraph with 13 vertices and two components, `1 -> 0`, `2 -> 0`, ... in edge-list form.
    pub(crate) fn two_component_digraph() -> HypernymGraph {
        HypernymGraph::from_edges(
            13,
            [
                (7, 3),
                (8, 3),
                (3, 1),
                (4, 1),
                (5, 1),
                (9, 5),
                (10, 5),
                (11, 10),
                (12, 10),
                (1, 0),
                (2, 0),
            ],
        )
    }

    /// Generates a random DAG on `n > 0` nodes with exactly one sink.
    ///
    /// Nodes are placed in a random order; the first node is the root and every later node
    /// receives one hypernym among its predecessors in that order plus further ones with
    /// probability `p_extra` each (at most `max_extra`).
    pub(crate) fn random_rooted_dag<R: Rng>(
        rng: &mut R,
        n: NumNodes,
        p_extra: f64,
        max_extra: usize,
    ) -> (HypernymGraph, Node) {
        assert!(n > 0);

        let mut order = (0..n).collect_vec();
        order.shuffle(rng);

        let mut graph = HypernymGraph::new(n);
        for i in 1..order.len() {
            let u = order[i];
            graph.add_edge(u, order[rng.random_range(0..i)]);

            for _ in 0..max_extra {
                if rng.random_bool(p_extra) {
                    graph.try_add_edge(u, order[rng.random_range(0..i)]);
                }
            }
        }

        (graph, order[0])
    }

    /// Plain single-source BFS used as reference; returns `None` for unreachable nodes.
    pub(crate) fn naive_distances<G: AdjacencyList>(graph: &G, source: Node) -> Vec<Option<Distance>> {
        let mut dist: Vec<Option<Distance>> = vec![None; graph.len()];
        let mut queue = VecDeque::from([source]);
        dist[source as usize] = Some(0);

        while let Some(u) = queue.pop_front() {
            let d = dist[u as usize].unwrap();
            for v in graph.neighbors_of(u) {
                if dist[v as usize].is_none() {
                    dist[v as usize] = Some(d + 1);
                    queue.push_back(v);
                }
            }
        }

        dist
    }

    /// Minimum over independent single-source searches
    pub(crate) fn naive_multi_distances<G: AdjacencyList>(graph: &G, sources: &[Node]) -> Vec<Option<Distance>> {
        let mut dist: Vec<Option<Distance>> = vec![None; graph.len()];
        for &s in sources {
            for (u, d) in naive_distances(graph, s).into_iter().enumerate() {
                dist[u] = match (dist[u], d) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
            }
        }
        dist
    }

    /// Length of a shortest ancestral path computed by brute force
    pub(crate) fn naive_sap_length<G: AdjacencyList>(graph: &G, v: &[Node], w: &[Node]) -> Option<Distance> {
        let dv = naive_multi_distances(graph, v);
        let dw = naive_multi_distances(graph, w);

        dv.iter()
            .zip(dw.iter())
            .filter_map(|(a, b)| Some((*a)? + (*b)?))
            .min()
    }
}
