/*!
# Directed Graph Representations

A directed graph is represented by parameterizing [`DirectedGraph`] with a
[`Neighborhood`] type, which controls how out-neighborhoods are stored.
In-neighborhoods are never stored: the only consumer of in-degrees is the
rooted-DAG validation, which derives them in a single `O(n + m)` scan.
*/

use crate::{
    repr::neighborhood::macros::{impl_common_graph_ops, impl_try_add_edge},
    testing::test_graph_ops,
};

use super::*;

/// A directed graph storing only **outgoing neighborhoods**.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
#[derive(Debug, Clone)]
pub struct DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    num_edges: NumEdges,
}

/// Directed graph using sparse adjacency arrays (`SmallVec<[Node; 2]>`).
pub type SparseAdjArray = DirectedGraph<SparseNeighborhood>;

/// Graph of synset ids with an edge from every synset to each of its hypernyms.
pub type HypernymGraph = SparseAdjArray;

impl_common_graph_ops!(DirectedGraph<OutNbs> => out_nbs);

impl<OutNbs: Neighborhood> DirectedAdjacencyList for DirectedGraph<OutNbs> {}

impl<OutNbs> AdjacencyTest for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_nbs[u as usize].has_neighbor(v)
    }
}

impl<OutNbs> GraphEdgeEditing for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn add_edge(&mut self, u: Node, v: Node) {
        self.out_nbs[u as usize].add_neighbor(v);
        self.num_edges += 1;
    }

    impl_try_add_edge!(self);
}

// ---------- Testing ----------

test_graph_ops!(
    test_sparse_adj_array,
    SparseAdjArray,
    (GraphNew, AdjacencyList, DirectedAdjacencyList, GraphEdgeEditing)
);
