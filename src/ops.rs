use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n` of all vertices.
    /// In contrast to self.vertices(), the range does not borrow self.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if `u` is a vertex of the graph, i.e. `u < n`
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    ///
    /// Note that for directed graphs, this should be equivalent to `out_neighbors_of`
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| self.edges_of(u))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    fn ordered_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u).sorted())
    }
}

macro_rules! propagate {
    ($out_fn:ident => $fn:ident($($arg:ident : $type:ty),*) -> $ret:ty) => {
        #[inline]
        fn $out_fn(&self, $($arg: $type),*) -> $ret {
            self.$fn($($arg),*)
        }
    };
}

/// Getters specific to directed graphs.
///
/// Only out-neighborhoods are required; in-degrees are derived by a single scan over all edges.
pub trait DirectedAdjacencyList: AdjacencyList {
    propagate!(out_neighbors_of => neighbors_of(u : Node) -> impl Iterator<Item = Node> + '_);
    propagate!(out_degree_of => degree_of(u : Node) -> NumNodes);

    /// Returns the in-degree of every vertex, computed in `O(n + m)`
    fn in_degrees(&self) -> Vec<NumNodes> {
        let mut in_degs: Vec<NumNodes> = vec![0; self.len()];
        for Edge(_, v) in self.edges() {
            in_degs[v as usize] += 1;
        }
        in_degs
    }

    /// Returns an iterator over all vertices without outgoing edges in ascending order.
    /// In a hypernym graph these are the candidates for the root.
    fn sinks(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.out_degree_of(u) == 0)
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborsSlice {
    /// Returns a slice-reference of the neighborhood of a given vertex
    fn as_neighbors_slice(&self, u: Node) -> &[Node];
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(!self.try_add_edge(u, v))
    }

    /// Adds the edge `(u, v)` to the graph.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
