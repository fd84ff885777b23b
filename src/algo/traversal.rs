/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- A generic breadth-first traversal iterator that can start from a single node or
  from a whole set of nodes at once (all of them forming layer 0).
- Abstractions (`SequencedItem`, `TraversalDistances`) that turn traversals
  into distance arrays.
- Topological ordering for directed acyclic graphs (Kahn's algorithm).
- A high-level `Traversal` trait that exposes these directly as methods on graphs.

All traversals are iterative; no recursion depth depends on the size of the graph.
*/

use super::*;
use std::collections::VecDeque;

/// Trait for algorithms that borrow the graph they operate on
pub trait WithGraphRef<G> {
    /// Returns the graph being processed.
    fn graph_ref(&self) -> &G;
}

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`Node`]: stores only the node.
/// - [`LayeredNode`]: stores the node together with its BFS layer.
pub trait SequencedItem: Clone + Copy {
    /// Constructs the item of a start node.
    fn origin(item: Node) -> Self;

    /// Constructs the item of `item` when discovered from `self`.
    fn successor(&self, item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;
}

impl SequencedItem for Node {
    fn origin(item: Node) -> Self {
        item
    }
    fn successor(&self, item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
}

/// A node together with the number of edges between it and the closest start node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayeredNode {
    pub node: Node,
    pub distance: Distance,
}

impl SequencedItem for LayeredNode {
    fn origin(item: Node) -> Self {
        Self {
            node: item,
            distance: 0,
        }
    }

    fn successor(&self, item: Node) -> Self {
        Self {
            node: item,
            distance: self.distance + 1,
        }
    }

    fn item(&self) -> Node {
        self.node
    }
}

/// Breadth-first traversal iterator.
///
/// Maintains an explicit queue of nodes to visit and a visited-marker per node.
/// Every node is yielded at most once, in non-decreasing distance from the set of
/// start nodes.
pub struct TraversalSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    num_visited: usize,
    queue: VecDeque<I>,
}

/// A BFS traversal iterator over the graph yielding nodes.
pub type BFS<'a, G> = TraversalSearch<'a, G, Node>;

/// A BFS traversal iterator yielding each node together with its distance.
pub type BFSWithDistance<'a, G> = TraversalSearch<'a, G, LayeredNode>;

impl<G, I> WithGraphRef<G> for TraversalSearch<'_, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, I> Iterator for TraversalSearch<'_, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(popped.item()) {
            if !self.visited.set_bit(v) {
                self.num_visited += 1;
                self.queue.push_back(popped.successor(v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.queue.len() + self.graph.len() - self.num_visited),
        )
    }
}

impl<'a, G, I> TraversalSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        Self::new_multi(graph, [start])
    }

    /// Creates a new traversal iterator whose first layer consists of all `starts`.
    /// Repeated start nodes are only visited once.
    /// ** Panics if any start node is `>= n` **
    pub fn new_multi<S>(graph: &'a G, starts: S) -> Self
    where
        S: IntoIterator<Item = Node>,
    {
        let mut search = Self {
            graph,
            visited: NodeBitSet::new(graph.number_of_nodes()),
            num_visited: 0,
            queue: VecDeque::new(),
        };

        for u in starts {
            if !search.visited.set_bit(u) {
                search.num_visited += 1;
                search.queue.push_back(I::origin(u));
            }
        }

        search
    }
}

/// Extension trait for traversal iterators that return [`LayeredNode`]s.
pub trait TraversalDistances<'a, G>: WithGraphRef<G> + Iterator<Item = LayeredNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and records the distance of each visited node into `distances`.
    /// Unvisited entries remain unchanged.
    ///
    /// # Requirements
    /// - `distances.len()` must be at least `graph.len()`.
    fn distances_into(&mut self, distances: &mut [Distance]) {
        for LayeredNode { node, distance } in self.by_ref() {
            distances[node as usize] = distance;
        }
    }

    /// Constructs a distance array of size `graph.len()` where nodes that are never
    /// reached keep the value [`UNREACHED`].
    ///
    /// # Examples
    /// ```
    /// use wordnet_sap::{prelude::*, algo::*};
    ///
    /// let g = HypernymGraph::from_edges(4, [(0, 1), (1, 2), (3, 2)]);
    ///
    /// let distances = g.bfs_with_distance_from([0, 3]).distances();
    /// assert_eq!(distances, vec![0, 1, 1, 0]);
    ///
    /// let distances = g.bfs_with_distance(1).distances();
    /// assert_eq!(distances, vec![UNREACHED, 0, 1, UNREACHED]);
    /// ```
    fn distances(&mut self) -> Vec<Distance> {
        let mut distances = vec![UNREACHED; self.graph_ref().len()];
        self.distances_into(&mut distances);
        distances
    }
}

impl<'a, G> TraversalDistances<'a, G> for TraversalSearch<'a, G, LayeredNode> where
    G: AdjacencyList
{
}

/// Iterator implementing topological ordering over a directed acyclic graph (DAG).
///
/// Uses a variant of Kahn's algorithm:
/// - Initializes with all nodes of in-degree 0.
/// - Repeatedly removes a node, decreasing in-degrees of its successors,
///   and pushes new nodes of in-degree 0.
/// - Stops once all nodes are output or a cycle is detected.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    stack: Vec<Node>,
}

impl<G> WithGraphRef<G> for TopoSearch<'_, G>
where
    G: DirectedAdjacencyList,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Node;

    /// Returns the next node in topological order, if available.
    ///
    /// - Each returned node is guaranteed to appear after all its predecessors.
    /// - If the graph has a cycle, iteration will terminate early without
    ///   covering all nodes.
    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.out_neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.stack.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    /// Constructs a new topological search on the given directed graph,
    /// initializing in-degree counts and collecting the initial set of
    /// zero in-degree nodes.
    fn new(graph: &'a G) -> Self {
        let in_degs = graph.in_degrees();

        let stack: Vec<Node> = in_degs
            .iter()
            .enumerate()
            .filter_map(|(i, d)| if *d == 0 { Some(i as Node) } else { None })
            .collect();

        Self {
            graph,
            in_degs,
            stack,
        }
    }
}

/// Provides convenient traversal methods (BFS, topological order, etc.)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wordnet_sap::{prelude::*, algo::*};
    ///
    /// let g = HypernymGraph::from_edges(3, [(0, 1), (2, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the distance of every node.
    fn bfs_with_distance(&self, start: Node) -> BFSWithDistance<'_, Self> {
        BFSWithDistance::new(self, start)
    }

    /// Returns a BFS iterator that treats all `starts` as a single first layer
    /// (each at distance 0) and yields the distance of every node to the closest start.
    ///
    /// # Examples
    /// ```
    /// use wordnet_sap::{prelude::*, algo::*};
    ///
    /// let g = HypernymGraph::from_edges(4, [(0, 2), (1, 2), (2, 3)]);
    ///
    /// let layers: Vec<_> = g
    ///     .bfs_with_distance_from([0, 1])
    ///     .map(|x| (x.node, x.distance))
    ///     .collect();
    /// assert_eq!(layers, vec![(0, 0), (1, 0), (2, 1), (3, 2)]);
    /// ```
    fn bfs_with_distance_from<S>(&self, starts: S) -> BFSWithDistance<'_, Self>
    where
        S: IntoIterator<Item = Node>,
    {
        BFSWithDistance::new_multi(self, starts)
    }

    /// Returns an iterator yielding nodes in a valid **topological order**.
    ///
    /// - Only available for directed graphs.
    /// - Terminates early if the graph contains a cycle.
    ///
    /// # Examples
    /// ```
    /// use wordnet_sap::{prelude::*, algo::*};
    ///
    /// let g = HypernymGraph::from_edges(3, [(0, 1), (1, 2)]);
    /// let order: Vec<_> = g.topo_search().collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn topo_search(&self) -> TopoSearch<'_, Self>
    where
        Self: DirectedAdjacencyList,
    {
        TopoSearch::new(self)
    }

    /// Returns `true` if the directed graph is **acyclic**.
    ///
    /// Implementation: runs a topological search and checks whether
    /// all nodes were output.
    ///
    /// # Examples
    /// ```
    /// use wordnet_sap::{prelude::*, algo::*};
    ///
    /// let g = HypernymGraph::from_edges(3, [(0, 1), (1, 2)]);
    /// assert!(g.is_acyclic());
    /// ```
    fn is_acyclic(&self) -> bool
    where
        Self: DirectedAdjacencyList,
    {
        self.topo_search().count() == self.len()
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
