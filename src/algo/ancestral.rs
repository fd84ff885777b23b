/*!
# Shortest Ancestral Paths

An *ancestral path* between two sets of nodes `v` and `w` is a pair of directed
paths from some node of `v` and some node of `w` to a common node, the *ancestor*.
Its length is the sum of the lengths of both paths. A shortest ancestral path
(SAP) minimizes this sum.

The search runs one multi-source BFS from all of `v` and one from all of `w`
(see [`Traversal::bfs_with_distance_from`]) and merges both distance arrays in a
single scan, i.e. every query costs `O(n + m)`.

If several ancestors attain the minimal length, the one with the **smallest node
id** is reported, so results are deterministic.
*/

use log::trace;
use smallvec::SmallVec;

use super::*;
use crate::error::{Error, Result};

/// Common ancestor of two node sets together with the length of the ancestral path through it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AncestralPath {
    /// Node in which both paths meet
    pub ancestor: Node,
    /// Combined number of edges of both paths
    pub length: Distance,
}

/// Buffer for validated query nodes; most queries are made with few nodes
type QueryNodes = SmallVec<[Node; 4]>;

/// Shortest-ancestral-path queries on a borrowed directed graph.
///
/// The graph is never modified; any number of queries may be run on the same
/// instance and instances can be shared between threads if `G` can.
///
/// # Examples
/// ```
/// use wordnet_sap::{prelude::*, algo::*};
///
/// //   0
/// //  / \
/// // 1   2
/// // |
/// // 3
/// let g = HypernymGraph::from_edges(4, [(1, 0), (2, 0), (3, 1)]);
/// let sap = g.ancestral_paths();
///
/// let path = sap.least_common_ancestor_of(3, 2).unwrap().unwrap();
/// assert_eq!(path, AncestralPath { ancestor: 0, length: 3 });
///
/// assert_eq!(sap.length([3, 2], [1]).unwrap(), Some(1));
/// ```
pub struct ShortestAncestralPath<'a, G> {
    graph: &'a G,
}

impl<G> WithGraphRef<G> for ShortestAncestralPath<'_, G> {
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<'a, G> ShortestAncestralPath<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new query object on `graph`
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Returns for every node its distance to the closest node in `sources` or
    /// [`UNREACHED`] if no source reaches it.
    ///
    /// All sources form the first BFS layer together; an empty source set reaches nothing.
    ///
    /// # Errors
    /// [`Error::InvalidVertex`] if a source is not a node of the graph.
    pub fn shortest_path<S>(&self, sources: S) -> Result<Vec<Distance>>
    where
        S: IntoIterator<Item = Node>,
    {
        let sources = self.validated(sources)?;
        Ok(self.distances_from(&sources))
    }

    /// Returns an ancestor and the length of a shortest ancestral path between any node
    /// of `v` and any node of `w`, or `None` if both sets share no ancestor.
    ///
    /// Among several shortest ancestral paths, the one through the ancestor with the
    /// smallest id is returned.
    ///
    /// # Errors
    /// [`Error::InvalidVertex`] if a node of `v` or `w` is not a node of the graph.
    pub fn least_common_ancestor<V, W>(&self, v: V, w: W) -> Result<Option<AncestralPath>>
    where
        V: IntoIterator<Item = Node>,
        W: IntoIterator<Item = Node>,
    {
        let v = self.validated(v)?;
        let w = self.validated(w)?;

        let dist_v = self.distances_from(&v);
        let dist_w = self.distances_from(&w);

        // (length, ancestor) ordering breaks ties towards the smaller id
        let best = dist_v
            .iter()
            .zip(dist_w.iter())
            .enumerate()
            .filter_map(|(u, (&dv, &dw))| Some((reached(dv)? + reached(dw)?, u as Node)))
            .min()
            .map(|(length, ancestor)| AncestralPath { ancestor, length });

        trace!("SAP between {v:?} and {w:?}: {best:?}");
        Ok(best)
    }

    /// Length of a shortest ancestral path between `v` and `w`; `None` if there is none
    pub fn length<V, W>(&self, v: V, w: W) -> Result<Option<Distance>>
    where
        V: IntoIterator<Item = Node>,
        W: IntoIterator<Item = Node>,
    {
        Ok(self.least_common_ancestor(v, w)?.map(|p| p.length))
    }

    /// A common ancestor on a shortest ancestral path between `v` and `w`; `None` if there is none
    pub fn ancestor<V, W>(&self, v: V, w: W) -> Result<Option<Node>>
    where
        V: IntoIterator<Item = Node>,
        W: IntoIterator<Item = Node>,
    {
        Ok(self.least_common_ancestor(v, w)?.map(|p| p.ancestor))
    }

    /// [`ShortestAncestralPath::least_common_ancestor`] for two single nodes
    pub fn least_common_ancestor_of(&self, v: Node, w: Node) -> Result<Option<AncestralPath>> {
        self.least_common_ancestor([v], [w])
    }

    /// [`ShortestAncestralPath::length`] for two single nodes
    pub fn length_of(&self, v: Node, w: Node) -> Result<Option<Distance>> {
        self.length([v], [w])
    }

    /// [`ShortestAncestralPath::ancestor`] for two single nodes
    pub fn ancestor_of(&self, v: Node, w: Node) -> Result<Option<Node>> {
        self.ancestor([v], [w])
    }

    fn distances_from(&self, sources: &[Node]) -> Vec<Distance> {
        self.graph
            .bfs_with_distance_from(sources.iter().copied())
            .distances()
    }

    fn validated<S>(&self, nodes: S) -> Result<QueryNodes>
    where
        S: IntoIterator<Item = Node>,
    {
        let number_of_nodes = self.graph.number_of_nodes();
        nodes
            .into_iter()
            .map(|vertex| {
                if vertex < number_of_nodes {
                    Ok(vertex)
                } else {
                    Err(Error::InvalidVertex {
                        vertex,
                        number_of_nodes,
                    })
                }
            })
            .collect()
    }
}

/// Exposes [`ShortestAncestralPath`] queries directly on graphs
pub trait AncestralPaths: AdjacencyList + Sized {
    /// Returns a query object for shortest ancestral paths in this graph
    fn ancestral_paths(&self) -> ShortestAncestralPath<'_, Self> {
        ShortestAncestralPath::new(self)
    }
}

impl<G> AncestralPaths for G where G: AdjacencyList + Sized {}
