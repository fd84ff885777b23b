//! Validation of the single-root DAG property of hypernym graphs.
//!
//! A hypernym graph is well-formed iff exactly one node has no outgoing edge and
//! the graph is acyclic. Roots are read off the sinks, acyclicity is checked with one
//! Kahn elimination pass (see [`TopoSearch`]); both in `O(n + m)`.

use log::debug;

use super::*;
use crate::error::{Error, Result};

/// Checks whether a directed graph is a DAG with a single sink (root).
pub trait RootedDag: DirectedAdjacencyList + Sized {
    /// Returns the unique root of the graph.
    ///
    /// A second node without outgoing edges fails with [`Error::MultipleRoots`]
    /// reporting the two smallest such nodes. Otherwise all nodes are eliminated in
    /// topological order; nodes that can never be eliminated lie on or behind a cycle
    /// and fail with [`Error::Cycle`]. An empty graph has no root and fails with
    /// [`Error::InvalidArgument`].
    ///
    /// # Examples
    /// ```
    /// use wordnet_sap::{prelude::*, algo::*, error::Error};
    ///
    /// let g = HypernymGraph::from_edges(4, [(1, 0), (2, 0), (3, 1), (3, 2)]);
    /// assert_eq!(g.unique_root().unwrap(), 0);
    ///
    /// let g = HypernymGraph::from_edges(3, [(2, 0), (2, 1)]);
    /// assert!(matches!(g.unique_root(), Err(Error::MultipleRoots(0, 1))));
    ///
    /// let g = HypernymGraph::from_edges(3, [(0, 1), (1, 2), (2, 1)]);
    /// assert!(matches!(g.unique_root(), Err(Error::Cycle { unresolved: 2 })));
    /// ```
    fn unique_root(&self) -> Result<Node> {
        let n = self.number_of_nodes();
        if n == 0 {
            return Err(Error::invalid_argument("graph has no vertices"));
        }

        let mut sinks = self.sinks();
        let root = sinks.next();
        if let (Some(first), Some(second)) = (root, sinks.next()) {
            return Err(Error::MultipleRoots(first, second));
        }

        let eliminated = self.topo_search().count() as NumNodes;
        match root {
            Some(root) if eliminated == n => {
                debug!("Graph with {n} nodes is a rooted DAG with root {root}");
                Ok(root)
            }
            // a non-empty graph without sinks always has a cycle
            _ => Err(Error::Cycle {
                unresolved: n - eliminated,
            }),
        }
    }
}

impl<G> RootedDag for G where G: DirectedAdjacencyList + Sized {}
