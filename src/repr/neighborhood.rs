use std::{iter::Copied, slice::Iter};

use smallvec::{Array, SmallVec};

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `u` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// This might lead to Multi-Edges
    fn add_neighbor(&mut self, u: Node);
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborhoodSlice: Neighborhood {
    /// Returns a slice-reference of the neighborhood of a given vertex
    fn as_slice(&self) -> &[Node];
}

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident<$generic:ident> => $nbs:ident) => {
            impl<$generic: Neighborhood> GraphNodeOrder for $struct<$generic> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl<$generic: Neighborhood> GraphEdgeOrder for $struct<$generic> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<$generic: Neighborhood> AdjacencyList for $struct<$generic> {
                fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                    self.$nbs[u as usize].neighbors()
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$nbs[u as usize].num_of_neighbors()
                }
            }

            impl<$generic: Neighborhood> GraphNew for $struct<$generic> {
                fn new(n: NumNodes) -> Self {
                    Self {
                        num_edges: 0,
                        $nbs: vec![$generic::new(n); n as usize],
                    }
                }
            }

            impl<$generic: NeighborhoodSlice> NeighborsSlice for $struct<$generic> {
                fn as_neighbors_slice(&self, u: Node) -> &[Node] {
                    self.$nbs[u as usize].as_slice()
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;

    macro_rules! impl_try_add_edge {
        ($self:ident) => {
            fn try_add_edge(&mut $self, u: Node, v: Node) -> bool {
                if $self.has_edge(u, v) {
                    true
                } else {
                    $self.add_edge(u, v);
                    false
                }
            }
        };
    }

    pub(crate) use impl_try_add_edge;
}

/// Neighborhood stored in a `SmallVec<[Node; N]>`.
/// Synsets rarely have more than two hypernyms, so the default keeps them inline.
#[derive(Debug, Default, Clone)]
pub struct SparseNeighborhood<const N: usize = 2>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }
}

impl<const N: usize> NeighborhoodSlice for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<N: NeighborhoodSlice>() {
        let mut nbs = N::new(10);
        assert_eq!(nbs.num_of_neighbors(), 0);
        assert!(!nbs.try_add_neighbor(4));
        assert!(!nbs.try_add_neighbor(7));
        assert!(nbs.try_add_neighbor(4));
        assert!(nbs.has_neighbor(7));
        assert!(!nbs.has_neighbor(5));
        assert_eq!(nbs.num_of_neighbors(), 2);
        assert_eq!(nbs.as_slice(), &[4, 7]);
    }

    #[test]
    fn sparse_neighborhood() {
        exercise::<SparseNeighborhood>();
        exercise::<SparseNeighborhood<1>>();
    }
}
