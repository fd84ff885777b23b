use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// In a hypernym graph, `Edge(u, v)` states that `v` is a hypernym of `u`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_and_format() {
        assert_eq!(Edge::from((1, 2)), Edge(1, 2));
        assert_eq!(Edge::from(&(3, 4)), Edge(3, 4));
        assert_eq!(Edge::from(&Edge(0, 7)), Edge(0, 7));
        assert_eq!(format!("{:?}", Edge(5, 0)), "(5,0)");
    }
}
