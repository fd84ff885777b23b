/*!
# Node Representation

We choose `Node = u32` as WordNet-scale hierarchies stay far below `2^32` synsets.
Node `i` is the synset with id `i`; ids are dense and start at `0`.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Number of hops along hypernym edges.
///
/// A path never visits a node twice, so distances fit into `NumNodes`.
pub type Distance = NumNodes;

/// Distance-Value of a node that a search never reached
pub const UNREACHED: Distance = Distance::MAX;

/// Converts a raw distance entry into `Some(distance)` or `None` if it is [`UNREACHED`]
#[inline]
pub const fn reached(distance: Distance) -> Option<Distance> {
    if distance == UNREACHED {
        None
    } else {
        Some(distance)
    }
}
