/*!
`wordnet_sap` answers *semantic relatedness* queries over a WordNet-style lexical
database: for two nouns it finds their closest common hypernym and the length of
the connecting path.

# Model

A WordNet consists of
- **synsets**: sets of synonymous nouns, numbered `0` to `n - 1`. A noun may be a member
  of several synsets, one per word sense.
- **hypernyms**: directed edges `child -> parent` meaning *"every child is a parent"*,
  e.g. `cat -> feline`. Together they have to form a DAG with exactly one **root**
  (a synset without hypernyms) that every synset reaches.

Synsets are the **nodes** of a directed graph and represented as `u32` in the range
`0..n`; **edges** are the tuple-struct `Edge(Node, Node)`.

# Shortest Ancestral Paths

An *ancestral path* between `v` and `w` is a pair of directed paths `v ~> x` and
`w ~> x` into a common ancestor `x`. The *shortest* ancestral path minimises the
total number of edges; between two sets of nodes it is the shortest one over all pairs.
Both sides are explored with one multi-source BFS each in `O(n + m)`.
Ties are broken towards the ancestor with the smallest id.

# Usage

There are *4* core submodules you probably want to interact with:
- [`wordnet`] includes the [`WordNet`](wordnet::WordNet) query facade and its builder,
- [`io`] includes configurable readers for synset and hypernym records,
- [`algo`] includes graph algorithms such as BFS, rooted-DAG validation and shortest ancestral paths on any graph,
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all graph representations.

```
use wordnet_sap::prelude::*;

let synsets = "0,entity,x\n1,animal,x\n2,cat true_cat,x\n3,dog,x\n";
let hypernyms = "1,0\n2,1\n3,1\n";
let wordnet = WordNet::from_text(synsets, hypernyms)?;

assert_eq!(wordnet.distance("cat", "dog")?, Some(2));
assert_eq!(wordnet.sap("true_cat", "dog")?.as_deref(), Some("animal"));
# Ok::<(), wordnet_sap::error::Error>(())
```

All failures are reported through [`error::Error`]; nothing in the library panics on
malformed input.
*/

pub mod algo;
pub mod dictionary;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod outcast;
pub mod repr;
pub(crate) mod testing;
pub mod wordnet;

pub use edge::*;
pub use node::*;

/// `wordnet_sap::prelude` includes definitions for nodes and edges, all basic graph operation traits,
/// all implemented representations as well as the [`WordNet`](wordnet::WordNet) facade.
pub mod prelude {
    pub use super::{
        edge::*,
        node::*,
        ops::*,
        repr::*,
        wordnet::{WordNet, WordNetBuilder},
    };
}
