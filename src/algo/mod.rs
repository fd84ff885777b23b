/*!
# Graph Algorithms

This module provides the algorithms the hypernym graph is validated and queried with.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wordnet_sap::algo::*;
```
and gain access to traversal, rooted-DAG validation and shortest ancestral paths.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod ancestral;
mod rooted_dag;
mod traversal;

use crate::prelude::*;

pub use ancestral::*;
pub use rooted_dag::*;
pub use traversal::*;
