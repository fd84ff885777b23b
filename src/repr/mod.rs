/*!
# Graph Representations

Storage backends for the hypernym graph. A hypernym graph is a sparse directed
graph (most synsets have one or two hypernyms), is built once, and is only read
afterwards; hence only insertion is supported.

[`SparseAdjArray`] stores out-neighborhoods inline in `SmallVec<[Node; N]>` and is
the representation behind [`HypernymGraph`].
*/

use crate::{ops::*, *};

mod directed;
mod neighborhood;

pub use directed::*;
pub use neighborhood::*;
