/*!
`dfsgraphs` is a small structural-analysis engine for graphs that are
- **undirected** and **unweighted**,
- defined over a fixed node set: Nodes are numbered `0` to `n - 1`,
- small enough for a **dense** adjacency matrix (`O(n^2)` bits).

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

The only graph representation is [`AdjMatrix`](crate::repr::AdjMatrix): one bitset row per node.
Neighborhoods are therefore always enumerated in ascending order, which makes every
algorithm in [`algo`] fully deterministic.

# Design

Every analysis writes its per-node results into a [`TraversalState`](crate::algo::TraversalState)
that the caller allocates from the same `n` as the graph. The state holds parent pointers,
preorder numbers, component ids, bipartite sides and low-link values as flat arrays. Readers in
[`io`] turn a finished state into text.

All depth-first procedures run on an explicit stack, so deep graphs do not exhaust the call stack.

# Usage

```rust
use dfsgraphs::{prelude::*, algo::*};

//  0 - 1 - 2     3 - 4
let graph = AdjMatrix::from_edges(5, [(0, 1), (1, 2), (3, 4)]);

let mut state = TraversalState::for_graph(&graph);
let roots = graph.build_forest(&mut state);

assert_eq!(roots, vec![0, 3]);
assert_eq!(state.preorder_of(3), Some(0));
assert_eq!(graph.simple_path(0, 2), Some(vec![0, 1, 2]));
assert_eq!(graph.compute_bridges().len(), 3);
```

In most use-cases, `use dfsgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

/// `dfsgraphs::prelude` includes definitions for nodes and edges, all basic graph operation
/// traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
