/*!
# Graph Representations

The engine works on dense graphs, so the only storage backend is an adjacency matrix:

- [`AdjMatrix`]: one [`NodeBitSet`](crate::node::NodeBitSet) row per node, kept symmetric.

Rows are bitsets and hence neighborhoods are enumerated in ascending order.
Every algorithm in [`crate::algo`] relies on this to be deterministic.
*/

mod matrix;

pub use matrix::*;
