/*!
# Graph Algorithms

This module provides the **depth-first analyses** of this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use dfsgraphs::algo::*;
```
and gain access to component labelling, spanning forests, bridges, bipartite coloring,
link traces, as well as simple, Hamiltonian and Euler path search.

Analyses that report per-node results write into a [`TraversalState`].
Path searches return their path directly.
*/

mod bipartite;
mod bridges;
mod components;
mod euler;
pub(crate) mod frame;
mod link_trace;
mod paths;
mod state;

use crate::prelude::*;

pub use bipartite::*;
pub use bridges::*;
pub use components::*;
pub use euler::*;
pub use link_trace::*;
pub use paths::*;
pub use state::*;
