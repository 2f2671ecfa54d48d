//! Errors raised when building a graph from untrusted input.
//!
//! The analyses themselves are infallible; they rely on the graph invariants that
//! [`GraphFromScratch::try_from_edges`](crate::ops::GraphFromScratch::try_from_edges) checks.

use thiserror::Error;

use crate::{edge::Edge, node::*};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },

    #[error("self-loop at node {0} is not supported")]
    SelfLoop(Node),

    #[error("edge {0} was given more than once")]
    DuplicateEdge(Edge),
}
