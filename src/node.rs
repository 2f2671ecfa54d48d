/*!
# Node Representation

We choose `Node = u32` as the graphs handled here are dense and thus small.
This allows us to store per-node arrays compactly and to manipulate node values directly.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
/// Per-node arrays use it to mark unset entries.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Returns `Some(value)` unless `value` is the `INVALID_NODE` marker
#[inline]
pub(crate) fn valid_node(value: Node) -> Option<Node> {
    (value != INVALID_NODE).then_some(value)
}
