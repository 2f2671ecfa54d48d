use stream_bitset::prelude::*;

use crate::{edge::*, node::*, ops::*};

/// An undirected graph stored as a symmetric adjacency matrix.
///
/// Cloning copies every row; algorithms that delete edges work on such a copy.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjMatrix {
    rows: Vec<NodeBitSet>,
    num_edges: NumEdges,
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjMatrix {
    type NeighborIter<'a>
        = BitmaskStreamToIndices<BitmaskSliceStream<'a>, Node, true>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        // `iter_set_bits()` on the bitset itself returns an opaque type
        self.rows[u as usize].bitmask_stream().iter_set_bits()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.rows[u as usize].cardinality()
    }
}

impl AdjacencyTest for AdjMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.rows[u as usize].get_bit(v)
    }
}

impl GraphNew for AdjMatrix {
    fn new(n: NumNodes) -> Self {
        Self {
            rows: (0..n).map(|_| NodeBitSet::new(n)).collect(),
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjMatrix {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert_ne!(u, v, "self-loops are not supported");
        if self.rows[u as usize].set_bit(v) {
            true
        } else {
            assert!(!self.rows[v as usize].set_bit(u));
            self.num_edges += 1;
            false
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.rows[u as usize].clear_bit(v) {
            assert!(self.rows[v as usize].clear_bit(u));
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}
