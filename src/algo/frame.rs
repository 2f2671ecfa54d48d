//! Explicit-stack frame shared by the depth-first walks.
//!
//! A walk keeps a `Vec<Frame>` instead of recursing. Each frame remembers the edge the
//! node was entered by and the live (ascending) neighbor iterator of that node, so
//! neighbors are visited in exactly the order a recursive walk would visit them.
//! A frame borrows the graph; the graph must not change while a walk is running.

use super::*;

pub(crate) struct Frame<'a, G>
where
    G: AdjacencyList + 'a,
{
    entry: Edge,
    neighbors: G::NeighborIter<'a>,
}

impl<'a, G> Frame<'a, G>
where
    G: AdjacencyList + 'a,
{
    /// Creates the frame of `entry.1`, reached from `entry.0`
    pub(crate) fn new(graph: &'a G, entry: Edge) -> Self {
        Self {
            entry,
            neighbors: graph.neighbors_of(entry.1),
        }
    }

    /// Creates the frame of a root node, which counts as entered from itself
    pub(crate) fn root(graph: &'a G, root: Node) -> Self {
        Self::new(graph, Edge(root, root))
    }

    /// The node this frame explores
    #[inline]
    pub(crate) fn node(&self) -> Node {
        self.entry.1
    }

    /// The node this frame was entered from
    #[inline]
    pub(crate) fn entered_from(&self) -> Node {
        self.entry.0
    }
}

impl<'a, G> Iterator for Frame<'a, G>
where
    G: AdjacencyList + 'a,
{
    type Item = Node;

    #[inline]
    fn next(&mut self) -> Option<Node> {
        self.neighbors.next()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn frame_follows_neighborhood() {
        let graph = AdjMatrix::from_edges(5, [(2, 4), (2, 0), (1, 2), (3, 4)]);
        let frame = Frame::new(&graph, Edge(4, 2));

        assert_eq!(frame.node(), 2);
        assert_eq!(frame.entered_from(), 4);
        assert_eq!(frame.collect_vec(), vec![0, 1, 4]);

        let root = Frame::root(&graph, 3);
        assert_eq!(root.entered_from(), 3);
        assert_eq!(root.collect_vec(), vec![4]);
    }
}
