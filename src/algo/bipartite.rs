/*!
# Bipartite Coloring

Depth-first 2-coloring of the whole graph.

Every component is colored from its first node, which is placed on [`Side::Left`].
Discovered nodes receive preorder numbers from a single counter shared by all components
(in contrast to [`Components::build_forest`](super::Components::build_forest), which restarts
the numbering per tree). The coloring stops at the first edge whose endpoints share a side,
leaving the remaining nodes uncolored.
*/

use tracing::debug;

use super::{frame::Frame, *};

/// Depth-first 2-coloring.
///
/// # Examples
/// ```
/// use dfsgraphs::{prelude::*, algo::*};
///
/// // 0 - 1 - 2 - 3 - 0
/// let square = AdjMatrix::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let mut state = TraversalState::for_graph(&square);
///
/// assert!(square.color_bipartite(&mut state));
/// assert_eq!(state.members_of(Side::Left), vec![0, 2]);
/// assert_eq!(state.members_of(Side::Right), vec![1, 3]);
///
/// let triangle = AdjMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
/// assert!(!triangle.is_bipartite());
/// ```
pub trait BipartiteColoring: AdjacencyList + Sized {
    /// Colors all nodes such that no edge joins two nodes of the same side.
    /// Returns *false* as soon as an edge with equally colored endpoints is found;
    /// the state then holds the partial coloring up to that point.
    fn color_bipartite(&self, state: &mut TraversalState) -> bool;

    /// Returns *true* if the graph is bipartite
    fn is_bipartite(&self) -> bool {
        self.color_bipartite(&mut TraversalState::new(self.number_of_nodes()))
    }

    /// Returns *true* if every node is colored in `state` and no edge joins two nodes
    /// of the same side
    fn is_proper_coloring(&self, state: &TraversalState) -> bool;
}

impl<G> BipartiteColoring for G
where
    G: AdjacencyList,
{
    fn color_bipartite(&self, state: &mut TraversalState) -> bool {
        debug_assert_eq!(state.number_of_nodes(), self.number_of_nodes());

        let mut time = 0;
        for root in self.vertices_range() {
            if state.side_of(root).is_some() {
                continue;
            }

            state.color[root as usize] = Some(Side::Left);
            state.discover(root, time);
            time += 1;

            let mut stack = vec![Frame::root(self, root)];
            while let Some(frame) = stack.last_mut() {
                let (u, next) = (frame.node(), frame.next());
                let side = state.side_of(u);
                match next {
                    Some(v) => match state.side_of(v) {
                        None => {
                            state.color[v as usize] = side.map(Side::opposite);
                            state.discover(v, time);
                            time += 1;
                            stack.push(Frame::new(self, Edge(u, v)));
                        }
                        Some(other) if Some(other) == side => {
                            debug!(
                                conflict = %Edge(u, v),
                                colored = time,
                                "graph is not bipartite"
                            );
                            return false;
                        }
                        Some(_) => {}
                    },
                    None => {
                        stack.pop();
                    }
                }
            }
        }

        debug!(colored = time, "graph is bipartite");
        true
    }

    fn is_proper_coloring(&self, state: &TraversalState) -> bool {
        self.vertices().all(|u| state.side_of(u).is_some())
            && self
                .edges(true)
                .all(|Edge(u, v)| state.side_of(u) != state.side_of(v))
    }
}
