/*!
# Bridges

Critical edges found via low-link propagation during a single depth-first walk.

The walk starts at `start.1`, entered via `start.0`. A node receives its preorder number on
discovery and its low-link starts at that number. After a child `i` of `v` finishes,
`low[v] = min(low[v], low[i])` and the tree edge `(v, i)` is a bridge iff `pre[i] == low[i]`.
For an already discovered neighbor `i` other than the node `v` was entered from, the walk lowers
`low[v]` to `low[i]` (not to `pre[i]`).
*/

use tracing::debug;

use super::{frame::Frame, *};

pub trait Bridges: AdjacencyList + Sized {
    /// Runs a bridge search from the walk step `start` and returns the bridges found within
    /// the component of `start.1`, in the order their lower endpoint finishes.
    /// Each bridge is reported as `(parent, child)` of the walk.
    /// ** Panics if `start.0 >= n || start.1 >= n` **
    fn bridges_from(&self, state: &mut TraversalState, start: Edge) -> Vec<Edge>;

    /// Returns all bridges of the graph.
    /// Launches [`Bridges::bridges_from`] at every node not yet discovered (entered from itself).
    ///
    /// # Examples
    /// ```
    /// use dfsgraphs::{prelude::*, algo::*};
    ///
    /// //   0       3
    /// //  / \      |
    /// // 1 - 2 --- 4
    /// let graph = AdjMatrix::from_edges(5, [(0, 1), (0, 2), (1, 2), (2, 4), (3, 4)]);
    /// assert_eq!(graph.compute_bridges(), vec![Edge(4, 3), Edge(2, 4)]);
    /// ```
    fn compute_bridges(&self) -> Vec<Edge> {
        let mut state = TraversalState::new(self.number_of_nodes());
        let mut bridges = Vec::new();
        for u in self.vertices_range() {
            if !state.is_discovered(u) {
                bridges.extend(self.bridges_from(&mut state, Edge(u, u)));
            }
        }
        bridges
    }
}

impl<G> Bridges for G
where
    G: AdjacencyList,
{
    fn bridges_from(&self, state: &mut TraversalState, start: Edge) -> Vec<Edge> {
        debug_assert_eq!(state.number_of_nodes(), self.number_of_nodes());

        let mut bridges = Vec::new();
        let mut time = 0;
        state.discover(start.1, time);
        state.low[start.1 as usize] = time;
        time += 1;

        let mut stack = vec![Frame::new(self, start)];
        while let Some(frame) = stack.last_mut() {
            let (p, u, next) = (frame.entered_from(), frame.node(), frame.next());
            match next {
                Some(v) if !state.is_discovered(v) => {
                    state.discover(v, time);
                    state.low[v as usize] = time;
                    time += 1;
                    stack.push(Frame::new(self, Edge(u, v)));
                }
                Some(v) if v != p => {
                    let low_v = state.low[v as usize];
                    state.lower_low(u, low_v);
                }
                Some(_) => {}
                None => {
                    stack.pop();
                    if let Some(parent) = stack.last() {
                        let w = parent.node();
                        let low_u = state.low[u as usize];
                        state.lower_low(w, low_u);

                        if state.pre[u as usize] == low_u {
                            bridges.push(Edge(w, u));
                        }
                    }
                }
            }
        }

        debug!(
            start = %start,
            bridges = bridges.len(),
            discovered = time,
            "computed bridges"
        );
        bridges
    }
}
