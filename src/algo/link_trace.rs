/*!
# Link Trace

Classifies every step of a depth-first walk, producing the walk as a closed tour of tagged edges.

Starting at the directed edge `(u, v)`, the trace emits
- [`LinkType::Tree`] for every step into a node not discovered before,
- a pair of [`LinkType::Back`] links (both directions) for every discovered neighbor whose
  preorder number is strictly smaller than that of the node the current node was entered from,
- [`LinkType::Parent`] when a node is finished and the walk returns to where it came from.

Every tree edge thus appears once going down and once going back up.
[`LinkType::Down`] is never emitted.
*/

use tracing::debug;

use super::{frame::Frame, *};

pub trait LinkTrace: AdjacencyList + Sized {
    /// Walks the component of `start.1` entering it via `start`, and returns the classified steps.
    /// `start.0` receives preorder number `0` and the trace opens with the tree link `start`.
    /// ** Panics if `start.0 >= n || start.1 >= n` **
    ///
    /// # Examples
    /// ```
    /// use dfsgraphs::{prelude::*, algo::*};
    ///
    /// // triangle 0 - 1 - 2 - 0
    /// let graph = AdjMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    /// let mut state = TraversalState::for_graph(&graph);
    ///
    /// let trace = graph.link_trace(&mut state, Edge(0, 1));
    /// assert_eq!(
    ///     trace,
    ///     vec![
    ///         LinkEdge::tree(0, 1),
    ///         LinkEdge::tree(1, 2),
    ///         LinkEdge::back(2, 0),
    ///         LinkEdge::back(0, 2),
    ///         LinkEdge::parent(2, 1),
    ///         LinkEdge::parent(1, 0),
    ///     ]
    /// );
    /// ```
    fn link_trace(&self, state: &mut TraversalState, start: Edge) -> Vec<LinkEdge>;
}

impl<G> LinkTrace for G
where
    G: AdjacencyList,
{
    fn link_trace(&self, state: &mut TraversalState, start: Edge) -> Vec<LinkEdge> {
        debug_assert_eq!(state.number_of_nodes(), self.number_of_nodes());

        let mut trace = vec![LinkEdge::new(start, LinkType::Tree)];
        let mut time = 0;
        state.discover(start.0, time);
        time += 1;
        state.discover(start.1, time);
        time += 1;

        let mut stack = vec![Frame::new(self, start)];
        while let Some(frame) = stack.last_mut() {
            let (p, u, next) = (frame.entered_from(), frame.node(), frame.next());
            match next {
                Some(v) if !state.is_discovered(v) => {
                    trace.push(LinkEdge::tree(u, v));
                    state.discover(v, time);
                    time += 1;
                    stack.push(Frame::new(self, Edge(u, v)));
                }
                Some(v) if state.pre[v as usize] < state.pre[p as usize] => {
                    trace.push(LinkEdge::back(u, v));
                    trace.push(LinkEdge::back(v, u));
                }
                Some(_) => {}
                None => {
                    trace.push(LinkEdge::parent(u, p));
                    stack.pop();
                }
            }
        }

        debug!(
            start = %start,
            links = trace.len(),
            discovered = time,
            "traced depth-first walk"
        );
        trace
    }
}
