/*!
# Euler Trails

Degree-parity test and construction of walks that use every edge exactly once.

The construction works on a private clone of the graph and deletes each edge as it is walked,
always following the smallest remaining neighbor. The caller's graph is never modified.
*/

use tracing::debug;

use super::*;

pub trait EulerTrail: AdjacencyList + GraphEdgeOrder + GraphEdgeEditing + Clone {
    /// Returns *true* if the degrees admit an Euler trail from `source` to `target`:
    /// `deg(source) + deg(target)` is even and every other node has even degree.
    /// For `source == target` this is the circuit criterion.
    ///
    /// Only degrees are inspected; a graph whose edges are spread over several components
    /// can pass this test even though [`EulerTrail::euler_trail`] finds no trail.
    /// ** Panics if `source >= n || target >= n` **
    fn has_euler_trail(&self, source: Node, target: Node) -> bool {
        (self.degree_of(source) + self.degree_of(target)) % 2 == 0
            && self
                .vertices()
                .filter(|&u| u != source && u != target)
                .all(|u| self.degree_of(u) % 2 == 0)
    }

    /// Returns a walk from `source` to `target` that traverses every edge exactly once.
    /// Consecutive nodes of the walk are adjacent and the walk has `m + 1` nodes.
    /// Returns `None` if the degree test fails or the edges cannot be covered by one walk.
    /// ** Panics if `source >= n || target >= n` **
    ///
    /// # Examples
    /// ```
    /// use dfsgraphs::{prelude::*, algo::*};
    ///
    /// //    0
    /// //   / \
    /// //  1 - 2 - 3
    /// let graph = AdjMatrix::from_edges(4, [(0, 1), (0, 2), (1, 2), (2, 3)]);
    ///
    /// assert!(graph.has_euler_trail(2, 3));
    /// assert_eq!(graph.euler_trail(2, 3), Some(vec![2, 0, 1, 2, 3]));
    /// assert_eq!(graph.euler_trail(0, 0), None);
    /// assert_eq!(graph.number_of_edges(), 4);
    /// ```
    fn euler_trail(&self, source: Node, target: Node) -> Option<Vec<Node>>;
}

impl<G> EulerTrail for G
where
    G: AdjacencyList + GraphEdgeOrder + GraphEdgeEditing + Clone,
{
    fn euler_trail(&self, source: Node, target: Node) -> Option<Vec<Node>> {
        if !self.has_euler_trail(source, target) {
            debug!(source, target, "degrees admit no euler trail");
            return None;
        }

        let mut remaining = self.clone();
        let mut stack = vec![source];
        let mut trail = Vec::with_capacity(self.number_of_edges() as usize + 1);

        while let Some(&u) = stack.last() {
            let next = remaining.neighbors_of(u).next();
            match next {
                Some(v) => {
                    remaining.remove_edge(u, v);
                    stack.push(v);
                }
                None => {
                    stack.pop();
                    trail.push(u);
                }
            }
        }
        trail.reverse();

        let complete = trail.len() == self.number_of_edges() as usize + 1;
        if !complete || trail.last() != Some(&target) {
            debug!(
                source,
                target,
                unused = remaining.number_of_edges(),
                "edges cannot be covered by a single trail"
            );
            return None;
        }

        debug!(
            source,
            target,
            length = trail.len(),
            "constructed euler trail"
        );
        Some(trail)
    }
}
