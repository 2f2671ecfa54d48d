/*!
# Path Search

Backtracking depth-first searches for paths between two nodes.

- [`PathSearch::simple_path`] marks nodes as visited on the way down and never unmarks them.
  It returns the first path the ascending-order walk runs into, which need not be a shortest one.
- [`PathSearch::hamiltonian_path`] unmarks nodes on backtrack and therefore explores every
  ordering of the nodes until it finds a path that visits all of them.

The target is never marked, so both searches may reach it from any of its neighbors.
*/

use stream_bitset::prelude::*;
use tracing::{debug, trace};

use super::{frame::Frame, *};

pub trait PathSearch: AdjacencyList + Sized {
    /// Returns a simple path from `source` to `target` if `target` is reachable from `source`.
    /// The path starts with `source` and ends with `target`.
    /// ** Panics if `source >= n || target >= n` **
    ///
    /// # Examples
    /// ```
    /// use dfsgraphs::{prelude::*, algo::*};
    ///
    /// // 0 - 1 - 2 - 3   4
    /// //  \_______/
    /// let graph = AdjMatrix::from_edges(5, [(0, 1), (1, 2), (2, 3), (0, 2)]);
    ///
    /// assert_eq!(graph.simple_path(0, 3), Some(vec![0, 1, 2, 3]));
    /// assert_eq!(graph.simple_path(2, 2), Some(vec![2]));
    /// assert_eq!(graph.simple_path(0, 4), None);
    /// ```
    fn simple_path(&self, source: Node, target: Node) -> Option<Vec<Node>>;

    /// Returns a path from `source` to `target` that visits every node exactly once, if one exists.
    /// For `source == target` this only succeeds on a graph with a single node.
    /// ** Panics if `source >= n || target >= n` **
    ///
    /// # Examples
    /// ```
    /// use dfsgraphs::{prelude::*, algo::*};
    ///
    /// // 0 - 1 - 2 - 3 - 0
    /// let graph = AdjMatrix::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    ///
    /// assert_eq!(graph.hamiltonian_path(0, 3), Some(vec![0, 1, 2, 3]));
    /// assert_eq!(graph.hamiltonian_path(0, 2), None);
    /// ```
    fn hamiltonian_path(&self, source: Node, target: Node) -> Option<Vec<Node>>;
}

/// Collects the nodes on the stack followed by `target`
fn path_to<G: AdjacencyList>(stack: &[Frame<'_, G>], target: Node) -> Vec<Node> {
    stack
        .iter()
        .map(Frame::node)
        .chain(std::iter::once(target))
        .collect()
}

impl<G> PathSearch for G
where
    G: AdjacencyList,
{
    fn simple_path(&self, source: Node, target: Node) -> Option<Vec<Node>> {
        assert!(target < self.number_of_nodes());
        if source == target {
            return Some(vec![source]);
        }

        let mut visited = self.vertex_bitset_unset();
        visited.set_bit(source);

        let mut stack = vec![Frame::root(self, source)];
        while let Some(frame) = stack.last_mut() {
            let (u, next) = (frame.node(), frame.next());
            match next {
                Some(v) if v == target => {
                    let path = path_to(&stack, target);
                    debug!(source, target, length = path.len(), "found simple path");
                    return Some(path);
                }
                Some(v) if !visited.set_bit(v) => {
                    trace!(node = v, depth = stack.len(), "descend");
                    stack.push(Frame::new(self, Edge(u, v)));
                }
                Some(_) => {}
                None => {
                    stack.pop();
                }
            }
        }

        debug!(
            source,
            target,
            visited = visited.cardinality(),
            "no simple path"
        );
        None
    }

    fn hamiltonian_path(&self, source: Node, target: Node) -> Option<Vec<Node>> {
        let n = self.number_of_nodes();
        assert!(target < n);
        if source == target {
            return (n == 1).then(|| vec![source]);
        }

        let mut visited = self.vertex_bitset_unset();
        visited.set_bit(source);

        let mut stack = vec![Frame::root(self, source)];
        while let Some(frame) = stack.last_mut() {
            let (u, next) = (frame.node(), frame.next());
            match next {
                Some(v) if v == target => {
                    if stack.len() + 1 == n as usize {
                        let path = path_to(&stack, target);
                        debug!(source, target, "found hamiltonian path");
                        return Some(path);
                    }
                }
                Some(v) if !visited.set_bit(v) => {
                    trace!(node = v, depth = stack.len(), "descend");
                    stack.push(Frame::new(self, Edge(u, v)));
                }
                Some(_) => {}
                None => {
                    visited.clear_bit(u);
                    stack.pop();
                }
            }
        }

        debug!(source, target, "no hamiltonian path");
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn simple_path_of_example() {
        let graph = two_triangles_with_isolated();

        assert_eq!(graph.simple_path(0, 4), Some(vec![0, 1, 2, 3, 4]));
        assert_eq!(graph.simple_path(0, 1), Some(vec![0, 1]));
        assert_eq!(graph.simple_path(1, 7), None);
        assert_eq!(graph.simple_path(7, 7), Some(vec![7]));
    }

    #[test]
    fn hamiltonian_path_of_example() {
        assert_eq!(two_triangles().hamiltonian_path(0, 5), None);
        assert_eq!(
            two_triangles_chorded().hamiltonian_path(0, 5),
            Some(vec![0, 6, 4, 2, 1, 3, 5])
        );
    }

    #[test]
    fn hamiltonian_path_endpoints_are_equal() {
        assert_eq!(AdjMatrix::new(1).hamiltonian_path(0, 0), Some(vec![0]));

        let graph = AdjMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        assert_eq!(graph.hamiltonian_path(1, 1), None);
    }

    #[test]
    fn random_simple_paths() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2, 5, 10, 20] {
            for m_ub in [n / 2, n, 2 * n] {
                for _ in 0..5 {
                    let graph = random_graph(rng, n, m_ub);
                    let components = graph.connected_components();
                    let component_of =
                        |u: Node| components.iter().position(|c| c.contains(&u));

                    for s in graph.vertices() {
                        for t in graph.vertices() {
                            match graph.simple_path(s, t) {
                                Some(path) => {
                                    assert!(is_simple_path(&graph, &path));
                                    assert_eq!(path.first(), Some(&s));
                                    assert_eq!(path.last(), Some(&t));
                                }
                                None => assert_ne!(component_of(s), component_of(t)),
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn random_hamiltonian_paths() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in 1..=6 {
            for m_ub in [n, 2 * n, 3 * n] {
                for _ in 0..5 {
                    let graph = random_graph(rng, n, m_ub);

                    for s in graph.vertices() {
                        for t in graph.vertices() {
                            let path = graph.hamiltonian_path(s, t);
                            assert_eq!(
                                path.is_some(),
                                has_hamiltonian_path_exhaustive(&graph, s, t)
                            );

                            if let Some(path) = path {
                                assert_eq!(path.len(), graph.len());
                                assert!(is_simple_path(&graph, &path));
                                assert_eq!(path.first(), Some(&s));
                                assert_eq!(path.last(), Some(&t));
                            }
                        }
                    }
                }
            }
        }
    }
}
