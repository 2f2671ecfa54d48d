/*!
# Connected Components & Spanning Forests

Depth-first component labelling and depth-first spanning trees.

Every tree walk numbers its nodes in preorder starting at `0`. When a whole forest is built,
each component is walked separately from its first node, so preorder numbers restart at `0`
for every tree and are only comparable within a tree.
*/

use tracing::debug;

use super::{frame::Frame, *};

/// Depth-first component labelling and spanning forests.
///
/// # Examples
/// ```
/// use dfsgraphs::{prelude::*, algo::*};
///
/// // 0 - 1   2   3 - 4 - 5
/// let graph = AdjMatrix::from_edges(6, [(0, 1), (3, 4), (4, 5)]);
/// let mut state = TraversalState::for_graph(&graph);
///
/// assert_eq!(graph.label_components(&mut state), 3);
/// assert_eq!(state.components(), vec![vec![0, 1], vec![2], vec![3, 4, 5]]);
/// ```
pub trait Components: AdjacencyList + Sized {
    /// Labels every node with the id of its connected component.
    /// Components are numbered in the order of their smallest node.
    /// Returns the number of components.
    fn label_components(&self, state: &mut TraversalState) -> NumNodes;

    /// Builds the depth-first tree rooted at `root` over all nodes not yet discovered in `state`.
    /// Records parents (the root is its own parent) and preorder numbers starting at `0`.
    /// ** Panics if `root >= n` **
    fn build_tree(&self, state: &mut TraversalState, root: Node);

    /// Labels all components and builds one depth-first tree per component,
    /// rooted at the component's first node. Returns the roots.
    fn build_forest(&self, state: &mut TraversalState) -> Vec<Node>;

    /// Returns the connected components as lists of nodes
    fn connected_components(&self) -> Vec<Vec<Node>> {
        let mut state = TraversalState::new(self.number_of_nodes());
        self.label_components(&mut state);
        state.components()
    }
}

impl<G> Components for G
where
    G: AdjacencyList,
{
    fn label_components(&self, state: &mut TraversalState) -> NumNodes {
        debug_assert_eq!(state.number_of_nodes(), self.number_of_nodes());

        let mut id = 0;
        for u in self.vertices_range() {
            if state.cc[u as usize] != INVALID_NODE {
                continue;
            }

            state.cc[u as usize] = id;
            let mut stack = vec![Frame::root(self, u)];
            while let Some(frame) = stack.last_mut() {
                let (v, next) = (frame.node(), frame.next());
                match next {
                    Some(w) if state.cc[w as usize] == INVALID_NODE => {
                        state.cc[w as usize] = id;
                        stack.push(Frame::new(self, Edge(v, w)));
                    }
                    Some(_) => {}
                    None => {
                        stack.pop();
                    }
                }
            }

            id += 1;
        }

        debug!(components = id, "labelled connected components");
        id
    }

    fn build_tree(&self, state: &mut TraversalState, root: Node) {
        debug_assert_eq!(state.number_of_nodes(), self.number_of_nodes());

        let mut time = 0;
        state.parent[root as usize] = root;
        state.discover(root, time);
        time += 1;

        let mut stack = vec![Frame::root(self, root)];
        while let Some(frame) = stack.last_mut() {
            let (u, next) = (frame.node(), frame.next());
            match next {
                Some(v) if !state.is_discovered(v) => {
                    state.parent[v as usize] = u;
                    state.discover(v, time);
                    time += 1;
                    stack.push(Frame::new(self, Edge(u, v)));
                }
                Some(_) => {}
                None => {
                    stack.pop();
                }
            }
        }
    }

    fn build_forest(&self, state: &mut TraversalState) -> Vec<Node> {
        self.label_components(state);

        let roots = state.component_roots();
        for &root in &roots {
            self.build_tree(state, root);
        }

        debug!(trees = roots.len(), "built depth-first forest");
        roots
    }
}
