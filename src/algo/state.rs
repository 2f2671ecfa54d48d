/*!
# Traversal State

Per-node results of the depth-first analyses, stored as flat arrays over the node set.

A [`TraversalState`] is allocated with one entry per node (all entries unset), filled by
exactly one analysis call chain and read afterwards, e.g. by the writers in [`crate::io`].
Analyses treat set entries as already visited and never clear them, so every analysis
needs a fresh (or [`reset`](TraversalState::reset)) state.
*/

use itertools::Itertools;

use super::*;
use crate::node::valid_node;

/// Side of a node in a bipartite 2-coloring.
///
/// `Left` corresponds to color `0` and `Right` to color `1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Returns `0` for `Left` and `1` for `Right`
    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Parent pointers, preorder numbers, component ids, bipartite sides and low-link values
/// of a depth-first analysis. Unset entries are stored as [`INVALID_NODE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    pub(crate) parent: Vec<Node>,
    pub(crate) pre: Vec<Node>,
    pub(crate) cc: Vec<Node>,
    pub(crate) color: Vec<Option<Side>>,
    pub(crate) low: Vec<Node>,
}

impl TraversalState {
    /// Creates a state for `n` nodes with every entry unset
    pub fn new(n: NumNodes) -> Self {
        let n = n as usize;
        Self {
            parent: vec![INVALID_NODE; n],
            pre: vec![INVALID_NODE; n],
            cc: vec![INVALID_NODE; n],
            color: vec![None; n],
            low: vec![INVALID_NODE; n],
        }
    }

    /// Creates a state sized to the node count of `graph`
    pub fn for_graph<G: GraphNodeOrder>(graph: &G) -> Self {
        Self::new(graph.number_of_nodes())
    }

    /// Unsets every entry
    pub fn reset(&mut self) {
        self.parent.fill(INVALID_NODE);
        self.pre.fill(INVALID_NODE);
        self.cc.fill(INVALID_NODE);
        self.color.fill(None);
        self.low.fill(INVALID_NODE);
    }

    /// Returns the number of nodes this state was allocated for
    pub fn number_of_nodes(&self) -> NumNodes {
        self.parent.len() as NumNodes
    }

    /// Returns the parent of `u` in the depth-first forest (`u` itself for a root)
    /// ** Panics if `u >= n` **
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        valid_node(self.parent[u as usize])
    }

    /// Returns the preorder number of `u` if `u` was discovered
    /// ** Panics if `u >= n` **
    pub fn preorder_of(&self, u: Node) -> Option<Node> {
        valid_node(self.pre[u as usize])
    }

    /// Returns the connected-component id of `u` if it was labelled
    /// ** Panics if `u >= n` **
    pub fn component_of(&self, u: Node) -> Option<Node> {
        valid_node(self.cc[u as usize])
    }

    /// Returns the bipartite side of `u` if it was colored
    /// ** Panics if `u >= n` **
    pub fn side_of(&self, u: Node) -> Option<Side> {
        self.color[u as usize]
    }

    /// Returns the low-link value of `u` after a bridge computation
    /// ** Panics if `u >= n` **
    pub fn low_of(&self, u: Node) -> Option<Node> {
        valid_node(self.low[u as usize])
    }

    /// Returns *true* if `u` is the root of a depth-first tree
    /// ** Panics if `u >= n` **
    pub fn is_root(&self, u: Node) -> bool {
        self.parent[u as usize] == u
    }

    /// Returns all roots of the depth-first forest in ascending order
    pub fn roots(&self) -> Vec<Node> {
        self.nodes().filter(|&u| self.is_root(u)).collect()
    }

    /// Returns the number of labelled components
    pub fn number_of_components(&self) -> NumNodes {
        self.cc
            .iter()
            .filter(|&&c| c != INVALID_NODE)
            .max()
            .map_or(0, |&c| c + 1)
    }

    /// Returns the first node of every component, ordered by component id
    pub fn component_roots(&self) -> Vec<Node> {
        let mut roots = vec![INVALID_NODE; self.number_of_components() as usize];
        for u in self.nodes().rev() {
            if let Some(c) = self.component_of(u) {
                roots[c as usize] = u;
            }
        }
        roots
    }

    /// Returns the members of every component (ascending), ordered by component id
    pub fn components(&self) -> Vec<Vec<Node>> {
        let mut components = vec![Vec::new(); self.number_of_components() as usize];
        for u in self.nodes() {
            if let Some(c) = self.component_of(u) {
                components[c as usize].push(u);
            }
        }
        components
    }

    /// Returns the children of every node in the depth-first forest in ascending order
    pub fn children(&self) -> Vec<Vec<Node>> {
        let mut children = vec![Vec::new(); self.parent.len()];
        for u in self.nodes() {
            if let Some(p) = self.parent_of(u).filter(|&p| p != u) {
                children[p as usize].push(u);
            }
        }
        children
    }

    /// Returns all discovered nodes sorted by preorder number.
    /// Ties (from separately launched trees) are broken by node id.
    pub fn order_by_preorder(&self) -> Vec<Node> {
        self.nodes()
            .filter_map(|u| Some((self.preorder_of(u)?, u)))
            .sorted()
            .map(|(_, u)| u)
            .collect()
    }

    /// Returns all nodes colored `side`, ordered by preorder number
    pub fn members_of(&self, side: Side) -> Vec<Node> {
        self.order_by_preorder()
            .into_iter()
            .filter(|&u| self.side_of(u) == Some(side))
            .collect()
    }

    fn nodes(&self) -> std::ops::Range<Node> {
        0..self.number_of_nodes()
    }

    pub(crate) fn discover(&mut self, u: Node, pre: Node) {
        self.pre[u as usize] = pre;
    }

    pub(crate) fn is_discovered(&self, u: Node) -> bool {
        self.pre[u as usize] != INVALID_NODE
    }

    pub(crate) fn lower_low(&mut self, u: Node, value: Node) {
        let low = &mut self.low[u as usize];
        *low = (*low).min(value);
    }
}
