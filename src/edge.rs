use std::fmt::{Debug, Display};

use crate::node::Node;

/// An edge is defined by two nodes/endpoints.
/// In the graph store an edge is unordered; when it names a step of a walk,
/// `Edge(from, to)` is read in that direction.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// Classification of a directed step in the trace of a depth-first walk
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LinkType {
    /// Step into a node that was not discovered before
    Tree,
    /// Step back up to the node a subtree was entered from
    Parent,
    /// Non-tree edge towards a strict ancestor (reported in both directions)
    Back,
    /// Reserved for non-tree edges towards descendants; no walk emits it
    Down,
}

impl Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            LinkType::Tree => "t",
            LinkType::Parent => "p",
            LinkType::Back => "b",
            LinkType::Down => "d",
        };
        f.write_str(tag)
    }
}

/// An edge tagged with its [`LinkType`]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct LinkEdge {
    pub edge: Edge,
    pub link: LinkType,
}

impl LinkEdge {
    pub fn new(edge: Edge, link: LinkType) -> Self {
        Self { edge, link }
    }

    pub fn tree(u: Node, v: Node) -> Self {
        Self::new(Edge(u, v), LinkType::Tree)
    }

    pub fn parent(u: Node, v: Node) -> Self {
        Self::new(Edge(u, v), LinkType::Parent)
    }

    pub fn back(u: Node, v: Node) -> Self {
        Self::new(Edge(u, v), LinkType::Back)
    }
}

impl Display for LinkEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} :{} {}]", self.edge.0, self.link, self.edge.1)
    }
}

impl Debug for LinkEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn edge_from_pairs() {
        let pair: (Node, Node) = (4, 3);
        assert_eq!(Edge::from(pair), Edge(4, 3));
        assert_eq!(Edge::from(&pair), Edge(4, 3));
        assert_eq!(Edge::from(&Edge(5, 0)), Edge(5, 0));

        let pairs: [(Node, Node); 2] = [(0, 1), (2, 1)];
        let edges: Vec<Edge> = pairs.iter().map(Edge::from).collect();
        assert_eq!(edges, vec![Edge(0, 1), Edge(2, 1)]);

        let mut graph = AdjMatrix::new(3);
        graph.add_edges(&edges);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn link_edge_format() {
        assert_eq!(LinkEdge::tree(0, 2).to_string(), "[0 :t 2]");
        assert_eq!(LinkEdge::parent(7, 4).to_string(), "[7 :p 4]");
        assert_eq!(LinkEdge::back(5, 0).to_string(), "[5 :b 0]");
        assert_eq!(
            LinkEdge::new(Edge(1, 3), LinkType::Down).to_string(),
            "[1 :d 3]"
        );
    }

    #[test]
    fn normalize() {
        assert_eq!(Edge(4, 2).normalized(), Edge(2, 4));
        assert!(Edge(2, 4).is_normalized());
        assert_eq!(Edge(2, 4).reverse(), Edge(4, 2));
        assert!(Edge(3, 3).is_loop());
    }
}
