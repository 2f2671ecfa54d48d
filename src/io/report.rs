//! # Reports
//!
//! Single-line summaries of analysis results:
//! ```text
//! 0,1,2,                       components, one line per component
//! [c0]:0, 2,                   bipartition, members ordered by preorder number
//! [c1]:1,
//! path:0 - 1 - 2               paths and link traces
//! bridges:[2 4], [4 3],        bridges
//! ```
use std::fmt::Display;

use itertools::Itertools;

use super::*;
use crate::algo::Side;

/// A writer for analysis results
#[derive(Debug, Clone)]
pub struct ReportWriter {
    /// Separator between consecutive path entries (default: ` - `)
    separator: String,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self {
            separator: " - ".to_string(),
        }
    }
}

impl ReportWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator printed between consecutive entries of a path
    pub fn separator<S>(mut self, separator: S) -> Self
    where
        S: Into<String>,
    {
        self.separator = separator.into();
        self
    }

    /// Writes the members of every labelled component, one component per line
    pub fn write_components<W>(&self, writer: &mut W, state: &TraversalState) -> Result<()>
    where
        W: Write,
    {
        for component in state.components() {
            for u in component {
                write!(writer, "{u},")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Writes both sides of a coloring, members ordered by preorder number.
    /// Uncolored nodes are left out.
    pub fn write_bipartition<W>(&self, writer: &mut W, state: &TraversalState) -> Result<()>
    where
        W: Write,
    {
        for side in [Side::Left, Side::Right] {
            write!(writer, "[c{}]:", side.index())?;
            for u in state.members_of(side) {
                write!(writer, "{u}, ")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Writes a sequence of nodes
    pub fn write_path<W>(&self, writer: &mut W, path: &[Node]) -> Result<()>
    where
        W: Write,
    {
        self.write_sequence(writer, path)
    }

    /// Writes a link trace
    pub fn write_links<W>(&self, writer: &mut W, links: &[LinkEdge]) -> Result<()>
    where
        W: Write,
    {
        self.write_sequence(writer, links)
    }

    /// Writes a list of bridges as `[u v]` pairs
    pub fn write_bridges<W>(&self, writer: &mut W, bridges: &[Edge]) -> Result<()>
    where
        W: Write,
    {
        write!(writer, "bridges:")?;
        for Edge(u, v) in bridges {
            write!(writer, "[{u} {v}], ")?;
        }
        writeln!(writer)
    }

    fn write_sequence<W, T>(&self, writer: &mut W, items: &[T]) -> Result<()>
    where
        W: Write,
        T: Display,
    {
        writeln!(writer, "path:{}", items.iter().join(&self.separator))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{algo::*, testing::*};

    fn report<F>(write: F) -> String
    where
        F: FnOnce(&ReportWriter, &mut Vec<u8>) -> Result<()>,
    {
        let writer = ReportWriter::new();
        write_to_string(|buffer| write(&writer, buffer)).unwrap()
    }

    #[test]
    fn components() {
        let graph = three_components();
        let mut state = TraversalState::for_graph(&graph);
        graph.label_components(&mut state);

        assert_eq!(
            report(|w, b| w.write_components(b, &state)),
            "0,1,2,3,4,5,6,\n7,8,\n9,10,11,12,\n"
        );
    }

    #[test]
    fn bipartition() {
        let graph = bipartite_graph();
        let mut state = TraversalState::for_graph(&graph);
        assert!(graph.color_bipartite(&mut state));

        assert_eq!(
            report(|w, b| w.write_bipartition(b, &state)),
            "[c0]:0, 2, 6, 8, 10, 12, 4, \n[c1]:1, 9, 7, 11, 3, 5, \n"
        );
    }

    #[test]
    fn partial_bipartition() {
        let graph = odd_cycle_graph();
        let mut state = TraversalState::for_graph(&graph);
        assert!(!graph.color_bipartite(&mut state));

        assert_eq!(
            report(|w, b| w.write_bipartition(b, &state)),
            "[c0]:0, 6, 3, \n[c1]:2, 4, 5, \n"
        );
    }

    #[test]
    fn paths() {
        let graph = two_triangles();
        let trail = graph.euler_trail(0, 0).unwrap();

        assert_eq!(
            report(|w, b| w.write_path(b, &trail)),
            "path:0 - 1 - 2 - 0 - 5 - 4 - 2 - 3 - 4 - 6 - 0\n"
        );
        assert_eq!(report(|w, b| w.write_path(b, &[3])), "path:3\n");
        assert_eq!(report(|w, b| w.write_path(b, &[])), "path:\n");

        let mut buffer = Vec::new();
        ReportWriter::new()
            .separator(",")
            .write_path(&mut buffer, &[0, 1, 2])
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "path:0,1,2\n");
    }

    #[test]
    fn links() {
        let graph = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]);
        let mut state = TraversalState::for_graph(&graph);
        let trace = graph.link_trace(&mut state, Edge(0, 1));

        assert_eq!(
            report(|w, b| w.write_links(b, &trace)),
            "path:[0 :t 1] - [1 :t 2] - [2 :p 1] - [1 :p 0]\n"
        );
    }

    #[test]
    fn bridges() {
        let graph = graph_with_bridges();
        let mut state = TraversalState::for_graph(&graph);
        let bridges = graph.bridges_from(&mut state, Edge(0, 1));

        assert_eq!(
            report(|w, b| w.write_bridges(b, &bridges)),
            "bridges:[11 12], [0 5], [6 7], \n"
        );
        assert_eq!(report(|w, b| w.write_bridges(b, &[])), "bridges:\n");
    }
}
