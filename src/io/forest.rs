//! # Forest
//!
//! Draws the depth-first forest of a [`TraversalState`] as text, one block per tree.
//!
//! Every node is printed as `-` followed by its id right-aligned to the node width. The first
//! child of a node continues on the same line; every further child opens a new line that is
//! indented by `(width + 1)` columns per tree level and preceded by a line holding a single `|`
//! right before the child's column. For the forest of the three components
//! `0 - 1, 0 - 2, 0 - 5, 5 - 3, 3 - 4, 4 - 6`, `7 - 8` and `9 - 10, 9 - 11, 11 - 12`:
//! ```text
//! - 0- 1
//!   |
//!    - 2
//!   |
//!    - 5- 3- 4- 6
//! - 7- 8
//! - 9-10
//!   |
//!    -11-12
//! ```
use super::*;

/// Per-node drawing coordinates of a depth-first forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestLayout {
    /// Children of every node in ascending order
    pub children: Vec<Vec<Node>>,
    /// Tree level of every node (roots are on level `0`)
    pub level: Vec<Node>,
    /// Output line of every node relative to its tree (roots are on line `0`)
    pub line: Vec<Node>,
}

impl ForestLayout {
    /// Computes the layout of every tree stored in `state`.
    /// The `j`-th child of a node `u` is placed on level `level[u] + 1` and line `line[u] + j`.
    /// Entries of undiscovered nodes stay `INVALID_NODE`.
    pub fn new(state: &TraversalState) -> Self {
        let n = state.number_of_nodes() as usize;
        let children = state.children();
        let mut level = vec![INVALID_NODE; n];
        let mut line = vec![INVALID_NODE; n];

        for root in state.roots() {
            level[root as usize] = 0;
            line[root as usize] = 0;

            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                for (j, &v) in children[u as usize].iter().enumerate() {
                    level[v as usize] = level[u as usize] + 1;
                    line[v as usize] = line[u as usize] + j as Node;
                    stack.push(v);
                }
            }
        }

        Self {
            children,
            level,
            line,
        }
    }
}

/// A writer for depth-first forests
#[derive(Debug, Clone, Default)]
pub struct ForestWriter {
    /// Overrides the width nodes are padded to
    node_width: Option<usize>,
}

impl ForestWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Pads node ids to `width` columns instead of the number of digits of the largest node
    pub fn node_width(mut self, width: usize) -> Self {
        self.node_width = Some(width);
        self
    }

    /// Returns the number of columns a node id of a graph with `n` nodes is padded to
    pub fn width_for(&self, n: NumNodes) -> usize {
        self.node_width
            .unwrap_or_else(|| n.saturating_sub(1).max(1).ilog10() as usize + 1)
    }

    /// Writes the whole tree containing `node` to `writer`, starting from its root
    ///
    /// # Errors
    /// Returns an error if `node` was not discovered in `state` or if writing fails.
    pub fn try_write_tree<W>(
        &self,
        state: &TraversalState,
        node: Node,
        writer: &mut W,
    ) -> Result<()>
    where
        W: Write,
    {
        let n = state.number_of_nodes();
        raise_error_unless!(
            node < n && state.parent_of(node).is_some(),
            ErrorKind::InvalidInput,
            format!("node {node} is not part of a depth-first tree")
        );

        let mut root = node;
        while let Some(parent) = state.parent_of(root).filter(|&p| p != root) {
            root = parent;
        }

        let layout = ForestLayout::new(state);
        self.write_tree(&layout, self.width_for(n), root, writer)
    }

    /// Writes every tree of `state` to `writer`, ordered by root
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn try_write_forest<W>(&self, state: &TraversalState, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        let layout = ForestLayout::new(state);
        let width = self.width_for(state.number_of_nodes());
        for root in state.roots() {
            self.write_tree(&layout, width, root, writer)?;
        }
        Ok(())
    }

    /// Writes every tree of `state` into a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or writing fails.
    pub fn try_write_forest_file<P>(&self, state: &TraversalState, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_forest(state, &mut writer)?;
        writer.flush()
    }

    /// Returns the drawing of every tree of `state`
    ///
    /// # Errors
    /// Returns an error if formatting fails.
    pub fn forest_to_string(&self, state: &TraversalState) -> Result<String> {
        write_to_string(|buffer| self.try_write_forest(state, buffer))
    }

    fn write_tree<W>(
        &self,
        layout: &ForestLayout,
        width: usize,
        root: Node,
        writer: &mut W,
    ) -> Result<()>
    where
        W: Write,
    {
        let mut current_line = 0;
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            let line = layout.line[u as usize];
            if line != current_line {
                let indent = layout.level[u as usize] as usize * (width + 1);
                writeln!(writer)?;
                writeln!(writer, "{:>indent$}", "|")?;
                write!(writer, "{:indent$}", "")?;
                current_line = line;
            }
            write!(writer, "-{u:>width$}")?;

            stack.extend(layout.children[u as usize].iter().rev());
        }
        writeln!(writer)
    }
}
