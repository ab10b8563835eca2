//! Node/edge exports for external renderers.
//!
//! An export is a plain labelled directed graph derived from a tree with no
//! extra engine state. Node `0` is always the export root.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The relation an edge encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Parent to child in a trie or radix tree.
    Child,
    /// Ternary branch to a smaller character at the same position.
    Left,
    /// Ternary branch to the next position.
    Equal,
    /// Ternary branch to a greater character at the same position.
    Right,
}

impl EdgeKind {
    fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Child => "child",
            EdgeKind::Left => "left",
            EdgeKind::Equal => "equal",
            EdgeKind::Right => "right",
        }
    }
}

/// An exported node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportNode {
    /// Index of this node in [`TreeExport::nodes`].
    pub id: usize,
    /// Display label (character or segment plus a word marker).
    pub label: String,
    /// Whether the node terminates a stored word.
    pub terminal: bool,
}

/// An exported edge from a node to one of its direct children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEdge {
    /// Parent node id.
    pub from: usize,
    /// Child node id.
    pub to: usize,
    /// What the edge means.
    pub kind: EdgeKind,
}

/// A labelled node/edge list rooted at node `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeExport {
    /// All exported nodes, indexed by id.
    pub nodes: Vec<ExportNode>,
    /// All parent-to-child edges.
    pub edges: Vec<ExportEdge>,
}

impl TreeExport {
    /// Creates an empty export.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns its id.
    pub fn add_node(&mut self, label: impl Into<String>, terminal: bool) -> usize {
        let id = self.nodes.len();
        self.nodes.push(ExportNode {
            id,
            label: label.into(),
            terminal,
        });
        id
    }

    /// Appends an edge.
    pub fn add_edge(&mut self, from: usize, to: usize, kind: EdgeKind) {
        debug_assert!(from < self.nodes.len() && to < self.nodes.len());
        self.edges.push(ExportEdge { from, to, kind });
    }

    /// Number of exported nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of exported edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the ids of the direct children of `id`, in edge order.
    pub fn children(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges.iter().filter(move |e| e.from == id).map(|e| e.to)
    }

    /// Serialises the export as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the export in Graphviz DOT syntax.
    ///
    /// Terminal nodes are drawn with a double border.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph tree {\n    node [shape=box];\n");
        for node in &self.nodes {
            let shape = if node.terminal { ", peripheries=2" } else { "" };
            out.push_str(&format!(
                "    n{} [label=\"{}\"{}];\n",
                node.id,
                escape_dot(&node.label),
                shape
            ));
        }
        for edge in &self.edges {
            out.push_str(&format!(
                "    n{} -> n{} [label=\"{}\"];\n",
                edge.from,
                edge.to,
                edge.kind.as_str()
            ));
        }
        out.push_str("}\n");
        out
    }
}

/// Escapes a label for a double-quoted DOT string.
fn escape_dot(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for ch in label.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}
