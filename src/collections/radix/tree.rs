use core::fmt;
use std::string::String;
use std::vec::Vec;

use super::iter::Words;
use super::node::Node;
use crate::collections::{common_prefix_len, impl_bulk_insert, PrefixSearch, WordIndex};
use crate::export::{EdgeKind, TreeExport};
use crate::macros::trace_event;

/// A radix tree (compressed trie).
///
/// Edges carry multi-character labels and single-child chains are collapsed.
/// Sibling labels never share a first character, so at most one child can
/// continue any given key.
#[derive(Clone, Default)]
pub struct RadixTree {
    /// The root always has an empty label.
    pub(crate) root: Node,
    len: usize,
}

impl RadixTree {
    /// Creates an empty radix tree.
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            len: 0,
        }
    }

    /// Iterates over all stored words in lexicographic order.
    pub fn iter(&self) -> Words<'_> {
        Words::new(self)
    }

    /// Walks whole labels along `prefix`.
    ///
    /// Returns the node the prefix lands on together with the full path
    /// spelled down to the end of that node's label. If the prefix ends
    /// inside a label, it lands on that label's node. The counter is
    /// incremented once per child label compared.
    fn locate(&self, prefix: &str) -> (Option<(&Node, String)>, usize) {
        let mut node = &self.root;
        let mut rest = prefix;
        let mut path = String::with_capacity(prefix.len());
        let mut traversed = 0;

        while let Some(first) = rest.chars().next() {
            let Some(child) = node.get_child(first) else {
                return (None, traversed);
            };
            traversed += 1;
            if let Some(after) = rest.strip_prefix(child.label.as_str()) {
                path.push_str(&child.label);
                rest = after;
                node = child;
            } else if child.label.starts_with(rest) {
                path.push_str(&child.label);
                return (Some((child, path)), traversed);
            } else {
                return (None, traversed);
            }
        }
        (Some((node, path)), traversed)
    }

    fn label(node: &Node) -> String {
        let kind = if node.is_word { "Word" } else { "Prefix" };
        format!("{} ({})", node.label, kind)
    }

    /// Exports the descendants of `node`, already exported as `id`, in
    /// pre-order.
    fn export_below(node: &Node, id: usize, out: &mut TreeExport) {
        let mut stack: Vec<(usize, &Node)> =
            node.children.iter().rev().map(|(_, c)| (id, &**c)).collect();
        while let Some((parent, node)) = stack.pop() {
            let node_id = out.add_node(Self::label(node), node.is_word);
            out.add_edge(parent, node_id, EdgeKind::Child);
            stack.extend(node.children.iter().rev().map(|(_, c)| (node_id, &**c)));
        }
    }
}

impl WordIndex for RadixTree {
    fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            trace_event!("radix tree: ignoring empty word");
            return false;
        }

        let mut node = &mut self.root;
        let mut rest = word;
        let added = loop {
            let Some(first) = rest.chars().next() else {
                // Landed exactly on an existing node.
                let added = !node.is_word;
                node.is_word = true;
                break added;
            };

            match node.child_position(first) {
                Err(pos) => {
                    // Nothing shares a prefix with the remainder.
                    node.insert_child_at(pos, Node::leaf(rest));
                    debug_assert!(node.has_distinct_keys());
                    break true;
                }
                Ok(pos) => {
                    let child = &mut *node.children[pos].1;
                    let common = common_prefix_len(rest, &child.label);
                    if common < child.label.len() {
                        trace_event!(label = %child.label, at = common, "radix tree: splitting node");
                        child.split(common);
                    }
                    rest = &rest[common..];
                    node = child;
                }
            }
        };

        if added {
            self.len += 1;
        }
        added
    }

    fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        let mut rest = word;
        while let Some(first) = rest.chars().next() {
            let Some(child) = node.get_child(first) else {
                return false;
            };
            match rest.strip_prefix(child.label.as_str()) {
                Some(after) => {
                    rest = after;
                    node = child;
                }
                None => return false,
            }
        }
        !word.is_empty() && node.is_word
    }

    fn prefix_search(&self, prefix: &str) -> PrefixSearch {
        let (landed, traversed) = self.locate(prefix);
        let words = match landed {
            Some((node, key_buf)) => Words::below(node, key_buf).collect(),
            None => Vec::new(),
        };
        PrefixSearch { words, traversed }
    }

    fn node_count(&self) -> usize {
        self.root.count()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.root = Node::default();
        self.len = 0;
    }

    fn export(&self, prefix: &str) -> Option<TreeExport> {
        let (node, path) = self.locate(prefix).0?;
        let mut out = TreeExport::new();
        let label = if path.is_empty() {
            String::from("root")
        } else {
            Self::label(node)
        };
        let root_id = out.add_node(label, node.is_word);
        Self::export_below(node, root_id, &mut out);
        Some(out)
    }
}

impl fmt::Debug for RadixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadixTree")
            .field("len", &self.len)
            .field("nodes", &self.node_count())
            .finish()
    }
}

impl<'a> IntoIterator for &'a RadixTree {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl_bulk_insert!(RadixTree);
