use core::fmt;
use std::string::String;
use std::vec::Vec;

use super::node::Node;
use crate::collections::{impl_bulk_insert, PrefixSearch, WordIndex};
use crate::export::{EdgeKind, TreeExport};
use crate::macros::trace_event;

/// A character trie (prefix tree).
///
/// Every edge is labelled by one `char` and every node remembers the prefix
/// its path spells, so matches are read straight off the nodes.
#[derive(Clone, Default)]
pub struct CharTrie {
    root: Node,
    len: usize,
}

impl CharTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            len: 0,
        }
    }

    /// Walks down along `prefix`, counting each descended node.
    fn descend(&self, prefix: &str) -> (Option<&Node>, usize) {
        let mut current = &self.root;
        let mut traversed = 0;
        for ch in prefix.chars() {
            match current.get_child(ch) {
                Some(child) => {
                    traversed += 1;
                    current = child;
                }
                None => return (None, traversed),
            }
        }
        (Some(current), traversed)
    }

    /// Pre-order DFS; sorted children make the output lexicographic.
    fn collect(node: &Node, words: &mut Vec<String>) {
        let mut stack = vec![node];
        while let Some(node) = stack.pop() {
            if node.is_word {
                words.push(node.text.clone());
            }
            stack.extend(node.children.iter().rev().map(|(_, c)| &**c));
        }
    }

    /// Exports the descendants of `node`, already exported as `id`, in
    /// pre-order.
    fn export_below(node: &Node, id: usize, out: &mut TreeExport) {
        let mut stack: Vec<(usize, char, &Node)> = node
            .children
            .iter()
            .rev()
            .map(|(ch, c)| (id, *ch, &**c))
            .collect();
        while let Some((parent, ch, node)) = stack.pop() {
            let node_id = out.add_node(Self::label(ch, node), node.is_word);
            out.add_edge(parent, node_id, EdgeKind::Child);
            stack.extend(node.children.iter().rev().map(|(c, child)| (node_id, *c, &**child)));
        }
    }

    fn label(ch: char, node: &Node) -> String {
        if node.is_word {
            format!("{} ({})", ch, node.text)
        } else {
            ch.to_string()
        }
    }
}

impl WordIndex for CharTrie {
    fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            trace_event!("char trie: ignoring empty word");
            return false;
        }
        let mut current = &mut self.root;
        for ch in word.chars() {
            current = current.child_or_insert(ch);
        }
        let added = !current.is_word;
        current.is_word = true;
        if added {
            self.len += 1;
        }
        added
    }

    fn contains(&self, word: &str) -> bool {
        match self.descend(word) {
            (Some(node), _) => node.is_word,
            (None, _) => false,
        }
    }

    fn prefix_search(&self, prefix: &str) -> PrefixSearch {
        let (node, traversed) = self.descend(prefix);
        let mut words = Vec::new();
        if let Some(node) = node {
            Self::collect(node, &mut words);
        }
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
        let start = self.descend(prefix).0?;
        let mut out = TreeExport::new();
        let label = match prefix.chars().next_back() {
            Some(last) => Self::label(last, start),
            None => String::from("root"),
        };
        let root_id = out.add_node(label, start.is_word);
        Self::export_below(start, root_id, &mut out);
        Some(out)
    }
}

impl fmt::Debug for CharTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharTrie")
            .field("len", &self.len)
            .field("nodes", &self.node_count())
            .finish()
    }
}

impl_bulk_insert!(CharTrie);
