use core::cmp::Ordering;
use core::fmt;
use std::boxed::Box;
use std::string::String;
use std::vec::Vec;

use super::node::{self, Link, Node};
use crate::collections::{impl_bulk_insert, PrefixSearch, WordIndex};
use crate::export::{EdgeKind, TreeExport};
use crate::macros::trace_event;

/// A ternary search tree.
///
/// Each word position is a binary search tree of characters; matching a
/// character moves to the `equal` child and the next position. There is no
/// sentinel root: an empty tree has no nodes at all.
///
/// The shape depends on insertion order (each level is an unbalanced BST),
/// the stored set does not.
#[derive(Clone, Default)]
pub struct TernaryTree {
    root: Link,
    len: usize,
}

impl TernaryTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Finds the node at which the last character of `key` is matched.
    ///
    /// Also returns the number of nodes visited. `key` must not be empty.
    fn locate(&self, key: &str) -> (Option<&Node>, usize) {
        let mut chars = key.chars();
        let Some(mut ch) = chars.next() else {
            return (None, 0);
        };
        let mut link = &self.root;
        let mut traversed = 0;
        while let Some(node) = link {
            traversed += 1;
            match ch.cmp(&node.ch) {
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        ch = next;
                        link = &node.equal;
                    }
                    None => return (Some(node), traversed),
                },
            }
        }
        (None, traversed)
    }

    /// In-order walk: left, self, equal, right.
    ///
    /// Only `equal` extends `prefix`; `left` and `right` are alternatives
    /// for the character at the same position. Each pending step records
    /// the byte length of `prefix` its node's character follows.
    fn collect(link: &Link, prefix: &mut String, words: &mut Vec<String>) {
        enum Step<'a> {
            Enter(&'a Node, usize),
            Emit(&'a Node, usize),
        }

        let mut steps: Vec<Step<'_>> = link
            .as_deref()
            .map(|node| Step::Enter(node, prefix.len()))
            .into_iter()
            .collect();
        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(node, base) => {
                    if let Some(right) = node.right.as_deref() {
                        steps.push(Step::Enter(right, base));
                    }
                    steps.push(Step::Emit(node, base));
                    if let Some(left) = node.left.as_deref() {
                        steps.push(Step::Enter(left, base));
                    }
                }
                Step::Emit(node, base) => {
                    prefix.truncate(base);
                    prefix.push(node.ch);
                    if node.is_end {
                        words.push(prefix.clone());
                    }
                    if let Some(equal) = node.equal.as_deref() {
                        steps.push(Step::Enter(equal, prefix.len()));
                    }
                }
            }
        }
    }

    fn label(node: &Node) -> String {
        if node.is_end {
            format!("{} (End)", node.ch)
        } else {
            node.ch.to_string()
        }
    }

    /// Exports `node` and its descendants in pre-order. Without
    /// `alternatives` only the `equal` branch is followed from `node` itself.
    fn export_tree(node: &Node, alternatives: bool, out: &mut TreeExport) {
        fn branches(node: &Node) -> impl Iterator<Item = (&Node, EdgeKind)> {
            [
                (&node.right, EdgeKind::Right),
                (&node.equal, EdgeKind::Equal),
                (&node.left, EdgeKind::Left),
            ]
            .into_iter()
            .filter_map(|(link, kind)| link.as_deref().map(|child| (child, kind)))
        }

        let root_id = out.add_node(Self::label(node), node.is_end);
        let mut stack: Vec<(usize, &Node, EdgeKind)> = branches(node)
            .filter(|&(_, kind)| alternatives || kind == EdgeKind::Equal)
            .map(|(child, kind)| (root_id, child, kind))
            .collect();
        while let Some((parent, node, kind)) = stack.pop() {
            let id = out.add_node(Self::label(node), node.is_end);
            out.add_edge(parent, id, kind);
            stack.extend(branches(node).map(|(child, kind)| (id, child, kind)));
        }
    }
}

impl fmt::Debug for TernaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TernaryTree")
            .field("len", &self.len)
            .field("nodes", &self.node_count())
            .finish()
    }
}

impl WordIndex for TernaryTree {
    fn insert(&mut self, word: &str) -> bool {
        let mut chars = word.chars();
        let Some(mut ch) = chars.next() else {
            trace_event!("ternary tree: ignoring empty word");
            return false;
        };
        let mut link = &mut self.root;
        let added = loop {
            let node = link.get_or_insert_with(|| Box::new(Node::new(ch)));
            match ch.cmp(&node.ch) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        ch = next;
                        link = &mut node.equal;
                    }
                    None => {
                        let added = !node.is_end;
                        node.is_end = true;
                        break added;
                    }
                },
            }
        };
        if added {
            self.len += 1;
        }
        added
    }

    fn contains(&self, word: &str) -> bool {
        self.locate(word).0.is_some_and(|node| node.is_end)
    }

    fn prefix_search(&self, prefix: &str) -> PrefixSearch {
        let mut words = Vec::new();
        if prefix.is_empty() {
            Self::collect(&self.root, &mut String::new(), &mut words);
            return PrefixSearch {
                words,
                traversed: 0,
            };
        }

        let (node, traversed) = self.locate(prefix);
        if let Some(node) = node {
            if node.is_end {
                words.push(prefix.to_string());
            }
            Self::collect(&node.equal, &mut prefix.to_string(), &mut words);
        }
        PrefixSearch { words, traversed }
    }

    fn node_count(&self) -> usize {
        node::count(&self.root)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Exports the node matching the last character of `prefix` and its
    /// `equal` subtree; the node's own `left`/`right` branches hold other
    /// prefixes and are left out. An empty prefix exports the whole tree, an
    /// empty tree exports nothing.
    fn export(&self, prefix: &str) -> Option<TreeExport> {
        let mut out = TreeExport::new();
        if prefix.is_empty() {
            Self::export_tree(self.root.as_deref()?, true, &mut out);
        } else {
            Self::export_tree(self.locate(prefix).0?, false, &mut out);
        }
        Some(out)
    }
}

impl_bulk_insert!(TernaryTree);

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks the BST property at every node: everything under `left`
    /// starts with a smaller character, everything under `right` with a
    /// greater one.
    fn assert_ordered(link: &Link) {
        let Some(node) = link else {
            return;
        };
        fn first_chars(link: &Link, out: &mut Vec<char>) {
            if let Some(n) = link {
                out.push(n.ch);
                first_chars(&n.left, out);
                first_chars(&n.right, out);
            }
        }
        let mut left = Vec::new();
        first_chars(&node.left, &mut left);
        assert!(left.iter().all(|&c| c < node.ch));
        let mut right = Vec::new();
        first_chars(&node.right, &mut right);
        assert!(right.iter().all(|&c| c > node.ch));
        assert_ordered(&node.left);
        assert_ordered(&node.equal);
        assert_ordered(&node.right);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut tree = TernaryTree::new();
        assert!(tree.insert("cat"));
        assert!(tree.insert("cap"));
        assert!(tree.insert("ca"));
        assert!(!tree.insert("cat"));
        assert!(tree.contains("cat"));
        assert!(tree.contains("cap"));
        assert!(tree.contains("ca"));
        assert!(!tree.contains("c"));
        assert!(!tree.contains("cats"));
        assert!(!tree.contains("dog"));
        assert!(!tree.contains(""));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_prefix_is_word_and_lexicographic() {
        let tree: TernaryTree = ["bath", "bat", "battle", "bathroom", "battery", "bad"]
            .into_iter()
            .collect();
        assert_eq!(
            tree.words_with_prefix("bat"),
            vec!["bat", "bath", "bathroom", "battery", "battle"]
        );
        assert_eq!(tree.words_with_prefix("bad"), vec!["bad"]);
        assert!(tree.words_with_prefix("bz").is_empty());
        assert_ordered(&tree.root);
    }

    #[test]
    fn test_empty_prefix_scans_whole_tree() {
        let tree: TernaryTree = ["m", "b", "z", "ba", "mz"].into_iter().collect();
        let search = tree.prefix_search("");
        assert_eq!(search.words, vec!["b", "ba", "m", "mz", "z"]);
        assert_eq!(search.traversed, 0);
    }

    #[test]
    fn test_node_count_without_sentinel() {
        let mut tree = TernaryTree::new();
        assert_eq!(tree.node_count(), 0);
        tree.insert("ab");
        tree.insert("ac");
        // a, b, c (c hangs right of b)
        assert_eq!(tree.node_count(), 3);
        tree.insert("b");
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_traversed_counts_locate_visits() {
        let tree: TernaryTree = ["b", "a", "c"].into_iter().collect();
        // b, then right to c
        assert_eq!(tree.prefix_search("c").traversed, 2);
        let miss = tree.prefix_search("d");
        assert!(miss.is_empty());
        assert_eq!(miss.traversed, 2);
    }

    #[test]
    fn test_export_edge_kinds() {
        let tree: TernaryTree = ["b", "a", "bc"].into_iter().collect();
        let export = tree.export("").unwrap();
        assert_eq!(export.nodes[0].label, "b (End)");
        let kinds: Vec<EdgeKind> = export.edges.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EdgeKind::Left, EdgeKind::Equal]);
        assert_eq!(export.node_count(), tree.node_count());
        assert!(TernaryTree::new().export("").is_none());
        assert!(tree.export("q").is_none());

        // "b" has "a" as its left alternative, which is not under prefix "b"
        let sub = tree.export("b").unwrap();
        let labels: Vec<&str> = sub.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["b (End)", "c (End)"]);
        assert_eq!(sub.edges[0].kind, EdgeKind::Equal);
    }

    #[test]
    fn test_long_word_does_not_overflow() {
        let long = "ab".repeat(50_000);
        let mut tree = TernaryTree::new();
        assert!(tree.insert(&long));
        assert!(tree.insert("b"));
        assert!(tree.contains(&long));
        assert!(!tree.contains(&long[..long.len() - 1]));
        assert_eq!(tree.node_count(), long.len() + 1);

        let words = tree.words_with_prefix("ab");
        assert_eq!(words, vec![long.clone()]);
        assert_eq!(tree.prefix_search("").len(), 2);
        assert_eq!(tree.export("").unwrap().node_count(), long.len() + 1);

        let copy = tree.clone();
        assert!(copy.contains(&long));
        assert_eq!(copy.node_count(), tree.node_count());
        drop(copy);
        tree.clear();
        assert!(tree.is_empty());
        tree.insert(&long);
        drop(tree);
    }
}
