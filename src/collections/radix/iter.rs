use std::string::String;
use std::vec::Vec;

use super::node::Node;
use super::tree::RadixTree;

/// Iterator over the words of a `RadixTree`, in lexicographic order.
///
/// Walks the tree with an explicit stack, so long words cannot overflow the
/// call stack. Yields owned `String`s rebuilt from the edge labels.
pub struct Words<'a> {
    // Stack of (node, next action). Action 0 yields the node's word,
    // action k > 0 descends into child k - 1.
    stack: Vec<(&'a Node, usize)>,
    // Current constructed key
    key_buf: String,
}

impl<'a> Words<'a> {
    pub(crate) fn new(tree: &'a RadixTree) -> Self {
        Self::below(&tree.root, String::new())
    }

    /// Yields the words at and below `node`, where `key_buf` already spells
    /// the path through `node`'s own label.
    pub(crate) fn below(node: &'a Node, key_buf: String) -> Self {
        Self {
            stack: vec![(node, 0)],
            key_buf,
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, action) = self.stack.last_mut()?;
            let node: &'a Node = *node;

            if *action == 0 {
                *action += 1;
                if node.is_word {
                    return Some(self.key_buf.clone());
                }
                continue;
            }

            let child_pos = *action - 1;
            if let Some((_, child)) = node.children.get(child_pos) {
                // Advance parent so next time we visit the next child
                *action += 1;
                self.key_buf.push_str(&child.label);
                self.stack.push((child, 0));
            } else {
                // Done with this node
                self.stack.pop();
                let new_len = self.key_buf.len() - node.label.len();
                self.key_buf.truncate(new_len);
            }
        }
    }
}
