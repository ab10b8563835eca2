use std::boxed::Box;
use std::string::String;
use std::vec::Vec;

/// A node in the character trie.
///
/// Each node contains:
/// - The full prefix spelled by the path from the root.
/// - Whether that prefix was inserted as a word.
/// - Its children, sorted by the character on the edge.
#[derive(Debug, Default)]
pub struct Node {
    /// The prefix spelled by the root-to-node path.
    pub text: String,
    /// `true` if `text` is a stored word.
    pub is_word: bool,
    /// Children, sorted by edge character.
    pub children: Vec<(char, Box<Node>)>,
}

impl Node {
    /// Creates a new node for the given path prefix.
    pub fn new(text: String) -> Self {
        Self {
            text,
            is_word: false,
            children: Vec::new(),
        }
    }

    /// Finds the child reached by `ch`.
    pub fn get_child(&self, ch: char) -> Option<&Node> {
        self.children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|pos| &*self.children[pos].1)
    }

    /// Returns the child reached by `ch`, creating it if needed.
    /// Maintains the sorted order of children.
    pub fn child_or_insert(&mut self, ch: char) -> &mut Node {
        let pos = match self.children.binary_search_by_key(&ch, |&(c, _)| c) {
            Ok(pos) => pos,
            Err(pos) => {
                let mut text = String::with_capacity(self.text.len() + ch.len_utf8());
                text.push_str(&self.text);
                text.push(ch);
                self.children.insert(pos, (ch, Box::new(Node::new(text))));
                pos
            }
        };
        &mut self.children[pos].1
    }

    /// Counts this node and every descendant.
    pub fn count(&self) -> usize {
        let mut stack = vec![self];
        let mut total = 0;
        while let Some(node) = stack.pop() {
            total += 1;
            stack.extend(node.children.iter().map(|(_, c)| &**c));
        }
        total
    }
}

// Depth grows with word length, so cloning and dropping walk the tree with
// explicit stacks instead of recursing once per level.

impl Clone for Node {
    fn clone(&self) -> Self {
        // Post-order: a node is rebuilt once all of its children are.
        let mut pending = vec![(self, false)];
        let mut built: Vec<Node> = Vec::new();
        while let Some((node, expanded)) = pending.pop() {
            if expanded {
                let start = built.len() - node.children.len();
                let children = node
                    .children
                    .iter()
                    .zip(built.drain(start..))
                    .map(|((ch, _), copy)| (*ch, Box::new(copy)))
                    .collect();
                built.push(Node {
                    text: node.text.clone(),
                    is_word: node.is_word,
                    children,
                });
            } else {
                pending.push((node, true));
                pending.extend(node.children.iter().rev().map(|(_, c)| (&**c, false)));
            }
        }
        built.pop().unwrap_or_default()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.children.drain(..).map(|(_, c)| c).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain(..).map(|(_, c)| c));
        }
    }
}
