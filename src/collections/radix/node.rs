use std::boxed::Box;
use std::string::String;
use std::vec::Vec;

/// A node in the radix tree.
///
/// Each node contains:
/// - The edge label leading to it from its parent (empty only for the root).
/// - Whether the path up to and including this label is a stored word.
/// - Its children, sorted by the first character of their labels.
#[derive(Debug, Default)]
pub struct Node {
    /// The segment of the key contributed by this node.
    pub label: String,
    /// `true` if the path ending here is a stored word.
    pub is_word: bool,
    /// Children, keyed and sorted by the first `char` of their label.
    pub children: Vec<(char, Box<Node>)>,
}

impl Node {
    /// Creates a word-terminal leaf holding `label`.
    pub fn leaf(label: &str) -> Self {
        Self {
            label: String::from(label),
            is_word: true,
            children: Vec::new(),
        }
    }

    /// Binary-searches the children for the label starting with `ch`.
    pub fn child_position(&self, ch: char) -> Result<usize, usize> {
        self.children.binary_search_by_key(&ch, |&(c, _)| c)
    }

    /// Finds the child whose label starts with `ch`.
    pub fn get_child(&self, ch: char) -> Option<&Node> {
        self.child_position(ch)
            .ok()
            .map(|pos| &*self.children[pos].1)
    }

    /// Inserts `child` at `pos`, as returned by a failed `child_position`.
    pub fn insert_child_at(&mut self, pos: usize, child: Node) {
        let first = child.label.chars().next().unwrap_or_default();
        debug_assert!(!child.label.is_empty(), "radix labels are never empty");
        self.children.insert(pos, (first, Box::new(child)));
    }

    /// Splits this node's label after `at` bytes.
    ///
    /// The node keeps the first `at` bytes and loses its word flag; a new
    /// only child takes the rest of the label, the old children and the old
    /// flag. `at` must be a `char` boundary strictly inside the label.
    pub fn split(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());
        let suffix = self.label.split_off(at);
        let first = suffix.chars().next().unwrap_or_default();
        let child = Node {
            label: suffix,
            is_word: core::mem::take(&mut self.is_word),
            children: core::mem::take(&mut self.children),
        };
        self.children.push((first, Box::new(child)));
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

    /// Returns `true` if every edge key matches its child's first label
    /// character and keys are strictly increasing.
    ///
    /// Only this node's own children are checked. Distinct first characters
    /// mean no two siblings share a prefix.
    pub fn has_distinct_keys(&self) -> bool {
        let keys_ok = self
            .children
            .iter()
            .all(|(c, child)| child.label.chars().next() == Some(*c));
        keys_ok && self.children.windows(2).all(|w| w[0].0 < w[1].0)
    }
}

// Chains of single-character labels make the tree as deep as its longest
// word, so clone and drop use explicit stacks.

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
                    label: node.label.clone(),
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
