use std::boxed::Box;
use std::vec::Vec;

/// An optional owned subtree.
pub type Link = Option<Box<Node>>;

/// A node in the ternary search tree.
///
/// `left` and `right` hold alternative characters for the same word
/// position, `equal` continues with the next position.
#[derive(Debug)]
pub struct Node {
    /// The character stored at this position.
    pub ch: char,
    /// `true` if a word ends at this character.
    pub is_end: bool,
    /// Smaller characters at the same position.
    pub left: Link,
    /// The next position of words sharing this character.
    pub equal: Link,
    /// Greater characters at the same position.
    pub right: Link,
}

impl Node {
    /// Creates a leaf holding `ch`.
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            is_end: false,
            left: None,
            equal: None,
            right: None,
        }
    }

    /// Detaches the three branches, leaving a leaf.
    fn take_branches(&mut self) -> impl Iterator<Item = Box<Node>> {
        [self.left.take(), self.equal.take(), self.right.take()]
            .into_iter()
            .flatten()
    }
}

/// Counts every node reachable through `link`.
pub fn count(link: &Link) -> usize {
    let mut stack: Vec<&Node> = link.as_deref().into_iter().collect();
    let mut total = 0;
    while let Some(node) = stack.pop() {
        total += 1;
        stack.extend(
            [&node.left, &node.equal, &node.right]
                .into_iter()
                .filter_map(|l| l.as_deref()),
        );
    }
    total
}

/// Deep-copies the subtree behind `link` without recursing.
pub fn clone_link(link: &Link) -> Link {
    enum Step<'a> {
        Visit(&'a Link),
        Build(&'a Node),
    }

    // Branches are rebuilt first and picked up by their parent's `Build`.
    let mut steps = vec![Step::Visit(link)];
    let mut built: Vec<Link> = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(None) => built.push(None),
            Step::Visit(Some(node)) => {
                steps.push(Step::Build(&**node));
                steps.push(Step::Visit(&node.right));
                steps.push(Step::Visit(&node.equal));
                steps.push(Step::Visit(&node.left));
            }
            Step::Build(node) => {
                let right = built.pop().flatten();
                let equal = built.pop().flatten();
                let left = built.pop().flatten();
                built.push(Some(Box::new(Node {
                    ch: node.ch,
                    is_end: node.is_end,
                    left,
                    equal,
                    right,
                })));
            }
        }
    }
    built.pop().flatten()
}

// Word length bounds the depth of the `equal` chain, so clone and drop use
// explicit stacks.

impl Clone for Node {
    fn clone(&self) -> Self {
        Self {
            ch: self.ch,
            is_end: self.is_end,
            left: clone_link(&self.left),
            equal: clone_link(&self.equal),
            right: clone_link(&self.right),
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.take_branches().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_branches());
        }
    }
}
