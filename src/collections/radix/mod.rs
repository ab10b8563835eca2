//! Radix tree (compressed trie).
//!
//! Edges carry multi-character labels. Divergent insertions split an
//! existing label at the longest common prefix, so siblings never share a
//! first character. Prefix queries walk whole labels and rebuild full words
//! by appending each label once.

pub mod iter;
pub mod node;
pub mod tree;

pub use iter::Words;
pub use tree::RadixTree;
