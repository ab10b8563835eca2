//! Character trie.
//!
//! The simplest of the three engines and the correctness baseline for the
//! other two: one node per character, children kept sorted by `char`.

pub mod node;
pub mod tree;

pub use tree::CharTrie;
