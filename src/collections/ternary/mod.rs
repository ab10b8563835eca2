//! Ternary search tree.
//!
//! Per-character nodes with less/equal/greater branches. Collection is an
//! in-order walk, so results come out in lexicographic order.

pub mod node;
pub mod tree;

pub use tree::TernaryTree;
