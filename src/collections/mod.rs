//! Word indexes.
//!
//! Three structurally unrelated engines share one capability contract,
//! [`WordIndex`]:
//! - `trie`: one node per character, children keyed by `char`
//! - `ternary`: a binary search tree of characters at every word position
//! - `radix`: a compressed trie whose edges carry multi-character labels
//!
//! `engine` provides a closed selector over the three.

pub mod engine;
pub mod radix;
pub mod ternary;
pub mod trie;

pub use engine::{AnyTree, EngineKind};
pub use radix::RadixTree;
pub use ternary::TernaryTree;
pub use trie::CharTrie;

use crate::export::TreeExport;

/// The outcome of a prefix query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixSearch {
    /// Every stored word starting with the prefix, in lexicographic order.
    pub words: Vec<String>,
    /// Nodes examined while locating the prefix. Instrumentation only.
    pub traversed: usize,
}

impl PrefixSearch {
    /// Returns the number of matched words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The operations every engine supports.
///
/// Words are compared `char` by `char` in code point order. Empty words are
/// never stored; an empty prefix matches every stored word.
pub trait WordIndex {
    /// Inserts `word`. Returns `true` if it was not present before.
    ///
    /// Inserting the empty string is a no-op returning `false`.
    fn insert(&mut self, word: &str) -> bool;

    /// Returns `true` if `word` was inserted as a complete word.
    fn contains(&self, word: &str) -> bool;

    /// Finds all words starting with `prefix` and counts the nodes examined.
    fn prefix_search(&self, prefix: &str) -> PrefixSearch;

    /// Total number of nodes in the structure.
    fn node_count(&self) -> usize;

    /// Number of distinct words stored.
    fn len(&self) -> usize;

    /// Removes every word.
    fn clear(&mut self);

    /// Exports the subtree the prefix lands on as a node/edge list.
    ///
    /// Returns `None` if no stored path spells `prefix`.
    fn export(&self, prefix: &str) -> Option<TreeExport>;

    /// Returns `true` if no words are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns all words starting with `prefix`, in lexicographic order.
    fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.prefix_search(prefix).words
    }

    /// Inserts every word of `words`, returning how many were new.
    fn extend_words<I>(&mut self, words: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        Self: Sized,
    {
        words
            .into_iter()
            .filter(|word| self.insert(word.as_ref()))
            .count()
    }
}

/// Implements `Extend`, `FromIterator` for an engine in terms of
/// [`WordIndex::insert`].
macro_rules! impl_bulk_insert {
    ($ty:ty) => {
        impl<S: AsRef<str>> Extend<S> for $ty {
            fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
                for word in iter {
                    $crate::collections::WordIndex::insert(self, word.as_ref());
                }
            }
        }

        impl<S: AsRef<str>> FromIterator<S> for $ty {
            fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
                let mut tree = <$ty>::new();
                tree.extend(iter);
                tree
            }
        }
    };
}

pub(crate) use impl_bulk_insert;

/// Returns the byte length of the longest common prefix of `a` and `b`.
///
/// The result always falls on a `char` boundary of both strings.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|&((_, x), y)| x != y)
        .map_or_else(|| a.len().min(b.len()), |((idx, _), _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len("card", "care"), 3);
        assert_eq!(common_prefix_len("car", "card"), 3);
        assert_eq!(common_prefix_len("card", "car"), 3);
        assert_eq!(common_prefix_len("abc", "xyz"), 0);
        assert_eq!(common_prefix_len("", "abc"), 0);
        // multi-byte characters stay on char boundaries
        assert_eq!(common_prefix_len("héllo", "hélp"), "hél".len());
        assert_eq!(common_prefix_len("日本語", "日本人"), "日本".len());
    }

    #[test]
    fn test_extend_words_counts_new_words() {
        let mut trie = CharTrie::new();
        let added = trie.extend_words(["bat", "bath", "bat", ""]);
        assert_eq!(added, 2);
        assert_eq!(trie.len(), 2);
    }
}
