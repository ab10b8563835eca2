//! Closed selection over the three engines.
//!
//! The set of engines is fixed, so selection is an enum rather than a trait
//! object. An unknown selector is an error; nothing falls back to a default
//! engine.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CharTrie, PrefixSearch, RadixTree, TernaryTree, WordIndex};
use crate::error::TriadError;
use crate::export::TreeExport;

/// Identifies one of the three engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// [`CharTrie`]
    Trie,
    /// [`TernaryTree`]
    Ternary,
    /// [`RadixTree`]
    Radix,
}

impl EngineKind {
    /// Every engine, in menu order.
    pub const ALL: [EngineKind; 3] = [EngineKind::Trie, EngineKind::Ternary, EngineKind::Radix];

    /// The engine's lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            EngineKind::Trie => "trie",
            EngineKind::Ternary => "ternary",
            EngineKind::Radix => "radix",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = TriadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        EngineKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TriadError::InvalidSelection(s.to_string()))
    }
}

/// Numeric menu selectors: 1 = trie, 2 = ternary, 3 = radix.
impl TryFrom<u8> for EngineKind {
    type Error = TriadError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(EngineKind::Trie),
            2 => Ok(EngineKind::Ternary),
            3 => Ok(EngineKind::Radix),
            other => Err(TriadError::InvalidSelection(other.to_string())),
        }
    }
}

/// One engine of any kind, dispatched by `match`.
#[derive(Debug, Clone)]
pub enum AnyTree {
    /// A character trie.
    Trie(CharTrie),
    /// A ternary search tree.
    Ternary(TernaryTree),
    /// A radix tree.
    Radix(RadixTree),
}

macro_rules! dispatch {
    ($self:expr, $tree:ident => $body:expr) => {
        match $self {
            AnyTree::Trie($tree) => $body,
            AnyTree::Ternary($tree) => $body,
            AnyTree::Radix($tree) => $body,
        }
    };
}

impl AnyTree {
    /// Creates an empty engine of the given kind.
    pub fn new(kind: EngineKind) -> Self {
        match kind {
            EngineKind::Trie => AnyTree::Trie(CharTrie::new()),
            EngineKind::Ternary => AnyTree::Ternary(TernaryTree::new()),
            EngineKind::Radix => AnyTree::Radix(RadixTree::new()),
        }
    }

    /// Which engine this is.
    pub fn kind(&self) -> EngineKind {
        match self {
            AnyTree::Trie(_) => EngineKind::Trie,
            AnyTree::Ternary(_) => EngineKind::Ternary,
            AnyTree::Radix(_) => EngineKind::Radix,
        }
    }
}

impl From<EngineKind> for AnyTree {
    fn from(kind: EngineKind) -> Self {
        AnyTree::new(kind)
    }
}

impl WordIndex for AnyTree {
    fn insert(&mut self, word: &str) -> bool {
        dispatch!(self, tree => tree.insert(word))
    }

    fn contains(&self, word: &str) -> bool {
        dispatch!(self, tree => tree.contains(word))
    }

    fn prefix_search(&self, prefix: &str) -> PrefixSearch {
        dispatch!(self, tree => tree.prefix_search(prefix))
    }

    fn node_count(&self) -> usize {
        dispatch!(self, tree => tree.node_count())
    }

    fn len(&self) -> usize {
        dispatch!(self, tree => tree.len())
    }

    fn clear(&mut self) {
        dispatch!(self, tree => tree.clear())
    }

    fn export(&self, prefix: &str) -> Option<TreeExport> {
        dispatch!(self, tree => tree.export(prefix))
    }
}
