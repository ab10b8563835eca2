//! # `triad` - Three Word Indexes, One Contract
//!
//! Classic in-memory string indexes for word insertion, exact lookup and
//! prefix retrieval:
//!
//! - **[`CharTrie`]**: one node per character, children keyed by `char`.
//! - **[`TernaryTree`]**: a binary search tree of characters at every word
//!   position, with an `equal` branch advancing to the next position.
//! - **[`RadixTree`]**: a compressed trie whose edges carry multi-character
//!   labels, split on divergent insertions.
//!
//! All three implement [`WordIndex`] and agree on every observable result:
//! the same words, the same prefix matches, in the same lexicographic order.
//! They differ in shape, which [`WordIndex::node_count`],
//! [`PrefixSearch::traversed`] and [`WordIndex::export`] make visible.
//!
//! ## Architecture
//!
//! - Every node owns its children (`Box`); there is no sharing and no arena.
//! - Engines are plain owned data with no interior mutability. Concurrent
//!   readers and writers need external synchronisation.
//! - [`AnyTree`] selects an engine at runtime through the closed
//!   [`EngineKind`] enum. Unknown selectors are errors.
//! - [`export`] turns any subtree into a labelled node/edge list for
//!   external renderers; [`metrics`] wraps insertion and queries with
//!   wall-clock timers.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for radix splits and measurements.
//! - `parallel`: build engines concurrently in [`metrics::compare`].
//!
//! ## Example
//!
//! ```rust
//! use triad::{AnyTree, EngineKind, WordIndex};
//!
//! for kind in EngineKind::ALL {
//!     let mut tree = AnyTree::new(kind);
//!     tree.extend_words(["bat", "battle", "battery", "bath", "bathroom"]);
//!
//!     assert!(tree.contains("bath"));
//!     assert!(!tree.contains("ba"));
//!     assert_eq!(
//!         tree.words_with_prefix("batt"),
//!         vec!["battery", "battle"],
//!     );
//! }
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod collections;
pub mod error;
pub mod export;
pub mod metrics;

pub use collections::{AnyTree, CharTrie, EngineKind, PrefixSearch, RadixTree, TernaryTree, WordIndex};
pub use error::{Result, TriadError};
pub use export::{EdgeKind, ExportEdge, ExportNode, TreeExport};

// Compile-time assertions: engines are plain owned data.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CharTrie>();
    assert_send_sync::<TernaryTree>();
    assert_send_sync::<RadixTree>();
    assert_send_sync::<AnyTree>();
};
