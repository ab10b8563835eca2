//! Error type shared by the engine selector and the export layer.
//!
//! Lookups never fail: a missing word is `false` / `None` and a missing
//! prefix is an empty result. Only caller mistakes surface here.

use thiserror::Error;

/// Errors surfaced to callers of `triad`.
#[derive(Debug, Error)]
pub enum TriadError {
    /// An engine selector that names none of the three engines.
    #[error("invalid engine selection `{0}` (expected trie, ternary or radix)")]
    InvalidSelection(String),

    /// Serialising a tree export failed.
    #[error("failed to serialise tree export")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = TriadError> = core::result::Result<T, E>;
