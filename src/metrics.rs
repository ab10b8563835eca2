//! Wall-clock timing hooks for comparing the engines.
//!
//! The engines never time themselves. Callers wrap insertion and queries
//! with [`timed`], or let [`measure`] / [`compare`] build a report.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::collections::{AnyTree, EngineKind, WordIndex};
use crate::macros::debug_event;

/// A value together with the wall-clock time it took to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    /// What the closure returned.
    pub value: T,
    /// How long it ran.
    pub elapsed: Duration,
}

/// Runs `f` and measures how long it took.
pub fn timed<T, F>(f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Measurements of one engine over one vocabulary and one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineReport {
    /// The engine measured.
    pub engine: EngineKind,
    /// Distinct words stored after bulk insertion.
    pub words: usize,
    /// Total nodes after bulk insertion.
    pub node_count: usize,
    /// Time spent inserting every word.
    pub insert_time: Duration,
    /// The prefix queried.
    pub prefix: String,
    /// Words matching the prefix, in lexicographic order.
    pub matches: Vec<String>,
    /// Nodes examined while locating the prefix.
    pub traversed: usize,
    /// Time spent answering the query.
    pub query_time: Duration,
}

/// Builds one engine from `words`, queries `prefix` and reports the costs.
pub fn measure<S>(kind: EngineKind, words: &[S], prefix: &str) -> EngineReport
where
    S: AsRef<str>,
{
    let mut tree = AnyTree::new(kind);
    let inserted = timed(|| tree.extend_words(words));
    let search = timed(|| tree.prefix_search(prefix));

    debug_event!(
        engine = %kind,
        words = inserted.value,
        insert_us = inserted.elapsed.as_micros() as u64,
        query_us = search.elapsed.as_micros() as u64,
        "measured engine"
    );

    EngineReport {
        engine: kind,
        words: tree.len(),
        node_count: tree.node_count(),
        insert_time: inserted.elapsed,
        prefix: prefix.to_string(),
        matches: search.value.words,
        traversed: search.value.traversed,
        query_time: search.elapsed,
    }
}

/// Measures all three engines on the same input.
///
/// With the `parallel` feature each engine is built on its own rayon task;
/// every task owns its tree outright.
pub fn compare<S>(words: &[S], prefix: &str) -> Vec<EngineReport>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        EngineKind::ALL
            .par_iter()
            .map(|&kind| measure(kind, words, prefix))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        EngineKind::ALL
            .iter()
            .map(|&kind| measure(kind, words, prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_returns_value() {
        let result = timed(|| 40 + 2);
        assert_eq!(result.value, 42);
        assert!(result.elapsed <= Duration::from_secs(5));
    }

    #[test]
    fn test_compare_agrees_on_matches() {
        let words = ["bat", "battle", "battery", "bath", "bathroom", "cat"];
        let reports = compare(&words, "bat");
        assert_eq!(reports.len(), 3);
        let kinds: Vec<EngineKind> = reports.iter().map(|r| r.engine).collect();
        assert_eq!(kinds, EngineKind::ALL.to_vec());
        for report in &reports {
            assert_eq!(report.words, 6);
            assert_eq!(report.prefix, "bat");
            assert_eq!(
                report.matches,
                vec!["bat", "bath", "bathroom", "battery", "battle"]
            );
        }
        // root, bat, +tle, +ery, +h, +room, cat
        let trie = &reports[0];
        assert_eq!(trie.node_count, 1 + 3 + 3 + 3 + 1 + 4 + 3);
    }

    #[test]
    fn test_report_serialises() {
        let report = measure(EngineKind::Radix, &["a", "ab"], "a");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["engine"], "radix");
        assert_eq!(json["node_count"], 3);
        assert_eq!(json["matches"][1], "ab");
    }
}
