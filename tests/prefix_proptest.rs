use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use triad::{AnyTree, CharTrie, EngineKind, RadixTree, TernaryTree, WordIndex};

fn vocabulary() -> impl Strategy<Value = Vec<String>> {
    // A small alphabet forces shared prefixes, splits and BST branching.
    proptest::collection::vec("[a-d]{1,6}", 0..60)
}

fn model_prefix(model: &BTreeSet<String>, prefix: &str) -> Vec<String> {
    model
        .iter()
        .filter(|w| w.starts_with(prefix))
        .cloned()
        .collect()
}

proptest! {
    #[test]
    fn test_engines_match_btree_set(words in vocabulary(), queries in proptest::collection::vec("[a-e]{0,4}", 1..20)) {
        let model: BTreeSet<String> = words.iter().cloned().collect();

        for kind in EngineKind::ALL {
            let mut tree = AnyTree::new(kind);
            for word in &words {
                let std_res = !tree.contains(word);
                let tree_res = tree.insert(word);
                prop_assert_eq!(std_res, tree_res, "{}: insert result mismatch for {}", kind, word);
            }

            prop_assert_eq!(tree.len(), model.len(), "{}: length mismatch", kind);
            for word in &model {
                prop_assert!(tree.contains(word), "{}: lost {}", kind, word);
            }
            prop_assert_eq!(tree.words_with_prefix(""), model_prefix(&model, ""));

            for query in &queries {
                prop_assert_eq!(tree.contains(query), model.contains(query));
                prop_assert_eq!(
                    tree.words_with_prefix(query),
                    model_prefix(&model, query),
                    "{}: prefix {} mismatch", kind, query
                );
            }
        }
    }

    #[test]
    fn test_every_prefix_of_every_word_finds_it(words in vocabulary()) {
        let radix: RadixTree = words.iter().collect();
        let ternary: TernaryTree = words.iter().collect();
        for word in &words {
            for end in 1..=word.len() {
                let prefix = &word[..end];
                prop_assert!(radix.words_with_prefix(prefix).contains(word));
                prop_assert!(ternary.words_with_prefix(prefix).contains(word));
            }
        }
    }

    #[test]
    fn test_shape_invariants(words in vocabulary()) {
        let trie: CharTrie = words.iter().collect();
        let ternary: TernaryTree = words.iter().collect();
        let radix: RadixTree = words.iter().collect();

        // Ternary nodes correspond one to one with non-root trie nodes.
        prop_assert_eq!(ternary.node_count(), trie.node_count() - 1);
        prop_assert!(radix.node_count() <= trie.node_count());

        // Radix siblings never share a first character.
        let export = radix.export("").unwrap();
        for node in &export.nodes {
            let mut firsts = HashSet::new();
            for child in export.children(node.id) {
                let first = export.nodes[child].label.chars().next().unwrap();
                prop_assert!(firsts.insert(first), "siblings share {}", first);
            }
        }

        // Non-word radix nodes other than the root branch at least twice.
        for node in export.nodes.iter().skip(1).filter(|n| !n.terminal) {
            prop_assert!(export.children(node.id).count() >= 2, "uncompressed chain at {}", node.label);
        }
    }

    #[test]
    fn test_insertion_order_does_not_change_results(mut words in vocabulary()) {
        let forward: TernaryTree = words.iter().collect();
        words.reverse();
        let backward: TernaryTree = words.iter().collect();
        prop_assert_eq!(forward.words_with_prefix(""), backward.words_with_prefix(""));
        prop_assert_eq!(forward.node_count(), backward.node_count());

        let radix_fwd: RadixTree = words.iter().rev().collect();
        let radix_bwd: RadixTree = words.iter().collect();
        prop_assert_eq!(radix_fwd.node_count(), radix_bwd.node_count());
    }
}
