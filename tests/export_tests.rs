use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use petgraph::Direction;
use triad::{AnyTree, EdgeKind, EngineKind, TreeExport, WordIndex};

const WORDS: [&str; 8] = ["bat", "battle", "battery", "bath", "bathroom", "cat", "cart", "c"];

fn to_graph(export: &TreeExport) -> DiGraph<String, EdgeKind> {
    let mut graph = DiGraph::with_capacity(export.node_count(), export.edge_count());
    let ids: Vec<NodeIndex> = export
        .nodes
        .iter()
        .map(|n| graph.add_node(n.label.clone()))
        .collect();
    for edge in &export.edges {
        graph.add_edge(ids[edge.from], ids[edge.to], edge.kind);
    }
    graph
}

fn assert_is_tree(export: &TreeExport) {
    let graph = to_graph(export);
    assert!(!is_cyclic_directed(&graph));
    assert_eq!(export.edge_count() + 1, export.node_count());

    let root = NodeIndex::new(0);
    assert_eq!(graph.neighbors_directed(root, Direction::Incoming).count(), 0);
    for idx in graph.node_indices().skip(1) {
        assert_eq!(graph.neighbors_directed(idx, Direction::Incoming).count(), 1);
    }

    let mut dfs = Dfs::new(&graph, root);
    let mut reached = 0;
    while dfs.next(&graph).is_some() {
        reached += 1;
    }
    assert_eq!(reached, export.node_count());
}

#[test]
fn test_full_exports_are_trees_of_node_count_size() {
    for kind in EngineKind::ALL {
        let mut tree = AnyTree::new(kind);
        tree.extend_words(WORDS);
        let export = tree.export("").unwrap();
        assert_is_tree(&export);
        assert_eq!(export.node_count(), tree.node_count(), "{kind}");
        let terminals = export.nodes.iter().filter(|n| n.terminal).count();
        assert_eq!(terminals, WORDS.len(), "{kind}");
    }
}

#[test]
fn test_prefix_exports() {
    for kind in EngineKind::ALL {
        let mut tree = AnyTree::new(kind);
        tree.extend_words(WORDS);
        for prefix in ["b", "bat", "bath", "ca"] {
            let export = tree.export(prefix).unwrap();
            assert_is_tree(&export);
            assert!(export.node_count() < tree.node_count());
        }
        assert!(tree.export("dog").is_none(), "{kind}");
    }
}

#[test]
fn test_edge_kinds_per_engine() {
    for kind in EngineKind::ALL {
        let mut tree = AnyTree::new(kind);
        tree.extend_words(WORDS);
        let export = tree.export("").unwrap();
        let only_child_edges = export.edges.iter().all(|e| e.kind == EdgeKind::Child);
        match kind {
            EngineKind::Ternary => assert!(!only_child_edges),
            EngineKind::Trie | EngineKind::Radix => assert!(only_child_edges),
        }
    }
}

#[test]
fn test_radix_export_labels() {
    let mut tree = AnyTree::new(EngineKind::Radix);
    tree.extend_words(WORDS);
    let export = tree.export("bat").unwrap();
    let labels: Vec<&str> = export.nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["bat (Word)", "h (Word)", "room (Word)", "t (Prefix)", "ery (Word)", "le (Word)"]
    );
}

#[test]
fn test_export_renders() {
    let mut tree = AnyTree::new(EngineKind::Trie);
    tree.extend_words(["ab"]);
    let export = tree.export("").unwrap();
    let dot = export.to_dot();
    assert!(dot.contains("n2 [label=\"b (ab)\", peripheries=2];"));
    let json = export.to_json().unwrap();
    let back: TreeExport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, export);
}
