use serde_json::json;
use synfeat::model::{Payload, ROOT_ID};
use synfeat::parse_tree_str;

const CAT: &str = "(S (NP (DT the) (NN cat)) (VP (VBZ sleeps)))";

#[test]
fn test_node_accessors() {
    let tree = parse_tree_str(CAT).unwrap();

    // Terminal
    let the = tree.node(3);
    assert!(the.is_terminal());
    assert!(!the.has_children());
    assert_eq!(the.word(), Some("the"));
    assert_eq!(the.payload(), &Payload::Terminal("the".to_string()));
    assert_eq!(the.parent(), Some(2));

    // Non-terminal
    let np = &tree[2];
    assert!(np.is_non_terminal());
    assert_eq!(np.word(), None);
    assert_eq!(np.children(), &[3, 4]);
    assert_eq!(np.payload(), &Payload::NonTerminal(vec![3, 4]));

    // Root
    assert_eq!(tree.root_id(), ROOT_ID);
    assert_eq!(tree.root().parent(), None);
}

#[test]
fn test_lookup_misses() {
    let tree = parse_tree_str(CAT).unwrap();
    assert!(tree.get(100).is_none());
    assert!(tree.terminal_at(3).is_none());
    assert_eq!(tree.terminal_at(2), Some(6));
}

#[test]
#[should_panic]
fn test_node_out_of_bounds() {
    let tree = parse_tree_str(CAT).unwrap();
    tree.node(55);
}

#[test]
#[should_panic]
fn test_query_out_of_bounds() {
    let tree = parse_tree_str(CAT).unwrap();
    tree.siblings(55);
}

#[test]
fn test_pre_order_iter() {
    let tree = parse_tree_str(CAT).unwrap();
    let ids: Vec<usize> = tree.pre_order_iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);

    let ids: Vec<usize> = tree.pre_order_from(2).map(|n| n.id()).collect();
    assert_eq!(ids, vec![2, 3, 4]);

    assert_eq!(tree.pre_order_from(99).count(), 0);
}

#[test]
fn test_post_order_iter() {
    let tree = parse_tree_str(CAT).unwrap();
    let tags: Vec<&str> = tree.post_order_iter().map(|n| n.tag()).collect();
    assert_eq!(tags, vec!["DT", "NN", "NP", "VBZ", "VP", "S", "ROOT"]);
}

#[test]
fn test_navigation() {
    let tree = parse_tree_str(CAT).unwrap();

    assert_eq!(tree.parent(3), Some(2));
    assert_eq!(tree.parent(0), None);
    assert_eq!(tree.children(1), &[2, 5]);
    assert!(tree.children(6).is_empty());
    assert_eq!(tree.word(6), Some("sleeps"));
    assert_eq!(tree.word(5), None);

    assert!(tree.is_root(0));
    assert!(!tree.is_root(1));
    assert!(tree.has_children(5));
    assert!(!tree.has_children(6));
}

#[test]
fn test_siblings_include_node_itself() {
    let tree = parse_tree_str(CAT).unwrap();
    assert_eq!(tree.siblings(2), &[2, 5]);
    assert_eq!(tree.siblings(5), &[2, 5]);
    assert_eq!(tree.siblings(6), &[6]);
    assert!(tree.siblings(ROOT_ID).is_empty());
}

#[test]
fn test_terminal_collection() {
    let tree = parse_tree_str(CAT).unwrap();
    assert_eq!(tree.terminals_of(ROOT_ID), vec![3, 4, 6]);
    assert_eq!(tree.terminals_of(5), vec![6]);
    assert_eq!(tree.terminal_words_of(2), vec!["the", "cat"]);
    assert_eq!(tree.terminal_tags_of(1), vec!["DT", "NN", "VBZ"]);
}

#[test]
fn test_parsed_trees_are_valid() {
    for parse in [
        CAT,
        "(UH hi)",
        "(X (Y (Z (W deep))))",
        "(NP (DT a)) (VP (VB b) (NP (NN c)))",
    ] {
        let tree = parse_tree_str(parse).unwrap();
        assert!(tree.is_valid(), "invalid tree for {parse}");
        assert_eq!(
            tree.num_nodes(),
            tree.num_terminals() + tree.num_non_terminals()
        );
    }
}

#[test]
fn test_node_serializes_as_json() {
    let tree = parse_tree_str(CAT).unwrap();
    assert_eq!(
        serde_json::to_value(tree.node(3)).unwrap(),
        json!({"id": 3, "tag": "DT", "parent": 2, "payload": {"Terminal": "the"}})
    );
    assert_eq!(
        serde_json::to_value(tree.root()).unwrap(),
        json!({"id": 0, "tag": "ROOT", "parent": null, "payload": {"NonTerminal": [1]}})
    );
}
