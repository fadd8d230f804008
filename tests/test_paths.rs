use rstest::rstest;
use synfeat::bracket::BracketParser;
use synfeat::model::{ParseTree, TreeConfig};
use synfeat::parse_tree_str;
use synfeat::query::NodePath;

// ids: 0 ROOT, 1 S, 2 NP, 3 DT, 4 NN, 5 VP, 6 VBZ
const CAT: &str = "(S (NP (DT the) (NN cat)) (VP (VBZ sleeps)))";

// ids: 0 ROOT, 1 S, 2 NP, 3 NP, 4 JJ, 5 NNS, 6 PP, 7 IN, 8 NP, 9 DT, 10 NNP,
//      11 VP, 12 VBD
const MEMBERS: &str = "(S (NP (NP (JJ Influential) (NNS members)) (PP (IN of) \
                       (NP (DT the) (NNP House)))) (VP (VBD introduced)))";

fn cat() -> ParseTree {
    parse_tree_str(CAT).unwrap()
}

#[test]
fn test_root_path() {
    let tree = cat();
    assert_eq!(tree.root_path(3), vec![3, 2, 1, 0]);
    assert_eq!(tree.root_path(0), vec![0]);
}

#[rstest]
#[case(3, 4, 2)]
#[case(4, 6, 1)]
#[case(3, 3, 3)]
#[case(3, 2, 2)]
#[case(0, 6, 0)]
#[case(5, 6, 5)]
fn test_lowest_common_ancestor(#[case] a: usize, #[case] b: usize, #[case] expected: usize) {
    let tree = cat();
    assert_eq!(tree.lowest_common_ancestor(a, b), expected);
    assert_eq!(tree.lowest_common_ancestor(b, a), expected);
}

#[test]
fn test_path_between() {
    let tree = cat();
    let path = tree.path_between(3, 6);
    assert_eq!(
        path,
        NodePath {
            common: 1,
            up: vec![3, 2],
            down: vec![5, 6],
        }
    );
    assert_eq!(path.len(), 4);
    assert!(!path.is_empty());
}

#[rstest]
#[case(&[], false, None)]
#[case(&[4], true, Some(4))]
#[case(&[4, 3], false, Some(2))]
#[case(&[3, 4], true, Some(2))]
#[case(&[3, 3, 4], true, Some(2))]
#[case(&[4, 6], false, Some(1))]
#[case(&[4, 6], true, None)]
#[case(&[6, 3, 4], true, Some(1))]
fn test_lowest_common_ancestor_of_set(
    #[case] ids: &[usize],
    #[case] strict: bool,
    #[case] expected: Option<usize>,
) {
    let tree = cat();
    assert_eq!(tree.lowest_common_ancestor_of(ids, strict), expected);
}

#[test]
fn test_highest_self_node() {
    let tree = cat();
    // VBZ is the only child of VP
    assert_eq!(tree.highest_self_node(6), 5);
    assert_eq!(tree.highest_self_node(3), 3);
    // S is the only child of the root
    assert_eq!(tree.highest_self_node(1), 0);
    assert_eq!(tree.highest_self_node(0), 0);

    let tree = parse_tree_str("(S (X (Y (Z (W deep)))) (V (U shallow)))").unwrap();
    let deep = tree.terminal_at(0).unwrap();
    assert_eq!(tree.tag(tree.highest_self_node(deep)), "X");
}

#[test]
fn test_siblings_at_boundaries() {
    let tree = cat();
    assert_eq!(tree.sibling_left(3), None);
    assert_eq!(tree.sibling_right(3), Some(4));
    assert_eq!(tree.sibling_left(4), Some(3));
    assert_eq!(tree.sibling_right(4), None);
    assert_eq!(tree.sibling_left(5), Some(2));

    // Only child and root
    assert_eq!(tree.sibling_left(6), None);
    assert_eq!(tree.sibling_right(6), None);
    assert_eq!(tree.sibling_left(0), None);
    assert_eq!(tree.sibling_right(0), None);
}

#[rstest]
#[case(3, 6, "DT/NP/S\\VP\\VBZ")]
#[case(6, 3, "VBZ/VP/S\\NP\\DT")]
#[case(3, 4, "DT/NP\\NN")]
#[case(3, 2, "DT/NP\\")]
#[case(2, 3, "/NP\\DT")]
fn test_tag_path(#[case] from: usize, #[case] to: usize, #[case] expected: &str) {
    assert_eq!(cat().tag_path(from, to), expected);
}

#[rstest]
#[case(0, "B-S/B-NP")]
#[case(1, "I-S/I-NP")]
#[case(2, "I-S/B-VP")]
fn test_iob_chain(#[case] word: usize, #[case] expected: &str) {
    let tree = cat();
    let terminal = tree.terminal_at(word).unwrap();
    assert_eq!(tree.iob_chain(terminal), expected);
}

#[test]
fn test_iob_chain_stops_begin_streak() {
    let tree = parse_tree_str(MEMBERS).unwrap();
    assert_eq!(tree.iob_chain(4), "B-S/B-NP/B-NP");
    assert_eq!(tree.iob_chain(5), "I-S/I-NP/I-NP");
    assert_eq!(tree.iob_chain(9), "I-S/I-NP/I-PP/B-NP");
    assert_eq!(tree.iob_chain(12), "I-S/B-VP");
}

#[test]
fn test_iob_chain_excludes_root() {
    let tree = cat();
    assert_eq!(tree.iob_chain(1), "");
    assert_eq!(tree.iob_chain(0), "");
}

#[test]
fn test_custom_glues() {
    let config = TreeConfig::default()
        .with_glues(">", "<")
        .with_iob_glue("_");
    let tree = BracketParser::with_config(config).parse_str(CAT).unwrap();

    assert_eq!(tree.tag_path(3, 6), "DT>NP>S<VP<VBZ");
    assert_eq!(tree.iob_chain(3), "B_S>B_NP");
}
