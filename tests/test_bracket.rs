use synfeat::bracket::{BracketParser, write_subtree, write_tree};
use synfeat::model::{ParseTreeBuilder, TreeBuilder, TreeConfig};
use synfeat::parser::ParsingErrorType;
use synfeat::parse_tree_str;

const CAT: &str = "(S (NP (DT the) (NN cat)) (VP (VBZ sleeps)))";

// --- TESTS PARSE STRING PARSING ---
#[test]
fn test_basic_tree() {
    let tree = parse_tree_str(CAT).unwrap();

    // Counts
    assert_eq!(tree.num_terminals(), 3);
    assert_eq!(tree.num_non_terminals(), 4);
    assert_eq!(tree.num_nodes(), 7);

    // Terminals
    assert_eq!(tree.words(), vec!["the", "cat", "sleeps"]);
    assert_eq!(tree.tags(), vec!["DT", "NN", "VBZ"]);

    // Root is anonymous wrapper with one child
    let root = tree.root();
    assert!(root.is_root());
    assert_eq!(root.tag(), "ROOT");
    assert_eq!(root.children(), &[1]);
    assert_eq!(tree.tag(1), "S");

    assert!(tree.is_valid());
}

#[test]
fn test_ids_follow_pre_order() {
    let tree = parse_tree_str(CAT).unwrap();
    let tags: Vec<&str> = tree.nodes().iter().map(|n| n.tag()).collect();
    assert_eq!(tags, vec!["ROOT", "S", "NP", "DT", "NN", "VP", "VBZ"]);
    assert_eq!(tree.terminals(), &[3, 4, 6]);
}

#[test]
fn test_existing_wrapper_is_not_doubled() {
    let wrapped = parse_tree_str("( (S (NP (DT the) (NN cat)) (VP (VBZ sleeps))) )").unwrap();
    let glued = parse_tree_str("((S (NP (DT the) (NN cat)) (VP (VBZ sleeps))))").unwrap();
    let bare = parse_tree_str(CAT).unwrap();

    assert_eq!(wrapped.num_nodes(), 7);
    assert_eq!(write_tree(&wrapped), write_tree(&bare));
    assert_eq!(write_tree(&glued), write_tree(&bare));
}

#[test]
fn test_brackets_without_whitespace() {
    let tree = parse_tree_str("(S(NP(NNS dogs))(VP(VBP bark)))").unwrap();
    assert_eq!(tree.words(), vec!["dogs", "bark"]);
    assert_eq!(tree.tags(), vec!["NNS", "VBP"]);
}

#[test]
fn test_several_top_level_constituents() {
    let tree = parse_tree_str("(NP (DT a)) (VP (VB b))").unwrap();
    assert_eq!(tree.root().children().len(), 2);
    assert_eq!(tree.words(), vec!["a", "b"]);
}

#[test]
fn test_terminal_directly_below_root() {
    let tree = parse_tree_str("(UH hello)").unwrap();
    assert_eq!(tree.num_nodes(), 2);
    assert!(tree.is_terminal(1));
    assert_eq!(tree.parent(1), Some(0));
}

#[test]
fn test_root_tag_removal() {
    let parse = "(ROOT (S (VP (VB Go))))";

    let mut parser = BracketParser::new_defaults().with_root_tag_removal("ROOT");
    let tree = parser.parse_str(parse).unwrap();
    assert_eq!(tree.num_nodes(), 4);
    assert_eq!(tree.tag(1), "S");

    // Without removal the explicit root becomes a constituent of its own
    let tree = parse_tree_str(parse).unwrap();
    assert_eq!(tree.num_nodes(), 5);
    assert_eq!(tree.tag(1), "ROOT");
    assert_eq!(tree.tag(2), "S");
}

#[test]
fn test_custom_root_label() {
    let config = TreeConfig::default().with_root_label("TOP");
    let mut parser = BracketParser::with_config(config.clone());
    let tree = parser.parse_str(CAT).unwrap();

    assert_eq!(tree.root().tag(), "TOP");
    assert_eq!(tree.config(), &config);
    assert!(tree.is_valid());
}

// --- TESTS MALFORMED INPUT ---
fn error_kind(parse: &str) -> ParsingErrorType {
    parse_tree_str(parse).unwrap_err().kind().clone()
}

#[test]
fn test_empty_input() {
    assert_eq!(error_kind(""), ParsingErrorType::EmptyInput);
    assert_eq!(error_kind(" \n\t "), ParsingErrorType::EmptyInput);
}

#[test]
fn test_unbalanced_brackets() {
    assert_eq!(error_kind("(NP (DT the"), ParsingErrorType::UnbalancedBrackets);
    assert_eq!(error_kind("(NP (DT the)))"), ParsingErrorType::UnbalancedBrackets);
    assert_eq!(error_kind("((NP (DT the))"), ParsingErrorType::UnbalancedBrackets);
}

#[test]
fn test_unbalanced_error_has_context() {
    let err = parse_tree_str("(NP (DT the").unwrap_err();
    assert_eq!(err.position(), 0);
    assert_eq!(err.context(), "( ( NP ( DT the");
}

#[test]
fn test_duplicate_root() {
    assert_eq!(
        error_kind("((NP (DT a)) ((NP (DT b))))"),
        ParsingErrorType::DuplicateRoot
    );
}

#[test]
fn test_trailing_tokens() {
    assert_eq!(
        error_kind("((NP (DT a))) ((NP (DT b)))"),
        ParsingErrorType::TrailingTokens
    );
}

#[test]
fn test_unexpected_tokens() {
    // Two words in one terminal
    assert!(matches!(
        error_kind("(NP (DT the cat))"),
        ParsingErrorType::UnexpectedToken(_)
    ));
    // Constituent without word or children
    assert!(matches!(
        error_kind("(NP (DT))"),
        ParsingErrorType::UnexpectedToken(_)
    ));
    // Bare word between constituents
    assert!(matches!(
        error_kind("(NP (DT the) cat)"),
        ParsingErrorType::UnexpectedToken(_)
    ));
    // Empty brackets
    assert!(matches!(
        error_kind("(NP ( ))"),
        ParsingErrorType::UnexpectedToken(_)
    ));
}

#[test]
fn test_parser_recovers_after_error() {
    let mut parser = BracketParser::new_defaults();
    assert!(parser.parse_str("(NP (DT the cat))").is_err());

    let tree = parser.parse_str(CAT).unwrap();
    assert_eq!(tree.num_nodes(), 7);
    assert!(tree.is_valid());

    // No half-built tree left behind in the builder
    let mut builder = parser.into_builder();
    assert!(builder.finish_tree().is_none());
}

#[test]
fn test_custom_builder_is_driven_in_pre_order() {
    struct TagCollector {
        tags: Vec<String>,
        started: bool,
    }

    impl TreeBuilder for TagCollector {
        type NodeIdx = usize;
        type Tree = Vec<String>;

        fn init_next(&mut self, _capacity: usize) -> usize {
            self.started = true;
            self.tags.clear();
            0
        }

        fn add_non_terminal(&mut self, _parent: usize, tag: &str) -> usize {
            self.tags.push(tag.to_string());
            self.tags.len()
        }

        fn add_terminal(&mut self, _parent: usize, tag: &str, word: &str) -> usize {
            self.tags.push(format!("{tag}:{word}"));
            self.tags.len()
        }

        fn finish_tree(&mut self) -> Option<Vec<String>> {
            if !self.started {
                return None;
            }
            self.started = false;
            Some(std::mem::take(&mut self.tags))
        }
    }

    let mut parser = BracketParser::new(TagCollector {
        tags: Vec::new(),
        started: false,
    });
    let tags = parser.parse_str(CAT).unwrap();
    assert_eq!(tags, vec!["S", "NP", "DT:the", "NN:cat", "VP", "VBZ:sleeps"]);
}

// --- TESTS DOCUMENT PARSING ---
const DOC: &str = "( (S (NP (NNS Dogs))\n   (VP (VBP bark))) )\n\n( (S (VP (VB Run))) )\n";

#[test]
fn test_parse_document() {
    let mut parser = BracketParser::new_defaults();
    let trees: Vec<_> = parser
        .parse_document(DOC)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(trees.len(), 2);
    assert_eq!(trees[0].words(), vec!["Dogs", "bark"]);
    assert_eq!(trees[1].words(), vec!["Run"]);
}

#[test]
fn test_document_with_malformed_tree() {
    let doc = "((S (NP (NN a))))\n((S (NP (NN b)))\n((S (VP (VB c))))";

    let results = BracketParser::new_defaults().parse_document(doc);
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert_eq!(
        results[1].as_ref().unwrap_err().kind(),
        &ParsingErrorType::UnbalancedBrackets
    );
    assert_eq!(results[2].as_ref().unwrap().words(), vec!["c"]);
}

#[test]
fn test_document_iterator() {
    let mut iter = BracketParser::new_defaults().into_document_iter(DOC);

    let first = iter.next().unwrap().unwrap();
    assert_eq!(first.num_terminals(), 2);
    let second = iter.next().unwrap().unwrap();
    assert_eq!(second.num_terminals(), 1);
    assert!(iter.next().is_none());

    // Parser can be reused afterward
    let mut parser = iter.into_parser();
    assert!(parser.parse_str(CAT).is_ok());
}

#[test]
fn test_document_with_explicit_root_tags() {
    let doc = "(ROOT (S (NP (NN a))))\n(ROOT (S (NP (NN b))))";
    let parser = BracketParser::new_defaults()
        .with_root_tag_removal("ROOT")
        .with_document_delimiters("(ROOT", "))))");

    let trees: Vec<_> = parser.into_document_iter(doc).map(Result::unwrap).collect();
    assert_eq!(trees.len(), 2);
    assert_eq!(trees[1].tag(1), "S");
    assert_eq!(trees[1].words(), vec!["b"]);
}

#[test]
fn test_empty_document() {
    assert!(BracketParser::new_defaults().parse_document(" \n ").is_empty());
}

// --- TESTS WRITING ---
#[test]
fn test_write_tree() {
    let tree = parse_tree_str(CAT).unwrap();
    assert_eq!(
        write_tree(&tree),
        "((S (NP (DT the) (NN cat)) (VP (VBZ sleeps))))"
    );
    assert_eq!(tree.to_string(), write_tree(&tree));
    assert_eq!(write_subtree(&tree, 5), "(VP (VBZ sleeps))");
}

#[test]
fn test_write_tree_round_trip() {
    let parse = "( (S (NP (NP (JJ Influential) (NNS members)) (PP (IN of) (NP (DT the) \
                 (NNP House)))) (VP (VBD introduced) (NP (NN legislation))) (. .)) )";
    let tree = parse_tree_str(parse).unwrap();
    let written = write_tree(&tree);
    let reparsed = parse_tree_str(&written).unwrap();

    assert_eq!(write_tree(&reparsed), written);
    assert_eq!(reparsed.tags(), tree.tags());
    assert_eq!(reparsed.words(), tree.words());
    assert_eq!(reparsed.num_nodes(), tree.num_nodes());
}

#[test]
fn test_written_trees_parse_back_as_document() {
    let trees: Vec<_> = [CAT, "(NP (DT a) (NN dog))", "(UH hi)"]
        .iter()
        .map(|parse| parse_tree_str(parse).unwrap())
        .collect();
    let doc: String = trees.iter().map(|tree| write_tree(tree) + "\n").collect();

    let reparsed: Vec<_> = BracketParser::new_defaults()
        .parse_document(&doc)
        .into_iter()
        .map(Result::unwrap)
        .collect();

    assert_eq!(reparsed.len(), trees.len());
    for (tree, again) in trees.iter().zip(&reparsed) {
        assert_eq!(write_tree(again), write_tree(tree));
    }
}

#[test]
fn test_outline() {
    let tree = parse_tree_str("(NP (DT the) (NN cat))").unwrap();
    let expected = "[0] ROOT\n  └─ [1] NP\n      ├─ [2] DT \"the\"\n      └─ [3] NN \"cat\"\n";
    assert_eq!(tree.outline(), expected);
}

#[test]
fn test_outline_nested_prefixes() {
    let tree = parse_tree_str("(S (NP (NN dog)) (VP (VBZ runs)))").unwrap();
    let expected = "[0] ROOT\n  └─ [1] S\n      ├─ [2] NP\n      │   └─ [3] NN \"dog\"\n      \
                    └─ [4] VP\n          └─ [5] VBZ \"runs\"\n";
    assert_eq!(tree.outline(), expected);
}

#[test]
fn test_builder_direct_use() {
    let mut builder = ParseTreeBuilder::new();
    assert!(builder.finish_tree().is_none());

    let root = builder.init_next(4);
    let np = builder.add_non_terminal(root, "NP");
    builder.add_terminal(np, "NN", "dogs");
    builder.discard();
    assert!(builder.finish_tree().is_none());

    let root = builder.init_next(4);
    builder.add_terminal(root, "UH", "hi");
    let tree = builder.finish_tree().unwrap();
    assert_eq!(tree.words(), vec!["hi"]);
    assert!(tree.is_valid());
}
