//! Synfeat is a library to derive structural features of words from
//! constituency parse trees, and to convert between token-level and
//! span-level IOB tagging.
//!
//! Core functionality provided:
//! - Bracket trees: Parse Penn Treebank style parse strings
//!   (`(S (NP (DT the) (NN cat)) (VP (VBZ sleeps)))`) into an arena
//!   [ParseTree](model::ParseTree), and write them back.
//! - Tree builder: You can use the provided [ParseTree](model::ParseTree) or
//!   provide your own [TreeBuilder](model::TreeBuilder) implementation.
//! - Queries: parent, children and siblings, terminal collection, root paths,
//!   lowest common ancestors (pairwise, or over a set of nodes with exact
//!   coverage), unary-chain collapsing, tag paths (`DT/NP/S\VP\VBZ`),
//!   IOB ancestor chains (`B-S/B-NP`), word-sequence lookup and
//!   [syntactic features](query::SyntacticFeatures).
//! - IOB codec: Convert between per-token `(label, tag)` sequences and
//!   labeled (possibly non-contiguous) spans under IOB or IOBE, re-tag,
//!   and fill gaps of interrupted spans. See [crate::iob].
//! - Configurability: root label and path glues per tree via
//!   [TreeConfig](model::TreeConfig); tag set, out label and contiguity per
//!   [IobTagger](iob::IobTagger). No global state.
//!
//! Trees are immutable once built, and no query ever fails on a lookup
//! miss: absent answers are `None` or empty.
//!
//! # Usage patterns
//! 1. Quick access with default settings: [parse_tree_str].
//! 2. Configure a [BracketParser](bracket::BracketParser) for full control
//!    over conventions, root tag removal and document splitting.
//!
//! ## Example
//! ```
//! use synfeat::parse_tree_str;
//!
//! let tree = parse_tree_str("(S (NP (DT the) (NN cat)) (VP (VBZ sleeps)))").unwrap();
//! assert_eq!(tree.words(), vec!["the", "cat", "sleeps"]);
//!
//! let the = tree.terminal_at(0).unwrap();
//! let sleeps = tree.terminal_at(2).unwrap();
//! assert_eq!(tree.tag(tree.lowest_common_ancestor(the, sleeps)), "S");
//! assert_eq!(tree.tag_path(the, sleeps), "DT/NP/S\\VP\\VBZ");
//! ```
//!
//! ## Example IOB codec
//! ```
//! use synfeat::iob::{IobTagger, Span, TagSet};
//!
//! let tagger = IobTagger::from_name("IOBE").unwrap();
//! let tokens = tagger.span_to_token(&[Span::new("ARG1", vec![2, 3, 4])], false);
//! let tags: Vec<String> = tokens.tokens().map(|t| t.tag.to_string()).collect();
//! assert_eq!(tags, vec!["B", "I", "E"]);
//! assert_eq!(tagger.tag_set(), TagSet::Iobe);
//! ```

pub mod bracket;
pub mod error;
pub mod iob;
pub mod model;
pub mod parser;
pub mod query;

pub use error::{Error, Result};

use crate::model::ParseTree;
use crate::parser::parsing_error::ParsingError;

// ============================================================================
// Quick Bracket API
// ============================================================================
/// Parses a bracketed parse string using default settings,
/// returning a [ParseTree].
///
/// See [`bracket::parse_str`] for full documentation of this convenience function.
pub fn parse_tree_str<S: AsRef<str>>(parse: S) -> std::result::Result<ParseTree, ParsingError> {
    bracket::parse_str(parse.as_ref())
}
