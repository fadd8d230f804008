//! Bracketed constituency trees (Penn Treebank style).
//!
//! Parse strings look like `(S (NP (DT the) (NN cat)) (VP (VBZ sleeps)))`:
//! every constituent is `(TAG child ...)` and every terminal is `(TAG word)`.
//! Trees are wrapped in an anonymous root bracket, which is added when missing.
//!
//! # Parsing
//! * [BracketParser] - configurable parser, generic over the
//!   [TreeBuilder](crate::model::TreeBuilder)
//! * [parse_str] - quick API with default conventions
//!
//! # Writing
//! * [write_tree] and [write_subtree]

pub(crate) mod defs;
pub mod parser;
pub mod writer;

pub use parser::{BracketIterator, BracketParser};
pub use writer::{write_subtree, write_tree};

use crate::model::ParseTree;
use crate::parser::ParsingError;

/// Parses a single bracketed parse string with default conventions.
///
/// # Example
/// ```
/// let tree = synfeat::bracket::parse_str("(NP (DT the) (NN cat))").unwrap();
/// assert_eq!(tree.num_terminals(), 2);
/// ```
pub fn parse_str(parse: &str) -> Result<ParseTree, ParsingError> {
    BracketParser::new_defaults().parse_str(parse)
}
