//! Bracket format writing for [ParseTree]s.

use crate::bracket::defs::{CLOSE_BRACKET, OPEN_BRACKET};
use crate::model::{NodeId, ParseTree, ROOT_ID};
use std::fmt;

/// Extra buffer in bracket string length/capacity estimate
const BUFFER_CHARS: usize = 4;

/// Returns the bracket representation of the whole tree.
///
/// The root is written as an anonymous bracket, so the output of a parsed
/// tree can be parsed again into a structurally identical tree.
///
/// # Example
/// ```
/// use synfeat::bracket::{write_tree, BracketParser};
///
/// let mut parser = BracketParser::new_defaults();
/// let tree = parser.parse_str("(S (NP (NN Dogs)) (VP (VBP bark)))").unwrap();
/// assert_eq!(write_tree(&tree), "((S (NP (NN Dogs)) (VP (VBP bark))))");
/// ```
pub fn write_tree(tree: &ParseTree) -> String {
    let mut out = String::with_capacity(estimate_len(tree, ROOT_ID));
    build_bracket(tree, &mut out, ROOT_ID);
    out
}

/// Returns the bracket representation of the subtree below (and including) `id`.
///
/// The root keeps its anonymous form; every other node is written as
/// `(TAG ...)`.
///
/// # Panics
/// Panics if `id` is out of bounds.
pub fn write_subtree(tree: &ParseTree, id: NodeId) -> String {
    let mut out = String::with_capacity(estimate_len(tree, id));
    build_bracket(tree, &mut out, id);
    out
}

// Recursive helper for building the bracket string
fn build_bracket(tree: &ParseTree, out: &mut String, id: NodeId) {
    let node = &tree[id];
    out.push_str(OPEN_BRACKET);

    if let Some(word) = node.word() {
        out.push_str(node.tag());
        out.push(' ');
        out.push_str(word);
    } else {
        if !node.is_root() {
            out.push_str(node.tag());
            out.push(' ');
        }
        for (i, &child) in node.children().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            build_bracket(tree, out, child);
        }
    }

    out.push_str(CLOSE_BRACKET);
}

fn estimate_len(tree: &ParseTree, id: NodeId) -> usize {
    tree.pre_order_from(id)
        .map(|n| n.tag().len() + n.word().map_or(0, str::len) + BUFFER_CHARS)
        .sum()
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&write_tree(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::BracketParser;

    #[test]
    fn subtree_of_terminal() {
        let tree = BracketParser::new_defaults()
            .parse_str("(NP (DT the) (NN cat))")
            .unwrap();
        assert_eq!(write_subtree(&tree, 2), "(DT the)");
        assert_eq!(write_subtree(&tree, 1), "(NP (DT the) (NN cat))");
    }

    #[test]
    fn display_matches_write_tree() {
        let tree = BracketParser::new_defaults()
            .parse_str("((X (Y z)))")
            .unwrap();
        assert_eq!(tree.to_string(), "((X (Y z)))");
    }
}
