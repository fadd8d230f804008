//! Structural features of a word span.
//!
//! For a span of words, the constituent covering exactly these words is
//! located (strict lowest common ancestor), lifted through its unary chain,
//! and described by its own tag, its parent's tag and its neighbors' tags.

use crate::model::{NodeId, ParseTree};
use serde::{Deserialize, Serialize};

/// Conventional placeholder for an absent feature value
pub const DEFAULT_NO_VALUE: &str = "NULL";

/// Tags describing the constituent that spans a set of words.
///
/// Every value is absent when no constituent covers the words exactly.
///
/// # Example
/// ```
/// use synfeat::query::SyntacticFeatures;
///
/// let tree = synfeat::bracket::parse_str("(S (NP (DT the) (NN cat)) (VP (VBZ sleeps)))").unwrap();
/// let feats = SyntacticFeatures::for_token_ids(&tree, &[0, 1]);
/// assert_eq!(feats.to_columns("NULL"), ["NP", "S", "NULL", "VP"]);
///
/// // 'sleeps' is lifted from VBZ to its unary parent VP
/// let feats = SyntacticFeatures::for_token_ids(&tree, &[2]);
/// assert_eq!(feats.to_columns("NULL"), ["VP", "S", "NP", "NULL"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntacticFeatures {
    pub self_tag: Option<String>,
    pub parent_tag: Option<String>,
    pub left_sibling_tag: Option<String>,
    pub right_sibling_tag: Option<String>,
}

impl SyntacticFeatures {
    /// Computes the features for the words at the given positions (0-based).
    pub fn for_token_ids(tree: &ParseTree, token_ids: &[usize]) -> Self {
        let nodes = tree.get_nodes_by_ids(token_ids);
        Self::for_terminals(tree, &nodes)
    }

    /// Computes the features for the given terminals.
    pub fn for_terminals(tree: &ParseTree, terminals: &[NodeId]) -> Self {
        let Some(covering) = tree.lowest_common_ancestor_of(terminals, true) else {
            return Self::default();
        };
        let node = tree.highest_self_node(covering);
        let tag_of = |id: NodeId| tree.tag(id).to_string();

        Self {
            self_tag: Some(tag_of(node)),
            parent_tag: tree.parent(node).map(tag_of),
            left_sibling_tag: tree.sibling_left(node).map(tag_of),
            right_sibling_tag: tree.sibling_right(node).map(tag_of),
        }
    }

    /// Renders the features as columns (self, parent, left sibling,
    /// right sibling), with `no_value` for absent ones.
    pub fn to_columns(&self, no_value: &str) -> [String; 4] {
        [
            &self.self_tag,
            &self.parent_tag,
            &self.left_sibling_tag,
            &self.right_sibling_tag,
        ]
        .map(|tag| tag.as_deref().unwrap_or(no_value).to_string())
    }
}
