//! Read-only structural queries over a [ParseTree].
//!
//! All queries take [NodeId]s of the queried tree; an id out of bounds is a
//! contract violation and panics, like indexing the arena does.

use crate::model::{NodeId, ParseTree};

impl ParseTree {
    /// Returns the parent of `id`, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent()
    }

    /// Returns the children of `id`, left to right; empty for terminals.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self[id].children()
    }

    /// Returns the tag of `id`.
    pub fn tag(&self, id: NodeId) -> &str {
        self[id].tag()
    }

    /// Returns the word of `id` if it is a terminal.
    pub fn word(&self, id: NodeId) -> Option<&str> {
        self[id].word()
    }

    /// Returns `true` if `id` is a terminal.
    pub fn is_terminal(&self, id: NodeId) -> bool {
        self[id].is_terminal()
    }

    /// Returns `true` if `id` is the root.
    pub fn is_root(&self, id: NodeId) -> bool {
        self[id].is_root()
    }

    /// Returns `true` if `id` has at least one child.
    pub fn has_children(&self, id: NodeId) -> bool {
        self[id].has_children()
    }

    /// Returns the full child sequence of the parent of `id`, including `id`
    /// itself. Empty for the root.
    ///
    /// # Example
    /// ```
    /// let tree = synfeat::bracket::parse_str("(NP (DT the) (NN cat))").unwrap();
    /// let cat = tree.terminal_at(1).unwrap();
    /// let the = tree.terminal_at(0).unwrap();
    /// assert_eq!(tree.siblings(cat), &[the, cat]);
    /// assert!(tree.siblings(tree.root_id()).is_empty());
    /// ```
    pub fn siblings(&self, id: NodeId) -> &[NodeId] {
        match self.parent(id) {
            Some(parent) => self.children(parent),
            None => &[],
        }
    }

    /// Returns the position of `id` among its siblings, or `None` for the root.
    pub fn sibling_position(&self, id: NodeId) -> Option<usize> {
        self.siblings(id).iter().position(|&s| s == id)
    }

    /// Collects all terminal descendants of `id` (itself, if terminal),
    /// left to right.
    pub fn terminals_of(&self, id: NodeId) -> Vec<NodeId> {
        self.pre_order_from(id)
            .filter(|n| n.is_terminal())
            .map(|n| n.id())
            .collect()
    }

    /// Returns the words below `id`, left to right.
    pub fn terminal_words_of(&self, id: NodeId) -> Vec<&str> {
        self.pre_order_from(id).filter_map(|n| n.word()).collect()
    }

    /// Returns the part-of-speech tags below `id`, left to right.
    pub fn terminal_tags_of(&self, id: NodeId) -> Vec<&str> {
        self.pre_order_from(id)
            .filter(|n| n.is_terminal())
            .map(|n| n.tag())
            .collect()
    }
}
