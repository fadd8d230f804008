//! Node module for constituency tree representation.

use crate::model::tree::NodeId;
use serde::{Deserialize, Serialize};

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node (constituent) in a constituency parse tree.
///
/// The payload of a node is either:
/// - **NonTerminal**: a non-empty ordered sequence of child node ids
/// - **Terminal**: a single word; the tag is its part-of-speech tag
///
/// # Invariants
/// - `id` is the index in the arena, assigned in parse order (pre-order)
/// - `parent` is `None` only for the root
/// - A terminal never has children, a non-terminal never has a word
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    tag: String,
    parent: Option<NodeId>,
    payload: Payload,
}

/// Content of a [Node]: its children or its word.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub enum Payload {
    /// Children of a non-terminal, left to right
    NonTerminal(Vec<NodeId>),
    /// Word of a terminal
    Terminal(String),
}

impl Node {
    /// Creates a new root node (no parent, no children yet).
    ///
    /// # Arguments
    /// * `id` - The unique id of this node in the tree (arena)
    /// * `tag` - The reserved root label
    pub fn new_root(id: NodeId, tag: String) -> Self {
        Node {
            id,
            tag,
            parent: None,
            payload: Payload::NonTerminal(Vec::new()),
        }
    }

    /// Creates a new non-terminal node below `parent` (no children yet).
    pub fn new_non_terminal(id: NodeId, tag: String, parent: NodeId) -> Self {
        Node {
            id,
            tag,
            parent: Some(parent),
            payload: Payload::NonTerminal(Vec::new()),
        }
    }

    /// Creates a new terminal node below `parent`.
    pub fn new_terminal(id: NodeId, tag: String, word: String, parent: NodeId) -> Self {
        Node {
            id,
            tag,
            parent: Some(parent),
            payload: Payload::Terminal(word),
        }
    }

    /// Returns the id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the tag (phrase category or part-of-speech tag).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the id of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the payload of this node.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns the word if this is a terminal, else `None`.
    pub fn word(&self) -> Option<&str> {
        match &self.payload {
            Payload::Terminal(word) => Some(word),
            Payload::NonTerminal(_) => None,
        }
    }

    /// Returns the children; empty for terminals.
    pub fn children(&self) -> &[NodeId] {
        match &self.payload {
            Payload::NonTerminal(children) => children,
            Payload::Terminal(_) => &[],
        }
    }

    /// Returns `true` if this node is a terminal (word-bearing leaf).
    pub fn is_terminal(&self) -> bool {
        matches!(self.payload, Payload::Terminal(_))
    }

    /// Returns `true` if this node is a non-terminal.
    pub fn is_non_terminal(&self) -> bool {
        matches!(self.payload, Payload::NonTerminal(_))
    }

    /// Returns `true` if this node is the root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns `true` if this node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Appends a child id to a non-terminal.
    ///
    /// # Panics
    /// Panics if called on a terminal.
    pub(crate) fn push_child(&mut self, child: NodeId) {
        match &mut self.payload {
            Payload::NonTerminal(children) => children.push(child),
            Payload::Terminal(_) => panic!("Cannot add child to terminal node {}", self.id),
        }
    }
}
