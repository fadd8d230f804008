//! Provides the arena-based constituency tree.
//!
//! Provides core data structures for representing parse trees:
//! * [ParseTree] - Tree structure using the arena pattern
//! * [NodeId] as type used to index nodes in a tree
//! * [PreOrderIter] and [PostOrderIter] for stack-based traversal

use crate::model::config::TreeConfig;
use crate::model::node::Node;

/// Index of a node in a tree (arena).
pub type NodeId = usize;

/// Index of the root; the root is always the first node created.
pub const ROOT_ID: NodeId = 0;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A constituency parse tree represented using the arena pattern on [Node].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeId].
/// Parent links are plain indices, so upward navigation is O(1) and node
/// identity comparison is integer equality.
///
/// # Structure
/// - All nodes (root, non-terminals and terminals) are stored in the arena,
///   in the order they were created while parsing (pre-order).
/// - The root is the node with id [ROOT_ID] and is tagged with
///   [`TreeConfig::root_label`].
/// - Terminal ids are additionally kept in left-to-right order, so the i-th
///   word of the sentence resolves to its node in O(1).
///
/// # Construction
/// Trees are built by a [TreeBuilder](crate::model::TreeBuilder) driven by
/// the [BracketParser](crate::bracket::BracketParser) and are read-only
/// afterward.
#[derive(Debug, Clone)]
pub struct ParseTree {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node>,

    /// Terminal node ids, left to right
    terminals: Vec<NodeId>,

    /// Conventions the tree was built with
    config: TreeConfig,
}

// ============================================================================
// Construction (crate)
// ============================================================================
impl ParseTree {
    /// Creates a tree holding only a root tagged with the configured root label.
    ///
    /// # Arguments
    /// * `config` - Conventions for this tree
    /// * `capacity` - Expected number of nodes
    pub(crate) fn with_root(config: TreeConfig, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::new_root(ROOT_ID, config.root_label().to_string()));
        ParseTree {
            nodes,
            terminals: Vec::new(),
            config,
        }
    }

    /// Adds a non-terminal as last child of `parent`, returning its id.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds or a terminal.
    pub(crate) fn add_non_terminal(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.nodes.len();
        self.nodes
            .push(Node::new_non_terminal(id, tag.to_string(), parent));
        self.nodes[parent].push_child(id);
        id
    }

    /// Adds a terminal as last child of `parent`, returning its id.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds or a terminal.
    pub(crate) fn add_terminal(&mut self, parent: NodeId, tag: &str, word: &str) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new_terminal(
            id,
            tag.to_string(),
            word.to_string(),
            parent,
        ));
        self.nodes[parent].push_child(id);
        self.terminals.push(id);
        id
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl ParseTree {
    /// Returns the id of the root.
    pub fn root_id(&self) -> NodeId {
        ROOT_ID
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &Node {
        &self[ROOT_ID]
    }

    /// Returns a reference to the node with the given id.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    pub fn node(&self, id: NodeId) -> &Node {
        &self[id]
    }

    /// Returns the node with the given id, or `None` if out of bounds.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Returns all nodes in creation (pre-)order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the conventions this tree was built with.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Returns the number of nodes, root included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of terminals (words).
    pub fn num_terminals(&self) -> usize {
        self.terminals.len()
    }

    /// Returns the number of non-terminals, root included.
    pub fn num_non_terminals(&self) -> usize {
        self.nodes.len() - self.terminals.len()
    }

    /// Returns the terminal ids of the whole tree, left to right.
    pub fn terminals(&self) -> &[NodeId] {
        &self.terminals
    }

    /// Returns the id of the `index`-th terminal (0-based word position).
    pub fn terminal_at(&self, index: usize) -> Option<NodeId> {
        self.terminals.get(index).copied()
    }

    /// Returns the words of the sentence, left to right.
    pub fn words(&self) -> Vec<&str> {
        self.terminals
            .iter()
            .filter_map(|&id| self.nodes[id].word())
            .collect()
    }

    /// Returns the part-of-speech tags of the sentence, left to right.
    pub fn tags(&self) -> Vec<&str> {
        self.terminals
            .iter()
            .map(|&id| self.nodes[id].tag())
            .collect()
    }
}

// ============================================================================
// Validation (pub)
// ============================================================================
impl ParseTree {
    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - The root is at [ROOT_ID], has no parent, carries the root label
    ///   and is a non-terminal
    /// - All node ids match their position in the arena
    /// - Exactly one node has no parent
    /// - Every non-terminal has at least one child, and every child points
    ///   back to it as parent
    /// - Every non-root node occurs exactly once among its parent's children
    /// - The terminal index lists exactly the terminals in left-to-right order
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        let Some(root) = self.nodes.first() else {
            return false;
        };
        if !root.is_root() || root.is_terminal() || root.tag() != self.config.root_label() {
            return false;
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if node.id() != index {
                return false;
            }

            if node.is_non_terminal() && !node.has_children() {
                return false;
            }

            for &child in node.children() {
                match self.nodes.get(child) {
                    Some(c) if c.parent() == Some(index) => {}
                    _ => return false,
                }
            }

            match node.parent() {
                None if index != ROOT_ID => return false,
                None => {}
                Some(parent) => {
                    let Some(p) = self.nodes.get(parent) else {
                        return false;
                    };
                    let occurrences = p.children().iter().filter(|&&c| c == index).count();
                    if occurrences != 1 {
                        return false;
                    }
                }
            }
        }

        let in_order: Vec<NodeId> = self
            .pre_order_iter()
            .filter(|n| n.is_terminal())
            .map(|n| n.id())
            .collect();

        in_order == self.terminals
    }
}

impl std::ops::Index<NodeId> for ParseTree {
    type Output = Node;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index]
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
impl ParseTree {
    /// Renders an indented outline of the tree.
    ///
    /// # Example Output
    /// ```text
    /// [0] ROOT
    ///   └─ [1] S
    ///       ├─ [2] NP
    ///       │   └─ [3] NN "dog"
    ///       └─ [4] VP
    ///           └─ [5] VBZ "runs"
    /// ```
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_node(&mut out, ROOT_ID, "", true);
        out
    }

    /// Helper function to recursively render a node and its children.
    fn outline_node(&self, out: &mut String, id: NodeId, prefix: &str, is_last: bool) {
        let node = &self.nodes[id];

        let connector = if prefix.is_empty() {
            ""
        } else if is_last {
            "└─ "
        } else {
            "├─ "
        };

        let line = match node.word() {
            Some(word) => format!("{prefix}{connector}[{id}] {} \"{word}\"\n", node.tag()),
            None => format!("{prefix}{connector}[{id}] {}\n", node.tag()),
        };
        out.push_str(&line);

        let new_prefix = if prefix.is_empty() {
            "  ".to_string()
        } else {
            format!("{}{}   ", prefix, if is_last { " " } else { "│" })
        };

        let children = node.children();
        for (i, &child) in children.iter().enumerate() {
            self.outline_node(out, child, &new_prefix, i + 1 == children.len());
        }
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl ParseTree {
    /// Returns an iterator over the whole tree in pre-order
    /// (parents before children, children left to right).
    ///
    /// Pre-order equals the creation order of nodes, so ids come out sorted.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self, ROOT_ID)
    }

    /// Returns an iterator over the subtree below (and including) `id` in pre-order.
    pub fn pre_order_from(&self, id: NodeId) -> PreOrderIter<'_> {
        PreOrderIter::new(self, id)
    }

    /// Returns an iterator over the whole tree in post-order
    /// (children before parents).
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self, ROOT_ID)
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
pub struct PreOrderIter<'a> {
    tree: &'a ParseTree,
    stack: Vec<NodeId>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a ParseTree, start: NodeId) -> Self {
        let mut stack = Vec::new();
        if start < tree.nodes.len() {
            stack.push(start);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        // Push children in reverse, so leftmost is processed first
        self.stack.extend(node.children().iter().rev());

        Some(node)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
pub struct PostOrderIter<'a> {
    tree: &'a ParseTree,
    stack: Vec<(NodeId, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a ParseTree, start: NodeId) -> Self {
        let mut stack = Vec::new();
        if start < tree.nodes.len() {
            stack.push((start, false));
        }
        PostOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let node = &self.tree[index];

            if children_visited || node.is_terminal() {
                return Some(node);
            }

            self.stack.push((index, true));
            self.stack
                .extend(node.children().iter().rev().map(|&c| (c, false)));
        }
        None
    }
}
