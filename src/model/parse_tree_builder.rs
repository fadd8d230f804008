//! Provides the [TreeBuilder] implementation for [ParseTree].

use crate::model::config::TreeConfig;
use crate::model::tree_builder::TreeBuilder;
use crate::model::{NodeId, ParseTree};

/// Builder that constructs [ParseTree] instances.
///
/// Every tree built carries a copy of the builder's [TreeConfig].
///
/// # Example
/// ```
/// use synfeat::model::{ParseTreeBuilder, TreeBuilder};
///
/// let mut builder = ParseTreeBuilder::new();
/// let root = builder.init_next(4);
/// let np = builder.add_non_terminal(root, "NP");
/// builder.add_terminal(np, "NN", "dogs");
/// let tree = builder.finish_tree().unwrap();
/// assert_eq!(tree.words(), vec!["dogs"]);
/// assert!(tree.is_valid());
/// ```
#[derive(Debug, Default)]
pub struct ParseTreeBuilder {
    config: TreeConfig,
    current_tree: Option<ParseTree>,
}

impl ParseTreeBuilder {
    /// Creates a new builder in the empty state, with default conventions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new builder in the empty state, with the given conventions.
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            config,
            current_tree: None,
        }
    }

    /// Returns the conventions given to built trees.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }
}

impl TreeBuilder for ParseTreeBuilder {
    type NodeIdx = NodeId;
    type Tree = ParseTree;

    fn init_next(&mut self, capacity: usize) -> NodeId {
        let tree = ParseTree::with_root(self.config.clone(), capacity);
        let root = tree.root_id();
        self.current_tree = Some(tree);
        root
    }

    fn add_non_terminal(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let tree = self.current_tree.as_mut().expect("init_next not called");
        tree.add_non_terminal(parent, tag)
    }

    fn add_terminal(&mut self, parent: NodeId, tag: &str, word: &str) -> NodeId {
        let tree = self.current_tree.as_mut().expect("init_next not called");
        tree.add_terminal(parent, tag, word)
    }

    fn finish_tree(&mut self) -> Option<ParseTree> {
        self.current_tree.take()
    }
}
