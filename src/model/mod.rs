//! Data model for constituency parse trees.
//!
//! # Tree representation
//! Trees are represented by [ParseTree], which uses the arena pattern to store
//! [Node]s referenced by [NodeId]. Each node's [Payload] is either a list of
//! children (non-terminal) or a word (terminal); parents are plain indices.
//!
//! # Building trees
//! Trees are constructed during parsing via the [TreeBuilder] trait, which
//! decouples the [BracketParser](crate::bracket::BracketParser) from concrete
//! tree types:
//!
//! - [ParseTreeBuilder] → [ParseTree]
//!
//! # Conventions
//! Root label and path glues are fixed per tree by a [TreeConfig].

pub mod config;
pub mod node;
pub mod parse_tree_builder;
pub mod tree;
pub mod tree_builder;

pub use config::TreeConfig;
pub use node::{Node, Payload};
pub use parse_tree_builder::ParseTreeBuilder;
pub use tree::{NodeId, ParseTree, ROOT_ID};
pub use tree_builder::TreeBuilder;
