//! Read-only queries over a built [ParseTree](crate::model::ParseTree).
//!
//! Queries are inherent methods of `ParseTree`, grouped by concern:
//! * [navigation] - parent, children, siblings, terminal collection
//! * [paths] - root paths, lowest common ancestors, unary chains, tag paths,
//!   IOB ancestor chains
//! * [locator] - mapping words back onto terminals
//! * [features] - tags describing the constituent spanning a set of words
//!
//! None of them mutates the tree. "No answer" is a value (`None`, empty
//! `Vec`), never an error.

pub mod features;
pub mod locator;
pub mod navigation;
pub mod paths;

pub use features::{DEFAULT_NO_VALUE, SyntacticFeatures};
pub use locator::find_subsequence;
pub use paths::NodePath;
