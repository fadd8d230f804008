//! Trait for constructing constituency trees during parsing.
//!
//! The [`TreeBuilder`] trait decouples the bracket parser from concrete tree
//! representations. The parser calls builder methods as it scans the token
//! stream, and the builder assembles whatever tree structure it wants.
//!
//! # Built-in implementation
//! * [`ParseTreeBuilder`] - Builds the arena [`ParseTree`]
//!
//! # Builder lifecycle
//! A builder can construct multiple trees sequentially:
//!
//! ```text
//! Empty ──→ init_next() ──→ Building ──→ add_* ──→ finish_tree() ──→ Empty
//!   ↑                          │                                     │
//!   │                          └──────────→ discard() ───────────────┤
//!   └────────────────────────────────────────────────────────────────┘
//! ```
// Imports for doc links
#[allow(unused_imports)]
use crate::model::{ParseTree, ParseTreeBuilder};

// =#========================================================================#=
// TREE BUILDER (trait)
// =#========================================================================T=
/// Abstraction for constructing trees during parsing.
///
/// The parser keeps the cursor (the currently open node) itself and passes
/// the parent explicitly, so builders never need to track where they are.
///
/// # Implementing this trait
/// The parser drives the lifecycle:
///
/// 1. [`init_next`](Self::init_next) -> prepare a new tree and create its root
/// 2. [`add_non_terminal`](Self::add_non_terminal),
///    [`add_terminal`](Self::add_terminal) -> build structure in pre-order
/// 3. [`finish_tree`](Self::finish_tree) -> finalize and return the tree,
///    or [`discard`](Self::discard) if the input turned out malformed
pub trait TreeBuilder {
    /// The type used to identify nodes during construction.
    ///
    /// Returned by the `add_*` methods, then passed to subsequent calls to
    /// connect parent-child relationships.
    type NodeIdx: Copy;

    /// The tree type produced by this builder.
    type Tree;

    /// Prepares the builder for constructing a new tree and creates its root.
    ///
    /// # Arguments
    /// * `capacity` — Expected number of nodes (hint for allocation)
    fn init_next(&mut self, capacity: usize) -> Self::NodeIdx;

    /// Adds a non-terminal as the last child of `parent`.
    fn add_non_terminal(&mut self, parent: Self::NodeIdx, tag: &str) -> Self::NodeIdx;

    /// Adds a terminal (word with its part-of-speech tag) as the last child
    /// of `parent`.
    fn add_terminal(&mut self, parent: Self::NodeIdx, tag: &str, word: &str) -> Self::NodeIdx;

    /// Finalizes the building process and returns the resulting tree.
    ///
    /// Transitions builder from a "construction" state to an "empty" state.
    /// Returns `None` if no tree was initialized.
    fn finish_tree(&mut self) -> Option<Self::Tree>;

    /// Drops the tree under construction, if any.
    fn discard(&mut self) {
        let _ = self.finish_tree();
    }
}
