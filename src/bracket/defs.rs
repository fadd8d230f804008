//! Constants for the bracketed parse tree format.

/// Opens a constituent
pub(crate) const OPEN_BRACKET: &str = "(";

/// Closes a constituent
pub(crate) const CLOSE_BRACKET: &str = ")";

/// Average number of tokens per node (`( TAG word )` or `( TAG ... )`),
/// used to pre-allocate the arena
pub(crate) const TOKENS_PER_NODE_GUESS: usize = 3;
