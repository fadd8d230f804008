//! Constants for IOB tagging.

/// Default label of out-of-chunk tokens
pub const DEFAULT_OUT_LABEL: &str = "O";

/// Default glue between label and tag in IOB strings
pub const DEFAULT_GLUE: &str = "-";
