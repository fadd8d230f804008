//! Conventions shared by tree construction and path queries.

use serde::{Deserialize, Serialize};

/// Default tag of the (anonymous) root node
pub const DEFAULT_ROOT_LABEL: &str = "ROOT";

/// Default glue for the upward part of a tag path
pub const DEFAULT_UP_GLUE: &str = "/";

/// Default glue for the downward part of a tag path
pub const DEFAULT_DOWN_GLUE: &str = "\\";

/// Default glue between `B`/`I` and the tag in an IOB chain
pub const DEFAULT_IOB_GLUE: &str = "-";

/// Immutable tree conventions, fixed when a tree is built.
///
/// Every [ParseTree](crate::model::ParseTree) carries the configuration it
/// was built with, so path queries render with the same glue the caller
/// configured.
///
/// # Example
/// ```
/// use synfeat::model::TreeConfig;
///
/// let config = TreeConfig::default().with_root_label("TOP").with_glues(">", "<");
/// assert_eq!(config.root_label(), "TOP");
/// assert_eq!(config.up_glue(), ">");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    root_label: String,
    up_glue: String,
    down_glue: String,
    iob_glue: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            up_glue: DEFAULT_UP_GLUE.to_string(),
            down_glue: DEFAULT_DOWN_GLUE.to_string(),
            iob_glue: DEFAULT_IOB_GLUE.to_string(),
        }
    }
}

impl TreeConfig {
    /// Sets the tag given to the root node.
    pub fn with_root_label(mut self, root_label: impl Into<String>) -> Self {
        self.root_label = root_label.into();
        self
    }

    /// Sets the up and down glue used by tag paths and IOB chains.
    pub fn with_glues(mut self, up: impl Into<String>, down: impl Into<String>) -> Self {
        self.up_glue = up.into();
        self.down_glue = down.into();
        self
    }

    /// Sets the glue between the `B`/`I` marker and the tag in IOB chains.
    pub fn with_iob_glue(mut self, glue: impl Into<String>) -> Self {
        self.iob_glue = glue.into();
        self
    }

    /// Tag of the root node.
    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    /// Glue of the upward path.
    pub fn up_glue(&self) -> &str {
        &self.up_glue
    }

    /// Glue of the downward path.
    pub fn down_glue(&self) -> &str {
        &self.down_glue
    }

    /// Glue between `B`/`I` and the tag in IOB chains.
    pub fn iob_glue(&self) -> &str {
        &self.iob_glue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: TreeConfig = serde_json::from_str(r#"{"root_label": "TOP"}"#).unwrap();
        assert_eq!(config.root_label(), "TOP");
        assert_eq!(config.up_glue(), DEFAULT_UP_GLUE);
        assert_eq!(config.down_glue(), DEFAULT_DOWN_GLUE);
        assert_eq!(config.iob_glue(), DEFAULT_IOB_GLUE);
    }
}
