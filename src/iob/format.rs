//! String encoding of tagged tokens, e.g. `ARG1-B` or `B-ARG1`.

use crate::iob::defs::DEFAULT_GLUE;
use crate::iob::tag::Token;
use serde::{Deserialize, Serialize};

/// Where the tag goes relative to the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagOrder {
    /// `label<glue>tag`
    #[default]
    Suffix,
    /// `tag<glue>label`
    Prefix,
}

/// Encoding of a [Token] as a single string.
///
/// Out-of-chunk tokens are written as the bare label. Since the split
/// happens at the glue closest to the tag, labels may contain the glue.
///
/// # Example
/// ```
/// use synfeat::iob::{IobFormat, Tag, TagOrder, Token};
///
/// let suffix = IobFormat::default();
/// assert_eq!(suffix.split("Arg-1-B"), Token::new("Arg-1", Tag::Begin));
/// assert_eq!(suffix.join(&Token::new("Arg-1", Tag::Inside)), "Arg-1-I");
///
/// let prefix = IobFormat::new("-", TagOrder::Prefix);
/// assert_eq!(prefix.split("B-PER"), Token::new("PER", Tag::Begin));
/// assert_eq!(prefix.join(&Token::out("O")), "O");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IobFormat {
    glue: String,
    order: TagOrder,
}

impl Default for IobFormat {
    fn default() -> Self {
        Self::new(DEFAULT_GLUE, TagOrder::default())
    }
}

impl IobFormat {
    pub fn new(glue: impl Into<String>, order: TagOrder) -> Self {
        Self {
            glue: glue.into(),
            order,
        }
    }

    pub fn glue(&self) -> &str {
        &self.glue
    }

    pub fn order(&self) -> TagOrder {
        self.order
    }

    /// Splits an encoded token into label and tag.
    ///
    /// A string without glue is used as both label and tag, so a bare `O`
    /// is out-of-chunk.
    pub fn split(&self, encoded: &str) -> Token {
        let parts = match self.order {
            _ if self.glue.is_empty() => None,
            TagOrder::Suffix => encoded.rsplit_once(self.glue.as_str()),
            TagOrder::Prefix => encoded
                .split_once(self.glue.as_str())
                .map(|(tag, label)| (label, tag)),
        };

        let token = match parts {
            Some((label, tag)) => Token::from_fields(&[label, tag]),
            None => Token::from_fields(&[encoded]),
        };
        token.unwrap_or_else(|| Token::out(encoded))
    }

    /// Joins label and tag of a token into a string.
    pub fn join(&self, token: &Token) -> String {
        if token.is_out() {
            return token.label.clone();
        }
        let tag = token.tag.symbol();
        match self.order {
            TagOrder::Suffix => format!("{}{}{tag}", token.label, self.glue),
            TagOrder::Prefix => format!("{tag}{}{}", self.glue, token.label),
        }
    }
}
