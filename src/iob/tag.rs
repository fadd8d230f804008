//! Chunk tags, tag sets and tagged tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Requested tag set is neither `IOB` nor `IOBE`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid tag set {0:?} (expected IOB or IOBE)")]
pub struct InvalidTagSetError(pub String);

// =#========================================================================#=
// TAG
// =#========================================================================#=
/// Position of a token relative to its chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// First token of a chunk
    #[serde(rename = "B")]
    Begin,
    /// Any other token of a chunk
    #[serde(rename = "I")]
    Inside,
    /// Last token of a chunk (IOBE only)
    #[serde(rename = "E")]
    End,
    /// Outside of any chunk
    #[serde(rename = "O")]
    Out,
}

impl Tag {
    /// Reads a tag symbol; anything but `B`, `I` or `E` is out-of-chunk.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "B" => Tag::Begin,
            "I" => Tag::Inside,
            "E" => Tag::End,
            _ => Tag::Out,
        }
    }

    /// Returns the one-letter symbol of this tag.
    pub fn symbol(&self) -> &'static str {
        match self {
            Tag::Begin => "B",
            Tag::Inside => "I",
            Tag::End => "E",
            Tag::Out => "O",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =#========================================================================#=
// TAG SET
// =#========================================================================#=
/// Tagging scheme used when chunks are written back as tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TagSet {
    /// Begin, Inside, Out
    #[default]
    #[serde(rename = "IOB")]
    Iob,
    /// Begin, Inside, End, Out: the last token of a multi-token chunk is `E`
    #[serde(rename = "IOBE")]
    Iobe,
}

impl FromStr for TagSet {
    type Err = InvalidTagSetError;

    /// Parses `IOB` or `IOBE`, ignoring case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_uppercase().as_str() {
            "IOB" => Ok(TagSet::Iob),
            "IOBE" => Ok(TagSet::Iobe),
            _ => Err(InvalidTagSetError(name.to_string())),
        }
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagSet::Iob => write!(f, "IOB"),
            TagSet::Iobe => write!(f, "IOBE"),
        }
    }
}

// =#========================================================================#=
// TOKEN
// =#========================================================================#=
/// Label and tag of a single token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub label: String,
    pub tag: Tag,
}

impl Token {
    pub fn new(label: impl Into<String>, tag: Tag) -> Self {
        Self {
            label: label.into(),
            tag,
        }
    }

    /// Creates an out-of-chunk token.
    pub fn out(label: impl Into<String>) -> Self {
        Self::new(label, Tag::Out)
    }

    /// Builds a token from a row of fields: `[label, tag]`, or a single
    /// field used as both label and tag (e.g. a bare `O`).
    ///
    /// Returns `None` for an empty row.
    ///
    /// # Example
    /// ```
    /// use synfeat::iob::{Tag, Token};
    ///
    /// assert_eq!(Token::from_fields(&["ARG1", "B"]), Some(Token::new("ARG1", Tag::Begin)));
    /// assert_eq!(Token::from_fields(&["O"]), Some(Token::out("O")));
    /// assert_eq!(Token::from_fields(&[]), None);
    /// ```
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        match fields {
            [] => None,
            [single] => Some(Self::new(*single, Tag::from_symbol(single))),
            [label, tag, ..] => Some(Self::new(*label, Tag::from_symbol(tag))),
        }
    }

    /// Returns `true` if this token is outside of any chunk.
    pub fn is_out(&self) -> bool {
        self.tag == Tag::Out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_set_from_str_ignores_case() {
        assert_eq!("iobe".parse::<TagSet>(), Ok(TagSet::Iobe));
        assert_eq!("IOB".parse::<TagSet>(), Ok(TagSet::Iob));
        assert_eq!(
            "BILOU".parse::<TagSet>(),
            Err(InvalidTagSetError("BILOU".to_string()))
        );
    }

    #[test]
    fn unknown_symbols_are_out() {
        assert_eq!(Tag::from_symbol("X"), Tag::Out);
        assert_eq!(Tag::from_symbol("b"), Tag::Out);
        assert_eq!(Tag::from_symbol("E"), Tag::End);
    }
}
