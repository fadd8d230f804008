//! Token-level and span-level representations of a tagged segment.

use crate::iob::tag::Token;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

// =#========================================================================#=
// TOKEN SEQUENCE
// =#========================================================================#=
/// Tagged tokens of one segment, keyed and ordered by token id.
///
/// Serializes as a map from token id to token, e.g.
/// `{"2": {"label": "B", "tag": "B"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence(BTreeMap<usize, Token>);

impl TokenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence from tokens, numbering them from 0.
    ///
    /// # Example
    /// ```
    /// use synfeat::iob::{Tag, Token, TokenSequence};
    ///
    /// let seq = TokenSequence::from_tokens([Token::new("A", Tag::Begin), Token::out("O")]);
    /// assert_eq!(seq.ids().collect::<Vec<_>>(), vec![0, 1]);
    /// ```
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        tokens.into_iter().enumerate().collect()
    }

    /// Sets the token at `id`, returning the token it replaced.
    pub fn insert(&mut self, id: usize, token: Token) -> Option<Token> {
        self.0.insert(id, token)
    }

    pub fn get(&self, id: usize) -> Option<&Token> {
        self.0.get(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(id, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Token)> {
        self.0.iter().map(|(&id, token)| (id, token))
    }

    /// Iterates over token ids in order.
    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    /// Iterates over tokens in id order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.0.values()
    }

    /// Smallest and largest token id, or `None` if empty.
    pub fn id_range(&self) -> Option<(usize, usize)> {
        let first = *self.0.keys().next()?;
        let last = *self.0.keys().next_back()?;
        Some((first, last))
    }

    /// Copies all tokens of `other` into this sequence, replacing tokens
    /// with the same id.
    pub fn overlay(&mut self, other: TokenSequence) {
        self.0.extend(other.0);
    }
}

impl FromIterator<(usize, Token)> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = (usize, Token)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TokenSequence {
    type Item = (usize, Token);
    type IntoIter = btree_map::IntoIter<usize, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// =#========================================================================#=
// SPAN
// =#========================================================================#=
/// A labeled chunk and the ids of the tokens it covers, ascending.
///
/// The token ids need not be consecutive (non-contiguous span).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub label: String,
    pub tokens: Vec<usize>,
}

impl Span {
    pub fn new(label: impl Into<String>, tokens: Vec<usize>) -> Self {
        Self {
            label: label.into(),
            tokens,
        }
    }

    /// Smallest covered token id.
    pub fn first(&self) -> Option<usize> {
        self.tokens.iter().min().copied()
    }

    /// Largest covered token id.
    pub fn last(&self) -> Option<usize> {
        self.tokens.iter().max().copied()
    }

    /// Returns `true` if the covered ids form one consecutive run.
    ///
    /// # Example
    /// ```
    /// use synfeat::iob::Span;
    ///
    /// assert!(Span::new("A", vec![3, 4, 5]).is_contiguous());
    /// assert!(!Span::new("A", vec![3, 5]).is_contiguous());
    /// ```
    pub fn is_contiguous(&self) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => {
                let mut sorted = self.tokens.clone();
                sorted.sort_unstable();
                sorted.dedup();
                sorted.len() == last - first + 1
            }
            _ => true,
        }
    }
}
