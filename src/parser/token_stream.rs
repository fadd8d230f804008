//! Low-level token stream over a bracketed parse string.
//!
//! This module provides [TokenStream] for scanning a parse string as a flat
//! sequence of whitespace-delimited tokens, where every parenthesis is a token
//! of its own. Tokens borrow from the input, so tokenizing does not allocate
//! per token.

use crate::bracket::defs::{CLOSE_BRACKET, OPEN_BRACKET};

/// Splits a parse string into tokens: each `(` and `)` is a token, all other
/// tokens are maximal runs of non-whitespace, non-bracket characters.
///
/// # Examples
/// ```
/// # use synfeat::parser::token_stream::tokenize;
/// assert_eq!(tokenize("(NP(DT the) )"), vec!["(", "NP", "(", "DT", "the", ")", ")"]);
/// ```
pub fn tokenize(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        if c == '(' || c == ')' || c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(&input[s..i]);
            }
            if c == '(' {
                tokens.push(OPEN_BRACKET);
            } else if c == ')' {
                tokens.push(CLOSE_BRACKET);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(&input[s..]);
    }

    tokens
}

/// Returns `true` if the token is an opening or closing bracket.
#[inline]
pub fn is_bracket(token: &str) -> bool {
    token == OPEN_BRACKET || token == CLOSE_BRACKET
}

// =#========================================================================#=
// TOKEN STREAM
// =#========================================================================#=
/// A cursor over a flat token sequence with support for peeking ahead,
/// consuming, and context extraction for error reporting.
///
/// # Example
/// ```
/// use synfeat::parser::token_stream::TokenStream;
///
/// let mut stream = TokenStream::for_str("(NN dog)");
/// assert_eq!(stream.peek(), Some("("));
/// assert_eq!(stream.peek_at(1), Some("NN"));
/// stream.advance(2);
/// assert_eq!(stream.next_token(), Some("dog"));
/// assert_eq!(stream.position(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a new stream over already split tokens.
    pub fn new(tokens: Vec<&'a str>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Creates a new stream by [tokenizing](tokenize) the given string.
    pub fn for_str(input: &'a str) -> Self {
        Self::new(tokenize(input))
    }

    /// Peeks at the current token without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&'a str> {
        self.peek_at(0)
    }

    /// Peeks at the token `offset` positions after the current one.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<&'a str> {
        self.tokens.get(self.pos + offset).copied()
    }

    /// Gets the current token and advances the position (consumes it).
    #[inline]
    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes `n` tokens (or all remaining ones, if fewer are left).
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.tokens.len());
    }

    /// Returns `true` if all tokens were consumed.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Returns the current position (number of consumed tokens).
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the total number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the stream holds no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Counts opening and closing brackets over the whole stream.
    pub fn count_brackets(&self) -> (usize, usize) {
        self.tokens.iter().fold((0, 0), |(open, close), t| match *t {
            OPEN_BRACKET => (open + 1, close),
            CLOSE_BRACKET => (open, close + 1),
            _ => (open, close),
        })
    }

    /// Returns up to `k` tokens from the current position joined by a space,
    /// for error context.
    pub fn context(&self, k: usize) -> String {
        let end = (self.pos + k).min(self.tokens.len());
        self.tokens[self.pos.min(end)..end].join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_inserts_bracket_boundaries() {
        let tokens = tokenize("((S (NP (NN dog))(VP (VBZ runs))))");
        assert_eq!(
            tokens,
            vec![
                "(", "(", "S", "(", "NP", "(", "NN", "dog", ")", ")", "(", "VP", "(", "VBZ",
                "runs", ")", ")", ")", ")"
            ]
        );
    }

    #[test]
    fn tokenize_handles_mixed_whitespace() {
        let tokens = tokenize(" (NN\tdog)\n");
        assert_eq!(tokens, vec!["(", "NN", "dog", ")"]);
        assert!(tokenize(" \n\t").is_empty());
    }

    #[test]
    fn tokenize_keeps_unicode_words() {
        let tokens = tokenize("(NN café)");
        assert_eq!(tokens, vec!["(", "NN", "café", ")"]);
    }

    #[test]
    fn context_is_clamped_at_end() {
        let mut stream = TokenStream::for_str("(NN dog)");
        stream.advance(3);
        assert_eq!(stream.context(10), ")");
        stream.advance(5);
        assert!(stream.is_eof());
        assert_eq!(stream.context(10), "");
        assert_eq!(stream.position(), 4);
    }

    #[test]
    fn counts_brackets() {
        let stream = TokenStream::for_str("((NP (DT the)");
        assert_eq!(stream.count_brackets(), (3, 1));
    }
}
