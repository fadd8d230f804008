//! Error types for the bracketed parse tree parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting malformed parse strings. A failed parse never exposes a
//! partially built tree.

use crate::parser::token_stream::TokenStream;
use thiserror::Error;

/// Default number of tokens provided as context by a parser error
const DEFAULT_CONTEXT_LENGTH: usize = 6;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================€=
/// Kinds of structural problems found while building a tree.
#[derive(Error, PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    #[error("Empty parse string")]
    EmptyInput,
    #[error("Unbalanced brackets")]
    UnbalancedBrackets,
    #[error("Unexpected token sequence - {0}")]
    UnexpectedToken(String),
    #[error("Second root opened")]
    DuplicateRoot,
    #[error("Tokens after the root was closed")]
    TrailingTokens,
    #[error("Builder not initialized")]
    BuilderNotInitialized,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================$=
/// Malformed parse error with contextual information
/// (token position and the following tokens).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at token {position}{}", format_context(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and the stream state
    pub fn from_stream(kind: ParsingErrorType, stream: &TokenStream<'_>) -> Self {
        Self {
            kind,
            position: stream.position(),
            context: stream.context(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for EmptyInput
    pub fn empty_input() -> Self {
        Self::without_context(ParsingErrorType::EmptyInput)
    }

    /// Convenience constructor for UnbalancedBrackets
    pub fn unbalanced_brackets(stream: &TokenStream<'_>) -> Self {
        Self::from_stream(ParsingErrorType::UnbalancedBrackets, stream)
    }

    /// Convenience constructor for UnexpectedToken
    pub fn unexpected_token(stream: &TokenStream<'_>, msg: String) -> Self {
        Self::from_stream(ParsingErrorType::UnexpectedToken(msg), stream)
    }

    /// Convenience constructor for DuplicateRoot
    pub fn duplicate_root(stream: &TokenStream<'_>) -> Self {
        Self::from_stream(ParsingErrorType::DuplicateRoot, stream)
    }

    /// Convenience constructor for TrailingTokens
    pub fn trailing_tokens(stream: &TokenStream<'_>) -> Self {
        Self::from_stream(ParsingErrorType::TrailingTokens, stream)
    }

    /// Create a ParsingError without stream context
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            position: 0,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the token position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the tokens following the error position
    pub fn context(&self) -> &str {
        &self.context
    }
}

fn format_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context (next tokens): {context}")
    }
}
