//! Low-level parsing infrastructure for bracketed parse strings.
//!
//! This module provides the token stream the
//! [BracketParser](crate::bracket::BracketParser) scans, string normalization
//! helpers for whole documents, and error handling.

pub mod parsing_error;
pub mod token_stream;
pub mod utils;

pub use parsing_error::{ParsingError, ParsingErrorType};
