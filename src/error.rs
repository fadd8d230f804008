//! Crate-level error type.

use crate::iob::InvalidTagSetError;
use crate::parser::ParsingError;
use thiserror::Error;

/// Any error raised by this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed bracketed parse string
    #[error(transparent)]
    Parsing(#[from] ParsingError),

    /// Unsupported tag set name
    #[error(transparent)]
    InvalidTagSet(#[from] InvalidTagSetError),
}

/// Result alias using the crate [Error].
pub type Result<T> = std::result::Result<T, Error>;
