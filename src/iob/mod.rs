//! IOB-family span/token codec.
//!
//! A segment is tagged either per token, as a [TokenSequence] of
//! `(label, tag)` pairs, or per chunk, as a list of [Span]s. The
//! [IobTagger] converts between the two under the IOB or IOBE [TagSet]:
//!
//! | Token | IOB | IOBE |
//! |-------|-----|------|
//! | first of a chunk | `B` | `B` |
//! | inside a chunk | `I` | `I` |
//! | last of a multi-token chunk | `I` | `E` |
//! | outside of any chunk | `O` | `O` |
//!
//! [IobFormat] encodes single tokens as strings such as `ARG1-B`.
//!
//! # Example
//! ```
//! use synfeat::iob::{IobFormat, IobTagger, TagSet, TokenSequence};
//!
//! let format = IobFormat::default();
//! let seq = TokenSequence::from_tokens(["A-B", "A-I", "O", "B-B"].map(|s| format.split(s)));
//!
//! let tagger = IobTagger::default();
//! let iobe: Vec<String> = tagger
//!     .retag(&seq, TagSet::Iobe)
//!     .tokens()
//!     .map(|t| format.join(t))
//!     .collect();
//! assert_eq!(iobe, vec!["A-B", "A-E", "O", "B-B"]);
//! ```

pub(crate) mod defs;
pub mod format;
pub mod sequence;
pub mod tag;
pub mod tagger;

pub use format::{IobFormat, TagOrder};
pub use sequence::{Span, TokenSequence};
pub use tag::{InvalidTagSetError, Tag, TagSet, Token};
pub use tagger::{IobTagger, remove_label, remove_spans_by_label};
