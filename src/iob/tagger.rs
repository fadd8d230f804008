//! Conversion between token-level tags and labeled spans.
//!
//! Functions operate on one segment (a [TokenSequence] or a slice of
//! [Span]s); the `*_doc` variants apply them to every segment of a document.

use crate::iob::defs::DEFAULT_OUT_LABEL;
use crate::iob::sequence::{Span, TokenSequence};
use crate::iob::tag::{InvalidTagSetError, Tag, TagSet, Token};
use serde::{Deserialize, Serialize};

// =#========================================================================#=
// IOB TAGGER
// =#========================================================================#=
/// Converts between tagged tokens and labeled spans under an IOB or IOBE
/// tag set.
///
/// # Configuration
/// * `tag_set` - Tags written by [span_to_token](Self::span_to_token),
///   [fill_gaps](Self::fill_gaps) (default `IOB`)
/// * `out_label` - Label of out-of-chunk tokens (default `O`)
/// * `contiguous` - If `false`, a chunk interrupted by other tokens is merged
///   back into one non-contiguous span (default `true`)
///
/// # Example
/// ```
/// use synfeat::iob::{IobTagger, Span, Tag, Token, TokenSequence};
///
/// let seq = TokenSequence::from_tokens([
///     Token::new("A", Tag::Begin),
///     Token::out("O"),
///     Token::new("B", Tag::Begin),
///     Token::new("B", Tag::Inside),
/// ]);
/// let tagger = IobTagger::default();
/// assert_eq!(
///     tagger.token_to_span(&seq, false),
///     vec![Span::new("A", vec![0]), Span::new("B", vec![2, 3])]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IobTagger {
    tag_set: TagSet,
    out_label: String,
    contiguous: bool,
}

impl Default for IobTagger {
    fn default() -> Self {
        Self {
            tag_set: TagSet::default(),
            out_label: DEFAULT_OUT_LABEL.to_string(),
            contiguous: true,
        }
    }
}

/// A span under construction.
#[derive(Debug)]
struct Draft {
    span: Span,
    out: bool,
    closed: bool,
    continuation: bool,
    merged: bool,
}

impl Draft {
    fn open(label: &str, id: usize) -> Self {
        Self {
            span: Span::new(label, vec![id]),
            out: false,
            closed: false,
            continuation: false,
            merged: false,
        }
    }

    fn accepts(&self, label: &str) -> bool {
        !self.out && !self.closed && self.span.label == label
    }
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl IobTagger {
    /// Creates a tagger for the given tag set with default out label and
    /// contiguous spans.
    pub fn new(tag_set: TagSet) -> Self {
        Self {
            tag_set,
            ..Self::default()
        }
    }

    /// Creates a tagger for a tag set given by name (`IOB` or `IOBE`).
    ///
    /// # Errors
    /// [InvalidTagSetError] for any other name.
    pub fn from_name(tag_set: &str) -> Result<Self, InvalidTagSetError> {
        Ok(Self::new(tag_set.parse()?))
    }

    pub fn with_out_label(mut self, out_label: impl Into<String>) -> Self {
        self.out_label = out_label.into();
        self
    }

    pub fn with_contiguous(mut self, contiguous: bool) -> Self {
        self.contiguous = contiguous;
        self
    }

    pub fn tag_set(&self) -> TagSet {
        self.tag_set
    }

    pub fn out_label(&self) -> &str {
        &self.out_label
    }

    pub fn is_contiguous(&self) -> bool {
        self.contiguous
    }
}

// ============================================================================
// Conversion (pub)
// ============================================================================
impl IobTagger {
    /// Tags the tokens `ids` as one chunk labeled `label`.
    ///
    /// Ids are sorted first. The first token gets `B`, the others `I`; under
    /// IOBE the last of several tokens gets `E`. Tokens of a chunk labeled
    /// with the out label are all out-of-chunk.
    ///
    /// # Example
    /// ```
    /// use synfeat::iob::{IobTagger, Tag, TagSet};
    ///
    /// let tagger = IobTagger::default();
    /// let seq = tagger.tag_span("B", &[5, 2, 3], TagSet::Iobe);
    /// let tags: Vec<Tag> = seq.tokens().map(|t| t.tag).collect();
    /// assert_eq!(tags, vec![Tag::Begin, Tag::Inside, Tag::End]);
    /// ```
    pub fn tag_span(&self, label: &str, ids: &[usize], tag_set: TagSet) -> TokenSequence {
        let mut ids = ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let last = ids.len().saturating_sub(1);
        ids.iter()
            .enumerate()
            .map(|(i, &id)| {
                let tag = if label == self.out_label {
                    Tag::Out
                } else if i == 0 {
                    Tag::Begin
                } else if i == last && tag_set == TagSet::Iobe {
                    Tag::End
                } else {
                    Tag::Inside
                };
                (id, Token::new(label, tag))
            })
            .collect()
    }

    /// Groups tagged tokens into labeled spans.
    ///
    /// * `B` opens a new span.
    /// * `I`/`E` extend the open span if its label matches; otherwise they
    ///   open a new span. `E` closes the span it lands in.
    /// * An out-of-chunk token forms a span of its own, labeled with the
    ///   out label.
    ///
    /// Unless the tagger is contiguous, a span opened by `I`/`E` is merged
    /// into the latest earlier span of the same label that was not closed
    /// by `E`.
    ///
    /// # Arguments
    /// * `seq` - Tagged tokens of one segment
    /// * `keep_out` - Whether out-of-chunk spans are part of the result
    pub fn token_to_span(&self, seq: &TokenSequence, keep_out: bool) -> Vec<Span> {
        self.spans(seq, keep_out, self.contiguous)
    }

    /// Tags every span with the configured tag set.
    ///
    /// If `fill_out` is set, every id between the smallest and largest
    /// covered id is first filled with an out-of-chunk token. Where spans
    /// overlap, later spans override earlier ones.
    pub fn span_to_token(&self, spans: &[Span], fill_out: bool) -> TokenSequence {
        let mut out = TokenSequence::new();

        if fill_out {
            let first = spans.iter().filter_map(Span::first).min();
            let last = spans.iter().filter_map(Span::last).max();
            if let (Some(first), Some(last)) = (first, last) {
                out.overlay(self.out_range(first, last));
            }
        }

        for span in spans {
            out.overlay(self.tag_span(&span.label, &span.tokens, self.tag_set));
        }
        out
    }

    /// Re-tags a sequence under `tag_set` by converting it to spans and back.
    ///
    /// Converts between IOB and IOBE and repairs inconsistent sequences,
    /// e.g. an `I` without a preceding `B`.
    pub fn retag(&self, seq: &TokenSequence, tag_set: TagSet) -> TokenSequence {
        let mut out = TokenSequence::new();
        for span in self.token_to_span(seq, true) {
            out.overlay(self.tag_span(&span.label, &span.tokens, tag_set));
        }
        out
    }

    /// Fills the gaps of non-contiguous spans.
    ///
    /// Interrupted chunks are merged first (regardless of the `contiguous`
    /// setting). A merged span then takes over its whole id range, unless
    /// another span covers an id inside that range, in which case it stays
    /// as is. All remaining ids of the segment are out-of-chunk.
    ///
    /// # Example
    /// ```
    /// use synfeat::iob::{IobTagger, Tag, Token, TokenSequence};
    ///
    /// // A ... A with an unlabeled filler in between
    /// let seq = TokenSequence::from_tokens([
    ///     Token::new("A", Tag::Begin),
    ///     Token::out("O"),
    ///     Token::new("A", Tag::Inside),
    /// ]);
    /// let filled = IobTagger::default().fill_gaps(&seq);
    /// let tags: Vec<Tag> = filled.tokens().map(|t| t.tag).collect();
    /// assert_eq!(tags, vec![Tag::Begin, Tag::Inside, Tag::Inside]);
    /// ```
    pub fn fill_gaps(&self, seq: &TokenSequence) -> TokenSequence {
        let spans = self.spans(seq, false, false);

        let filled: Vec<Span> = spans
            .iter()
            .enumerate()
            .map(|(index, span)| match (span.first(), span.last()) {
                (Some(first), Some(last)) if !span.is_contiguous() => {
                    let blocked = spans.iter().enumerate().any(|(other, s)| {
                        other != index && s.tokens.iter().any(|id| (first..=last).contains(id))
                    });
                    if blocked {
                        span.clone()
                    } else {
                        log::debug!("Filling gaps of span {:?} over {first}..={last}", span.label);
                        Span::new(span.label.clone(), (first..=last).collect())
                    }
                }
                _ => span.clone(),
            })
            .collect();

        let mut out = match seq.id_range() {
            Some((first, last)) => self.out_range(first, last),
            None => TokenSequence::new(),
        };
        out.overlay(self.span_to_token(&filled, false));
        out
    }

    /// Returns the span labels of a sequence, in span order.
    pub fn labels(&self, seq: &TokenSequence, keep_out: bool) -> Vec<String> {
        self.token_to_span(seq, keep_out)
            .into_iter()
            .map(|span| span.label)
            .collect()
    }
}

// ============================================================================
// Document-level Conversion (pub)
// ============================================================================
impl IobTagger {
    pub fn token_to_span_doc(&self, doc: &[TokenSequence], keep_out: bool) -> Vec<Vec<Span>> {
        doc.iter().map(|seq| self.token_to_span(seq, keep_out)).collect()
    }

    pub fn span_to_token_doc(&self, doc: &[Vec<Span>], fill_out: bool) -> Vec<TokenSequence> {
        doc.iter()
            .map(|spans| self.span_to_token(spans, fill_out))
            .collect()
    }

    pub fn retag_doc(&self, doc: &[TokenSequence], tag_set: TagSet) -> Vec<TokenSequence> {
        doc.iter().map(|seq| self.retag(seq, tag_set)).collect()
    }

    pub fn fill_gaps_doc(&self, doc: &[TokenSequence]) -> Vec<TokenSequence> {
        doc.iter().map(|seq| self.fill_gaps(seq)).collect()
    }

    pub fn labels_doc(&self, doc: &[TokenSequence], keep_out: bool) -> Vec<Vec<String>> {
        doc.iter().map(|seq| self.labels(seq, keep_out)).collect()
    }
}

// ============================================================================
// Span Construction (private)
// ============================================================================
impl IobTagger {
    fn spans(&self, seq: &TokenSequence, keep_out: bool, contiguous: bool) -> Vec<Span> {
        let mut drafts: Vec<Draft> = Vec::new();

        for (id, token) in seq.iter() {
            match token.tag {
                Tag::Begin => drafts.push(Draft::open(&token.label, id)),
                Tag::Inside | Tag::End => {
                    let extends = drafts.last().is_some_and(|d| d.accepts(&token.label));
                    if extends {
                        if let Some(open) = drafts.last_mut() {
                            open.span.tokens.push(id);
                        }
                    } else {
                        let mut draft = Draft::open(&token.label, id);
                        draft.continuation = drafts
                            .iter()
                            .any(|d| !d.out && d.span.label == token.label);
                        if !draft.continuation {
                            log::warn!(
                                "Token {id} continues chunk {:?} that was never opened",
                                token.label
                            );
                        }
                        drafts.push(draft);
                    }
                    if token.tag == Tag::End {
                        if let Some(last) = drafts.last_mut() {
                            last.closed = true;
                        }
                    }
                }
                Tag::Out => {
                    let mut draft = Draft::open(&self.out_label, id);
                    draft.out = true;
                    drafts.push(draft);
                }
            }
        }

        if !contiguous {
            merge_continuations(&mut drafts);
        }

        drafts
            .into_iter()
            .filter(|d| !d.merged && (keep_out || d.span.label != self.out_label))
            .map(|d| d.span)
            .collect()
    }

    fn out_range(&self, first: usize, last: usize) -> TokenSequence {
        (first..=last)
            .map(|id| (id, Token::out(self.out_label.as_str())))
            .collect()
    }
}

/// Merges every continuation into the latest earlier span of its label that
/// was not closed by `E`. A merged continuation closed by `E` closes the
/// span it was merged into.
fn merge_continuations(drafts: &mut [Draft]) {
    for index in 0..drafts.len() {
        if !drafts[index].continuation {
            continue;
        }

        let label = drafts[index].span.label.clone();
        let target = drafts[..index]
            .iter()
            .rposition(|d| !d.merged && d.accepts(&label));

        if let Some(target) = target {
            log::debug!(
                "Merging non-contiguous continuation of {label:?} at token {:?}",
                drafts[index].span.first()
            );
            let tokens = std::mem::take(&mut drafts[index].span.tokens);
            let closed = drafts[index].closed;
            drafts[index].merged = true;
            drafts[target].span.tokens.extend(tokens);
            drafts[target].closed |= closed;
        }
    }
}

// ============================================================================
// Label Utilities (pub)
// ============================================================================
/// Returns `labels` without any occurrence of `label`.
pub fn remove_label(labels: &[String], label: &str) -> Vec<String> {
    labels.iter().filter(|l| *l != label).cloned().collect()
}

/// Returns `spans` without the spans labeled `label`.
pub fn remove_spans_by_label(spans: &[Span], label: &str) -> Vec<Span> {
    spans.iter().filter(|s| s.label != label).cloned().collect()
}
