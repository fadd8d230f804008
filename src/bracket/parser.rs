//! Structs and logic to parse bracketed constituency trees.
//!
//! This module provides the [BracketParser] struct, which offers methods
//! to parse single parse strings or whole documents, as well as lazy parsing
//! via a [BracketIterator].

use crate::bracket::defs::{CLOSE_BRACKET, OPEN_BRACKET, TOKENS_PER_NODE_GUESS};
use crate::model::config::TreeConfig;
use crate::model::parse_tree_builder::ParseTreeBuilder;
use crate::model::tree_builder::TreeBuilder;
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
use crate::parser::token_stream::{TokenStream, is_bracket, tokenize};
use crate::parser::utils::{DEFAULT_TREE_END, DEFAULT_TREE_START, flatten, remove_root_tag};

// =#========================================================================#=
// BRACKET PARSER
// =#========================================================================$=
/// Parser (configuration) for bracketed constituency parse strings.
///
/// Generic over [TreeBuilder] (construction).
///
/// # Construction
/// * [`new(tree_builder)`](Self::new) — generic constructor
/// * [`new_defaults()`](Self::new_defaults) — uses a [ParseTreeBuilder]
///   with default [TreeConfig]
/// * [`with_config(config)`](Self::with_config) — uses a [ParseTreeBuilder]
///   with the given [TreeConfig]
///
/// # Configuration
/// * [`with_root_tag_removal(tag)`](Self::with_root_tag_removal)
///     - Rewrites an explicit `(ROOT (` wrapper into the anonymous `((`
///       before parsing, so the tag does not become a constituent.
/// * [`with_document_delimiters(start, end)`](Self::with_document_delimiters)
///     - How trees start and end when a document is split into trees.
///
/// # Parsing
/// * [`parse_str`](Self::parse_str) — Parse single tree
/// * [`parse_document`](Self::parse_document) — Parse all trees of a document eagerly
/// * [`into_document_iter`](Self::into_document_iter) — Parse trees lazily
///
/// # Example
/// ```
/// use synfeat::bracket::BracketParser;
///
/// let mut parser = BracketParser::new_defaults();
/// let tree = parser.parse_str("(S (NP (DT the) (NN cat)) (VP (VBZ sleeps)))").unwrap();
/// assert_eq!(tree.words(), vec!["the", "cat", "sleeps"]);
/// assert_eq!(tree.tags(), vec!["DT", "NN", "VBZ"]);
/// ```
pub struct BracketParser<T: TreeBuilder> {
    tree_builder: T,
    root_tag: Option<String>,
    tree_start: String,
    tree_end: String,
}

// ============================================================================
// Construction & Configuration, Deconstruction (pub)
// ============================================================================
impl<T: TreeBuilder> BracketParser<T> {
    /// Creates a new [BracketParser] with the given tree builder.
    pub fn new(tree_builder: T) -> Self {
        Self {
            tree_builder,
            root_tag: None,
            tree_start: DEFAULT_TREE_START.to_string(),
            tree_end: DEFAULT_TREE_END.to_string(),
        }
    }

    /// Configures the parser to rewrite a leading `(<root_tag> (` into `((`.
    pub fn with_root_tag_removal(mut self, root_tag: impl Into<String>) -> Self {
        self.root_tag = Some(root_tag.into());
        self
    }

    /// Sets how trees start and end when splitting a document into trees.
    pub fn with_document_delimiters(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.tree_start = start.into();
        self.tree_end = end.into();
        self
    }

    /// Consumes the parser and returns the tree builder.
    pub fn into_builder(self) -> T {
        self.tree_builder
    }
}

// Convenience Defaults
impl BracketParser<ParseTreeBuilder> {
    /// Creates a new [BracketParser] for [ParseTree](crate::model::ParseTree)
    /// with default conventions (root label `ROOT`, glues `/` and `\`).
    pub fn new_defaults() -> Self {
        Self::new(ParseTreeBuilder::new())
    }

    /// Creates a new [BracketParser] for [ParseTree](crate::model::ParseTree)
    /// with the given conventions.
    pub fn with_config(config: TreeConfig) -> Self {
        Self::new(ParseTreeBuilder::with_config(config))
    }
}

impl Default for BracketParser<ParseTreeBuilder> {
    fn default() -> Self {
        Self::new_defaults()
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl<T: TreeBuilder> BracketParser<T> {
    /// Parses a single bracketed parse string.
    ///
    /// A parse not starting with the anonymous root wrapper `((` is wrapped
    /// in one. Brackets need not be separated by whitespace.
    ///
    /// # Arguments
    /// * `parse` - The parse string, e.g. `(S (NP (NN dog)) (VP (VBZ runs)))`
    ///
    /// # Returns
    /// * `Ok(T::Tree)` - The parsed tree
    /// * `Err(ParsingError)` - If brackets are unbalanced or tokens appear in
    ///   an unexpected order; no partial tree is kept
    pub fn parse_str(&mut self, parse: &str) -> Result<T::Tree, ParsingError> {
        let without_root_tag;
        let parse = match &self.root_tag {
            Some(tag) => {
                without_root_tag = remove_root_tag(parse, tag);
                without_root_tag.as_str()
            }
            None => parse,
        };

        let mut tokens = tokenize(parse);
        if tokens.is_empty() {
            return Err(ParsingError::empty_input());
        }
        if !has_root_wrapper(&tokens) {
            tokens.insert(0, OPEN_BRACKET);
            tokens.push(CLOSE_BRACKET);
        }

        let mut stream = TokenStream::new(tokens);
        let (num_open, num_close) = stream.count_brackets();
        if num_open != num_close {
            return Err(ParsingError::unbalanced_brackets(&stream));
        }

        let capacity = stream.len() / TOKENS_PER_NODE_GUESS + 1;
        if let Err(err) = self.scan(&mut stream, capacity) {
            self.tree_builder.discard();
            return Err(err);
        }

        log::debug!("Parsed tree from {} tokens", stream.len());
        self.tree_builder
            .finish_tree()
            .ok_or_else(|| ParsingError::without_context(ParsingErrorType::BuilderNotInitialized))
    }

    /// Parses every tree of a document, one result per tree.
    ///
    /// The document is first [flattened](flatten) into one tree per line;
    /// empty lines are skipped. A malformed tree yields an `Err` in its slot
    /// and does not stop parsing of the following trees.
    pub fn parse_document(&mut self, doc: &str) -> Vec<Result<T::Tree, ParsingError>> {
        split_document(doc, &self.tree_start, &self.tree_end)
            .into_iter()
            .map(|line| self.parse_str(&line))
            .collect()
    }

    /// Consumes the parser and returns an iterator over the trees of a document.
    ///
    /// The parser can be retrieved again via [BracketIterator::into_parser].
    pub fn into_document_iter(self, doc: &str) -> BracketIterator<T> {
        let lines = split_document(doc, &self.tree_start, &self.tree_end);
        BracketIterator {
            parser: self,
            lines: lines.into_iter(),
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================
impl<T: TreeBuilder> BracketParser<T> {
    /// Single left-to-right scan over the token stream with an explicit stack
    /// of open nodes (the top is the cursor):
    /// - `( (` → open the root
    /// - `( TAG (` → open a non-terminal below the cursor and descend
    /// - `( TAG WORD )` → attach a terminal to the cursor
    /// - `)` → close the cursor and ascend
    fn scan(&mut self, stream: &mut TokenStream<'_>, capacity: usize) -> Result<(), ParsingError> {
        let mut open: Vec<T::NodeIdx> = Vec::new();
        let mut root_closed = false;

        while let Some(token) = stream.peek() {
            if root_closed {
                return Err(ParsingError::trailing_tokens(stream));
            }

            if token == CLOSE_BRACKET {
                if open.pop().is_none() {
                    return Err(ParsingError::unbalanced_brackets(stream));
                }
                root_closed = open.is_empty();
                stream.advance(1);
                continue;
            }

            if token != OPEN_BRACKET {
                return Err(ParsingError::unexpected_token(
                    stream,
                    format!("Expected '(' or ')' but found {token:?}"),
                ));
            }

            match (stream.peek_at(1), stream.peek_at(2)) {
                // Root: '( ('
                (Some(OPEN_BRACKET), _) => {
                    if !open.is_empty() {
                        return Err(ParsingError::duplicate_root(stream));
                    }
                    open.push(self.tree_builder.init_next(capacity));
                    stream.advance(1);
                }
                // Non-terminal: '( TAG ('
                (Some(tag), Some(OPEN_BRACKET)) if !is_bracket(tag) => {
                    let parent = Self::cursor(&open, stream)?;
                    open.push(self.tree_builder.add_non_terminal(parent, tag));
                    stream.advance(2);
                }
                // Terminal: '( TAG WORD )'
                (Some(tag), Some(word)) if !is_bracket(tag) && !is_bracket(word) => {
                    if stream.peek_at(3) != Some(CLOSE_BRACKET) {
                        return Err(ParsingError::unexpected_token(
                            stream,
                            format!("Terminal ({tag} {word} ...) holds more than one word"),
                        ));
                    }
                    let parent = Self::cursor(&open, stream)?;
                    self.tree_builder.add_terminal(parent, tag, word);
                    stream.advance(4);
                }
                (Some(tag), _) if !is_bracket(tag) => {
                    return Err(ParsingError::unexpected_token(
                        stream,
                        format!("Constituent {tag:?} has neither word nor children"),
                    ));
                }
                _ => {
                    return Err(ParsingError::unexpected_token(
                        stream,
                        "Expected a tag after '('".to_string(),
                    ));
                }
            }
        }

        if !root_closed {
            return Err(ParsingError::unbalanced_brackets(stream));
        }

        Ok(())
    }

    /// Returns the currently open node.
    fn cursor(open: &[T::NodeIdx], stream: &TokenStream<'_>) -> Result<T::NodeIdx, ParsingError> {
        open.last().copied().ok_or_else(|| {
            ParsingError::unexpected_token(stream, "Constituent outside of the root".to_string())
        })
    }
}

/// Returns `true` if the tokens start with the anonymous root wrapper `( (`.
fn has_root_wrapper(tokens: &[&str]) -> bool {
    tokens.len() >= 2 && tokens[0] == OPEN_BRACKET && tokens[1] == OPEN_BRACKET
}

/// Splits a document into non-empty tree lines.
fn split_document(doc: &str, start: &str, end: &str) -> Vec<String> {
    flatten(doc, start, end)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// =#========================================================================#=
// BRACKET ITERATOR
// =#========================================================================$=
/// Iterator over the trees of a document, parsing each tree lazily.
///
/// Obtained via [BracketParser::into_document_iter]. Yields one result per
/// tree; a malformed tree is logged and reported, and iteration continues.
pub struct BracketIterator<T: TreeBuilder> {
    parser: BracketParser<T>,
    lines: std::vec::IntoIter<String>,
}

impl<T: TreeBuilder> BracketIterator<T> {
    /// Consumes the iterator and returns the parser.
    pub fn into_parser(self) -> BracketParser<T> {
        self.parser
    }
}

impl<T: TreeBuilder> Iterator for BracketIterator<T> {
    type Item = Result<T::Tree, ParsingError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        let result = self.parser.parse_str(&line);
        if let Err(err) = &result {
            log::warn!("Skipping malformed parse tree: {err}");
        }
        Some(result)
    }
}
