//! Utility functions for preparing parse tree strings.
//!
//! Parsers emit parse trees in slightly different shapes: spread over several
//! lines, with an explicit `(ROOT (` wrapper, or with an anonymous `((`
//! wrapper. These helpers normalize such strings before they are handed to a
//! [BracketParser](crate::bracket::BracketParser).

/// Default opening of a flat tree (anonymous root wrapper)
pub const DEFAULT_TREE_START: &str = "((";

/// Default closing of a flat tree
pub const DEFAULT_TREE_END: &str = "))";

/// Flattens a parse tree document into a tree-per-line string.
///
/// Newlines become spaces, whitespace between consecutive brackets is removed
/// (`( (` → `((`, `) )` → `))`, `) (` → `)(`), other whitespace runs collapse
/// into a single space, and a line break is inserted between each `end` and
/// following `start`.
///
/// # Arguments
/// * `doc` - The document holding one or more parse trees
/// * `start` - How a tree starts, e.g. `((` or `(ROOT(`
/// * `end` - How a tree ends, e.g. `))`
///
/// # Examples
/// ```
/// # use synfeat::parser::utils::flatten;
/// let doc = "( (S (NP (NN Dogs))\n   (VP (VBP bark))) )\n( (S (VP (VB Run))) )";
/// assert_eq!(
///     flatten(doc, "((", "))"),
///     "((S (NP (NN Dogs))(VP (VBP bark))))\n((S (VP (VB Run))))"
/// );
/// ```
pub fn flatten(doc: &str, start: &str, end: &str) -> String {
    let mut flat = String::with_capacity(doc.len());
    let mut pending_space = false;

    for c in doc.trim().chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }

        if pending_space {
            let glue_brackets = match flat.chars().last() {
                Some('(') => c == '(',
                Some(')') => c == '(' || c == ')',
                _ => false,
            };
            if !glue_brackets {
                flat.push(' ');
            }
            pending_space = false;
        }
        flat.push(c);
    }

    let boundary = format!("{end}{start}");
    if start.is_empty() || end.is_empty() || !flat.contains(&boundary) {
        return flat;
    }
    flat.replace(&boundary, &format!("{end}\n{start}"))
}

/// Removes an explicit root tag from a single parse tree string,
/// replacing a leading `(ROOT (` (whitespace-insensitive) by `((`.
///
/// Returns the trimmed input unchanged if it does not start with the root tag.
///
/// # Examples
/// ```
/// # use synfeat::parser::utils::remove_root_tag;
/// assert_eq!(remove_root_tag("(ROOT (S (VP (VB Go))))", "ROOT"), "((S (VP (VB Go))))");
/// assert_eq!(remove_root_tag("  ( ROOT(NP (NN x)))", "ROOT"), "((NP (NN x)))");
/// assert_eq!(remove_root_tag("(S (VP (VB Go)))", "ROOT"), "(S (VP (VB Go)))");
/// ```
pub fn remove_root_tag(parse: &str, root_tag: &str) -> String {
    let trimmed = parse.trim();

    let stripped = trimmed
        .strip_prefix('(')
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix(root_tag))
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('));

    match stripped {
        Some(rest) if !root_tag.is_empty() => format!("(({rest}"),
        _ => trimmed.to_string(),
    }
}
