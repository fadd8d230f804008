//! Locating words of a sentence among the terminals of its tree.

use crate::model::{NodeId, ParseTree};

/// Finds every occurrence of `needle` as a run of consecutive elements in
/// `haystack` and returns the indices of each run.
///
/// Occurrences may overlap; an empty needle matches nothing.
///
/// # Example
/// ```
/// use synfeat::query::find_subsequence;
///
/// let words = ["a", "b", "a", "b", "a"];
/// assert_eq!(find_subsequence(&words, &["a", "b"]), vec![vec![0, 1], vec![2, 3]]);
/// assert_eq!(find_subsequence(&words, &["b", "a"]), vec![vec![1, 2], vec![3, 4]]);
/// assert!(find_subsequence(&words, &["c"]).is_empty());
/// ```
pub fn find_subsequence<T: PartialEq>(haystack: &[T], needle: &[T]) -> Vec<Vec<usize>> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(start, _)| (start..start + needle.len()).collect())
        .collect()
}

impl ParseTree {
    /// Resolves a word sequence to the terminals it matches.
    ///
    /// # Returns
    /// One group of terminal ids per occurrence of `words` in the sentence;
    /// empty if there is none.
    pub fn get_nodes(&self, words: &[&str]) -> Vec<Vec<NodeId>> {
        find_subsequence(&self.words(), words)
            .into_iter()
            .map(|indices| self.get_nodes_by_ids(&indices))
            .collect()
    }

    /// Resolves whitespace-separated text to the terminals it matches.
    /// See [get_nodes](Self::get_nodes).
    pub fn nodes_for_text(&self, text: &str) -> Vec<Vec<NodeId>> {
        let words: Vec<&str> = text.split_whitespace().collect();
        self.get_nodes(&words)
    }

    /// Resolves explicit word positions (0-based) to terminals, bypassing
    /// search. Positions beyond the sentence are skipped.
    pub fn get_nodes_by_ids(&self, token_ids: &[usize]) -> Vec<NodeId> {
        token_ids
            .iter()
            .filter_map(|&index| self.terminal_at(index))
            .collect()
    }
}
