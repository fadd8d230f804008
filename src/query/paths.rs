//! Path-based queries: root paths, lowest common ancestors, tag paths and
//! IOB ancestor chains.

use crate::model::{NodeId, ParseTree};

/// Prefix marking an ancestor reached over first-child links only
const CHAIN_BEGIN: &str = "B";

/// Prefix marking any ancestor above the first non-first-child link
const CHAIN_INSIDE: &str = "I";

/// Path between two nodes of the same tree, split at their lowest common
/// ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    /// Lowest common ancestor
    pub common: NodeId,
    /// From the start node up to (excluding) `common`
    pub up: Vec<NodeId>,
    /// From below `common` down to (including) the end node
    pub down: Vec<NodeId>,
}

impl NodePath {
    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }

    /// Returns `true` if start and end node are the same.
    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }
}

// ============================================================================
// Ancestors & LCA (pub)
// ============================================================================
impl ParseTree {
    /// Returns `id` and all its ancestors, up to and including the root.
    pub fn root_path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path
    }

    /// Splits the path from `from` to `to` at their lowest common ancestor.
    ///
    /// Both root paths are walked root-first in lock-step while they agree;
    /// the last shared node is the common ancestor.
    pub fn path_between(&self, from: NodeId, to: NodeId) -> NodePath {
        let mut path_from = self.root_path(from);
        let mut path_to = self.root_path(to);
        path_from.reverse();
        path_to.reverse();

        let shared = common_prefix_len(&path_from, &path_to);
        // Both paths start at the root, so they share at least one node
        let common = path_from[shared - 1];

        let mut up = path_from.split_off(shared);
        up.reverse();
        let down = path_to.split_off(shared);

        NodePath { common, up, down }
    }

    /// Returns the deepest node that is an ancestor of (or equal to) both
    /// `a` and `b`. Symmetric in its arguments.
    ///
    /// # Example
    /// ```
    /// let tree = synfeat::bracket::parse_str("(S (NP (DT the) (NN cat)) (VP (VBZ sleeps)))").unwrap();
    /// let [the, cat, sleeps] = [0, 1, 2].map(|i| tree.terminal_at(i).unwrap());
    /// assert_eq!(tree.tag(tree.lowest_common_ancestor(the, cat)), "NP");
    /// assert_eq!(tree.tag(tree.lowest_common_ancestor(cat, sleeps)), "S");
    /// ```
    pub fn lowest_common_ancestor(&self, a: NodeId, b: NodeId) -> NodeId {
        self.path_between(a, b).common
    }

    /// Returns the deepest common ancestor of a set of nodes.
    ///
    /// The input is sorted and deduplicated first; for terminals this is
    /// left-to-right order. A single node is its own ancestor.
    ///
    /// In `strict` mode the ancestor must cover exactly the given nodes:
    /// if its terminals differ from the input, `None` is returned.
    ///
    /// # Returns
    /// `None` for an empty input or a failed strict check.
    pub fn lowest_common_ancestor_of(&self, ids: &[NodeId], strict: bool) -> Option<NodeId> {
        let mut ids = ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        match ids.as_slice() {
            [] => None,
            [single] => Some(*single),
            [first, rest @ ..] => {
                let mut shared = self.root_path(*first);
                shared.reverse();
                for &id in rest {
                    let mut path = self.root_path(id);
                    path.reverse();
                    let len = common_prefix_len(&shared, &path);
                    shared.truncate(len);
                }

                let ancestor = *shared.last()?;
                if strict && self.terminals_of(ancestor) != ids {
                    return None;
                }
                Some(ancestor)
            }
        }
    }

    /// Ascends from `id` through the unary chain above it: while the parent
    /// has exactly one child, move up. Returns the topmost node of the chain.
    pub fn highest_self_node(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            if self.children(parent).len() != 1 {
                break;
            }
            current = parent;
        }
        current
    }
}

// ============================================================================
// Siblings (pub)
// ============================================================================
impl ParseTree {
    /// Returns the sibling directly left of `id`, if any.
    pub fn sibling_left(&self, id: NodeId) -> Option<NodeId> {
        let pos = self.sibling_position(id)?;
        pos.checked_sub(1).map(|left| self.siblings(id)[left])
    }

    /// Returns the sibling directly right of `id`, if any.
    pub fn sibling_right(&self, id: NodeId) -> Option<NodeId> {
        let pos = self.sibling_position(id)?;
        self.siblings(id).get(pos + 1).copied()
    }
}

// ============================================================================
// Path Strings (pub)
// ============================================================================
impl ParseTree {
    /// Serializes the path from `from` to `to` as tags: the up part joined by
    /// the up glue, the common ancestor, then the down part joined by the
    /// down glue.
    ///
    /// # Example
    /// ```
    /// let tree = synfeat::bracket::parse_str("(S (NP (DT the) (NN cat)) (VP (VBZ sleeps)))").unwrap();
    /// let the = tree.terminal_at(0).unwrap();
    /// let sleeps = tree.terminal_at(2).unwrap();
    /// assert_eq!(tree.tag_path(the, sleeps), "DT/NP/S\\VP\\VBZ");
    /// ```
    pub fn tag_path(&self, from: NodeId, to: NodeId) -> String {
        let up_glue = self.config().up_glue();
        let down_glue = self.config().down_glue();
        let path = self.path_between(from, to);

        let up: Vec<&str> = path.up.iter().map(|&id| self.tag(id)).collect();
        let down: Vec<&str> = path.down.iter().map(|&id| self.tag(id)).collect();

        let mut out = up.join(up_glue);
        out.push_str(up_glue);
        out.push_str(self.tag(path.common));
        out.push_str(down_glue);
        out.push_str(&down.join(down_glue));
        out
    }

    /// Encodes the position of `id` as the chain of its ancestors, from the
    /// topmost one below the root down to its parent.
    ///
    /// An ancestor is marked `B` while every link from `id` up to it is a
    /// first-child link, `I` from the first other link upward. Marker and
    /// tag are joined by the IOB glue, chain elements by the up glue.
    ///
    /// # Example
    /// ```
    /// let tree = synfeat::bracket::parse_str("(S (NP (DT the) (NN cat)) (VP (VBZ sleeps)))").unwrap();
    /// assert_eq!(tree.iob_chain(tree.terminal_at(0).unwrap()), "B-S/B-NP");
    /// assert_eq!(tree.iob_chain(tree.terminal_at(1).unwrap()), "I-S/I-NP");
    /// assert_eq!(tree.iob_chain(tree.terminal_at(2).unwrap()), "I-S/B-VP");
    /// ```
    pub fn iob_chain(&self, id: NodeId) -> String {
        let iob_glue = self.config().iob_glue();

        let mut chain = Vec::new();
        let mut begins = true;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            if self.is_root(parent) {
                break;
            }
            begins = begins && self.sibling_position(current) == Some(0);
            let marker = if begins { CHAIN_BEGIN } else { CHAIN_INSIDE };
            chain.push(format!("{marker}{iob_glue}{}", self.tag(parent)));
            current = parent;
        }

        chain.reverse();
        chain.join(self.config().up_glue())
    }
}

fn common_prefix_len(a: &[NodeId], b: &[NodeId]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::parse_str;

    #[test]
    fn common_prefix() {
        assert_eq!(common_prefix_len(&[0, 1, 2], &[0, 1, 5]), 2);
        assert_eq!(common_prefix_len(&[0], &[0, 1]), 1);
        assert_eq!(common_prefix_len(&[], &[0]), 0);
    }

    #[test]
    fn path_to_self_is_empty() {
        let tree = parse_str("(NP (DT the) (NN cat))").unwrap();
        let path = tree.path_between(2, 2);
        assert_eq!(path.common, 2);
        assert!(path.is_empty());
        assert_eq!(tree.tag_path(2, 2), "/DT\\");
    }
}
