//! Bidirectional cursor over the leaf chain.
//!
//! A cursor is a `(leaf, index, done)` triple borrowed from the tree. It only
//! ever follows sibling links, never the internal nodes, and steps over leaves
//! that removals have left empty.

use std::fmt;

use crate::iteration::{Direction, Iter, Keys, Values};
use crate::types::{BPlusTree, LeafNode, NodeId, NULL_NODE};

/// Position in the tree's ordered sequence of entries.
///
/// Obtained from [`BPlusTree::begin`], [`BPlusTree::end`],
/// [`BPlusTree::lower_bound`] or [`BPlusTree::upper_bound`]. Once a step runs
/// off either end of the chain the cursor is *done*: `key`/`value` return
/// `None` and further steps are no-ops returning `false`.
///
/// The cursor borrows the tree, so the tree cannot be mutated while any
/// cursor or view derived from it is alive.
pub struct Cursor<'a, K, V> {
    tree: &'a BPlusTree<K, V>,
    leaf: NodeId,
    index: usize,
    done: bool,
}

impl<'a, K, V> Cursor<'a, K, V> {
    /// Cursor at `index` within `leaf`; the caller guarantees the slot exists.
    pub(crate) fn at(tree: &'a BPlusTree<K, V>, leaf: NodeId, index: usize) -> Self {
        Self {
            tree,
            leaf,
            index,
            done: false,
        }
    }

    /// Cursor at the first entry at or after the start of `leaf`.
    pub(crate) fn first_from(tree: &'a BPlusTree<K, V>, leaf: NodeId) -> Self {
        let mut cursor = Self::at(tree, leaf, 0);
        if cursor.current_leaf().is_empty() {
            cursor.next_leaf();
        }
        cursor
    }

    /// Cursor at the last entry at or before the end of `leaf`.
    pub(crate) fn last_from(tree: &'a BPlusTree<K, V>, leaf: NodeId) -> Self {
        let len = tree.leaf(leaf).len();
        let mut cursor = Self::at(tree, leaf, len.saturating_sub(1));
        if len == 0 {
            cursor.prev_leaf();
        }
        cursor
    }

    fn current_leaf(&self) -> &'a LeafNode<K, V> {
        self.tree.leaf(self.leaf)
    }

    /// Returns true once the cursor has stepped past either end.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Key at the current position, or `None` if the cursor is done.
    pub fn key(&self) -> Option<&'a K> {
        if self.done {
            return None;
        }
        self.current_leaf().keys.get(self.index)
    }

    /// Value at the current position, or `None` if the cursor is done.
    pub fn value(&self) -> Option<&'a V> {
        if self.done {
            return None;
        }
        self.current_leaf().values.get(self.index)
    }

    /// Key-value pair at the current position, or `None` if the cursor is done.
    pub fn entry(&self) -> Option<(&'a K, &'a V)> {
        Some((self.key()?, self.value()?))
    }

    /// Step to the next entry in ascending key order.
    ///
    /// Returns `false` and marks the cursor done when there is no next entry.
    pub fn move_next(&mut self) -> bool {
        if self.done {
            return false;
        }
        if self.index + 1 < self.current_leaf().len() {
            self.index += 1;
            return true;
        }
        self.next_leaf()
    }

    /// Step to the previous entry in ascending key order.
    ///
    /// Returns `false` and marks the cursor done when there is no previous entry.
    pub fn move_prev(&mut self) -> bool {
        if self.done {
            return false;
        }
        if self.index > 0 {
            self.index -= 1;
            return true;
        }
        self.prev_leaf()
    }

    /// Mark the cursor done without moving it.
    pub(crate) fn finish(&mut self) {
        self.done = true;
    }

    /// Follow `next` links to the first entry of the next non-empty leaf.
    pub(crate) fn next_leaf(&mut self) -> bool {
        loop {
            let next = self.current_leaf().next;
            if next == NULL_NODE {
                self.done = true;
                return false;
            }
            self.leaf = next;
            if !self.current_leaf().is_empty() {
                self.index = 0;
                return true;
            }
        }
    }

    /// Follow `prev` links to the last entry of the previous non-empty leaf.
    pub(crate) fn prev_leaf(&mut self) -> bool {
        loop {
            let prev = self.current_leaf().prev;
            if prev == NULL_NODE {
                self.done = true;
                return false;
            }
            self.leaf = prev;
            let len = self.current_leaf().len();
            if len != 0 {
                self.index = len - 1;
                return true;
            }
        }
    }

    // ============================================================================
    // LAZY VIEWS
    // ============================================================================

    /// Pairs from the current position forward. The cursor itself does not move.
    pub fn iter(&self) -> Iter<'a, K, V> {
        Iter::new(self.clone(), Direction::Forward)
    }

    /// Pairs from the current position backward. The cursor itself does not move.
    pub fn iter_rev(&self) -> Iter<'a, K, V> {
        Iter::new(self.clone(), Direction::Backward)
    }

    /// Keys from the current position forward.
    pub fn keys(&self) -> Keys<'a, K, V> {
        Keys::new(self.iter())
    }

    /// Keys from the current position backward.
    pub fn keys_rev(&self) -> Keys<'a, K, V> {
        Keys::new(self.iter_rev())
    }

    /// Values from the current position forward.
    pub fn values(&self) -> Values<'a, K, V> {
        Values::new(self.iter())
    }

    /// Values from the current position backward.
    pub fn values_rev(&self) -> Values<'a, K, V> {
        Values::new(self.iter_rev())
    }
}

impl<'a, K: Ord, V> Cursor<'a, K, V> {
    /// Reposition to the first entry with a key `>= key`, as
    /// [`BPlusTree::lower_bound`] would.
    pub fn seek(&mut self, key: &K) {
        *self = self.tree.lower_bound(key);
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            leaf: self.leaf,
            index: self.index,
            done: self.done,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Cursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("leaf", &self.leaf)
            .field("index", &self.index)
            .field("done", &self.done)
            .field("entry", &self.entry())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::types::BPlusTree;

    fn sample_tree() -> BPlusTree<i32, &'static str> {
        let mut tree = BPlusTree::new(2).unwrap();
        for (k, v) in [(1, "a"), (3, "b"), (7, "c"), (8, "d"), (5, "e"), (3, "x")] {
            tree.insert(k, v);
        }
        tree
    }

    #[test]
    fn test_done_cursor_is_sticky() {
        let tree = sample_tree();

        let mut it = tree.end();
        assert!(!it.is_done());
        assert!(!it.move_next());
        assert!(it.is_done());
        assert!(!it.move_next());
        assert!(!it.move_prev());
        assert_eq!(it.key(), None);
        assert_eq!(it.value(), None);

        let mut it = tree.begin();
        assert!(!it.is_done());
        assert!(!it.move_prev());
        assert!(it.is_done());
        assert!(!it.move_prev());
        assert_eq!(it.entry(), None);
    }

    #[test]
    fn test_walk_both_directions() {
        let tree = sample_tree();

        let mut values = Vec::new();
        let mut it = tree.begin();
        while let Some(v) = it.value() {
            values.push(*v);
            it.move_next();
        }
        assert_eq!(values, vec!["a", "x", "e", "c", "d"]);

        let mut values = Vec::new();
        let mut it = tree.end();
        while let Some(v) = it.value() {
            values.push(*v);
            it.move_prev();
        }
        assert_eq!(values, vec!["d", "c", "e", "x", "a"]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut tree = BPlusTree::new(1).unwrap();
        for i in 0..10 {
            tree.insert(i, i);
        }
        let original = tree.lower_bound(&4);
        let mut copy = original.clone();
        assert!(copy.move_next());
        assert!(copy.move_next());
        assert_eq!(copy.key(), Some(&6));
        assert_eq!(original.key(), Some(&4));

        let mut copy = original.clone();
        while copy.move_prev() {}
        assert!(copy.is_done());
        assert!(!original.is_done());
    }

    #[test]
    fn test_seek() {
        let tree = sample_tree();
        let mut it = tree.begin();
        it.seek(&6);
        assert_eq!(it.entry(), Some((&7, &"c")));
        it.seek(&3);
        assert_eq!(it.entry(), Some((&3, &"x")));
        it.seek(&100);
        assert!(it.is_done());
        it.seek(&0);
        assert_eq!(it.key(), Some(&1));
    }

    #[test]
    fn test_steps_over_empty_leaves() {
        let mut tree = BPlusTree::new(1).unwrap();
        for i in 0..20 {
            tree.insert(i, i);
        }
        for i in 4..16 {
            tree.delete(&i);
        }
        assert!(tree.empty_leaf_count() > 0);

        let mut it = tree.lower_bound(&3);
        assert!(it.move_next());
        assert_eq!(it.key(), Some(&16));
        assert!(it.move_prev());
        assert_eq!(it.key(), Some(&3));
    }

    #[test]
    fn test_views_leave_cursor_in_place() {
        let tree = sample_tree();
        let it = tree.lower_bound(&5);
        let forward: Vec<_> = it.values().collect();
        let backward: Vec<_> = it.keys_rev().copied().collect();
        assert_eq!(forward, vec![&"e", &"c", &"d"]);
        assert_eq!(backward, vec![5, 3, 1]);
        assert_eq!(it.key(), Some(&5));

        let first_two: Vec<_> = it.iter().take(2).collect();
        assert_eq!(first_two, vec![(&5, &"e"), (&7, &"c")]);
        assert_eq!(it.values_rev().next(), Some(&"e"));
        assert_eq!(it.keys().last(), Some(&8));
        assert_eq!(it.iter_rev().count(), 3);
    }

    #[test]
    fn test_debug_output() {
        let tree = sample_tree();
        let text = format!("{:?}", tree.begin());
        assert!(text.contains("Cursor"));
        assert!(text.contains("\"a\""));
    }
}
