//! Bound and range query operations for BPlusTree.
//!
//! Bound queries descend once to the leaf covering the query key and then, if
//! that leaf cannot answer, continue along the leaf chain. The separator
//! invariant guarantees the first entry of the next non-empty leaf is `>=`
//! the query (and the last entry of the previous one is `<=` it).

use std::ops::{Bound, RangeBounds};

use crate::cursor::Cursor;
use crate::iteration::Range;
use crate::types::BPlusTree;

impl<K, V> BPlusTree<K, V> {
    /// Cursor at the smallest entry, or a done cursor if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, K, V> {
        Cursor::first_from(self, self.begin)
    }

    /// Cursor at the largest entry, or a done cursor if the tree is empty.
    ///
    /// Unlike a past-the-end iterator this points *at* the last entry, so it
    /// is the natural start for a backward walk.
    pub fn end(&self) -> Cursor<'_, K, V> {
        Cursor::last_from(self, self.end)
    }

    /// Returns the first key-value pair in the tree.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.begin().entry()
    }

    /// Returns the last key-value pair in the tree.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.end().entry()
    }
}

impl<K: Ord, V> BPlusTree<K, V> {
    /// Cursor at the first entry whose key is `>= key`; done if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::BPlusTree;
    ///
    /// let mut tree = BPlusTree::new(2).unwrap();
    /// for (k, v) in [(1, "a"), (3, "x"), (5, "e"), (7, "c")] {
    ///     tree.insert(k, v);
    /// }
    /// assert_eq!(tree.lower_bound(&4).value(), Some(&"e"));
    /// assert_eq!(tree.lower_bound(&5).value(), Some(&"e"));
    /// assert!(tree.lower_bound(&8).is_done());
    /// ```
    pub fn lower_bound(&self, key: &K) -> Cursor<'_, K, V> {
        let leaf_id = self.find_leaf(key);
        let leaf = self.leaf(leaf_id);
        let index = leaf.lower_bound_index(key);

        let mut cursor = Cursor::at(self, leaf_id, index);
        if index == leaf.len() {
            cursor.next_leaf();
        }
        cursor
    }

    /// Cursor at the last entry whose key is `<= key`; done if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::BPlusTree;
    ///
    /// let mut tree = BPlusTree::new(2).unwrap();
    /// for (k, v) in [(1, "a"), (3, "x"), (5, "e"), (7, "c")] {
    ///     tree.insert(k, v);
    /// }
    /// assert_eq!(tree.upper_bound(&4).value(), Some(&"x"));
    /// assert_eq!(tree.upper_bound(&5).value(), Some(&"e"));
    /// assert!(tree.upper_bound(&0).is_done());
    /// ```
    pub fn upper_bound(&self, key: &K) -> Cursor<'_, K, V> {
        let leaf_id = self.find_leaf(key);
        let count = self.leaf(leaf_id).upper_bound_index(key);

        let mut cursor = Cursor::at(self, leaf_id, count.saturating_sub(1));
        if count == 0 {
            cursor.prev_leaf();
        }
        cursor
    }

    /// Returns an iterator over key-value pairs in a range using Rust's range syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::BPlusTree;
    ///
    /// let mut tree = BPlusTree::new(2).unwrap();
    /// for i in 0..10 {
    ///     tree.insert(i, i * 10);
    /// }
    ///
    /// let keys: Vec<_> = tree.range(3..7).map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec![3, 4, 5, 6]);
    ///
    /// let keys: Vec<_> = tree.range(3..=7).map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec![3, 4, 5, 6, 7]);
    ///
    /// let keys: Vec<_> = tree.range(..2).map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec![0, 1]);
    /// ```
    pub fn range<R>(&self, range: R) -> Range<'_, K, V>
    where
        R: RangeBounds<K>,
        K: Clone,
    {
        let start = match range.start_bound() {
            Bound::Included(key) => self.lower_bound(key),
            Bound::Excluded(key) => {
                let mut cursor = self.lower_bound(key);
                if cursor.key() == Some(key) {
                    cursor.move_next();
                }
                cursor
            }
            Bound::Unbounded => self.begin(),
        };
        Range::new(start, range.end_bound().cloned())
    }
}

#[cfg(test)]
mod tests {
    use crate::types::BPlusTree;
    use std::ops::Bound;

    fn sparse_tree(order: usize) -> BPlusTree<i32, i32> {
        let mut tree = BPlusTree::new(order).unwrap();
        for i in 0..50 {
            tree.insert(i * 2, i);
        }
        tree
    }

    #[test]
    fn test_bounds_between_keys() {
        let tree = sparse_tree(2);
        for query in -1..101 {
            let lower = tree.lower_bound(&query).key().copied();
            let upper = tree.upper_bound(&query).key().copied();
            let expected_lower = (0..50).map(|i| i * 2).find(|k| *k >= query);
            let expected_upper = (0..50).map(|i| i * 2).rev().find(|k| *k <= query);
            assert_eq!(lower, expected_lower, "lower_bound({})", query);
            assert_eq!(upper, expected_upper, "upper_bound({})", query);
        }
    }

    #[test]
    fn test_bounds_skip_emptied_leaves() {
        let mut tree = sparse_tree(1);
        for k in (20..60).step_by(2) {
            assert!(tree.delete(&k));
        }
        assert_eq!(tree.lower_bound(&21).key(), Some(&60));
        assert_eq!(tree.upper_bound(&59).key(), Some(&18));
        assert_eq!(tree.lower_bound(&18).key(), Some(&18));
        assert_eq!(tree.upper_bound(&60).key(), Some(&60));
    }

    #[test]
    fn test_begin_end_on_empty_and_emptied_tree() {
        let mut tree = sparse_tree(1);
        assert_eq!(tree.first(), Some((&0, &0)));
        assert_eq!(tree.last(), Some((&98, &49)));

        for i in 0..50 {
            tree.delete(&(i * 2));
        }
        assert!(tree.begin().is_done());
        assert!(tree.end().is_done());
        assert!(tree.lower_bound(&10).is_done());
        assert!(tree.upper_bound(&10).is_done());
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);

        let empty: BPlusTree<i32, ()> = BPlusTree::new(2).unwrap();
        assert!(empty.begin().is_done());
        assert!(empty.end().is_done());
    }

    #[test]
    fn test_range_bounds() {
        let tree = sparse_tree(2);
        let keys: Vec<i32> = tree.range(10..20).map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![10, 12, 14, 16, 18]);

        let keys: Vec<i32> = tree
            .range((Bound::Excluded(10), Bound::Included(20)))
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(keys, vec![12, 14, 16, 18, 20]);

        let keys: Vec<i32> = tree
            .range((Bound::Excluded(11), Bound::Excluded(16)))
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(keys, vec![12, 14]);

        assert_eq!(tree.range(95..).count(), 2);
        assert_eq!(tree.range(..).count(), 50);
        assert_eq!(tree.range(200..).count(), 0);

        let mut range = tree.range(0..3);
        assert_eq!(range.next(), Some((&0, &0)));
        assert_eq!(range.next(), Some((&2, &1)));
        assert_eq!(range.next(), None);
        assert_eq!(range.next(), None);
    }
}
