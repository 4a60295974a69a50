//! DELETE operations for BPlusTree.
//!
//! Removal only ever touches the leaf holding the key. Underfull or empty
//! leaves are not merged, borrowed into or unlinked, and separators above
//! them stay where they are; every reader skips empty leaves instead.

use log::trace;

use crate::types::BPlusTree;

impl<K: Ord, V> BPlusTree<K, V> {
    /// Remove a key from the tree, returning the value if it existed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::BPlusTree;
    ///
    /// let mut tree = BPlusTree::new(2).unwrap();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.remove(&1), Some("one"));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let leaf_id = self.find_leaf(key);
        let leaf = &mut self.leaf_arena[leaf_id];
        let value = leaf.remove(key)?;
        self.len -= 1;

        if leaf.is_empty() {
            trace!("leaf {} emptied and left in place", leaf_id);
        }
        Some(value)
    }

    /// Remove a key from the tree, reporting whether it was present.
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }
}
