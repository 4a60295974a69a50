//! GET operations for BPlusTree.
//!
//! This module contains the read operations for the B+ tree, including key
//! lookup, root-to-leaf descent and helper methods for accessing nodes.

use crate::types::{BPlusTree, BranchNode, LeafNode, NodeId, NodeRef};

impl<K: Ord, V> BPlusTree<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::BPlusTree;
    ///
    /// let mut tree = BPlusTree::new(2).unwrap();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.leaf(self.find_leaf(key)).get(key)
    }

    /// Check if key exists in the tree.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Get a mutable reference to the value for a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::BPlusTree;
    ///
    /// let mut tree = BPlusTree::new(2).unwrap();
    /// tree.insert(1, "one");
    /// if let Some(value) = tree.get_mut(&1) {
    ///     *value = "ONE";
    /// }
    /// assert_eq!(tree.get(&1), Some(&"ONE"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let leaf_id = self.find_leaf(key);
        self.leaf_arena.get_mut(leaf_id)?.get_mut(key)
    }

    // ============================================================================
    // DESCENT
    // ============================================================================

    /// Descend from the root to the leaf whose key range covers `key`.
    pub(crate) fn find_leaf(&self, key: &K) -> NodeId {
        let mut current = self.root;
        loop {
            match current {
                NodeRef::Leaf(id) => return id,
                NodeRef::Branch(id) => current = self.branch(id).get_child(key),
            }
        }
    }
}

impl<K, V> BPlusTree<K, V> {
    // ============================================================================
    // ARENA ACCESS METHODS
    // ============================================================================

    /// Get a reference to a leaf node in the arena.
    pub(crate) fn get_leaf(&self, id: NodeId) -> Option<&LeafNode<K, V>> {
        self.leaf_arena.get(id)
    }

    /// Get a reference to a branch node in the arena.
    pub(crate) fn get_branch(&self, id: NodeId) -> Option<&BranchNode<K>> {
        self.branch_arena.get(id)
    }

    /// Leaf lookup for ids taken from the tree's own links.
    #[inline]
    pub(crate) fn leaf(&self, id: NodeId) -> &LeafNode<K, V> {
        &self.leaf_arena[id]
    }

    #[inline]
    pub(crate) fn branch(&self, id: NodeId) -> &BranchNode<K> {
        &self.branch_arena[id]
    }
}
