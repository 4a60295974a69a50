//! Node implementations for BPlusTree.
//!
//! Node-level searching, insertion, removal and splitting. Nothing here knows
//! about the arenas; re-linking parents and siblings after a split is the
//! tree's job.

use crate::types::{BranchNode, LeafNode, NodeId, NodeRef};

// ============================================================================
// LEAF NODE IMPLEMENTATION
// ============================================================================

impl<K: Ord, V> LeafNode<K, V> {
    // ============================================================================
    // GET OPERATIONS
    // ============================================================================

    /// Get a value by key from this leaf node.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.keys
            .binary_search(key)
            .ok()
            .map(|index| &self.values[index])
    }

    /// Get a mutable reference to a value by key from this leaf node.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.keys
            .binary_search(key)
            .ok()
            .map(|index| &mut self.values[index])
    }

    /// Index of the first key `>= key`, or `len()` if there is none.
    pub fn lower_bound_index(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Number of keys `<= key`; the last such key sits one before it.
    pub fn upper_bound_index(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k <= key)
    }

    // ============================================================================
    // INSERT OPERATIONS
    // ============================================================================

    /// Insert a key-value pair, overwriting the value of an equal key.
    /// Returns the previous value if the key was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.keys.binary_search(&key) {
            Ok(index) => Some(std::mem::replace(&mut self.values[index], value)),
            Err(index) => {
                self.keys.insert(index, key);
                self.values.insert(index, value);
                None
            }
        }
    }

    // ============================================================================
    // DELETE OPERATIONS
    // ============================================================================

    /// Remove a key-value pair from this leaf node.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.keys.binary_search(key).ok()?;
        self.keys.remove(index);
        Some(self.values.remove(index))
    }
}

impl<K, V> LeafNode<K, V> {
    /// Returns the number of key-value pairs in this leaf.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this leaf node is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true once the leaf holds more than `max_keys` keys.
    pub fn needs_split(&self, max_keys: usize) -> bool {
        self.keys.len() > max_keys
    }

    /// Split off entries `[at, len)` into a new right sibling.
    ///
    /// The sibling inherits this leaf's parent and `next` link and points back
    /// at `self_id`. This leaf's own `next` is left for the caller to rewire
    /// once the sibling has an id.
    pub fn split_off(&mut self, at: usize, self_id: NodeId) -> LeafNode<K, V> {
        let mut keys = Vec::with_capacity(self.keys.capacity());
        let mut values = Vec::with_capacity(self.values.capacity());
        keys.extend(self.keys.drain(at..));
        values.extend(self.values.drain(at..));

        LeafNode {
            keys,
            values,
            parent: self.parent,
            next: self.next,
            prev: self_id,
        }
    }
}

// ============================================================================
// BRANCH NODE IMPLEMENTATION
// ============================================================================

impl<K: Ord> BranchNode<K> {
    /// Find the index of the child that should contain the given key.
    ///
    /// This is the number of separators `<= key`: a key equal to a separator
    /// belongs to the subtree on the separator's right.
    pub fn find_child_index(&self, key: &K) -> usize {
        match self.keys.binary_search(key) {
            Ok(index) => index + 1,
            Err(index) => index,
        }
    }

    /// Get the child node for a given key.
    pub fn get_child(&self, key: &K) -> NodeRef {
        self.children[self.find_child_index(key)]
    }

    /// Insert `separator` at its sorted position and `right` immediately after
    /// the child the separator splits.
    pub fn insert_separator(&mut self, separator: K, right: NodeRef) {
        let index = self.find_child_index(&separator);
        self.keys.insert(index, separator);
        self.children.insert(index + 1, right);
    }
}

impl<K> BranchNode<K> {
    /// Returns true once the branch holds more than `max_keys` keys.
    pub fn needs_split(&self, max_keys: usize) -> bool {
        self.keys.len() > max_keys
    }

    /// Split an overfull branch of order `order`, returning the new right
    /// node and the separator promoted to the parent.
    ///
    /// This node keeps keys `[0, order)` and children `[0, order]`; the key at
    /// `order` is promoted and everything after it moves right. Moved children
    /// still name this node as parent until the caller reparents them.
    pub fn split_off(&mut self, order: usize) -> (BranchNode<K>, K) {
        let mut keys = Vec::with_capacity(self.keys.capacity());
        let mut children = Vec::with_capacity(self.children.capacity());
        keys.extend(self.keys.drain(order + 1..));
        children.extend(self.children.drain(order + 1..));
        let promoted = self.keys.remove(order);

        let right = BranchNode {
            keys,
            children,
            parent: self.parent,
        };
        (right, promoted)
    }
}
