//! Construction and initialization logic for BPlusTree and nodes.
//!
//! This module contains order validation, arena initialization and the
//! default implementations.

use crate::compact_arena::CompactArena;
use crate::error::{BPlusTreeError, InitResult};
use crate::types::{BPlusTree, BranchNode, LeafNode, NodeRef, MIN_ORDER, NULL_NODE};

/// Default order for B+ tree nodes
pub const DEFAULT_ORDER: usize = 16;

/// Upper limit on the key slots a fresh node reserves up front.
const MAX_PREALLOCATED_KEYS: usize = 64;

/// Key slots to reserve for a node of `order`: `2t` plus one overflow slot,
/// capped so that very large orders grow on demand.
fn reserved_keys(order: usize) -> usize {
    order
        .saturating_mul(2)
        .saturating_add(1)
        .min(MAX_PREALLOCATED_KEYS)
}

impl<K, V> BPlusTree<K, V> {
    /// Create a B+ tree with the given order.
    ///
    /// # Arguments
    ///
    /// * `order` - Branching factor `t`; a node splits once it holds more than
    ///   `2t` keys (minimum 1)
    ///
    /// # Returns
    ///
    /// Returns `Ok(BPlusTree)` if the order is valid, `Err(BPlusTreeError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::BPlusTree;
    ///
    /// let tree = BPlusTree::<i32, String>::new(2).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BPlusTree::<i32, String>::new(0).is_err());
    /// ```
    pub fn new(order: usize) -> InitResult<Self> {
        if order < MIN_ORDER {
            return Err(BPlusTreeError::invalid_order(order, MIN_ORDER));
        }
        // A branch holds up to `2t + 1` keys and `2t + 2` children before it splits.
        if order.checked_mul(2).and_then(|n| n.checked_add(2)).is_none() {
            return Err(BPlusTreeError::order_too_large(order));
        }
        Ok(Self::with_checked_order(order))
    }

    /// Create a B+ tree with default order.
    ///
    /// This is equivalent to calling `new(DEFAULT_ORDER)`.
    pub fn with_default_order() -> Self {
        Self::with_checked_order(DEFAULT_ORDER)
    }

    fn with_checked_order(order: usize) -> Self {
        // The tree starts as a single empty leaf that is root, begin and end.
        let mut leaf_arena = CompactArena::new();
        let root_id = leaf_arena.allocate(LeafNode::new(order));

        Self {
            order,
            root: NodeRef::Leaf(root_id),
            begin: root_id,
            end: root_id,
            len: 0,
            leaf_arena,
            branch_arena: CompactArena::new(),
        }
    }

    /// The branching factor this tree was built with.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of keys a node may hold before it must split.
    pub fn max_keys(&self) -> usize {
        2 * self.order
    }
}

impl<K, V> LeafNode<K, V> {
    /// Creates an unlinked leaf with room for one overflow key.
    pub(crate) fn new(order: usize) -> Self {
        Self {
            keys: Vec::with_capacity(reserved_keys(order)),
            values: Vec::with_capacity(reserved_keys(order)),
            parent: NULL_NODE,
            next: NULL_NODE,
            prev: NULL_NODE,
        }
    }
}

impl<K> BranchNode<K> {
    /// Creates a parentless branch node with room for one overflow key.
    pub(crate) fn new(order: usize) -> Self {
        Self {
            keys: Vec::with_capacity(reserved_keys(order)),
            children: Vec::with_capacity(reserved_keys(order) + 1),
            parent: NULL_NODE,
        }
    }
}

impl<K, V> Default for BPlusTree<K, V> {
    /// Create a B+ tree with default order.
    fn default() -> Self {
        Self::with_default_order()
    }
}
