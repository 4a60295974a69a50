//! Core types and data structures for BPlusTree.
//!
//! This module contains the tree, its two node kinds, and the identifiers used
//! to link nodes together inside the arenas owned by the tree.

use crate::compact_arena::CompactArena;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest accepted order. A node of order `t` splits once it holds more
/// than `2t` keys.
pub(crate) const MIN_ORDER: usize = 1;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Marks an absent parent or sibling link.
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// In-memory B+ tree mapping unique ordered keys to values.
///
/// Values live only in leaves. Leaves form a doubly linked chain in ascending
/// key order, which is what [`Cursor`](crate::Cursor) walks for ordered
/// traversal in either direction.
///
/// Removal never merges or rebalances nodes: a leaf emptied by removals stays
/// in the chain and in the tree shape. Lookups, insertions and cursors all
/// treat such leaves as transparent.
///
/// # Examples
///
/// ```
/// use bplus_index::BPlusTree;
///
/// let mut tree = BPlusTree::new(2).unwrap();
/// tree.insert(1, "one");
/// tree.insert(2, "two");
/// tree.insert(3, "three");
///
/// assert_eq!(tree.get(&2), Some(&"two"));
/// assert_eq!(tree.len(), 3);
///
/// let cursor = tree.lower_bound(&2);
/// assert_eq!(cursor.key(), Some(&2));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n)
/// - **Removal**: O(log n), no structural repair
/// - **Bound queries**: O(log n) plus any empty leaves skipped
/// - **Iteration**: O(n)
#[derive(Debug)]
pub struct BPlusTree<K, V> {
    /// Branching factor `t`; nodes split above `2t` keys.
    pub(crate) order: usize,
    /// The root node of the tree.
    pub(crate) root: NodeRef,
    /// Leftmost leaf of the chain.
    pub(crate) begin: NodeId,
    /// Rightmost leaf of the chain.
    pub(crate) end: NodeId,
    /// Number of live key-value pairs.
    pub(crate) len: usize,

    pub(crate) leaf_arena: CompactArena<LeafNode<K, V>>,
    pub(crate) branch_arena: CompactArena<BranchNode<K>>,
}

/// Leaf node containing key-value pairs.
#[derive(Debug, Clone)]
pub struct LeafNode<K, V> {
    /// Sorted list of keys.
    pub(crate) keys: Vec<K>,
    /// List of values corresponding to keys.
    pub(crate) values: Vec<V>,
    pub(crate) parent: NodeId,
    /// Next leaf in ascending key order.
    pub(crate) next: NodeId,
    /// Previous leaf in ascending key order.
    pub(crate) prev: NodeId,
}

/// Internal (branch) node containing separator keys and child references.
#[derive(Debug, Clone)]
pub struct BranchNode<K> {
    /// Sorted list of separator keys.
    pub(crate) keys: Vec<K>,
    /// Always one more child than keys.
    pub(crate) children: Vec<NodeRef>,
    pub(crate) parent: NodeId,
}

// ============================================================================
// ENUMS
// ============================================================================

/// Node reference that can be either a leaf or branch node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Leaf(NodeId),
    Branch(NodeId),
}

impl NodeRef {
    /// Return the raw node ID.
    pub fn id(&self) -> NodeId {
        match *self {
            NodeRef::Leaf(id) => id,
            NodeRef::Branch(id) => id,
        }
    }

    /// Returns true if this reference points to a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeRef::Leaf(_))
    }
}
