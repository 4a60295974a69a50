//! Tree structure queries for BPlusTree.
//!
//! Size and shape statistics, plus [`NodeView`], a read-only handle for
//! walking the node graph from outside the crate. Nothing reachable through a
//! view can mutate the tree.

use std::fmt;

use crate::types::{BPlusTree, NodeId, NodeRef, NULL_NODE};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K, V> BPlusTree<K, V> {
    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the root is a leaf node.
    pub fn is_leaf_root(&self) -> bool {
        self.root.is_leaf()
    }

    /// Number of levels from the root down to the leaves, counting both.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut current = self.root;
        while let NodeRef::Branch(id) = current {
            current = self.branch(id).children[0];
            height += 1;
        }
        height
    }

    /// Returns the number of leaf nodes in the tree.
    pub fn leaf_count(&self) -> usize {
        self.leaf_arena.len()
    }

    /// Returns the number of branch nodes in the tree.
    pub fn branch_count(&self) -> usize {
        self.branch_arena.len()
    }

    /// Leaves that removals have emptied but that remain linked in the tree.
    pub fn empty_leaf_count(&self) -> usize {
        self.leaf_arena
            .iter()
            .filter(|(_, leaf)| leaf.is_empty())
            .count()
    }

    // ============================================================================
    // STRUCTURAL WALK
    // ============================================================================

    /// Read-only view of the root node.
    pub fn root_view(&self) -> NodeView<'_, K, V> {
        NodeView::new(self, self.root)
    }

    /// Read-only views of every leaf, following the chain from the first.
    pub fn leaves(&self) -> impl Iterator<Item = NodeView<'_, K, V>> + '_ {
        let mut next = self.begin;
        std::iter::from_fn(move || {
            if next == NULL_NODE {
                return None;
            }
            let view = NodeView::new(self, NodeRef::Leaf(next));
            next = self.leaf(next).next;
            Some(view)
        })
    }
}

// ============================================================================
// NODE VIEW
// ============================================================================

/// Borrowed, read-only handle on a single node.
pub struct NodeView<'a, K, V> {
    tree: &'a BPlusTree<K, V>,
    node: NodeRef,
}

impl<'a, K, V> NodeView<'a, K, V> {
    fn new(tree: &'a BPlusTree<K, V>, node: NodeRef) -> Self {
        Self { tree, node }
    }

    fn leaf_view(&self, id: NodeId) -> Option<NodeView<'a, K, V>> {
        (id != NULL_NODE).then(|| NodeView::new(self.tree, NodeRef::Leaf(id)))
    }

    /// Arena id of the node. Leaf and branch ids are numbered separately.
    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    /// The underlying node reference.
    pub fn node_ref(&self) -> NodeRef {
        self.node
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Keys of a leaf, or separator keys of a branch.
    pub fn keys(&self) -> &'a [K] {
        match self.node {
            NodeRef::Leaf(id) => &self.tree.leaf(id).keys,
            NodeRef::Branch(id) => &self.tree.branch(id).keys,
        }
    }

    /// Values of a leaf; `None` for branches.
    pub fn values(&self) -> Option<&'a [V]> {
        match self.node {
            NodeRef::Leaf(id) => Some(&self.tree.leaf(id).values),
            NodeRef::Branch(_) => None,
        }
    }

    /// Children of a branch in key order; empty for leaves.
    pub fn children(&self) -> impl Iterator<Item = NodeView<'a, K, V>> + 'a {
        let tree = self.tree;
        let children: &'a [NodeRef] = match self.node {
            NodeRef::Leaf(_) => &[],
            NodeRef::Branch(id) => &tree.branch(id).children,
        };
        children.iter().map(move |child| NodeView::new(tree, *child))
    }

    /// The parent branch, or `None` for the root.
    pub fn parent(&self) -> Option<NodeView<'a, K, V>> {
        let parent = match self.node {
            NodeRef::Leaf(id) => self.tree.leaf(id).parent,
            NodeRef::Branch(id) => self.tree.branch(id).parent,
        };
        (parent != NULL_NODE).then(|| NodeView::new(self.tree, NodeRef::Branch(parent)))
    }

    /// The next leaf in the chain; `None` for branches and the last leaf.
    pub fn next_leaf(&self) -> Option<NodeView<'a, K, V>> {
        match self.node {
            NodeRef::Leaf(id) => self.leaf_view(self.tree.leaf(id).next),
            NodeRef::Branch(_) => None,
        }
    }

    /// The previous leaf in the chain; `None` for branches and the first leaf.
    pub fn prev_leaf(&self) -> Option<NodeView<'a, K, V>> {
        match self.node {
            NodeRef::Leaf(id) => self.leaf_view(self.tree.leaf(id).prev),
            NodeRef::Branch(_) => None,
        }
    }
}

impl<K, V> Clone for NodeView<'_, K, V> {
    fn clone(&self) -> Self {
        Self::new(self.tree, self.node)
    }
}

impl<K, V> fmt::Debug for NodeView<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeView").field(&self.node).finish()
    }
}
