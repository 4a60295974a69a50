//! INSERT operations for BPlusTree.
//!
//! This module contains insertion, leaf splitting, and the bottom-up split
//! propagation that grows the tree by one level whenever the root splits.

use log::{debug, trace};

use crate::types::{BPlusTree, BranchNode, NodeId, NodeRef, NULL_NODE};

impl<K: Ord + Clone, V> BPlusTree<K, V> {
    /// Insert a key-value pair into the tree.
    ///
    /// If the key is already present its value is replaced in place and the
    /// previous value is returned; the length does not change.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::BPlusTree;
    ///
    /// let mut tree = BPlusTree::new(2).unwrap();
    /// assert_eq!(tree.insert(3, "b"), None);
    /// assert_eq!(tree.insert(3, "x"), Some("b"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let leaf_id = self.find_leaf(&key);
        let leaf = &mut self.leaf_arena[leaf_id];
        if let Some(old_value) = leaf.insert(key, value) {
            return Some(old_value);
        }
        self.len += 1;

        if leaf.needs_split(2 * self.order) {
            self.split_leaf(leaf_id);
        }
        None
    }

    // ============================================================================
    // SPLITTING
    // ============================================================================

    /// Move the upper half of an overfull leaf into a new right sibling and
    /// hand the sibling's first key to the parent as a separator.
    fn split_leaf(&mut self, leaf_id: NodeId) {
        let right = self.leaf_arena[leaf_id].split_off(self.order, leaf_id);
        let parent = right.parent;
        let old_next = right.next;
        let separator = right.keys[0].clone();

        let right_id = self.leaf_arena.allocate(right);
        self.leaf_arena[leaf_id].next = right_id;
        if old_next == NULL_NODE {
            self.end = right_id;
        } else {
            self.leaf_arena[old_next].prev = right_id;
        }
        trace!("split leaf {} into {} and {}", leaf_id, leaf_id, right_id);

        self.split_node(parent, NodeRef::Leaf(leaf_id), NodeRef::Leaf(right_id), separator);
    }

    /// Insert `separator` and `right` into `parent`, splitting ancestors for
    /// as long as they overflow. Reaching a missing parent grows a new root.
    fn split_node(
        &mut self,
        mut parent: NodeId,
        mut left: NodeRef,
        mut right: NodeRef,
        mut separator: K,
    ) {
        loop {
            if parent == NULL_NODE {
                let mut root = BranchNode::new(self.order);
                root.keys.push(separator);
                root.children.push(left);
                root.children.push(right);
                let root_id = self.branch_arena.allocate(root);
                self.set_parent(left, root_id);
                self.set_parent(right, root_id);
                self.root = NodeRef::Branch(root_id);
                debug!("tree grew to height {} with new root {}", self.height(), root_id);
                return;
            }

            let branch = &mut self.branch_arena[parent];
            branch.insert_separator(separator, right);
            if !branch.needs_split(2 * self.order) {
                return;
            }

            let (sibling, promoted) = branch.split_off(self.order);
            let grandparent = sibling.parent;
            let sibling_id = self.branch_arena.allocate(sibling);
            for index in 0..self.branch_arena[sibling_id].children.len() {
                let child = self.branch_arena[sibling_id].children[index];
                self.set_parent(child, sibling_id);
            }
            trace!("split branch {} into {} and {}", parent, parent, sibling_id);

            left = NodeRef::Branch(parent);
            right = NodeRef::Branch(sibling_id);
            separator = promoted;
            parent = grandparent;
        }
    }
}

impl<K, V> BPlusTree<K, V> {
    pub(crate) fn set_parent(&mut self, node: NodeRef, parent: NodeId) {
        match node {
            NodeRef::Leaf(id) => self.leaf_arena[id].parent = parent,
            NodeRef::Branch(id) => self.branch_arena[id].parent = parent,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{BPlusTree, NodeRef, NULL_NODE};

    #[test]
    fn test_insert_without_split() {
        let mut tree = BPlusTree::new(2).unwrap();
        for k in [4, 2, 3, 1] {
            assert_eq!(tree.insert(k, k * 10), None);
        }
        assert!(tree.is_leaf_root());
        assert_eq!(tree.leaf(tree.begin).keys, vec![1, 2, 3, 4]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_first_split_creates_root() {
        let mut tree = BPlusTree::new(1).unwrap();
        tree.insert(1, "a");
        tree.insert(2, "b");
        tree.insert(3, "c");

        let NodeRef::Branch(root_id) = tree.root else {
            panic!("root should be a branch after the first split");
        };
        let root = tree.branch(root_id);
        assert_eq!(root.keys, vec![2]);
        assert_eq!(root.parent, NULL_NODE);

        let left = tree.leaf(tree.begin);
        let right = tree.leaf(tree.end);
        assert_eq!(left.keys, vec![1]);
        assert_eq!(right.keys, vec![2, 3]);
        assert_eq!(left.next, tree.end);
        assert_eq!(right.prev, tree.begin);
        assert_eq!(left.parent, root_id);
        assert_eq!(right.parent, root_id);
        tree.validate().unwrap();
    }

    #[test]
    fn test_split_in_middle_of_chain_relinks_prev() {
        let mut tree = BPlusTree::new(1).unwrap();
        for k in [10, 20, 30, 40, 50] {
            tree.insert(k, ());
        }
        // Force a split of a leaf that already has a right neighbour.
        tree.insert(11, ());
        tree.insert(12, ());
        tree.validate().unwrap();
    }

    #[test]
    fn test_branch_splits_reparent_moved_children() {
        let mut tree = BPlusTree::new(1).unwrap();
        for k in 0..64 {
            tree.insert(k, k);
            tree.validate().unwrap();
        }
        assert!(tree.height() >= 4);
        assert_eq!(tree.len(), 64);
    }

    #[test]
    fn test_overwrite_does_not_grow() {
        let mut tree = BPlusTree::new(2).unwrap();
        for k in 0..30 {
            tree.insert(k, 0);
        }
        let leaves = tree.leaf_count();
        for k in 0..30 {
            assert_eq!(tree.insert(k, 1), Some(0));
        }
        assert_eq!(tree.len(), 30);
        assert_eq!(tree.leaf_count(), leaves);
    }
}
