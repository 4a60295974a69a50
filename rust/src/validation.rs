//! Validation utilities for BPlusTree.
//!
//! Invariant checking used by the test suites. None of this runs on the normal
//! insert/remove paths.

use crate::error::{BPlusTreeError, BTreeResult, TreeResult};
use crate::types::{BPlusTree, NodeId, NodeRef, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord, V> BPlusTree<K, V> {
    /// Check if the tree maintains B+ tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> BTreeResult<()> {
        let mut leaves = Vec::new();
        let mut leaf_depth = None;
        self.check_node(self.root, NULL_NODE, None, None, 1, &mut leaf_depth, &mut leaves)?;
        self.check_leaf_chain(&leaves)?;

        let live: usize = leaves.iter().map(|id| self.leaf(*id).len()).sum();
        if live != self.len {
            return Err(BPlusTreeError::data_integrity(
                "Length",
                &format!("tree records {} items but leaves hold {}", self.len, live),
            ));
        }
        Ok(())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> BTreeResult<()> {
        self.check_invariants_detailed()
    }

    // ============================================================================
    // VALIDATION HELPERS
    // ============================================================================

    /// Check one subtree whose keys must lie in `[lower, upper)`, collecting
    /// its leaves in left-to-right order.
    #[allow(clippy::too_many_arguments)]
    fn check_node(
        &self,
        node: NodeRef,
        expected_parent: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
        depth: usize,
        leaf_depth: &mut Option<usize>,
        leaves: &mut Vec<NodeId>,
    ) -> TreeResult<()> {
        let (keys, parent, kind) = match node {
            NodeRef::Leaf(id) => {
                let leaf = self.get_leaf(id).ok_or_else(|| {
                    BPlusTreeError::corrupted_tree("Arena", &format!("missing leaf {}", id))
                })?;
                if leaf.keys.len() != leaf.values.len() {
                    return Err(BPlusTreeError::data_integrity(
                        &format!("Leaf {}", id),
                        &format!("{} keys but {} values", leaf.keys.len(), leaf.values.len()),
                    ));
                }
                (&leaf.keys, leaf.parent, "Leaf")
            }
            NodeRef::Branch(id) => {
                let branch = self.get_branch(id).ok_or_else(|| {
                    BPlusTreeError::corrupted_tree("Arena", &format!("missing branch {}", id))
                })?;
                if branch.children.len() != branch.keys.len() + 1 {
                    return Err(BPlusTreeError::data_integrity(
                        &format!("Branch {}", id),
                        &format!(
                            "{} keys but {} children",
                            branch.keys.len(),
                            branch.children.len()
                        ),
                    ));
                }
                (&branch.keys, branch.parent, "Branch")
            }
        };
        let context = format!("{} {}", kind, node.id());

        if parent != expected_parent {
            return Err(BPlusTreeError::corrupted_tree(
                "Parent link",
                &format!("{} names parent {} instead of {}", context, parent, expected_parent),
            ));
        }
        if keys.len() > self.max_keys() {
            return Err(BPlusTreeError::data_integrity(
                &context,
                &format!("{} keys exceeds maximum {}", keys.len(), self.max_keys()),
            ));
        }
        if keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(BPlusTreeError::data_integrity(&context, "keys not strictly ascending"));
        }
        let below = lower.map_or(false, |lo| keys.first().map_or(false, |k| k < lo));
        let above = upper.map_or(false, |hi| keys.last().map_or(false, |k| k >= hi));
        if below || above {
            return Err(BPlusTreeError::data_integrity(&context, "key outside separator range"));
        }

        match node {
            NodeRef::Leaf(id) => {
                match *leaf_depth {
                    Some(expected) if expected != depth => {
                        return Err(BPlusTreeError::data_integrity(
                            &context,
                            &format!("leaf at depth {} but others at {}", depth, expected),
                        ));
                    }
                    _ => *leaf_depth = Some(depth),
                }
                leaves.push(id);
            }
            NodeRef::Branch(id) => {
                let branch = self.branch(id);
                for (index, child) in branch.children.iter().enumerate() {
                    let child_lower = if index == 0 { lower } else { branch.keys.get(index - 1) };
                    let child_upper = branch.keys.get(index).or(upper);
                    self.check_node(
                        *child,
                        id,
                        child_lower,
                        child_upper,
                        depth + 1,
                        leaf_depth,
                        leaves,
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Check that `next`/`prev` links visit exactly `leaves` in order and that
    /// `begin`/`end` sit at the two ends.
    fn check_leaf_chain(&self, leaves: &[NodeId]) -> TreeResult<()> {
        let first = leaves.first().copied().unwrap_or(NULL_NODE);
        let last = leaves.last().copied().unwrap_or(NULL_NODE);
        if self.begin != first || self.end != last {
            return Err(BPlusTreeError::corrupted_tree(
                "Leaf chain",
                &format!(
                    "begin/end are {}/{} but leftmost/rightmost leaves are {}/{}",
                    self.begin, self.end, first, last
                ),
            ));
        }

        for (position, id) in leaves.iter().enumerate() {
            let leaf = self.leaf(*id);
            let expected_prev = if position == 0 { NULL_NODE } else { leaves[position - 1] };
            let expected_next = leaves.get(position + 1).copied().unwrap_or(NULL_NODE);
            if leaf.prev != expected_prev || leaf.next != expected_next {
                return Err(BPlusTreeError::corrupted_tree(
                    "Leaf chain",
                    &format!(
                        "leaf {} links prev={} next={}, expected prev={} next={}",
                        id, leaf.prev, leaf.next, expected_prev, expected_next
                    ),
                ));
            }
        }

        let mut previous: Option<&K> = None;
        for key in self.keys() {
            if previous.map_or(false, |p| p >= key) {
                return Err(BPlusTreeError::data_integrity(
                    "Leaf chain",
                    "traversal returned keys out of order",
                ));
            }
            previous = Some(key);
        }
        Ok(())
    }
}
