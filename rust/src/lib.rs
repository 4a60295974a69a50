//! B+ Tree index in Rust with bidirectional leaf-chain cursors.
//!
//! This crate provides an in-memory B+ tree mapping unique ordered keys to
//! values, supporting point lookup, insertion with overwrite, single-key
//! removal, lower/upper bound queries and ordered traversal in both
//! directions through a linked chain of leaves.
//!
//! Removal does not rebalance: emptied leaves stay in place and
//! every read path steps over them.
//!
//! ```
//! use bplus_index::BPlusTree;
//!
//! let mut tree = BPlusTree::new(1).unwrap();
//! for (k, v) in [(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")] {
//!     tree.insert(k, v);
//! }
//! tree.delete(&3);
//! tree.delete(&4);
//!
//! let forward: Vec<_> = tree.begin().keys().copied().collect();
//! let backward: Vec<_> = tree.end().keys_rev().copied().collect();
//! assert_eq!(forward, [1, 2, 5]);
//! assert_eq!(backward, [5, 2, 1]);
//! ```

mod compact_arena;
mod construction;
mod cursor;
mod delete_operations;
mod dump;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod range_queries;
mod tree_structure;
mod types;
mod validation;

pub use construction::DEFAULT_ORDER;
pub use cursor::Cursor;
pub use dump::{log_tree, LeafDump, TreeDump};
pub use error::{BPlusTreeError, BTreeResult, InitResult};
pub use iteration::{Direction, Iter, Keys, Range, Values};
pub use tree_structure::NodeView;
pub use types::{BPlusTree, NodeId, NodeRef, NULL_NODE};
