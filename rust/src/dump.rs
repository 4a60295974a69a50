//! Diagnostic dumps built on the read-only structural walk.
//!
//! These are plain visitors over [`NodeView`] and [`Cursor`]; they hold no
//! state of their own and never touch the tree's internals.

use std::fmt;

use log::{debug, log_enabled, Level};

use crate::cursor::Cursor;
use crate::tree_structure::NodeView;
use crate::types::BPlusTree;

/// Every node of a tree, depth first from the root, one block per node.
///
/// ```
/// use bplus_index::{BPlusTree, TreeDump};
///
/// let mut tree = BPlusTree::new(1).unwrap();
/// for i in 1..=3 {
///     tree.insert(i, i * 10);
/// }
/// let text = TreeDump::new(&tree).to_string();
/// assert!(text.starts_with("branch 0\n"));
/// assert!(text.contains("keys: [2]"));
/// ```
pub struct TreeDump<'a, K, V> {
    tree: &'a BPlusTree<K, V>,
}

impl<'a, K, V> TreeDump<'a, K, V> {
    pub fn new(tree: &'a BPlusTree<K, V>) -> Self {
        Self { tree }
    }
}

fn label<K, V>(node: &NodeView<'_, K, V>) -> String {
    let kind = if node.is_leaf() { "leaf" } else { "branch" };
    format!("{} {}", kind, node.id())
}

fn optional_label<K, V>(node: Option<NodeView<'_, K, V>>) -> String {
    node.map_or_else(|| "-".to_string(), |n| label(&n))
}

fn write_node<K: fmt::Debug, V: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    node: &NodeView<'_, K, V>,
) -> fmt::Result {
    writeln!(f, "{}", label(node))?;
    writeln!(f, "  parent: {}", optional_label(node.parent()))?;
    writeln!(f, "  keys: {:?}", node.keys())?;
    if let Some(values) = node.values() {
        writeln!(f, "  values: {:?}", values)?;
        writeln!(f, "  prev: {}", optional_label(node.prev_leaf()))?;
        writeln!(f, "  next: {}", optional_label(node.next_leaf()))?;
    } else {
        let children: Vec<String> = node.children().map(|c| label(&c)).collect();
        writeln!(f, "  children: [{}]", children.join(", "))?;
    }
    for child in node.children() {
        write_node(f, &child)?;
    }
    Ok(())
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Display for TreeDump<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, &self.tree.root_view())
    }
}

/// The keys from a cursor position to the end of the chain, each quoted and
/// preceded by a space.
///
/// ```
/// use bplus_index::{BPlusTree, LeafDump};
///
/// let mut tree = BPlusTree::new(2).unwrap();
/// tree.insert("b", 2);
/// tree.insert("a", 1);
/// assert_eq!(LeafDump::new(tree.begin()).to_string(), " 'a' 'b'");
/// ```
pub struct LeafDump<'a, K, V> {
    start: Cursor<'a, K, V>,
}

impl<'a, K, V> LeafDump<'a, K, V> {
    pub fn new(start: Cursor<'a, K, V>) -> Self {
        Self { start }
    }
}

impl<K: fmt::Display, V> fmt::Display for LeafDump<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.start.keys() {
            write!(f, " '{}'", key)?;
        }
        Ok(())
    }
}

/// Emit [`TreeDump`] through the `log` facade at debug level.
pub fn log_tree<K: fmt::Debug, V: fmt::Debug>(tree: &BPlusTree<K, V>) {
    if !log_enabled!(Level::Debug) {
        return;
    }
    for line in TreeDump::new(tree).to_string().lines() {
        debug!("{}", line);
    }
}
