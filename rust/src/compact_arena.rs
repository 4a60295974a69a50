//! Append-only arena backing the tree's nodes.
//!
//! Nodes are addressed by dense `NodeId`s and are never released while the
//! arena lives, so an id handed out once stays valid for the arena's lifetime.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

use crate::types::{NodeId, NULL_NODE};

/// Arena storing nodes contiguously in allocation order.
#[derive(Debug)]
pub struct CompactArena<T> {
    storage: Vec<T>,
}

impl<T> CompactArena<T> {
    /// Create a new empty compact arena
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Allocate a new item in the arena and return its ID
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = self.storage.len();
        let id = NodeId::try_from(index).unwrap_or(NULL_NODE);
        assert!(id != NULL_NODE, "arena exhausted the NodeId space");
        self.storage.push(item);
        id
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        if id == NULL_NODE {
            return None;
        }
        self.storage.get(usize::try_from(id).ok()?)
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        if id == NULL_NODE {
            return None;
        }
        self.storage.get_mut(usize::try_from(id).ok()?)
    }

    /// Iterate over `(id, item)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.storage
            .iter()
            .enumerate()
            .map(|(index, item)| (index as NodeId, item))
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.storage.len()
    }
}

impl<T> Default for CompactArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Panics on an id the arena never handed out, like slice indexing.
impl<T> Index<NodeId> for CompactArena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        &self.storage[id as usize]
    }
}

impl<T> IndexMut<NodeId> for CompactArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.storage[id as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_arena_basic_operations() {
        let mut arena = CompactArena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);
        let id3 = arena.allocate(126);

        assert_eq!(arena.get(id1), Some(&42));
        assert_eq!(arena.get(id2), Some(&84));
        assert_eq!(arena[id3], 126);

        assert!(arena.get(NULL_NODE).is_none());
        assert!(arena.get(3).is_none());
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_ids_are_dense_and_stable() {
        let mut arena = CompactArena::new();
        let ids: Vec<NodeId> = (0..5).map(|i| arena.allocate(i * 10)).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);

        arena[2] = 99;
        if let Some(item) = arena.get_mut(4) {
            *item += 1;
        }
        let items: Vec<(NodeId, i32)> = arena.iter().map(|(id, v)| (id, *v)).collect();
        assert_eq!(items, vec![(0, 0), (1, 10), (2, 99), (3, 30), (4, 41)]);
        assert_eq!(arena.len(), 5);
    }

    #[test]
    fn test_empty_arena() {
        let arena: CompactArena<u8> = CompactArena::default();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.get(0), None);
    }
}
