//! Iterator implementations for BPlusTree.
//!
//! Every iterator here is a pull-based wrapper around a [`Cursor`]: each call
//! to `next` reads the cursor's entry and then steps it. Dropping an iterator
//! early needs no cleanup.

use std::iter::FusedIterator;
use std::ops::Bound;

use crate::cursor::Cursor;
use crate::types::BPlusTree;

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Which way an iterator walks the leaf chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Iterator over key-value pairs, starting at a cursor position.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    cursor: Cursor<'a, K, V>,
    direction: Direction,
}

/// Iterator over keys.
#[derive(Debug)]
pub struct Keys<'a, K, V> {
    items: Iter<'a, K, V>,
}

/// Iterator over values.
#[derive(Debug)]
pub struct Values<'a, K, V> {
    items: Iter<'a, K, V>,
}

/// Ascending iterator over the key-value pairs inside a range.
#[derive(Debug)]
pub struct Range<'a, K, V> {
    items: Iter<'a, K, V>,
    end: Bound<K>,
}

// ============================================================================
// BPLUSTREE ITERATOR METHODS
// ============================================================================

impl<K, V> BPlusTree<K, V> {
    /// Returns an iterator over all key-value pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.begin().iter()
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.begin().keys()
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        self.begin().values()
    }
}

impl<'a, K, V> IntoIterator for &'a BPlusTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(cursor: Cursor<'a, K, V>, direction: Direction) -> Self {
        Self { cursor, direction }
    }

    /// The direction this iterator walks in.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.entry()?;
        match self.direction {
            Direction::Forward => self.cursor.move_next(),
            Direction::Backward => self.cursor.move_prev(),
        };
        Some(item)
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

// ============================================================================
// KEYS / VALUES IMPLEMENTATION
// ============================================================================

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(items: Iter<'a, K, V>) -> Self {
        Self { items }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(k, _)| k)
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(items: Iter<'a, K, V>) -> Self {
        Self { items }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, v)| v)
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

// ============================================================================
// RANGE IMPLEMENTATION
// ============================================================================

impl<'a, K, V> Range<'a, K, V> {
    pub(crate) fn new(start: Cursor<'a, K, V>, end: Bound<K>) -> Self {
        Self {
            items: Iter::new(start, Direction::Forward),
            end,
        }
    }
}

impl<'a, K: Ord, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.items.next()?;
        let within = match &self.end {
            Bound::Included(end) => key <= end,
            Bound::Excluded(end) => key < end,
            Bound::Unbounded => true,
        };
        if !within {
            self.items.cursor.finish();
            return None;
        }
        Some((key, value))
    }
}

impl<K: Ord, V> FusedIterator for Range<'_, K, V> {}
