//! Unbalanced binary search tree used as a secondary key index.
//!
//! The index never owns records; in the store layer its values are
//! [`NodeId`](super::NodeId) handles into the ring that does. Lookups are a
//! plain descent, structural edits recurse the way the algorithms are
//! usually written, and deletion uses the classic in-order successor
//! replacement so both subtrees stay ordered.
//!
//! No rebalancing is performed. At the record counts this library serves
//! (hundreds per store) that is fine; sorted insertion degenerates the tree
//! into a chain and lookups into O(n), which the store tolerates.

use std::{borrow::Borrow, cmp::Ordering};

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

/// Ordered key/value map over an unbalanced BST.
///
/// Keys are unique: inserting an existing key replaces its value and
/// returns the old one. Removal hands the value back, and
/// [`for_range`](SearchIndex::for_range) walks an inclusive key range in
/// ascending order.
pub struct SearchIndex<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> SearchIndex<K, V> {
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every entry, leaving an empty tree.
    pub fn clear(&mut self) {
        // Tear down with a worklist; a degenerate chain would otherwise
        // recurse node-by-node when the boxes drop.
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<K: Ord, V> SearchIndex<K, V> {
    /// Insert `value` under `key`, replacing and returning any previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let replaced = Self::insert_node(&mut self.root, key, value);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    fn insert_node(link: &mut Link<K, V>, key: K, value: V) -> Option<V> {
        match link.as_deref_mut() {
            None => {
                *link = Some(Box::new(Node {
                    key,
                    value,
                    left: None,
                    right: None,
                }));
                None
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert_node(&mut node.left, key, value),
                Ordering::Greater => Self::insert_node(&mut node.right, key, value),
                Ordering::Equal => Some(std::mem::replace(&mut node.value, value)),
            },
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::get_node_mut(&mut self.root, key)
    }

    fn get_node_mut<'a, Q>(link: &'a mut Link<K, V>, key: &Q) -> Option<&'a mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = link.as_deref_mut()?;
        match key.cmp(node.key.borrow()) {
            Ordering::Less => Self::get_node_mut(&mut node.left, key),
            Ordering::Greater => Self::get_node_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.value),
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Remove `key` and return its value, if present.
    ///
    /// A node with two children is replaced by its in-order successor: the
    /// leftmost node of the right subtree is spliced out of its position
    /// and takes over the removed node's place, adopting both subtrees.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = Self::remove_node(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_node<Q>(link: &mut Link<K, V>, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let ordering = {
            let node = link.as_deref()?;
            key.cmp(node.key.borrow())
        };
        match ordering {
            Ordering::Less => Self::remove_node(&mut link.as_deref_mut()?.left, key),
            Ordering::Greater => Self::remove_node(&mut link.as_deref_mut()?.right, key),
            Ordering::Equal => {
                let node = link.take()?;
                let Node {
                    key: _,
                    value,
                    left,
                    right,
                } = *node;
                match (left, right) {
                    (None, None) => {}
                    (Some(child), None) | (None, Some(child)) => *link = Some(child),
                    (Some(left_child), Some(right_child)) => {
                        let mut right_link = Some(right_child);
                        if let Some(mut successor) = Self::detach_min(&mut right_link) {
                            successor.left = Some(left_child);
                            successor.right = right_link;
                            *link = Some(successor);
                        }
                    }
                }
                Some(value)
            }
        }
    }

    /// Splice out and return the leftmost node of the subtree at `link`,
    /// promoting its right child into the vacated spot.
    fn detach_min(link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
        let has_left = link.as_deref().map(|node| node.left.is_some())?;
        if has_left {
            Self::detach_min(&mut link.as_deref_mut()?.left)
        } else {
            let mut node = link.take()?;
            *link = node.right.take();
            Some(node)
        }
    }

    /// Visit every entry in ascending key order.
    pub fn for_each_in_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a K, &'a V),
    {
        Self::visit_in_order(&self.root, &mut f);
    }

    fn visit_in_order<'a, F>(link: &'a Link<K, V>, f: &mut F)
    where
        F: FnMut(&'a K, &'a V),
    {
        if let Some(node) = link.as_deref() {
            Self::visit_in_order(&node.left, f);
            f(&node.key, &node.value);
            Self::visit_in_order(&node.right, f);
        }
    }

    /// Visit every entry with `min <= key <= max` in ascending key order.
    ///
    /// Both bounds are inclusive; when `min > max` nothing is visited.
    /// Subtrees that cannot contain in-range keys are pruned.
    pub fn for_range<'a, Q, F>(&'a self, min: &Q, max: &Q, mut f: F)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        F: FnMut(&'a K, &'a V),
    {
        Self::visit_range(&self.root, min, max, &mut f);
    }

    fn visit_range<'a, Q, F>(link: &'a Link<K, V>, min: &Q, max: &Q, f: &mut F)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        F: FnMut(&'a K, &'a V),
    {
        let Some(node) = link.as_deref() else { return };
        let key = node.key.borrow();
        if key > min {
            Self::visit_range(&node.left, min, max, f);
        }
        if key >= min && key <= max {
            f(&node.key, &node.value);
        }
        if key < max {
            Self::visit_range(&node.right, min, max, f);
        }
    }
}

impl<K, V> Default for SearchIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for SearchIndex<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}
