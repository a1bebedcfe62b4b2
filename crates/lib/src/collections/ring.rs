//! Circular singly-linked list, the primary owning container.
//!
//! Every record in a store lives in exactly one ring node. The last node's
//! link points back at the first, so traversal is a do-while walk: visit,
//! advance, stop when the starting node comes around again. A null check
//! never terminates a loop here because a healthy ring has no null links.

use std::fmt;

use super::arena::{Arena, NodeId};

struct Node<T> {
    value: T,
    next: NodeId,
}

/// Circular singly-linked list preserving insertion order.
///
/// The ring caches its tail slot so `insert_back` and [`back`](Ring::back)
/// are O(1); the price is re-pointing that cached link whenever the head or
/// tail node is removed. Predicate searches and identity removal walk the
/// cycle once and are O(n).
///
/// [`NodeId`] handles returned by the insert methods remain valid until the
/// element they name is removed and give O(1) access, which is how the
/// store layer's key index reaches into the ring without owning anything.
pub struct Ring<T> {
    arena: Arena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> Ring<T> {
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Append a value behind the cached tail. O(1).
    pub fn insert_back(&mut self, value: T) -> NodeId {
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                let id = self.arena.insert(Node { value, next: head });
                if let Some(prev_tail) = self.arena.get_mut(tail) {
                    prev_tail.next = id;
                }
                self.tail = Some(id);
                id
            }
            _ => self.insert_first(value),
        }
    }

    /// Insert a value before the current head, making it the new head. O(1).
    pub fn insert_front(&mut self, value: T) -> NodeId {
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                let id = self.arena.insert(Node { value, next: head });
                if let Some(tail_node) = self.arena.get_mut(tail) {
                    tail_node.next = id;
                }
                self.head = Some(id);
                id
            }
            _ => self.insert_first(value),
        }
    }

    /// First node of a ring links to itself.
    fn insert_first(&mut self, value: T) -> NodeId {
        let id = self.arena.insert_with(|id| Node { value, next: id });
        self.head = Some(id);
        self.tail = Some(id);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.get(self.head?)
    }

    /// Last element, reached through the cached tail link. O(1).
    pub fn back(&self) -> Option<&T> {
        self.get(self.tail?)
    }

    /// Detach the node `id` and return its value.
    ///
    /// Walks the cycle once to find the predecessor, splices the node out,
    /// and repairs the head/tail links when the removed node carried one.
    /// Returns `None` if `id` is not in this ring.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let head = self.head?;
        if self.arena.len() == 1 {
            if id != head {
                return None;
            }
            let node = self.arena.remove(id)?;
            self.head = None;
            self.tail = None;
            return Some(node.value);
        }

        let mut pred = head;
        loop {
            let next = self.arena.get(pred)?.next;
            if next == id {
                break;
            }
            pred = next;
            if pred == head {
                // completed a full lap without meeting `id`
                return None;
            }
        }

        let node = self.arena.remove(id)?;
        if let Some(pred_node) = self.arena.get_mut(pred) {
            pred_node.next = node.next;
        }
        if self.head == Some(id) {
            self.head = Some(node.next);
        }
        if self.tail == Some(id) {
            self.tail = Some(pred);
        }
        Some(node.value)
    }

    /// Remove and return the first element matching `pred`, in insertion order.
    pub fn remove_if(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        let id = self
            .entries()
            .find(|entry| pred(entry.1))
            .map(|entry| entry.0)?;
        self.remove(id)
    }

    /// First element matching `pred`, in insertion order.
    pub fn find_if(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.iter().find(|value| pred(value))
    }

    /// Mutable access to the first element matching `pred`.
    pub fn find_if_mut(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<&mut T> {
        let id = self
            .entries()
            .find(|entry| pred(entry.1))
            .map(|entry| entry.0)?;
        self.get_mut(id)
    }

    /// Element at 0-based `index` in insertion order. O(n).
    pub fn by_index(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Visit every element once in insertion order.
    pub fn for_each(&self, mut f: impl FnMut(&T)) {
        for value in self.iter() {
            f(value);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            entries: self.entries(),
        }
    }

    pub fn entries(&self) -> Entries<'_, T> {
        Entries {
            arena: &self.arena,
            start: self.head,
            next: self.head,
        }
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }
}

impl<T: Clone> Ring<T> {
    /// Collect the elements matching `pred` into a new ring, preserving
    /// their relative order. The source ring is left untouched.
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Ring<T> {
        let mut matched = Ring::new();
        for value in self.iter() {
            if pred(value) {
                matched.insert_back(value.clone());
            }
        }
        matched
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy walk over `(NodeId, &T)` pairs.
///
/// Remembers the node it started from and finishes when the cycle leads
/// back to it, so every node is yielded exactly once.
pub struct Entries<'a, T> {
    arena: &'a Arena<Node<T>>,
    start: Option<NodeId>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.arena.get(id)?;
        self.next = if Some(node.next) == self.start {
            None
        } else {
            Some(node.next)
        };
        Some((id, &node.value))
    }
}

/// Lazy walk over elements in insertion order.
pub struct Iter<'a, T> {
    entries: Entries<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, value)| value)
    }
}
