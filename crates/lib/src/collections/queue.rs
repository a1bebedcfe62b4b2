//! Fixed-capacity FIFO chain.
//!
//! Backs the room waiting list. Besides the usual enqueue/dequeue pair it
//! supports removing an arbitrary entry (a waiting customer gives up) and
//! reporting an entry's 1-based position, which is what a "you are number 3
//! in line" message wants. Those two are the only departures from strict
//! FIFO access.

use super::arena::{Arena, NodeId};

pub struct BoundedQueue<T> {
    arena: Arena<Node<T>>,
    front: Option<NodeId>,
    rear: Option<NodeId>,
    capacity: usize,
}

struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

impl<T> BoundedQueue<T> {
    pub const DEFAULT_CAPACITY: usize = 50;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::new(),
            front: None,
            rear: None,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Append at the rear. Returns `false`, leaving the queue untouched,
    /// when it is already at capacity.
    pub fn enqueue(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }
        let id = self.arena.insert(Node { value, next: None });
        match self.rear {
            Some(rear) => {
                if let Some(rear_node) = self.arena.get_mut(rear) {
                    rear_node.next = Some(id);
                }
            }
            None => self.front = Some(id),
        }
        self.rear = Some(id);
        true
    }

    /// Remove and return the value at the front.
    pub fn dequeue(&mut self) -> Option<T> {
        let id = self.front?;
        let node = self.arena.remove(id)?;
        self.front = node.next;
        if self.front.is_none() {
            self.rear = None;
        }
        Some(node.value)
    }

    /// Look at the front value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.arena.get(self.front?).map(|node| &node.value)
    }

    /// Remove and return the first entry matching `pred`, wherever it sits.
    pub fn remove_if(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        let mut prev: Option<NodeId> = None;
        let mut cur = self.front;
        while let Some(id) = cur {
            let matched = self.arena.get(id).is_some_and(|node| pred(&node.value));
            if matched {
                let node = self.arena.remove(id)?;
                match prev {
                    Some(prev_id) => {
                        if let Some(prev_node) = self.arena.get_mut(prev_id) {
                            prev_node.next = node.next;
                        }
                    }
                    None => self.front = node.next,
                }
                if self.rear == Some(id) {
                    self.rear = prev;
                }
                return Some(node.value);
            }
            prev = cur;
            cur = self.arena.get(id).and_then(|node| node.next);
        }
        None
    }

    /// 1-based position of the first entry matching `pred`, counted from
    /// the front. `None` when no entry matches.
    pub fn position_of(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        for (position, value) in self.iter().enumerate() {
            if pred(value) {
                return Some(position + 1);
            }
        }
        None
    }

    /// Walk from the front (earliest) to the rear (latest).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            next: self.front,
        }
    }

    pub fn for_each(&self, mut f: impl FnMut(&T)) {
        for value in self.iter() {
            f(value);
        }
    }

    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.iter().find(|value| pred(value))
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.front = None;
        self.rear = None;
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    arena: &'a Arena<Node<T>>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?)?;
        self.next = node.next;
        Some(&node.value)
    }
}
