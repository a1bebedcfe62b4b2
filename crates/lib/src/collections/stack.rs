//! Fixed-capacity LIFO chain.
//!
//! Used by the booking ledger to keep the most recent payment receipts at
//! hand. A full stack refuses new pushes instead of evicting, so callers
//! decide what an overflow means for them.

pub struct BoundedStack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
    capacity: usize,
}

struct Node<T> {
    value: T,
    below: Option<Box<Node<T>>>,
}

impl<T> BoundedStack<T> {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            top: None,
            len: 0,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Push onto the top. Returns `false`, leaving the stack untouched,
    /// when it is already at capacity.
    pub fn push(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.top = Some(Box::new(Node {
            value,
            below: self.top.take(),
        }));
        self.len += 1;
        true
    }

    /// Pop the most recently pushed value.
    pub fn pop(&mut self) -> Option<T> {
        let node = self.top.take()?;
        self.top = node.below;
        self.len -= 1;
        Some(node.value)
    }

    /// Look at the top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.value)
    }

    /// Walk from the most recent value down to the oldest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
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
        // pop one box at a time so a long chain never drops recursively
        while self.pop().is_some() {}
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BoundedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.below.as_deref();
        Some(&node.value)
    }
}
