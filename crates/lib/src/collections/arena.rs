//! Slot arena shared by the linked containers.
//!
//! Nodes are stored in a `Vec` of slots and reference each other through
//! [`NodeId`] indices instead of pointers. Freed slots are threaded onto an
//! intrusive free list and recycled by later insertions, so long-lived
//! containers do not grow monotonically under churn.

/// Handle to a slot in an [`Arena`].
///
/// A `NodeId` stays valid until the element it names is removed from its
/// container. Removal frees the slot for reuse, so holders of a stale id
/// must discard it; the store layer guarantees this by purging its index
/// entry in the same operation that detaches the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<u32> },
}

/// Growable slot storage with free-list recycling.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a value and return its slot handle.
    pub(crate) fn insert(&mut self, value: T) -> NodeId {
        self.insert_with(|_| value)
    }

    /// Insert a value built from its own future handle.
    ///
    /// Needed by the ring, whose first node must link back to itself.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(NodeId) -> T) -> NodeId {
        self.len += 1;
        if let Some(index) = self.free_head {
            let id = NodeId(index);
            let value = build(id);
            let slot = &mut self.slots[index as usize];
            if let Slot::Vacant { next_free } = *slot {
                self.free_head = next_free;
            }
            *slot = Slot::Occupied(value);
            id
        } else {
            let id = NodeId(self.slots.len() as u32);
            let value = build(id);
            self.slots.push(Slot::Occupied(value));
            id
        }
    }

    /// Remove the value in `id`'s slot, freeing the slot for reuse.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<T> {
        let slot = self.slots.get_mut(id.0 as usize)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        let freed = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id.0);
        self.len -= 1;
        match freed {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0 as usize)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0 as usize)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}
