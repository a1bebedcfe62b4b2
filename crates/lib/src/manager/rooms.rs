//! Room inventory and the walk-in waiting list.

use std::path::PathBuf;

use serde::Serialize;

use super::ManagerError;
use crate::Result;
use crate::collections::BoundedQueue;
use crate::record::{Room, RoomClass, RoomStatus};
use crate::store::{EntityStore, LoadReport};

/// A customer waiting for a room class to free up.
#[derive(Debug, Clone, Serialize)]
pub struct WaitlistEntry {
    pub customer_id: String,
    pub customer_name: String,
    pub class: RoomClass,
}

/// The room inventory plus a session-scoped waiting list.
///
/// Rooms are keyed by their number, which is assigned by whoever builds
/// the room, so the store carries no id sequence. The waiting list lives
/// only in memory; it empties when the process ends.
pub struct RoomCatalog {
    store: EntityStore<Room>,
    waitlist: BoundedQueue<WaitlistEntry>,
}

impl RoomCatalog {
    pub(crate) fn open(path: PathBuf) -> Self {
        Self {
            store: EntityStore::open("rooms", path, Vec::new()),
            waitlist: BoundedQueue::new(),
        }
    }

    pub fn load(&mut self) -> Result<LoadReport> {
        self.store.load()
    }

    pub fn save(&self) -> Result<()> {
        self.store.save()
    }

    /// Drop in-memory rooms and the waiting list; the file is untouched.
    pub fn clear(&mut self) {
        self.store.clear();
        self.waitlist.clear();
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Look up a room by number.
    ///
    /// # Errors
    /// Returns a not-found error for unknown numbers.
    pub fn room(&self, number: &str) -> Result<&Room> {
        Ok(self.store.get(number)?)
    }

    pub fn contains(&self, number: &str) -> bool {
        self.store.contains(number)
    }

    /// Add a room to the inventory.
    ///
    /// # Errors
    /// Returns a duplicate-key error if the number is taken.
    pub fn add_room(&mut self, room: Room) -> Result<()> {
        self.store.add(room)
    }

    /// Retire a room from the inventory and hand it back.
    ///
    /// # Errors
    /// Returns [`ManagerError::RoomOccupied`] while guests are in it, or
    /// a not-found error for unknown numbers.
    pub fn remove_room(&mut self, number: &str) -> Result<Room> {
        if self.store.get(number)?.status() == RoomStatus::Occupied {
            return Err(ManagerError::RoomOccupied {
                number: number.to_string(),
            }
            .into());
        }
        self.store.remove(number)
    }

    pub fn set_status(&mut self, number: &str, status: RoomStatus) -> Result<()> {
        self.store.update(number, |room| room.set_status(status))
    }

    pub fn set_nightly_rate(&mut self, number: &str, rate: i64) -> Result<()> {
        self.store.update(number, |room| room.set_nightly_rate(rate))
    }

    /// Rooms currently free to book, in inventory order.
    pub fn available_rooms(&self) -> Vec<&Room> {
        self.store.iter().filter(|room| room.is_available()).collect()
    }

    /// Every room of `class`, in inventory order.
    pub fn rooms_in_class(&self, class: RoomClass) -> Vec<&Room> {
        self.store
            .iter()
            .filter(|room| room.class() == class)
            .collect()
    }

    /// First free room of `class`, if any.
    pub fn first_available_in_class(&self, class: RoomClass) -> Option<&Room> {
        self.store
            .find_where(|room| room.class() == class && room.is_available())
    }

    /// (occupied, total) room counts.
    pub fn occupancy(&self) -> (usize, usize) {
        let occupied = self
            .store
            .iter()
            .filter(|room| room.status() == RoomStatus::Occupied)
            .count();
        (occupied, self.store.len())
    }

    /// Iterate the whole inventory in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> + '_ {
        self.store.iter()
    }

    /// Put a customer at the back of the waiting list.
    ///
    /// # Errors
    /// Returns [`ManagerError::WaitlistFull`] at capacity; the list is
    /// left unchanged.
    pub fn join_waitlist(&mut self, entry: WaitlistEntry) -> Result<()> {
        if !self.waitlist.enqueue(entry) {
            return Err(ManagerError::WaitlistFull.into());
        }
        Ok(())
    }

    /// Pull the longest-waiting customer for `class` out of the list.
    pub fn next_in_line(&mut self, class: RoomClass) -> Option<WaitlistEntry> {
        self.waitlist.remove_if(|entry| entry.class == class)
    }

    /// Take a customer off the waiting list, wherever they stand.
    pub fn cancel_waiting(&mut self, customer_id: &str) -> Option<WaitlistEntry> {
        self.waitlist
            .remove_if(|entry| entry.customer_id == customer_id)
    }

    /// A customer's 1-based spot in the waiting list.
    pub fn waitlist_position(&self, customer_id: &str) -> Option<usize> {
        self.waitlist
            .position_of(|entry| entry.customer_id == customer_id)
    }

    pub fn waitlist_len(&self) -> usize {
        self.waitlist.len()
    }
}
