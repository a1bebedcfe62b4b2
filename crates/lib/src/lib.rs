//! Innkeep: the record-store core of a console hotel-management system.
//! This library provides ordered in-memory storage, keyed lookup, and
//! flat-file persistence for the hotel's domain records.
//!
//! ## Core Concepts
//!
//! * **Collections (`collections`)**: Hand-rolled containers the stores are built from:
//!     * **Ring (`collections::Ring`)**: A circular singly-linked list that owns its
//!       records and preserves insertion order. The primary container everywhere.
//!     * **SearchIndex (`collections::SearchIndex`)**: An unbalanced binary search tree
//!       used as a non-owning secondary index for O(log n) key lookup and range scans.
//!     * **BoundedStack / BoundedQueue**: Fixed-capacity LIFO/FIFO chains for payment
//!       history and the room waiting list.
//! * **Records (`record::Record`)**: Domain types ([`Room`](record::Room),
//!   [`Service`](record::Service), [`User`](record::User), [`Booking`](record::Booking))
//!   that know how to round-trip themselves through `|`-delimited file lines, with the
//!   leading field selecting the concrete layout.
//! * **EntityStore (`store::EntityStore`)**: One `Ring` plus one `SearchIndex` kept in
//!   lockstep, with load/save against a single flat file and ID-counter recovery.
//! * **Managers (`manager`)**: Thin domain façades ([`RoomCatalog`](manager::RoomCatalog),
//!   [`ServiceCatalog`](manager::ServiceCatalog), [`UserDirectory`](manager::UserDirectory),
//!   [`BookingLedger`](manager::BookingLedger)) that each own one store, composed behind
//!   [`FrontDesk`](manager::FrontDesk).

pub mod collections;
pub mod flatfile;
pub mod manager;
pub mod record;
pub mod store;

/// Re-export the most commonly used entry points.
pub use manager::FrontDesk;
pub use record::Record;
pub use store::{EntityStore, LoadReport};

/// Result type used throughout the Innkeep library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Innkeep library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured record parsing errors from the record module
    #[error(transparent)]
    Record(record::RecordError),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Structured domain errors from the manager module
    #[error(transparent)]
    Manager(manager::ManagerError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Record(_) => "record",
            Error::Store(_) => "store",
            Error::Manager(_) => "manager",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a key collision.
    pub fn is_duplicate(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_duplicate(),
            _ => false,
        }
    }

    /// Check if this error came from the load/clear state machine
    /// (loading an already-loaded store, or using one before loading it).
    pub fn is_state_error(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_state_error(),
            _ => false,
        }
    }

    /// Check if this error is a record parsing failure.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Record(_))
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::Manager(manager_err) => manager_err.is_authentication_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
