//! Error types for store operations.
//!
//! These cover the load/clear state machine and the keyed operations every
//! [`EntityStore`](super::EntityStore) shares; anything specific to one
//! record type lives with that type's manager instead.

use thiserror::Error;

/// Errors raised by [`EntityStore`](super::EntityStore) operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Load was called while records are already in memory
    #[error("Store '{name}' is already loaded; clear it before reloading")]
    AlreadyLoaded { name: String },

    /// The operation needs records but the store has not been loaded
    #[error("Store '{name}' is not loaded")]
    NotLoaded { name: String },

    /// A record with the same key is already present
    #[error("Duplicate key '{key}' in store '{name}'")]
    DuplicateKey { name: String, key: String },

    /// No record carries the requested key
    #[error("Key not found in store '{name}': {key}")]
    KeyNotFound { name: String, key: String },

    /// The store was not set up with an id sequence for this prefix
    #[error("Store '{name}' has no id sequence for prefix '{prefix}'")]
    UnknownPrefix { name: String, prefix: String },
}

impl StoreError {
    /// Check if this error indicates a resource was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::KeyNotFound { .. })
    }

    /// Check if this error indicates a key collision
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicateKey { .. })
    }

    /// Check if this error came from the load/clear state machine
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            StoreError::AlreadyLoaded { .. } | StoreError::NotLoaded { .. }
        )
    }

    /// Get the store name associated with this error
    pub fn store_name(&self) -> &str {
        match self {
            StoreError::AlreadyLoaded { name }
            | StoreError::NotLoaded { name }
            | StoreError::DuplicateKey { name, .. }
            | StoreError::KeyNotFound { name, .. }
            | StoreError::UnknownPrefix { name, .. } => name,
        }
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            StoreError::DuplicateKey { key, .. } | StoreError::KeyNotFound { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
