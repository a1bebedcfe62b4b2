//! Domain errors for the operational managers.

use thiserror::Error;

/// Business-rule violations raised by the managers.
///
/// Mechanical failures (missing keys, unloaded stores, I/O) surface as
/// [`StoreError`](crate::store::StoreError) instead; these variants cover
/// the rules the hotel itself imposes.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Sign-in failed. Deliberately silent about whether the account,
    /// the secret, or the active flag was the problem
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The room exists but is not free to take this operation
    #[error("Room {number} is currently {status}")]
    RoomUnavailable { number: String, status: &'static str },

    /// The room still has guests and cannot be retired
    #[error("Room {number} is occupied")]
    RoomOccupied { number: String },

    /// The service is switched off
    #[error("Service {id} is not available")]
    ServiceUnavailable { id: String },

    /// The order quantity is under the service's minimum
    #[error("Service {id} requires at least {minimum} unit(s), got {requested}")]
    BelowMinimumOrder {
        id: String,
        minimum: u32,
        requested: u32,
    },

    /// The booking's current status does not allow the requested move
    #[error("Booking {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: &'static str,
        to: &'static str,
    },

    /// The account exists but is not a customer
    #[error("User {id} is not a customer account")]
    NotACustomer { id: String },

    /// The account exists but is not a staff member
    #[error("User {id} is not a staff account")]
    NotStaff { id: String },

    /// The waiting list is at capacity
    #[error("The waiting list is full")]
    WaitlistFull,
}

impl ManagerError {
    /// Check if this error is authentication-related
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, ManagerError::AuthenticationFailed)
    }

    /// Check if a room or service refused the operation
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            ManagerError::RoomUnavailable { .. }
                | ManagerError::RoomOccupied { .. }
                | ManagerError::ServiceUnavailable { .. }
        )
    }

    /// Check if a booking status change was refused
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, ManagerError::InvalidTransition { .. })
    }
}

impl From<ManagerError> for crate::Error {
    fn from(err: ManagerError) -> Self {
        crate::Error::Manager(err)
    }
}
