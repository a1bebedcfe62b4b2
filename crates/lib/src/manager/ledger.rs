//! The booking ledger and session payment history.

use std::path::PathBuf;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::warn;

use super::ManagerError;
use crate::Result;
use crate::collections::BoundedStack;
use crate::record::{Booking, BookingStatus, PaymentMethod, Service};
use crate::store::{EntityStore, IdSequence, LoadReport};

/// A settled payment, newest kept on top of the history stack.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRecord {
    pub booking_id: String,
    pub amount: i64,
    pub method: PaymentMethod,
}

/// Room stays and service orders in one ledger, keyed by `T` ids.
///
/// The payment history is session-scoped: settling a booking pushes onto
/// an in-memory stack that the backing file never sees.
pub struct BookingLedger {
    store: EntityStore<Booking>,
    payments: BoundedStack<PaymentRecord>,
}

impl BookingLedger {
    pub(crate) fn open(path: PathBuf) -> Self {
        Self {
            store: EntityStore::open("bookings", path, vec![IdSequence::new("T")]),
            payments: BoundedStack::new(),
        }
    }

    pub fn load(&mut self) -> Result<LoadReport> {
        self.store.load()
    }

    pub fn save(&self) -> Result<()> {
        self.store.save()
    }

    /// Drop in-memory bookings and the payment history; the file is
    /// untouched.
    pub fn clear(&mut self) {
        self.store.clear();
        self.payments.clear();
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

    /// Look up a booking by id.
    ///
    /// # Errors
    /// Returns a not-found error for unknown ids.
    pub fn booking(&self, id: &str) -> Result<&Booking> {
        Ok(self.store.get(id)?)
    }

    /// Record a pending room stay under a fresh `T` id.
    ///
    /// The stay runs `nights` nights (at least one) from `start`; the
    /// total is the nightly rate times the stay length.
    ///
    /// # Returns
    /// The booking id.
    pub fn book_room(
        &mut self,
        customer_id: &str,
        customer_name: &str,
        room_number: &str,
        nightly_rate: i64,
        nights: u32,
        method: PaymentMethod,
        start: NaiveDate,
    ) -> Result<String> {
        let nights = nights.max(1);
        let end = start
            .checked_add_days(Days::new(u64::from(nights)))
            .unwrap_or(start);
        let id = self.store.next_id("T")?;
        let booking = Booking::room_stay(
            id.clone(),
            customer_id,
            customer_name,
            room_number,
            nights,
            nightly_rate * i64::from(nights),
            method,
            start,
            end,
        );
        self.store.add(booking)?;
        Ok(id)
    }

    /// Record a pending service order under a fresh `T` id.
    ///
    /// # Errors
    /// Returns [`ManagerError::ServiceUnavailable`] when the service is
    /// switched off and [`ManagerError::BelowMinimumOrder`] when the
    /// quantity is under its minimum.
    pub fn order_service(
        &mut self,
        customer_id: &str,
        customer_name: &str,
        service: &Service,
        quantity: u32,
        method: PaymentMethod,
        date: NaiveDate,
    ) -> Result<String> {
        if !service.is_available() {
            return Err(ManagerError::ServiceUnavailable {
                id: service.id().to_string(),
            }
            .into());
        }
        if quantity < service.min_order() {
            return Err(ManagerError::BelowMinimumOrder {
                id: service.id().to_string(),
                minimum: service.min_order(),
                requested: quantity,
            }
            .into());
        }
        let id = self.store.next_id("T")?;
        let booking = Booking::service_order(
            id.clone(),
            customer_id,
            customer_name,
            service.id(),
            quantity,
            service.rate() * i64::from(quantity),
            method,
            date,
        );
        self.store.add(booking)?;
        Ok(id)
    }

    /// Move a booking to `next`, enforcing the status lifecycle.
    ///
    /// # Errors
    /// Returns [`ManagerError::InvalidTransition`] when the current
    /// status does not allow the move, or a not-found error for unknown
    /// ids.
    pub fn set_status(&mut self, id: &str, next: BookingStatus) -> Result<()> {
        let refused = self.store.update(id, |booking| {
            let from = booking.status();
            if booking.transition_to(next) {
                None
            } else {
                Some(from)
            }
        })?;
        if let Some(from) = refused {
            return Err(ManagerError::InvalidTransition {
                id: id.to_string(),
                from: from.as_str(),
                to: next.as_str(),
            }
            .into());
        }
        Ok(())
    }

    pub fn confirm(&mut self, id: &str) -> Result<()> {
        self.set_status(id, BookingStatus::Confirmed)
    }

    /// Attach a free-text note to a booking, replacing any previous note.
    pub fn annotate(&mut self, id: &str, note: impl Into<String>) -> Result<()> {
        let note = note.into();
        self.store.update(id, |booking| booking.set_note(note))
    }

    pub fn cancel(&mut self, id: &str) -> Result<()> {
        self.set_status(id, BookingStatus::Cancelled)
    }

    /// Settle a booking: mark it completed and push the payment onto the
    /// session history.
    ///
    /// # Returns
    /// The payment that was recorded.
    ///
    /// # Errors
    /// Same conditions as [`set_status`](Self::set_status).
    pub fn settle(&mut self, id: &str) -> Result<PaymentRecord> {
        let payment = {
            let booking = self.store.get(id)?;
            PaymentRecord {
                booking_id: booking.id().to_string(),
                amount: booking.total(),
                method: booking.method(),
            }
        };
        self.set_status(id, BookingStatus::Completed)?;
        if !self.payments.push(payment.clone()) {
            warn!(booking = %id, "Payment history is full; payment not retained in session history");
        }
        Ok(payment)
    }

    /// Total of every completed booking in the ledger.
    pub fn revenue(&self) -> i64 {
        self.store
            .iter()
            .filter(|booking| booking.status() == BookingStatus::Completed)
            .map(Booking::total)
            .sum()
    }

    /// Bookings that are still pending or confirmed.
    pub fn open_bookings(&self) -> usize {
        self.store
            .iter()
            .filter(|booking| !booking.status().is_terminal())
            .count()
    }

    /// Every booking a customer has made, in ledger order.
    pub fn bookings_for_customer(&self, customer_id: &str) -> Vec<&Booking> {
        self.store
            .iter()
            .filter(|booking| booking.customer_id() == customer_id)
            .collect()
    }

    /// Bookings with ids in `lo..=hi`, ascending by id.
    pub fn ids_between(&self, lo: &str, hi: &str) -> Vec<&Booking> {
        self.store.range(lo, hi)
    }

    /// The most recent payments of this session, newest first.
    pub fn recent_payments(&self, limit: usize) -> Vec<&PaymentRecord> {
        self.payments.iter().take(limit).collect()
    }

    pub fn payment_count(&self) -> usize {
        self.payments.len()
    }

    /// Iterate the whole ledger in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Booking> + '_ {
        self.store.iter()
    }
}
