//! Booking records.
//!
//! Room stays and service orders share one ledger file and one layout;
//! the leading kind discriminator decides how `item_id` and `quantity`
//! read (room number and nights, or service id and units ordered).

use chrono::NaiveDate;
use serde::Serialize;

use super::{
    Record, RecordError, ensure_min_fields, field, parse_date, parse_i64, parse_u32,
};
use crate::flatfile;

/// Placeholder written where a booking has no end date.
const NO_END_DATE: &str = "-";

/// What was booked. Doubles as the discriminator in the bookings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingKind {
    Room,
    Service,
}

impl BookingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingKind::Room => "ROOM",
            BookingKind::Service => "SERVICE",
        }
    }

    /// Parse a kind discriminator.
    ///
    /// # Errors
    /// Returns an unknown-discriminator error for unrecognized text; a
    /// booking line with a bad kind is dropped whole.
    pub fn parse(text: &str) -> Result<Self, RecordError> {
        match text {
            "ROOM" => Ok(BookingKind::Room),
            "SERVICE" => Ok(BookingKind::Service),
            other => Err(RecordError::UnknownDiscriminator {
                what: "booking kind",
                value: other.to_string(),
            }),
        }
    }
}

/// Where a booking sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    /// Lenient parse: an unrecognized status reads as `Pending` rather
    /// than costing the whole record.
    pub fn parse_lossy(text: &str) -> Self {
        match text {
            "CONFIRMED" => BookingStatus::Confirmed,
            "COMPLETED" => BookingStatus::Completed,
            "CANCELLED" => BookingStatus::Cancelled,
            _ => BookingStatus::Pending,
        }
    }

    /// Completed and cancelled bookings never move again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Whether a booking in this status may move to `next`. Pending
    /// bookings may be confirmed, settled directly, or cancelled;
    /// confirmed bookings may be settled or cancelled.
    pub fn allows(&self, next: BookingStatus) -> bool {
        match self {
            BookingStatus::Pending => next != BookingStatus::Pending,
            BookingStatus::Confirmed => {
                matches!(next, BookingStatus::Completed | BookingStatus::Cancelled)
            }
            BookingStatus::Completed | BookingStatus::Cancelled => false,
        }
    }
}

/// How a booking is (or will be) paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    CreditCard,
    EWallet,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::EWallet => "E_WALLET",
        }
    }

    /// Lenient parse: an unrecognized method reads as `Cash`.
    pub fn parse_lossy(text: &str) -> Self {
        match text {
            "BANK_TRANSFER" => PaymentMethod::BankTransfer,
            "CREDIT_CARD" => PaymentMethod::CreditCard,
            "E_WALLET" => PaymentMethod::EWallet,
            _ => PaymentMethod::Cash,
        }
    }
}

/// One ledger entry, keyed by its `T`-prefixed id.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    id: String,
    kind: BookingKind,
    customer_id: String,
    customer_name: String,
    item_id: String,
    quantity: u32,
    total: i64,
    status: BookingStatus,
    method: PaymentMethod,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    note: String,
}

impl Booking {
    /// Build a pending room-stay booking. `nights` is the stay length and
    /// `end_date` the checkout day.
    #[allow(clippy::too_many_arguments)]
    pub fn room_stay(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        customer_name: impl Into<String>,
        room_number: impl Into<String>,
        nights: u32,
        total: i64,
        method: PaymentMethod,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind: BookingKind::Room,
            customer_id: customer_id.into(),
            customer_name: customer_name.into(),
            item_id: room_number.into(),
            quantity: nights,
            total,
            status: BookingStatus::Pending,
            method,
            start_date,
            end_date: Some(end_date),
            note: String::new(),
        }
    }

    /// Build a pending service-order booking for `quantity` units.
    #[allow(clippy::too_many_arguments)]
    pub fn service_order(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        customer_name: impl Into<String>,
        service_id: impl Into<String>,
        quantity: u32,
        total: i64,
        method: PaymentMethod,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind: BookingKind::Service,
            customer_id: customer_id.into(),
            customer_name: customer_name.into(),
            item_id: service_id.into(),
            quantity,
            total,
            status: BookingStatus::Pending,
            method,
            start_date,
            end_date: None,
            note: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> BookingKind {
        self.kind
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Room number for stays, service id for orders.
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// Nights for stays, units ordered for orders.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Move the booking to `next` if its current status allows it.
    /// Returns false (leaving the booking untouched) otherwise.
    pub fn transition_to(&mut self, next: BookingStatus) -> bool {
        if !self.status.allows(next) {
            return false;
        }
        self.status = next;
        true
    }
}

impl Record for Booking {
    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        let kind = BookingKind::parse(field(fields, 0))?;
        // Service orders have no end date, so their mandatory prefix is
        // one field shorter.
        let min = match kind {
            BookingKind::Room => 11,
            BookingKind::Service => 10,
        };
        ensure_min_fields("booking", fields, min)?;

        let end_raw = field(fields, 10);
        let end_date = if end_raw.is_empty() || end_raw == NO_END_DATE {
            None
        } else {
            Some(parse_date("booking", "end_date", end_raw)?)
        };

        Ok(Self {
            kind,
            id: fields[1].to_string(),
            customer_id: fields[2].to_string(),
            customer_name: fields[3].to_string(),
            item_id: fields[4].to_string(),
            quantity: parse_u32("booking", "quantity", fields[5])?,
            total: parse_i64("booking", "total", fields[6])?,
            status: BookingStatus::parse_lossy(fields[7]),
            method: PaymentMethod::parse_lossy(fields[8]),
            start_date: parse_date("booking", "start_date", fields[9])?,
            end_date,
            note: field(fields, 11).to_string(),
        })
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.kind.as_str().to_string(),
            self.id.clone(),
            self.customer_id.clone(),
            self.customer_name.clone(),
            self.item_id.clone(),
            self.quantity.to_string(),
            self.total.to_string(),
            self.status.as_str().to_string(),
            self.method.as_str().to_string(),
            flatfile::format_date(self.start_date),
            self.end_date
                .map(flatfile::format_date)
                .unwrap_or_else(|| NO_END_DATE.to_string()),
            self.note.clone(),
        ]
    }

    fn key(&self) -> &str {
        &self.id
    }
}
