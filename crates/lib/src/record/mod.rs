//! Domain record types and the trait tying them to the flat-file protocol.
//!
//! Every record serializes to one `|`-delimited line whose first field is a
//! discriminator naming the concrete layout: a room line starts with its
//! class, a user line with its role, a booking line with what was booked.
//! Parsing is strict about the discriminator and the mandatory prefix of a
//! layout, and deliberately lenient about trailing detail fields, which
//! older files may lack.

mod booking;
mod errors;
mod room;
mod service;
mod user;

pub use booking::{Booking, BookingKind, BookingStatus, PaymentMethod};
pub use errors::RecordError;
pub use room::{Room, RoomClass, RoomStatus};
pub use service::{PriceUnit, Service, ServiceCategory};
pub use user::{DEFAULT_STAFF_SALARY, Profile, Role, User};

/// A record that round-trips through one flat-file line.
///
/// Implementations own the layout of "their" line: [`to_fields`](Record::to_fields)
/// emits the discriminator first, and [`from_fields`](Record::from_fields)
/// rebuilds the concrete shape from trimmed fields. The
/// [`key`](Record::key) is the business identifier the store indexes by.
pub trait Record: Sized {
    /// Reconstruct a record from the trimmed fields of one line.
    ///
    /// # Errors
    /// Returns a [`RecordError`] when the discriminator is unknown, the
    /// mandatory field prefix is short, or a mandatory value fails to
    /// parse. Store loads treat any of these as "skip this line".
    fn from_fields(fields: &[&str]) -> Result<Self, RecordError>;

    /// Serialize back into fields, discriminator first.
    ///
    /// Values must not contain the field delimiter or newlines.
    fn to_fields(&self) -> Vec<String>;

    /// Business key identifying this record within its store.
    fn key(&self) -> &str;
}

// Field helpers shared by the record implementations.

pub(crate) fn ensure_min_fields(
    kind: &'static str,
    fields: &[&str],
    min: usize,
) -> Result<(), RecordError> {
    if fields.len() < min {
        return Err(RecordError::MissingFields {
            kind,
            expected: min,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Field at `index`, or `""` when the line is shorter. For optional
/// trailing fields; the mandatory prefix is vetted by `ensure_min_fields`.
pub(crate) fn field<'a>(fields: &[&'a str], index: usize) -> &'a str {
    fields.get(index).copied().unwrap_or("")
}

pub(crate) fn parse_i64(
    kind: &'static str,
    name: &'static str,
    raw: &str,
) -> Result<i64, RecordError> {
    raw.parse().map_err(|_| RecordError::InvalidNumber {
        kind,
        field: name,
        value: raw.to_string(),
    })
}

pub(crate) fn parse_u32(
    kind: &'static str,
    name: &'static str,
    raw: &str,
) -> Result<u32, RecordError> {
    raw.parse().map_err(|_| RecordError::InvalidNumber {
        kind,
        field: name,
        value: raw.to_string(),
    })
}

/// Lenient numeric parse for optional trailing fields.
pub(crate) fn parse_i64_lossy(raw: &str, default: i64) -> i64 {
    raw.parse().unwrap_or(default)
}

/// Lenient numeric parse for optional trailing fields.
pub(crate) fn parse_u32_lossy(raw: &str, default: u32) -> u32 {
    raw.parse().unwrap_or(default)
}

/// Boolean flags are stored as `1`/`0`; anything but `1` reads as false.
pub(crate) fn parse_flag(raw: &str) -> bool {
    raw == "1"
}

pub(crate) fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

pub(crate) fn parse_date(
    kind: &'static str,
    name: &'static str,
    raw: &str,
) -> Result<chrono::NaiveDate, RecordError> {
    crate::flatfile::parse_date(raw).ok_or_else(|| RecordError::InvalidDate {
        kind,
        field: name,
        value: raw.to_string(),
    })
}
