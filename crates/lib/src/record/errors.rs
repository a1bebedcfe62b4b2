//! Errors raised while reconstructing records from file lines.

use thiserror::Error;

/// A file line that does not round-trip into a record.
///
/// During a store load these are handled per line: the offending line is
/// counted as skipped and the load carries on with the rest of the file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecordError {
    /// Line has fewer fields than the record layout requires.
    #[error("{kind} line has {found} fields, expected at least {expected}")]
    MissingFields {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    /// Leading discriminator does not name a known layout.
    #[error("unknown {what}: '{value}'")]
    UnknownDiscriminator { what: &'static str, value: String },

    /// A mandatory numeric field failed to parse.
    #[error("invalid number in {kind} field '{field}': '{value}'")]
    InvalidNumber {
        kind: &'static str,
        field: &'static str,
        value: String,
    },

    /// A date field does not match `DD/MM/YYYY`.
    #[error("invalid date in {kind} field '{field}': '{value}'")]
    InvalidDate {
        kind: &'static str,
        field: &'static str,
        value: String,
    },
}

impl RecordError {
    /// Check if this is a short-line error.
    pub fn is_missing_fields(&self) -> bool {
        matches!(self, RecordError::MissingFields { .. })
    }

    /// Check if this is an unknown-discriminator error.
    pub fn is_unknown_discriminator(&self) -> bool {
        matches!(self, RecordError::UnknownDiscriminator { .. })
    }

    /// Check if a field value failed to parse.
    pub fn is_invalid_value(&self) -> bool {
        matches!(
            self,
            RecordError::InvalidNumber { .. } | RecordError::InvalidDate { .. }
        )
    }
}

impl From<RecordError> for crate::Error {
    fn from(err: RecordError) -> Self {
        crate::Error::Record(err)
    }
}
