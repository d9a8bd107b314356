//! Error types for weektime operations.

use thiserror::Error;

use crate::field::BuiltinField;
use crate::unit::TimeUnit;

#[derive(Error, Debug)]
pub enum WeekTimeError {
    /// A day ordinal, field value, or nanosecond count outside its legal range.
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// A temporal source could not supply both a day-of-week and a time-of-day.
    #[error("Cannot extract a week-time from source of type {source_type}")]
    Conversion {
        /// Runtime type of the offending source.
        source_type: &'static str,
        #[source]
        cause: Box<WeekTimeError>,
    },

    /// A recognized built-in unit that week-times refuse (weeks and larger).
    #[error("Unsupported unit: {0:?}")]
    UnsupportedUnit(TimeUnit),

    /// A recognized built-in field that week-times refuse (date-based fields).
    #[error("Unsupported field: {0:?}")]
    UnsupportedField(BuiltinField),

    /// Integer overflow while scaling or combining amounts.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, WeekTimeError>;
