//! Field identifiers for reading and adjusting parts of a week-time.
//!
//! Built-in fields form a closed enum handled on a fast path; anything else
//! goes through the [`FieldOps`] capability, so callers can define their own
//! field identifiers without touching this crate.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::timeofday::NANOS_PER_DAY;
use crate::week_time::WeekTime;

/// The closed set of field identifiers week-times recognize.
///
/// The day-of-week field and the time-based fields are supported; the
/// date-based fields at the end are recognized so that asking for them
/// produces a typed refusal instead of silent nonsense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BuiltinField {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfAmPm,
    ClockHourOfAmPm,
    HourOfDay,
    ClockHourOfDay,
    AmPmOfDay,
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    MonthOfYear,
    Year,
}

impl BuiltinField {
    /// Whether this field is a projection of the time-of-day alone.
    pub fn is_time_based(self) -> bool {
        !matches!(
            self,
            BuiltinField::DayOfWeek
                | BuiltinField::DayOfMonth
                | BuiltinField::DayOfYear
                | BuiltinField::MonthOfYear
                | BuiltinField::Year
        )
    }

    /// The inclusive range of legal values for this field.
    pub fn range(self) -> (i64, i64) {
        match self {
            BuiltinField::NanoOfSecond => (0, 999_999_999),
            BuiltinField::NanoOfDay => (0, NANOS_PER_DAY - 1),
            BuiltinField::MicroOfSecond => (0, 999_999),
            BuiltinField::MicroOfDay => (0, NANOS_PER_DAY / 1_000 - 1),
            BuiltinField::MilliOfSecond => (0, 999),
            BuiltinField::MilliOfDay => (0, NANOS_PER_DAY / 1_000_000 - 1),
            BuiltinField::SecondOfMinute => (0, 59),
            BuiltinField::SecondOfDay => (0, 86_399),
            BuiltinField::MinuteOfHour => (0, 59),
            BuiltinField::MinuteOfDay => (0, 1_439),
            BuiltinField::HourOfAmPm => (0, 11),
            BuiltinField::ClockHourOfAmPm => (1, 12),
            BuiltinField::HourOfDay => (0, 23),
            BuiltinField::ClockHourOfDay => (1, 24),
            BuiltinField::AmPmOfDay => (0, 1),
            BuiltinField::DayOfWeek => (1, 7),
            BuiltinField::DayOfMonth => (1, 31),
            BuiltinField::DayOfYear => (1, 366),
            BuiltinField::MonthOfYear => (1, 12),
            BuiltinField::Year => (-999_999_999, 999_999_999),
        }
    }
}

/// Capability carried by field identifiers outside the built-in set.
///
/// A custom field decides for itself whether a week-time supports it, how to
/// read its value, and how to produce an adjusted copy.
pub trait FieldOps {
    /// Whether this field can be read from the given week-time.
    fn is_supported_by(&self, moment: &WeekTime) -> bool;

    /// Reads this field's value from the given week-time.
    fn value_from(&self, moment: &WeekTime) -> Result<i64>;

    /// Returns a copy of the week-time with this field set to `value`.
    fn adjust(&self, moment: &WeekTime, value: i64) -> Result<WeekTime>;
}

/// A field identifier: a built-in field or a caller-supplied capability.
#[derive(Clone, Copy)]
pub enum Field {
    Builtin(BuiltinField),
    Custom(&'static dyn FieldOps),
}

impl From<BuiltinField> for Field {
    fn from(field: BuiltinField) -> Field {
        Field::Builtin(field)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Builtin(field) => write!(f, "{field:?}"),
            Field::Custom(_) => f.write_str("Custom"),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
