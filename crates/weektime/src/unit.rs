//! Time units for weekly arithmetic.
//!
//! The built-in units form a closed enum; a single lookup,
//! [`TimeUnit::nanos_per_unit`], drives both addition and distance so the
//! two never disagree about a unit's length. Units beyond the built-ins go
//! through the [`UnitOps`] capability.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, WeekTimeError};
use crate::timeofday::{
    NANOS_PER_DAY, NANOS_PER_HALF_DAY, NANOS_PER_HOUR, NANOS_PER_MICRO, NANOS_PER_MILLI,
    NANOS_PER_MINUTE, NANOS_PER_SECOND,
};
use crate::week_time::WeekTime;

/// The closed set of unit identifiers week-times recognize.
///
/// Units no longer than a day are supported exactly. Weeks, Months, and
/// Years are recognized so that asking for them produces a typed refusal;
/// calendar-scale amounts have no fixed length on a repeating week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    /// The exact length of one unit in nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns [`WeekTimeError::UnsupportedUnit`] for Weeks, Months, and
    /// Years.
    pub fn nanos_per_unit(self) -> Result<i64> {
        match self {
            TimeUnit::Nanos => Ok(1),
            TimeUnit::Micros => Ok(NANOS_PER_MICRO),
            TimeUnit::Millis => Ok(NANOS_PER_MILLI),
            TimeUnit::Seconds => Ok(NANOS_PER_SECOND),
            TimeUnit::Minutes => Ok(NANOS_PER_MINUTE),
            TimeUnit::Hours => Ok(NANOS_PER_HOUR),
            TimeUnit::HalfDays => Ok(NANOS_PER_HALF_DAY),
            TimeUnit::Days => Ok(NANOS_PER_DAY),
            TimeUnit::Weeks | TimeUnit::Months | TimeUnit::Years => {
                Err(WeekTimeError::UnsupportedUnit(self))
            }
        }
    }

    /// Whether week-time arithmetic accepts this unit.
    pub fn is_supported(self) -> bool {
        self.nanos_per_unit().is_ok()
    }
}

/// Capability carried by unit identifiers outside the built-in set.
pub trait UnitOps {
    /// Adds `amount` of this unit to the given week-time.
    fn add_to(&self, moment: &WeekTime, amount: i64) -> Result<WeekTime>;

    /// The number of whole units from `start` forward to `end`.
    fn between(&self, start: &WeekTime, end: &WeekTime) -> Result<i64>;
}

/// A unit identifier: a built-in unit or a caller-supplied capability.
#[derive(Clone, Copy)]
pub enum Unit {
    Builtin(TimeUnit),
    Custom(&'static dyn UnitOps),
}

impl From<TimeUnit> for Unit {
    fn from(unit: TimeUnit) -> Unit {
        Unit::Builtin(unit)
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Builtin(unit) => write!(f, "{unit:?}"),
            Unit::Custom(_) => f.write_str("Custom"),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
