//! A moment on the repeating seven-day week.
//!
//! [`WeekTime`] combines a day-of-week and a time-of-day, such as
//! "Monday at 13:45", with no date and no timezone attached. The value is
//! immutable; every adjusting operation returns a new instance. Arithmetic
//! wraps exactly across midnight and across the Sunday/Monday boundary, and
//! distance is always measured forward around the cycle.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, TimeZone, Timelike, Weekday};
use serde::Serialize;

use crate::error::{Result, WeekTimeError};
use crate::field::{BuiltinField, Field};
use crate::timeofday::{self, NANOS_PER_DAY, NANOS_PER_WEEK};
use crate::unit::Unit;
use crate::weekday;

// ── TemporalSource ──────────────────────────────────────────────────────────

/// A value that can supply both facets of a weekly moment on request.
///
/// Implemented for [`WeekTime`] itself and for chrono's datetime types; any
/// custom source works as long as it can produce a weekday and a time.
/// Either accessor may fail for sources that do not always carry the facet.
pub trait TemporalSource {
    /// The day-of-week facet.
    fn day_of_week(&self) -> Result<Weekday>;

    /// The time-of-day facet.
    fn time_of_day(&self) -> Result<NaiveTime>;
}

impl TemporalSource for WeekTime {
    fn day_of_week(&self) -> Result<Weekday> {
        Ok(self.day)
    }

    fn time_of_day(&self) -> Result<NaiveTime> {
        Ok(self.time)
    }
}

impl TemporalSource for NaiveDateTime {
    fn day_of_week(&self) -> Result<Weekday> {
        Ok(Datelike::weekday(self))
    }

    fn time_of_day(&self) -> Result<NaiveTime> {
        Ok(self.time())
    }
}

impl<Tz: TimeZone> TemporalSource for DateTime<Tz> {
    fn day_of_week(&self) -> Result<Weekday> {
        Ok(Datelike::weekday(self))
    }

    fn time_of_day(&self) -> Result<NaiveTime> {
        Ok(self.time())
    }
}

// ── WeekTime ────────────────────────────────────────────────────────────────

/// A day-of-week and time-of-day with no date and no timezone, such as
/// "Monday at 13:45".
///
/// Two week-times are equal iff both parts are equal; the natural order
/// compares the day first (Monday < Sunday) and the time as tiebreaker.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveTime, Weekday};
/// use weektime::{TimeUnit, WeekTime};
///
/// let open = WeekTime::new(Weekday::Mon, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
/// let later = open.plus(36, TimeUnit::Hours)?;
/// assert_eq!(
///     later,
///     WeekTime::new(Weekday::Tue, NaiveTime::from_hms_opt(21, 0, 0).unwrap())
/// );
/// # Ok::<(), weektime::WeekTimeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekTime {
    day: Weekday,
    time: NaiveTime,
}

impl WeekTime {
    /// Creates a week-time from its two parts.
    pub fn new(day: Weekday, time: NaiveTime) -> WeekTime {
        WeekTime { day, time }
    }

    /// Extracts a week-time from any temporal source that carries both a
    /// day-of-week and a time-of-day.
    ///
    /// # Errors
    ///
    /// Returns [`WeekTimeError::Conversion`] naming the source's runtime
    /// type, with the underlying extraction failure as cause, if either
    /// facet is unavailable.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, Weekday};
    /// use weektime::WeekTime;
    ///
    /// // 2026-02-18 is a Wednesday
    /// let dt = NaiveDate::from_ymd_opt(2026, 2, 18)
    ///     .unwrap()
    ///     .and_hms_opt(14, 30, 0)
    ///     .unwrap();
    /// let wt = WeekTime::from_source(&dt)?;
    /// assert_eq!(wt.day_of_week(), Weekday::Wed);
    /// assert_eq!(wt.hour(), 14);
    /// # Ok::<(), weektime::WeekTimeError>(())
    /// ```
    pub fn from_source<S: TemporalSource>(source: &S) -> Result<WeekTime> {
        match (source.day_of_week(), source.time_of_day()) {
            (Ok(day), Ok(time)) => Ok(WeekTime::new(day, time)),
            (Err(cause), _) | (_, Err(cause)) => Err(WeekTimeError::Conversion {
                source_type: std::any::type_name::<S>(),
                cause: Box::new(cause),
            }),
        }
    }

    /// The day-of-week part.
    pub fn day_of_week(&self) -> Weekday {
        self.day
    }

    /// The time-of-day part.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// The hour of the day, 0 to 23.
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// The minute of the hour, 0 to 59.
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// The second of the minute, 0 to 59.
    pub fn second(&self) -> u32 {
        self.time.second()
    }

    /// The nano of the second, 0 to 999,999,999.
    pub fn nanosecond(&self) -> u32 {
        self.time.nanosecond()
    }

    // ── Field access ────────────────────────────────────────────────────

    /// Whether the given field can be read from this week-time.
    ///
    /// The day-of-week field and every time-based built-in field are
    /// supported; custom identifiers are asked via their own capability.
    pub fn supports_field(&self, field: impl Into<Field>) -> bool {
        match field.into() {
            Field::Builtin(f) => f == BuiltinField::DayOfWeek || timeofday::supports(f),
            Field::Custom(ops) => ops.is_supported_by(self),
        }
    }

    /// Reads the value of the given field.
    ///
    /// The day-of-week field yields the ISO ordinal (Monday = 1 through
    /// Sunday = 7); time-based fields are projections of the time part.
    ///
    /// # Errors
    ///
    /// Returns [`WeekTimeError::UnsupportedField`] for recognized built-in
    /// fields this type refuses (date-based fields). Custom identifiers may
    /// fail on their own terms.
    pub fn field_value(&self, field: impl Into<Field>) -> Result<i64> {
        match field.into() {
            Field::Builtin(BuiltinField::DayOfWeek) => {
                Ok(i64::from(weekday::ordinal(self.day)))
            }
            Field::Builtin(f) => timeofday::field_value(self.time, f),
            Field::Custom(ops) => ops.value_from(self),
        }
    }

    /// Returns a copy of this week-time with the given field replaced.
    ///
    /// # Errors
    ///
    /// Returns [`WeekTimeError::OutOfRange`] if `value` is outside the
    /// field's legal range, and [`WeekTimeError::UnsupportedField`] for
    /// built-in fields this type refuses.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveTime, Weekday};
    /// use weektime::{BuiltinField, WeekTime};
    ///
    /// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    /// let moved = WeekTime::new(Weekday::Mon, noon)
    ///     .with_field(BuiltinField::DayOfWeek, 5)?;
    /// assert_eq!(moved.day_of_week(), Weekday::Fri);
    /// # Ok::<(), weektime::WeekTimeError>(())
    /// ```
    pub fn with_field(&self, field: impl Into<Field>, value: i64) -> Result<WeekTime> {
        match field.into() {
            Field::Builtin(BuiltinField::DayOfWeek) => {
                Ok(WeekTime::new(weekday::from_ordinal(value)?, self.time))
            }
            Field::Builtin(f) => Ok(WeekTime::new(
                self.day,
                timeofday::with_field(self.time, f, value)?,
            )),
            Field::Custom(ops) => ops.adjust(self, value),
        }
    }

    // ── Arithmetic ──────────────────────────────────────────────────────

    /// Whether arithmetic on this week-time accepts the given unit.
    pub fn supports_unit(&self, unit: impl Into<Unit>) -> bool {
        match unit.into() {
            Unit::Builtin(u) => u.is_supported(),
            Unit::Custom(_) => true,
        }
    }

    /// Returns a copy of this week-time with `amount` units added.
    ///
    /// The amount may be negative. The sub-day part wraps the time-of-day
    /// silently at midnight; the whole-day part plus the midnight carry
    /// advances the weekday modulo 7, so any amount lands back inside the
    /// week.
    ///
    /// # Errors
    ///
    /// Returns [`WeekTimeError::UnsupportedUnit`] for Weeks, Months, and
    /// Years, and [`WeekTimeError::Overflow`] if intermediate scaling
    /// overflows. Custom units may fail on their own terms.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveTime, Weekday};
    /// use weektime::{TimeUnit, WeekTime};
    ///
    /// let last_instant = WeekTime::new(
    ///     Weekday::Mon,
    ///     NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap(),
    /// );
    /// assert_eq!(
    ///     last_instant.plus(1, TimeUnit::Nanos)?,
    ///     WeekTime::new(Weekday::Tue, NaiveTime::from_hms_opt(0, 0, 0).unwrap())
    /// );
    /// # Ok::<(), weektime::WeekTimeError>(())
    /// ```
    pub fn plus(&self, amount: i64, unit: impl Into<Unit>) -> Result<WeekTime> {
        match unit.into() {
            Unit::Builtin(u) => {
                let per_unit = u.nanos_per_unit()?;
                let units_per_day = NANOS_PER_DAY / per_unit;
                let days = amount / units_per_day;
                let nanos = (amount % units_per_day).checked_mul(per_unit).ok_or_else(|| {
                    WeekTimeError::Overflow(format!(
                        "scaling {amount} {u:?} to nanoseconds"
                    ))
                })?;
                let (time, carry) = timeofday::plus_nanos_wrapping(self.time, nanos);
                let day_offset = days.checked_add(carry).ok_or_else(|| {
                    WeekTimeError::Overflow(format!(
                        "combining {days} days with the midnight carry"
                    ))
                })?;
                Ok(WeekTime::new(weekday::plus(self.day, day_offset), time))
            }
            Unit::Custom(ops) => ops.add_to(self, amount),
        }
    }

    /// Returns a copy of this week-time with `amount` units subtracted.
    ///
    /// Equivalent to `plus(-amount, unit)`; `i64::MIN`, which has no
    /// positive negation, is decomposed into `plus(i64::MAX)` followed by
    /// `plus(1)`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`WeekTime::plus`].
    pub fn minus(&self, amount: i64, unit: impl Into<Unit>) -> Result<WeekTime> {
        let unit = unit.into();
        if amount == i64::MIN {
            self.plus(i64::MAX, unit)?.plus(1, unit)
        } else {
            self.plus(-amount, unit)
        }
    }

    /// The number of whole units from this week-time forward around the
    /// cycle to `end`.
    ///
    /// The distance is always non-negative and smaller than one week in the
    /// requested unit, regardless of which value's weekday comes first
    /// numerically; `until` of a value to itself is 0.
    ///
    /// # Errors
    ///
    /// Returns [`WeekTimeError::Conversion`] if `end` cannot supply both
    /// facets, and [`WeekTimeError::UnsupportedUnit`] for Weeks, Months,
    /// and Years. Custom units may fail on their own terms.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveTime, Weekday};
    /// use weektime::{TimeUnit, WeekTime};
    ///
    /// let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    /// let friday = WeekTime::new(Weekday::Fri, ten);
    /// let monday = WeekTime::new(Weekday::Mon, ten);
    /// assert_eq!(friday.until(&monday, TimeUnit::Days)?, 3);
    /// assert_eq!(monday.until(&friday, TimeUnit::Days)?, 4);
    /// # Ok::<(), weektime::WeekTimeError>(())
    /// ```
    pub fn until<S: TemporalSource>(&self, end: &S, unit: impl Into<Unit>) -> Result<i64> {
        let end = WeekTime::from_source(end)?;
        match unit.into() {
            Unit::Builtin(u) => {
                let per_unit = u.nanos_per_unit()?;
                let day_diff = i64::from(weekday::ordinal(end.day))
                    - i64::from(weekday::ordinal(self.day));
                let raw = day_diff * NANOS_PER_DAY + timeofday::nano_of_day(end.time)
                    - timeofday::nano_of_day(self.time);
                Ok(raw.rem_euclid(NANOS_PER_WEEK) / per_unit)
            }
            Unit::Custom(ops) => ops.between(self, &end),
        }
    }

    // ── Adjustment of other temporals ───────────────────────────────────

    /// Writes this week-time into a datetime: the result keeps the
    /// datetime's Monday-based week and takes this value's weekday and
    /// time-of-day.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime, Weekday};
    /// use weektime::WeekTime;
    ///
    /// let standup = WeekTime::new(Weekday::Mon, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    /// // 2026-02-18 is a Wednesday; its week starts Monday 2026-02-16
    /// let dt = NaiveDate::from_ymd_opt(2026, 2, 18)
    ///     .unwrap()
    ///     .and_hms_opt(14, 30, 0)
    ///     .unwrap();
    /// let adjusted = standup.apply_to(dt);
    /// assert_eq!(
    ///     adjusted,
    ///     NaiveDate::from_ymd_opt(2026, 2, 16).unwrap().and_hms_opt(9, 0, 0).unwrap()
    /// );
    /// ```
    pub fn apply_to(&self, datetime: NaiveDateTime) -> NaiveDateTime {
        let current = i64::from(weekday::ordinal(Datelike::weekday(&datetime)));
        let target = i64::from(weekday::ordinal(self.day));
        (datetime.date() + chrono::Duration::days(target - current)).and_time(self.time)
    }
}

// ── Ordering & rendering ────────────────────────────────────────────────────

impl Ord for WeekTime {
    fn cmp(&self, other: &Self) -> Ordering {
        weekday::ordinal(self.day)
            .cmp(&weekday::ordinal(other.day))
            .then_with(|| self.time.cmp(&other.time))
    }
}

impl PartialOrd for WeekTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WeekTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", weekday::name(self.day), self.time)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
