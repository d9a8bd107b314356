//! Nanosecond-of-day arithmetic and field access over [`NaiveTime`].
//!
//! chrono's [`NaiveTime`] is the time-of-day value; this module supplies the
//! contract weekly arithmetic needs from it: a nano-of-day view, a silently
//! wrapping add that reports the midnight carry, and field-based read and
//! write for the time-based fields.
//!
//! Wraparound contract: a wrapping add never leaves the
//! `[00:00:00.000000000, 24:00)` range; crossing midnight is reported as a
//! one-day carry instead.

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, WeekTimeError};
use crate::field::BuiltinField;

pub const NANOS_PER_MICRO: i64 = 1_000;
pub const NANOS_PER_MILLI: i64 = 1_000_000;
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
pub const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
pub const NANOS_PER_HALF_DAY: i64 = 12 * NANOS_PER_HOUR;
pub const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;
pub const NANOS_PER_WEEK: i64 = 7 * NANOS_PER_DAY;

const SECONDS_PER_DAY: i64 = 86_400;

/// Total nanoseconds elapsed since midnight.
pub fn nano_of_day(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND + i64::from(time.nanosecond())
}

/// Builds a time from a nanosecond-of-day count.
///
/// # Errors
///
/// Returns [`WeekTimeError::OutOfRange`] if `nanos` is outside
/// `0..NANOS_PER_DAY`.
pub fn from_nano_of_day(nanos: i64) -> Result<NaiveTime> {
    if !(0..NANOS_PER_DAY).contains(&nanos) {
        return Err(WeekTimeError::OutOfRange(format!(
            "nano-of-day must be 0..{NANOS_PER_DAY}, got {nanos}"
        )));
    }
    let secs = (nanos / NANOS_PER_SECOND) as u32;
    let frac = (nanos % NANOS_PER_SECOND) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, frac).ok_or_else(|| {
        WeekTimeError::OutOfRange(format!("nano-of-day {nanos} is not a valid time"))
    })
}

/// Adds a signed nanosecond count, wrapping silently at midnight.
///
/// Returns the wrapped time together with the day carry (-1, 0, or +1)
/// produced by crossing midnight. `nanos` must be smaller than one day in
/// magnitude; weekly arithmetic always splits amounts that way first.
pub fn plus_nanos_wrapping(time: NaiveTime, nanos: i64) -> (NaiveTime, i64) {
    let (wrapped, overflow_secs) =
        time.overflowing_add_signed(chrono::Duration::nanoseconds(nanos));
    (wrapped, overflow_secs / SECONDS_PER_DAY)
}

/// Whether the time-of-day supports the given built-in field.
pub fn supports(field: BuiltinField) -> bool {
    field.is_time_based()
}

/// Reads a time-based field from a time value.
///
/// # Errors
///
/// Returns [`WeekTimeError::UnsupportedField`] for fields that are not
/// time-based.
pub fn field_value(time: NaiveTime, field: BuiltinField) -> Result<i64> {
    let hour = i64::from(time.hour());
    let value = match field {
        BuiltinField::NanoOfSecond => i64::from(time.nanosecond()),
        BuiltinField::NanoOfDay => nano_of_day(time),
        BuiltinField::MicroOfSecond => i64::from(time.nanosecond()) / NANOS_PER_MICRO,
        BuiltinField::MicroOfDay => nano_of_day(time) / NANOS_PER_MICRO,
        BuiltinField::MilliOfSecond => i64::from(time.nanosecond()) / NANOS_PER_MILLI,
        BuiltinField::MilliOfDay => nano_of_day(time) / NANOS_PER_MILLI,
        BuiltinField::SecondOfMinute => i64::from(time.second()),
        BuiltinField::SecondOfDay => i64::from(time.num_seconds_from_midnight()),
        BuiltinField::MinuteOfHour => i64::from(time.minute()),
        BuiltinField::MinuteOfDay => hour * 60 + i64::from(time.minute()),
        BuiltinField::HourOfAmPm => hour % 12,
        BuiltinField::ClockHourOfAmPm => {
            let h = hour % 12;
            if h == 0 {
                12
            } else {
                h
            }
        }
        BuiltinField::HourOfDay => hour,
        BuiltinField::ClockHourOfDay => {
            if hour == 0 {
                24
            } else {
                hour
            }
        }
        BuiltinField::AmPmOfDay => hour / 12,
        other => return Err(WeekTimeError::UnsupportedField(other)),
    };
    Ok(value)
}

/// Returns a copy of `time` with the given field replaced.
///
/// Absolute *-OfDay fields replace the whole time (finer fields are
/// dropped); the remaining fields shift by the delta in their own
/// granularity, so finer fields survive. Clock-hour values 12 and 24 map
/// back to 0.
///
/// # Errors
///
/// Returns [`WeekTimeError::UnsupportedField`] for fields that are not
/// time-based, and [`WeekTimeError::OutOfRange`] if `value` is outside the
/// field's legal range.
pub fn with_field(time: NaiveTime, field: BuiltinField, value: i64) -> Result<NaiveTime> {
    if !field.is_time_based() {
        return Err(WeekTimeError::UnsupportedField(field));
    }
    let (min, max) = field.range();
    if value < min || value > max {
        return Err(WeekTimeError::OutOfRange(format!(
            "{field:?} must be {min}..={max}, got {value}"
        )));
    }

    let nod = nano_of_day(time);
    let nano = i64::from(time.nanosecond());
    let hour = i64::from(time.hour());
    let new_nod = match field {
        BuiltinField::NanoOfSecond => nod - nano + value,
        BuiltinField::NanoOfDay => value,
        BuiltinField::MicroOfSecond => nod - nano + value * NANOS_PER_MICRO,
        BuiltinField::MicroOfDay => value * NANOS_PER_MICRO,
        BuiltinField::MilliOfSecond => nod - nano + value * NANOS_PER_MILLI,
        BuiltinField::MilliOfDay => value * NANOS_PER_MILLI,
        BuiltinField::SecondOfMinute => {
            nod + (value - i64::from(time.second())) * NANOS_PER_SECOND
        }
        BuiltinField::SecondOfDay => {
            nod + (value - i64::from(time.num_seconds_from_midnight())) * NANOS_PER_SECOND
        }
        BuiltinField::MinuteOfHour => {
            nod + (value - i64::from(time.minute())) * NANOS_PER_MINUTE
        }
        BuiltinField::MinuteOfDay => {
            let current = hour * 60 + i64::from(time.minute());
            nod + (value - current) * NANOS_PER_MINUTE
        }
        BuiltinField::HourOfAmPm => nod + (value - hour % 12) * NANOS_PER_HOUR,
        BuiltinField::ClockHourOfAmPm => nod + (value % 12 - hour % 12) * NANOS_PER_HOUR,
        BuiltinField::HourOfDay => nod + (value - hour) * NANOS_PER_HOUR,
        BuiltinField::ClockHourOfDay => nod + (value % 24 - hour) * NANOS_PER_HOUR,
        BuiltinField::AmPmOfDay => nod + (value - hour / 12) * NANOS_PER_HALF_DAY,
        other => return Err(WeekTimeError::UnsupportedField(other)),
    };
    from_nano_of_day(new_nod)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn hms_nano(h: u32, m: u32, s: u32, nano: u32) -> NaiveTime {
        NaiveTime::from_hms_nano_opt(h, m, s, nano).unwrap()
    }

    // ── nano-of-day tests ───────────────────────────────────────────────

    #[test]
    fn test_nano_of_day_bounds() {
        assert_eq!(nano_of_day(hms(0, 0, 0)), 0);
        assert_eq!(
            nano_of_day(hms_nano(23, 59, 59, 999_999_999)),
            NANOS_PER_DAY - 1
        );
        assert_eq!(nano_of_day(hms(12, 0, 0)), NANOS_PER_HALF_DAY);
    }

    #[test]
    fn test_from_nano_of_day_round_trips() {
        for nanos in [0, 1, NANOS_PER_HOUR + 30 * NANOS_PER_MINUTE, NANOS_PER_DAY - 1] {
            assert_eq!(nano_of_day(from_nano_of_day(nanos).unwrap()), nanos);
        }
    }

    #[test]
    fn test_from_nano_of_day_rejects_out_of_range() {
        assert!(from_nano_of_day(-1).is_err());
        assert!(from_nano_of_day(NANOS_PER_DAY).is_err());
    }

    // ── wrapping add tests ──────────────────────────────────────────────

    #[test]
    fn test_plus_nanos_without_wrap_has_no_carry() {
        let (time, carry) = plus_nanos_wrapping(hms(10, 0, 0), 2 * NANOS_PER_HOUR);
        assert_eq!(time, hms(12, 0, 0));
        assert_eq!(carry, 0);
    }

    #[test]
    fn test_plus_nanos_wraps_forward_past_midnight() {
        let (time, carry) = plus_nanos_wrapping(hms_nano(23, 59, 59, 999_999_999), 1);
        assert_eq!(time, hms(0, 0, 0));
        assert_eq!(carry, 1);
    }

    #[test]
    fn test_plus_nanos_wraps_backward_past_midnight() {
        let (time, carry) = plus_nanos_wrapping(hms(0, 0, 0), -1);
        assert_eq!(time, hms_nano(23, 59, 59, 999_999_999));
        assert_eq!(carry, -1);
    }

    #[test]
    fn test_plus_zero_nanos_is_identity() {
        let (time, carry) = plus_nanos_wrapping(hms(7, 30, 15), 0);
        assert_eq!(time, hms(7, 30, 15));
        assert_eq!(carry, 0);
    }

    // ── field read tests ────────────────────────────────────────────────

    #[test]
    fn test_field_value_hour_variants() {
        let afternoon = hms(13, 45, 30);
        assert_eq!(field_value(afternoon, BuiltinField::HourOfDay).unwrap(), 13);
        assert_eq!(field_value(afternoon, BuiltinField::HourOfAmPm).unwrap(), 1);
        assert_eq!(
            field_value(afternoon, BuiltinField::ClockHourOfAmPm).unwrap(),
            1
        );
        assert_eq!(field_value(afternoon, BuiltinField::AmPmOfDay).unwrap(), 1);

        let midnight = hms(0, 10, 0);
        assert_eq!(
            field_value(midnight, BuiltinField::ClockHourOfDay).unwrap(),
            24
        );
        assert_eq!(
            field_value(midnight, BuiltinField::ClockHourOfAmPm).unwrap(),
            12
        );
        assert_eq!(field_value(midnight, BuiltinField::AmPmOfDay).unwrap(), 0);
    }

    #[test]
    fn test_field_value_of_day_projections() {
        let time = hms_nano(1, 2, 3, 4_005_006);
        assert_eq!(
            field_value(time, BuiltinField::SecondOfDay).unwrap(),
            3_723
        );
        assert_eq!(field_value(time, BuiltinField::MinuteOfDay).unwrap(), 62);
        assert_eq!(
            field_value(time, BuiltinField::NanoOfDay).unwrap(),
            3_723 * NANOS_PER_SECOND + 4_005_006
        );
        assert_eq!(
            field_value(time, BuiltinField::MilliOfSecond).unwrap(),
            4
        );
        assert_eq!(
            field_value(time, BuiltinField::MicroOfSecond).unwrap(),
            4_005
        );
    }

    #[test]
    fn test_field_value_rejects_non_time_fields() {
        for field in [
            BuiltinField::DayOfWeek,
            BuiltinField::MonthOfYear,
            BuiltinField::Year,
        ] {
            let err = field_value(hms(1, 0, 0), field).unwrap_err().to_string();
            assert!(err.contains("Unsupported field"), "got: {err}");
        }
    }

    // ── field write tests ───────────────────────────────────────────────

    #[test]
    fn test_with_field_hour_preserves_finer_fields() {
        let time = hms_nano(9, 15, 45, 123);
        let adjusted = with_field(time, BuiltinField::HourOfDay, 21).unwrap();
        assert_eq!(adjusted, hms_nano(21, 15, 45, 123));
    }

    #[test]
    fn test_with_field_second_of_day_preserves_nanos() {
        let time = hms_nano(9, 0, 0, 777);
        let adjusted = with_field(time, BuiltinField::SecondOfDay, 60).unwrap();
        assert_eq!(adjusted, hms_nano(0, 1, 0, 777));
    }

    #[test]
    fn test_with_field_absolute_of_day_drops_finer_fields() {
        let time = hms_nano(9, 15, 45, 123_456_789);
        let adjusted = with_field(time, BuiltinField::MilliOfDay, 1_500).unwrap();
        assert_eq!(adjusted, hms_nano(0, 0, 1, 500_000_000));
    }

    #[test]
    fn test_with_field_ampm_flip_keeps_clock_position() {
        let morning = hms(9, 15, 0);
        let evening = with_field(morning, BuiltinField::AmPmOfDay, 1).unwrap();
        assert_eq!(evening, hms(21, 15, 0));
        assert_eq!(with_field(evening, BuiltinField::AmPmOfDay, 0).unwrap(), morning);
    }

    #[test]
    fn test_with_field_clock_hours_map_to_zero() {
        let time = hms(15, 20, 0);
        assert_eq!(
            with_field(time, BuiltinField::ClockHourOfDay, 24).unwrap(),
            hms(0, 20, 0)
        );
        // 12 pm-clock in the afternoon lands on noon
        assert_eq!(
            with_field(time, BuiltinField::ClockHourOfAmPm, 12).unwrap(),
            hms(12, 20, 0)
        );
    }

    #[test]
    fn test_with_field_rejects_out_of_range_values() {
        let time = hms(10, 0, 0);
        assert!(with_field(time, BuiltinField::HourOfDay, 24).is_err());
        assert!(with_field(time, BuiltinField::MinuteOfHour, 60).is_err());
        assert!(with_field(time, BuiltinField::NanoOfSecond, 1_000_000_000).is_err());
        assert!(with_field(time, BuiltinField::ClockHourOfAmPm, 0).is_err());
        assert!(with_field(time, BuiltinField::SecondOfDay, -1).is_err());
    }

    #[test]
    fn test_with_field_rejects_non_time_fields() {
        let err = with_field(hms(10, 0, 0), BuiltinField::DayOfMonth, 5)
            .unwrap_err()
            .to_string();
        assert!(err.contains("Unsupported field"), "got: {err}");
    }
}
