//! Day-of-week arithmetic on the fixed Monday-through-Sunday cycle.
//!
//! chrono's [`Weekday`] already carries the ISO-8601 ordering (Monday = 1).
//! These helpers add the pieces weekly arithmetic needs on top of it:
//! construction from an ISO ordinal, signed cyclic advancement that wraps
//! correctly for any `i64` offset, and full names for rendering.

use chrono::Weekday;

use crate::error::{Result, WeekTimeError};

/// Constructs a weekday from its ISO-8601 ordinal, Monday = 1 through
/// Sunday = 7.
///
/// # Errors
///
/// Returns [`WeekTimeError::OutOfRange`] if `ordinal` is outside `1..=7`.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
///
/// assert_eq!(weektime::weekday::from_ordinal(1).unwrap(), Weekday::Mon);
/// assert_eq!(weektime::weekday::from_ordinal(7).unwrap(), Weekday::Sun);
/// assert!(weektime::weekday::from_ordinal(8).is_err());
/// ```
pub fn from_ordinal(ordinal: i64) -> Result<Weekday> {
    match ordinal {
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        7 => Ok(Weekday::Sun),
        _ => Err(WeekTimeError::OutOfRange(format!(
            "day-of-week ordinal must be 1..=7, got {ordinal}"
        ))),
    }
}

/// The ISO-8601 ordinal of a weekday, Monday = 1 through Sunday = 7.
pub fn ordinal(day: Weekday) -> u32 {
    day.number_from_monday()
}

/// Advances a weekday by a signed number of days, wrapping on the 7-day
/// cycle.
///
/// Any `i64` offset is legal; the offset is reduced modulo 7 before the
/// shift, so multi-week and large negative amounts wrap exactly.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use weektime::weekday::plus;
///
/// assert_eq!(plus(Weekday::Sun, 1), Weekday::Mon);
/// assert_eq!(plus(Weekday::Mon, -1), Weekday::Sun);
/// assert_eq!(plus(Weekday::Wed, -16), Weekday::Mon);
/// ```
pub fn plus(day: Weekday, days: i64) -> Weekday {
    let base = i64::from(day.num_days_from_monday());
    match (base + days.rem_euclid(7)).rem_euclid(7) {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

/// The full English name of a weekday.
pub fn name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
