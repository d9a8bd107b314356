//! # weektime
//!
//! Immutable day-of-week plus time-of-day values with exact wraparound
//! arithmetic on the seven-day cycle.
//!
//! A [`WeekTime`] names a recurring moment such as "Monday at 13:45", with
//! no date and no timezone attached. Amounts of any sub-day unit (and whole
//! days) can be added or subtracted with exact carry across midnight and
//! the Sunday/Monday boundary, and the distance between two moments is
//! always measured forward around the cycle, so it is never negative.
//!
//! # Design Principle
//!
//! Every operation is a pure, synchronous computation over `Copy` value
//! fields. There is no system clock access and no I/O; callers anchor
//! week-times to real datetimes themselves (any chrono datetime is a
//! [`TemporalSource`]), keeping the crate deterministic and trivially
//! thread-safe.
//!
//! ## Modules
//!
//! - [`week_time`] — The [`WeekTime`] value type and [`TemporalSource`]
//! - [`weekday`] — Day-of-week ordinals and signed modulo-7 advancement
//! - [`timeofday`] — Nano-of-day arithmetic and field access on times
//! - [`field`] — Built-in and caller-defined field identifiers
//! - [`unit`] — Built-in and caller-defined time units
//! - [`error`] — Error types
//!
//! # Examples
//!
//! ```
//! use chrono::{NaiveTime, Weekday};
//! use weektime::{TimeUnit, WeekTime};
//!
//! let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
//! let friday = WeekTime::new(Weekday::Fri, ten);
//! let monday = WeekTime::new(Weekday::Mon, ten);
//!
//! // Distance is forward-only around the cycle
//! assert_eq!(friday.until(&monday, TimeUnit::Days)?, 3);
//!
//! // Arithmetic wraps exactly across the week boundary
//! assert_eq!(friday.plus(72, TimeUnit::Hours)?, monday);
//! # Ok::<(), weektime::WeekTimeError>(())
//! ```

pub mod error;
pub mod field;
pub mod timeofday;
pub mod unit;
pub mod week_time;
pub mod weekday;

pub use error::{Result, WeekTimeError};
pub use field::{BuiltinField, Field, FieldOps};
pub use unit::{TimeUnit, Unit, UnitOps};
pub use week_time::{TemporalSource, WeekTime};
