//! Property checks for wraparound arithmetic on the weekly cycle.
//!
//! These pin the algebra of `plus`/`minus`/`until` rather than individual
//! values: subtraction inverts addition for every representable amount,
//! forward distance recovers any sub-week offset, and distance always lands
//! inside one week.

use std::cmp::Ordering;

use proptest::prelude::*;
use weektime::timeofday::{self, NANOS_PER_DAY, NANOS_PER_WEEK};
use weektime::{weekday, TimeUnit, WeekTime};

static SUPPORTED: [TimeUnit; 8] = [
    TimeUnit::Nanos,
    TimeUnit::Micros,
    TimeUnit::Millis,
    TimeUnit::Seconds,
    TimeUnit::Minutes,
    TimeUnit::Hours,
    TimeUnit::HalfDays,
    TimeUnit::Days,
];

fn week_times() -> impl Strategy<Value = WeekTime> {
    (1i64..=7, 0..NANOS_PER_DAY).prop_map(|(ordinal, nanos)| {
        WeekTime::new(
            weekday::from_ordinal(ordinal).unwrap(),
            timeofday::from_nano_of_day(nanos).unwrap(),
        )
    })
}

fn supported_units() -> impl Strategy<Value = TimeUnit> {
    proptest::sample::select(&SUPPORTED[..])
}

/// A supported unit together with a non-negative offset below one week.
fn unit_and_sub_week_offset() -> impl Strategy<Value = (TimeUnit, i64)> {
    supported_units().prop_flat_map(|unit| {
        let week_len = NANOS_PER_WEEK / unit.nanos_per_unit().unwrap();
        (Just(unit), 0..week_len)
    })
}

proptest! {
    #[test]
    fn plus_then_minus_round_trips(
        moment in week_times(),
        amount in any::<i64>(),
        unit in supported_units(),
    ) {
        let there = moment.plus(amount, unit).unwrap();
        prop_assert_eq!(there.minus(amount, unit).unwrap(), moment);
    }

    #[test]
    fn until_recovers_forward_offsets(
        moment in week_times(),
        (unit, offset) in unit_and_sub_week_offset(),
    ) {
        let shifted = moment.plus(offset, unit).unwrap();
        prop_assert_eq!(moment.until(&shifted, unit).unwrap(), offset);
    }

    #[test]
    fn until_to_self_is_zero(moment in week_times(), unit in supported_units()) {
        prop_assert_eq!(moment.until(&moment, unit).unwrap(), 0);
    }

    #[test]
    fn until_stays_inside_one_week(
        a in week_times(),
        b in week_times(),
        unit in supported_units(),
    ) {
        let distance = a.until(&b, unit).unwrap();
        let week_len = NANOS_PER_WEEK / unit.nanos_per_unit().unwrap();
        prop_assert!((0..week_len).contains(&distance));
    }

    #[test]
    fn ordering_matches_equality(a in week_times(), b in week_times()) {
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
        if a.cmp(&b) == Ordering::Less {
            prop_assert_eq!(b.cmp(&a), Ordering::Greater);
        }
    }
}
