//! Countdown targets relative to the wall clock.

use chrono::{NaiveTime, Timelike};

use super::fields::CountdownTime;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Round `now` up to the next five-minute mark, then add `offset_minutes`.
///
/// `10:07` rounds to `10:10`; a time already on the mark is kept. Minute
/// overflow carries into the hour and the hour wraps at midnight.
#[must_use]
pub fn rounded_target(now: NaiveTime, offset_minutes: u32) -> CountdownTime {
    let rounded_minute = now.minute().div_ceil(5) * 5;
    let total = (now.hour() * 60 + rounded_minute + offset_minutes) % MINUTES_PER_DAY;
    CountdownTime::new(total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
    }

    #[test]
    fn test_carry_into_next_hour() {
        assert_eq!(rounded_target(at(10, 7), 50), CountdownTime::new(11, 0));
    }

    #[test]
    fn test_rounding_boundaries() {
        assert_eq!(rounded_target(at(10, 0), 0), CountdownTime::new(10, 0));
        assert_eq!(rounded_target(at(10, 1), 0), CountdownTime::new(10, 5));
        assert_eq!(rounded_target(at(10, 15), 10), CountdownTime::new(10, 25));
        assert_eq!(rounded_target(at(10, 58), 10), CountdownTime::new(11, 10));
    }

    #[test]
    fn test_wraps_past_midnight() {
        assert_eq!(rounded_target(at(23, 40), 50), CountdownTime::new(0, 30));
    }
}
