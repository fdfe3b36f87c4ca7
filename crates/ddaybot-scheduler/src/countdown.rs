//! Days-remaining calculator.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const SECS_PER_DAY: i64 = 86_400;

/// Whole calendar days from `now` until midnight of `target`.
///
/// Floors: partial days count as spent, so the result reads 0 anywhere
/// inside the final day before `target` and turns -1 the instant `target`
/// midnight passes.
pub fn days_remaining(target: NaiveDate, now: NaiveDateTime) -> i64 {
    let delta = target.and_time(NaiveTime::MIN) - now;
    delta.num_seconds().div_euclid(SECS_PER_DAY)
}
