//! Wall-clock abstraction.

use chrono::{Local, NaiveDateTime};

/// Source of the current local wall-clock time.
///
/// Day-boundary arithmetic runs on the host's local clock throughout; the
/// scheduler re-checks often enough that clock shifts (sleep/resume, DST)
/// only move a single check, never a whole day.
pub trait Clock: Send + Sync {
    fn now_local(&self) -> NaiveDateTime;
}

/// The real system clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
