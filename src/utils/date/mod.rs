// Date utility functions
// Conversions from chrono instants to fractional hours for pixel geometry

use chrono::{NaiveDate, NaiveDateTime, Timelike};

pub fn is_same_day(date: NaiveDateTime, day: NaiveDate) -> bool {
    date.date() == day
}

/// Fractional hours elapsed since midnight of the instant's own day.
pub fn hours_since_midnight(date: NaiveDateTime) -> f32 {
    date.time().num_seconds_from_midnight() as f32 / 3600.0
}

/// Fractional hours from `start` to `end`; negative if `end` is earlier.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f32 {
    (end - start).num_milliseconds() as f32 / 3_600_000.0
}
