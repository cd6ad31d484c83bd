// Test fixtures - reusable test data
// Provides consistent days and events across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use dayview_packer::models::event::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Mon Jan 6, 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    /// Returns the given time on `monday()`
    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        monday().and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Creates an untitled event on `monday()`
    pub fn span(start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(dates::at(start.0, start.1), dates::at(end.0, end.1)).unwrap()
    }

    /// Creates a titled event on `monday()`
    pub fn titled(title: &str, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::builder()
            .title(title)
            .start(dates::at(start.0, start.1))
            .end(dates::at(end.0, end.1))
            .build()
            .unwrap()
    }

    /// A realistic busy day: standup, overlapping meetings, lunch, a
    /// reminder at 15:00 and an evening event.
    pub fn busy_day() -> Vec<Event> {
        vec![
            titled("Standup", (9, 0), (9, 15)),
            titled("Design review", (9, 0), (10, 30)),
            titled("1:1", (10, 0), (10, 30)),
            titled("Interview", (10, 15), (11, 15)),
            titled("Lunch", (12, 0), (13, 0)),
            titled("Focus block", (13, 0), (17, 0)),
            titled("Deploy window", (14, 0), (15, 30)),
            titled("Reminder", (15, 0), (15, 0)),
            titled("Dinner", (19, 0), (21, 0)),
        ]
    }
}
