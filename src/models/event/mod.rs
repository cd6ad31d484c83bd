// Event module
// Input event for the day view packer

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A time-bounded event to be placed on the day view.
///
/// `title`, `summary` and `color` are opaque to the packer and are copied to
/// the packed output unchanged. The event's identity in the output is its
/// position in the slice passed to the packer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Event {
    /// Create a new event spanning `[start, end)`
    ///
    /// # Arguments
    /// * `start` - Event start time
    /// * `end` - Event end time, equal to `start` for a point event
    ///
    /// # Returns
    /// Returns `Result<Event, String>` with validation
    ///
    /// # Examples
    /// ```
    /// use dayview_packer::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 1, 6)
    ///     .unwrap()
    ///     .and_hms_opt(9, 0, 0)
    ///     .unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new(start, end).unwrap();
    /// assert!(!event.is_point());
    /// ```
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, String> {
        let event = Self {
            start,
            end,
            title: None,
            summary: None,
            color: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.end < self.start {
            return Err("Event end time must not be before start time".to_string());
        }
        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True for a zero-length event (`start == end`).
    pub fn is_point(&self) -> bool {
        self.end <= self.start
    }

    /// Exclusive end of the time this event blocks.
    ///
    /// A point event still blocks the instant it starts at, so it collides
    /// with anything whose half-open range contains that instant.
    pub fn occupied_until(&self) -> NaiveDateTime {
        if self.end > self.start {
            self.end
        } else {
            self.start
                .checked_add_signed(Duration::nanoseconds(1))
                .unwrap_or(self.start)
        }
    }

    /// Half-open overlap test; touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.occupied_until() && other.start < self.occupied_until()
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    title: Option<String>,
    summary: Option<String>,
    color: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start time
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event summary
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the event color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = Event {
            start,
            end,
            title: self.title,
            summary: self.summary,
            color: self.color,
        };

        event.validate()?;
        Ok(event)
    }
}
