// Packed event module
// An input event plus its pixel geometry on the day view

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::event::Event;

/// Event with its computed rectangle on the day view.
///
/// `index` is the position of the source event in the slice that was packed;
/// renderers use it to map taps back to their own event list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedEvent {
    pub top: f32,
    pub height: f32,
    pub left: f32,
    pub width: f32,
    pub index: usize,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl PackedEvent {
    pub(crate) fn from_event(event: &Event, index: usize) -> Self {
        Self {
            top: 0.0,
            height: 0.0,
            left: 0.0,
            width: 0.0,
            index,
            start: event.start,
            end: event.end,
            title: event.title.clone(),
            summary: event.summary.clone(),
            color: event.color.clone(),
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Returns true if the horizontal extents `[left, right)` intersect.
    ///
    /// `tolerance` absorbs float rounding at shared column edges.
    pub fn horizontally_overlaps(&self, other: &PackedEvent, tolerance: f32) -> bool {
        self.left < other.right() - tolerance && other.left < self.right() - tolerance
    }
}
