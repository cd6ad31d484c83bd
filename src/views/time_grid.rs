//! Hour grid for the day view.
//!
//! Computes where hour and half-hour lines sit and what their labels read.
//! Drawing them is left to the renderer.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::settings::DayViewSettings;

/// Vertical nudge that centres a label on its grid line.
const LABEL_BASELINE_OFFSET: f32 = 6.0;

/// One labelled hour row of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourLine {
    pub hour: u32,
    pub offset: f32,
    pub label_offset: f32,
    pub label: String,
    /// The first hour sits on the top edge and gets a label only.
    pub draws_line: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_offset: Option<f32>,
}

/// Label for an hour of the day, `0..=24`.
pub fn hour_label(hour: u32, format_24h: bool) -> String {
    match (hour, format_24h) {
        (0 | 24, true) => "0:00".to_string(),
        (_, true) => format!("{}:00", hour),
        (0 | 24, false) => "12 AM".to_string(),
        (12, false) => "12 PM".to_string(),
        (1..=11, false) => format!("{} AM", hour),
        (_, false) => format!("{} PM", hour - 12),
    }
}

/// Start and end time shown inside an event block.
pub fn time_range_label(start: NaiveDateTime, end: NaiveDateTime, format_24h: bool) -> String {
    let format = if format_24h { "%H:%M" } else { "%I:%M %p" };
    format!("{} - {}", start.format(format), end.format(format))
}

/// Grid rows for every hour from `start_hour` to `end_hour` inclusive.
pub fn hour_lines(settings: &DayViewSettings) -> Vec<HourLine> {
    (settings.start_hour..=settings.end_hour)
        .enumerate()
        .map(|(row, hour)| {
            let offset = settings.hour_height * row as f32;
            let half_offset = (settings.line_half && hour < settings.end_hour)
                .then(|| offset + settings.hour_height / 2.0);

            HourLine {
                hour,
                offset,
                label_offset: offset - LABEL_BASELINE_OFFSET,
                label: hour_label(hour, settings.format_24h),
                draws_line: hour != settings.start_hour,
                half_offset,
            }
        })
        .collect()
}
