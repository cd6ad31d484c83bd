//! Day view geometry.
//!
//! Everything the renderer needs besides the packed rectangles: how tall the
//! scrollable calendar is, how wide the event area is once the label gutter
//! and right padding are removed, where to scroll initially, and where the
//! current time line sits.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use super::time_grid::{self, HourLine};
use crate::models::event::Event;
use crate::models::packed_event::PackedEvent;
use crate::models::settings::DayViewSettings;
use crate::services::packer::{self, PackError};
use crate::utils::date::is_same_day;

/// How many lines of text fit inside a packed event block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTextLines {
    pub total: u32,
}

impl EventTextLines {
    /// The title line is always drawn, clipped if the block is short.
    pub fn shows_title(&self) -> bool {
        true
    }

    pub fn shows_summary(&self) -> bool {
        self.total > 1
    }

    /// Lines available to the summary below the title.
    pub fn summary_lines(&self) -> u32 {
        self.total.saturating_sub(1)
    }

    pub fn shows_times(&self) -> bool {
        self.total > 2
    }
}

/// Geometry of one day view at a given on-screen width.
#[derive(Debug, Clone, Copy)]
pub struct DayViewLayout<'a> {
    settings: &'a DayViewSettings,
    view_width: f32,
}

impl<'a> DayViewLayout<'a> {
    pub fn new(settings: &'a DayViewSettings, view_width: f32) -> Self {
        Self {
            settings,
            view_width,
        }
    }

    pub fn settings(&self) -> &DayViewSettings {
        self.settings
    }

    /// Total scrollable height of the hour grid.
    pub fn calendar_height(&self) -> f32 {
        self.settings.visible_hours() as f32 * self.settings.hour_height
    }

    /// Width handed to the packer.
    pub fn event_area_width(&self) -> f32 {
        self.view_width - self.settings.left_margin - self.settings.right_margin
    }

    /// Length of the hour and now lines, which start at the view's left edge.
    pub fn grid_line_width(&self) -> f32 {
        self.view_width - self.settings.right_margin
    }

    pub fn pack(&self, events: &[Event]) -> Result<Vec<PackedEvent>, PackError> {
        packer::pack(
            events,
            self.event_area_width(),
            self.settings.start_hour as f32,
            self.settings.hour_height,
        )
    }

    /// Scroll position that shows the earliest event one hour below the top.
    pub fn initial_scroll_offset(&self, packed: &[PackedEvent]) -> Option<f32> {
        packed
            .iter()
            .map(|event| event.top)
            .min_by(f32::total_cmp)
            .map(|top| (top - self.settings.hour_height).max(0.0))
    }

    /// Offset of the current time line, if `now` falls on the displayed day.
    pub fn now_line_offset(&self, now: NaiveDateTime, day: NaiveDate) -> Option<f32> {
        if !is_same_day(now, day) {
            return None;
        }

        let hour_height = self.settings.hour_height;
        let hours = now.hour() as f32 - self.settings.start_hour as f32;
        Some(hour_height * hours + hour_height * now.minute() as f32 / 60.0)
    }

    pub fn hour_lines(&self) -> Vec<HourLine> {
        time_grid::hour_lines(self.settings)
    }

    pub fn text_lines(&self, event: &PackedEvent) -> EventTextLines {
        let lines = (event.height / self.settings.text_line_height).floor();
        EventTextLines {
            total: if lines.is_finite() && lines > 0.0 {
                lines as u32
            } else {
                0
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        day().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    fn work_day() -> DayViewSettings {
        DayViewSettings {
            start_hour: 8,
            end_hour: 18,
            hour_height: 60.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_margins_are_removed_from_event_width() {
        let settings = DayViewSettings::default();
        let layout = DayViewLayout::new(&settings, 369.0);
        assert_eq!(layout.event_area_width(), 300.0);
        assert_eq!(layout.grid_line_width(), 349.0);
        assert_eq!(layout.calendar_height(), 2400.0);
    }

    #[test]
    fn test_pack_uses_settings_geometry() {
        let settings = work_day();
        let layout = DayViewLayout::new(&settings, 369.0);
        let events = vec![Event::new(at(9, 0), at(10, 30)).unwrap()];

        let packed = layout.pack(&events).unwrap();
        assert_eq!(packed[0].top, 60.0);
        assert_eq!(packed[0].height, 90.0);
        assert_eq!(packed[0].width, 300.0);
    }

    #[test]
    fn test_view_narrower_than_margins_is_rejected() {
        let settings = DayViewSettings::default();
        let layout = DayViewLayout::new(&settings, 50.0);
        let events = vec![Event::new(at(9, 0), at(10, 0)).unwrap()];
        assert!(matches!(
            layout.pack(&events),
            Err(PackError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_initial_scroll_offset() {
        let settings = work_day();
        let layout = DayViewLayout::new(&settings, 369.0);

        let events = vec![
            Event::new(at(13, 0), at(14, 0)).unwrap(),
            Event::new(at(11, 0), at(12, 0)).unwrap(),
        ];
        let packed = layout.pack(&events).unwrap();
        assert_eq!(layout.initial_scroll_offset(&packed), Some(120.0));

        let early = layout
            .pack(&[Event::new(at(8, 30), at(9, 0)).unwrap()])
            .unwrap();
        assert_eq!(layout.initial_scroll_offset(&early), Some(0.0));
        assert_eq!(layout.initial_scroll_offset(&[]), None);
    }

    #[test]
    fn test_now_line_offset() {
        let settings = work_day();
        let layout = DayViewLayout::new(&settings, 369.0);

        assert_eq!(layout.now_line_offset(at(10, 15), day()), Some(135.0));
        assert_eq!(
            layout.now_line_offset(at(10, 15), day().succ_opt().unwrap()),
            None
        );
    }

    #[test]
    fn test_text_lines() {
        let settings = DayViewSettings::default();
        let layout = DayViewLayout::new(&settings, 369.0);
        let events = vec![
            Event::new(at(9, 0), at(9, 0)).unwrap(),
            Event::new(at(10, 0), at(10, 15)).unwrap(),
            Event::new(at(11, 0), at(12, 0)).unwrap(),
        ];
        let packed = layout.pack(&events).unwrap();

        let point = layout.text_lines(&packed[0]);
        assert_eq!(point.total, 0);
        assert!(point.shows_title());
        assert!(!point.shows_summary());

        // 25px fits one line
        let short = layout.text_lines(&packed[1]);
        assert_eq!(short.total, 1);
        assert!(!short.shows_summary());

        // 100px fits five lines
        let hour = layout.text_lines(&packed[2]);
        assert_eq!(hour.total, 5);
        assert!(hour.shows_summary());
        assert_eq!(hour.summary_lines(), 4);
        assert!(hour.shows_times());
    }
}
