//! Event layout packer.
//!
//! Places a day's events onto the vertical timeline so that events sharing
//! time never share horizontal space. The work happens in three passes:
//! collision grouping (`clustering`), greedy column assignment (`columns`)
//! and projection onto pixels (`geometry`).
//!
//! The packer is a pure function of its inputs; nothing is cached between
//! calls.

pub mod clustering;
pub mod columns;
mod error;
pub mod geometry;

pub use error::PackError;

use crate::models::event::Event;
use crate::models::packed_event::PackedEvent;

use clustering::{collision_groups, sort_by_start};
use columns::assign_columns;
use geometry::{project_cluster, VerticalScale};

/// Compute the day view rectangle of every event.
///
/// # Arguments
/// * `events` - Events in any order; output `index` refers to this slice
/// * `width` - Usable event-area width in pixels, margins already removed
/// * `day_start_hour` - Hour of day drawn at `top == 0`
/// * `hour_height` - Pixels per hour
///
/// # Returns
/// One `PackedEvent` per input event, ordered by `index`.
///
/// # Examples
/// ```
/// use dayview_packer::models::event::Event;
/// use dayview_packer::services::packer::pack;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let at = |h| day.and_hms_opt(h, 0, 0).unwrap();
/// let events = vec![Event::new(at(9), at(10)).unwrap(), Event::new(at(9), at(10)).unwrap()];
///
/// let packed = pack(&events, 300.0, 0.0, 100.0).unwrap();
/// assert_eq!(packed[0].width, 150.0);
/// assert_eq!(packed[1].left, 150.0);
/// ```
pub fn pack(
    events: &[Event],
    width: f32,
    day_start_hour: f32,
    hour_height: f32,
) -> Result<Vec<PackedEvent>, PackError> {
    validate_geometry(width, day_start_hour, hour_height)?;

    if let Some((index, event)) = events.iter().enumerate().find(|(_, e)| e.end < e.start) {
        log::warn!(
            "Rejecting event {} with end {} before start {}",
            index,
            event.end,
            event.start
        );
        return Err(PackError::InvalidEventRange {
            index,
            start: event.start,
            end: event.end,
        });
    }

    if events.is_empty() {
        return Ok(Vec::new());
    }

    let scale = VerticalScale {
        day_start_hour,
        hour_height,
    };
    let order = sort_by_start(events);
    let clusters = collision_groups(events, &order);

    let mut packed = Vec::with_capacity(events.len());
    for cluster in &clusters {
        let assignment = assign_columns(events, cluster);
        packed.extend(project_cluster(events, cluster, &assignment, width, &scale));
    }
    packed.sort_by_key(|event| event.index);

    log::debug!(
        "Packed {} events into {} collision groups",
        packed.len(),
        clusters.len()
    );

    Ok(packed)
}

fn validate_geometry(width: f32, day_start_hour: f32, hour_height: f32) -> Result<(), PackError> {
    if !(width.is_finite() && width > 0.0) {
        return Err(PackError::InvalidConfiguration(format!(
            "width must be a positive number, got {}",
            width
        )));
    }

    if !(hour_height.is_finite() && hour_height > 0.0) {
        return Err(PackError::InvalidConfiguration(format!(
            "hour height must be a positive number, got {}",
            hour_height
        )));
    }

    if !(0.0..=24.0).contains(&day_start_hour) {
        return Err(PackError::InvalidConfiguration(format!(
            "day start hour must be within 0..=24, got {}",
            day_start_hour
        )));
    }

    Ok(())
}
