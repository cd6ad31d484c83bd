//! Projection of a column assignment onto pixel rectangles.

use crate::models::event::Event;
use crate::models::packed_event::PackedEvent;
use crate::utils::date::{hours_between, hours_since_midnight};

use super::columns::ColumnAssignment;

/// Maps instants onto the vertical pixel axis of the day view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalScale {
    pub day_start_hour: f32,
    pub hour_height: f32,
}

impl VerticalScale {
    pub fn top(&self, event: &Event) -> f32 {
        (hours_since_midnight(event.start) - self.day_start_hour) * self.hour_height
    }

    pub fn height(&self, event: &Event) -> f32 {
        hours_between(event.start, event.end).max(0.0) * self.hour_height
    }
}

/// Build the packed rectangles for one cluster.
///
/// Every event starts from its baseline column of `width / column_count` and
/// widens rightwards through each following column that holds no event
/// overlapping it in time. Expansion stops at the first blocked column.
pub fn project_cluster(
    events: &[Event],
    cluster: &[usize],
    assignment: &ColumnAssignment,
    width: f32,
    scale: &VerticalScale,
) -> Vec<PackedEvent> {
    let column_count = assignment.column_count.max(1);
    let column_width = width / column_count as f32;

    cluster
        .iter()
        .zip(&assignment.columns)
        .map(|(&index, &column)| {
            let event = &events[index];
            let span_end = expansion_limit(events, cluster, assignment, index, column);

            let left = column as f32 * column_width;
            let right = if span_end >= column_count {
                width
            } else {
                span_end as f32 * column_width
            };

            PackedEvent {
                top: scale.top(event),
                height: scale.height(event),
                left,
                width: right - left,
                ..PackedEvent::from_event(event, index)
            }
        })
        .collect()
}

/// First column right of `column` holding an event that overlaps `index`,
/// or the column count when the way to the right edge is clear.
fn expansion_limit(
    events: &[Event],
    cluster: &[usize],
    assignment: &ColumnAssignment,
    index: usize,
    column: usize,
) -> usize {
    let event = &events[index];
    (column + 1..assignment.column_count)
        .find(|&next| {
            assignment
                .occupants(cluster, next)
                .any(|other| events[other].overlaps(event))
        })
        .unwrap_or(assignment.column_count)
}
