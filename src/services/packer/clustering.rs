//! Collision grouping.
//!
//! Splits the start-sorted event list into maximal clusters of events that
//! are connected through chains of time overlap. Events in different clusters
//! never share column space.

use chrono::NaiveDateTime;

use crate::models::event::Event;

/// Indices into the packed event slice, in start order.
pub type Cluster = Vec<usize>;

/// Event indices ordered by start time, ties broken by index.
pub fn sort_by_start(events: &[Event]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by(|&a, &b| events[a].start.cmp(&events[b].start).then(a.cmp(&b)));
    order
}

/// Group start-sorted events into collision clusters.
///
/// Tracks the latest end seen in the open cluster; an event starting at or
/// after it cannot touch anything before it and opens a new cluster.
pub fn collision_groups(events: &[Event], order: &[usize]) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    let mut current: Cluster = Vec::new();
    let mut running_end: Option<NaiveDateTime> = None;

    for &index in order {
        let event = &events[index];
        match running_end {
            Some(end) if event.start < end => {
                current.push(index);
                running_end = Some(end.max(event.occupied_until()));
            }
            _ => {
                if !current.is_empty() {
                    clusters.push(std::mem::take(&mut current));
                }
                current.push(index);
                running_end = Some(event.occupied_until());
            }
        }
    }

    if !current.is_empty() {
        clusters.push(current);
    }

    clusters
}
