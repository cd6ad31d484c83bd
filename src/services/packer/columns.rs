//! Column assignment within a collision cluster.
//!
//! Greedy first fit over start-ordered events: each event takes the leftmost
//! column whose last occupant has ended, or opens a new column. On interval
//! graphs this uses exactly as many columns as the peak concurrent overlap.

use chrono::NaiveDateTime;

use crate::models::event::Event;

/// Column chosen for each event of a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAssignment {
    /// Parallel to the cluster's index list.
    pub columns: Vec<usize>,
    pub column_count: usize,
}

impl ColumnAssignment {
    /// Events placed in `column`, as indices into the packed slice.
    pub fn occupants<'a>(
        &'a self,
        cluster: &'a [usize],
        column: usize,
    ) -> impl Iterator<Item = usize> + 'a {
        cluster
            .iter()
            .zip(&self.columns)
            .filter(move |&(_, &c)| c == column)
            .map(|(&index, _)| index)
    }
}

pub fn assign_columns(events: &[Event], cluster: &[usize]) -> ColumnAssignment {
    // Exclusive end of the most recent occupant of each column
    let mut column_ends: Vec<NaiveDateTime> = Vec::new();
    let mut columns = Vec::with_capacity(cluster.len());

    for &index in cluster {
        let event = &events[index];
        let column = match column_ends.iter().position(|end| *end <= event.start) {
            Some(free) => {
                column_ends[free] = event.occupied_until();
                free
            }
            None => {
                column_ends.push(event.occupied_until());
                column_ends.len() - 1
            }
        };
        columns.push(column);
    }

    ColumnAssignment {
        column_count: column_ends.len(),
        columns,
    }
}
