use chrono::NaiveDateTime;
use thiserror::Error;

/// Reasons a `pack` call rejects its input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackError {
    #[error("Event {index} ends before it starts ({start} > {end})")]
    InvalidEventRange {
        index: usize,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Invalid layout configuration: {0}")]
    InvalidConfiguration(String),
}
