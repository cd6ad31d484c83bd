// Day view geometry built on top of the packer

pub mod cache;
pub mod day_view;
pub mod time_grid;

pub use cache::LayoutCache;
pub use day_view::{DayViewLayout, EventTextLines};
pub use time_grid::HourLine;
