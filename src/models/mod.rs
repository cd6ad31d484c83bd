// Module exports for models

pub mod event;
pub mod packed_event;
pub mod settings;
