//! Memoization of the last packed layout.
//!
//! Renderers redraw far more often than their events or geometry change.
//! `LayoutCache` keeps the most recent result and re-packs only when the
//! content hash of the inputs differs.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::models::event::Event;
use crate::models::packed_event::PackedEvent;
use crate::services::packer::{pack, PackError};

/// Content hash of everything `pack` depends on.
pub fn layout_key(events: &[Event], width: f32, day_start_hour: f32, hour_height: f32) -> u64 {
    let mut hasher = DefaultHasher::new();
    events.hash(&mut hasher);
    width.to_bits().hash(&mut hasher);
    day_start_hour.to_bits().hash(&mut hasher);
    hour_height.to_bits().hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug, Default)]
pub struct LayoutCache {
    entry: Option<(u64, Vec<PackedEvent>)>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached layout for these inputs, packing on a miss.
    ///
    /// A failed pack leaves the previous entry in place.
    pub fn get_or_pack(
        &mut self,
        events: &[Event],
        width: f32,
        day_start_hour: f32,
        hour_height: f32,
    ) -> Result<&[PackedEvent], PackError> {
        let key = layout_key(events, width, day_start_hour, hour_height);

        let hit = matches!(&self.entry, Some((cached, _)) if *cached == key);
        if hit {
            log::trace!("Layout cache hit for key {:016x}", key);
        } else {
            let packed = pack(events, width, day_start_hour, hour_height)?;
            self.entry = Some((key, packed));
        }

        Ok(self
            .entry
            .as_ref()
            .map(|(_, packed)| packed.as_slice())
            .unwrap_or_default())
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}
