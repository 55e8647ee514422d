//! Item id issuing.
//!
//! Ids are creation timestamps in epoch milliseconds, bumped when needed so
//! that every id issued by one generator is strictly greater than the last.

use crate::model::item::{Item, ItemId};
use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond clock used for new item ids.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Issues strictly increasing ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator {
    last_issued: Option<ItemId>,
}

impl IdGenerator {
    /// Seeds the generator above every id already present in `items`.
    pub fn seeded_from(items: &[Item]) -> Self {
        let mut generator = Self::default();
        generator.observe(items);
        generator
    }

    /// Raises the floor so later ids exceed every id in `items`.
    pub fn observe(&mut self, items: &[Item]) {
        if let Some(max_id) = items.iter().map(|item| item.id).max() {
            self.last_issued = Some(self.last_issued.map_or(max_id, |last| last.max(max_id)));
        }
    }

    /// Returns `now_ms`, or one past the previous id when the clock has not
    /// moved past it.
    pub fn next_id(&mut self, now_ms: i64) -> ItemId {
        let id = match self.last_issued {
            Some(last) if now_ms <= last => last.saturating_add(1),
            _ => now_ms,
        };
        self.last_issued = Some(id);
        id
    }
}
