//! "All done" detection.

use crate::model::item::Item;

/// True when the list is non-empty and every item is checked.
pub fn is_all_done(items: &[Item]) -> bool {
    !items.is_empty() && items.iter().all(|item| item.checked)
}

/// Visibility change for the celebration banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerChange {
    Show,
    Hide,
}

/// Tracks banner visibility across renders so repeated renders with the same
/// `all_done` value never add a second banner.
#[derive(Debug, Clone, Copy, Default)]
pub struct BannerState {
    shown: bool,
}

impl BannerState {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Records the latest `all_done` value and reports a change, if any.
    pub fn update(&mut self, all_done: bool) -> Option<BannerChange> {
        if all_done == self.shown {
            return None;
        }
        self.shown = all_done;
        Some(if all_done {
            BannerChange::Show
        } else {
            BannerChange::Hide
        })
    }
}
