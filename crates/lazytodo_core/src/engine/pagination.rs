//! Page windows over a ranked collection.
//!
//! # Invariants
//! - `total_pages` is at least 1; an empty list still has page 1.
//! - A window never holds more than `page_size` items.
//! - Out-of-range pages produce an empty window, not an error.

use crate::model::item::Item;
use crate::model::settings::PageSize;
use std::ops::RangeInclusive;

/// One page of a ranked collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<Item>,
    pub total_pages: u32,
}

impl Page {
    /// Page navigation is only worth showing past one page.
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }
}

/// Number of pages needed for `count` items, never less than 1.
pub fn total_pages(count: usize, page_size: PageSize) -> u32 {
    let size = page_size.get() as usize;
    let pages = count.div_ceil(size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Slices page `page` (1-based) out of `items`.
pub fn paginate(items: &[Item], page: u32, page_size: PageSize) -> Page {
    let size = page_size.get() as usize;
    let window = page
        .checked_sub(1)
        .and_then(|index| (index as usize).checked_mul(size))
        .and_then(|start| items.get(start..))
        .map(|rest| rest.iter().take(size).cloned().collect())
        .unwrap_or_default();

    Page {
        items: window,
        total_pages: total_pages(items.len(), page_size),
    }
}

/// Pulls `current` back onto the last page when the list shrank.
///
/// Never returns less than 1.
pub fn clamp_page(current: u32, total_pages: u32) -> u32 {
    current.min(total_pages).max(1)
}

/// Navigation entries for a pager, `1..=total_pages`.
pub fn page_numbers(total_pages: u32) -> RangeInclusive<u32> {
    1..=total_pages.max(1)
}
