// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Page window computation and paging state

use pagina_core::Error;
use std::ops::Range;

/// Number of pages needed for `items_count` items
///
/// Returns zero when `page_size` is zero.
#[inline]
pub fn pages_count(items_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        items_count.div_ceil(page_size)
    }
}

/// The page index slots visible in a paging control
///
/// A paging control has a fixed number of index slots (buttons labelled with
/// page numbers). When there are more pages than slots, the window of
/// visible pages is centred on the active page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PageWindow {
    /// Page index shown in the first slot
    pub start_page: usize,
    /// Number of slots in use
    pub visible_count: usize,
    /// Slot holding the active page
    ///
    /// When `visible_count > 0` this is always less than `visible_count`.
    pub active_slot: usize,
}

impl PageWindow {
    /// Compute the window
    ///
    /// A `page_index` beyond the last page is treated as the last page.
    pub fn compute(page_index: usize, pages_count: usize, slot_count: usize) -> Self {
        if pages_count == 0 || slot_count == 0 {
            return PageWindow::default();
        }

        let page_index = page_index.min(pages_count - 1);
        let (start_page, visible_count) = if pages_count <= slot_count {
            (0, pages_count)
        } else {
            let start = page_index.saturating_sub(slot_count / 2);
            (start.min(pages_count - slot_count), slot_count)
        };

        PageWindow {
            start_page,
            visible_count,
            active_slot: page_index - start_page,
        }
    }

    /// True if no slot is visible
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visible_count == 0
    }

    /// Whether the "previous" button is enabled
    #[inline]
    pub fn has_previous(&self) -> bool {
        self.active_slot > 0
    }

    /// Whether the "next" button is enabled
    #[inline]
    pub fn has_next(&self) -> bool {
        self.active_slot + 1 < self.visible_count
    }

    /// Active page index
    #[inline]
    pub fn active_page(&self) -> Option<usize> {
        self.page_at(self.active_slot)
    }

    /// Range of visible page indices
    #[inline]
    pub fn pages(&self) -> Range<usize> {
        self.start_page..self.start_page + self.visible_count
    }

    /// Page index shown in `slot`, if visible
    pub fn page_at(&self, slot: usize) -> Option<usize> {
        (slot < self.visible_count).then(|| self.start_page + slot)
    }

    /// Labels of visible slots (one-based page numbers)
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.pages().map(|page| (page + 1).to_string())
    }
}

/// Range of items on the current page, as shown in a table footer
///
/// `start` and `end` are one-based item numbers; both are zero when
/// there are no items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PageSpan {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

/// Paging state: current page and counts
///
/// Invariants: `pages_count == ceil(items_count / page_size)` and
/// `page_index < max(pages_count, 1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWindowState {
    page_size: usize,
    page_index: usize,
    pages_count: usize,
    items_count: usize,
}

impl PageWindowState {
    /// Construct with the given page size
    ///
    /// Fails if `page_size == 0`.
    pub fn new(page_size: usize) -> Result<Self, Error> {
        if page_size == 0 {
            return Err(Error::invalid("page size must be positive"));
        }
        Ok(PageWindowState {
            page_size,
            page_index: 0,
            pages_count: 0,
            items_count: 0,
        })
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[inline]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    #[inline]
    pub fn pages_count(&self) -> usize {
        self.pages_count
    }

    #[inline]
    pub fn items_count(&self) -> usize {
        self.items_count
    }

    /// Change the page size
    ///
    /// Recomputes the page count for the current items count. The page index
    /// is limited to the new last page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), Error> {
        if page_size == 0 {
            return Err(Error::invalid("page size must be positive"));
        }
        self.page_size = page_size;
        self.set_items_count(self.items_count);
        Ok(())
    }

    /// Set the total number of items
    pub fn set_items_count(&mut self, items_count: usize) {
        self.items_count = items_count;
        self.pages_count = pages_count(items_count, self.page_size);
        self.page_index = self.page_index.min(self.pages_count.max(1) - 1);
    }

    /// Set the current page index
    ///
    /// Fails if `page_index` is outside `0..max(pages_count, 1)`.
    pub fn set_page_index(&mut self, page_index: usize) -> Result<(), Error> {
        if page_index >= self.pages_count.max(1) {
            return Err(Error::invalid(format!(
                "page index {page_index} out of range (pages count: {})",
                self.pages_count
            )));
        }
        self.page_index = page_index;
        Ok(())
    }

    /// Reset page index and counts to zero
    pub fn reset(&mut self) {
        self.page_index = 0;
        self.pages_count = 0;
        self.items_count = 0;
    }

    /// Compute the visible window over `slot_count` slots
    #[inline]
    pub fn window(&self, slot_count: usize) -> PageWindow {
        PageWindow::compute(self.page_index, self.pages_count, slot_count)
    }

    /// Whether the paging control should be shown
    ///
    /// With `auto_hide`, paging is shown only when there is more than one
    /// page; otherwise it is shown when there is any item.
    pub fn is_visible(&self, auto_hide: bool) -> bool {
        if auto_hide {
            self.pages_count > 1
        } else {
            self.items_count > 0
        }
    }

    /// True if the current page is not the first
    #[inline]
    pub fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    /// True if the current page is not the last
    #[inline]
    pub fn has_next_page(&self) -> bool {
        self.page_index + 1 < self.pages_count
    }

    /// Items range of the current page
    pub fn span(&self) -> PageSpan {
        if self.items_count == 0 {
            return PageSpan::default();
        }
        let offset = self.page_index * self.page_size;
        PageSpan {
            start: offset + 1,
            end: (offset + self.page_size).min(self.items_count),
            total: self.items_count,
        }
    }
}
