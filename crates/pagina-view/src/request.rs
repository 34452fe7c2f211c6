// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Page requests and responses

use pagina_core::Param;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field filter passed to a loader
///
/// Interpretation is up to the loader; see [`crate::filter`] for the
/// interpretation used by [`LocalLoader`](crate::LocalLoader).
pub type Filter = BTreeMap<String, Param>;

/// Sort direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Direction {
    /// Unsorted
    None,
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl Direction {
    /// Flip direction
    ///
    /// Any direction other than [`Direction::Desc`] becomes `Desc`.
    pub fn toggle(self) -> Self {
        match self {
            Direction::Desc => Direction::Asc,
            _ => Direction::Desc,
        }
    }
}

/// Ordering of loaded items
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderBy {
    pub field_name: String,
    pub direction: Direction,
}

impl OrderBy {
    /// Order by `field_name`, ascending
    pub fn asc(field_name: impl Into<String>) -> Self {
        OrderBy {
            field_name: field_name.into(),
            direction: Direction::Asc,
        }
    }

    /// Order by `field_name`, descending
    pub fn desc(field_name: impl Into<String>) -> Self {
        OrderBy {
            field_name: field_name.into(),
            direction: Direction::Desc,
        }
    }
}

/// A request for one page of items
///
/// Constructed fresh for each load and immutable once sent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageRequest {
    seq: u64,
    page_index: usize,
    page_size: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    filter: Filter,
    #[cfg_attr(feature = "serde", serde(default))]
    order_by: Option<OrderBy>,
}

impl PageRequest {
    /// Construct for a zero-based `page_index`
    pub fn new(page_index: usize, page_size: usize) -> Self {
        PageRequest {
            seq: 0,
            page_index,
            page_size,
            filter: Filter::new(),
            order_by: None,
        }
    }

    /// Set the filter (inline)
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the ordering (inline)
    #[must_use]
    pub fn with_order_by(mut self, order_by: Option<OrderBy>) -> Self {
        self.order_by = order_by;
        self
    }

    #[must_use]
    pub(crate) fn with_seq(mut self, seq: u64) -> Self {
        self.seq = seq;
        self
    }

    /// Sequence number
    ///
    /// Requests issued by one controller have strictly increasing numbers.
    #[inline]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Zero-based page index
    #[inline]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Maximum number of items expected in the response
    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first requested item
    #[inline]
    pub fn offset(&self) -> usize {
        self.page_index * self.page_size
    }

    #[inline]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    #[inline]
    pub fn order_by(&self) -> Option<&OrderBy> {
        self.order_by.as_ref()
    }
}

/// A page of items returned by a loader
///
/// `items.len()` does not exceed the requested page size; `total` is the
/// size of the whole matching set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageResponse<V> {
    pub total: usize,
    pub items: Vec<V>,
}

impl<V> PageResponse<V> {
    /// Construct
    #[inline]
    pub fn new(total: usize, items: Vec<V>) -> Self {
        PageResponse { total, items }
    }

    /// A response with no items
    #[inline]
    pub fn empty() -> Self {
        PageResponse {
            total: 0,
            items: Vec::new(),
        }
    }
}

impl<V> Default for PageResponse<V> {
    fn default() -> Self {
        Self::empty()
    }
}
