// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! In-memory loader

use super::{Loader, Responder};
use crate::filter::{Fields, Matcher, compare_by};
use crate::{Filter, OrderBy, PageRequest, PageResponse};
use std::cmp::Ordering;
use std::fmt;

type MatchFn<V> = Box<dyn Fn(&Filter, &V) -> bool>;
type OrderFn<V> = Box<dyn Fn(&OrderBy, &V, &V) -> Ordering>;

/// A loader over an in-memory data set
///
/// Each request is answered synchronously: items are filtered, sorted
/// (stable; only when the request specifies an ordering) and sliced to the
/// requested page.
///
/// Warning: this implementation is `O(n log n)` per request where `n` is the
/// number of data items.
pub struct LocalLoader<V> {
    items: Vec<V>,
    matcher: Option<MatchFn<V>>,
    ordering: Option<OrderFn<V>>,
    requests: Vec<PageRequest>,
}

impl<V> fmt::Debug for LocalLoader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalLoader")
            .field("len", &self.items.len())
            .field("matcher", &self.matcher.is_some())
            .field("ordering", &self.ordering.is_some())
            .field("requests", &self.requests.len())
            .finish()
    }
}

impl<V: Clone> LocalLoader<V> {
    /// Construct over `items`, ignoring filters and ordering
    pub fn new(items: Vec<V>) -> Self {
        LocalLoader {
            items,
            matcher: None,
            ordering: None,
            requests: Vec::new(),
        }
    }

    /// Set the filter interpretation (inline)
    #[must_use]
    pub fn with_matcher(mut self, f: impl Fn(&Filter, &V) -> bool + 'static) -> Self {
        self.matcher = Some(Box::new(f));
        self
    }

    /// Set the ordering interpretation (inline)
    #[must_use]
    pub fn with_ordering(mut self, f: impl Fn(&OrderBy, &V, &V) -> Ordering + 'static) -> Self {
        self.ordering = Some(Box::new(f));
        self
    }

    /// Direct access to the data set
    #[inline]
    pub fn items_mut(&mut self) -> &mut Vec<V> {
        &mut self.items
    }

    /// Requests received since the log was last taken or cleared
    #[inline]
    pub fn requests(&self) -> &[PageRequest] {
        &self.requests
    }

    /// Take the request log, leaving it empty
    pub fn take_requests(&mut self) -> Vec<PageRequest> {
        std::mem::take(&mut self.requests)
    }

    /// Clear the request log
    pub fn clear_requests(&mut self) {
        self.requests.clear();
    }

    /// Compute the response to `request`
    pub fn query(&self, request: &PageRequest) -> PageResponse<V> {
        let mut matching: Vec<&V> = match &self.matcher {
            Some(matches) => self
                .items
                .iter()
                .filter(|item| matches(request.filter(), item))
                .collect(),
            None => self.items.iter().collect(),
        };

        if let (Some(order), Some(order_by)) = (&self.ordering, request.order_by()) {
            matching.sort_by(|a, b| order(order_by, a, b));
        }

        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(request.offset())
            .take(request.page_size())
            .cloned()
            .collect();
        PageResponse { total, items }
    }
}

impl<V: Clone + Fields + 'static> LocalLoader<V> {
    /// Construct over `items`, interpreting filters and ordering by field
    ///
    /// See [`Matcher`] for [`Filter`] and [`compare_by`].
    pub fn with_fields(items: Vec<V>) -> Self {
        LocalLoader::new(items)
            .with_matcher(|filter, item| filter.matches(item))
            .with_ordering(compare_by)
    }
}

impl<V: Clone> Loader<V> for LocalLoader<V> {
    fn load(&mut self, request: PageRequest, responder: Responder<V>) {
        let response = self.query(&request);
        self.requests.push(request);
        responder.respond(response);
    }
}
