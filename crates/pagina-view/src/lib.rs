// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Paging and bound collection views
//!
//! A [`PagingController`] coordinates page navigation over a remote data set:
//!
//! 1.  Navigation (page index change, filter change, sort change) builds a
//!     [`PageRequest`] and passes it to a [`Loader`]
//! 2.  The loader answers through a [`Responder`], synchronously or later
//! 3.  The controller applies the [`PageResponse`] to its
//!     [`CollectionBinding`] and [`PageWindowState`], then asks a [`View`] to
//!     render
//!
//! The controller also owns a [`SelectionSet`] over the keys of bound values.
//!
//! [`PageWindow`] computes which page index slots of a paging control are
//! visible. It is a pure function and may be used on its own.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use linear_map::set::LinearSet;
pub use pagina_core::{ResponsePolicy, SelectionMode};

mod request;
pub use request::{Direction, Filter, OrderBy, PageRequest, PageResponse};

mod page_window;
pub use page_window::{PageSpan, PageWindow, PageWindowState, pages_count};

mod selection;
pub use selection::SelectionSet;

mod binding;
pub use binding::{CollectionBinding, ElementHandle};

pub mod filter;

mod loader;
#[cfg(feature = "spawn")]
pub use loader::FutureLoader;
pub use loader::{LocalLoader, Loader, Responder};

mod view;
pub use view::{NullView, View};

mod controller;
pub use controller::{LoadState, PagingController};

/// Used to notify selection and deselection of individual keys
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionMsg<K> {
    /// Selection of item
    Select(K),
    /// Deselection of item
    ///
    /// Note: not emitted due to selection of another item in single-item selection mode.
    Deselect(K),
}

/// State of a "master" checkbox over the rendered items
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MasterState {
    /// No rendered item is selected
    #[default]
    Unchecked,
    /// Every rendered item is selected
    Checked,
    /// Some rendered items are selected
    Mixed,
}
