// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Pagina: paging over remote-loaded collections
//!
//! This, the main pagina crate, is merely a wrapper over other crates:
//!
//! -   [`pagina_core`] provides keys, values, records, errors and configuration
//! -   [`pagina_view`] provides the paging window, selection, collection
//!     binding and the [`PagingController`](view::PagingController)
//!
//! All items from [`pagina_core`] are directly re-exported from this crate
//! (e.g. [`pagina::config::PagingConfig`](crate::config::PagingConfig));
//! [`pagina_view`] is re-exported as the [`view`] module.
//!
//! ```
//! use pagina::prelude::*;
//!
//! let items: Vec<Record> = (1..=8).map(|i| Record::new(i, format!("item {i}"))).collect();
//! let config = PagingConfig::default().with_page_size(3);
//! let mut controller =
//!     PagingController::new(config, LocalLoader::with_fields(items), NullView::new())?;
//! controller.load(None);
//! assert_eq!(controller.window_state().pages_count(), 3);
//! assert!(controller.next());
//! assert_eq!(controller.span().start, 4);
//! # Ok::<(), pagina::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod prelude;

pub use pagina_core::*;

pub extern crate pagina_view as view;
