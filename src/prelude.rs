// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Pagina prelude
//!
//! This module allows convenient importation of common unambiguous items:
//! ```
//! use pagina::prelude::*;
//! ```

#[doc(no_inline)]
pub use pagina_core::config::PagingConfig;
#[doc(no_inline)]
pub use pagina_core::{
    DataKey, Error, Param, Record, RecordId, ResponsePolicy, SelectionMode, Value,
};
#[doc(no_inline)]
pub use pagina_view::{
    CollectionBinding, Filter, LoadState, Loader, LocalLoader, NullView, OrderBy, PageRequest,
    PageResponse, PageWindow, PageWindowState, PagingController, Responder, SelectionSet, View,
};
