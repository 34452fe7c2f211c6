// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! pagina core
//!
//! Shared vocabulary of the pagina crates: identifier and value traits,
//! a generic [`Record`] type, the crate [`Error`], listener registries and
//! [configuration](config).

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod error;
pub use error::Error;

mod value;
pub use value::{DataKey, RecordId, Value};

mod record;
pub use record::{Param, Record};

mod mode;
pub use mode::{ResponsePolicy, SelectionMode};

mod listener;
pub use listener::Listeners;

pub mod config;
pub mod util;
