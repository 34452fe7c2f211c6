// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Paging configuration

use super::Error;
use crate::{ResponsePolicy, SelectionMode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Paging controller configuration
///
/// This is serializable (using `feature = "serde"`) with the following fields:
///
/// > `page_size`: `usize` (maximum items per page) \
/// > `slot_count`: `usize` (page index buttons visible at once) \
/// > `auto_hide`: `bool` \
/// > `response_policy`: [`ResponsePolicy`] \
/// > `selection_mode`: [`SelectionMode`] \
/// > `keep_selection`: `bool`
///
/// With `auto_hide`, the paging control is shown only when there is more
/// than one page; otherwise it is shown whenever there is any item.
///
/// With `keep_selection`, the selection survives loading a new page;
/// otherwise it is cleared each time a response is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PagingConfig {
    #[cfg_attr(feature = "serde", serde(default = "defaults::page_size"))]
    pub page_size: usize,

    #[cfg_attr(feature = "serde", serde(default = "defaults::slot_count"))]
    pub slot_count: usize,

    #[cfg_attr(feature = "serde", serde(default = "defaults::auto_hide"))]
    pub auto_hide: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub response_policy: ResponsePolicy,

    #[cfg_attr(feature = "serde", serde(default))]
    pub selection_mode: SelectionMode,

    #[cfg_attr(feature = "serde", serde(default))]
    pub keep_selection: bool,
}

impl Default for PagingConfig {
    fn default() -> Self {
        PagingConfig {
            page_size: defaults::page_size(),
            slot_count: defaults::slot_count(),
            auto_hide: defaults::auto_hide(),
            response_policy: ResponsePolicy::default(),
            selection_mode: SelectionMode::default(),
            keep_selection: false,
        }
    }
}

impl PagingConfig {
    /// Set the page size (inline)
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the number of page index slots (inline)
    #[must_use]
    pub fn with_slot_count(mut self, slot_count: usize) -> Self {
        self.slot_count = slot_count;
        self
    }

    /// Set the response policy (inline)
    #[must_use]
    pub fn with_response_policy(mut self, policy: ResponsePolicy) -> Self {
        self.response_policy = policy;
        self
    }

    /// Set the selection mode (inline)
    #[must_use]
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Check values
    ///
    /// Both `page_size` and `slot_count` must be positive.
    pub fn validate(&self) -> Result<(), Error> {
        if self.page_size == 0 {
            return Err(Error::Invalid("page_size must be positive"));
        }
        if self.slot_count == 0 {
            return Err(Error::Invalid("slot_count must be positive"));
        }
        Ok(())
    }
}

mod defaults {
    pub fn page_size() -> usize {
        8
    }
    pub fn slot_count() -> usize {
        5
    }
    pub fn auto_hide() -> bool {
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = PagingConfig::default();
        assert_eq!(config.page_size, 8);
        assert_eq!(config.slot_count, 5);
        assert!(config.auto_hide);
        assert_eq!(config.response_policy, ResponsePolicy::LatestRequest);
        assert_eq!(config.selection_mode, SelectionMode::None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate() {
        let config = PagingConfig::default().with_page_size(0);
        assert!(matches!(config.validate(), Err(Error::Invalid(_))));
        let config = PagingConfig::default().with_slot_count(0);
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_partial() {
        use crate::config::Format;
        let config: PagingConfig = Format::Json
            .read_str(r#"{ "page_size": 3, "selection_mode": "Multiple" }"#)
            .unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.slot_count, 5);
        assert_eq!(config.selection_mode, SelectionMode::Multiple);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_round_trip() {
        use crate::config::Format;
        let config = PagingConfig::default()
            .with_page_size(20)
            .with_response_policy(ResponsePolicy::LastArrival);
        let text = Format::Toml.write_string(&config).unwrap();
        let back: PagingConfig = Format::Toml.read_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
