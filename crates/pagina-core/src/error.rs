// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types

use crate::config;
use thiserror::Error;

/// Errors reported by paging, selection and binding operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input passed by the caller
    ///
    /// Examples: a value without an id, a zero page size or a page index
    /// outside the current page range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A response arrived for a request which has since been superseded
    #[error("stale response for request {seq} (latest issued request: {latest})")]
    StaleResponse { seq: u64, latest: u64 },

    #[error("configuration error")]
    Config(#[from] config::Error),
}

impl Error {
    /// Construct an [`Error::InvalidArgument`]
    #[inline]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// True if this is an [`Error::InvalidArgument`]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let err = Error::invalid("page size is zero");
        assert_eq!(err.to_string(), "invalid argument: page size is zero");
        assert!(err.is_invalid_argument());

        let err = Error::StaleResponse { seq: 1, latest: 2 };
        assert_eq!(
            err.to_string(),
            "stale response for request 1 (latest issued request: 2)"
        );
        assert!(!err.is_invalid_argument());
    }
}
