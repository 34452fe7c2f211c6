// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Utilities

/// Log a warning regarding an error message, followed by its sources
pub fn warn_about_error(msg: &str, mut error: &dyn std::error::Error) {
    log::warn!("{msg}: {error}");
    while let Some(source) = error.source() {
        log::warn!("Source: {source}");
        error = source;
    }
}

/// Log an error at debug level
///
/// Used for expected, recoverable conditions which are dropped silently.
pub fn debug_about_error(msg: &str, error: &dyn std::error::Error) {
    log::debug!("{msg}: {error}");
}
