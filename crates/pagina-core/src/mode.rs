// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Behaviour modes

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selection mode used by a selection set
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectionMode {
    /// Disable selection
    #[default]
    None,
    /// Support single-item selection. Selecting another item automatically
    /// clears the prior selection.
    Single,
    /// Support multi-item selection.
    Multiple,
}

/// Policy for responses of overlapping page loads
///
/// When a navigation request is issued before the response to a prior
/// request arrives, two responses are pending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResponsePolicy {
    /// Apply every response in arrival order
    ///
    /// Whichever response arrives last determines the final state, even if
    /// it answers an older request.
    LastArrival,
    /// Apply only the response to the most recent request
    ///
    /// Responses to superseded requests are dropped.
    #[default]
    LatestRequest,
}
