// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Listener registry

use std::fmt;

/// A list of registered handlers for one kind of notification
///
/// Handlers receive the notification payload by reference. They cannot reach
/// the notifying object, thus cannot re-enter it while it is mid-update.
pub struct Listeners<T: ?Sized> {
    handlers: Vec<Box<dyn FnMut(&T)>>,
}

impl<T: ?Sized> Default for Listeners<T> {
    fn default() -> Self {
        Listeners { handlers: Vec::new() }
    }
}

impl<T: ?Sized> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.handlers.len())
            .finish()
    }
}

impl<T: ?Sized> Listeners<T> {
    /// Construct an empty registry
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler
    pub fn push(&mut self, handler: impl FnMut(&T) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// True if no handler is registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Number of registered handlers
    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Remove all handlers
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Call every handler, in registration order
    pub fn notify(&mut self, payload: &T) {
        for handler in &mut self.handlers {
            handler(payload);
        }
    }
}
