// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Loaders
//!
//! # Interface
//!
//! A [`Loader`] receives a [`PageRequest`] and a [`Responder`]. It answers
//! by calling [`Responder::respond`] exactly once, either before returning
//! from [`Loader::load`] or later (possibly from another thread). Since the
//! responder is consumed, answering twice is not possible; dropping the
//! responder without answering leaves the controller waiting indefinitely.
//!
//! Responses are queued and applied by the controller on
//! [`PagingController::poll`](crate::PagingController::poll), never from
//! within the responder call itself.

use crate::{PageRequest, PageResponse};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::time::Duration;

mod local;
pub use local::LocalLoader;

#[cfg(feature = "spawn")]
mod spawn;
#[cfg(feature = "spawn")]
pub use spawn::FutureLoader;

/// Page loader
pub trait Loader<V> {
    /// Start loading the page described by `request`
    ///
    /// This method should not block. The response is delivered through
    /// `responder`.
    fn load(&mut self, request: PageRequest, responder: Responder<V>);
}

impl<V, F: FnMut(PageRequest, Responder<V>)> Loader<V> for F {
    #[inline]
    fn load(&mut self, request: PageRequest, responder: Responder<V>) {
        self(request, responder)
    }
}

#[derive(Debug)]
pub(crate) struct Delivery<V> {
    pub seq: u64,
    pub response: PageResponse<V>,
}

/// Callback for a single [`PageResponse`]
///
/// This is `Send` when `V: Send`.
#[derive(Debug)]
#[must_use = "a loader must respond to each request"]
pub struct Responder<V> {
    seq: u64,
    sender: Sender<Delivery<V>>,
}

impl<V> Responder<V> {
    /// Sequence number of the request being answered
    #[inline]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Deliver the response
    pub fn respond(self, response: PageResponse<V>) {
        let delivery = Delivery {
            seq: self.seq,
            response,
        };
        if self.sender.send(delivery).is_err() {
            log::debug!(
                "Responder::respond: controller dropped; discarding response to request {}",
                self.seq
            );
        }
    }
}

/// Receiving end of responders
#[derive(Debug)]
pub(crate) struct Inbox<V> {
    sender: Sender<Delivery<V>>,
    receiver: Receiver<Delivery<V>>,
}

impl<V> Default for Inbox<V> {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Inbox { sender, receiver }
    }
}

impl<V> Inbox<V> {
    pub fn responder(&self, seq: u64) -> Responder<V> {
        Responder {
            seq,
            sender: self.sender.clone(),
        }
    }

    pub fn try_pop(&self) -> Option<Delivery<V>> {
        self.receiver.try_recv().ok()
    }

    pub fn pop_timeout(&self, timeout: Duration) -> Option<Delivery<V>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(delivery) => Some(delivery),
            Err(RecvTimeoutError::Timeout) => None,
            // unreachable while self holds a sender
            Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deliver_in_order() {
        let inbox = Inbox::<u8>::default();
        let a = inbox.responder(1);
        let b = inbox.responder(2);
        assert_eq!(b.seq(), 2);
        b.respond(PageResponse::new(1, vec![2]));
        a.respond(PageResponse::new(1, vec![1]));

        let first = inbox.try_pop().unwrap();
        assert_eq!((first.seq, first.response.items), (2, vec![2]));
        let second = inbox.try_pop().unwrap();
        assert_eq!(second.seq, 1);
        assert!(inbox.try_pop().is_none());
        assert!(inbox.pop_timeout(Duration::from_millis(1)).is_none());
    }

    #[test]
    fn respond_from_thread() {
        let inbox = Inbox::<String>::default();
        let responder = inbox.responder(5);
        std::thread::spawn(move || {
            responder.respond(PageResponse::new(1, vec!["x".to_string()]));
        });
        let delivery = inbox.pop_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(delivery.seq, 5);
    }
}
