// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Asynchronous loader

use super::{Loader, Responder};
use crate::{PageRequest, PageResponse};
use std::future::Future;

/// A loader driving futures on the global executor
///
/// The closure is called once per request; the resulting future is spawned
/// using [`async_global_executor::spawn`] and its output delivered through
/// the [`Responder`]. Call [`PagingController::wait`] or
/// [`PagingController::poll`] to apply responses.
///
/// [`PagingController::wait`]: crate::PagingController::wait
/// [`PagingController::poll`]: crate::PagingController::poll
#[derive(Clone, Debug)]
pub struct FutureLoader<F>(F);

impl<F> FutureLoader<F> {
    /// Construct from a closure returning a future
    #[inline]
    pub fn new(f: F) -> Self {
        FutureLoader(f)
    }
}

impl<V, F, Fut> Loader<V> for FutureLoader<F>
where
    V: Send + 'static,
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = PageResponse<V>> + Send + 'static,
{
    fn load(&mut self, request: PageRequest, responder: Responder<V>) {
        log::trace!("FutureLoader::load: spawning request {}", request.seq());
        let fut = (self.0)(request);
        async_global_executor::spawn(async move {
            responder.respond(fut.await);
        })
        .detach();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::loader::Inbox;
    use std::time::Duration;

    #[test]
    fn spawned_response() {
        let inbox = Inbox::<u32>::default();
        let mut loader = FutureLoader::new(|request: PageRequest| async move {
            let start = request.offset() as u32;
            PageResponse::new(100, (start..start + request.page_size() as u32).collect())
        });
        loader.load(PageRequest::new(2, 3).with_seq(4), inbox.responder(4));
        let delivery = inbox.pop_timeout(Duration::from_secs(10)).unwrap();
        assert_eq!(delivery.seq, 4);
        assert_eq!(delivery.response.items, [6, 7, 8]);
    }
}
