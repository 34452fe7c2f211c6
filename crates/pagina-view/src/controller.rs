// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Paging controller

use crate::loader::{Delivery, Inbox};
use crate::{
    CollectionBinding, Filter, Loader, MasterState, OrderBy, PageRequest, PageResponse, PageSpan,
    PageWindow, PageWindowState, SelectionSet, View,
};
use pagina_core::config::PagingConfig;
use pagina_core::util::{debug_about_error, warn_about_error};
use pagina_core::{Error, Listeners, ResponsePolicy, SelectionMode, Value};
use std::fmt;
use std::time::Duration;

/// Loading state of a [`PagingController`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoadState {
    /// No request is outstanding
    #[default]
    Idle,
    /// Waiting for the response to request `seq`
    Loading { seq: u64 },
}

impl LoadState {
    /// True if waiting for a response
    #[inline]
    pub fn is_loading(self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }
}

/// Controller of a paged, bound collection
///
/// Navigation methods build a [`PageRequest`] and pass it to the loader.
/// Responses are delivered to an internal queue and applied by
/// [`Self::poll`] (called automatically after each [`Loader::load`] call
/// returns, thus synchronous loaders need no further action) or
/// [`Self::wait`].
///
/// Applying a response replaces the [`CollectionBinding`] contents, updates
/// the [`PageWindowState`] from the response total, clears the selection
/// (unless [`PagingConfig::keep_selection`] is set), renders the view and
/// finally notifies [`Self::on_change`] listeners.
///
/// When multiple requests are outstanding, [`PagingConfig::response_policy`]
/// decides which responses are applied; see [`ResponsePolicy`].
///
/// There is no error channel from the loader: a loader which drops its
/// [`Responder`](crate::Responder) leaves the controller [`LoadState::Loading`]
/// until the next navigation.
pub struct PagingController<V: Value, L, W: View<V>> {
    config: PagingConfig,
    loader: L,
    view: W,
    window: PageWindowState,
    binding: CollectionBinding<V, W::Element>,
    selection: SelectionSet<V::Key>,
    filter: Filter,
    order_by: Option<OrderBy>,
    state: LoadState,
    seq: u64,
    inbox: Inbox<V>,
    on_change: Listeners<usize>,
}

impl<V: Value, L, W: View<V>> fmt::Debug for PagingController<V, L, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagingController")
            .field("state", &self.state)
            .field("seq", &self.seq)
            .field("window", &self.window)
            .field("filter", &self.filter)
            .field("order_by", &self.order_by)
            .field("len", &self.binding.len())
            .field("selection", self.selection.values())
            .finish_non_exhaustive()
    }
}

impl<V: Value, L: Loader<V>, W: View<V>> PagingController<V, L, W> {
    /// Construct
    ///
    /// Fails with [`Error::Config`] if `config` does not validate.
    pub fn new(config: PagingConfig, loader: L, view: W) -> Result<Self, Error> {
        config.validate()?;
        let window = PageWindowState::new(config.page_size)?;
        let selection = SelectionSet::new(config.selection_mode);
        Ok(PagingController {
            config,
            loader,
            view,
            window,
            binding: CollectionBinding::new(),
            selection,
            filter: Filter::new(),
            order_by: None,
            state: LoadState::Idle,
            seq: 0,
            inbox: Inbox::default(),
            on_change: Listeners::new(),
        })
    }

    /// Set the selection mode (inline)
    #[must_use]
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.set_selection_mode(mode);
        self
    }

    /// Set the selection mode
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.config.selection_mode = mode;
        self.selection.set_mode(mode);
    }

    /// Register a listener called with the total after each applied response
    pub fn on_change(&mut self, handler: impl FnMut(&usize) + 'static) {
        self.on_change.push(handler);
    }

    /// Set the page size
    ///
    /// Fails if `page_size == 0`. Takes effect from the next request; the
    /// current page is not reloaded.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), Error> {
        self.window.set_page_size(page_size)?;
        self.config.page_size = page_size;
        Ok(())
    }

    /// Load the first page
    ///
    /// `filter` is stored and reused by subsequent navigation. `None` clears
    /// the filter.
    pub fn load(&mut self, filter: Option<Filter>) {
        self.filter = filter.unwrap_or_default();
        self.reissue(0);
    }

    /// Reload the current page
    pub fn reload(&mut self) {
        self.reissue(self.window.page_index());
    }

    /// Navigate to `page_index` in response to a paging control event
    ///
    /// Ignored if `page_index` is the current page or beyond the last page.
    /// Returns `true` if a request was issued.
    pub fn on_page_index_change(&mut self, page_index: usize) -> bool {
        if page_index == self.window.page_index() || page_index >= self.window.pages_count() {
            return false;
        }
        self.goto(page_index).is_ok()
    }

    /// Navigate to `page_index`
    ///
    /// Fails with [`Error::InvalidArgument`] if `page_index` is outside the
    /// current page range. Unlike [`Self::on_page_index_change`], this
    /// reloads the current page when `page_index` is current.
    pub fn set_page_index(&mut self, page_index: usize) -> Result<(), Error> {
        self.goto(page_index)
    }

    /// Navigate to the previous page, if any
    pub fn previous(&mut self) -> bool {
        self.window.has_previous_page() && self.on_page_index_change(self.window.page_index() - 1)
    }

    /// Navigate to the next page, if any
    pub fn next(&mut self) -> bool {
        self.window.has_next_page() && self.on_page_index_change(self.window.page_index() + 1)
    }

    /// Navigate to the first page
    pub fn first(&mut self) -> bool {
        self.on_page_index_change(0)
    }

    /// Navigate to the last page
    pub fn last(&mut self) -> bool {
        match self.window.pages_count() {
            0 => false,
            n => self.on_page_index_change(n - 1),
        }
    }

    /// Navigate to the page shown in `slot` of the paging control
    pub fn on_slot_click(&mut self, slot: usize) -> bool {
        match self.window().page_at(slot) {
            Some(page_index) => self.on_page_index_change(page_index),
            None => false,
        }
    }

    /// Sort by `field_name`, as on a column header click
    ///
    /// Sorting by the current field toggles the direction; a new field
    /// starts ascending. Reloads the current page.
    pub fn sort_by(&mut self, field_name: &str) {
        let order_by = match self.order_by.take() {
            Some(order_by) if order_by.field_name == field_name => OrderBy {
                direction: order_by.direction.toggle(),
                ..order_by
            },
            _ => OrderBy::asc(field_name),
        };
        self.order_by = Some(order_by);
        self.reload();
    }

    /// Set the ordering used by subsequent requests
    ///
    /// Does not reload.
    #[inline]
    pub fn set_order_by(&mut self, order_by: Option<OrderBy>) {
        self.order_by = order_by;
    }

    /// Clear the filter, page index and counts
    ///
    /// This does not load. Bound values and the selection are untouched and
    /// any outstanding request is not cancelled.
    pub fn reset(&mut self) {
        log::debug!("PagingController::reset (state: {:?})", self.state);
        self.filter.clear();
        self.window.reset();
    }

    /// Apply delivered responses
    ///
    /// Returns the number of responses applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Some(delivery) = self.inbox.try_pop() {
            applied += usize::from(self.accept(delivery));
        }
        applied
    }

    /// Wait up to `timeout` for a response, then apply delivered responses
    ///
    /// Returns the number of responses applied.
    pub fn wait(&mut self, timeout: Duration) -> usize {
        match self.inbox.pop_timeout(timeout) {
            Some(delivery) => usize::from(self.accept(delivery)) + self.poll(),
            None => 0,
        }
    }

    /// Append a value and render it
    ///
    /// Fails with [`Error::InvalidArgument`] if the value has no id.
    pub fn add(&mut self, value: V) -> Result<(), Error> {
        self.binding.add(value)?;
        let Some(value) = self.binding.values().last() else {
            return Ok(());
        };
        let key = value.key();
        let element = self.view.add_item(value);
        if let (Some(key), Some(element)) = (key, element) {
            self.binding.bind_element(key, element);
        }
        Ok(())
    }

    /// Append and render each of `values`
    ///
    /// Fails with [`Error::InvalidArgument`] if any value has no id, in
    /// which case nothing is added.
    pub fn add_all(&mut self, values: impl IntoIterator<Item = V>) -> Result<(), Error> {
        let values: Vec<V> = values.into_iter().collect();
        if values.iter().any(|v| v.key().is_none()) {
            return Err(Error::invalid("add_all: value id is missing"));
        }
        for value in values {
            self.add(value)?;
        }
        Ok(())
    }

    /// Replace the bound value with the same id and redraw it
    ///
    /// The value is deselected. Returns `Ok(false)` if no value with this id
    /// is bound.
    pub fn update(&mut self, value: V) -> Result<bool, Error> {
        let Some(key) = value.key() else {
            return Err(Error::invalid("update: value id is missing"));
        };
        if !self.binding.update(value)? {
            return Ok(false);
        }
        if let (Some(element), Some(value)) = (self.binding.element_for(&key), self.binding.get(&key))
        {
            self.view.update_item(element, value);
        }
        if self.selection.is_selected(&key) {
            self.selection.deselect(key);
        }
        Ok(true)
    }

    /// Remove the bound value with `key` and its element
    ///
    /// The key is deselected.
    pub fn remove(&mut self, key: &V::Key) -> Option<V> {
        let element = self.binding.element_for(key).cloned();
        let removed = self.binding.remove(key)?;
        if let Some(element) = element {
            self.view.remove_item(&element);
        }
        if self.selection.is_selected(key) {
            self.selection.deselect(key.clone());
        }
        Some(removed)
    }

    /// Remove the bound values with each of `keys` and their elements
    ///
    /// Absent keys are skipped; removed keys are deselected.
    pub fn remove_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a V::Key>) -> Vec<V>
    where
        V::Key: 'a,
    {
        keys.into_iter().filter_map(|key| self.remove(key)).collect()
    }

    /// Remove every selected value bound on this page
    pub fn remove_selected(&mut self) -> Vec<V> {
        let keys: Vec<V::Key> = self.selection.iter().cloned().collect();
        self.remove_all(&keys)
    }

    /// Select or deselect `key`, as with a row checkbox
    ///
    /// Selecting a bound value which is not [enabled](Value::is_enabled) is
    /// refused. Keys not bound on this page are passed to the
    /// [`SelectionSet`] unchecked. Returns `true` if the selection changed.
    pub fn select(&mut self, key: V::Key, selected: bool) -> bool {
        if selected && self.binding.is_disabled(&key) {
            log::debug!("PagingController::select: {key:?} is disabled");
            return false;
        }
        self.selection.select(key, selected)
    }

    /// Toggle selection of `key`; see [`Self::select`]
    pub fn toggle(&mut self, key: V::Key) -> bool {
        let selected = self.selection.is_selected(&key);
        self.select(key, !selected)
    }

    /// Select every enabled value on this page, as with a "master" checkbox
    pub fn select_page(&mut self) -> bool {
        let keys: Vec<V::Key> = self.binding.enabled_keys().collect();
        self.selection.select_all(keys)
    }

    /// State of a "master" checkbox over the enabled values of this page
    pub fn master_state(&self) -> MasterState {
        let keys: Vec<V::Key> = self.binding.enabled_keys().collect();
        self.selection.master_state(keys.iter())
    }

    fn goto(&mut self, page_index: usize) -> Result<(), Error> {
        self.window.set_page_index(page_index)?;
        self.issue();
        Ok(())
    }

    // Used where page_index is known to be valid
    fn reissue(&mut self, page_index: usize) {
        if let Err(err) = self.goto(page_index) {
            warn_about_error("PagingController: failed to issue request", &err);
        }
    }

    fn issue(&mut self) {
        self.seq += 1;
        let seq = self.seq;
        let request = PageRequest::new(self.window.page_index(), self.window.page_size())
            .with_filter(self.filter.clone())
            .with_order_by(self.order_by.clone())
            .with_seq(seq);
        log::trace!(
            "PagingController::issue: request {seq} for page {} (size {})",
            request.page_index(),
            request.page_size()
        );
        self.state = LoadState::Loading { seq };
        let responder = self.inbox.responder(seq);
        self.loader.load(request, responder);
        self.poll();
    }

    fn check(&self, seq: u64) -> Result<(), Error> {
        if self.config.response_policy == ResponsePolicy::LatestRequest && seq < self.seq {
            return Err(Error::StaleResponse {
                seq,
                latest: self.seq,
            });
        }
        Ok(())
    }

    fn accept(&mut self, delivery: Delivery<V>) -> bool {
        if let Err(err) = self.check(delivery.seq) {
            debug_about_error("PagingController: dropping response", &err);
            return false;
        }
        self.apply(delivery.response);
        if delivery.seq == self.seq {
            self.state = LoadState::Idle;
        }
        true
    }

    fn apply(&mut self, response: PageResponse<V>) {
        let PageResponse { total, items } = response;
        if items.len() > self.window.page_size() {
            log::warn!(
                "PagingController: response has {} items; expected at most {}",
                items.len(),
                self.window.page_size()
            );
        }

        if !self.config.keep_selection && !self.selection.is_empty() {
            self.selection.deselect_all();
        }

        self.binding.set_items(items);
        self.window.set_items_count(total);

        let elements = self.view.render(self.binding.values());
        self.binding.bind_elements(elements);
        self.view.set_items_count(total);
        self.view.show(self.window.is_visible(self.config.auto_hide));
        let window = self.window.window(self.config.slot_count);
        self.view.update_paging(&window, &self.window);

        self.on_change.notify(&total);
    }
}

impl<V: Value, L, W: View<V>> PagingController<V, L, W> {
    /// Bound values of the current page
    #[inline]
    pub fn binding(&self) -> &CollectionBinding<V, W::Element> {
        &self.binding
    }

    #[inline]
    pub fn selection(&self) -> &SelectionSet<V::Key> {
        &self.selection
    }

    #[inline]
    pub fn selection_mut(&mut self) -> &mut SelectionSet<V::Key> {
        &mut self.selection
    }

    #[inline]
    pub fn window_state(&self) -> &PageWindowState {
        &self.window
    }

    /// Visible page index slots
    #[inline]
    pub fn window(&self) -> PageWindow {
        self.window.window(self.config.slot_count)
    }

    /// Items range of the current page
    #[inline]
    pub fn span(&self) -> PageSpan {
        self.window.span()
    }

    #[inline]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[inline]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    #[inline]
    pub fn order_by(&self) -> Option<&OrderBy> {
        self.order_by.as_ref()
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.window.page_size()
    }

    #[inline]
    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    #[inline]
    pub fn view(&self) -> &W {
        &self.view
    }

    #[inline]
    pub fn view_mut(&mut self) -> &mut W {
        &mut self.view
    }

    #[inline]
    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Direction, ElementHandle, LocalLoader, NullView, Responder};
    use pagina_core::{Param, Record, RecordId};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Pending = Rc<RefCell<Vec<(PageRequest, Responder<Record>)>>>;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn records(n: i64) -> Vec<Record> {
        (1..=n).map(|i| Record::new(i, format!("item {i}"))).collect()
    }

    fn config(page_size: usize) -> PagingConfig {
        PagingConfig::default()
            .with_page_size(page_size)
            .with_selection_mode(SelectionMode::Multiple)
    }

    fn local(
        n: i64,
        config: PagingConfig,
    ) -> PagingController<Record, LocalLoader<Record>, NullView> {
        PagingController::new(config, LocalLoader::with_fields(records(n)), NullView::new()).unwrap()
    }

    fn deferred(
        config: PagingConfig,
    ) -> (
        Pending,
        PagingController<Record, impl Loader<Record>, NullView>,
    ) {
        let pending = Pending::default();
        let queue = pending.clone();
        let loader = move |request: PageRequest, responder: Responder<Record>| {
            queue.borrow_mut().push((request, responder));
        };
        let controller = PagingController::new(config, loader, NullView::new()).unwrap();
        (pending, controller)
    }

    fn answer(request: &PageRequest, total: i64) -> PageResponse<Record> {
        let start = request.offset() as i64 + 1;
        let end = (start + request.page_size() as i64).min(total + 1);
        PageResponse::new(total as usize, (start..end).map(|i| Record::new(i, "")).collect())
    }

    fn first_key(controller: &PagingController<Record, impl Loader<Record>, NullView>) -> RecordId {
        controller.binding().keys().next().unwrap()
    }

    #[test]
    fn invalid_config() {
        let config = PagingConfig::default().with_page_size(0);
        let result = PagingController::new(config, LocalLoader::<Record>::new(vec![]), NullView::new());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn sync_load() {
        let mut controller = local(8, config(3));
        let totals = Rc::new(RefCell::new(Vec::new()));
        let t = totals.clone();
        controller.on_change(move |total| t.borrow_mut().push(*total));

        controller.load(None);
        assert_eq!(controller.state(), LoadState::Idle);
        assert_eq!(controller.binding().len(), 3);
        assert_eq!(controller.window_state().pages_count(), 3);
        assert_eq!(controller.view().items_count(), 8);
        assert!(controller.view().is_visible());
        assert_eq!(*totals.borrow(), [8]);

        let window = controller.window();
        assert_eq!((window.start_page, window.visible_count, window.active_slot), (0, 3, 0));
        assert!(!window.has_previous());
        assert!(window.has_next());
    }

    #[test]
    fn navigation_guards() {
        let mut controller = local(8, config(3));
        controller.load(None);
        assert!(!controller.on_page_index_change(0));
        assert!(!controller.on_page_index_change(3));
        assert!(!controller.previous());
        assert_eq!(controller.loader_mut().requests().len(), 1);

        assert!(controller.last());
        assert_eq!(controller.window_state().page_index(), 2);
        assert_eq!(controller.binding().len(), 2);
        assert!(!controller.next());
        assert_eq!(controller.span(), PageSpan { start: 7, end: 8, total: 8 });

        assert!(controller.on_slot_click(1));
        assert_eq!(controller.window_state().page_index(), 1);
        assert!(!controller.on_slot_click(4));
        assert!(controller.first());

        let err = controller.set_page_index(5).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(controller.window_state().page_index(), 0);
        let requests = controller.loader_mut().requests().len();
        controller.set_page_index(0).unwrap();
        assert_eq!(controller.loader_mut().requests().len(), requests + 1);
    }

    #[test]
    fn filter_is_reused() {
        let mut controller = local(20, config(5));
        let mut filter = Filter::new();
        filter.insert("name".into(), Param::from("1"));
        controller.load(Some(filter.clone()));
        // item 1, items 10..=19
        assert_eq!(controller.window_state().items_count(), 11);
        controller.next();
        let last = controller.loader_mut().requests().last().unwrap().clone();
        assert_eq!(last.filter(), &filter);
        assert_eq!(last.page_index(), 1);

        controller.load(None);
        assert!(controller.filter().is_empty());
        assert_eq!(controller.window_state().items_count(), 20);
    }

    #[test]
    fn sort_toggles() {
        let mut controller = local(8, config(3));
        controller.load(None);
        controller.sort_by("id");
        assert_eq!(controller.order_by(), Some(&OrderBy::asc("id")));
        assert_eq!(first_key(&controller), RecordId::Int(1));

        controller.sort_by("id");
        assert_eq!(controller.order_by().unwrap().direction, Direction::Desc);
        assert_eq!(first_key(&controller), RecordId::Int(8));

        controller.sort_by("name");
        assert_eq!(controller.order_by(), Some(&OrderBy::asc("name")));
        let seq: Vec<u64> = controller.loader_mut().requests().iter().map(|r| r.seq()).collect();
        assert_eq!(seq, [1, 2, 3, 4]);
    }

    #[test]
    fn page_size_takes_effect_later() {
        let mut controller = local(8, config(3));
        controller.load(None);
        assert!(controller.set_page_size(0).is_err());
        controller.set_page_size(4).unwrap();
        assert_eq!(controller.binding().len(), 3);
        assert_eq!(controller.window_state().pages_count(), 2);
        controller.reload();
        assert_eq!(controller.binding().len(), 4);
    }

    #[test]
    fn reset_keeps_binding() {
        let mut controller = local(8, config(3));
        let mut filter = Filter::new();
        filter.insert("name".into(), Param::from("item"));
        controller.load(Some(filter));
        controller.next();
        controller.reset();
        assert!(controller.filter().is_empty());
        assert_eq!(controller.window_state().page_index(), 0);
        assert_eq!(controller.window_state().items_count(), 0);
        assert_eq!(controller.window_state().pages_count(), 0);
        assert_eq!(controller.binding().len(), 3);
        assert_eq!(controller.loader_mut().requests().len(), 2);
    }

    #[test]
    fn stale_response_dropped() {
        init_log();
        let (pending, mut controller) = deferred(config(3));
        controller.load(None);
        assert_eq!(controller.state(), LoadState::Loading { seq: 1 });
        controller.on_page_index_change(1);
        // pages_count is still zero: ignored
        assert_eq!(pending.borrow().len(), 1);
        controller.set_page_index(0).unwrap();
        assert_eq!(controller.state(), LoadState::Loading { seq: 2 });

        let mut queue = pending.borrow_mut().drain(..).collect::<Vec<_>>();
        let (b_request, b) = queue.pop().unwrap();
        let (a_request, a) = queue.pop().unwrap();
        b.respond(answer(&b_request, 8));
        a.respond(PageResponse::new(99, vec![Record::new(100, "stale")]));
        assert_eq!(controller.poll(), 1);
        assert_eq!(a_request.seq(), 1);
        assert_eq!(controller.state(), LoadState::Idle);
        assert_eq!(controller.window_state().items_count(), 8);
        assert_eq!(first_key(&controller), RecordId::Int(1));
    }

    #[test]
    fn last_arrival_wins() {
        init_log();
        let config = config(3).with_response_policy(ResponsePolicy::LastArrival);
        let (pending, mut controller) = deferred(config);
        controller.load(None);
        controller.load(None);
        let mut queue = pending.borrow_mut().drain(..).collect::<Vec<_>>();
        let (_, b) = queue.pop().unwrap();
        let (_, a) = queue.pop().unwrap();
        b.respond(PageResponse::new(8, vec![Record::new(2, "b")]));
        a.respond(PageResponse::new(8, vec![Record::new(1, "a")]));
        assert_eq!(controller.poll(), 2);
        assert_eq!(controller.state(), LoadState::Idle);
        assert_eq!(first_key(&controller), RecordId::Int(1));
    }

    #[test]
    fn dropped_responder_keeps_loading() {
        init_log();
        let loader = |_: PageRequest, _: Responder<Record>| {};
        let mut controller = PagingController::new(config(3), loader, NullView::new()).unwrap();
        controller.load(None);
        assert_eq!(controller.wait(Duration::from_millis(1)), 0);
        assert!(controller.state().is_loading());
    }

    #[test]
    fn selection_cleared_on_apply() {
        let mut controller = local(8, config(3));
        controller.load(None);
        assert!(controller.select_page());
        assert_eq!(controller.master_state(), MasterState::Checked);
        controller.next();
        assert!(controller.selection().is_empty());

        let mut config = config(3);
        config.keep_selection = true;
        let mut controller = local(8, config);
        controller.load(None);
        controller.selection_mut().select(RecordId::Int(1), true);
        controller.next();
        assert!(controller.selection().is_selected(&RecordId::Int(1)));
        assert_eq!(controller.master_state(), MasterState::Unchecked);
    }

    #[test]
    fn item_operations() {
        let mut controller = local(8, config(3));
        controller.load(None);
        let one = RecordId::Int(1);
        assert_eq!(controller.binding().element_for(&one), Some(&ElementHandle(0)));

        assert!(controller.add(Record::default()).is_err());
        controller.add(Record::new(50, "fifty")).unwrap();
        assert_eq!(
            controller.binding().element_for(&RecordId::Int(50)),
            Some(&ElementHandle(3))
        );

        controller.selection_mut().select(one.clone(), true);
        assert!(controller.update(Record::new(1, "one")).unwrap());
        assert!(!controller.selection().is_selected(&one));
        assert!(!controller.update(Record::new(99, "absent")).unwrap());

        controller.selection_mut().select_all([RecordId::Int(2), RecordId::Int(50)]);
        let removed = controller.remove_selected();
        assert_eq!(removed.len(), 2);
        assert!(controller.selection().is_empty());
        assert_eq!(
            controller.binding().keys().collect::<Vec<_>>(),
            [one.clone(), RecordId::Int(3)]
        );
        assert_eq!(controller.remove(&one).unwrap().name, "one");
        assert!(controller.remove(&one).is_none());
    }

    #[test]
    fn add_and_remove_all() {
        let mut controller = local(8, config(3));
        controller.load(None);
        assert!(controller
            .add_all(vec![Record::new(20, "twenty"), Record::default()])
            .is_err());
        assert_eq!(controller.binding().len(), 3);

        controller
            .add_all(vec![Record::new(20, "twenty"), Record::new(21, "twenty one")])
            .unwrap();
        assert_eq!(
            controller.binding().element_for(&RecordId::Int(21)),
            Some(&ElementHandle(4))
        );

        controller.select(RecordId::Int(20), true);
        let removed = controller.remove_all(&[RecordId::Int(20), RecordId::Int(2), RecordId::Int(99)]);
        assert_eq!(removed.len(), 2);
        assert!(controller.selection().is_empty());
        assert!(controller.binding().element_for(&RecordId::Int(20)).is_none());
        assert_eq!(
            controller.binding().keys().collect::<Vec<_>>(),
            [RecordId::Int(1), RecordId::Int(3), RecordId::Int(21)]
        );
    }

    #[test]
    fn disabled_values_not_selectable() {
        init_log();
        let mut items = records(6);
        items[1].enabled = false;
        let loader = LocalLoader::with_fields(items);
        let mut controller = PagingController::new(config(3), loader, NullView::new()).unwrap();
        controller.load(None);
        let disabled = RecordId::Int(2);

        assert!(controller.select_page());
        assert!(!controller.selection().is_selected(&disabled));
        assert_eq!(controller.selection().len(), 2);
        assert_eq!(controller.master_state(), MasterState::Checked);

        assert!(!controller.select(disabled.clone(), true));
        assert!(!controller.toggle(disabled.clone()));
        assert!(!controller.selection().is_selected(&disabled));

        assert!(controller.toggle(RecordId::Int(1)));
        assert_eq!(controller.master_state(), MasterState::Mixed);
        // keys of other pages are not checked
        assert!(controller.select(RecordId::Int(5), true));
    }
}
