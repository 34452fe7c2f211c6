// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Views
//!
//! The [`View`] trait is the binding between a [`PagingController`] and
//! whatever presents its items. The controller owns all state; the view
//! only renders what it is given and returns handles to rendered elements,
//! which the controller associates with item keys.
//!
//! [`PagingController`]: crate::PagingController

use crate::{ElementHandle, PageWindow, PageWindowState};
use std::fmt::Debug;

/// Presentation of one page of items
///
/// Only [`View::render`] and [`View::set_items_count`] are required; other
/// methods default to doing nothing.
pub trait View<V> {
    /// Handle to one rendered element
    type Element: Clone + Debug + Eq;

    /// Render a full page, replacing any previous content
    ///
    /// Returns one element per item, in order. Returning fewer elements is
    /// allowed; items without an element are simply not addressable by
    /// element.
    fn render(&mut self, items: &[V]) -> Vec<Self::Element>;

    /// Called with the total number of items after each response
    fn set_items_count(&mut self, total: usize);

    /// Show or hide the paging control
    fn show(&mut self, visible: bool) {
        let _ = visible;
    }

    /// Called to redraw the paging control
    fn update_paging(&mut self, window: &PageWindow, state: &PageWindowState) {
        let _ = (window, state);
    }

    /// Render one appended item
    ///
    /// Default implementation: return `None` (the item is bound but not
    /// addressable by element until the next full render).
    fn add_item(&mut self, item: &V) -> Option<Self::Element> {
        let _ = item;
        None
    }

    /// Redraw one item in place
    fn update_item(&mut self, element: &Self::Element, item: &V) {
        let _ = (element, item);
    }

    /// Remove one rendered element
    fn remove_item(&mut self, element: &Self::Element) {
        let _ = element;
    }
}

impl<V, W: View<V> + ?Sized> View<V> for Box<W> {
    type Element = W::Element;

    #[inline]
    fn render(&mut self, items: &[V]) -> Vec<Self::Element> {
        (**self).render(items)
    }
    #[inline]
    fn set_items_count(&mut self, total: usize) {
        (**self).set_items_count(total)
    }
    #[inline]
    fn show(&mut self, visible: bool) {
        (**self).show(visible)
    }
    #[inline]
    fn update_paging(&mut self, window: &PageWindow, state: &PageWindowState) {
        (**self).update_paging(window, state)
    }
    #[inline]
    fn add_item(&mut self, item: &V) -> Option<Self::Element> {
        (**self).add_item(item)
    }
    #[inline]
    fn update_item(&mut self, element: &Self::Element, item: &V) {
        (**self).update_item(element, item)
    }
    #[inline]
    fn remove_item(&mut self, element: &Self::Element) {
        (**self).remove_item(element)
    }
}

/// A view which renders nothing
///
/// Elements are numbered sequentially; numbers are never reused.
#[derive(Clone, Debug, Default)]
pub struct NullView {
    next: u64,
    visible: bool,
    items_count: usize,
}

impl NullView {
    /// Construct
    #[inline]
    pub fn new() -> Self {
        NullView::default()
    }

    /// Last value passed to [`View::show`]
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last value passed to [`View::set_items_count`]
    #[inline]
    pub fn items_count(&self) -> usize {
        self.items_count
    }

    fn next_handle(&mut self) -> ElementHandle {
        let handle = ElementHandle(self.next);
        self.next += 1;
        handle
    }
}

impl<V> View<V> for NullView {
    type Element = ElementHandle;

    fn render(&mut self, items: &[V]) -> Vec<ElementHandle> {
        items.iter().map(|_| self.next_handle()).collect()
    }

    fn set_items_count(&mut self, total: usize) {
        self.items_count = total;
    }

    fn show(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn add_item(&mut self, _: &V) -> Option<ElementHandle> {
        Some(self.next_handle())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn null_view_handles() {
        let mut view = NullView::new();
        let first = View::<u8>::render(&mut view, &[1, 2, 3]);
        assert_eq!(first, [ElementHandle(0), ElementHandle(1), ElementHandle(2)]);
        let second = View::<u8>::render(&mut view, &[4]);
        assert_eq!(second, [ElementHandle(3)]);
        assert_eq!(view.add_item(&5u8), Some(ElementHandle(4)));

        View::<u8>::set_items_count(&mut view, 12);
        View::<u8>::show(&mut view, true);
        assert_eq!(view.items_count(), 12);
        assert!(view.is_visible());
    }

    #[test]
    fn boxed() {
        let mut view: Box<dyn View<u8, Element = ElementHandle>> = Box::new(NullView::new());
        assert_eq!(view.render(&[0, 0]).len(), 2);
    }
}
