// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Selection of bound items

use crate::{MasterState, SelectionMode, SelectionMsg};
use linear_map::set::LinearSet;
use pagina_core::{DataKey, Listeners};

/// The set of selected item keys
///
/// Keys are not validated against any collection: a selection may survive a
/// page change. Call [`Self::deselect_all`] on data source swap if this is
/// not wanted.
///
/// # Notifications
///
/// Listeners registered with [`Self::on_change`] receive the full set of keys
/// once after each mutating call, so that aggregate state (see
/// [`Self::master_state`]) can be recomputed in one step. Calls which the
/// current [`SelectionMode`] disables are no-ops and do not notify.
///
/// Listeners registered with [`Self::on_item`] receive a [`SelectionMsg`] for
/// each key selected or explicitly deselected.
#[derive(Debug)]
pub struct SelectionSet<K: DataKey> {
    mode: SelectionMode,
    keys: LinearSet<K>,
    on_change: Listeners<LinearSet<K>>,
    on_item: Listeners<SelectionMsg<K>>,
}

impl<K: DataKey> Default for SelectionSet<K> {
    fn default() -> Self {
        SelectionSet::new(SelectionMode::default())
    }
}

impl<K: DataKey> SelectionSet<K> {
    /// Construct an empty selection
    pub fn new(mode: SelectionMode) -> Self {
        SelectionSet {
            mode,
            keys: LinearSet::new(),
            on_change: Listeners::new(),
            on_item: Listeners::new(),
        }
    }

    /// Register a set-change listener
    pub fn on_change(&mut self, handler: impl FnMut(&LinearSet<K>) + 'static) {
        self.on_change.push(handler);
    }

    /// Register a per-item listener
    pub fn on_item(&mut self, handler: impl FnMut(&SelectionMsg<K>) + 'static) {
        self.on_item.push(handler);
    }

    /// Get the current selection mode
    #[inline]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Set the selection mode
    ///
    /// Switching to [`SelectionMode::None`] clears the selection; switching
    /// to [`SelectionMode::Single`] keeps only the first selected key.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        match mode {
            SelectionMode::None => self.keys.clear(),
            SelectionMode::Single if self.keys.len() > 1 => {
                if let Some(first) = self.keys.iter().next().cloned() {
                    self.keys.retain(|key| *key == first);
                }
            }
            _ => (),
        }
        self.notify();
    }

    /// Select or deselect `key`
    ///
    /// With [`SelectionMode::Single`], selecting a key first clears any other
    /// selected key (without a [`SelectionMsg::Deselect`]). With
    /// [`SelectionMode::None`] this does nothing.
    ///
    /// Returns `true` if the set changed.
    pub fn select(&mut self, key: K, selected: bool) -> bool {
        let changed = match (self.mode, selected) {
            (SelectionMode::None, _) => return false,
            (SelectionMode::Single, true) => {
                if self.keys.contains(&key) {
                    false
                } else {
                    self.keys.clear();
                    self.insert(key)
                }
            }
            (SelectionMode::Multiple, true) => self.insert(key),
            (_, false) => self.remove(key),
        };
        self.notify();
        changed
    }

    /// Deselect `key`
    #[inline]
    pub fn deselect(&mut self, key: K) -> bool {
        self.select(key, false)
    }

    /// Toggle selection of `key`
    pub fn toggle(&mut self, key: K) -> bool {
        let selected = self.is_selected(&key);
        self.select(key, !selected)
    }

    /// Select every key of `keys`
    ///
    /// This is the action of a checked "master" checkbox. Only supported
    /// with [`SelectionMode::Multiple`]. Returns `true` if the set changed.
    pub fn select_all(&mut self, keys: impl IntoIterator<Item = K>) -> bool {
        if self.mode != SelectionMode::Multiple {
            return false;
        }
        let mut changed = false;
        for key in keys {
            changed |= self.insert(key);
        }
        self.notify();
        changed
    }

    /// Clear the selection
    ///
    /// Always notifies, once, even when the set was already empty.
    pub fn deselect_all(&mut self) {
        let keys: Vec<K> = self.keys.iter().cloned().collect();
        self.keys.clear();
        for key in keys {
            self.on_item.notify(&SelectionMsg::Deselect(key));
        }
        self.notify();
    }

    /// Retain only keys matching `f`
    ///
    /// Used to deselect keys no longer available.
    pub fn retain(&mut self, mut f: impl FnMut(&K) -> bool) {
        self.keys.retain(|key| f(key));
        self.notify();
    }

    /// Check whether `key` is selected
    #[inline]
    pub fn is_selected(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Read the set of selected keys
    ///
    /// With mode [`SelectionMode::Single`] this contains zero or one key.
    #[inline]
    pub fn values(&self) -> &LinearSet<K> {
        &self.keys
    }

    /// Iterate over selected keys
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.keys.iter()
    }

    /// The first selected key
    #[inline]
    pub fn first(&self) -> Option<&K> {
        self.keys.iter().next()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Aggregate state over the currently rendered `keys`
    pub fn master_state<'a>(&self, keys: impl IntoIterator<Item = &'a K>) -> MasterState {
        let (mut count, mut selected) = (0usize, 0usize);
        for key in keys {
            count += 1;
            if self.keys.contains(key) {
                selected += 1;
            }
        }
        if selected == 0 {
            MasterState::Unchecked
        } else if selected == count {
            MasterState::Checked
        } else {
            MasterState::Mixed
        }
    }

    fn insert(&mut self, key: K) -> bool {
        let r = self.keys.insert(key.clone());
        if r {
            self.on_item.notify(&SelectionMsg::Select(key));
        }
        r
    }

    fn remove(&mut self, key: K) -> bool {
        let r = self.keys.remove(&key);
        if r {
            self.on_item.notify(&SelectionMsg::Deselect(key));
        }
        r
    }

    fn notify(&mut self) {
        self.on_change.notify(&self.keys);
    }
}
