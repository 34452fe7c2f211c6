// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Collection binding

use crate::SelectionSet;
use linear_map::LinearMap;
use pagina_core::{Error, Value};
use std::fmt::Debug;

/// Opaque handle to a rendered element
///
/// The default element type of [`CollectionBinding`]; views may use their
/// own type instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementHandle(pub u64);

impl From<u64> for ElementHandle {
    #[inline]
    fn from(id: u64) -> Self {
        ElementHandle(id)
    }
}

/// The values backing one rendered collection
///
/// Values are kept in insertion order (or the order given to
/// [`Self::set_items`]); the binding never sorts. Values are addressable by
/// key using [`Self::index_of`]. Rendered elements are associated with
/// values through a side table (see [`Self::bind_elements`]) rather than
/// being stored on the view.
///
/// Lookup by key is a linear scan over at most one page of values.
#[derive(Clone, Debug)]
pub struct CollectionBinding<V: Value, E: Eq = ElementHandle> {
    values: Vec<V>,
    elements: LinearMap<E, V::Key>,
}

impl<V: Value, E: Eq> Default for CollectionBinding<V, E> {
    fn default() -> Self {
        CollectionBinding {
            values: Vec::new(),
            elements: LinearMap::new(),
        }
    }
}

fn require_key<V: Value>(value: &V, op: &str) -> Result<V::Key, Error> {
    value
        .key()
        .ok_or_else(|| Error::invalid(format!("{op}: value id is missing")))
}

impl<V: Value, E: Clone + Debug + Eq> CollectionBinding<V, E> {
    /// Construct an empty binding
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all values
    ///
    /// Drops all element associations.
    pub fn set_items(&mut self, items: Vec<V>) {
        self.values = items;
        self.elements.clear();
    }

    /// Remove all values and element associations
    pub fn clear(&mut self) {
        self.set_items(Vec::new());
    }

    /// Append a value
    ///
    /// Fails with [`Error::InvalidArgument`] if the value has no id.
    pub fn add(&mut self, value: V) -> Result<(), Error> {
        require_key(&value, "add")?;
        self.values.push(value);
        Ok(())
    }

    /// Append each of `values`
    ///
    /// Fails with [`Error::InvalidArgument`] if any value has no id, in
    /// which case nothing is appended.
    pub fn add_all(&mut self, values: impl IntoIterator<Item = V>) -> Result<(), Error> {
        let values: Vec<V> = values.into_iter().collect();
        for value in &values {
            require_key(value, "add_all")?;
        }
        self.values.extend(values);
        Ok(())
    }

    /// Replace the value with the same key, in place
    ///
    /// Returns `Ok(false)` if no value has this key; this is not an error
    /// since the caller cannot always know the current page contents.
    /// Fails with [`Error::InvalidArgument`] if the value has no id.
    pub fn update(&mut self, value: V) -> Result<bool, Error> {
        let key = require_key(&value, "update")?;
        match self.index_of(&key) {
            Some(index) => {
                self.values[index] = value;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the value with `key`
    ///
    /// Does nothing if absent. Any element associated with the value is
    /// dropped from the side table.
    pub fn remove(&mut self, key: &V::Key) -> Option<V> {
        let index = self.index_of(key)?;
        let stale: Vec<E> = self
            .elements
            .iter()
            .filter(|(_, k)| *k == key)
            .map(|(e, _)| e.clone())
            .collect();
        for element in stale {
            self.elements.remove(&element);
        }
        Some(self.values.remove(index))
    }

    /// Remove the value with the same key as `value`
    ///
    /// Fails with [`Error::InvalidArgument`] if the value has no id.
    pub fn remove_value(&mut self, value: &V) -> Result<Option<V>, Error> {
        let key = require_key(value, "remove")?;
        Ok(self.remove(&key))
    }

    /// Remove the values with each of `keys`
    ///
    /// Absent keys are skipped. Returns the removed values in the order of
    /// `keys`.
    pub fn remove_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a V::Key>) -> Vec<V>
    where
        V::Key: 'a,
    {
        keys.into_iter().filter_map(|key| self.remove(key)).collect()
    }

    /// Remove every value matching `pred`
    ///
    /// Returns the removed values in binding order. Elements associated
    /// with removed values are dropped from the side table.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&V) -> bool) -> Vec<V> {
        let (removed, kept): (Vec<V>, Vec<V>) =
            std::mem::take(&mut self.values).into_iter().partition(|v| pred(v));
        self.values = kept;
        if !removed.is_empty() {
            let stale: Vec<E> = self
                .elements
                .iter()
                .filter(|(_, k)| removed.iter().any(|v| v.key().as_ref() == Some(*k)))
                .map(|(e, _)| e.clone())
                .collect();
            for element in stale {
                self.elements.remove(&element);
            }
        }
        removed
    }

    /// Remove every selected value
    ///
    /// Returns the removed values in binding order. Does not modify
    /// `selection`.
    pub fn remove_selected(&mut self, selection: &SelectionSet<V::Key>) -> Vec<V> {
        self.remove_where(|v| v.key().is_some_and(|key| selection.is_selected(&key)))
    }

    /// Find the index of the value with `key`
    pub fn index_of(&self, key: &V::Key) -> Option<usize> {
        self.values
            .iter()
            .position(|v| v.key().as_ref() == Some(key))
    }

    /// True if a value with `key` is bound
    #[inline]
    pub fn contains(&self, key: &V::Key) -> bool {
        self.index_of(key).is_some()
    }

    /// Get the value with `key`
    pub fn get(&self, key: &V::Key) -> Option<&V> {
        self.index_of(key).map(|index| &self.values[index])
    }

    /// Get a value by position
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    /// All values, in order
    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Iterate over values
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Iterate over keys of values which have one
    pub fn keys(&self) -> impl Iterator<Item = V::Key> + '_ {
        self.values.iter().filter_map(Value::key)
    }

    /// Iterate over keys of values which may be selected
    ///
    /// See [`Value::is_enabled`].
    pub fn enabled_keys(&self) -> impl Iterator<Item = V::Key> + '_ {
        self.values
            .iter()
            .filter(|v| v.is_enabled())
            .filter_map(Value::key)
    }

    /// True if the value with `key` is bound and may not be selected
    pub fn is_disabled(&self, key: &V::Key) -> bool {
        self.get(key).is_some_and(|v| !v.is_enabled())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Associate rendered elements with values, by position
    ///
    /// Replaces all previous associations. Element `i` is associated with
    /// value `i`; surplus elements and values without a key are ignored.
    pub fn bind_elements(&mut self, elements: impl IntoIterator<Item = E>) {
        self.elements.clear();
        for (element, value) in elements.into_iter().zip(self.values.iter()) {
            if let Some(key) = value.key() {
                self.elements.insert(element, key);
            }
        }
    }

    /// Associate one element with the value of `key`
    ///
    /// Returns `false` (without binding) if no value has this key.
    pub fn bind_element(&mut self, key: V::Key, element: E) -> bool {
        if !self.contains(&key) {
            return false;
        }
        self.elements.insert(element, key);
        true
    }

    /// Get the value associated with a rendered element
    pub fn value_for_element(&self, element: &E) -> Option<&V> {
        self.elements.get(element).and_then(|key| self.get(key))
    }

    /// Get the rendered element for `key`
    pub fn element_for(&self, key: &V::Key) -> Option<&E> {
        self.elements
            .iter()
            .find(|(_, k)| *k == key)
            .map(|(e, _)| e)
    }
}
