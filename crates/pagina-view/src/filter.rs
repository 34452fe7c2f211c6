// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Filters and ordering over named fields
//!
//! Used by [`LocalLoader`](crate::LocalLoader) to interpret a
//! [`PageRequest`](crate::PageRequest). Remote loaders interpret requests
//! however their back end does.

use crate::{Direction, Filter, OrderBy};
use pagina_core::{Param, Record};
use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Arc;

/// Access to named fields of an item
pub trait Fields {
    /// Get the field `name`, if present
    fn field(&self, name: &str) -> Option<Param>;
}

impl Fields for Record {
    #[inline]
    fn field(&self, name: &str) -> Option<Param> {
        Record::field(self, name)
    }
}

impl<T: Fields + ?Sized> Fields for Rc<T> {
    #[inline]
    fn field(&self, name: &str) -> Option<Param> {
        (**self).field(name)
    }
}

impl<T: Fields + ?Sized> Fields for Arc<T> {
    #[inline]
    fn field(&self, name: &str) -> Option<Param> {
        (**self).field(name)
    }
}

/// Types usable as a filter
pub trait Matcher<T> {
    /// Returns true if the given item matches this filter
    fn matches(&self, item: &T) -> bool;
}

/// A [`Filter`] matches items where every named field matches
///
/// Text parameters match by case-insensitive substring; other parameters
/// match by (numeric) equality. An item without a named field does not
/// match. The empty filter matches everything.
impl<T: Fields> Matcher<T> for Filter {
    fn matches(&self, item: &T) -> bool {
        self.iter().all(|(name, want)| {
            item.field(name)
                .is_some_and(|have| param_matches(want, &have))
        })
    }
}

/// Match one filter parameter against a field value
pub fn param_matches(want: &Param, have: &Param) -> bool {
    match (want, have) {
        (Param::Text(want), Param::Text(have)) => {
            ContainsCaseInsensitive::new(want).matches(have)
        }
        (want, have) => want.compare(have) == Ordering::Equal,
    }
}

/// Filter: target contains self (case-insensitive string match)
///
// Note: the implemented method of caseless matching is not unicode compliant,
// however works in most cases (by converting both the source and the target to
// upper case).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContainsCaseInsensitive(String);

impl ContainsCaseInsensitive {
    /// Construct for the given text
    pub fn new(text: &str) -> Self {
        ContainsCaseInsensitive(text.to_uppercase())
    }

    /// Returns true if `item` contains the filter text
    pub fn matches(&self, item: &str) -> bool {
        item.to_uppercase().contains(&self.0)
    }
}

/// Compare two items by the field named in `order_by`
///
/// Items missing the field sort first (ascending). [`Direction::None`]
/// treats all items as equal, preserving order with a stable sort.
pub fn compare_by<T: Fields>(order_by: &OrderBy, a: &T, b: &T) -> Ordering {
    let ord = match (a.field(&order_by.field_name), b.field(&order_by.field_name)) {
        (Some(a), Some(b)) => a.compare(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    match order_by.direction {
        Direction::None => Ordering::Equal,
        Direction::Asc => ord,
        Direction::Desc => ord.reverse(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fruit() -> Vec<Record> {
        vec![
            Record::new(1, "Apple").with_field("price", 3),
            Record::new(2, "banana").with_field("price", 1),
            Record::new(3, "Cherry").with_field("price", 7),
            Record::new(4, "pineapple"),
        ]
    }

    #[test]
    fn text_filter() {
        let mut filter = Filter::new();
        filter.insert("name".into(), Param::from("APPLE"));
        let names: Vec<_> = fruit()
            .into_iter()
            .filter(|r| filter.matches(r))
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Apple", "pineapple"]);
    }

    #[test]
    fn numeric_filter() {
        let mut filter = Filter::new();
        filter.insert("price".into(), Param::Float(7.0));
        let items = fruit();
        assert!(filter.matches(&items[2]));
        assert!(!filter.matches(&items[0]));
        // missing field
        assert!(!filter.matches(&items[3]));
        assert!(Filter::new().matches(&items[3]));
    }

    #[test]
    fn ordering() {
        let mut items = fruit();
        items.sort_by(|a, b| compare_by(&OrderBy::desc("price"), a, b));
        let ids: Vec<_> = items.iter().map(|r| r.field("id").unwrap()).collect();
        assert_eq!(ids, [Param::Int(3), Param::Int(1), Param::Int(2), Param::Int(4)]);

        let unsorted = OrderBy {
            field_name: "price".into(),
            direction: Direction::None,
        };
        assert_eq!(compare_by(&unsorted, &items[0], &items[1]), Ordering::Equal);
    }
}
