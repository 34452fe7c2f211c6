// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Keys and values

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Bounds on the key type
///
/// A key identifies one [`Value`] within a bound collection and within a
/// selection. It should be small and cheap to clone, and without internal
/// mutability.
pub trait DataKey: Clone + fmt::Debug + PartialEq + Eq + 'static {}

macro_rules! impl_key {
    ($($t:ty),*) => {
        $(impl DataKey for $t {})*
    };
}
impl_key!(usize, u32, u64, i32, i64, String, SmolStr);

/// A record identifier: either an integer or a string
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RecordId {
    Int(i64),
    Str(SmolStr),
}

impl DataKey for RecordId {}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{id}"),
            RecordId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    #[inline]
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<i32> for RecordId {
    #[inline]
    fn from(id: i32) -> Self {
        RecordId::Int(id.into())
    }
}

impl From<&str> for RecordId {
    #[inline]
    fn from(id: &str) -> Self {
        RecordId::Str(id.into())
    }
}

impl From<String> for RecordId {
    #[inline]
    fn from(id: String) -> Self {
        RecordId::Str(id.into())
    }
}

/// A value bound into a collection
///
/// Every value is expected to carry an identifier. [`Self::key`] returns
/// `None` where the identifier is missing; operations requiring an identifier
/// then fail with [`Error::InvalidArgument`](crate::Error::InvalidArgument).
///
/// Bindings own their values. To share a record between application state
/// and a binding, bind an `Rc<T>` or `Arc<T>`.
pub trait Value {
    /// Identifier type
    type Key: DataKey;

    /// Get the identifier, if any
    fn key(&self) -> Option<Self::Key>;

    /// Whether this value may be selected
    ///
    /// The default implementation returns `true`.
    fn is_enabled(&self) -> bool {
        true
    }
}

impl<T: Value + ?Sized> Value for Rc<T> {
    type Key = T::Key;

    #[inline]
    fn key(&self) -> Option<Self::Key> {
        (**self).key()
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

impl<T: Value + ?Sized> Value for Arc<T> {
    type Key = T::Key;

    #[inline]
    fn key(&self) -> Option<Self::Key> {
        (**self).key()
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

// Keyed pairs, convenient for fixtures
impl<K: DataKey, T> Value for (K, T) {
    type Key = K;

    #[inline]
    fn key(&self) -> Option<K> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn record_id_display() {
        assert_eq!(RecordId::from(42).to_string(), "42");
        assert_eq!(RecordId::from("ab-1").to_string(), "ab-1");
        assert_ne!(RecordId::from(1), RecordId::from("1"));
    }

    #[test]
    fn shared_values() {
        let v = Rc::new((7u32, "seven"));
        assert_eq!(v.key(), Some(7));
        let v = Arc::new((RecordId::from("x"), ()));
        assert_eq!(v.key(), Some(RecordId::from("x")));
        assert!(v.is_enabled());
    }
}
