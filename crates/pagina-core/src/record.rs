// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! A generic application record

use crate::{RecordId, Value};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A loosely-typed parameter
///
/// Used for filter values and for the extra display fields of a [`Record`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Param {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Param {
    /// Get as text, if this is [`Param::Text`]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Param::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Compare two parameters
    ///
    /// Integers and floats compare numerically with each other. Other
    /// mixed-kind comparisons order by kind: booleans before numbers before
    /// text.
    pub fn compare(&self, other: &Param) -> Ordering {
        fn rank(p: &Param) -> u8 {
            match p {
                Param::Bool(_) => 0,
                Param::Int(_) | Param::Float(_) => 1,
                Param::Text(_) => 2,
            }
        }

        match (self, other) {
            (Param::Bool(a), Param::Bool(b)) => a.cmp(b),
            (Param::Int(a), Param::Int(b)) => a.cmp(b),
            (Param::Int(a), Param::Float(b)) => (*a as f64).total_cmp(b),
            (Param::Float(a), Param::Int(b)) => a.total_cmp(&(*b as f64)),
            (Param::Float(a), Param::Float(b)) => a.total_cmp(b),
            (Param::Text(a), Param::Text(b)) => a.cmp(b),
            (a, b) => rank(a).cmp(&rank(b)),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Bool(v) => write!(f, "{v}"),
            Param::Int(v) => write!(f, "{v}"),
            Param::Float(v) => write!(f, "{v}"),
            Param::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Param::Bool(v)
    }
}
impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::Int(v)
    }
}
impl From<i32> for Param {
    fn from(v: i32) -> Self {
        Param::Int(v.into())
    }
}
impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::Float(v)
    }
}
impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Text(v.to_string())
    }
}
impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Text(v)
    }
}

/// An application record
///
/// This is a list item with picture, label and description plus arbitrary
/// named fields. Any type implementing [`Value`] may be bound instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Record {
    pub id: Option<RecordId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub picture: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default = "enabled_default"))]
    pub enabled: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: BTreeMap<String, Param>,
}

#[cfg(feature = "serde")]
fn enabled_default() -> bool {
    true
}

impl Default for Record {
    fn default() -> Self {
        Record {
            id: None,
            name: String::new(),
            picture: None,
            description: None,
            enabled: true,
            fields: BTreeMap::new(),
        }
    }
}

impl Record {
    /// Construct with an id and a name
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Record {
            id: Some(id.into()),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set a field (inline)
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Param>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set the description (inline)
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Look up a field by name
    ///
    /// The built-in fields `id` and `name` are also resolved here; values of
    /// `fields` take precedence.
    pub fn field(&self, name: &str) -> Option<Param> {
        if let Some(value) = self.fields.get(name) {
            return Some(value.clone());
        }
        match name {
            "id" => self.id.as_ref().map(|id| match id {
                RecordId::Int(i) => Param::Int(*i),
                RecordId::Str(s) => Param::Text(s.to_string()),
            }),
            "name" => Some(Param::Text(self.name.clone())),
            "description" => self.description.clone().map(Param::Text),
            _ => None,
        }
    }
}

impl Value for Record {
    type Key = RecordId;

    #[inline]
    fn key(&self) -> Option<RecordId> {
        self.id.clone()
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
