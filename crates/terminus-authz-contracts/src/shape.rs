//! Singular-or-list normalization.
//!
//! The capability document writes a field as a bare object when it has one
//! value and as an array when it has several. Every such field is pushed
//! through [`OneOrMany`] once, and the rest of the code only sees lists.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A field that may hold one value or a list of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// Collapse into the canonical list form.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

impl<'a> OneOrMany<&'a Value> {
    /// Normalize an optional JSON field. Absent and `null` become an empty list.
    pub fn from_field(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => OneOrMany::Many(Vec::new()),
            Some(Value::Array(items)) => OneOrMany::Many(items.iter().collect()),
            Some(other) => OneOrMany::One(other),
        }
    }
}

impl From<Value> for OneOrMany<Value> {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => OneOrMany::Many(Vec::new()),
            Value::Array(items) => OneOrMany::Many(items),
            other => OneOrMany::One(other),
        }
    }
}
