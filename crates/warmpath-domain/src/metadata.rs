//! Metadata module - opaque key-value bags carried on nodes and edges
//!
//! The algorithms never interpret metadata; it is accepted from the caller
//! and passed through to results untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered metadata bag (string keys, tagged-union values)
///
/// A `BTreeMap` keeps iteration (and serialization) order deterministic.
pub type Metadata = BTreeMap<String, MetaValue>;

/// A single metadata value
///
/// Covers the JSON-like shapes callers attach to nodes and edges. The
/// untagged serde representation means plain JSON scalars and objects
/// round-trip without any wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// Boolean flag
    Bool(bool),

    /// Numeric value (integers are widened to f64)
    Number(f64),

    /// Text value
    Text(String),

    /// Nested bag
    Map(BTreeMap<String, MetaValue>),
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Text(s.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        MetaValue::Text(s)
    }
}

impl From<f64> for MetaValue {
    fn from(n: f64) -> Self {
        MetaValue::Number(n)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        MetaValue::Bool(b)
    }
}
