//! Attribute system for flexible object and relationship metadata.
//!
//! Provides type-safe attribute storage with a builder pattern.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Strongly-typed attribute value for object/relationship metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// String value (names, formulas, units)
    String(String),
    /// Integer value (counts, indexes)
    Int(i64),
    /// Floating point value (initial values, rates)
    Float(f64),
    /// Boolean flag (is_exported, is_derived)
    Bool(bool),
}

impl fmt::Display for AttributeValue {
    /// Canonical display rendering: strings verbatim, numbers in decimal form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => write!(f, "{s}"),
            AttributeValue::Int(i) => write!(f, "{i}"),
            AttributeValue::Float(x) => write!(f, "{x}"),
            AttributeValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Int(value as i64)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

/// Flexible key-value metadata store for objects and relationships.
///
/// Provides builder pattern and type-safe getters for attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeMap {
    data: HashMap<String, AttributeValue>,
}

impl AttributeMap {
    /// Create a new empty attribute map.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Builder pattern: add an attribute and return self.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Insert an attribute value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.data.insert(key.into(), value.into());
    }

    /// Get an attribute value by key.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.data.get(key)
    }

    /// Remove an attribute by key.
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.data.remove(key)
    }

    /// Check if an attribute exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the attribute map is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over all attributes.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.data.iter()
    }

    /// Type-safe getter for string attributes.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.data.get(key) {
            Some(AttributeValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Type-safe getter for integer attributes.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.data.get(key) {
            Some(AttributeValue::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// Type-safe getter for float attributes.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.data.get(key) {
            Some(AttributeValue::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// Type-safe getter for boolean attributes.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.data.get(key) {
            Some(AttributeValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}

impl FromIterator<(String, AttributeValue)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (String, AttributeValue)>>(iter: T) -> Self {
        Self {
            data: HashMap::from_iter(iter),
        }
    }
}
