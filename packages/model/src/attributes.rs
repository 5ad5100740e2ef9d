//! Block attribute values.
//!
//! Attributes are a loose name → value map. The registry describes which
//! names each kind understands, but nothing here enforces it: unknown names
//! are kept and ignored by the renderer.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

// Integral numbers serialize as JSON integers so `16` stays `16`.
impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttributeValue::Text(s) => serializer.serialize_str(s),
            AttributeValue::Number(n) if is_integral(*n) => serializer.serialize_i64(*n as i64),
            AttributeValue::Number(n) => serializer.serialize_f64(*n),
            AttributeValue::List(items) => items.serialize(serializer),
        }
    }
}

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < 9.0e15
}

impl AttributeValue {
    /// Render the value as plain text. Lists are joined with ", ".
    pub fn to_text(&self) -> String {
        match self {
            AttributeValue::Text(s) => s.clone(),
            AttributeValue::Number(n) => format_number(*n),
            AttributeValue::List(items) => items.join(", "),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view; numeric strings such as `"24"` or `"24px"` are accepted.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            AttributeValue::Text(s) => {
                let trimmed = s.trim();
                let trimmed = trimmed.strip_suffix("px").unwrap_or(trimmed);
                trimmed.trim().parse().ok()
            }
            AttributeValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<u32> for AttributeValue {
    fn from(n: u32) -> Self {
        AttributeValue::Number(f64::from(n))
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(items: Vec<String>) -> Self {
        AttributeValue::List(items)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(items: Vec<&str>) -> Self {
        AttributeValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Integral values print without a fractional part (`16`, not `16.0`).
pub fn format_number(n: f64) -> String {
    if is_integral(n) {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Attribute map for one block.
///
/// Backed by a `BTreeMap` so iteration and serialization order never depend
/// on hashing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter()
    }

    /// Shallow, last-write-wins merge. List values are replaced wholesale.
    pub fn merge(&mut self, partial: &Attributes) {
        for (name, value) in &partial.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// Text view of an attribute; numbers are formatted, lists joined.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(AttributeValue::to_text)
    }

    /// Text view that treats a missing or blank value as absent.
    pub fn non_empty_text(&self, name: &str) -> Option<String> {
        self.text(name).filter(|s| !s.trim().is_empty())
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(AttributeValue::as_number)
    }

    /// List view; a single text value is treated as a one-item list.
    pub fn list(&self, name: &str) -> Option<Vec<String>> {
        match self.get(name)? {
            AttributeValue::List(items) => Some(items.clone()),
            AttributeValue::Text(s) => Some(vec![s.clone()]),
            AttributeValue::Number(_) => None,
        }
    }

    /// Every string found in the attribute values, in name order.
    pub fn strings(&self) -> impl Iterator<Item = &str> {
        self.0.values().flat_map(|value| match value {
            AttributeValue::Text(s) => vec![s.as_str()],
            AttributeValue::List(items) => items.iter().map(String::as_str).collect(),
            AttributeValue::Number(_) => Vec::new(),
        })
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
