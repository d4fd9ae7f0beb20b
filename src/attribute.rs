//! Named, loosely typed attributes.
//!
//! [`Attributes`] is an insertion-ordered bag of [`AttributeValue`]s keyed by
//! name. Types that carry one implement [`AttributeContainer`] and get the
//! accessor methods for free.
//!
//! ## Conversions
//!
//! | Accessor    | `Bool` | `Int`   | `Float` | `Text`           | `List` |
//! |-------------|--------|---------|---------|------------------|--------|
//! | `as_bool`   | yes    |         |         | `"true"/"false"` |        |
//! | `as_int`    |        | yes     |         | parsed           |        |
//! | `as_float`  |        | widened | yes     | parsed           |        |
//! | `as_text`   |        |         |         | yes              |        |
//! | `as_list`   |        |         |         |                  | yes    |
//!
//! ## Example Usage
//!
//! ```
//! use commonskit::attribute::{AttributeContainer, Attributes};
//!
//! struct Node {
//!     attrs: Attributes,
//! }
//!
//! impl AttributeContainer for Node {
//!     fn attributes(&self) -> &Attributes {
//!         &self.attrs
//!     }
//!     fn attributes_mut(&mut self) -> &mut Attributes {
//!         &mut self.attrs
//!     }
//! }
//!
//! let mut node = Node { attrs: Attributes::new() };
//! node.set_attribute("weight", 3);
//! node.set_attribute("label", "root");
//! assert_eq!(node.attributes().get_int_or("weight", 0), 3);
//! assert_eq!(node.attribute_names(), vec!["weight", "label"]);
//! ```

use std::fmt;

use crate::map::LinkedMap;
use crate::map::linked::Iter;
use crate::traits::Length;

// ---------------------------------------------------------------------------
// AttributeValue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<AttributeValue>),
}

impl AttributeValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(text) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if text.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            },
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            Self::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// Insertion-ordered name → value map.
#[derive(Clone, Default, PartialEq)]
pub struct Attributes {
    entries: LinkedMap<String, AttributeValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, returning the previous value. An existing name keeps its
    /// position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Option<AttributeValue> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.peek(name)
    }

    /// `default` when the attribute is missing or not convertible.
    pub fn get_bool_or(&self, name: &str, default: bool) -> bool {
        self.get(name).and_then(AttributeValue::as_bool).unwrap_or(default)
    }

    pub fn get_int_or(&self, name: &str, default: i64) -> i64 {
        self.get(name).and_then(AttributeValue::as_int).unwrap_or(default)
    }

    pub fn get_float_or(&self, name: &str, default: f64) -> f64 {
        self.get(name).and_then(AttributeValue::as_float).unwrap_or(default)
    }

    pub fn get_text_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).and_then(AttributeValue::as_text).unwrap_or(default)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Copies every attribute of `other` into `self`; `other` wins on conflict.
    pub fn merge(&mut self, other: &Attributes) {
        for (name, value) in other.iter() {
            self.entries.insert(name.clone(), value.clone());
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> Iter<'_, String, AttributeValue> {
        self.entries.iter()
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<S, V> FromIterator<(S, V)> for Attributes
where
    S: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        attrs.extend(iter);
        attrs
    }
}

impl<S, V> Extend<(S, V)> for Attributes
where
    S: Into<String>,
    V: Into<AttributeValue>,
{
    fn extend<I: IntoIterator<Item = (S, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttributeValue);
    type IntoIter = Iter<'a, String, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Length for Attributes {
    fn length(&self) -> usize {
        self.entries.len()
    }
}

// ---------------------------------------------------------------------------
// AttributeContainer
// ---------------------------------------------------------------------------

/// Implemented by types that carry an [`Attributes`] bag.
pub trait AttributeContainer {
    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes().get(name)
    }

    fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.attributes_mut().set(name, value)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes().contains(name)
    }

    fn remove_attribute(&mut self, name: &str) -> Option<AttributeValue> {
        self.attributes_mut().remove(name)
    }

    fn attribute_names(&self) -> Vec<&str> {
        self.attributes().names().collect()
    }
}

impl AttributeContainer for Attributes {
    fn attributes(&self) -> &Attributes {
        self
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_conversions() {
        assert_eq!(AttributeValue::from(" TRUE ").as_bool(), Some(true));
        assert_eq!(AttributeValue::from("no").as_bool(), None);
        assert_eq!(AttributeValue::from(7).as_float(), Some(7.0));
        assert_eq!(AttributeValue::from("42").as_int(), Some(42));
        assert_eq!(AttributeValue::from(1.5).as_int(), None);
        assert_eq!(AttributeValue::from(true).as_text(), None);
        assert_eq!(AttributeValue::from(vec![1, 2]).as_list().map(<[_]>::len), Some(2));
        assert_eq!(AttributeValue::from(2.5f32).kind(), "float");
    }

    #[test]
    fn display() {
        assert_eq!(AttributeValue::from(vec!["a", "b"]).to_string(), "[a, b]");
        assert_eq!(AttributeValue::from(-3).to_string(), "-3");
        assert_eq!(AttributeValue::from(false).to_string(), "false");
    }

    #[test]
    fn typed_getters_fall_back() {
        let attrs = Attributes::new()
            .with("enabled", "true")
            .with("retries", 3)
            .with("ratio", 0.25)
            .with("name", "primary");
        assert!(attrs.get_bool_or("enabled", false));
        assert_eq!(attrs.get_int_or("retries", 0), 3);
        assert_eq!(attrs.get_float_or("retries", 0.0), 3.0);
        assert_eq!(attrs.get_float_or("ratio", 0.0), 0.25);
        assert_eq!(attrs.get_text_or("name", "?"), "primary");
        assert_eq!(attrs.get_text_or("retries", "?"), "?");
        assert_eq!(attrs.get_int_or("missing", -1), -1);
    }

    #[test]
    fn order_and_overwrite() {
        let mut attrs: Attributes = [("b", 1), ("a", 2)].into_iter().collect();
        assert_eq!(attrs.set("b", 10), Some(AttributeValue::Int(1)));
        assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(attrs.remove("b"), Some(AttributeValue::Int(10)));
        assert!(!attrs.contains("b"));
        attrs.clear();
        assert!(attrs.is_empty());
    }

    #[test]
    fn merge_prefers_other() {
        let mut base = Attributes::new().with("x", 1).with("y", 2);
        let overlay = Attributes::new().with("y", 20).with("z", 30);
        base.merge(&overlay);
        assert_eq!(base.names().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        assert_eq!(base.get_int_or("y", 0), 20);
        assert_eq!(base.length(), 3);
    }

    #[test]
    fn container_trait_defaults() {
        let mut attrs = Attributes::new();
        assert!(!attrs.has_attribute("k"));
        attrs.set_attribute("k", "v");
        assert_eq!(attrs.attribute("k").and_then(AttributeValue::as_text), Some("v"));
        assert_eq!(attrs.attribute_names(), vec!["k"]);
        assert_eq!(attrs.remove_attribute("k"), Some(AttributeValue::from("v")));
    }
}
