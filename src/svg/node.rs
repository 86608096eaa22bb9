//! Node and attribute model for the markup tree.

use std::fmt;

/// Element tags the builder can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    Svg,
    Rect,
    Circle,
    Path,
    Polyline,
    Group,
}

impl Tag {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Tag::Svg => "svg",
            Tag::Rect => "rect",
            Tag::Circle => "circle",
            Tag::Path => "path",
            Tag::Polyline => "polyline",
            Tag::Group => "g",
        }
    }
}

/// An attribute value: text, integer, or float.
///
/// Numbers keep their own formatting (floats print the shortest
/// representation that round-trips) so output stays stable.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Int(n) => write!(f, "{}", n),
            AttrValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Int(n)
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        AttrValue::Int(i64::from(n))
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Float(n)
    }
}

/// An ordered, key-unique attribute list.
///
/// Insertion order is preserved in the rendered markup; setting an existing
/// key replaces its value in place.
#[derive(Debug, Clone, Default)]
pub struct AttrList {
    entries: Vec<(String, AttrValue)>,
}

impl AttrList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value for the key.
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Chaining form of [`set`](Self::set).
    pub fn with(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Look up an attribute by key.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single element in the markup tree.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) tag: Tag,
    pub(crate) attrs: AttrList,
    pub(crate) children: Vec<super::NodeId>,
}

impl Node {
    pub(crate) fn new(tag: Tag, attrs: AttrList) -> Self {
        Self {
            tag,
            attrs,
            children: Vec::new(),
        }
    }
}
