//! Named attributes attached to a value (`names`, `dim`, `class`, ...).

use std::sync::Arc;

use smallvec::SmallVec;

use crate::value::{ExpressionValue, Rexp};

/// Insertion-ordered mapping from attribute name to value.
///
/// Invariants:
/// - Names are unique; inserting an existing name replaces the value in place
/// - Iteration follows first-insertion order
///
/// Maps are built by the decoder and attached to a vector at construction
/// time. Nothing mutates a map once a vector holds it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    entries: SmallVec<[(Arc<str>, Rexp); 2]>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute. Returns the previous value, if any.
    pub fn insert(&mut self, name: impl Into<Arc<str>>, value: impl Into<Rexp>) -> Option<Rexp> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<Arc<str>>, value: impl Into<Rexp>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up an attribute. `None` means "no such attribute", which is
    /// different from an attribute whose value is NA.
    pub fn get(&self, name: &str) -> Option<&Rexp> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_ref() == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rexp)> {
        self.entries.iter().map(|(n, v)| (n.as_ref(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_ref())
    }

    /// `name=<value debug>` pairs, comma-separated, in insertion order.
    pub fn to_debug_string(&self) -> String {
        let mut out = String::new();
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(name);
            out.push('=');
            out.push_str(&value.to_debug_string());
        }
        out
    }
}

impl<N, V> FromIterator<(N, V)> for AttributeMap
where
    N: Into<Arc<str>>,
    V: Into<Rexp>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut map = AttributeMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}
