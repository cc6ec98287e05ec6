//! A string-keyed record, the keyed-mapping shape.

use std::{
    fmt::{self, Debug},
    ops::Index,
};

use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A string-keyed mapping whose fields enumerate in insertion order.
///
/// This is the keyed-mapping shape: plain named fields, with no keyed
/// insertion protocol of its own. Assigning an existing field replaces its
/// value and keeps its position.
///
/// Two records are equal when they hold the same fields, regardless of order.
///
/// # Examples
///
/// ```
/// use fusefold::Record;
///
/// let mut record = Record::new();
/// record.insert("one", 1);
/// record.insert("two", 2);
/// record.insert("one", 11);
///
/// assert_eq!(record.len(), 2);
/// assert_eq!(record["one"], 11);
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["one", "two"]);
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Record<V> {
    fields: IndexMap<String, V>,
}

impl<V> Record<V> {
    #[inline]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.fields.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.fields.get_mut(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Assigns `value` to the field `key`, returning the previous value if any.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.fields.insert(key.into(), value)
    }

    /// Removes a field, keeping the order of the remaining ones.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.fields.shift_remove(key)
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.fields.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.fields.values()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &V)> + ExactSizeIterator {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> Default for Record<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for Record<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Index<&str> for Record<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the field does not exist.
    fn index(&self, key: &str) -> &V {
        &self.fields[key]
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Record<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.fields
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value)));
    }
}

impl<K: Into<String>, V, const N: usize> From<[(K, V); N]> for Record<V> {
    fn from(fields: [(K, V); N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
