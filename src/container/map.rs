//! Hashed map wrapper (`FxHashMap`) with builder-style inserts and
//! value transforms.
//!
//! ```
//! use commonskit::container::FluentMap;
//!
//! let ports = FluentMap::new().with("http", 80).with("https", 443);
//! assert_eq!(ports.get_or("ftp", 21), 21);
//! assert_eq!(ports.invert().get(&443), Some(&"https"));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use rustc_hash::FxHashMap;

use crate::container::FluentList;
use crate::traits::Length;

#[derive(Clone)]
pub struct FluentMap<K, V>(FxHashMap<K, V>);

impl<K, V> FluentMap<K, V> {
    pub fn new() -> Self {
        Self(FxHashMap::default())
    }

    pub fn into_inner(self) -> FxHashMap<K, V> {
        self.0
    }

    /// Keys in unspecified order.
    pub fn keys_list(&self) -> FluentList<K>
    where
        K: Clone,
    {
        self.0.keys().cloned().collect()
    }

    /// Values in unspecified order.
    pub fn values_list(&self) -> FluentList<V>
    where
        V: Clone,
    {
        self.0.values().cloned().collect()
    }
}

impl<K: Eq + Hash, V> FluentMap<K, V> {
    pub fn with(mut self, key: K, value: V) -> Self {
        self.0.insert(key, value);
        self
    }

    pub fn get_or<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.0.get(key).cloned().unwrap_or(default)
    }

    pub fn map_values<U, F>(&self, mut f: F) -> FluentMap<K, U>
    where
        K: Clone,
        F: FnMut(&V) -> U,
    {
        FluentMap(self.0.iter().map(|(k, v)| (k.clone(), f(v))).collect())
    }

    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        Self(
            self.0
                .iter()
                .filter(|(k, v)| predicate(k, v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Swaps keys and values. Which key survives a repeated value is unspecified.
    pub fn invert(&self) -> FluentMap<V, K>
    where
        K: Clone,
        V: Eq + Hash + Clone,
    {
        FluentMap(self.0.iter().map(|(k, v)| (v.clone(), k.clone())).collect())
    }
}

impl<K, V> Default for FluentMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for FluentMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Eq + Hash, V: Eq> Eq for FluentMap<K, V> {}

impl<K, V> Deref for FluentMap<K, V> {
    type Target = FxHashMap<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K, V> DerefMut for FluentMap<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K, V> From<FxHashMap<K, V>> for FluentMap<K, V> {
    fn from(entries: FxHashMap<K, V>) -> Self {
        Self(entries)
    }
}

impl<K: Eq + Hash, V, const N: usize> From<[(K, V); N]> for FluentMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for FluentMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for FluentMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<K, V> IntoIterator for FluentMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a FluentMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::collections::hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for FluentMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(&self.0).finish()
    }
}

impl<K, V> Length for FluentMap<K, V> {
    fn length(&self) -> usize {
        self.0.len()
    }
}
