//! Ordered set and map wrappers over `BTreeSet` / `BTreeMap` with navigation
//! helpers.
//!
//! ## Navigation
//!
//! | Method                | Set         | Map         | Keeps                     |
//! |-----------------------|-------------|-------------|---------------------------|
//! | `head_*(to)`          | `head_set`  | `head_map`  | `x < to`                  |
//! | `tail_*(from)`        | `tail_set`  | `tail_map`  | `x >= from`               |
//! | `sub_*(from, to)`     | `sub_set`   | `sub_map`   | `from <= x < to`          |
//! | `floor(x)`            | `floor`     | `floor_key` | greatest `<= x`           |
//! | `ceiling(x)`          | `ceiling`   | `ceiling_key` | least `>= x`            |
//!
//! A `sub_*` call with `from > to` yields an empty collection.
//!
//! ```
//! use commonskit::container::SortedSet;
//!
//! let set: SortedSet<u32> = [10, 20, 30, 40].into();
//! assert_eq!(set.floor(&25), Some(&20));
//! assert_eq!(set.ceiling(&25), Some(&30));
//! assert_eq!(set.sub_set(&20, &40).into_inner().into_iter().collect::<Vec<_>>(), vec![20, 30]);
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::traits::Length;

// ---------------------------------------------------------------------------
// SortedSet
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortedSet<T>(BTreeSet<T>);

impl<T> SortedSet<T> {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn into_inner(self) -> BTreeSet<T> {
        self.0
    }
}

impl<T: Ord> SortedSet<T> {
    pub fn first(&self) -> Option<&T> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.0.last()
    }

    pub fn with(mut self, item: T) -> Self {
        self.0.insert(item);
        self
    }

    pub fn map<U, F>(&self, f: F) -> SortedSet<U>
    where
        U: Ord,
        F: FnMut(&T) -> U,
    {
        SortedSet(self.0.iter().map(f).collect())
    }

    /// Greatest element `<= item`.
    pub fn floor(&self, item: &T) -> Option<&T> {
        self.0.range::<T, _>(..=item).next_back()
    }

    /// Least element `>= item`.
    pub fn ceiling(&self, item: &T) -> Option<&T> {
        self.0.range::<T, _>(item..).next()
    }
}

impl<T: Ord + Clone> SortedSet<T> {
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self(self.0.iter().filter(|item| predicate(item)).cloned().collect())
    }

    pub fn head_set(&self, to: &T) -> Self {
        Self(self.0.range::<T, _>(..to).cloned().collect())
    }

    pub fn tail_set(&self, from: &T) -> Self {
        Self(self.0.range::<T, _>(from..).cloned().collect())
    }

    pub fn sub_set(&self, from: &T, to: &T) -> Self {
        if from > to {
            return Self::new();
        }
        Self(self.0.range::<T, _>(from..to).cloned().collect())
    }
}

impl<T> Default for SortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for SortedSet<T> {
    type Target = BTreeSet<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for SortedSet<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<BTreeSet<T>> for SortedSet<T> {
    fn from(items: BTreeSet<T>) -> Self {
        Self(items)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedSet<T> {
    fn from(items: [T; N]) -> Self {
        Self(BTreeSet::from(items))
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for SortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = std::collections::btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.0).finish()
    }
}

impl<T> Length for SortedSet<T> {
    fn length(&self) -> usize {
        self.0.len()
    }
}

// ---------------------------------------------------------------------------
// SortedMap
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortedMap<K, V>(BTreeMap<K, V>);

impl<K, V> SortedMap<K, V> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn into_inner(self) -> BTreeMap<K, V> {
        self.0
    }

    pub fn first_key(&self) -> Option<&K> {
        self.0.keys().next()
    }

    pub fn last_key(&self) -> Option<&K> {
        self.0.keys().next_back()
    }
}

impl<K: Ord, V> SortedMap<K, V> {
    pub fn with(mut self, key: K, value: V) -> Self {
        self.0.insert(key, value);
        self
    }

    pub fn get_or(&self, key: &K, default: V) -> V
    where
        V: Clone,
    {
        self.0.get(key).cloned().unwrap_or(default)
    }

    /// Greatest key `<= key`.
    pub fn floor_key(&self, key: &K) -> Option<&K> {
        self.0.range::<K, _>(..=key).next_back().map(|(k, _)| k)
    }

    /// Least key `>= key`.
    pub fn ceiling_key(&self, key: &K) -> Option<&K> {
        self.0.range::<K, _>(key..).next().map(|(k, _)| k)
    }

    pub fn map_values<U, F>(&self, mut f: F) -> SortedMap<K, U>
    where
        K: Clone,
        F: FnMut(&V) -> U,
    {
        SortedMap(self.0.iter().map(|(k, v)| (k.clone(), f(v))).collect())
    }
}

impl<K: Ord + Clone, V: Clone> SortedMap<K, V> {
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
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

    pub fn head_map(&self, to: &K) -> Self {
        Self(self.0.range::<K, _>(..to).map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    pub fn tail_map(&self, from: &K) -> Self {
        Self(self.0.range::<K, _>(from..).map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    pub fn sub_map(&self, from: &K, to: &K) -> Self {
        if from > to {
            return Self::new();
        }
        Self(self.0.range::<K, _>(from..to).map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

impl<K, V> Default for SortedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Deref for SortedMap<K, V> {
    type Target = BTreeMap<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K, V> DerefMut for SortedMap<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K, V> From<BTreeMap<K, V>> for SortedMap<K, V> {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self(entries)
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for SortedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        Self(BTreeMap::from(entries))
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K: Ord, V> Extend<(K, V)> for SortedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<K, V> IntoIterator for SortedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a SortedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::collections::btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SortedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(&self.0).finish()
    }
}

impl<K, V> Length for SortedMap<K, V> {
    fn length(&self) -> usize {
        self.0.len()
    }
}
