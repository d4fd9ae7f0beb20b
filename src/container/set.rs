//! Hashed set wrapper (`FxHashSet`) with set algebra that returns new sets.

use std::fmt;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use rustc_hash::FxHashSet;

use crate::container::FluentList;
use crate::traits::Length;

#[derive(Clone)]
pub struct FluentSet<T>(FxHashSet<T>);

impl<T> FluentSet<T> {
    pub fn new() -> Self {
        Self(FxHashSet::default())
    }

    pub fn into_inner(self) -> FxHashSet<T> {
        self.0
    }

    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.0.iter().find(|item| predicate(item))
    }
}

impl<T: Eq + Hash> FluentSet<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut set = FxHashSet::default();
        set.reserve(capacity);
        Self(set)
    }

    pub fn with(mut self, item: T) -> Self {
        self.0.insert(item);
        self
    }

    pub fn with_all(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.0.extend(items);
        self
    }

    pub fn map<U, F>(&self, f: F) -> FluentSet<U>
    where
        U: Eq + Hash,
        F: FnMut(&T) -> U,
    {
        FluentSet(self.0.iter().map(f).collect())
    }
}

impl<T: Eq + Hash + Clone> FluentSet<T> {
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self(self.0.iter().filter(|item| predicate(item)).cloned().collect())
    }

    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    pub fn to_sorted_list(&self) -> FluentList<T>
    where
        T: Ord,
    {
        let mut items: Vec<T> = self.0.iter().cloned().collect();
        items.sort();
        FluentList::from(items)
    }
}

impl<T> Default for FluentSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for FluentSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq + Hash> Eq for FluentSet<T> {}

impl<T> Deref for FluentSet<T> {
    type Target = FxHashSet<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for FluentSet<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<FxHashSet<T>> for FluentSet<T> {
    fn from(items: FxHashSet<T>) -> Self {
        Self(items)
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for FluentSet<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Eq + Hash> FromIterator<T> for FluentSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Eq + Hash> Extend<T> for FluentSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T> IntoIterator for FluentSet<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FluentSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for FluentSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.0).finish()
    }
}

impl<T> Length for FluentSet<T> {
    fn length(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_derefs() {
        let mut set = FluentSet::new().with(1).with(1).with_all([2, 3]);
        assert_eq!(set.len(), 3);
        assert!(set.insert(4));
        assert!(set.contains(&4));
    }

    #[test]
    fn algebra() {
        let a = FluentSet::from([1, 2, 3]);
        let b = FluentSet::from([3, 4]);
        assert_eq!(a.union(&b).to_sorted_list().into_inner(), vec![1, 2, 3, 4]);
        assert_eq!(a.intersection(&b), FluentSet::from([3]));
        assert_eq!(a.difference(&b).to_sorted_list().into_inner(), vec![1, 2]);
    }

    #[test]
    fn filter_map_find() {
        let set = FluentSet::from(["apple", "kiwi", "plum"]);
        assert_eq!(set.filter(|s| s.len() == 4), FluentSet::from(["kiwi", "plum"]));
        assert_eq!(set.map(|s| s.len()), FluentSet::from([5, 4]));
        assert_eq!(set.find(|s| s.starts_with('a')), Some(&"apple"));
    }
}
