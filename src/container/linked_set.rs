//! Insertion-ordered set on top of [`LinkedMap`].
//!
//! Re-inserting an element keeps its original position.
//!
//! ```
//! use commonskit::container::LinkedSet;
//!
//! let mut set: LinkedSet<&str> = ["pear", "fig"].into_iter().collect();
//! assert!(!set.insert("pear"));
//! set.insert("apple");
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["pear", "fig", "apple"]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter::Map;

use crate::map::LinkedMap;
use crate::map::linked;
use crate::traits::Length;

#[derive(Clone)]
pub struct LinkedSet<T> {
    entries: LinkedMap<T, ()>,
}

impl<T> LinkedSet<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.entries.keys()
    }

    pub fn first(&self) -> Option<&T> {
        self.entries.iter().next().map(|(item, _)| item)
    }
}

impl<T> LinkedSet<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: LinkedMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: LinkedMap::with_capacity(capacity),
        }
    }

    /// Returns `true` if `item` was not present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.entries.contains_key(&item) {
            return false;
        }
        self.entries.insert(item, ());
        true
    }

    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(item).is_some()
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(item)
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.newest().map(|(item, _)| item)
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.entries.pop_eldest().map(|(item, _)| item)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn with(mut self, item: T) -> Self {
        self.insert(item);
        self
    }

    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).cloned().collect()
    }

    /// Maps every element; collisions keep the first mapped position.
    pub fn map<U, F>(&self, f: F) -> LinkedSet<U>
    where
        U: Eq + Hash + Clone,
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }
}

impl<T: Eq + Hash + Clone> Default for LinkedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Order-sensitive, like [`LinkedMap`].
impl<T: PartialEq> PartialEq for LinkedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq> Eq for LinkedSet<T> {}

impl<T: Eq + Hash + Clone> FromIterator<T> for LinkedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for LinkedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Eq + Hash + Clone, const N: usize> From<[T; N]> for LinkedSet<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Eq + Hash + Clone> From<Vec<T>> for LinkedSet<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for LinkedSet<T> {
    type Item = T;
    type IntoIter = Map<linked::IntoIter<T, ()>, fn((T, ())) -> T>;

    fn into_iter(self) -> Self::IntoIter {
        let key: fn((T, ())) -> T = |(item, ())| item;
        self.entries.into_iter().map(key)
    }
}

impl<'a, T> IntoIterator for &'a LinkedSet<T> {
    type Item = &'a T;
    type IntoIter = Map<linked::Iter<'a, T, ()>, fn((&'a T, &'a ())) -> &'a T>;

    fn into_iter(self) -> Self::IntoIter {
        let key: fn((&'a T, &'a ())) -> &'a T = |(item, _)| item;
        self.entries.iter().map(key)
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Length for LinkedSet<T> {
    fn length(&self) -> usize {
        self.entries.len()
    }
}
