//! `Vec` wrapper with chainable conveniences.
//!
//! ```
//! use commonskit::container::FluentList;
//!
//! let names = FluentList::new().with("carol").with("alice").with("bob").with("alice");
//! assert_eq!(names.distinct().sorted().join(", "), "alice, bob, carol");
//! assert_eq!(names.get_or(10, "nobody"), "nobody");
//! ```

use std::fmt::{self, Display};
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use rustc_hash::FxHashSet;

use crate::container::FluentSet;
use crate::traits::Length;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FluentList<T>(Vec<T>);

impl<T> FluentList<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }

    /// Appends `item` and returns the list.
    pub fn with(mut self, item: T) -> Self {
        self.0.push(item);
        self
    }

    pub fn with_all(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.0.extend(items);
        self
    }

    pub fn map<U, F>(&self, f: F) -> FluentList<U>
    where
        F: FnMut(&T) -> U,
    {
        FluentList(self.0.iter().map(f).collect())
    }

    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.0.iter().find(|item| predicate(item))
    }
}

impl<T: Clone> FluentList<T> {
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self(self.0.iter().filter(|item| predicate(item)).cloned().collect())
    }

    pub fn first_or(&self, default: T) -> T {
        self.0.first().cloned().unwrap_or(default)
    }

    pub fn last_or(&self, default: T) -> T {
        self.0.last().cloned().unwrap_or(default)
    }

    pub fn get_or(&self, index: usize, default: T) -> T {
        self.0.get(index).cloned().unwrap_or(default)
    }

    /// Sorted copy; the receiver is left as is.
    pub fn sorted(&self) -> Self
    where
        T: Ord,
    {
        let mut out = self.0.clone();
        out.sort();
        Self(out)
    }

    /// Copy without repeats, first occurrence wins.
    pub fn distinct(&self) -> Self
    where
        T: Eq + Hash,
    {
        let mut seen = FxHashSet::default();
        Self(
            self.0
                .iter()
                .filter(|item| seen.insert((*item).clone()))
                .cloned()
                .collect(),
        )
    }

    pub fn to_set(&self) -> FluentSet<T>
    where
        T: Eq + Hash,
    {
        self.0.iter().cloned().collect()
    }
}

impl<T: Display> FluentList<T> {
    pub fn join(&self, separator: &str) -> String {
        crate::array::join(Some(&self.0[..]), separator)
    }
}

impl<T> Default for FluentList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for FluentList<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for FluentList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for FluentList<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> From<FluentList<T>> for Vec<T> {
    fn from(list: FluentList<T>) -> Self {
        list.0
    }
}

impl<T, const N: usize> From<[T; N]> for FluentList<T> {
    fn from(items: [T; N]) -> Self {
        Self(Vec::from(items))
    }
}

impl<T> FromIterator<T> for FluentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for FluentList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T> IntoIterator for FluentList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FluentList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for FluentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl<T> Length for FluentList<T> {
    fn length(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chaining_and_deref() {
        let mut list = FluentList::new().with(3).with_all([1, 2]);
        assert_eq!(list.len(), 3);
        list.push(9);
        assert_eq!(&list[..], &[3, 1, 2, 9]);
        assert_eq!(list.sorted().into_inner(), vec![1, 2, 3, 9]);
    }

    #[test]
    fn filter_map_find() {
        let list = FluentList::from(vec![1, 2, 3, 4]);
        assert_eq!(list.filter(|n| n % 2 == 0), FluentList::from([2, 4]));
        assert_eq!(list.map(|n| n.to_string()).join("-"), "1-2-3-4");
        assert_eq!(list.find(|n| *n > 2), Some(&3));
        assert_eq!(list.find(|n| *n > 9), None);
    }

    #[test]
    fn defaults() {
        let empty: FluentList<i32> = FluentList::default();
        assert_eq!(empty.first_or(-1), -1);
        assert_eq!(empty.last_or(-2), -2);
        let list = FluentList::from([5, 6]);
        assert_eq!(list.first_or(0), 5);
        assert_eq!(list.last_or(0), 6);
        assert_eq!(list.get_or(1, 0), 6);
    }

    #[test]
    fn distinct_and_to_set() {
        let list: FluentList<_> = "abracadabra".chars().collect();
        assert_eq!(list.distinct().iter().collect::<String>(), "abrcd");
        assert_eq!(list.to_set().len(), 5);
        assert_eq!(list.length(), 11);
    }
}
