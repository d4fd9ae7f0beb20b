//! # Copy-on-Write List
//!
//! Thread-safe list for read-mostly data such as listener registries.
//!
//! ```text
//!   RwLock<Arc<Vec<T>>>
//!
//!   reader:  read lock ──► Arc::clone ──► unlock ──► iterate snapshot freely
//!   writer:  write lock ──► Arc::make_mut (clones only if a snapshot is alive)
//!                       ──► mutate ──► unlock
//! ```
//!
//! A snapshot never changes after it is taken; writers that race with
//! readers pay for one `Vec` clone.
//!
//! ```
//! use commonskit::container::CopyOnWriteList;
//!
//! let list = CopyOnWriteList::new();
//! list.push("first");
//! let before = list.snapshot();
//! list.push("second");
//! assert_eq!(before.len(), 1);
//! assert_eq!(list.len(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::traits::Length;

pub struct CopyOnWriteList<T> {
    items: RwLock<Arc<Vec<T>>>,
}

impl<T> CopyOnWriteList<T> {
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Current contents; later writes do not affect the returned `Arc`.
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.items.read())
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.read().contains(item)
    }

    /// Replaces the contents with an empty list without cloning.
    pub fn clear(&self) {
        *self.items.write() = Arc::new(Vec::new());
    }
}

impl<T: Clone> CopyOnWriteList<T> {
    pub fn push(&self, item: T) {
        let mut items = self.items.write();
        Arc::make_mut(&mut items).push(item);
    }

    pub fn extend(&self, new_items: impl IntoIterator<Item = T>) {
        let mut items = self.items.write();
        Arc::make_mut(&mut items).extend(new_items);
    }

    /// Removes every item matching `predicate`; returns how many were removed.
    pub fn remove_where<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut items = self.items.write();
        if !items.iter().any(&mut predicate) {
            return 0;
        }
        let list = Arc::make_mut(&mut items);
        let before = list.len();
        list.retain(|item| !predicate(item));
        before - list.len()
    }
}

impl<T> Default for CopyOnWriteList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CopyOnWriteList<T> {
    /// The clone starts from the current snapshot and diverges on first write.
    fn clone(&self) -> Self {
        Self {
            items: RwLock::new(self.snapshot()),
        }
    }
}

impl<T: PartialEq> PartialEq for CopyOnWriteList<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.snapshot() == *other.snapshot()
    }
}

impl<T> From<Vec<T>> for CopyOnWriteList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(Arc::new(items)),
        }
    }
}

impl<T> FromIterator<T> for CopyOnWriteList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Clone> Extend<T> for CopyOnWriteList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        Arc::make_mut(self.items.get_mut()).extend(iter);
    }
}

/// Iterates a snapshot taken when iteration starts.
impl<T: Clone> IntoIterator for &CopyOnWriteList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot().as_ref().clone().into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for CopyOnWriteList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.snapshot().iter()).finish()
    }
}

impl<T> Length for CopyOnWriteList<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn snapshots_are_isolated() {
        let list: CopyOnWriteList<i32> = (1..=3).collect();
        let snap = list.snapshot();
        list.push(4);
        list.remove_where(|n| *n == 1);
        assert_eq!(*snap, vec![1, 2, 3]);
        assert_eq!(*list.snapshot(), vec![2, 3, 4]);
    }

    #[test]
    fn remove_where_counts() {
        let list = CopyOnWriteList::from(vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(list.remove_where(|n| n % 2 == 0), 3);
        assert_eq!(list.remove_where(|n| *n > 100), 0);
        assert!(list.contains(&5));
        assert!(!list.contains(&4));
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn clone_diverges_on_write() {
        let a = CopyOnWriteList::from(vec!["x"]);
        let b = a.clone();
        assert_eq!(a, b);
        b.push("y");
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
        assert_ne!(a, b);
    }

    #[test]
    fn concurrent_writers_and_readers() {
        let list = Arc::new(CopyOnWriteList::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let list = Arc::clone(&list);
                thread::spawn(move || {
                    for i in 0..100 {
                        list.push(t * 100 + i);
                        let snap = list.snapshot();
                        assert!(!snap.is_empty());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(list.len(), 400);
        let mut all: Vec<_> = (&*list).into_iter().collect();
        all.sort();
        assert_eq!(all, (0..400).collect::<Vec<_>>());
    }

    #[test]
    fn extend_through_trait_and_method() {
        let mut list = CopyOnWriteList::new();
        Extend::extend(&mut list, [1, 2]);
        list.extend([3]);
        assert_eq!(list.length(), 3);
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }
}
