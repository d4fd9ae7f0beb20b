//! # Linked Hash Map
//!
//! A hash map with a predictable iteration order. Entries are kept in a
//! `SlotArena`-backed [`IntrusiveList`] next to an `FxHashMap<K, SlotId>`
//! index, so every lookup is one hash probe and every reorder is an O(1)
//! unlink/relink.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                      LinkedMap<K, V>                         │
//!   │                                                              │
//!   │   FxHashMap<K, SlotId>          IntrusiveList<(K, V)>        │
//!   │   ┌───────┬────────┐                                         │
//!   │   │ "a"   │ id_1 ──┼──►  head ─► [a] ◄─► [b] ◄─► [c] ◄─ tail │
//!   │   │ "b"   │ id_2 ──┼──►         eldest          newest       │
//!   │   │ "c"   │ id_3 ──┼──►                                      │
//!   │   └───────┴────────┘                                         │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Modes
//!
//! | Mode               | `insert` of existing key | `get` / `get_mut` / `touch` |
//! |--------------------|--------------------------|-----------------------------|
//! | Insertion order    | keeps position           | no reordering               |
//! | Access order       | moves to newest          | moves to newest             |
//!
//! `peek` and `contains_key` never reorder in either mode. Access order is the
//! recency order an LRU map evicts from: the eldest entry is the least
//! recently used one.
//!
//! ## Example Usage
//!
//! ```
//! use commonskit::map::LinkedMap;
//!
//! let mut map = LinkedMap::with_access_order(true);
//! map.insert("a", 1);
//! map.insert("b", 2);
//! map.insert("c", 3);
//!
//! map.get(&"a");
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "c", "a"]);
//! assert_eq!(map.pop_eldest(), Some(("b", 2)));
//! ```
//!
//! ## Thread Safety
//!
//! Not thread-safe; wrap in a lock or use `ConcurrentLruMap`.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::{self, IntrusiveList};
use crate::ds::slot_arena::SlotId;
use crate::traits::Length;

/// Hash map iterating in insertion or access order, eldest first.
#[derive(Clone)]
pub struct LinkedMap<K, V> {
    index: FxHashMap<K, SlotId>,
    order: IntrusiveList<(K, V)>,
    access_order: bool,
}

impl<K, V> LinkedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty map in insertion order.
    pub fn new() -> Self {
        Self::with_capacity_and_order(0, false)
    }

    /// Creates an empty insertion-ordered map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, false)
    }

    /// Creates an empty map; `access_order == true` selects access order.
    pub fn with_access_order(access_order: bool) -> Self {
        Self::with_capacity_and_order(0, access_order)
    }

    pub fn with_capacity_and_order(capacity: usize, access_order: bool) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: IntrusiveList::with_capacity(capacity),
            access_order,
        }
    }

    /// Returns `true` if reads reorder entries.
    #[inline]
    pub fn is_access_ordered(&self) -> bool {
        self.access_order
    }

    pub fn reserve(&mut self, additional: usize) {
        self.index.reserve(additional);
        self.order.reserve(additional);
    }

    /// Inserts or updates `key`, returning the previous value.
    ///
    /// New keys become the newest entry. An existing key keeps its position
    /// in insertion order and becomes the newest entry in access order.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            let previous = self
                .order
                .get_mut(id)
                .map(|entry| std::mem::replace(&mut entry.1, value));
            if self.access_order {
                self.order.move_to_back(id);
            }
            return previous;
        }

        let id = self.order.push_back((key.clone(), value));
        self.index.insert(key, id);
        None
    }

    /// Looks up `key`, reordering it in access order.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key)?;
        if self.access_order {
            self.order.move_to_back(id);
        }
        self.order.get(id).map(|entry| &entry.1)
    }

    /// Mutable lookup, reordering `key` in access order.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key)?;
        if self.access_order {
            self.order.move_to_back(id);
        }
        self.order.get_mut(id).map(|entry| &mut entry.1)
    }

    /// Looks up `key` without affecting order.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key)?;
        self.order.get(id).map(|entry| &entry.1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Marks `key` as accessed. Only reorders in access order.
    pub fn touch<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&id) => {
                if self.access_order {
                    self.order.move_to_back(id);
                }
                true
            },
            None => false,
        }
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.index.remove(key)?;
        self.order.remove(id)
    }

    /// Returns the eldest entry (least recently used in access order).
    pub fn eldest(&self) -> Option<(&K, &V)> {
        self.order.front().map(|(k, v)| (k, v))
    }

    /// Returns the newest entry.
    pub fn newest(&self) -> Option<(&K, &V)> {
        self.order.back().map(|(k, v)| (k, v))
    }

    pub fn pop_eldest(&mut self) -> Option<(K, V)> {
        let (key, value) = self.order.pop_front()?;
        self.index.remove(&key);
        Some((key, value))
    }

    pub fn pop_newest(&mut self) -> Option<(K, V)> {
        let (key, value) = self.order.pop_back()?;
        self.index.remove(&key);
        Some((key, value))
    }

    /// Keeps only the entries for which `f` returns `true`, preserving order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        for id in self.order.ids() {
            let keep = match self.order.get_mut(id) {
                Some(entry) => f(&entry.0, &mut entry.1),
                None => true,
            };
            if !keep {
                if let Some((key, _)) = self.order.remove(id) {
                    self.index.remove(&key);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.order.debug_validate_invariants();
        assert_eq!(self.index.len(), self.order.len());
        for (key, _) in self.order.iter() {
            assert!(self.index.contains_key(key));
        }
    }
}

impl<K, V> LinkedMap<K, V> {
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterates entries from eldest to newest.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.order.iter(),
        }
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

/// Iterator over `(&K, &V)` from eldest to newest.
pub struct Iter<'a, K, V> {
    inner: intrusive_list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Owning iterator from eldest to newest.
pub struct IntoIter<K, V> {
    order: IntrusiveList<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.order.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.order.len(), Some(self.order.len()))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> IntoIterator for LinkedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { order: self.order }
    }
}

impl<'a, K, V> IntoIterator for &'a LinkedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Default for LinkedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for LinkedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for LinkedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for LinkedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Order-sensitive equality: same entries in the same order.
impl<K, V> PartialEq for LinkedMap<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.order.len() == other.order.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for LinkedMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LinkedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Length for LinkedMap<K, V> {
    fn length(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<K: Clone, V>(map: &LinkedMap<K, V>) -> Vec<K> {
        map.keys().cloned().collect()
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut map = LinkedMap::new();
        map.insert("c", 3);
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(keys(&map), vec!["c", "a", "b"]);
        map.debug_validate_invariants();
    }

    #[test]
    fn update_keeps_position_in_insertion_order() {
        let mut map = LinkedMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.insert("a", 10), Some(1));
        assert_eq!(keys(&map), vec!["a", "b"]);
        assert_eq!(map.peek("a"), Some(&10));
    }

    #[test]
    fn get_does_not_reorder_in_insertion_order() {
        let mut map = LinkedMap::new();
        map.insert(1, "a");
        map.insert(2, "b");
        map.get(&1);
        assert_eq!(keys(&map), vec![1, 2]);
        assert!(!map.is_access_ordered());
    }

    #[test]
    fn access_order_moves_on_get_and_update() {
        let mut map = LinkedMap::with_access_order(true);
        map.insert(1, "a");
        map.insert(2, "b");
        map.insert(3, "c");

        assert_eq!(map.get(&1), Some(&"a"));
        assert_eq!(keys(&map), vec![2, 3, 1]);

        map.insert(2, "bb");
        assert_eq!(keys(&map), vec![3, 1, 2]);

        if let Some(v) = map.get_mut(&3) {
            *v = "cc";
        }
        assert_eq!(keys(&map), vec![1, 2, 3]);
        assert_eq!(map.eldest(), Some((&1, &"a")));
        assert_eq!(map.newest(), Some((&3, &"cc")));
        map.debug_validate_invariants();
    }

    #[test]
    fn peek_and_contains_never_reorder() {
        let mut map = LinkedMap::with_access_order(true);
        map.insert(1, ());
        map.insert(2, ());
        assert_eq!(map.peek(&1), Some(&()));
        assert!(map.contains_key(&1));
        assert_eq!(keys(&map), vec![1, 2]);
    }

    #[test]
    fn touch_reports_presence() {
        let mut map = LinkedMap::with_access_order(true);
        map.insert("x", 1);
        map.insert("y", 2);
        assert!(map.touch("x"));
        assert!(!map.touch("z"));
        assert_eq!(keys(&map), vec!["y", "x"]);
    }

    #[test]
    fn remove_and_pop() {
        let mut map: LinkedMap<String, i32> =
            [("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)].into();
        assert_eq!(map.remove("b"), Some(2));
        assert_eq!(map.remove("b"), None);
        assert_eq!(map.pop_eldest(), Some(("a".to_string(), 1)));
        assert_eq!(map.pop_newest(), Some(("c".to_string(), 3)));
        assert!(map.is_empty());
        assert_eq!(map.pop_eldest(), None);
        map.debug_validate_invariants();
    }

    #[test]
    fn retain_filters_in_order() {
        let mut map: LinkedMap<u32, u32> = (0..10).map(|i| (i, i * 10)).collect();
        map.retain(|k, v| {
            *v += 1;
            k % 3 == 0
        });
        assert_eq!(keys(&map), vec![0, 3, 6, 9]);
        assert_eq!(map.peek(&3), Some(&31));
        map.debug_validate_invariants();
    }

    #[test]
    fn into_iter_yields_eldest_first() {
        let map: LinkedMap<&str, i32> = [("z", 26), ("a", 1)].into();
        let entries: Vec<_> = map.into_iter().collect();
        assert_eq!(entries, vec![("z", 26), ("a", 1)]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a: LinkedMap<i32, i32> = [(1, 1), (2, 2)].into();
        let b: LinkedMap<i32, i32> = [(2, 2), (1, 1)].into();
        let c = a.clone();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn debug_renders_as_map() {
        let map: LinkedMap<&str, i32> = [("b", 2), ("a", 1)].into();
        assert_eq!(format!("{:?}", map), r#"{"b": 2, "a": 1}"#);
    }

    #[test]
    fn clear_resets_everything() {
        let mut map: LinkedMap<i32, i32> = (0..4).map(|i| (i, i)).collect();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.eldest(), None);
        map.insert(9, 9);
        assert_eq!(keys(&map), vec![9]);
        map.debug_validate_invariants();
    }

    fn entry_count<K, V>(map: &LinkedMap<K, V>) -> (usize, bool) {
        (map.len(), map.is_empty())
    }

    #[test]
    fn len_available_for_any_key_type() {
        let mut map = LinkedMap::new();
        assert_eq!(entry_count(&map), (0, true));
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(entry_count(&map), (2, false));
    }
}
