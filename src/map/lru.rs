//! # Least Recently Used (LRU) Map
//!
//! A size-bounded map that drops its least recently used entry whenever an
//! insert pushes it past `max_size`, reporting each dropped entry to an
//! [`EvictionListener`].
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                      LruMap<K, V, L>                             │
//!   │                                                                  │
//!   │   ┌──────────────────────────────────────────────────────────┐   │
//!   │   │  LinkedMap<K, V>  (access order)                         │   │
//!   │   │                                                          │   │
//!   │   │  head ──► [A] ◄──► [B] ◄──► [C] ◄── tail                 │   │
//!   │   │          eldest (LRU)        newest (MRU)                │   │
//!   │   └──────────────────────────────────────────────────────────┘   │
//!   │                                                                  │
//!   │   max_size: usize          listener: L: EvictionListener<K, V>   │
//!   │   stats: hits / misses / inserts / updates / evictions           │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations Flow
//!
//! ```text
//!   INSERT new item (map full, max_size = 3)
//!   ═══════════════════════════════════════════════════════════════════
//!
//!   Before:  head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!
//!   insert(D):
//!     1. Link [D] at tail (newest)
//!     2. len 4 > max_size 3: pop [A] from head
//!     3. listener.on_evict(&A, &a)
//!
//!   After:   head ──► [B] ◄──► [C] ◄──► [D] ◄── tail
//!
//!   GET existing item
//!   ═══════════════════════════════════════════════════════════════════
//!
//!   get(B):  head ──► [C] ◄──► [D] ◄──► [B] ◄── tail
//!
//!   PEEK never reorders.
//! ```
//!
//! ## Method Summary
//!
//! | Method            | Complexity | Description                             |
//! |-------------------|------------|-----------------------------------------|
//! | `new(max_size)`   | O(1)       | Create map; `max_size == 0` keeps nothing |
//! | `try_new`         | O(1)       | Like `new` but rejects `max_size == 0`  |
//! | `insert(k, v)`    | O(1)*      | Insert or update, may evict eldest      |
//! | `get(&k)`         | O(1)       | Get value, moves to newest              |
//! | `peek(&k)`        | O(1)       | Get value without reordering            |
//! | `remove(&k)`      | O(1)       | Remove entry (not reported as eviction) |
//! | `set_max_size(n)` | O(k)       | Change bound, evicting k entries        |
//! | `stats()`         | O(1)       | Counters snapshot                       |
//!
//! ## Example Usage
//!
//! ```
//! use commonskit::map::LruMap;
//!
//! let mut evicted = Vec::new();
//! {
//!     let mut map = LruMap::with_listener(2, |k: &u32, _v: &&str| evicted.push(*k));
//!     map.insert(1, "alpha");
//!     map.insert(2, "beta");
//!     map.get(&1);
//!     map.insert(3, "gamma");
//!     assert!(!map.contains_key(&2));
//!     assert_eq!(map.len(), 2);
//! }
//! assert_eq!(evicted, vec![2]);
//! ```
//!
//! ## Thread Safety
//!
//! - `LruMap`: **NOT thread-safe**; even `get` mutates recency order.
//! - `ConcurrentLruMap`: thread-safe wrapper via `parking_lot::Mutex`.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use crate::error::ConfigError;
use crate::map::linked::{Iter, LinkedMap};
use crate::traits::{EvictionListener, Length, NoopListener};

/// Point-in-time counters for an [`LruMap`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LruMapStats {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub updates: u64,
    pub evictions: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub max_size: usize,
}

impl LruMapStats {
    /// Fraction of `get` calls that found their key; `0.0` before any lookup.
    pub fn hit_ratio(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Counters {
    hits: u64,
    misses: u64,
    inserts: u64,
    updates: u64,
    evictions: u64,
}

/// Access-ordered map bounded by `max_size`, evicting the eldest entry.
pub struct LruMap<K, V, L = NoopListener> {
    pub(crate) entries: LinkedMap<K, V>,
    max_size: usize,
    listener: L,
    counters: Counters,
}

pub(crate) fn check_max_size(max_size: usize) -> Result<(), ConfigError> {
    if max_size == 0 {
        return Err(ConfigError::new("max_size must be > 0"));
    }
    Ok(())
}

impl<K, V> LruMap<K, V, NoopListener>
where
    K: Eq + Hash + Clone,
{
    /// Creates a map holding at most `max_size` entries.
    ///
    /// A `max_size` of 0 creates a map that keeps nothing: every insert is
    /// evicted immediately.
    ///
    /// # Example
    /// ```
    /// use commonskit::map::LruMap;
    ///
    /// let map: LruMap<u32, String> = LruMap::new(100);
    /// assert_eq!(map.max_size(), 100);
    /// ```
    pub fn new(max_size: usize) -> Self {
        Self::with_listener(max_size, NoopListener)
    }

    /// Fallible constructor for user-configured sizes; rejects `max_size == 0`.
    pub fn try_new(max_size: usize) -> Result<Self, ConfigError> {
        Self::try_with_listener(max_size, NoopListener)
    }
}

impl<K, V, L> LruMap<K, V, L>
where
    K: Eq + Hash + Clone,
    L: EvictionListener<K, V>,
{
    /// Creates a bounded map reporting evictions to `listener`.
    pub fn with_listener(max_size: usize, listener: L) -> Self {
        Self::from_parts(max_size, 0, true, listener)
    }

    pub fn try_with_listener(max_size: usize, listener: L) -> Result<Self, ConfigError> {
        check_max_size(max_size)?;
        Ok(Self::with_listener(max_size, listener))
    }

    /// `access_order == false` keeps insertion order, so overflow drops the
    /// oldest insert instead of the least recently used entry.
    pub(crate) fn from_parts(
        max_size: usize,
        initial_capacity: usize,
        access_order: bool,
        listener: L,
    ) -> Self {
        Self {
            entries: LinkedMap::with_capacity_and_order(initial_capacity.min(max_size), access_order),
            max_size,
            listener,
            counters: Counters::default(),
        }
    }

    /// Inserts or updates `key`, then evicts eldest entries while over `max_size`.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.entries.insert(key, value);
        if previous.is_some() {
            self.counters.updates += 1;
        } else {
            self.counters.inserts += 1;
        }
        self.evict_overflow();
        previous
    }

    /// Looks up `key` and marks it most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.entries.contains_key(key) {
            self.counters.hits += 1;
            self.entries.get(key)
        } else {
            self.counters.misses += 1;
            None
        }
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.entries.contains_key(key) {
            self.counters.hits += 1;
            self.entries.get_mut(key)
        } else {
            self.counters.misses += 1;
            None
        }
    }

    /// Looks up `key` without touching recency order or counters.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.peek(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Marks `key` most recently used without returning it.
    pub fn touch<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.touch(key)
    }

    /// Removes `key`. Explicit removal is not reported to the listener.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key)
    }

    /// Removes and returns the least recently used entry without notifying.
    pub fn pop_eldest(&mut self) -> Option<(K, V)> {
        self.entries.pop_eldest()
    }

    /// Returns the least recently used entry.
    pub fn eldest(&self) -> Option<(&K, &V)> {
        self.entries.eldest()
    }

    /// Position of `key` in recency order (0 = most recently used).
    pub fn recency_rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.entries.contains_key(key) {
            return None;
        }
        let position = self.entries.keys().position(|k| <K as Borrow<Q>>::borrow(k) == key)?;
        Some(self.entries.len() - 1 - position)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// `false` only for maps built with `LruMapBuilder::access_order(false)`.
    pub fn is_access_ordered(&self) -> bool {
        self.entries.is_access_ordered()
    }

    /// Changes the bound; shrinking evicts eldest entries immediately.
    pub fn set_max_size(&mut self, max_size: usize) -> Result<(), ConfigError> {
        check_max_size(max_size)?;
        self.max_size = max_size;
        self.evict_overflow();
        Ok(())
    }

    /// Drops every entry. Clearing is not reported as eviction.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates from least to most recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn stats(&self) -> LruMapStats {
        LruMapStats {
            hits: self.counters.hits,
            misses: self.counters.misses,
            inserts: self.counters.inserts,
            updates: self.counters.updates,
            evictions: self.counters.evictions,
            len: self.entries.len(),
            max_size: self.max_size,
        }
    }

    pub fn reset_stats(&mut self) {
        self.counters = Counters::default();
    }

    /// Removes `key` and reports it to the listener as an eviction.
    pub(crate) fn evict_key<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.entries.remove_entry(key) {
            Some((key, value)) => {
                self.notify(&key, &value);
                true
            },
            None => false,
        }
    }

    fn evict_overflow(&mut self) {
        while self.entries.len() > self.max_size {
            match self.entries.pop_eldest() {
                Some((key, value)) => self.notify(&key, &value),
                None => break,
            }
        }
    }

    fn notify(&mut self, key: &K, value: &V) {
        self.counters.evictions += 1;
        self.listener.on_evict(key, value);
    }
}

impl<K, V, L> Length for LruMap<K, V, L> {
    fn length(&self) -> usize {
        self.entries.length()
    }
}

impl<K, V, L> fmt::Debug for LruMap<K, V, L>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruMap")
            .field("max_size", &self.max_size)
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order<K: Clone, V, L>(map: &LruMap<K, V, L>) -> Vec<K> {
        map.entries.keys().cloned().collect()
    }

    // ==============================================
    // Construction
    // ==============================================

    #[test]
    fn try_new_rejects_zero() {
        let err = LruMap::<u32, u32>::try_new(0).unwrap_err();
        assert_eq!(err.message(), "max_size must be > 0");
        assert!(LruMap::<u32, u32>::try_new(1).is_ok());
    }

    #[test]
    fn zero_max_size_keeps_nothing() {
        let mut evicted = 0;
        let mut map = LruMap::with_listener(0, |_: &u32, _: &u32| evicted += 1);
        assert_eq!(map.insert(1, 1), None);
        assert!(map.is_empty());
        assert_eq!(map.stats().evictions, 1);
        drop(map);
        assert_eq!(evicted, 1);
    }

    // ==============================================
    // Eviction
    // ==============================================

    #[test]
    fn evicts_least_recently_used() {
        let mut map = LruMap::new(3);
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("c", 3);
        map.get("a");
        map.insert("d", 4);

        assert!(!map.contains_key("b"));
        assert_eq!(order(&map), vec!["c", "a", "d"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn update_refreshes_recency() {
        let mut map = LruMap::new(2);
        map.insert(1, "one");
        map.insert(2, "two");
        assert_eq!(map.insert(1, "uno"), Some("one"));
        map.insert(3, "three");
        assert!(map.contains_key(&1));
        assert!(!map.contains_key(&2));
    }

    #[test]
    fn peek_does_not_protect_from_eviction() {
        let mut map = LruMap::new(2);
        map.insert(1, ());
        map.insert(2, ());
        assert_eq!(map.peek(&1), Some(&()));
        map.insert(3, ());
        assert!(!map.contains_key(&1));
    }

    #[test]
    fn listener_sees_each_evicted_entry() {
        let mut seen = Vec::new();
        {
            let mut map = LruMap::with_listener(2, |k: &i32, v: &String| seen.push((*k, v.clone())));
            for i in 0..5 {
                map.insert(i, format!("v{}", i));
            }
        }
        assert_eq!(
            seen,
            vec![(0, "v0".to_string()), (1, "v1".to_string()), (2, "v2".to_string())]
        );
    }

    #[test]
    fn remove_and_clear_are_not_evictions() {
        let mut map = LruMap::new(4);
        map.insert(1, 1);
        map.insert(2, 2);
        assert_eq!(map.remove(&1), Some(1));
        map.clear();
        assert_eq!(map.stats().evictions, 0);
        assert!(map.is_empty());
    }

    #[test]
    fn shrinking_max_size_evicts_eldest() {
        let mut map = LruMap::new(5);
        for i in 0..5 {
            map.insert(i, i);
        }
        map.set_max_size(2).unwrap();
        assert_eq!(order(&map), vec![3, 4]);
        assert_eq!(map.stats().evictions, 3);
        assert!(map.set_max_size(0).is_err());
        assert_eq!(map.max_size(), 2);
    }

    // ==============================================
    // Recency queries
    // ==============================================

    #[test]
    fn recency_rank_counts_from_most_recent() {
        let mut map = LruMap::new(3);
        map.insert('a', 0);
        map.insert('b', 0);
        map.insert('c', 0);
        assert_eq!(map.recency_rank(&'c'), Some(0));
        assert_eq!(map.recency_rank(&'a'), Some(2));
        map.touch(&'a');
        assert_eq!(map.recency_rank(&'a'), Some(0));
        assert_eq!(map.recency_rank(&'z'), None);
        assert_eq!(map.eldest(), Some((&'b', &0)));
    }

    #[test]
    fn pop_eldest_is_silent() {
        let mut count = 0;
        let mut map = LruMap::with_listener(3, |_: &u8, _: &u8| count += 1);
        map.insert(1, 1);
        map.insert(2, 2);
        assert_eq!(map.pop_eldest(), Some((1, 1)));
        drop(map);
        assert_eq!(count, 0);
    }

    // ==============================================
    // Stats
    // ==============================================

    #[test]
    fn stats_track_hits_and_misses() {
        let mut map = LruMap::new(2);
        map.insert(1, 10);
        map.insert(1, 11);
        map.get(&1);
        map.get(&2);
        if let Some(v) = map.get_mut(&1) {
            *v += 1;
        }
        let stats = map.stats();
        assert_eq!(stats.inserts, 1);
        assert_eq!(stats.updates, 1);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.len, 1);
        assert_eq!(stats.max_size, 2);
        assert!((stats.hit_ratio() - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(map.peek(&1), Some(&12));

        map.reset_stats();
        assert_eq!(map.stats().hits, 0);
        assert_eq!(LruMapStats::default().hit_ratio(), 0.0);
    }
}
