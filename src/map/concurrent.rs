//! Thread-safe [`LruMap`] wrapper.
//!
//! Every operation takes a single `parking_lot::Mutex`; `get` needs exclusive
//! access anyway because it reorders recency.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use commonskit::map::ConcurrentLruMap;
//!
//! let map = Arc::new(ConcurrentLruMap::new(64));
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let map = Arc::clone(&map);
//!         thread::spawn(move || {
//!             for i in 0..16 {
//!                 map.insert(t * 16 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(map.len(), 64);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::error::ConfigError;
use crate::map::lru::{LruMap, LruMapStats};
use crate::traits::{EvictionListener, NoopListener};

pub struct ConcurrentLruMap<K, V, L = NoopListener> {
    inner: Mutex<LruMap<K, V, L>>,
}

impl<K, V> ConcurrentLruMap<K, V, NoopListener>
where
    K: Eq + Hash + Clone,
{
    pub fn new(max_size: usize) -> Self {
        Self::from_map(LruMap::new(max_size))
    }

    pub fn try_new(max_size: usize) -> Result<Self, ConfigError> {
        LruMap::try_new(max_size).map(Self::from_map)
    }
}

impl<K, V, L> ConcurrentLruMap<K, V, L>
where
    K: Eq + Hash + Clone,
    L: EvictionListener<K, V>,
{
    pub fn with_listener(max_size: usize, listener: L) -> Self {
        Self::from_map(LruMap::with_listener(max_size, listener))
    }

    pub fn from_map(map: LruMap<K, V, L>) -> Self {
        Self {
            inner: Mutex::new(map),
        }
    }

    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().insert(key, value)
    }

    /// Clones the value out and marks `key` most recently used.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Returns the cached value or inserts the one produced by `init`.
    ///
    /// `init` runs under the lock.
    pub fn get_or_insert_with<F>(&self, key: K, init: F) -> V
    where
        V: Clone,
        F: FnOnce() -> V,
    {
        let mut map = self.inner.lock();
        if let Some(value) = map.get(&key) {
            return value.clone();
        }
        let value = init();
        map.insert(key, value.clone());
        value
    }

    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains_key(key)
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.inner.lock().max_size()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn stats(&self) -> LruMapStats {
        self.inner.lock().stats()
    }

    /// Runs `f` with exclusive access to the underlying map.
    pub fn with_map<R>(&self, f: impl FnOnce(&mut LruMap<K, V, L>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn into_inner(self) -> LruMap<K, V, L> {
        self.inner.into_inner()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, L> fmt::Debug for ConcurrentLruMap<K, V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(map) => f.debug_struct("ConcurrentLruMap").field("map", &*map).finish(),
            None => f.write_str("ConcurrentLruMap { <locked> }"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn basic_ops() {
        let map = ConcurrentLruMap::new(2);
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.get("a"), Some(1));
        map.insert("c", 3);
        assert!(!map.contains_key("b"));
        assert_eq!(map.peek("c"), Some(3));
        assert_eq!(map.remove("c"), Some(3));
        assert_eq!(map.len(), 1);
        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn get_or_insert_with_runs_init_once() {
        let map = ConcurrentLruMap::new(4);
        let mut calls = 0;
        let v1 = map.get_or_insert_with(7, || {
            calls += 1;
            "seven".to_string()
        });
        let v2 = map.get_or_insert_with(7, || {
            calls += 1;
            "other".to_string()
        });
        assert_eq!(v1, "seven");
        assert_eq!(v2, "seven");
        assert_eq!(calls, 1);
    }

    #[test]
    fn bounded_under_contention() {
        let map = Arc::new(ConcurrentLruMap::new(32));
        let handles: Vec<_> = (0..8u32)
            .map(|t| {
                let map = Arc::clone(&map);
                thread::spawn(move || {
                    for i in 0..500u32 {
                        map.insert(t * 1000 + i, i);
                        let _ = map.get(&(t * 1000 + i / 2));
                        assert!(map.len() <= 32);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let stats = map.stats();
        assert_eq!(stats.len, 32);
        assert_eq!(stats.inserts, 8 * 500);
        assert_eq!(stats.evictions, 8 * 500 - 32);
    }

    #[test]
    fn with_map_and_into_inner() {
        let map = ConcurrentLruMap::new(3);
        map.insert(1, 1);
        let eldest = map.with_map(|m| m.eldest().map(|(k, v)| (*k, *v)));
        assert_eq!(eldest, Some((1, 1)));
        let inner = map.into_inner();
        assert_eq!(inner.len(), 1);
    }
}
