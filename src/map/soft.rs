//! # Soft LRU Map
//!
//! An [`LruMap`] whose values are shared as `Arc<V>`. On top of the size
//! bound, the map can give memory back on demand: [`SoftLruMap::reclaim`]
//! drops every entry whose value is referenced only by the map, while values
//! a caller still holds stay cached.
//!
//! ```text
//!   entries (eldest ──► newest)
//!
//!   [A: Arc strong=1]  [B: Arc strong=2]  [C: Arc strong=1]
//!        reclaimable        held by caller      reclaimable
//!
//!   reclaim_to(2): drop A (eldest reclaimable) ──► len 2, stop
//!   reclaim():     drop A and C                ──► only B remains
//! ```
//!
//! Reclaimed entries go to the listener like overflow evictions.
//!
//! ## Example Usage
//!
//! ```
//! use commonskit::map::SoftLruMap;
//!
//! let mut map = SoftLruMap::new(8);
//! map.insert("config", vec![1, 2, 3]);
//! map.insert("scratch", vec![0; 1024]);
//!
//! let held = map.get("config").unwrap();
//! assert_eq!(map.reclaim(), 1);
//! assert!(map.contains_key("config"));
//! assert!(!map.contains_key("scratch"));
//! drop(held);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::map::lru::{LruMap, LruMapStats};
use crate::traits::{EvictionListener, Length, NoopListener};

/// Size-bounded LRU map with on-demand release of unreferenced values.
pub struct SoftLruMap<K, V, L = NoopListener> {
    inner: LruMap<K, Arc<V>, L>,
}

impl<K, V> SoftLruMap<K, V, NoopListener>
where
    K: Eq + Hash + Clone,
{
    pub fn new(max_size: usize) -> Self {
        Self {
            inner: LruMap::with_listener(max_size, NoopListener),
        }
    }

    pub fn try_new(max_size: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: LruMap::try_with_listener(max_size, NoopListener)?,
        })
    }
}

impl<K, V, L> SoftLruMap<K, V, L>
where
    K: Eq + Hash + Clone,
    L: EvictionListener<K, Arc<V>>,
{
    pub fn with_listener(max_size: usize, listener: L) -> Self {
        Self {
            inner: LruMap::with_listener(max_size, listener),
        }
    }

    pub fn try_with_listener(max_size: usize, listener: L) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: LruMap::try_with_listener(max_size, listener)?,
        })
    }

    pub(crate) fn from_lru(inner: LruMap<K, Arc<V>, L>) -> Self {
        Self { inner }
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<Arc<V>> {
        self.inner.insert(key, Arc::new(value))
    }

    /// Inserts a value the caller may already share.
    pub fn insert_arc(&mut self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        self.inner.insert(key, value)
    }

    /// Returns a shared handle and marks `key` most recently used.
    ///
    /// Holding the handle keeps the entry out of `reclaim`.
    pub fn get<Q>(&mut self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key).map(Arc::clone)
    }

    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.peek(key).map(|value| value.as_ref())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key)
    }

    /// Returns `true` if something outside the map holds the value for `key`.
    pub fn is_referenced<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner
            .peek(key)
            .is_some_and(|value| Arc::strong_count(value) > 1)
    }

    /// Drops every entry whose value only the map references.
    pub fn reclaim(&mut self) -> usize {
        self.reclaim_to(0)
    }

    /// Drops unreferenced entries, eldest first, until `len() <= target_len`.
    ///
    /// Returns the number of entries dropped; stops early when every remaining
    /// value is held elsewhere.
    pub fn reclaim_to(&mut self, target_len: usize) -> usize {
        let excess = self.inner.len().saturating_sub(target_len);
        if excess == 0 {
            return 0;
        }

        let victims: Vec<K> = self
            .inner
            .entries
            .iter()
            .filter(|(_, value)| Arc::strong_count(value) == 1)
            .map(|(key, _)| key.clone())
            .take(excess)
            .collect();

        let mut reclaimed = 0;
        for key in &victims {
            if self.inner.evict_key(key) {
                reclaimed += 1;
            }
        }
        if reclaimed > 0 {
            log::debug!(
                "reclaimed {} unreferenced entries ({} remain)",
                reclaimed,
                self.inner.len()
            );
        }
        reclaimed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.inner.max_size()
    }

    pub fn set_max_size(&mut self, max_size: usize) -> Result<(), ConfigError> {
        self.inner.set_max_size(max_size)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Iterates from least to most recently used.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.inner.iter().map(|(key, value)| (key, value.as_ref()))
    }

    pub fn listener(&self) -> &L {
        self.inner.listener()
    }

    pub fn stats(&self) -> LruMapStats {
        self.inner.stats()
    }
}

impl<K, V, L> Length for SoftLruMap<K, V, L> {
    fn length(&self) -> usize {
        self.inner.length()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, L> fmt::Debug for SoftLruMap<K, V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoftLruMap")
            .field("inner", &self.inner)
            .finish()
    }
}
