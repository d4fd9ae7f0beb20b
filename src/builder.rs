//! Builder for the bounded map family.
//!
//! One configuration produces any of the eviction maps, so call sites can
//! switch between plain, logging, soft, and concurrent variants without
//! repeating size and naming parameters.
//!
//! | Terminal                      | Produces                         |
//! |-------------------------------|----------------------------------|
//! | `build()` / `try_build()`     | `LruMap<K, V>`                   |
//! | `build_with_listener(l)`      | `LruMap<K, V, L>`                |
//! | `build_logging()`             | `LoggingLruMap<K, V>`            |
//! | `build_soft()`                | `SoftLruMap<K, V>`               |
//! | `build_concurrent()`          | `ConcurrentLruMap<K, V>`         |
//!
//! `try_*` terminals reject `max_size == 0`; the others accept it and build a
//! map that keeps nothing.
//!
//! ## Example
//!
//! ```rust
//! use commonskit::builder::LruMapBuilder;
//!
//! let mut map = LruMapBuilder::new(2).name("sessions").build_logging::<u64, String>();
//! map.insert(1, "one".to_string());
//! map.insert(2, "two".to_string());
//! map.insert(3, "three".to_string());
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.listener().name(), "sessions");
//! assert_eq!(map.listener().evicted(), 1);
//! ```

use std::hash::Hash;
use std::sync::Arc;

use crate::error::ConfigError;
#[cfg(feature = "concurrency")]
use crate::map::ConcurrentLruMap;
use crate::map::lru::check_max_size;
use crate::map::{LoggingListener, LoggingLruMap, LruMap, SoftLruMap};
use crate::traits::{EvictionListener, NoopListener};

/// Builder for creating bounded map instances.
#[derive(Debug, Clone)]
pub struct LruMapBuilder {
    max_size: usize,
    name: Option<String>,
    initial_capacity: usize,
    access_order: bool,
}

impl LruMapBuilder {
    /// Create a new builder for maps holding at most `max_size` entries.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            name: None,
            initial_capacity: 0,
            access_order: true,
        }
    }

    /// Name used by `build_logging` in every log line.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Pre-allocates room for this many entries (capped at `max_size`).
    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// `false` evicts in insertion order (FIFO) instead of recency order.
    pub fn access_order(mut self, access_order: bool) -> Self {
        self.access_order = access_order;
        self
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_max_size(self.max_size)
    }

    /// Build a plain map.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commonskit::builder::LruMapBuilder;
    ///
    /// let mut fifo = LruMapBuilder::new(2).access_order(false).build::<u32, u32>();
    /// fifo.insert(1, 1);
    /// fifo.insert(2, 2);
    /// fifo.get(&1);
    /// fifo.insert(3, 3);
    /// assert!(!fifo.contains_key(&1));
    /// ```
    pub fn build<K, V>(self) -> LruMap<K, V>
    where
        K: Eq + Hash + Clone,
    {
        self.build_with_listener(NoopListener)
    }

    pub fn try_build<K, V>(self) -> Result<LruMap<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        self.validate()?;
        Ok(self.build())
    }

    pub fn build_with_listener<K, V, L>(self, listener: L) -> LruMap<K, V, L>
    where
        K: Eq + Hash + Clone,
        L: EvictionListener<K, V>,
    {
        LruMap::from_parts(self.max_size, self.initial_capacity, self.access_order, listener)
    }

    pub fn try_build_with_listener<K, V, L>(self, listener: L) -> Result<LruMap<K, V, L>, ConfigError>
    where
        K: Eq + Hash + Clone,
        L: EvictionListener<K, V>,
    {
        self.validate()?;
        Ok(self.build_with_listener(listener))
    }

    /// Build a map whose evictions are logged under the configured name.
    pub fn build_logging<K, V>(self) -> LoggingLruMap<K, V>
    where
        K: Eq + Hash + Clone + std::fmt::Debug,
    {
        let listener = match &self.name {
            Some(name) => LoggingListener::new(name.clone()),
            None => LoggingListener::default(),
        }
        .with_max_size(self.max_size);
        self.build_with_listener(listener)
    }

    pub fn build_soft<K, V>(self) -> SoftLruMap<K, V>
    where
        K: Eq + Hash + Clone,
    {
        SoftLruMap::from_lru(self.build_with_listener::<K, Arc<V>, _>(NoopListener))
    }

    pub fn try_build_soft<K, V>(self) -> Result<SoftLruMap<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        self.validate()?;
        Ok(self.build_soft())
    }

    #[cfg(feature = "concurrency")]
    pub fn build_concurrent<K, V>(self) -> ConcurrentLruMap<K, V>
    where
        K: Eq + Hash + Clone,
    {
        ConcurrentLruMap::from_map(self.build())
    }
}

impl Default for LruMapBuilder {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_respects_max_size() {
        let builder = LruMapBuilder::new(3).name("test").initial_capacity(16);

        let mut plain = builder.clone().build::<u32, u32>();
        let mut logging = builder.clone().build_logging::<u32, u32>();
        let mut soft = builder.clone().build_soft::<u32, u32>();
        for i in 0..10 {
            plain.insert(i, i);
            logging.insert(i, i);
            soft.insert(i, i);
        }
        assert_eq!(plain.len(), 3);
        assert_eq!(logging.len(), 3);
        assert_eq!(soft.len(), 3);
        assert_eq!(logging.listener().evicted(), 7);
        assert_eq!(logging.listener().name(), "test");
    }

    #[test]
    fn try_terminals_reject_zero() {
        assert!(LruMapBuilder::new(0).try_build::<u8, u8>().is_err());
        assert!(LruMapBuilder::new(0).try_build_soft::<u8, u8>().is_err());
        assert!(LruMapBuilder::new(0).try_build_with_listener::<u8, u8, _>(NoopListener).is_err());
        assert_eq!(LruMapBuilder::new(4).try_build::<u8, u8>().unwrap().max_size(), 4);
    }

    #[test]
    fn zero_size_keeps_nothing() {
        let mut map = LruMapBuilder::new(0).build::<u8, u8>();
        map.insert(1, 1);
        assert!(map.is_empty());
        assert_eq!(map.stats().evictions, 1);
    }

    #[test]
    fn insertion_order_evicts_oldest_insert() {
        let mut map = LruMapBuilder::new(2).access_order(false).build::<&str, u8>();
        assert!(!map.is_access_ordered());
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.get("a"), Some(&1));
        map.insert("c", 3);
        assert!(!map.contains_key("a"));
        assert!(map.contains_key("b"));
    }

    #[test]
    fn listener_and_default_name() {
        let mut seen = Vec::new();
        {
            let mut map = LruMapBuilder::new(1).build_with_listener(|k: &u8, _v: &u8| seen.push(*k));
            map.insert(1, 1);
            map.insert(2, 2);
        }
        assert_eq!(seen, vec![1]);

        let map = LruMapBuilder::default().build_logging::<u8, u8>();
        assert_eq!(map.listener().name(), "lru-map");
        assert_eq!(map.max_size(), 100);
    }

    #[test]
    fn listener_may_keep_static_keys() {
        let mut dropped: Vec<(&'static str, u32)> = Vec::new();
        {
            let mut map = LruMapBuilder::new(2).build_with_listener(|k: &&'static str, v: &u32| dropped.push((*k, *v)));
            for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
                map.insert(key, i as u32);
            }
        }
        assert_eq!(dropped, vec![("a", 0), ("b", 1)]);
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn concurrent_terminal() {
        let map = LruMapBuilder::new(2).build_concurrent::<u8, u8>();
        map.insert(1, 1);
        map.insert(2, 2);
        map.insert(3, 3);
        assert_eq!(map.len(), 2);
    }
}
