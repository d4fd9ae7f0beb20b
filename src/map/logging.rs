//! Eviction listener that reports dropped entries through the `log` facade.
//!
//! ```
//! use commonskit::map::{LoggingListener, LoggingLruMap};
//!
//! let mut map: LoggingLruMap<u32, &str> = LoggingLruMap::with_listener(1, LoggingListener::new("sessions"));
//! map.insert(1, "a");
//! map.insert(2, "b"); // logs: sessions: evicted eldest entry 1 (max size 1)
//! assert_eq!(map.listener().evicted(), 1);
//! ```

use std::fmt;

use crate::map::lru::LruMap;
use crate::traits::EvictionListener;

/// LRU map that logs a warning for every eviction.
pub type LoggingLruMap<K, V> = LruMap<K, V, LoggingListener>;

/// Logs each eviction at `warn` level, tagged with the map's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingListener {
    name: String,
    max_size: Option<usize>,
    evicted: u64,
}

impl LoggingListener {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_size: None,
            evicted: 0,
        }
    }

    /// Includes the configured bound in every log line.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of evictions logged so far.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

impl Default for LoggingListener {
    fn default() -> Self {
        Self::new("lru-map")
    }
}

impl<K: fmt::Debug, V> EvictionListener<K, V> for LoggingListener {
    fn on_evict(&mut self, key: &K, _value: &V) {
        self.evicted += 1;
        match self.max_size {
            Some(max) => log::warn!(
                "{}: evicted eldest entry {:?} (max size {})",
                self.name,
                key,
                max
            ),
            None => log::warn!("{}: evicted eldest entry {:?}", self.name, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_evictions() {
        let mut map: LoggingLruMap<u32, u32> =
            LruMap::with_listener(2, LoggingListener::new("test").with_max_size(2));
        for i in 0..5 {
            map.insert(i, i);
        }
        assert_eq!(map.listener().evicted(), 3);
        assert_eq!(map.listener().name(), "test");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn default_name() {
        assert_eq!(LoggingListener::default().name(), "lru-map");
    }
}
