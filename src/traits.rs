//! # Shared Traits
//!
//! Two seams run through the crate:
//!
//! | Trait                  | Purpose                                                |
//! |------------------------|--------------------------------------------------------|
//! | [`Length`]             | Element count for any container, so `size(None) == 0`  |
//! |                        | works the same for slices, maps, sets and strings      |
//! | [`EvictionListener`]   | Hook called by eviction maps for every dropped entry   |
//!
//! ## Example Usage
//!
//! ```
//! use commonskit::collection;
//! use commonskit::map::LruMap;
//! use commonskit::traits::EvictionListener;
//!
//! let v = vec![1, 2, 3];
//! assert_eq!(collection::size(Some(&v)), 3);
//! assert_eq!(collection::size::<Vec<i32>>(None), 0);
//!
//! struct Count(usize);
//! impl EvictionListener<u32, &'static str> for Count {
//!     fn on_evict(&mut self, _key: &u32, _value: &&'static str) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut map = LruMap::with_listener(1, Count(0));
//! map.insert(1, "a");
//! map.insert(2, "b");
//! assert_eq!(map.listener().0, 1);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

// ---------------------------------------------------------------------------
// Length
// ---------------------------------------------------------------------------

/// Number of elements held by a container.
pub trait Length {
    fn length(&self) -> usize;

    fn is_void(&self) -> bool {
        self.length() == 0
    }
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Length for HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

/// Counts characters, not bytes.
impl Length for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<C: Length + ?Sized> Length for &C {
    fn length(&self) -> usize {
        (**self).length()
    }
}

// ---------------------------------------------------------------------------
// EvictionListener
// ---------------------------------------------------------------------------

/// Receives every entry an eviction map drops on overflow or reclaim.
///
/// Explicit `remove` calls are not evictions and are not reported.
pub trait EvictionListener<K, V> {
    fn on_evict(&mut self, key: &K, value: &V);
}

/// Listener that ignores evictions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopListener;

impl<K, V> EvictionListener<K, V> for NoopListener {
    #[inline]
    fn on_evict(&mut self, _key: &K, _value: &V) {}
}

impl<K, V, F> EvictionListener<K, V> for F
where
    F: FnMut(&K, &V),
{
    #[inline]
    fn on_evict(&mut self, key: &K, value: &V) {
        self(key, value)
    }
}
