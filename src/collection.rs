//! Collection helpers: null-safe size checks, constructors for list/set/map
//! variants, sorting, set algebra, and small functional utilities.
//!
//! ## Key Components
//!
//! | Group          | Functions                                                   |
//! |----------------|-------------------------------------------------------------|
//! | Size           | `size`, `is_empty`, `is_not_empty`                          |
//! | Constructors   | `new_list`, `new_set`, `new_sorted_set`, `new_linked_set`   |
//! | Map builders   | `new_map`, `new_ordered_map`, `new_sorted_map`, `zip_to_map`|
//! | Sorting        | `sorted`, `sorted_desc`, `sorted_by`, `sorted_by_key`       |
//! | Set algebra    | `union`, `intersection`, `difference`, `symmetric_difference` |
//! | Functional     | `filter`, `map`, `find`, `distinct`, `partition`, `group_by`|
//! | Map helpers    | `map_get_or`, `invert`, `sort_by_value`                     |
//!
//! Set algebra works on any iterable and returns a `Vec` in first-seen order
//! without duplicates, so results are deterministic.
//!
//! ## Example Usage
//!
//! ```
//! use commonskit::collection;
//!
//! let map = collection::new_ordered_map(&["b", "a", "c"], &[2, 1, 3]).unwrap();
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
//!
//! assert_eq!(collection::union([1, 2, 2], [3, 1]), vec![1, 2, 3]);
//! assert_eq!(collection::intersection([4, 1, 2], [2, 4]), vec![4, 2]);
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxHashSet;

use crate::container::LinkedSet;
use crate::error::ArgumentError;
use crate::map::LinkedMap;
use crate::traits::Length;

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// Element count, 0 for `None`.
#[inline]
pub fn size<C: Length + ?Sized>(collection: Option<&C>) -> usize {
    collection.map_or(0, Length::length)
}

#[inline]
pub fn is_empty<C: Length + ?Sized>(collection: Option<&C>) -> bool {
    size(collection) == 0
}

#[inline]
pub fn is_not_empty<C: Length + ?Sized>(collection: Option<&C>) -> bool {
    !is_empty(collection)
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

pub fn new_list<T>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().collect()
}

pub fn new_set<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> HashSet<T> {
    items.into_iter().collect()
}

pub fn new_sorted_set<T: Ord>(items: impl IntoIterator<Item = T>) -> BTreeSet<T> {
    items.into_iter().collect()
}

/// Set that iterates in insertion order.
pub fn new_linked_set<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> LinkedSet<T> {
    items.into_iter().collect()
}

fn check_lengths(keys: usize, values: usize) -> Result<(), ArgumentError> {
    if keys != values {
        return Err(ArgumentError::LengthMismatch { keys, values });
    }
    Ok(())
}

/// Builds a hash map from parallel slices.
///
/// # Errors
///
/// [`ArgumentError::LengthMismatch`] when the slices differ in length.
pub fn new_map<K, V>(keys: &[K], values: &[V]) -> Result<HashMap<K, V>, ArgumentError>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    check_lengths(keys.len(), values.len())?;
    Ok(keys.iter().cloned().zip(values.iter().cloned()).collect())
}

/// Builds a map iterating in the order of `keys`.
///
/// A repeated key keeps its first position and takes the later value.
///
/// # Errors
///
/// [`ArgumentError::LengthMismatch`] when the slices differ in length.
pub fn new_ordered_map<K, V>(keys: &[K], values: &[V]) -> Result<LinkedMap<K, V>, ArgumentError>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    check_lengths(keys.len(), values.len())?;
    Ok(keys.iter().cloned().zip(values.iter().cloned()).collect())
}

/// Builds a map iterating in key order.
///
/// # Errors
///
/// [`ArgumentError::LengthMismatch`] when the slices differ in length.
pub fn new_sorted_map<K, V>(keys: &[K], values: &[V]) -> Result<BTreeMap<K, V>, ArgumentError>
where
    K: Ord + Clone,
    V: Clone,
{
    check_lengths(keys.len(), values.len())?;
    Ok(keys.iter().cloned().zip(values.iter().cloned()).collect())
}

/// Collects already paired entries, keeping their order.
pub fn zip_to_map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> LinkedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    pairs.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

pub fn sorted<T: Ord>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = items.into_iter().collect();
    out.sort();
    out
}

pub fn sorted_desc<T: Ord>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = items.into_iter().collect();
    out.sort_by(|a, b| b.cmp(a));
    out
}

/// Stable sort with a comparator.
pub fn sorted_by<T, F>(items: impl IntoIterator<Item = T>, compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out: Vec<T> = items.into_iter().collect();
    out.sort_by(compare);
    out
}

pub fn sorted_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut out: Vec<T> = items.into_iter().collect();
    out.sort_by_key(key);
    out
}

// ---------------------------------------------------------------------------
// Set algebra
// ---------------------------------------------------------------------------

fn push_unique<T: Eq + Hash + Clone>(seen: &mut FxHashSet<T>, out: &mut Vec<T>, item: T) {
    if seen.insert(item.clone()) {
        out.push(item);
    }
}

/// Items from `a` then `b`, first occurrence only.
pub fn union<T, A, B>(a: A, b: B) -> Vec<T>
where
    T: Eq + Hash + Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for item in a.into_iter().chain(b) {
        push_unique(&mut seen, &mut out, item);
    }
    out
}

/// Items of `a` also present in `b`, in `a`'s order.
pub fn intersection<T, A, B>(a: A, b: B) -> Vec<T>
where
    T: Eq + Hash + Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let other: FxHashSet<T> = b.into_iter().collect();
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for item in a.into_iter().filter(|item| other.contains(item)) {
        push_unique(&mut seen, &mut out, item);
    }
    out
}

/// Items of `a` absent from `b`, in `a`'s order.
pub fn difference<T, A, B>(a: A, b: B) -> Vec<T>
where
    T: Eq + Hash + Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let other: FxHashSet<T> = b.into_iter().collect();
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for item in a.into_iter().filter(|item| !other.contains(item)) {
        push_unique(&mut seen, &mut out, item);
    }
    out
}

/// Items in exactly one of `a` and `b`: `a`'s first, then `b`'s.
pub fn symmetric_difference<T, A, B>(a: A, b: B) -> Vec<T>
where
    T: Eq + Hash + Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let left: Vec<T> = a.into_iter().collect();
    let right: Vec<T> = b.into_iter().collect();
    let left_set: FxHashSet<&T> = left.iter().collect();
    let right_set: FxHashSet<&T> = right.iter().collect();

    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for item in left.iter().filter(|item| !right_set.contains(item)) {
        push_unique(&mut seen, &mut out, item.clone());
    }
    for item in right.iter().filter(|item| !left_set.contains(item)) {
        push_unique(&mut seen, &mut out, item.clone());
    }
    out
}

pub fn contains_any<T, S>(haystack: &HashSet<T, S>, needles: impl IntoIterator<Item = T>) -> bool
where
    T: Eq + Hash,
    S: BuildHasher,
{
    needles.into_iter().any(|item| haystack.contains(&item))
}

/// `true` when every needle is present; vacuously `true` for no needles.
pub fn contains_all<T, S>(haystack: &HashSet<T, S>, needles: impl IntoIterator<Item = T>) -> bool
where
    T: Eq + Hash,
    S: BuildHasher,
{
    needles.into_iter().all(|item| haystack.contains(&item))
}

pub fn is_disjoint<T, A, B>(a: A, b: B) -> bool
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let left: FxHashSet<T> = a.into_iter().collect();
    !b.into_iter().any(|item| left.contains(&item))
}

// ---------------------------------------------------------------------------
// Functional helpers
// ---------------------------------------------------------------------------

pub fn filter<T, F>(items: impl IntoIterator<Item = T>, predicate: F) -> Vec<T>
where
    F: FnMut(&T) -> bool,
{
    items.into_iter().filter(predicate).collect()
}

pub fn map<T, U, F>(items: impl IntoIterator<Item = T>, f: F) -> Vec<U>
where
    F: FnMut(T) -> U,
{
    items.into_iter().map(f).collect()
}

pub fn find<T, F>(items: impl IntoIterator<Item = T>, mut predicate: F) -> Option<T>
where
    F: FnMut(&T) -> bool,
{
    items.into_iter().find(|item| predicate(item))
}

pub fn first<T>(items: impl IntoIterator<Item = T>) -> Option<T> {
    items.into_iter().next()
}

pub fn last<T>(items: impl IntoIterator<Item = T>) -> Option<T> {
    items.into_iter().last()
}

pub fn get_or<T: Clone>(list: Option<&[T]>, index: usize, default: T) -> T {
    crate::array::get_or(list, index, default)
}

/// Drops repeated items, keeping the first occurrence.
pub fn distinct<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for item in items {
        push_unique(&mut seen, &mut out, item);
    }
    out
}

pub fn flatten<T, I>(nested: impl IntoIterator<Item = I>) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    nested.into_iter().flatten().collect()
}

/// Splits `items` into consecutive chunks of `chunk_size`; the last may be shorter.
///
/// # Errors
///
/// [`ArgumentError::InvalidArgument`] when `chunk_size == 0`.
pub fn partition<T>(items: impl IntoIterator<Item = T>, chunk_size: usize) -> Result<Vec<Vec<T>>, ArgumentError> {
    if chunk_size == 0 {
        return Err(ArgumentError::invalid("chunk size must be > 0"));
    }
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(chunk_size);
    for item in items {
        current.push(item);
        if current.len() == chunk_size {
            out.push(std::mem::replace(&mut current, Vec::with_capacity(chunk_size)));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    Ok(out)
}

/// Groups items by key; groups appear in first-seen key order.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key_fn: F) -> LinkedMap<K, Vec<T>>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut groups: LinkedMap<K, Vec<T>> = LinkedMap::new();
    for item in items {
        let key = key_fn(&item);
        match groups.get_mut(&key) {
            Some(group) => group.push(item),
            None => {
                groups.insert(key, vec![item]);
            },
        }
    }
    groups
}

/// Occurrence count per item, in first-seen order.
pub fn frequencies<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> LinkedMap<T, usize> {
    let mut counts: LinkedMap<T, usize> = LinkedMap::new();
    for item in items {
        match counts.get_mut(&item) {
            Some(count) => *count += 1,
            None => {
                counts.insert(item, 1);
            },
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Map helpers
// ---------------------------------------------------------------------------

pub fn map_get_or<K, V, S>(map: Option<&HashMap<K, V, S>>, key: &K, default: V) -> V
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    map.and_then(|m| m.get(key)).cloned().unwrap_or(default)
}

/// Swaps keys and values; when values repeat, the last key wins.
pub fn invert<K, V, S>(map: &HashMap<K, V, S>) -> HashMap<V, K>
where
    K: Clone,
    V: Eq + Hash + Clone,
{
    map.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
}

/// Entries ordered by value ascending; equal values keep key order.
pub fn sort_by_value<K, V>(map: &BTreeMap<K, V>) -> LinkedMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Ord + Clone,
{
    let mut entries: Vec<(K, V)> = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    entries.sort_by(|a, b| a.1.cmp(&b.1));
    entries.into_iter().collect()
}
