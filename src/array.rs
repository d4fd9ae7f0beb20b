//! Slice helpers.
//!
//! Missing input is `None`; every helper treats it as an empty slice unless
//! it documents otherwise. Results are fresh `Vec`s, never views into the
//! input.
//!
//! ```
//! use commonskit::array;
//!
//! let nums = [3, 1, 4, 1, 5];
//! assert_eq!(array::size(Some(&nums[..])), 5);
//! assert_eq!(array::size::<i32>(None), 0);
//! assert_eq!(array::index_of(Some(&nums[..]), &1), Some(1));
//! assert_eq!(array::last_index_of(Some(&nums[..]), &1), Some(3));
//! assert_eq!(array::concat(Some(&[1, 2][..]), None), vec![1, 2]);
//! ```

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::ArgumentError;

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

#[inline]
pub fn size<T>(arr: Option<&[T]>) -> usize {
    arr.map_or(0, <[T]>::len)
}

#[inline]
pub fn is_empty<T>(arr: Option<&[T]>) -> bool {
    size(arr) == 0
}

#[inline]
pub fn is_not_empty<T>(arr: Option<&[T]>) -> bool {
    !is_empty(arr)
}

// ---------------------------------------------------------------------------
// Copy / concat / slice
// ---------------------------------------------------------------------------

/// Returns a new allocation equal by value, or `None` for `None`.
pub fn get_copy<T: Clone>(arr: Option<&[T]>) -> Option<Vec<T>> {
    arr.map(<[T]>::to_vec)
}

/// Copies `arr` into a vector of exactly `new_len` elements, padding with `fill`.
pub fn copy_of<T: Clone>(arr: Option<&[T]>, new_len: usize, fill: T) -> Vec<T> {
    let src = arr.unwrap_or_default();
    let mut out = Vec::with_capacity(new_len);
    out.extend_from_slice(&src[..src.len().min(new_len)]);
    out.resize(new_len, fill);
    out
}

/// Copies `arr[from..to]`.
///
/// # Errors
///
/// [`ArgumentError::InvalidRange`] when `from > to` or `to > len`.
pub fn sub_array<T: Clone>(arr: Option<&[T]>, from: usize, to: usize) -> Result<Vec<T>, ArgumentError> {
    let src = arr.unwrap_or_default();
    if from > to || to > src.len() {
        return Err(ArgumentError::InvalidRange {
            from,
            to,
            len: src.len(),
        });
    }
    Ok(src[from..to].to_vec())
}

pub fn concat<T: Clone>(a: Option<&[T]>, b: Option<&[T]>) -> Vec<T> {
    concat_all(&[a.unwrap_or_default(), b.unwrap_or_default()])
}

pub fn concat_all<T: Clone>(parts: &[&[T]]) -> Vec<T> {
    let total = parts.iter().map(|part| part.len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

pub fn new_filled<T: Clone>(len: usize, value: T) -> Vec<T> {
    vec![value; len]
}

pub fn reversed<T: Clone>(arr: Option<&[T]>) -> Vec<T> {
    arr.unwrap_or_default().iter().rev().cloned().collect()
}

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

pub fn first<T>(arr: Option<&[T]>) -> Option<&T> {
    arr?.first()
}

pub fn last<T>(arr: Option<&[T]>) -> Option<&T> {
    arr?.last()
}

pub fn get<T>(arr: Option<&[T]>, index: usize) -> Option<&T> {
    arr?.get(index)
}

/// Checked access for callers that treat a bad index as an error.
///
/// # Errors
///
/// [`ArgumentError::IndexOutOfBounds`] when `index >= len`; `None` has length 0.
pub fn element_at<T>(arr: Option<&[T]>, index: usize) -> Result<&T, ArgumentError> {
    let src = arr.unwrap_or_default();
    src.get(index).ok_or(ArgumentError::IndexOutOfBounds {
        index,
        len: src.len(),
    })
}

pub fn first_or<T: Clone>(arr: Option<&[T]>, default: T) -> T {
    first(arr).cloned().unwrap_or(default)
}

pub fn last_or<T: Clone>(arr: Option<&[T]>, default: T) -> T {
    last(arr).cloned().unwrap_or(default)
}

pub fn get_or<T: Clone>(arr: Option<&[T]>, index: usize, default: T) -> T {
    get(arr, index).cloned().unwrap_or(default)
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

pub fn index_of<T: PartialEq>(arr: Option<&[T]>, item: &T) -> Option<usize> {
    arr?.iter().position(|candidate| candidate == item)
}

pub fn last_index_of<T: PartialEq>(arr: Option<&[T]>, item: &T) -> Option<usize> {
    arr?.iter().rposition(|candidate| candidate == item)
}

pub fn contains<T: PartialEq>(arr: Option<&[T]>, item: &T) -> bool {
    index_of(arr, item).is_some()
}

/// `None` equals `None`; otherwise element-wise equality.
pub fn equals<T: PartialEq>(a: Option<&[T]>, b: Option<&[T]>) -> bool {
    a == b
}

// ---------------------------------------------------------------------------
// Filter / map / reduce
// ---------------------------------------------------------------------------

pub fn filter<T, F>(arr: Option<&[T]>, mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    arr.unwrap_or_default()
        .iter()
        .filter(|item| predicate(item))
        .cloned()
        .collect()
}

pub fn map<T, U, F>(arr: Option<&[T]>, f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    arr.unwrap_or_default().iter().map(f).collect()
}

pub fn find<T, F>(arr: Option<&[T]>, mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    arr?.iter().find(|item| predicate(item))
}

/// `false` for empty input.
pub fn any_match<T, F>(arr: Option<&[T]>, predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    arr.unwrap_or_default().iter().any(predicate)
}

/// `true` for empty input.
pub fn all_match<T, F>(arr: Option<&[T]>, predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    arr.unwrap_or_default().iter().all(predicate)
}

pub fn count_matching<T, F>(arr: Option<&[T]>, mut predicate: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    arr.unwrap_or_default()
        .iter()
        .filter(|item| predicate(item))
        .count()
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

pub fn to_list<T: Clone>(arr: Option<&[T]>) -> Vec<T> {
    get_copy(arr).unwrap_or_default()
}

pub fn to_set<T: Clone + Eq + Hash>(arr: Option<&[T]>) -> HashSet<T> {
    arr.unwrap_or_default().iter().cloned().collect()
}

/// Joins the `Display` form of each element with `separator`.
pub fn join<T: Display>(arr: Option<&[T]>, separator: &str) -> String {
    let mut out = String::new();
    for (i, item) in arr.unwrap_or_default().iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&item.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: Option<&[i32]> = None;

    #[test]
    fn size_of_none_is_zero() {
        assert_eq!(size(NONE), 0);
        assert!(is_empty(NONE));
        assert!(is_empty(Some(&[] as &[i32])));
        assert!(is_not_empty(Some(&[1][..])));
    }

    #[test]
    fn get_copy_is_equal_but_distinct() {
        let src = vec![1, 2, 3];
        let copy = get_copy(Some(&src[..])).unwrap();
        assert_eq!(copy, src);
        assert_ne!(copy.as_ptr(), src.as_ptr());
        assert_eq!(get_copy(NONE), None);
    }

    #[test]
    fn copy_of_truncates_and_pads() {
        let src = [1, 2, 3];
        assert_eq!(copy_of(Some(&src[..]), 2, 0), vec![1, 2]);
        assert_eq!(copy_of(Some(&src[..]), 5, 9), vec![1, 2, 3, 9, 9]);
        assert_eq!(copy_of(NONE, 2, 7), vec![7, 7]);
    }

    #[test]
    fn sub_array_bounds() {
        let src = [10, 20, 30, 40];
        assert_eq!(sub_array(Some(&src[..]), 1, 3), Ok(vec![20, 30]));
        assert_eq!(sub_array(Some(&src[..]), 4, 4), Ok(vec![]));
        assert_eq!(
            sub_array(Some(&src[..]), 3, 1),
            Err(ArgumentError::InvalidRange { from: 3, to: 1, len: 4 })
        );
        assert_eq!(
            sub_array(Some(&src[..]), 0, 5),
            Err(ArgumentError::InvalidRange { from: 0, to: 5, len: 4 })
        );
        assert_eq!(sub_array(NONE, 0, 0), Ok(vec![]));
    }

    #[test]
    fn concat_handles_missing_sides() {
        assert_eq!(concat(Some(&[1][..]), Some(&[2, 3][..])), vec![1, 2, 3]);
        assert_eq!(concat(NONE, Some(&[2][..])), vec![2]);
        assert_eq!(concat(NONE, NONE), Vec::<i32>::new());
        assert_eq!(concat_all(&[&[1, 2][..], &[][..], &[3][..]]), vec![1, 2, 3]);
    }

    #[test]
    fn accessors_with_defaults() {
        let src = ["a", "b", "c"];
        assert_eq!(first(Some(&src[..])), Some(&"a"));
        assert_eq!(last(Some(&src[..])), Some(&"c"));
        assert_eq!(get(Some(&src[..]), 5), None);
        assert_eq!(first_or(None, "x"), "x");
        assert_eq!(last_or(Some(&src[..]), "x"), "c");
        assert_eq!(get_or(Some(&src[..]), 1, "x"), "b");
        assert_eq!(get_or(Some(&src[..]), 9, "x"), "x");
    }

    #[test]
    fn search() {
        let src = [5, 6, 5];
        assert_eq!(index_of(Some(&src[..]), &5), Some(0));
        assert_eq!(last_index_of(Some(&src[..]), &5), Some(2));
        assert_eq!(index_of(Some(&src[..]), &7), None);
        assert!(contains(Some(&src[..]), &6));
        assert!(!contains(NONE, &6));
    }

    #[test]
    fn equality_with_none() {
        assert!(equals(NONE, NONE));
        assert!(!equals(NONE, Some(&[][..])));
        assert!(equals(Some(&[1, 2][..]), Some(&[1, 2][..])));
    }

    #[test]
    fn functional_helpers() {
        let src = [1, 2, 3, 4, 5, 6];
        assert_eq!(filter(Some(&src[..]), |n| n % 2 == 0), vec![2, 4, 6]);
        assert_eq!(map(Some(&src[..3]), |n| n * 10), vec![10, 20, 30]);
        assert_eq!(find(Some(&src[..]), |n| *n > 4), Some(&5));
        assert!(any_match(Some(&src[..]), |n| *n == 3));
        assert!(!any_match(NONE, |_| true));
        assert!(all_match(NONE, |_| false));
        assert_eq!(count_matching(Some(&src[..]), |n| *n > 2), 4);
    }

    #[test]
    fn conversions() {
        let src = [3, 1, 3];
        assert_eq!(to_list(Some(&src[..])), vec![3, 1, 3]);
        assert_eq!(to_set(Some(&src[..])).len(), 2);
        assert_eq!(reversed(Some(&src[..])), vec![3, 1, 3]);
        assert_eq!(reversed(Some(&[1, 2][..])), vec![2, 1]);
        assert_eq!(join(Some(&src[..]), ", "), "3, 1, 3");
        assert_eq!(join(NONE, ","), "");
        assert_eq!(new_filled(3, 'x'), vec!['x', 'x', 'x']);
    }

    #[test]
    fn element_at_reports_bounds() {
        let nums = [7, 8, 9];
        assert_eq!(element_at(Some(&nums[..]), 2), Ok(&9));
        assert_eq!(
            element_at(Some(&nums[..]), 3),
            Err(ArgumentError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            element_at(NONE, 0),
            Err(ArgumentError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }
}
