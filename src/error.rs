//! Error types for the commonskit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when map or cache construction parameters are
//!   invalid (e.g. a zero maximum size).
//! - [`ArgumentError`]: Returned by helpers that validate their inputs at the
//!   call boundary (mismatched key/value lengths, out-of-range indices).
//!
//! ## Example Usage
//!
//! ```
//! use commonskit::collection;
//! use commonskit::error::{ArgumentError, ConfigError};
//! use commonskit::map::LruMap;
//!
//! // Fallible constructor for user-configurable parameters
//! let map: Result<LruMap<String, i32>, ConfigError> = LruMap::try_new(100);
//! assert!(map.is_ok());
//!
//! // Mismatched lengths are caught without panicking
//! let bad = collection::new_ordered_map(&["a", "b"], &[1]);
//! assert_eq!(bad.unwrap_err(), ArgumentError::LengthMismatch { keys: 2, values: 1 });
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when map or cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`LruMap::try_new`](crate::map::LruMap::try_new) and builder
/// `try_build()` methods. Carries a human-readable description of which
/// parameter failed validation.
///
/// # Example
///
/// ```
/// use commonskit::map::LruMap;
///
/// let err = LruMap::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("max_size"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// ArgumentError
// ---------------------------------------------------------------------------

/// Error returned when a helper rejects its arguments.
///
/// Invalid input is a caller bug; the variants exist so callers can match on
/// the failure instead of parsing a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// Parallel key and value inputs differ in length.
    LengthMismatch { keys: usize, values: usize },
    /// An index is past the end of the input.
    IndexOutOfBounds { index: usize, len: usize },
    /// A `[from, to)` range is reversed or runs past `len`.
    InvalidRange { from: usize, to: usize, len: usize },
    /// Any other rejected argument.
    InvalidArgument(String),
}

impl ArgumentError {
    /// Creates an [`ArgumentError::InvalidArgument`] with the given description.
    #[inline]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { keys, values } => write!(
                f,
                "key and value lengths differ: {} keys, {} values",
                keys, values
            ),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            },
            Self::InvalidRange { from, to, len } => {
                write!(f, "range {}..{} invalid for length {}", from, to, len)
            },
            Self::InvalidArgument(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ArgumentError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("max_size must be > 0");
        assert_eq!(err.to_string(), "max_size must be > 0");
    }

    #[test]
    fn config_message_accessor() {
        let err = ConfigError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- ArgumentError ----------------------------------------------------

    #[test]
    fn length_mismatch_names_both_lengths() {
        let err = ArgumentError::LengthMismatch { keys: 3, values: 2 };
        assert_eq!(
            err.to_string(),
            "key and value lengths differ: 3 keys, 2 values"
        );
    }

    #[test]
    fn index_and_range_display() {
        let idx = ArgumentError::IndexOutOfBounds { index: 5, len: 2 };
        assert_eq!(idx.to_string(), "index 5 out of bounds for length 2");

        let range = ArgumentError::InvalidRange { from: 3, to: 1, len: 4 };
        assert_eq!(range.to_string(), "range 3..1 invalid for length 4");
    }

    #[test]
    fn invalid_constructor_keeps_message() {
        let err = ArgumentError::invalid("chunk size must be > 0");
        assert_eq!(err, ArgumentError::InvalidArgument("chunk size must be > 0".into()));
        assert_eq!(err.to_string(), "chunk size must be > 0");
    }

    #[test]
    fn argument_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ArgumentError>();
    }
}
