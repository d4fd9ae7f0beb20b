//! Ordered and eviction-aware maps.
//!
//! | Type                 | Order             | Bound      | Notes                                 |
//! |----------------------|-------------------|------------|---------------------------------------|
//! | `LinkedMap`          | insertion/access  | none       | base for everything below             |
//! | `LruMap`             | access            | `max_size` | reports evictions to a listener       |
//! | `LoggingLruMap`      | access            | `max_size` | `LruMap` + `LoggingListener`          |
//! | `SoftLruMap`         | access            | `max_size` | `Arc` values, `reclaim` on demand     |
//! | `ConcurrentLruMap`   | access            | `max_size` | `parking_lot::Mutex` wrapper          |

#[cfg(feature = "concurrency")]
pub mod concurrent;
pub mod linked;
pub mod logging;
pub mod lru;
pub mod soft;

#[cfg(feature = "concurrency")]
pub use concurrent::ConcurrentLruMap;
pub use linked::LinkedMap;
pub use logging::{LoggingListener, LoggingLruMap};
pub use lru::{LruMap, LruMapStats};
pub use soft::SoftLruMap;
