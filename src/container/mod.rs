//! Collection wrappers with fluent conveniences.
//!
//! Each wrapper derefs to the collection it wraps, so the full std/Fx API
//! stays available next to the chainable helpers.
//!
//! | Wrapper            | Wraps                       | Order           |
//! |--------------------|-----------------------------|-----------------|
//! | `FluentList`       | `Vec<T>`                    | positional      |
//! | `FluentSet`        | `FxHashSet<T>`              | unspecified     |
//! | `SortedSet`        | `BTreeSet<T>`               | ascending       |
//! | `LinkedSet`        | `LinkedMap<T, ()>`          | insertion       |
//! | `FluentMap`        | `FxHashMap<K, V>`           | unspecified     |
//! | `SortedMap`        | `BTreeMap<K, V>`            | ascending keys  |
//! | `CopyOnWriteList`  | `RwLock<Arc<Vec<T>>>`       | positional      |
//!
//! `LinkedSet` and `CopyOnWriteList` expose their own API instead of `Deref`.

#[cfg(feature = "concurrency")]
pub mod cow;
pub mod linked_set;
pub mod list;
pub mod map;
pub mod set;
pub mod sorted;

#[cfg(feature = "concurrency")]
pub use cow::CopyOnWriteList;
pub use linked_set::LinkedSet;
pub use list::FluentList;
pub use map::FluentMap;
pub use set::FluentSet;
pub use sorted::{SortedMap, SortedSet};
