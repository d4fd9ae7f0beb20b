//! commonskit: collection helpers, fluent container wrappers, bounded
//! eviction maps, locale lookups, and attribute bags.
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`array`]     | slice helpers over `Option<&[T]>`                          |
//! | [`collection`]| constructors, sorting, set algebra, grouping               |
//! | [`container`] | `FluentList`, `FluentSet`, `SortedSet`, `LinkedSet`, ...   |
//! | [`map`]       | `LinkedMap`, `LruMap`, `SoftLruMap`, `ConcurrentLruMap`    |
//! | [`locale`]    | `Locale`, `Country`, `LocaleCache`, `CountryCache`         |
//! | [`attribute`] | `AttributeValue`, `Attributes`, `AttributeContainer`       |
//! | [`builder`]   | `LruMapBuilder`                                            |
//!
//! Feature `concurrency` (default) adds `ConcurrentLruMap` and
//! `CopyOnWriteList`.

pub mod array;
pub mod attribute;
pub mod builder;
pub mod collection;
pub mod container;
pub mod ds;
pub mod error;
pub mod locale;
pub mod map;
pub mod prelude;
pub mod traits;
