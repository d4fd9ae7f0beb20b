pub use crate::attribute::{AttributeContainer, AttributeValue, Attributes};
pub use crate::builder::LruMapBuilder;
#[cfg(feature = "concurrency")]
pub use crate::container::CopyOnWriteList;
pub use crate::container::{FluentList, FluentMap, FluentSet, LinkedSet, SortedMap, SortedSet};
pub use crate::error::{ArgumentError, ConfigError};
pub use crate::locale::{Country, CountryCache, Locale, LocaleCache};
#[cfg(feature = "concurrency")]
pub use crate::map::ConcurrentLruMap;
pub use crate::map::{LinkedMap, LoggingListener, LoggingLruMap, LruMap, LruMapStats, SoftLruMap};
pub use crate::traits::{EvictionListener, Length, NoopListener};
