//! Memoizing locale and country lookups.
//!
//! Both caches are plain values: construct one where it is needed and share
//! it behind an `Arc`. Reads take a shared `parking_lot::RwLock` guard; only
//! the first lookup of a key upgrades to a write.
//!
//! ```text
//!   get_locale("de", "AT")
//!       │
//!       ├─ read lock ── hit ──────────────────► Arc<Locale> (same pointer)
//!       │
//!       └─ miss ── write lock ── entry().or_insert_with(Arc::new) ──► Arc<Locale>
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::ArgumentError;
use crate::locale::{Country, Locale, data};

// ---------------------------------------------------------------------------
// LocaleCache
// ---------------------------------------------------------------------------

/// Interns [`Locale`] values so equal requests share one allocation.
///
/// ```
/// use std::sync::Arc;
///
/// use commonskit::locale::LocaleCache;
///
/// let cache = LocaleCache::new();
/// let a = cache.get_locale("de", "AT");
/// let b = cache.get_locale("DE", "at");
/// assert_eq!(a.to_string(), "de_AT");
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Default)]
pub struct LocaleCache {
    locales: RwLock<FxHashMap<Locale, Arc<Locale>>>,
}

impl LocaleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_locale(&self, language: &str, country: &str) -> Arc<Locale> {
        self.intern(Locale::new(language, country))
    }

    pub fn get_locale_with_variant(&self, language: &str, country: &str, variant: &str) -> Arc<Locale> {
        self.intern(Locale::with_variant(language, country, variant))
    }

    /// Parses `tag` (see [`Locale::parse`]) and returns the cached instance.
    pub fn locale_for(&self, tag: &str) -> Result<Arc<Locale>, ArgumentError> {
        Locale::parse(tag).map(|locale| self.intern(locale))
    }

    fn intern(&self, locale: Locale) -> Arc<Locale> {
        if let Some(cached) = self.locales.read().get(&locale) {
            return Arc::clone(cached);
        }
        let mut locales = self.locales.write();
        let cached = locales
            .entry(locale.clone())
            .or_insert_with(|| Arc::new(locale));
        Arc::clone(cached)
    }

    /// Distinct language codes among cached locales, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self
            .locales
            .read()
            .keys()
            .filter(|locale| !locale.language().is_empty())
            .map(|locale| locale.language().to_owned())
            .collect();
        languages.sort_unstable();
        languages.dedup();
        languages
    }

    /// Cached locales for `country`, ordered by language then variant.
    pub fn locales_for_country(&self, country: &str) -> Vec<Arc<Locale>> {
        let country = country.trim().to_ascii_uppercase();
        self.collect_sorted(|locale| locale.country() == country)
    }

    /// Cached locales for `language`, ordered by country then variant.
    pub fn locales_for_language(&self, language: &str) -> Vec<Arc<Locale>> {
        let language = language.trim().to_ascii_lowercase();
        self.collect_sorted(|locale| locale.language() == language)
    }

    fn collect_sorted(&self, mut keep: impl FnMut(&Locale) -> bool) -> Vec<Arc<Locale>> {
        let mut out: Vec<Arc<Locale>> = self
            .locales
            .read()
            .values()
            .filter(|locale| keep(locale))
            .cloned()
            .collect();
        out.sort();
        out
    }

    /// Every ISO 639-1 code, independent of what has been cached.
    pub fn available_languages() -> impl ExactSizeIterator<Item = &'static str> {
        data::LANGUAGES.iter().map(|(code, _)| *code)
    }

    pub fn len(&self) -> usize {
        self.locales.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.read().is_empty()
    }

    /// Drops every cached locale. Outstanding `Arc`s stay valid.
    pub fn clear(&self) {
        let mut locales = self.locales.write();
        let dropped = locales.len();
        locales.clear();
        log::debug!("locale cache cleared ({dropped} entries)");
    }
}

impl fmt::Debug for LocaleCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleCache")
            .field("len", &self.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// CountryCache
// ---------------------------------------------------------------------------

/// Memoizes country lookups by upper-cased code plus the name-sorted list.
///
/// Only successful lookups are remembered, so unknown codes cannot grow the
/// cache.
#[derive(Default)]
pub struct CountryCache {
    by_code: RwLock<FxHashMap<String, &'static Country>>,
    by_name: RwLock<Option<Arc<[&'static Country]>>>,
}

impl CountryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an alpha-2 or alpha-3 code, case-insensitively.
    pub fn get_country(&self, code: &str) -> Option<&'static Country> {
        let key = code.trim().to_ascii_uppercase();
        if let Some(country) = self.by_code.read().get(&key) {
            return Some(*country);
        }
        let country = Country::by_code(&key)?;
        self.by_code.write().insert(key, country);
        Some(country)
    }

    /// All countries sorted by English name; computed once until `clear`.
    pub fn countries(&self) -> Arc<[&'static Country]> {
        if let Some(sorted) = self.by_name.read().as_ref() {
            return Arc::clone(sorted);
        }
        let mut slot = self.by_name.write();
        let sorted = slot.get_or_insert_with(|| {
            let mut countries: Vec<&'static Country> = data::COUNTRIES.iter().collect();
            countries.sort_by(|a, b| a.name.cmp(b.name));
            countries.into()
        });
        Arc::clone(sorted)
    }

    /// Alpha-2 codes of every known country, in code order.
    pub fn country_codes(&self) -> Vec<&'static str> {
        data::COUNTRIES.iter().map(|country| country.alpha2).collect()
    }

    /// Number of memoized code lookups.
    pub fn len(&self) -> usize {
        self.by_code.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.read().is_empty()
    }

    pub fn clear(&self) {
        let dropped = {
            let mut by_code = self.by_code.write();
            let dropped = by_code.len();
            by_code.clear();
            dropped
        };
        *self.by_name.write() = None;
        log::debug!("country cache cleared ({dropped} entries)");
    }
}

impl fmt::Debug for CountryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountryCache")
            .field("len", &self.len())
            .field("sorted", &self.by_name.read().is_some())
            .finish()
    }
}
