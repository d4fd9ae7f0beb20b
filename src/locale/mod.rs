//! Locales, ISO country records, and the caches that memoize them.
//!
//! | Item           | Role                                                    |
//! |----------------|---------------------------------------------------------|
//! | [`Locale`]     | normalized language / country / variant triple          |
//! | [`Country`]    | `&'static` ISO 3166-1 record                            |
//! | [`LocaleCache`]| interns `Locale`s as `Arc<Locale>`                      |
//! | [`CountryCache`]| memoizes code lookups and the name-sorted country list |
//! | [`data`]       | ISO 639-1 / ISO 3166-1 tables                           |
//!
//! ```
//! use commonskit::locale::{CountryCache, LocaleCache};
//!
//! let locales = LocaleCache::new();
//! let austrian = locales.get_locale("de", "AT");
//! assert_eq!(austrian.to_string(), "de_AT");
//! assert_eq!(austrian.display_country(), Some("Austria"));
//!
//! let countries = CountryCache::new();
//! assert_eq!(countries.get_country("aut").map(|c| c.alpha2), Some("AT"));
//! ```

pub mod cache;
pub mod country;
pub mod data;
pub mod tag;

pub use cache::{CountryCache, LocaleCache};
pub use country::Country;
pub use tag::Locale;
