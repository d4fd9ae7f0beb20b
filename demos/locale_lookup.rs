//! Locale parsing, country lookups, and the shared caches.
//!
//! Run with: cargo run --example locale_lookup

use std::sync::Arc;

use commonskit::locale::{CountryCache, Locale, LocaleCache};

fn main() {
    println!("=== Locale Examples ===\n");

    println!("1. Parsing");
    for tag in ["de_AT", "en-us", "_GB", "es_419", "ja_JP_TRADITIONAL", "xx_YY_"] {
        match Locale::parse(tag) {
            Ok(locale) => println!(
                "   {tag:<18} -> {locale:<18} tag={:<18} language={:?} country={:?}",
                locale.to_language_tag(),
                locale.display_language(),
                locale.display_country()
            ),
            Err(err) => println!("   {tag:<18} -> error: {err}"),
        }
    }
    println!();

    println!("2. Interning");
    let locales = LocaleCache::new();
    let a = locales.get_locale("fr", "CA");
    let b = locales.locale_for("fr-ca").unwrap_or_else(|_| Arc::clone(&a));
    println!("   same instance? {}", Arc::ptr_eq(&a, &b));
    locales.get_locale("fr", "FR");
    locales.get_locale("en", "CA");
    println!("   cached languages: {:?}", locales.languages());
    let canadian: Vec<String> = locales
        .locales_for_country("CA")
        .iter()
        .map(|locale| locale.to_string())
        .collect();
    println!("   cached for CA: {canadian:?}\n");

    println!("3. Countries");
    let countries = CountryCache::new();
    for code in ["nz", "NZL", "QQ"] {
        match countries.get_country(code) {
            Some(country) => println!(
                "   {code:<4} -> {} ({}/{}/{:03})",
                country, country.alpha2, country.alpha3, country.numeric
            ),
            None => println!("   {code:<4} -> unknown"),
        }
    }
    let first_five: Vec<&str> = countries.countries().iter().take(5).map(|c| c.name).collect();
    println!("   first by name: {first_five:?}");
    println!("   {} countries, {} memoized lookups", countries.country_codes().len(), countries.len());
}
