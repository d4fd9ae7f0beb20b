#![no_main]

use commonskit::locale::Locale;
use libfuzzer_sys::fuzz_target;

// Any tag that parses must print and re-parse to the same locale.
fuzz_target!(|data: &[u8]| {
    let Ok(tag) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(locale) = Locale::parse(tag) {
        assert!(!locale.language().is_empty() || !locale.country().is_empty());
        let reparsed = Locale::parse(&locale.to_string()).expect("display output parses");
        assert_eq!(reparsed, locale);
        let _ = locale.to_language_tag();
        let _ = locale.is_known();
    }
});
