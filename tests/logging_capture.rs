// ==============================================
// LOG OUTPUT (captured through a test logger)
// ==============================================
//
// Tests in this file share one global logger, so every test filters the
// captured records by a map name nobody else uses.

use std::sync::{Mutex, Once};

use commonskit::builder::LruMapBuilder;
use commonskit::locale::{CountryCache, LocaleCache};
use commonskit::map::{LoggingListener, LoggingLruMap, LruMap, SoftLruMap};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn install() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger installed");
        log::set_max_level(LevelFilter::Trace);
    });
}

fn captured(needle: &str) -> Vec<(Level, String)> {
    LOGGER
        .records
        .lock()
        .expect("logger mutex poisoned")
        .iter()
        .filter(|(_, message)| message.contains(needle))
        .cloned()
        .collect()
}

// ==============================================
// Eviction warnings
// ==============================================

mod evictions {
    use super::*;

    #[test]
    fn each_eviction_logs_one_warning() {
        install();
        let mut map: LoggingLruMap<u32, &str> =
            LruMap::with_listener(2, LoggingListener::new("capture-evictions").with_max_size(2));
        map.insert(1, "a");
        map.insert(2, "b");
        map.insert(3, "c");
        map.insert(4, "d");

        let records = captured("capture-evictions:");
        assert_eq!(records.len(), 2, "one warning per eviction: {records:?}");
        assert!(records.iter().all(|(level, _)| *level == Level::Warn));
        assert_eq!(records[0].1, "capture-evictions: evicted eldest entry 1 (max size 2)");
        assert_eq!(records[1].1, "capture-evictions: evicted eldest entry 2 (max size 2)");
    }

    #[test]
    fn remove_and_clear_are_silent() {
        install();
        let mut map = LruMapBuilder::new(4).name("capture-silent").build_logging::<u32, u32>();
        map.insert(1, 1);
        map.insert(2, 2);
        map.remove(&1);
        map.clear();
        assert!(captured("capture-silent:").is_empty());
        assert_eq!(map.listener().evicted(), 0);
    }

    #[test]
    fn unbounded_listener_omits_max_size() {
        install();
        let mut map: LoggingLruMap<&str, u8> = LruMap::with_listener(1, LoggingListener::new("capture-plain"));
        map.insert("x", 1);
        map.insert("y", 2);
        let records = captured("capture-plain:");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].1, "capture-plain: evicted eldest entry \"x\"");
    }
}

// ==============================================
// Debug diagnostics
// ==============================================

mod diagnostics {
    use super::*;

    #[test]
    fn soft_reclaim_reports_count() {
        install();
        let mut map = SoftLruMap::new(8);
        for i in 0..5u32 {
            map.insert(i, i);
        }
        let _held = map.get(&0);
        assert_eq!(map.reclaim(), 4);
        let records = captured("reclaimed 4 unreferenced entries (1 remain)");
        assert!(!records.is_empty());
        assert!(records.iter().all(|(level, _)| *level == Level::Debug));
    }

    #[test]
    fn cache_clear_is_logged() {
        install();
        let locales = LocaleCache::new();
        for country in ["AT", "BE", "CH", "DK", "EE", "FI", "GR"] {
            locales.get_locale("xx", country);
        }
        locales.clear();
        assert!(!captured("locale cache cleared (7 entries)").is_empty());

        let countries = CountryCache::new();
        countries.get_country("NZL");
        countries.get_country("NZ");
        countries.get_country("TV");
        countries.clear();
        assert!(!captured("country cache cleared (3 entries)").is_empty());
    }
}
