//! Bounded maps built from one `LruMapBuilder`.
//!
//! Run with: cargo run --example basic_lru_map

use commonskit::builder::LruMapBuilder;
use commonskit::map::LruMap;

fn main() {
    println!("=== LruMap Examples ===\n");

    // Example 1: recency order decides the victim
    println!("1. LRU eviction");
    let mut lru: LruMap<u64, String> = LruMapBuilder::new(3).build();
    lru.insert(1, "one".to_string());
    lru.insert(2, "two".to_string());
    lru.insert(3, "three".to_string());
    lru.get(&1);
    lru.insert(4, "four".to_string());
    println!("   contains 1? {} (was read)", lru.contains_key(&1));
    println!("   contains 2? {} (evicted as LRU)", lru.contains_key(&2));
    println!("   stats: {:?}\n", lru.stats());

    // Example 2: insertion order ignores reads
    println!("2. Insertion-order eviction");
    let mut fifo = LruMapBuilder::new(3).access_order(false).build::<u64, &str>();
    fifo.insert(1, "one");
    fifo.insert(2, "two");
    fifo.insert(3, "three");
    fifo.get(&1);
    fifo.insert(4, "four");
    println!("   contains 1? {} (oldest insert)", fifo.contains_key(&1));
    println!();

    // Example 3: eviction listener
    println!("3. Listener");
    let mut dropped = Vec::new();
    {
        let mut map = LruMapBuilder::new(2).build_with_listener(|k: &&'static str, v: &u32| dropped.push((*k, *v)));
        for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
            map.insert(key, i as u32);
        }
    }
    println!("   dropped: {dropped:?}\n");

    // Example 4: logging listener counts what it logs
    println!("4. Logging map");
    let mut logged = LruMapBuilder::new(2).name("sessions").build_logging::<u32, &str>();
    logged.insert(1, "alice");
    logged.insert(2, "bob");
    logged.insert(3, "carol");
    println!(
        "   {} evicted {} entr(y/ies)\n",
        logged.listener().name(),
        logged.listener().evicted()
    );

    // Example 5: soft values survive reclaim while held
    println!("5. Soft map");
    let mut soft = LruMapBuilder::new(8).build_soft::<u32, String>();
    for i in 0..5 {
        soft.insert(i, format!("blob-{i}"));
    }
    let held = soft.get(&2);
    let reclaimed = soft.reclaim();
    println!("   reclaimed {reclaimed}, kept {:?}, held = {:?}", soft.len(), held.as_deref());
}
