#![no_main]

use std::collections::VecDeque;

use commonskit::map::LruMap;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on LruMap
//
// The first byte sets max_size (0 included); the listener's record of
// evicted keys must match a VecDeque model evicting from the front.
fuzz_target!(|data: &[u8]| {
    let Some((&size, ops)) = data.split_first() else {
        return;
    };
    let max_size = usize::from(size % 16);

    let mut evicted = Vec::new();
    let mut model: VecDeque<u8> = VecDeque::new();
    let mut expected_evictions = Vec::new();
    {
        let mut map = LruMap::with_listener(max_size, |k: &u8, _v: &u8| evicted.push(*k));

        for pair in ops.chunks_exact(2) {
            let op = pair[0] % 5;
            let key = pair[1] % 32;
            let position = model.iter().position(|k| *k == key);

            match op {
                0 | 1 => {
                    map.insert(key, key);
                    if let Some(i) = position {
                        model.remove(i);
                    }
                    model.push_back(key);
                    while model.len() > max_size {
                        if let Some(victim) = model.pop_front() {
                            expected_evictions.push(victim);
                        }
                    }
                },
                2 => {
                    assert_eq!(map.get(&key).is_some(), position.is_some());
                    if let Some(i) = position {
                        model.remove(i);
                        model.push_back(key);
                    }
                },
                3 => {
                    assert_eq!(map.remove(&key).is_some(), position.is_some());
                    if let Some(i) = position {
                        model.remove(i);
                    }
                },
                4 => {
                    let shrink = usize::from(key % 16).max(1);
                    if shrink < map.max_size() {
                        let _ = map.set_max_size(shrink);
                    }
                    // keep the model bound in step
                    let bound = map.max_size();
                    while model.len() > bound {
                        if let Some(victim) = model.pop_front() {
                            expected_evictions.push(victim);
                        }
                    }
                },
                _ => unreachable!(),
            }

            assert!(map.len() <= map.max_size());
            let keys: Vec<u8> = map.iter().map(|(k, _)| *k).collect();
            assert!(keys.iter().eq(model.iter()));
        }
    }
    assert_eq!(evicted, expected_evictions);
});
