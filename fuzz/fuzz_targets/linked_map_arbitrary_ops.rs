#![no_main]

use commonskit::map::LinkedMap;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on LinkedMap
//
// The first byte picks insertion or access order; every following pair is
// (op, key). A Vec of (key, value) pairs mirrors the expected order.
fuzz_target!(|data: &[u8]| {
    let Some((&mode, ops)) = data.split_first() else {
        return;
    };
    let access_order = mode & 1 == 1;

    let mut map: LinkedMap<u8, u32> = LinkedMap::with_access_order(access_order);
    let mut model: Vec<(u8, u32)> = Vec::new();

    for (step, pair) in ops.chunks_exact(2).enumerate() {
        let op = pair[0] % 7;
        let key = pair[1] % 64;
        let value = step as u32;
        let position = model.iter().position(|(k, _)| *k == key);

        match op {
            0 | 1 => {
                // insert
                let previous = map.insert(key, value);
                match position {
                    Some(i) => {
                        assert_eq!(previous, Some(model[i].1));
                        model[i].1 = value;
                        if access_order {
                            let entry = model.remove(i);
                            model.push(entry);
                        }
                    },
                    None => {
                        assert_eq!(previous, None);
                        model.push((key, value));
                    },
                }
            },
            2 => {
                // get
                let got = map.get(&key).copied();
                assert_eq!(got, position.map(|i| model[i].1));
                if let (Some(i), true) = (position, access_order) {
                    let entry = model.remove(i);
                    model.push(entry);
                }
            },
            3 => {
                // peek
                assert_eq!(map.peek(&key).copied(), position.map(|i| model[i].1));
            },
            4 => {
                // remove
                let removed = map.remove(&key);
                assert_eq!(removed, position.map(|i| model.remove(i).1));
            },
            5 => {
                // pop_eldest
                let popped = map.pop_eldest();
                let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                assert_eq!(popped, expected);
            },
            6 => {
                // touch
                assert_eq!(map.touch(&key), position.is_some());
                if let (Some(i), true) = (position, access_order) {
                    let entry = model.remove(i);
                    model.push(entry);
                }
            },
            _ => unreachable!(),
        }

        assert_eq!(map.len(), model.len());
        map.debug_validate_invariants();
    }

    let order: Vec<(u8, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(order, model);
});
