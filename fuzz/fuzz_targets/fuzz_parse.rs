#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Parsing must never panic; it either succeeds or reports an error
    if let Ok(map) = fuelmap::map::parse(&text) {
        // Anything that parses must survive a merge with itself
        let merged = fuelmap::map::merge(&map, &map).expect("equal lengths");
        let reparsed = fuelmap::map::parse(&merged).expect("merged output parses");
        assert_eq!(reparsed.primary().len(), map.primary().len());
    }

    let _ = fuelmap::validator::validate_map_text("fuzz.map", &text);
});
