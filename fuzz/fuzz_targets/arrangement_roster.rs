//! Fuzz target for arrangement generation
//!
//! Drives both generators with arbitrary rosters (duplicates, empty names,
//! tiny and oversized lists) and a seeded RNG. Neither generator should ever
//! panic or return an arrangement that fails validation.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::{SeedableRng, rngs::StdRng};
use santa_core::{draw_arrangement, search_arrangement, validate};

fuzz_target!(|input: (Vec<String>, u64)| {
    let (names, seed) = input;
    if names.len() > 32 {
        return;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    if let Ok(arrangement) = draw_arrangement(&names, &mut rng) {
        assert!(validate(&names, &arrangement));
    }

    if let Ok(arrangement) = search_arrangement(&names, &names) {
        // search accepts duplicate pools; validate only for distinct rosters
        let mut distinct = names.clone();
        distinct.sort();
        distinct.dedup();
        if distinct.len() == names.len() {
            assert!(validate(&names, &arrangement));
        }
    }
});
