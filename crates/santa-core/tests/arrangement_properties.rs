//! Property-based tests for the derangement engine
//!
//! These tests verify the fundamental invariants of arrangement generation:
//!
//! 1. **Completeness**: the deterministic search finds a derangement for
//!    every roster of >= 2 distinct names
//! 2. **Soundness**: everything either generator returns passes `validate`
//! 3. **Degeneracy**: rosters that cannot be deranged fail cleanly

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use santa_core::{
    ArrangementError, draw_arrangement, random_search_arrangement, search_arrangement, validate,
};

/// Strategy for rosters of 2..=8 distinct names.
fn distinct_roster() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,8}", 2..=8)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_search_on_identical_pools_validates(names in distinct_roster()) {
        let arrangement = search_arrangement(&names, &names).unwrap();
        prop_assert!(validate(&names, &arrangement));
    }

    #[test]
    fn prop_shuffled_search_validates(names in distinct_roster(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let arrangement = random_search_arrangement(&names, &mut rng).unwrap();
        prop_assert!(validate(&names, &arrangement));
    }

    #[test]
    fn prop_hat_draw_never_returns_invalid(names in distinct_roster(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        match draw_arrangement(&names, &mut rng) {
            Ok(arrangement) => prop_assert!(validate(&names, &arrangement)),
            // The hat draw may legitimately bust three times in a row for
            // small rosters; that is the only acceptable failure here.
            Err(err) => prop_assert!(err.is_retryable()),
        }
    }

    #[test]
    fn prop_search_is_deterministic(names in distinct_roster()) {
        let first = search_arrangement(&names, &names).unwrap();
        let second = search_arrangement(&names, &names).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn pair_roster_yields_exactly_the_swap() {
    let names = vec!["Alice".to_string(), "Bob".to_string()];

    let searched = search_arrangement(&names, &names).unwrap();
    assert_eq!(searched.get("Alice").unwrap(), "Bob");
    assert_eq!(searched.get("Bob").unwrap(), "Alice");

    let mut rng = StdRng::seed_from_u64(99);
    let drawn = draw_arrangement(&names, &mut rng).unwrap();
    assert_eq!(drawn, searched);
}

/// 100 arrangements for a three-name roster, all valid.
///
/// An individual call can exhaust its retry budget (busts are common at this
/// size), which per the error taxonomy means "regenerate". The soak treats
/// that signal exactly as a caller would and asserts that regeneration is
/// rare enough to collect 100 arrangements well within budget.
#[test]
fn three_name_soak() {
    let names = vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()];
    let mut rng = StdRng::seed_from_u64(2024);

    let mut collected = 0;
    let mut calls = 0;
    while collected < 100 {
        calls += 1;
        assert!(calls <= 150, "too many exhausted-retry regenerations");
        match draw_arrangement(&names, &mut rng) {
            Ok(arrangement) => {
                assert!(validate(&names, &arrangement));
                collected += 1;
            }
            Err(err) => assert!(err.is_retryable()),
        }
    }
}

#[test]
fn single_name_roster_always_fails() {
    let names = vec!["Alice".to_string()];
    let mut rng = StdRng::seed_from_u64(5);

    assert_eq!(
        draw_arrangement(&names, &mut rng),
        Err(ArrangementError::RosterTooSmall { len: 1 })
    );
    assert_eq!(search_arrangement(&names, &names), Err(ArrangementError::NoSolution));
}
