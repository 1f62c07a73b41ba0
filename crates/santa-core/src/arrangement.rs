//! Arrangement type and validation predicate
//!
//! An arrangement is accepted only if it passes [`validate`], which both
//! generators use as their acceptance gate. A rejected candidate is thrown
//! away, never patched.

use std::collections::{BTreeMap, HashSet};

use crate::error::ArrangementError;

/// A gift assignment mapping giver name to receiver name.
///
/// # Invariants
///
/// - Givers (keys) and receivers (values), each taken as a set, both equal
///   the participant roster exactly
/// - The mapping is a bijection (no receiver appears twice)
/// - No fixed points: `arrangement[giver] != giver` for every entry
pub type Arrangement = BTreeMap<String, String>;

/// Reject rosters that cannot support a derangement.
///
/// A roster needs at least 2 distinct names. Duplicate entries are rejected
/// outright rather than searched, since they can make a valid derangement
/// impossible.
///
/// # Errors
///
/// - `RosterTooSmall` if fewer than 2 names are supplied
/// - `DuplicateName` naming the first repeated entry
pub fn check_roster(names: &[String]) -> Result<(), ArrangementError> {
    if names.len() < 2 {
        return Err(ArrangementError::RosterTooSmall { len: names.len() });
    }

    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(ArrangementError::DuplicateName { name: name.clone() });
        }
    }

    Ok(())
}

/// Check that `arrangement` is a valid derangement of `names`.
///
/// Pure predicate over all arrangement invariants: size match, every name
/// present as a giver, receivers drawn from the roster without reuse, and no
/// self-assignment. Rejection reasons are logged at debug level.
pub fn validate(names: &[String], arrangement: &Arrangement) -> bool {
    // same number of givers as names (no extra keys)
    if arrangement.len() != names.len() {
        tracing::debug!(
            givers = arrangement.len(),
            names = names.len(),
            "arrangement is not the same length as names"
        );
        return false;
    }

    // every receiver must be spent exactly once
    let mut remaining_receivers: HashSet<&str> = names.iter().map(String::as_str).collect();
    if remaining_receivers.len() != names.len() {
        tracing::debug!("names may not contain duplicates");
        return false;
    }

    // all names must be givers, each consuming a distinct receiver
    for giver in names {
        let Some(receiver) = arrangement.get(giver) else {
            tracing::debug!(%giver, "giver missing from arrangement");
            return false;
        };
        if !remaining_receivers.remove(receiver.as_str()) {
            tracing::debug!(%receiver, "receiver not in roster or already used");
            return false;
        }
    }

    if !remaining_receivers.is_empty() {
        return false;
    }

    // no giver may give to themselves
    for (giver, receiver) in arrangement {
        if giver == receiver {
            tracing::debug!(%giver, "may not assign a person to themselves");
            return false;
        }
    }

    true
}
