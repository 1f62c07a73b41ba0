//! Deterministic backtracking arrangement search
//!
//! Complete search over giver/receiver pairings: if a derangement exists for
//! the given pools, it is found. There is no internal randomness; a random
//! result is obtained by shuffling the receiver pool up front, which
//! [`random_search_arrangement`] does.
//!
//! Backtracking is an ordinary loop-and-continue over candidates. A failed
//! branch undoes its tentative assignment and tries the next receiver.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{
    arrangement::{Arrangement, check_roster, validate},
    error::ArrangementError,
};

/// Find a derangement pairing `givers` with `receivers`.
///
/// Candidate receivers are tried in pool order, so the result is fully
/// determined by the input ordering. Both pools must contain the same names;
/// callers wanting a random outcome shuffle `receivers` first.
///
/// # Errors
///
/// - `MismatchedPools` if the pools differ in length
/// - `NoSolution` if no derangement exists (only possible for degenerate
///   pools, e.g. a single giver paired with their own name)
pub fn search_arrangement(
    givers: &[String],
    receivers: &[String],
) -> Result<Arrangement, ArrangementError> {
    if givers.len() != receivers.len() {
        return Err(ArrangementError::MismatchedPools {
            givers: givers.len(),
            receivers: receivers.len(),
        });
    }

    let mut giver_pool: Vec<&str> = givers.iter().map(String::as_str).collect();
    let mut receiver_pool: Vec<&str> = receivers.iter().map(String::as_str).collect();
    let mut arrangement = Arrangement::new();

    if assign(&mut giver_pool, &mut receiver_pool, &mut arrangement) {
        Ok(arrangement)
    } else {
        Err(ArrangementError::NoSolution)
    }
}

/// Generate a random arrangement via the complete search.
///
/// Shuffles the receiver pool and runs [`search_arrangement`]. Unlike the
/// hat draw this cannot exhaust retries: whenever a derangement exists it is
/// found on the first pass.
///
/// # Errors
///
/// - `RosterTooSmall` / `DuplicateName` if the roster is unusable
/// - `NoSolution` if no derangement exists for the roster
pub fn random_search_arrangement<R: Rng>(
    names: &[String],
    rng: &mut R,
) -> Result<Arrangement, ArrangementError> {
    check_roster(names)?;

    let mut receivers = names.to_vec();
    receivers.shuffle(rng);

    let arrangement = search_arrangement(names, &receivers)?;
    if !validate(names, &arrangement) {
        unreachable!("complete search produced an arrangement that fails validation");
    }
    Ok(arrangement)
}

/// Assign the last unassigned giver to each non-self candidate in turn.
///
/// Returns true once every giver is assigned. A false return leaves both
/// pools and the arrangement exactly as they were on entry.
fn assign<'a>(
    givers: &mut Vec<&'a str>,
    receivers: &mut Vec<&'a str>,
    arrangement: &mut Arrangement,
) -> bool {
    let Some(giver) = givers.pop() else {
        // recursed through all givers, the accumulated mapping works
        return true;
    };

    for slot in 0..receivers.len() {
        if receivers[slot] == giver {
            continue;
        }

        let receiver = receivers.remove(slot);
        arrangement.insert(giver.to_string(), receiver.to_string());

        if assign(givers, receivers, arrangement) {
            return true;
        }

        // giver -> receiver doesn't work further down, undo and keep looking
        arrangement.remove(giver);
        receivers.insert(slot, receiver);
    }

    givers.push(giver);
    false
}
