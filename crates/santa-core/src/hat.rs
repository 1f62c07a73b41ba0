//! Randomized "hat draw" arrangement generator
//!
//! Works the way the physical ritual does: shuffle all names into a hat,
//! then each giver in turn draws the first name that isn't their own. If the
//! last person left drawing can only pull their own name, the whole round is
//! a bust and the hat is reshuffled. Probabilistically incomplete for small
//! groups, so the round is retried up to a fixed budget before giving up.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{
    arrangement::{Arrangement, check_roster, validate},
    error::ArrangementError,
};

/// Full draw attempts before the generator reports `ExhaustedRetries`.
pub const MAX_ATTEMPTS: u32 = 3;

/// Generate a random arrangement by repeated hat draws.
///
/// Each attempt shuffles the full roster into a receiver pool and assigns
/// givers in roster order. A bust (the only remaining receiver is the giver
/// themselves) is a recoverable condition: the attempt is discarded and the
/// draw restarts with a fresh shuffle, up to [`MAX_ATTEMPTS`] times.
///
/// Accepted results always pass [`validate`].
///
/// # Errors
///
/// - `RosterTooSmall` / `DuplicateName` if the roster is unusable
/// - `ExhaustedRetries` if no attempt produced a valid derangement; a fresh
///   call may succeed
pub fn draw_arrangement<R: Rng>(
    names: &[String],
    rng: &mut R,
) -> Result<Arrangement, ArrangementError> {
    check_roster(names)?;

    for attempt in 1..=MAX_ATTEMPTS {
        if let Some(arrangement) = hat_draw(names, rng) {
            if validate(names, &arrangement) {
                return Ok(arrangement);
            }
        }
        tracing::debug!(attempt, "hat draw busted, reshuffling");
    }

    Err(ArrangementError::ExhaustedRetries { attempts: MAX_ATTEMPTS })
}

/// One draw from the hat. `None` means the round busted.
///
/// Scans the shuffled pool left to right for the first receiver that isn't
/// the current giver. With distinct names the scan can only come up empty
/// when the pool has shrunk to exactly the giver's own name.
fn hat_draw<R: Rng>(names: &[String], rng: &mut R) -> Option<Arrangement> {
    let mut pool: Vec<&str> = names.iter().map(String::as_str).collect();
    pool.shuffle(rng);

    let mut arrangement = Arrangement::new();
    for giver in names {
        let slot = pool.iter().position(|receiver| *receiver != giver.as_str())?;
        let receiver = pool.remove(slot);
        arrangement.insert(giver.clone(), receiver.to_string());
    }

    Some(arrangement)
}
