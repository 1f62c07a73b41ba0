//! Sealing a whole arrangement into per-giver references

use std::collections::BTreeMap;

use rand::{CryptoRng, RngCore};
use santa_core::{Arrangement, draw_arrangement};
use santa_crypto::{ShareableRef, seal};

use crate::error::ExchangeError;

/// Seal every receiver name in an arrangement.
///
/// Each giver gets an independently keyed envelope; seals share no state, so
/// a leaked link exposes at most its own assignment. Any codec failure
/// aborts the whole batch rather than returning a partial map.
///
/// # Errors
///
/// - `Codec` if any receiver name fails to seal
pub fn seal_arrangement<R: RngCore + CryptoRng>(
    arrangement: &Arrangement,
    rng: &mut R,
) -> Result<BTreeMap<String, ShareableRef>, ExchangeError> {
    let mut sealed = BTreeMap::new();
    for (giver, receiver) in arrangement {
        let envelope = seal(receiver, rng)?;
        sealed.insert(giver.clone(), ShareableRef::new(&envelope));
    }

    tracing::debug!(givers = sealed.len(), "sealed arrangement");
    Ok(sealed)
}

/// Draw a fresh arrangement for `names` and seal it in one step.
///
/// The organizer-facing flow: generate the derangement, then one link per
/// giver.
///
/// # Errors
///
/// - `Arrangement` if the roster is unusable or the draw exhausts its
///   retries (retryable - call again)
/// - `Codec` if sealing fails
pub fn assign_and_seal<R: RngCore + CryptoRng>(
    names: &[String],
    rng: &mut R,
) -> Result<BTreeMap<String, ShareableRef>, ExchangeError> {
    let arrangement = draw_arrangement(names, rng)?;
    seal_arrangement(&arrangement, rng)
}

/// Recover a receiver name from a shareable reference.
///
/// The recipient side of the exchange.
///
/// # Errors
///
/// - `Codec` if the reference is malformed or fails to decrypt ("bad link")
pub fn open_assignment(reference: &ShareableRef) -> Result<String, ExchangeError> {
    Ok(reference.open()?)
}
