//! Error types for arrangement generation

use thiserror::Error;

/// Errors from arrangement generation and validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArrangementError {
    /// Roster has too few participants for a derangement to exist
    #[error("at least 2 participants required, got {len}")]
    RosterTooSmall {
        /// Number of participants supplied
        len: usize,
    },

    /// Roster contains the same name more than once
    ///
    /// Duplicates can make a valid derangement impossible, so they are
    /// rejected before any search is attempted.
    #[error("duplicate participant name: {name}")]
    DuplicateName {
        /// The name that appeared more than once
        name: String,
    },

    /// The randomized hat draw gave up after its retry budget
    #[error("no valid arrangement found within {attempts} attempts")]
    ExhaustedRetries {
        /// Number of full draw attempts made
        attempts: u32,
    },

    /// The deterministic search proved no derangement exists
    #[error("no derangement exists for the given givers and receivers")]
    NoSolution,

    /// Giver and receiver pools differ in length
    #[error("givers and receivers must be the same length, got {givers} and {receivers}")]
    MismatchedPools {
        /// Number of givers supplied
        givers: usize,
        /// Number of receivers supplied
        receivers: usize,
    },
}

impl ArrangementError {
    /// Returns true if regenerating with the same input may succeed.
    ///
    /// `ExhaustedRetries` is a probabilistic failure of the hat draw and a
    /// fresh call can succeed. Everything else requires the caller to change
    /// its input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ExhaustedRetries { .. })
    }
}
