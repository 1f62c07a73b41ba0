//! Error types for the exchange workflow

use santa_core::ArrangementError;
use santa_crypto::CodecError;
use thiserror::Error;

/// Errors from arrangement sealing and opening.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Arrangement generation failed
    #[error(transparent)]
    Arrangement(#[from] ArrangementError),

    /// Sealing or opening an envelope failed
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl ExchangeError {
    /// Returns true if calling again with the same input may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Arrangement(err) => err.is_retryable(),
            Self::Codec(_) => false,
        }
    }
}
