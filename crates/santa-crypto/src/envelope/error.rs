//! Error types for envelope operations

use thiserror::Error;

/// Errors from sealing and opening envelopes.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Seal was called with nothing to encrypt
    #[error("plaintext not specified")]
    EmptyPlaintext,

    /// Key string decoded to the wrong number of bytes (or was empty)
    #[error("invalid key length: expected 16 bytes, got {actual}")]
    InvalidKey {
        /// Decoded key length in bytes
        actual: usize,
    },

    /// A wire string was not valid base64
    #[error("invalid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// Combined ciphertext has an impossible shape
    ///
    /// Either shorter than the one-block IV prefix, or the ciphertext
    /// remainder is not a positive multiple of the cipher block size.
    #[error("malformed combined ciphertext: {reason}")]
    Malformed {
        /// What was wrong with the byte layout
        reason: String,
    },

    /// The cipher rejected the ciphertext/IV/key combination
    ///
    /// Corrupted bytes, a wrong key, or a truncated link all end up here;
    /// CBC cannot distinguish them.
    #[error("decryption failed: {reason}")]
    DecryptionFailed {
        /// Reason for decryption failure
        reason: String,
    },
}

impl CodecError {
    /// Returns true if this failure means the shared link is unusable.
    ///
    /// "Bad link" errors indicate the opaque strings were corrupted or
    /// truncated in transit; the recipient needs a fresh link. The
    /// remaining variants are caller mistakes at seal/open time.
    pub fn is_bad_link(&self) -> bool {
        matches!(
            self,
            Self::Encoding(_) | Self::Malformed { .. } | Self::DecryptionFailed { .. }
        )
    }
}
