//! Two-string wire form for shareable links
//!
//! The excluded UI layer carries these strings as URL query parameters; this
//! module only fixes their content and encoding.

use super::{
    error::CodecError,
    seal::{BLOCK_SIZE, SealedName, open},
};

/// The two opaque strings that make up one giver's link.
///
/// `combined` is base64 of `iv ‖ ciphertext`; `key` is base64 of the raw
/// 16-byte key. Together they are necessary and sufficient to recover the
/// receiver's name; either alone reveals nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareableRef {
    /// Base64 of `iv ‖ ciphertext`
    pub combined: String,
    /// Base64 of the raw symmetric key
    pub key: String,
}

impl ShareableRef {
    /// Package a sealed name into its wire form.
    pub fn new(sealed: &SealedName) -> Self {
        Self { combined: sealed.combined_b64(), key: sealed.key_b64() }
    }

    /// Recover the receiver's name from this reference.
    ///
    /// # Errors
    ///
    /// Same as [`open`].
    pub fn open(&self) -> Result<String, CodecError> {
        open(&self.combined, &self.key)
    }
}

/// Split decoded combined bytes into IV and ciphertext.
///
/// First [`BLOCK_SIZE`] bytes are the IV; the remainder is the ciphertext,
/// which must be a positive multiple of the block size for CBC to accept
/// it.
pub(crate) fn split_combined(bytes: &[u8]) -> Result<([u8; BLOCK_SIZE], &[u8]), CodecError> {
    if bytes.len() < BLOCK_SIZE {
        return Err(CodecError::Malformed {
            reason: format!("{} bytes cannot hold a {BLOCK_SIZE}-byte IV", bytes.len()),
        });
    }

    let (iv_bytes, ciphertext) = bytes.split_at(BLOCK_SIZE);
    let Ok(iv) = <[u8; BLOCK_SIZE]>::try_from(iv_bytes) else {
        unreachable!("split_at yields exactly BLOCK_SIZE bytes");
    };

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CodecError::Malformed {
            reason: format!("ciphertext of {} bytes is not whole blocks", ciphertext.len()),
        });
    }

    Ok((iv, ciphertext))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{super::seal::seal, *};

    #[test]
    fn reference_roundtrip() {
        let mut rng = StdRng::seed_from_u64(1);
        let sealed = seal("Carol", &mut rng).unwrap();

        let reference = ShareableRef::new(&sealed);
        assert_eq!(reference.open().unwrap(), "Carol");
    }

    #[test]
    fn combined_starts_with_iv() {
        let mut rng = StdRng::seed_from_u64(2);
        let sealed = seal("Carol", &mut rng).unwrap();

        let mut expected = sealed.iv().to_vec();
        expected.extend_from_slice(sealed.ciphertext());

        let (iv, ciphertext) = split_combined(&expected).unwrap();
        assert_eq!(&iv, sealed.iv());
        assert_eq!(ciphertext, sealed.ciphertext());
    }

    #[test]
    fn split_rejects_short_input() {
        let result = split_combined(&[0u8; 10]);
        assert!(matches!(result, Err(CodecError::Malformed { .. })));
    }

    #[test]
    fn split_rejects_empty_ciphertext() {
        // exactly one block: an IV with nothing after it
        let result = split_combined(&[0u8; BLOCK_SIZE]);
        assert!(matches!(result, Err(CodecError::Malformed { .. })));
    }

    #[test]
    fn split_rejects_ragged_ciphertext() {
        let result = split_combined(&[0u8; BLOCK_SIZE + 20]);
        assert!(matches!(result, Err(CodecError::Malformed { .. })));
    }
}
