//! Seal and open operations for assignment envelopes

use base64::{Engine as _, engine::general_purpose::STANDARD};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::{error::CodecError, wire};

/// Raw symmetric key size in bytes (AES-128).
pub const KEY_SIZE: usize = 16;

/// Cipher block size in bytes; the IV is exactly one block.
pub const BLOCK_SIZE: usize = 16;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// A sealed receiver name: fresh key, fresh IV, and CBC ciphertext.
///
/// Each field is exposed as an independently base64-encoded string. The key
/// is zeroized when the value is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct SealedName {
    key: [u8; KEY_SIZE],
    iv: [u8; BLOCK_SIZE],
    ciphertext: Vec<u8>,
}

impl SealedName {
    /// Raw 16-byte symmetric key.
    pub fn key(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    /// Raw one-block IV.
    pub fn iv(&self) -> &[u8; BLOCK_SIZE] {
        &self.iv
    }

    /// Raw CBC ciphertext (always a positive multiple of [`BLOCK_SIZE`]).
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Base64 of the raw key.
    pub fn key_b64(&self) -> String {
        STANDARD.encode(self.key)
    }

    /// Base64 of the IV.
    pub fn iv_b64(&self) -> String {
        STANDARD.encode(self.iv)
    }

    /// Base64 of the ciphertext alone.
    pub fn ciphertext_b64(&self) -> String {
        STANDARD.encode(&self.ciphertext)
    }

    /// Base64 of `iv ‖ ciphertext`, the combined wire string.
    ///
    /// This byte order is an external format: [`open`] and previously
    /// generated links both depend on the IV occupying the first block.
    pub fn combined_b64(&self) -> String {
        let mut combined = Vec::with_capacity(BLOCK_SIZE + self.ciphertext.len());
        combined.extend_from_slice(&self.iv);
        combined.extend_from_slice(&self.ciphertext);
        STANDARD.encode(combined)
    }
}

impl std::fmt::Debug for SealedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealedName")
            .field("key", &"<redacted>")
            .field("iv", &self.iv)
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

// Zeroize key material; iv and ciphertext travel on the wire anyway
impl Drop for SealedName {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Seal a receiver name into a fresh envelope.
///
/// Draws a new 128-bit key and a new one-block IV from `rng` on every call,
/// then CBC-encrypts the UTF-8 plaintext under them with PKCS#7 padding.
/// Two seals of the same plaintext share neither key, IV, nor ciphertext.
///
/// # Errors
///
/// - `EmptyPlaintext` if there is nothing to encrypt
///
/// # Security
///
/// Caller MUST provide a cryptographically secure RNG in production
/// (e.g. `rand::rngs::OsRng`); seeded RNGs are for tests only.
pub fn seal<R: RngCore + CryptoRng>(
    plaintext: &str,
    rng: &mut R,
) -> Result<SealedName, CodecError> {
    if plaintext.is_empty() {
        return Err(CodecError::EmptyPlaintext);
    }

    let mut key = [0u8; KEY_SIZE];
    rng.fill_bytes(&mut key);
    let mut iv = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut iv);

    let ciphertext = Aes128CbcEnc::new(&key.into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(SealedName { key, iv, ciphertext })
}

/// Open an envelope from its two wire strings.
///
/// Decodes `key` as the raw 16-byte symmetric key and `combined` as
/// `iv ‖ ciphertext`, runs CBC decryption with the extracted IV, and decodes
/// the result as UTF-8.
///
/// # Errors
///
/// - `InvalidKey` if `key` is empty or decodes to anything but 16 bytes
/// - `Encoding` if either string is not valid base64
/// - `Malformed` if the combined bytes cannot hold an IV plus whole blocks
/// - `DecryptionFailed` if the padding check fails or the plaintext is not
///   UTF-8 (corrupted input, tampered bytes, wrong key)
pub fn open(combined: &str, key: &str) -> Result<String, CodecError> {
    if key.is_empty() {
        return Err(CodecError::InvalidKey { actual: 0 });
    }

    let key_bytes = STANDARD.decode(key)?;
    let Ok(key) = <[u8; KEY_SIZE]>::try_from(key_bytes.as_slice()) else {
        return Err(CodecError::InvalidKey { actual: key_bytes.len() });
    };

    let combined_bytes = STANDARD.decode(combined)?;
    let (iv, ciphertext) = wire::split_combined(&combined_bytes)?;

    let plaintext = Aes128CbcDec::new(&key.into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CodecError::DecryptionFailed {
            reason: "padding check failed".to_string(),
        })?;

    String::from_utf8(plaintext).map_err(|_| CodecError::DecryptionFailed {
        reason: "plaintext is not valid UTF-8".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn seal_open_roundtrip() {
        let mut rng = StdRng::seed_from_u64(1);
        let sealed = seal("Alice", &mut rng).unwrap();

        let opened = open(&sealed.combined_b64(), &sealed.key_b64()).unwrap();
        assert_eq!(opened, "Alice");
    }

    #[test]
    fn roundtrip_multibyte_name() {
        let mut rng = StdRng::seed_from_u64(2);
        let sealed = seal("Zoë Åström 🎅", &mut rng).unwrap();

        let opened = open(&sealed.combined_b64(), &sealed.key_b64()).unwrap();
        assert_eq!(opened, "Zoë Åström 🎅");
    }

    #[test]
    fn empty_plaintext_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(seal("", &mut rng), Err(CodecError::EmptyPlaintext)));
    }

    #[test]
    fn fresh_randomness_per_seal() {
        let mut rng = StdRng::seed_from_u64(4);
        let first = seal("Bob", &mut rng).unwrap();
        let second = seal("Bob", &mut rng).unwrap();

        assert_ne!(first.key(), second.key());
        assert_ne!(first.iv(), second.iv());
        assert_ne!(first.ciphertext_b64(), second.ciphertext_b64());
    }

    #[test]
    fn ciphertext_is_whole_blocks() {
        let mut rng = StdRng::seed_from_u64(5);
        // 16-byte plaintext pads to two full blocks under PKCS#7
        let sealed = seal("exactly16bytes!!", &mut rng).unwrap();
        assert_eq!(sealed.ciphertext().len(), 32);
        assert_eq!(sealed.ciphertext().len() % BLOCK_SIZE, 0);
    }

    #[test]
    fn empty_key_rejected() {
        let result = open("aGVsbG8=", "");
        assert!(matches!(result, Err(CodecError::InvalidKey { actual: 0 })));
    }

    #[test]
    fn short_key_rejected() {
        // 15 raw bytes
        let key = STANDARD.encode([0u8; 15]);
        let result = open("aGVsbG8=", &key);
        assert!(matches!(result, Err(CodecError::InvalidKey { actual: 15 })));
    }

    #[test]
    fn long_key_rejected() {
        let key = STANDARD.encode([0u8; 32]);
        let result = open("aGVsbG8=", &key);
        assert!(matches!(result, Err(CodecError::InvalidKey { actual: 32 })));
    }

    #[test]
    fn garbage_base64_rejected() {
        let key = STANDARD.encode([0u8; 16]);
        assert!(matches!(open("not!!base64", &key), Err(CodecError::Encoding(_))));
        assert!(matches!(open("aGVsbG8=", "not!!base64"), Err(CodecError::Encoding(_))));
    }

    #[test]
    fn truncated_combined_rejected() {
        let mut rng = StdRng::seed_from_u64(6);
        let sealed = seal("Alice", &mut rng).unwrap();

        // keep the IV but chop the ciphertext mid-block
        let mut bytes = sealed.iv().to_vec();
        bytes.extend_from_slice(&sealed.ciphertext()[..7]);
        let combined = STANDARD.encode(bytes);

        let result = open(&combined, &sealed.key_b64());
        assert!(matches!(result, Err(CodecError::Malformed { .. })));
    }

    #[test]
    fn wrong_key_fails_decryption() {
        let mut rng = StdRng::seed_from_u64(7);
        let sealed = seal("Alice", &mut rng).unwrap();
        let wrong_key = STANDARD.encode([0x42u8; KEY_SIZE]);

        let result = open(&sealed.combined_b64(), &wrong_key);
        assert!(result.is_err());
    }

    #[test]
    fn tampered_ciphertext_never_yields_plaintext() {
        let mut rng = StdRng::seed_from_u64(8);
        let sealed = seal("Alice", &mut rng).unwrap();

        let mut bytes = sealed.iv().to_vec();
        let mut ct = sealed.ciphertext().to_vec();
        ct[0] ^= 0xFF;
        bytes.extend_from_slice(&ct);
        let combined = STANDARD.encode(bytes);

        // CBC has no authentication: tampering either errors out or decrypts
        // to garbage, but can never reproduce the original name.
        let result = open(&combined, &sealed.key_b64());
        assert_ne!(result.ok(), Some("Alice".to_string()));
    }

    #[test]
    fn debug_redacts_key() {
        let mut rng = StdRng::seed_from_u64(9);
        let sealed = seal("Alice", &mut rng).unwrap();
        let rendered = format!("{sealed:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains(&format!("{:?}", sealed.key())));
    }
}
