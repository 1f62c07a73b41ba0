//! Secret Santa confidential delivery codec
//!
//! Encrypts a single receiver name into a self-contained bundle that can be
//! carried as two opaque strings, with no server or account involved. The
//! inverse operation recovers the name from those two strings alone.
//!
//! # Wire format
//!
//! ```text
//! receiver name (UTF-8)
//!        │
//!        ▼ AES-128-CBC + PKCS#7, fresh key and IV per call
//! iv (16 bytes) ‖ ciphertext
//!        │
//!        ▼ base64
//! combined string          key string = base64(16-byte raw key)
//! ```
//!
//! The two strings together are necessary and sufficient to recover the
//! plaintext; either alone reveals nothing. The byte order (IV first,
//! ciphertext after) is an external format and must not change, or
//! previously generated links stop working.
//!
//! # Security
//!
//! - Fresh randomness: every seal draws a new 128-bit key and a new 16-byte
//!   IV from the caller's RNG; neither is ever reused or derived from the
//!   plaintext or from any prior bundle
//! - No integrity: CBC provides confidentiality only. Tampered or truncated
//!   input surfaces as a whole-operation failure ("bad link"), never as
//!   partial plaintext
//! - Key material in [`SealedName`] is zeroized on drop
//!
//! All functions are pure - random bytes must be provided by the caller.
//! This enables deterministic testing with seeded RNGs.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod envelope;

pub use envelope::{BLOCK_SIZE, CodecError, KEY_SIZE, SealedName, ShareableRef, open, seal};
