//! Fuzz target for envelope opening
//!
//! This fuzzer feeds arbitrary combined-ciphertext and key strings to
//! `open`, covering:
//! - Invalid base64 in either string
//! - Combined bytes too short to hold an IV
//! - Ciphertext that is not whole blocks
//! - Random key/IV/ciphertext combinations that fail the padding check
//!
//! The fuzzer should NEVER panic. All invalid inputs should return an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use santa_crypto::open;

fuzz_target!(|input: (&str, &str)| {
    let (combined, key) = input;
    let _ = open(combined, key);
});
