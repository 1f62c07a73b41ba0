//! Envelope encryption for assignment delivery
//!
//! One envelope per giver: a fresh AES-128 key, a fresh one-block IV, and
//! the CBC ciphertext of the receiver's name. [`seal`] and [`open`] are the
//! two ends of the link lifecycle; [`ShareableRef`] is the two-string wire
//! form that travels inside a link.

pub mod error;
pub mod seal;
pub mod wire;

pub use error::CodecError;
pub use seal::{BLOCK_SIZE, KEY_SIZE, SealedName, open, seal};
pub use wire::ShareableRef;
