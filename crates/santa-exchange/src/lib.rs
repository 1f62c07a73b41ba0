//! Secret Santa exchange workflow
//!
//! Composes the derangement engine with the envelope codec: given a group
//! roster, produce one confidential shareable reference per giver, each
//! independently keyed so that no link reveals anyone else's assignment.
//! Also provides the roster persistence seam the organizer-facing layer
//! loads and saves named groups through.
//!
//! ```text
//! roster ──draw──► arrangement ──seal per giver──► { giver → ShareableRef }
//!                                                          │
//!                               recipient opens their ref ─┘──► receiver name
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod exchange;
pub mod store;

pub use error::ExchangeError;
pub use exchange::{assign_and_seal, open_assignment, seal_arrangement};
pub use store::{
    GroupRecord, MemoryStore, RosterStore, StoreError, groups_from_json, groups_to_json,
};
