//! Secret Santa derangement engine
//!
//! Produces gift-exchange arrangements: every participant gives exactly one
//! gift, receives exactly one gift, and nobody is assigned to themselves
//! (a derangement of the participant set).
//!
//! Two generators are provided:
//!
//! - [`draw_arrangement`]: a randomized "hat draw" that mimics the physical
//!   process of drawing names from a hat and redrawing when someone pulls
//!   their own name. Cheap, but probabilistically incomplete for small
//!   groups, so it retries with a fresh shuffle up to a fixed budget.
//! - [`search_arrangement`]: a deterministic backtracking search that is
//!   complete (finds a derangement whenever one exists). Randomness enters
//!   only through pre-shuffled input, see [`random_search_arrangement`].
//!
//! Both generators gate their output through [`validate`] before returning.
//!
//! All functions are pure and synchronous. Callers provide the random number
//! generator, enabling deterministic seeded tests.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod arrangement;
pub mod error;
pub mod hat;
pub mod search;

pub use arrangement::{Arrangement, check_roster, validate};
pub use error::ArrangementError;
pub use hat::{MAX_ATTEMPTS, draw_arrangement};
pub use search::{random_search_arrangement, search_arrangement};
