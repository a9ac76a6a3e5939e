//! UUIDv7 field model
//!
//! A UUIDv7 lays its 128 bits out as:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |       rand_a          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The types here cover the value's lifecycle: [`UuidV7Seeds`] assembles a
//! fresh value from a timestamp and randomness, [`UnverifiedUuidV7`] splits
//! any `u128` into the field layout without judgement, [`RawUuidV7`] is the
//! plain parts struct for inspection, and [`UuidV7`] is the validated form
//! (version 7, variant 2) constructed via `TryFrom`.

pub mod seeds;
pub mod unverified;
pub mod validated;

pub use seeds::UuidV7Seeds;
pub use unverified::{RawUuidV7, UnverifiedUuidV7};
pub use validated::UuidV7;
