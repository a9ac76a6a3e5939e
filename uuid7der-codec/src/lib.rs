//! DER and JER codecs for the UUIDv7 wire record
//!
//! This crate provides the two encodings of `UuidV7Record`:
//!
//! - [`der`]: the Distinguished Encoding Rules codec for
//!   `SEQUENCE { INTEGER high, INTEGER low }`. Encoding always produces
//!   the unique minimal DER form; decoding is strict and rejects every
//!   non-canonical alternative with an offset-carrying error.
//! - [`jer`]: the JSON Encoding Rules projection of the same record as a
//!   two-member JSON object.
//!
//! Core path: bytes → [`der::decode`] → `UuidV7Record` → [`jer::render`]
//! → text. Both directions are pure, synchronous functions with no shared
//! state; they can be called concurrently without coordination.

pub mod der;
pub mod error;
pub mod jer;

pub use der::{DerDecoder, DerEncoder, DerLength, DerTag, decode, encode};
pub use error::{DerError, DerResult};
pub use jer::{JER_SAFE_INTEGER_MAX, jer_value, render};
