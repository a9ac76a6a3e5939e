//! DER (Distinguished Encoding Rules) codec for the UUIDv7 record
//!
//! # ASN.1 DER Encoding Overview
//!
//! DER is the canonical profile of BER: every value has exactly one legal
//! encoding. Each value is a TLV (Tag-Length-Value) triplet:
//!
//! ```text
//! [Tag] [Length] [Value]
//! ```
//!
//! The fixed schema handled here is:
//!
//! ```text
//! UuidV7Record ::= SEQUENCE {
//!     high INTEGER,   -- upper 64 bits, 0..2^64-1
//!     low  INTEGER    -- lower 64 bits, 0..2^64-1
//! }
//! ```
//!
//! On the wire that is `30 <len> 02 <len> <high> 02 <len> <low>`.
//!
//! ## Length Encoding
//!
//! - **Short form** (1 byte): for lengths 0-127, bit 7 = 0.
//! - **Long form**: first byte has bit 7 = 1 and carries the count of
//!   length bytes; the big-endian value follows. DER additionally requires
//!   the minimal number of length bytes and forbids the indefinite form
//!   (0x80) and the reserved byte 0xFF.
//!
//! ## Integer Contents
//!
//! INTEGER contents are big-endian two's complement using the minimum
//! number of bytes: a single 0x00 is prepended only when the top bit of
//! the minimal unsigned form is set, never otherwise.
//!
//! # Strictness
//!
//! The decoder accepts exactly the bytes the encoder produces. Any
//! alternative BER form (non-minimal length, padded or negative integer,
//! trailing bytes) is rejected with a [`DerError`] carrying the byte
//! offset of the violation.
//!
//! [`DerError`]: crate::error::DerError

pub mod decoder;
pub mod encoder;
pub mod types;

pub use decoder::{DerDecoder, decode};
pub use encoder::{DerEncoder, encode};
pub use types::{DerLength, DerTag};
