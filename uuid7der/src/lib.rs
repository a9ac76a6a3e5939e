//! uuid7der - UUIDv7 values as strict ASN.1 DER and JER text
//!
//! This library encodes UUIDv7 values as the canonical DER form of
//! `SEQUENCE { INTEGER high, INTEGER low }`, strict-decodes such records,
//! and projects them as JSON Encoding Rules text.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `uuid7der-core`: error taxonomy, wire record, UUIDv7 field model
//! - `uuid7der-codec`: DER encoder/decoder and JER projector
//! - `uuid7der-cli`: the `uuid7der` binary (gen / decode / inspect)
//!
//! # Usage
//!
//! ```
//! use uuid7der::{UuidV7, UuidV7Record, der, jer};
//!
//! let record = UuidV7Record::from(UuidV7::now());
//! let bytes = der::encode(&record);
//! let text = jer::render(&der::decode(&bytes).unwrap());
//! assert!(text.starts_with("{\"high\":"));
//! ```

// Re-export core types
pub use uuid7der_core::{DerError, DerResult, UuidV7Error};
pub use uuid7der_core::{RawUuidV7, UnverifiedUuidV7, UuidV7, UuidV7Record, UuidV7Seeds};

// Re-export the codecs
pub mod der {
    pub use uuid7der_codec::der::*;
}

pub mod jer {
    pub use uuid7der_codec::jer::*;
}
