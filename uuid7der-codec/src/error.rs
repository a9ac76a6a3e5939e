//! Error re-exports
//!
//! The error taxonomy is defined once in `uuid7der-core`; this module
//! re-exports it so codec code and callers can name errors locally.

pub use uuid7der_core::error::{DerError, DerResult};
