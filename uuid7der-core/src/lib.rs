//! Core types and utilities for the uuid7der workspace
//!
//! This crate provides the fundamental types, error handling, and UUIDv7
//! field model used throughout the uuid7der codecs and tools.

pub mod error;
pub mod record;
pub mod v7;

pub use error::{DerError, DerResult, UuidV7Error};
pub use record::UuidV7Record;
pub use v7::{RawUuidV7, UnverifiedUuidV7, UuidV7, UuidV7Seeds};
