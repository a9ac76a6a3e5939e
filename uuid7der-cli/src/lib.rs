//! Handler modules for the uuid7der CLI
//!
//! Each subcommand lives in its own module with a clap `Args` struct and
//! a `run` function; `main.rs` only parses and dispatches. Library errors
//! cross into `anyhow` here, with enough context to point at the failing
//! input.

pub mod decode;
pub mod generate;
pub mod input;
pub mod inspect;
