//! Decode subcommand
//!
//! Strict-decodes one DER record and prints its JER text. This replaces
//! the asn1tools leg of the original shell pipeline.

use anyhow::{Context, Result};
use clap::Args;
use uuid7der_codec::{der, jer};

use crate::input::DerInput;

/// Arguments for the decode subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub source: DerInput,
}

pub fn run(args: DecodeArgs) -> Result<()> {
    let bytes = args.source.read()?;
    let record = der::decode(&bytes)
        .context("input is not a canonical DER-encoded UUIDv7 record")?;
    tracing::debug!(uuid = %record, "decoded record");

    // The renderer emits no newline; line framing is this layer's call.
    println!("{}", jer::render(&record));
    Ok(())
}
