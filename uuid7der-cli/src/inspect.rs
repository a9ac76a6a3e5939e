//! Inspect subcommand
//!
//! Decodes one DER record, rebuilds the 128-bit value, and prints a
//! human-readable UUIDv7 field breakdown plus the validation verdict.

use anyhow::{Context, Result};
use clap::Args;
use uuid7der_codec::der;
use uuid7der_core::{RawUuidV7, UnverifiedUuidV7, UuidV7};

use crate::input::DerInput;

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: DerInput,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let bytes = args.source.read()?;
    let record = der::decode(&bytes)
        .context("input is not a canonical DER-encoded UUIDv7 record")?;

    let unverified = UnverifiedUuidV7(record.as_u128());
    let raw = RawUuidV7::from(unverified);

    println!("uuid:       {record}");
    println!("unix_ts_ms: {}", raw.unix_ts_ms);
    println!("version:    {}", raw.version);
    println!("rand_a:     0x{:03x}", raw.rand_a);
    println!("variant:    {}", raw.variant);
    println!("rand_b:     0x{:016x}", raw.rand_b);

    match UuidV7::try_from(unverified) {
        Ok(_) => println!("valid:      yes"),
        Err(error) => println!("valid:      no ({error})"),
    }

    Ok(())
}
