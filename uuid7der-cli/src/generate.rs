//! Gen subcommand handler
//!
//! Generates a UUIDv7, DER-encodes it, and writes the bytes out. This is
//! the producing end of the pipeline the decode/inspect subcommands read.

use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use uuid7der_codec::der;
use uuid7der_core::{UuidV7, UuidV7Record};

/// Arguments for the gen subcommand.
#[derive(Args, Debug)]
pub struct GenArgs {
    /// Pin the UUIDv7 timestamp to this Unix millisecond value; random
    /// bits stay fresh.
    #[arg(long)]
    pub timestamp_ms: Option<u64>,

    /// Write lowercase hex text with a trailing newline instead of raw
    /// DER bytes.
    #[arg(long)]
    pub hex: bool,

    /// Write to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenArgs) -> Result<()> {
    let uuid = match args.timestamp_ms {
        Some(unix_ts_ms) => UuidV7::at_unix_ms(unix_ts_ms),
        None => UuidV7::now(),
    };
    let record = UuidV7Record::from(uuid);
    let der_bytes = der::encode(&record);
    tracing::debug!(uuid = %record, der_len = der_bytes.len(), "generated UUIDv7");

    if args.hex {
        let mut text = hex::encode(&der_bytes);
        text.push('\n');
        write_out(&args.output, text.as_bytes())
    } else {
        write_out(&args.output, &der_bytes)
    }
}

fn write_out(output: &Option<PathBuf>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            std::io::stdout()
                .write_all(bytes)
                .context("failed to write stdout")
        }
    }
}
