//! Shared DER input plumbing for the decode/inspect subcommands

use anyhow::{Context, Result, bail};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Where one DER-encoded record comes from: a file, inline hex text, or
/// stdin when neither is given.
#[derive(Args, Debug)]
pub struct DerInput {
    /// Read the DER record from this file instead of stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Take the DER record as hex text instead of raw bytes.
    #[arg(long)]
    pub hex: Option<String>,
}

impl DerInput {
    /// Fetch the record bytes from the selected source.
    pub fn read(&self) -> Result<Vec<u8>> {
        match (&self.input, &self.hex) {
            (Some(_), Some(_)) => bail!("--input and --hex are mutually exclusive"),
            (None, Some(text)) => decode_hex(text),
            (Some(path), None) => std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display())),
            (None, None) => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .context("failed to read stdin")?;
                Ok(bytes)
            }
        }
    }
}

fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&compact).context("--hex is not valid hex text")
}
