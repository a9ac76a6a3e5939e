//! uuid7der CLI entry point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// UUIDv7 ↔ ASN.1 DER toolbox.
///
/// Generates fresh UUIDv7 values as DER, decodes DER records to JER text,
/// and inspects the UUIDv7 field layout of a record.
#[derive(Parser, Debug)]
#[command(name = "uuid7der", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate a UUIDv7 and write its DER encoding.
    Gen(uuid7der_cli::generate::GenArgs),
    /// Decode one DER record and print JER text.
    Decode(uuid7der_cli::decode::DecodeArgs),
    /// Decode one DER record and print its UUIDv7 field breakdown.
    Inspect(uuid7der_cli::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Gen(args) => uuid7der_cli::generate::run(args),
        Commands::Decode(args) => uuid7der_cli::decode::run(args),
        Commands::Inspect(args) => uuid7der_cli::inspect::run(args),
    }
}
