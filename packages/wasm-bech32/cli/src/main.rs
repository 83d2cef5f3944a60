use anyhow::Result;
use clap::{Parser, Subcommand};

mod bech32;
mod input;
mod lnurl;

#[derive(Parser)]
#[command(name = "wasm-bech32-cli")]
#[command(about = "CLI tool for Bech32/Bech32m and LNURL encoding", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a payload as a bech32 string
    Encode(bech32::EncodeArgs),
    /// Decode a bech32 string to its prefix and payload
    Decode(bech32::DecodeArgs),
    /// LNURL (LUD-01) encoding and decoding
    Lnurl {
        #[command(subcommand)]
        command: lnurl::LnurlCommand,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => bech32::handle_encode(args),
        Commands::Decode(args) => bech32::handle_decode(args),
        Commands::Lnurl { command } => lnurl::handle_command(command),
    }
}
