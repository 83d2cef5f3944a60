use anyhow::{Context, Result};
use clap::Subcommand;
use wasm_bech32::{lnurl, Lnurl};

#[derive(Subcommand)]
pub enum LnurlCommand {
    /// Encode an http(s) URL as an LNURL
    Encode {
        /// The URL to encode
        url: String,
        /// Print the uppercase form used in QR codes
        #[arg(long)]
        qr: bool,
    },
    /// Decode an LNURL to the URL it carries
    Decode {
        /// The LNURL to decode
        lnurl: String,
    },
}

pub fn handle_command(command: LnurlCommand) -> Result<()> {
    match command {
        LnurlCommand::Encode { url, qr } => {
            let encoded = Lnurl::from_url(&url).context("Failed to encode URL")?;
            if qr {
                println!("{}", encoded.to_qr());
            } else {
                println!("{}", encoded);
            }
            Ok(())
        }
        LnurlCommand::Decode { lnurl: text } => {
            let url = lnurl::decode(&text).context("Failed to decode LNURL")?;
            println!("{}", url);
            Ok(())
        }
    }
}
