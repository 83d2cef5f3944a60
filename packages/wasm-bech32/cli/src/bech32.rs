use anyhow::{Context, Result};
use base64::Engine;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use wasm_bech32::{Bech32Codec, Variant};

use crate::input::{decode_input, read_input_bytes};

#[derive(Args)]
pub struct EncodeArgs {
    /// Payload file, or "-" for stdin. Hex and base64 text is decoded first
    pub input: PathBuf,
    /// Human readable prefix
    #[arg(short, long)]
    pub prefix: String,
    /// Checksum variant (bech32, bech32m)
    #[arg(short, long, default_value = "bech32")]
    pub variant: Variant,
    /// Encode the input bytes as they are, without hex/base64 detection
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// The bech32 string to decode
    pub text: String,
    /// Expected prefix. Any prefix is accepted when omitted
    #[arg(short, long)]
    pub prefix: Option<String>,
    /// Checksum variant (bech32, bech32m)
    #[arg(short, long, default_value = "bech32")]
    pub variant: Variant,
    /// How to print the payload
    #[arg(short, long, value_enum, default_value_t = PayloadFormat::Hex)]
    pub format: PayloadFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadFormat {
    Hex,
    Base64,
    Utf8,
}

pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let input = read_input_bytes(&args.input)?;
    let payload = if args.raw {
        input
    } else {
        decode_input(&input)
    };

    let codec = Bech32Codec::new(Some(args.prefix.as_str()), args.variant).context("Invalid prefix")?;
    log::debug!("encoding {} payload bytes as {}", payload.len(), args.variant);
    println!("{}", codec.encode(&payload));
    Ok(())
}

pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let codec = Bech32Codec::new(args.prefix.as_deref(), args.variant).context("Invalid prefix")?;
    let decoded = codec
        .decode(&args.text)
        .with_context(|| format!("Failed to decode {} string", args.variant))?;
    println!("{}", decoded.prefix);
    println!("{}", format_payload(&decoded.payload, args.format)?);
    Ok(())
}

pub fn format_payload(payload: &[u8], format: PayloadFormat) -> Result<String> {
    match format {
        PayloadFormat::Hex => Ok(hex::encode(payload)),
        PayloadFormat::Base64 => Ok(base64::engine::general_purpose::STANDARD.encode(payload)),
        PayloadFormat::Utf8 => {
            String::from_utf8(payload.to_vec()).context("Payload is not valid UTF-8")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_payload() {
        assert_eq!(format_payload(b"hi", PayloadFormat::Hex).unwrap(), "6869");
        assert_eq!(format_payload(b"hi", PayloadFormat::Base64).unwrap(), "aGk=");
        assert_eq!(format_payload(b"hi", PayloadFormat::Utf8).unwrap(), "hi");
        assert!(format_payload(&[0xff], PayloadFormat::Utf8).is_err());
        assert_eq!(format_payload(&[], PayloadFormat::Hex).unwrap(), "");
    }
}
