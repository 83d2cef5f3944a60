//! Bech32 (BIP-173) and Bech32m (BIP-350) encoding of arbitrary byte payloads, with
//! wasm-bindgen bindings and LNURL (LUD-01) helpers.
//!
//! ```rust
//! use wasm_bech32::{Bech32Codec, Variant};
//!
//! let codec = Bech32Codec::new(Some("a"), Variant::Bech32).unwrap();
//! assert_eq!(codec.encode(&[]), "a12uel5l");
//!
//! let decoded = Bech32Codec::any(Variant::Bech32).decode("A12UEL5L").unwrap();
//! assert_eq!(decoded.prefix, "a");
//! assert!(decoded.payload.is_empty());
//! ```

pub mod alphabet;
mod bitstream;
mod codec;
mod error;
pub mod lnurl;
mod variant;
pub mod wasm;

pub use bitstream::BitStream;
pub use codec::{expand_prefix, polymod, Bech32Codec, Decoded, CHECKSUM_LENGTH, SEPARATOR};
pub use error::{AlphabetError, BitStreamError, ConstructionError, DecodeError, LnurlError};
pub use lnurl::Lnurl;
pub use variant::Variant;
pub use wasm::{Bech32Namespace, LnurlNamespace};
