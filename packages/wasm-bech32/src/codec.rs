//! Bech32 (BIP-173) and Bech32m (BIP-350) encoding and decoding of arbitrary byte payloads.
//!
//! An encoded string is `prefix + '1' + data + checksum`:
//! - the data part is the payload repacked into 5-bit groups, zero-padded at the end;
//! - the checksum part is always 6 characters (30 bits).
//!
//! # Checksum
//!
//! The checksum is a BCH code over GF(32) computed by [`polymod`]. The prefix is fed in
//! first through [`expand_prefix`]:
//!
//! ```text
//! prefix   = "bc"
//! expanded = [c >> 5 for c in prefix] + [0] + [c & 31 for c in prefix]
//!          = [3, 3] + [0] + [2, 3]
//! ```
//!
//! To create a checksum, the polymod of `expanded ++ data ++ [0; 6]` is XORed with the
//! variant constant. Substituting the result for the six zero groups makes the polymod of
//! the whole string equal that constant, and that equality is what decoding checks.
//!
//! | Variant | Constant     |
//! |---------|--------------|
//! | Bech32  | `1`          |
//! | Bech32m | `0x2bc830a3` |
//!
//! # Decoding rules
//! - the separator is the *last* `'1'` (the prefix itself may not contain one)
//! - at least 6 characters must follow it
//! - the string is all lowercase or all uppercase, never mixed
//! - leftover padding bits after the last whole byte must be zero (fewer than 5 of them)

use crate::alphabet::{bytes_to_groups, decode_chars, encode_groups, groups_to_bytes};
use crate::bitstream::BitStream;
use crate::error::{ConstructionError, DecodeError};
use crate::variant::Variant;

pub const SEPARATOR: char = '1';

/// Length of the checksum part, in characters.
pub const CHECKSUM_LENGTH: usize = 6;

const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Prefix characters allowed by BIP-173: printable US-ASCII.
const PREFIX_CHARS: std::ops::RangeInclusive<u32> = 33..=126;

/// A successfully decoded string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Lowercase human readable prefix
    pub prefix: String,
    pub payload: Vec<u8>,
}

/// Bech32/Bech32m codec bound to an optional prefix.
///
/// With a prefix, decoding only accepts strings carrying that prefix. Without one
/// (see [`Bech32Codec::any`]), decoding accepts any prefix and encoding uses the empty
/// prefix. `Some("")` is a real, empty prefix and is not the same as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32Codec {
    prefix: Option<String>,
    variant: Variant,
}

impl Bech32Codec {
    /// Create a codec. The prefix is stored lowercase.
    pub fn new(prefix: Option<&str>, variant: Variant) -> Result<Self, ConstructionError> {
        let prefix = prefix.map(normalize_prefix).transpose()?;
        Ok(Self { prefix, variant })
    }

    pub fn bech32(prefix: &str) -> Result<Self, ConstructionError> {
        Self::new(Some(prefix), Variant::Bech32)
    }

    pub fn bech32m(prefix: &str) -> Result<Self, ConstructionError> {
        Self::new(Some(prefix), Variant::Bech32m)
    }

    /// A codec that accepts any prefix when decoding.
    pub const fn any(variant: Variant) -> Self {
        Self {
            prefix: None,
            variant,
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Encode `payload`. Always lowercase.
    pub fn encode(&self, payload: &[u8]) -> String {
        let prefix = self.prefix.as_deref().unwrap_or("");

        let mut groups = bytes_to_groups(payload);
        let checksum = self.checksum_of_groups(prefix, &groups);

        let mut stream = BitStream::with_capacity_bits(30);
        stream.write_bits(checksum, 30);
        while let Ok(v) = stream.read_bits(5) {
            groups.push(v as u8);
        }

        let mut result = String::with_capacity(prefix.len() + 1 + groups.len());
        result.push_str(prefix);
        result.push(SEPARATOR);
        result.push_str(&encode_groups(&groups).expect("bit stream yields 5-bit groups"));

        log::trace!(
            "encoded {} payload bytes as {} characters ({})",
            payload.len(),
            result.len(),
            self.variant
        );
        result
    }

    /// Decode `code`, checking prefix, case, charset, checksum and padding in that order.
    pub fn decode(&self, code: &str) -> Result<Decoded, DecodeError> {
        self.decode_checked(code).map_err(|e| {
            log::debug!("rejected {} string: {}", self.variant, e);
            e
        })
    }

    pub fn is_valid(&self, code: &str) -> bool {
        self.decode(code).is_ok()
    }

    /// Checksum for `payload` under `prefix`, as a 30-bit value.
    pub fn create_checksum(&self, prefix: &str, payload: &[u8]) -> u32 {
        self.checksum_of_groups(prefix, &bytes_to_groups(payload))
    }

    /// Check data groups that end in their 6 checksum groups.
    pub fn verify_checksum(&self, prefix: &str, groups: &[u8]) -> bool {
        let mut values = expand_prefix(prefix);
        values.extend_from_slice(groups);
        polymod(&values) == self.variant.constant()
    }

    fn checksum_of_groups(&self, prefix: &str, data: &[u8]) -> u32 {
        let mut values = expand_prefix(prefix);
        values.extend_from_slice(data);
        values.extend_from_slice(&[0; CHECKSUM_LENGTH]);
        polymod(&values) ^ self.variant.constant()
    }

    fn decode_checked(&self, code: &str) -> Result<Decoded, DecodeError> {
        let sep = code.rfind(SEPARATOR).ok_or(DecodeError::MissingSeparator)?;
        let (prefix, body) = (&code[..sep], &code[sep + 1..]);

        let data_len = body.chars().count();
        if data_len < CHECKSUM_LENGTH {
            return Err(DecodeError::TooShort { data_len });
        }

        if let Some(expected) = &self.prefix {
            if !prefix.eq_ignore_ascii_case(expected) {
                return Err(DecodeError::PrefixMismatch {
                    expected: expected.clone(),
                    found: prefix.to_string(),
                });
            }
        }

        // ASCII case mapping keeps byte offsets, so `sep` stays valid
        let lower = code.to_ascii_lowercase();
        if code != lower && code != code.to_ascii_uppercase() {
            return Err(DecodeError::MixedCase);
        }
        let (prefix, body) = (&lower[..sep], &lower[sep + 1..]);

        if let Some(c) = prefix.chars().find(|&c| !PREFIX_CHARS.contains(&(c as u32))) {
            return Err(DecodeError::InvalidCharacter(c));
        }

        let mut groups = decode_chars(body)?;
        if !self.verify_checksum(prefix, &groups) {
            return Err(DecodeError::ChecksumMismatch);
        }

        groups.truncate(groups.len() - CHECKSUM_LENGTH);
        let payload = groups_to_bytes(&groups)?;

        Ok(Decoded {
            prefix: prefix.to_string(),
            payload,
        })
    }
}

fn normalize_prefix(prefix: &str) -> Result<String, ConstructionError> {
    if prefix.contains(SEPARATOR) {
        return Err(ConstructionError::InvalidPrefix(format!(
            "'{}' contains the separator '{}'",
            prefix, SEPARATOR
        )));
    }
    if let Some(c) = prefix.chars().find(|&c| !PREFIX_CHARS.contains(&(c as u32))) {
        return Err(ConstructionError::InvalidPrefix(format!(
            "'{}' contains {:?}, only printable ASCII is allowed",
            prefix, c
        )));
    }
    Ok(prefix.to_ascii_lowercase())
}

/// Expand the prefix for checksum calculation: the high 3 bits of every character, a zero
/// group, then the low 5 bits of every character.
pub fn expand_prefix(prefix: &str) -> Vec<u8> {
    let bytes = prefix.as_bytes();
    let mut result = Vec::with_capacity(bytes.len() * 2 + 1);
    result.extend(bytes.iter().map(|b| b >> 5));
    result.push(0);
    result.extend(bytes.iter().map(|b| b & 0x1f));
    result
}

/// The bech32 checksum reduction over a sequence of 5-bit values.
///
/// 1. Start with `chk = 1`
/// 2. For each value `v`:
///    - take the top 5 bits of the 30-bit state: `b = chk >> 25`
///    - shift in the value: `chk = (chk & 0x1ffffff) << 5 ^ v`
///    - XOR in `GENERATOR[i]` for every set bit `i` of `b`
pub fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let b = chk >> 25;
        chk = ((chk & 0x1ffffff) << 5) ^ (v as u32);

        for (i, g) in GENERATOR.iter().enumerate() {
            if (b >> i) & 1 != 0 {
                chk ^= *g;
            }
        }
    }
    chk
}
