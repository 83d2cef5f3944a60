//! The bech32 base-32 alphabet and byte/group repacking.
//!
//! Character lookups go through `bech32::Fe32`, which carries the BIP-173 charset in both
//! directions. Only the field element type is used from that crate: repacking runs through
//! [`BitStream`] so that padding can be checked strictly on decode.

use crate::bitstream::BitStream;
use crate::error::{AlphabetError, DecodeError};
use bech32::Fe32;

/// The 32 data characters, indexed by 5-bit value.
pub const CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Map 5-bit values to their characters.
///
/// A value above 31 is a caller bug and fails with [`AlphabetError::InvariantViolation`].
pub fn encode_groups(values: &[u8]) -> Result<String, AlphabetError> {
    values
        .iter()
        .map(|&v| {
            Fe32::try_from(v)
                .map(Fe32::to_char)
                .map_err(|_| AlphabetError::InvariantViolation(v))
        })
        .collect()
}

/// Map characters (either case) to their 5-bit values.
pub fn decode_chars(s: &str) -> Result<Vec<u8>, DecodeError> {
    s.chars()
        .map(|c| {
            Fe32::from_char(c.to_ascii_lowercase())
                .map(Fe32::to_u8)
                .map_err(|_| DecodeError::InvalidCharacter(c))
        })
        .collect()
}

/// Repack bytes into 5-bit groups, zero-padding the last group.
///
/// # Example
/// `[0xFF, 0x01]` is 16 bits and becomes `[31, 28, 0, 16]`: the trailing `1` is
/// padded to `10000`.
pub fn bytes_to_groups(bytes: &[u8]) -> Vec<u8> {
    let bit_len = bytes.len() * 8;
    let mut stream = BitStream::with_capacity_bits(bit_len + 4);
    stream.write_bytes(bytes);
    if bit_len % 5 != 0 {
        stream.write_bits(0, (5 - bit_len % 5) as u32);
    }

    let mut groups = Vec::with_capacity(bit_len.div_ceil(5));
    while let Ok(v) = stream.read_bits(5) {
        groups.push(v as u8);
    }
    groups
}

/// Repack 5-bit groups into bytes.
///
/// The byte count is implied by the bit count. The leftover bits must be fewer than five
/// and all zero, since an encoder never produces anything else. Anything else fails
/// with [`DecodeError::InvalidPadding`].
pub fn groups_to_bytes(groups: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut stream = BitStream::with_capacity_bits(groups.len() * 5);
    for &g in groups {
        stream.write_bits(g as u32, 5);
    }

    let mut bytes = Vec::with_capacity(groups.len() * 5 / 8);
    while stream.remaining_bit_length() >= 8 {
        let byte = stream
            .read_bits(8)
            .map_err(|_| DecodeError::InvalidPadding)?;
        bytes.push(byte as u8);
    }

    let leftover = stream.remaining_bit_length();
    if leftover >= 5 {
        return Err(DecodeError::InvalidPadding);
    }
    if leftover > 0 {
        let pad = stream
            .read_bits(leftover as u32)
            .map_err(|_| DecodeError::InvalidPadding)?;
        if pad != 0 {
            return Err(DecodeError::InvalidPadding);
        }
    }

    Ok(bytes)
}

/// Encode bytes as data characters, without prefix or checksum.
pub fn encode_bytes(bytes: &[u8]) -> String {
    encode_groups(&bytes_to_groups(bytes)).expect("bit stream yields 5-bit groups")
}

/// Decode data characters back to bytes, without prefix or checksum.
pub fn decode_to_bytes(s: &str) -> Result<Vec<u8>, DecodeError> {
    groups_to_bytes(&decode_chars(s)?)
}
