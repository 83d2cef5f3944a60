//! Append-then-consume bit buffer used for all 8-bit/5-bit repacking.
//!
//! Groups are written and read most-significant bit first, so writing bytes and
//! reading 5-bit groups back is exactly the bech32 "convert bits" operation.

use crate::error::BitStreamError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    buf: Vec<u8>,
    /// Number of bits written.
    len: usize,
    /// Number of bits consumed by reads.
    pos: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_bits(bits: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
            pos: 0,
        }
    }

    /// Append the low `width` bits of `value`, MSB first.
    ///
    /// Bits of `value` above `width` are ignored.
    pub fn write_bits(&mut self, value: u32, width: u32) {
        debug_assert!((1..=32).contains(&width), "bit width out of range");
        for i in (0..width).rev() {
            self.push_bit((value >> i) & 1 == 1);
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        if self.len % 8 == 0 {
            // byte aligned, copy straight through
            self.buf.truncate(self.len / 8);
            self.buf.extend_from_slice(bytes);
            self.len += bytes.len() * 8;
        } else {
            for &byte in bytes {
                self.write_bits(byte as u32, 8);
            }
        }
    }

    /// Remove and return the next `width` bits as an unsigned integer, MSB first.
    ///
    /// On underflow nothing is consumed.
    pub fn read_bits(&mut self, width: u32) -> Result<u32, BitStreamError> {
        debug_assert!((1..=32).contains(&width), "bit width out of range");
        let remaining = self.remaining_bit_length();
        if width as usize > remaining {
            return Err(BitStreamError::Underflow {
                requested: width,
                remaining,
            });
        }

        let mut value: u64 = 0;
        for _ in 0..width {
            value = (value << 1) | self.bit_at(self.pos) as u64;
            self.pos += 1;
        }
        Ok(value as u32)
    }

    pub fn remaining_bit_length(&self) -> usize {
        self.len - self.pos
    }

    fn push_bit(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.buf.push(0);
        }
        if bit {
            let last = self.buf.len() - 1;
            self.buf[last] |= 0x80 >> offset;
        }
        self.len += 1;
    }

    fn bit_at(&self, index: usize) -> u8 {
        (self.buf[index / 8] >> (7 - index % 8)) & 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_read_back_as_five_bit_groups() {
        // 0xFF 0x01 = 11111111 00000001
        let mut stream = BitStream::new();
        stream.write_bytes(&[0xff, 0x01]);
        assert_eq!(stream.remaining_bit_length(), 16);

        assert_eq!(stream.read_bits(5).unwrap(), 31);
        assert_eq!(stream.read_bits(5).unwrap(), 28);
        assert_eq!(stream.read_bits(5).unwrap(), 0);
        assert_eq!(stream.remaining_bit_length(), 1);
        assert_eq!(stream.read_bits(1).unwrap(), 1);
        assert_eq!(stream.remaining_bit_length(), 0);
    }

    #[test]
    fn test_five_bit_groups_read_back_as_bytes() {
        let mut stream = BitStream::new();
        for v in [31u32, 28, 0, 16] {
            stream.write_bits(v, 5);
        }
        assert_eq!(stream.read_bits(8).unwrap(), 0xff);
        assert_eq!(stream.read_bits(8).unwrap(), 0x01);
        assert_eq!(stream.remaining_bit_length(), 4);
    }

    #[test]
    fn test_value_is_truncated_to_width() {
        let mut stream = BitStream::new();
        stream.write_bits(0b1110_0001, 5);
        assert_eq!(stream.read_bits(5).unwrap(), 0b00001);
    }

    #[test]
    fn test_thirty_and_thirty_two_bit_groups() {
        let mut stream = BitStream::new();
        stream.write_bits(0x2bc830a3, 30);
        stream.write_bits(0xdeadbeef, 32);
        assert_eq!(stream.remaining_bit_length(), 62);
        assert_eq!(stream.read_bits(30).unwrap(), 0x2bc830a3);
        assert_eq!(stream.read_bits(32).unwrap(), 0xdeadbeef);
    }

    #[test]
    fn test_unaligned_write_bytes() {
        let mut stream = BitStream::new();
        stream.write_bits(1, 3);
        stream.write_bytes(&[0xab, 0xcd]);
        assert_eq!(stream.remaining_bit_length(), 19);
        assert_eq!(stream.read_bits(3).unwrap(), 1);
        assert_eq!(stream.read_bits(16).unwrap(), 0xabcd);
    }

    #[test]
    fn test_write_after_partial_read() {
        let mut stream = BitStream::new();
        stream.write_bytes(&[0x80]);
        assert_eq!(stream.read_bits(1).unwrap(), 1);
        stream.write_bytes(&[0x7f]);
        assert_eq!(stream.remaining_bit_length(), 15);
        assert_eq!(stream.read_bits(7).unwrap(), 0);
        assert_eq!(stream.read_bits(8).unwrap(), 0x7f);
    }

    #[test]
    fn test_underflow_consumes_nothing() {
        let mut stream = BitStream::new();
        stream.write_bits(0b101, 3);

        let err = stream.read_bits(5).unwrap_err();
        assert_eq!(
            err,
            BitStreamError::Underflow {
                requested: 5,
                remaining: 3
            }
        );
        assert_eq!(stream.remaining_bit_length(), 3);
        assert_eq!(stream.read_bits(3).unwrap(), 0b101);
    }

    #[test]
    fn test_empty_stream() {
        let mut stream = BitStream::with_capacity_bits(40);
        assert_eq!(stream.remaining_bit_length(), 0);
        assert!(stream.read_bits(1).is_err());
    }
}
